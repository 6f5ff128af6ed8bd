//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON formatter - outputs segmented lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LineData {
    /// Input file the line came from
    pub file: String,
    /// 1-based line number in that file
    pub line: usize,
    /// Segmented text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, source: &Path, line_number: usize, text: &str) -> Result<()> {
        self.lines.push(LineData {
            file: source.display().to_string(),
            line: line_number,
            text: text.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_records() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_line(Path::new("a.txt"), 1, "אבא ה לך")
                .unwrap();
            formatter.finish().unwrap();
        }

        let records: Vec<LineData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(
            records,
            vec![LineData {
                file: "a.txt".to_string(),
                line: 1,
                text: "אבא ה לך".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
