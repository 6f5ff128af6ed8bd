//! Property tests for segmentation invariants

use pretok_core::{Config, Mode, Segmenter};
use proptest::prelude::*;

fn segmenter(mode: Mode) -> Segmenter {
    Segmenter::with_config(Config::builder().mode(mode).build().unwrap()).unwrap()
}

fn classic_over(lexicon: &str, separator: &str) -> Segmenter {
    let config = Config::builder()
        .lexicon_text(lexicon)
        .mode(Mode::Classic)
        .separator(separator)
        .build()
        .unwrap();
    Segmenter::with_config(config).unwrap()
}

const LETTERS: [char; 5] = ['ו', 'כ', 'ש', 'ה', 'ל'];

fn letters(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(LETTERS.to_vec()), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A surface form with a pattern that spells it, cut at random points
fn spelled_line() -> impl Strategy<Value = String> {
    (letters(1..5), proptest::collection::vec(any::<bool>(), 4)).prop_map(|(surface, cuts)| {
        let mut pattern = String::new();
        for (index, ch) in surface.chars().enumerate() {
            if index > 0 && cuts[index - 1] {
                pattern.push('^');
            }
            pattern.push(ch);
        }
        format!("{surface} {pattern} TAG::")
    })
}

/// A surface form with an arbitrary pattern, usually not spelling it
fn arbitrary_line() -> impl Strategy<Value = String> {
    (letters(1..5), letters(1..4), letters(1..4))
        .prop_map(|(surface, head, tail)| format!("{surface} {head}^{tail} TAG::"))
}

fn generated_lexicon() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![spelled_line(), arbitrary_line()], 1..12)
        .prop_map(|lines| lines.join("\n"))
}

fn lexicon_token() -> impl Strategy<Value = String> {
    (letters(1..8), prop_oneof![Just(""), Just("."), Just(",")])
        .prop_map(|(word, punctuation)| word + punctuation)
}

fn separator() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(vec!["$$", "@", "|", ".", ","])
}

/// Hebrew letters plus a little punctuation
fn hebrew_token() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            (0x05D0u32..=0x05EAu32).prop_map(|c| char::from_u32(c).unwrap()),
            Just('.'),
            Just(','),
        ],
        1..10,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn tokens_without_starter_pass_through(token in "[^\\s]{1,12}") {
        for mode in [Mode::Classic, Mode::Improved] {
            let segmenter = segmenter(mode);
            let starts_with_starter = token
                .chars()
                .next()
                .is_some_and(|ch| segmenter.rules().is_starter(ch));
            prop_assume!(!starts_with_starter);
            prop_assert_eq!(segmenter.segment(&token), token.as_str());
        }
    }

    #[test]
    fn split_pieces_rejoin_to_token(token in hebrew_token()) {
        let segmenter = segmenter(Mode::Classic);
        let segmented = segmenter.segment(&token);
        prop_assert_eq!(segmented.replace(' ', ""), token.clone());
    }

    #[test]
    fn generated_lexicons_never_lose_text(lexicon in generated_lexicon(), token in lexicon_token()) {
        let segmenter = classic_over(&lexicon, "");
        let segmented = segmenter.segment(&token);
        prop_assert_eq!(segmented.replace(' ', ""), token.clone());

        if let Some(prefix) = segmenter.longest_prefix(&token) {
            let pattern = segmenter.rules().pattern(prefix).unwrap();
            let broken = segmenter.break_word(&token, pattern);
            prop_assert_eq!(broken.trim_start(), &*segmented);
        }
    }

    #[test]
    fn separated_pieces_strip_back_to_token(
        lexicon in generated_lexicon(),
        token in lexicon_token(),
        separator in separator(),
    ) {
        let segmenter = classic_over(&lexicon, separator);
        let segmented = segmenter.segment(&token);
        let pieces: Vec<&str> = segmented.split(' ').collect();
        let (last, morphemes) = pieces.split_last().unwrap();

        let mut rebuilt = String::new();
        for piece in morphemes {
            let morpheme = piece.strip_suffix(separator);
            prop_assert!(morpheme.is_some(), "{:?} lacks {:?}", piece, separator);
            rebuilt.push_str(morpheme.unwrap());
        }

        // the last piece is the stem, or a morpheme when the stem is empty
        let with_stem = format!("{rebuilt}{last}");
        let without_stem = format!("{rebuilt}{}", last.strip_suffix(separator).unwrap_or(last));
        prop_assert!(with_stem == token || without_stem == token, "{:?} -> {:?}", token, segmented);
    }

    #[test]
    fn trailing_separator_does_not_block_split(
        lexicon in generated_lexicon(),
        word in letters(1..8),
        separator in separator(),
    ) {
        let segmenter = classic_over(&lexicon, separator);
        prop_assume!(segmenter.longest_prefix(&word).is_some());
        prop_assume!(!segmenter.rules().is_morpheme(&word));

        let token = format!("{word}{separator}");
        prop_assert_ne!(segmenter.segment(&token), token.as_str());
    }

    #[test]
    fn longest_prefix_is_maximal(token in hebrew_token()) {
        let segmenter = segmenter(Mode::Classic);
        let longest = segmenter.rules().iter()
            .map(|(prefix, _)| prefix)
            .filter(|prefix| token.starts_with(prefix))
            .map(|prefix| prefix.chars().count())
            .max();

        let found = segmenter.longest_prefix(&token).map(|prefix| prefix.chars().count());
        prop_assert_eq!(found, longest);
    }

    #[test]
    fn improved_leaves_at_least_two_stem_characters(token in hebrew_token()) {
        let segmenter = segmenter(Mode::Improved);
        let segmented = segmenter.segment(&token);
        if segmented != token.as_str() {
            let stem = segmented.rsplit(' ').next().unwrap();
            prop_assert!(stem.chars().count() >= 2);
        }
    }

    #[test]
    fn line_output_has_no_empty_pieces(tokens in proptest::collection::vec(hebrew_token(), 0..8)) {
        let segmenter = segmenter(Mode::Classic);
        let line = tokens.join("  ");
        let output = segmenter.segment_line(&line);
        prop_assert!(output.split(' ').all(|piece| !piece.is_empty()) || output.is_empty());
    }
}

#[test]
fn exception_words_pass_through_in_improved_mode() {
    let segmenter = segmenter(Mode::Improved);
    for word in segmenter.exceptions().iter() {
        assert_eq!(segmenter.segment(word), word);
    }
}
