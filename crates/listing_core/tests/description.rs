use std::sync::Once;

use listing_core::{
    normalize_description, normalize_descriptions, NormalizeOptions, WhitespaceWordCounter,
    WordCounter, EASE_SENTENCE, EXTRA_FILLERS, LEAD_FILLERS, QUALITY_SENTENCE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(listing_logging::initialize_for_tests);
}

fn word_count(text: &str) -> u32 {
    WhitespaceWordCounter.count(text)
}

/// Total words contributed by the lead-in block plus the whole catalog.
fn full_filler_words() -> u32 {
    LEAD_FILLERS
        .iter()
        .chain(EXTRA_FILLERS.iter())
        .map(|sentence| word_count(sentence))
        .sum()
}

#[test]
fn missing_phrases_are_appended() {
    init_logging();
    let options = NormalizeOptions {
        default_word_count: 1,
        max_word_count: 100,
    };

    let result = normalize_description("A basic product description.", &options, &WhitespaceWordCounter);

    assert!(result.contains(QUALITY_SENTENCE));
    assert!(result.contains(EASE_SENTENCE));
}

#[test]
fn present_phrases_are_not_duplicated() {
    init_logging();
    let options = NormalizeOptions {
        default_word_count: 1,
        max_word_count: 100,
    };
    let input = "A HIGH QUALITY product that is Easy To Use.";

    let result = normalize_description(input, &options, &WhitespaceWordCounter);

    assert_eq!(result, input);
}

#[test]
fn phrase_checks_fire_independently() {
    init_logging();
    let options = NormalizeOptions {
        default_word_count: 1,
        max_word_count: 100,
    };

    let result =
        normalize_description("A high quality gadget.", &options, &WhitespaceWordCounter);

    assert!(!result.contains(QUALITY_SENTENCE));
    assert!(result.contains(EASE_SENTENCE));
}

#[test]
fn empty_input_still_gets_both_sentences() {
    init_logging();
    let options = NormalizeOptions {
        default_word_count: 1,
        max_word_count: 100,
    };

    let result = normalize_description("   ", &options, &WhitespaceWordCounter);

    assert_eq!(result, format!("{QUALITY_SENTENCE} {EASE_SENTENCE}"));
}

#[test]
fn short_description_reaches_the_floor() {
    init_logging();
    let options = NormalizeOptions {
        default_word_count: 20,
        max_word_count: 30,
    };

    let result =
        normalize_description("This is a short description.", &options, &WhitespaceWordCounter);

    assert!(word_count(&result) >= 20);
}

#[test]
fn padding_stops_at_the_first_sentence_past_the_floor() {
    init_logging();
    let input = "high quality easy to use";
    let options = NormalizeOptions {
        default_word_count: 100,
        max_word_count: 1000,
    };

    let result = normalize_description(input, &options, &WhitespaceWordCounter);

    // 5 input words + 50 lead-in words, then catalog sentences of
    // 12, 9, 12 and 13 words reach 101; the fifth sentence stays out.
    assert_eq!(word_count(&result), 101);
    assert!(result.contains(EXTRA_FILLERS[3]));
    assert!(!result.contains(EXTRA_FILLERS[4]));
}

#[test]
fn exhausted_catalog_leaves_the_result_below_the_floor() {
    init_logging();
    let input = "high quality easy to use";
    let options = NormalizeOptions {
        default_word_count: 500,
        max_word_count: 1000,
    };

    let result = normalize_description(input, &options, &WhitespaceWordCounter);

    assert_eq!(word_count(&result), word_count(input) + full_filler_words());
    assert!(word_count(&result) < 500);
    assert!(result.ends_with(EXTRA_FILLERS[9]));
}

#[test]
fn over_long_description_truncates_to_ceiling_plus_ellipsis() {
    init_logging();
    let input = vec!["word"; 3000].join(" ");
    let options = NormalizeOptions::default();

    let result = normalize_description(&input, &options, &WhitespaceWordCounter);

    assert_eq!(word_count(&result), 2001);
    assert!(result.ends_with("..."));
    let tokens: Vec<&str> = result.split_whitespace().collect();
    assert_eq!(tokens[1999], "word");
    assert_eq!(tokens[2000], "...");
}

#[test]
fn word_count_equal_to_ceiling_is_left_alone() {
    init_logging();
    let mut words = vec!["high", "quality", "easy", "to", "use"];
    words.extend(std::iter::repeat("w").take(25));
    let input = words.join(" ");
    let options = NormalizeOptions {
        default_word_count: 5,
        max_word_count: 30,
    };

    let result = normalize_description(&input, &options, &WhitespaceWordCounter);

    assert_eq!(result, input);
}

#[test]
fn normalizing_twice_is_idempotent_above_the_floor() {
    init_logging();
    let options = NormalizeOptions {
        default_word_count: 100,
        max_word_count: 1000,
    };

    let once =
        normalize_description("high quality easy to use", &options, &WhitespaceWordCounter);
    let twice = normalize_description(&once, &options, &WhitespaceWordCounter);

    assert_eq!(once, twice);
}

#[test]
fn batch_preserves_length_and_order() {
    init_logging();
    let inputs = vec![
        "first high quality easy to use item".to_string(),
        "second high quality easy to use item".to_string(),
    ];
    let options = NormalizeOptions {
        default_word_count: 1,
        max_word_count: 100,
    };

    let results = normalize_descriptions(&inputs, &options);

    assert_eq!(results.len(), 2);
    assert!(results[0].starts_with("first"));
    assert!(results[1].starts_with("second"));
}
