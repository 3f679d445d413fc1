use crate::catalog::{
    EASE_PHRASE, EASE_SENTENCE, EXTRA_FILLERS, LEAD_FILLERS, QUALITY_PHRASE, QUALITY_SENTENCE,
};
use crate::wordcount::{WhitespaceWordCounter, WordCounter};

/// Word-count band a normalized description must land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Target floor: padding stops once this many words are reached.
    pub default_word_count: u32,
    /// Hard ceiling: anything beyond this many words is cut.
    pub max_word_count: u32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_word_count: 1500,
            max_word_count: 2000,
        }
    }
}

/// Normalize a single product description:
/// - trim surrounding whitespace
/// - append the quality/ease sentences unless their phrases already occur
///   (case-insensitive substring match)
/// - below `default_word_count`, append the lead-in block as a whole, then
///   filler sentences in catalog order until the floor is reached or the
///   catalog runs out
/// - above `max_word_count`, keep the first `max_word_count` words and
///   append a trailing `"..."` token.
///
/// The padding step runs once; the result may stay below the floor when
/// the catalog is exhausted first.
pub fn normalize_description(
    description: &str,
    options: &NormalizeOptions,
    counter: &dyn WordCounter,
) -> String {
    let mut text = description.trim().to_string();

    // The two phrase checks are independent; both may fire.
    if !text.to_lowercase().contains(QUALITY_PHRASE) {
        append_sentence(&mut text, QUALITY_SENTENCE);
    }
    if !text.to_lowercase().contains(EASE_PHRASE) {
        append_sentence(&mut text, EASE_SENTENCE);
    }

    if counter.count(&text) < options.default_word_count {
        // The lead-in block goes in unconditionally, even when it alone
        // overshoots the floor.
        for sentence in LEAD_FILLERS {
            append_sentence(&mut text, sentence);
        }
        for sentence in EXTRA_FILLERS {
            if counter.count(&text) >= options.default_word_count {
                break;
            }
            append_sentence(&mut text, sentence);
        }
    }

    // Truncate only on strictly-greater word count, never on equal.
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() as u32 > options.max_word_count {
        let kept = &words[..options.max_word_count as usize];
        text = format!("{} ...", kept.join(" "));
    }

    text
}

/// Batch form: output preserves the length and order of the input.
pub fn normalize_descriptions(descriptions: &[String], options: &NormalizeOptions) -> Vec<String> {
    let counter = WhitespaceWordCounter;
    descriptions
        .iter()
        .map(|description| normalize_description(description, options, &counter))
        .collect()
}

fn append_sentence(text: &mut String, sentence: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(sentence);
}
