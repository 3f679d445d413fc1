/// Formatting limits for rewritten titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleOptions {
    /// Maximum title length in characters; longer titles are truncated
    /// with a `"..."` suffix.
    pub max_length: usize,
    /// Separator substituted for `" - "` in the final title.
    pub separator: char,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            max_length: 200,
            separator: '|',
        }
    }
}

/// Known title substrings and the fixed marketing titles they map to.
/// First match wins; the generic `ChatGPT` rule deliberately shadows the
/// more specific ChatGPT variants below it, matching the listings already
/// published with these titles.
const TITLE_RULES: [(&str, &str); 6] = [
    (
        "SciSpace",
        "SciSpace Typeset Premium | AI Copilot | ChatGPT Alternative",
    ),
    (
        "ChatGPT",
        "ChatGPT Plus Premium | 24/7 Access to Turbo GPT-4 Vision",
    ),
    (
        "Turnitin",
        "Turnitin Plagiarism Checker & AI Writing Detection Tool | No Repository",
    ),
    ("Private ChatGPT", "Private ChatGPT Plus | Warranty Included"),
    ("3u ChatGPT", "3u ChatGPT 4 Plus | Warranty Provided"),
    (
        "ChatGPT Masterclass",
        "ChatGPT Masterclass: Ultimate Beginner's Guide",
    ),
];

/// Discounted Turnitin listings get their own title.
const TURNITIN_CHEAPEST_TITLE: &str =
    "Affordable Turnitin Plagiarism Checker & AI Writing Detection Tool | No Repository";

/// Rewrite a raw product title: strip stray formatting, swap known
/// listings for their fixed marketing titles, apply the separator, and
/// truncate to `max_length` characters.
pub fn rewrite_title(title: &str, options: &TitleOptions) -> String {
    let cleaned = cleanup(title);

    let mut rewritten = match TITLE_RULES
        .iter()
        .find(|(pattern, _)| cleaned.contains(pattern))
    {
        Some(("Turnitin", _)) if cleaned.contains("CHEAPEST") => TURNITIN_CHEAPEST_TITLE.to_string(),
        Some((_, replacement)) => (*replacement).to_string(),
        None => cleaned,
    };

    rewritten = rewritten
        .replace(" - ", &format!(" {} ", options.separator))
        .trim()
        .to_string();

    // Character-based truncation keeps this safe for non-ASCII titles.
    if rewritten.chars().count() > options.max_length {
        let mut truncated: String = rewritten
            .chars()
            .take(options.max_length.saturating_sub(3))
            .collect();
        truncated.push_str("...");
        return truncated;
    }

    rewritten
}

/// Batch form: output preserves the length and order of the input.
pub fn rewrite_titles(titles: &[String], options: &TitleOptions) -> Vec<String> {
    titles
        .iter()
        .map(|title| rewrite_title(title, options))
        .collect()
}

fn cleanup(title: &str) -> String {
    title
        .replace(['[', ']'], "")
        .replace('|', "-")
        .replace('+', "and")
        .trim()
        .to_string()
}
