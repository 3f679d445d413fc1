use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input contains no items")]
    Empty,
    #[error("item {position} is empty")]
    EmptyItem { position: usize },
}

/// Split comma/pipe-separated user input into trimmed items.
///
/// Empty input and empty items are reported as errors; the caller owns
/// the re-prompt loop.
pub fn parse_items(raw: &str) -> Result<Vec<String>, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let items: Vec<String> = raw
        .split([',', '|'])
        .map(|item| item.trim().to_string())
        .collect();

    if let Some(position) = items.iter().position(|item| item.is_empty()) {
        return Err(ParseError::EmptyItem { position: position + 1 });
    }

    Ok(items)
}
