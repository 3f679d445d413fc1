pub trait WordCounter: Send + Sync {
    fn count(&self, text: &str) -> u32;
}

/// Counts whitespace-delimited tokens; the only notion of "word" used here.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceWordCounter;

impl WordCounter for WhitespaceWordCounter {
    fn count(&self, text: &str) -> u32 {
        text.split_whitespace().count() as u32
    }
}
