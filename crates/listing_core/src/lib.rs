//! Listing core: pure text transformations for product listings.
mod catalog;
mod description;
mod input;
mod title;
mod wordcount;

pub use catalog::{
    EASE_PHRASE, EASE_SENTENCE, EXTRA_FILLERS, LEAD_FILLERS, QUALITY_PHRASE, QUALITY_SENTENCE,
};
pub use description::{normalize_description, normalize_descriptions, NormalizeOptions};
pub use input::{parse_items, ParseError};
pub use title::{rewrite_title, rewrite_titles, TitleOptions};
pub use wordcount::{WhitespaceWordCounter, WordCounter};
