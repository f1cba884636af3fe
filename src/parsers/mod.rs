pub mod chain;
pub mod showtime;
pub mod title;

pub use chain::*;
pub use showtime::*;
pub use title::*;

use html_escape::decode_html_entities;

/// Clean and normalize text by collapsing whitespace and decoding HTML entities
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
