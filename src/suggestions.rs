use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ITEM_MARKER: Regex = Regex::new(r"\d+\.").unwrap();
}

// Split the model's numbered-list text into individual suggestions.
// Heuristic only: anything before the first marker is dropped and there
// is no guarantee the model numbered its output at all.
pub fn split_suggestions(text: &str) -> Vec<String> {
    ITEM_MARKER
        .split(text)
        .skip(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
