//! # Rendering Module
//!
//! Markdown output for generated encounters, with monster names linked to
//! pages in a notes vault.

pub mod links;
pub mod markdown;

pub use links::*;
pub use markdown::*;

use serde_json::Value;

/// Formats a pass-through statblock value, or `missing` when absent.
///
/// Text is written as-is; anything structured keeps its JSON form.
pub fn display_value(value: Option<&Value>, missing: &str) -> String {
    match value {
        None | Some(Value::Null) => missing.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Capitalizes the first letter of every word and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}
