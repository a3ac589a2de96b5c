//! Field lookup inside `application/ld+json` blocks.
//!
//! Blocks are parsed with `serde_json` (key order preserved) and searched
//! depth-first in document order, so the first field as written wins whether
//! it sits at the top level, inside `@graph`, or under an `offers` object. Retailers regularly ship JSON-LD that is not valid JSON
//! (trailing commas, unescaped quotes); for those blocks a regex over the raw
//! text stands in for the structural search.

use regex::Regex;
use serde_json::Value;

pub const SCRIPT_TYPE: &str = "application/ld+json";

/// Reads a value from one `key: value` entry, or `None` to keep searching.
pub type FieldExtractor = fn(&str, &Value) -> Option<String>;

/// First value produced by `extract` anywhere in `block`, in document order.
///
/// `fallback` must capture the value in group 1 and is used only when the
/// block does not parse.
pub fn find_field(block: &str, extract: FieldExtractor, fallback: &Regex) -> Option<String> {
    match serde_json::from_str::<Value>(block.trim()) {
        Ok(value) => walk(&value, extract),
        Err(_) => fallback
            .captures(block)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_owned())
            .filter(|s| !s.is_empty()),
    }
}

/// A non-empty string or a number, as text.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn walk(value: &Value, extract: FieldExtractor) -> Option<String> {
    match value {
        Value::Object(map) => map
            .iter()
            .find_map(|(key, v)| extract(key, v).or_else(|| walk(v, extract))),
        Value::Array(items) => items.iter().find_map(|v| walk(v, extract)),
        _ => None,
    }
}
