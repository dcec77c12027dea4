use std::sync::LazyLock;

use anyhow::{bail, Result};
use regex::Regex;

/// `Name×Number` — name is word characters with internal spaces, number is
/// digits with an optional decimal point.
static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\b[\w\s]+\b)×([\d\.]+)").unwrap());

/// Split on commas, dropping trailing empty segments. Empty input yields no
/// segments at all.
pub(crate) fn segments(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut parts: Vec<&str> = text.split(',').collect();
    while parts.last().is_some_and(|s| s.is_empty()) {
        parts.pop();
    }
    parts
}

fn display(segment: &str) -> Option<String> {
    QUANTITY_RE
        .captures(segment)
        .map(|caps| format!("{} ({})", &caps[1], &caps[2]))
}

/// Every segment must carry a quantity; a miss means the source table (or
/// the column policy that produced the field) is broken, so the whole
/// conversion aborts.
pub fn parse_strict(text: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for segment in segments(text) {
        match display(segment) {
            Some(pair) => out.push(pair),
            None => bail!("unparseable quantity segment {segment:?} in {text:?}"),
        }
    }
    Ok(out)
}

/// Segments without a quantity pass through trimmed; plain category names
/// are expected among filler restrictions.
pub fn parse_lenient(text: &str) -> Vec<String> {
    segments(text)
        .into_iter()
        .map(|segment| display(segment).unwrap_or_else(|| segment.trim().to_string()))
        .collect()
}
