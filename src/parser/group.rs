use std::collections::HashMap;

use crate::record::Value;

/// Placeholder the wiki uses for creatures with no drop location.
const NO_SOURCE: &str = "N/A";

/// Collapse rows sharing a name into one row each. Input rows lead with a
/// source location, then the name, then the remaining fields. Output rows
/// lead with the name, then the comma-joined sources (the name itself when
/// every source was the placeholder), then the remaining fields of the
/// group's *first* row — later duplicates' differing values are discarded,
/// an accepted lossy simplification.
///
/// Names keep first-encounter order.
pub fn merge_by_name(rows: Vec<Vec<Value>>) -> Vec<Vec<Value>> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Vec<Value>>> = HashMap::new();

    for row in rows {
        let name = row
            .get(1)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if !groups.contains_key(&name) {
            order.push(name.clone());
        }
        groups.entry(name).or_default().push(row);
    }

    let mut merged = Vec::with_capacity(order.len());
    for name in order {
        let members = groups.remove(&name).unwrap_or_default();
        let Some(first) = members.first() else {
            continue;
        };

        let sources = members
            .iter()
            .filter_map(|m| m.first().and_then(Value::as_str))
            .filter(|s| *s != NO_SOURCE)
            .collect::<Vec<_>>()
            .join(",");
        let sources = if sources.is_empty() {
            name.clone()
        } else {
            sources
        };

        let mut row = vec![Value::Str(name), Value::Str(sources)];
        row.extend(first.iter().skip(2).cloned());
        merged.push(row);
    }
    merged
}
