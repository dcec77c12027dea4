use anyhow::Result;

use super::quantity;
use crate::record::{Record, Value};

/// Per-field coercion applied after the CSV stage. Fields without a rule
/// pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Comma-separated text becomes a trimmed list.
    SplitList,
    /// Permissive float; non-numeric text coerces to 0.0.
    Float,
    /// Quantity list; an unparseable segment aborts the conversion.
    QuantityStrict,
    /// Quantity list; unparseable segments pass through trimmed.
    QuantityLenient,
}

pub fn normalize_record(record: Record, rules: &[(&str, FieldRule)]) -> Result<Record> {
    let mut fields = Vec::new();
    for (key, value) in record.into_fields() {
        let rule = rules.iter().find(|(k, _)| *k == key).map(|(_, r)| *r);
        let value = match rule {
            Some(rule) => apply(rule, value)?,
            None => value,
        };
        fields.push((key, value));
    }
    Ok(Record::from_fields(fields))
}

fn apply(rule: FieldRule, value: Value) -> Result<Value> {
    // Already-coerced values pass through, keeping the rules idempotent.
    let Value::Str(text) = value else {
        return Ok(value);
    };
    Ok(match rule {
        FieldRule::SplitList => Value::List(
            quantity::segments(&text)
                .into_iter()
                .map(|s| s.trim().to_string())
                .collect(),
        ),
        FieldRule::Float => Value::Float(text.trim().parse().unwrap_or(0.0)),
        FieldRule::QuantityStrict => Value::List(quantity::parse_strict(&text)?),
        FieldRule::QuantityLenient => Value::List(quantity::parse_lenient(&text)),
    })
}
