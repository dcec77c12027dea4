use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A single extracted or normalized field value. Strings dominate: the
/// intermediate CSV carries everything as text, so floats/bools/lists only
/// appear at extraction time (vegetable/meat) or after normalization
/// (crockpot).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Text rendering for the CSV artifact. Whole floats keep a trailing
    /// ".0" so they read back as "1.0", not "1".
    pub fn render(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{f:.1}"),
            Value::Float(f) => f.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::List(items) => items.join(", "),
        }
    }
}

/// A flat record with a fixed, ordered field set (the category header).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new(names: &'static [&'static str], values: Vec<Value>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Record {
            fields: names.iter().copied().zip(values).collect(),
        }
    }

    pub fn from_fields(fields: Vec<(&'static str, Value)>) -> Self {
        Record { fields }
    }

    pub fn into_fields(self) -> Vec<(&'static str, Value)> {
        self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// The sort/group key. Every category header starts with `name`.
    pub fn name(&self) -> &str {
        self.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_keeps_trailing_zero() {
        assert_eq!(Value::Float(1.0).render(), "1.0");
        assert_eq!(Value::Float(0.5).render(), "0.5");
        assert_eq!(Value::Float(37.5).render(), "37.5");
    }

    #[test]
    fn render_bool() {
        assert_eq!(Value::Bool(true).render(), "true");
        assert_eq!(Value::Bool(false).render(), "false");
    }

    #[test]
    fn serialize_preserves_field_order() {
        let record = Record::new(
            &["name", "value", "crockpot"],
            vec![
                Value::Str("Carrot".into()),
                Value::Float(1.0),
                Value::Bool(true),
            ],
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Carrot","value":1.0,"crockpot":true}"#);
    }
}
