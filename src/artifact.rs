use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use encoding_rs::WINDOWS_1252;
use serde::Serialize;

use crate::parser::profile::Profile;
use crate::record::{Record, Value};

/// Write records as a force-quoted CSV in the artifacts' legacy
/// single-byte encoding.
pub fn write_csv(path: &Path, profile: &Profile, records: &[Record]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(profile.header)?;
    for record in records {
        writer.write_record(record.values().map(Value::render))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("finalizing csv writer: {e}"))?;
    let text = String::from_utf8(bytes)?;
    write_encoded(path, &text)
}

/// Read an intermediate CSV back into string-valued records. The header
/// must match the profile exactly; a mismatch means the wrong file or the
/// wrong category.
pub fn read_csv(path: &Path, profile: &Profile) -> Result<Vec<Record>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let (text, _, _) = WINDOWS_1252.decode(&bytes);

    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());
    let header = reader.headers()?.clone();
    if header.iter().ne(profile.header.iter().copied()) {
        bail!(
            "CSV header {:?} does not match the {} layout",
            header,
            profile.category
        );
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let values = row.iter().map(|f| Value::Str(f.to_string())).collect();
        records.push(Record::new(profile.header, values));
    }
    Ok(records)
}

#[derive(Serialize)]
struct Payload<'a> {
    data: &'a [Record],
}

/// Write the final artifact: `{"data": [...]}`, pretty-printed, same
/// legacy encoding as the CSV.
pub fn write_json(path: &Path, records: &[Record]) -> Result<()> {
    let text = serde_json::to_string_pretty(&Payload { data: records })?;
    write_encoded(path, &text)
}

fn write_encoded(path: &Path, text: &str) -> Result<()> {
    let (encoded, _, _) = WINDOWS_1252.encode(text);
    fs::write(path, &encoded).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::profile::{CROCKPOT, VEGETABLE};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dst_scraper_{}_{name}", std::process::id()))
    }

    fn crockpot_record() -> Record {
        Record::new(
            CROCKPOT.header,
            vec![
                Value::Str("Butter Muffin".into()),
                Value::Str("Reign of Giants".into()),
                Value::Str("20".into()),
                Value::Str("37.5".into()),
                Value::Str("5".into()),
                Value::Str("15 Days".into()),
                Value::Str("40".into()),
                Value::Str("1".into()),
                Value::Str("Butterfly Wings×1.0".into()),
                Value::Str("no Meats".into()),
            ],
        )
    }

    #[test]
    fn csv_fields_are_force_quoted_and_legacy_encoded() {
        let path = temp_path("quoted.csv");
        write_csv(&path, &CROCKPOT, &[crockpot_record()]).unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();

        // The multiplication sign is a single byte in windows-1252.
        assert!(bytes.windows(2).any(|w| w == [0xD7, b'1']));
        assert!(!bytes.windows(2).any(|w| w == [0xC3, 0x97]));

        let (text, _, _) = WINDOWS_1252.decode(&bytes);
        assert!(text.starts_with("\"name\",\"dlc\""));
        assert!(text.contains("\"Butter Muffin\""));
    }

    #[test]
    fn csv_round_trips_as_strings() {
        let path = temp_path("roundtrip.csv");
        let veg = Record::new(
            VEGETABLE.header,
            vec![
                Value::Str("Carrot".into()),
                Value::Str("Carrot".into()),
                Value::Str("Roasted Carrot".into()),
                Value::Str("N/A".into()),
                Value::Str("Don't Starve".into()),
                Value::Float(1.0),
                Value::Bool(true),
            ],
        );
        write_csv(&path, &VEGETABLE, &[veg]).unwrap();
        let records = read_csv(&path, &VEGETABLE).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(records.len(), 1);
        // Typed values come back as their CSV text.
        assert_eq!(records[0].get("value"), Some(&Value::Str("1.0".into())));
        assert_eq!(records[0].get("crockpot"), Some(&Value::Str("true".into())));
    }

    #[test]
    fn header_mismatch_is_an_error() {
        let path = temp_path("mismatch.csv");
        write_csv(&path, &VEGETABLE, &[]).unwrap();
        let result = read_csv(&path, &CROCKPOT);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn json_payload_wraps_records_in_data() {
        let path = temp_path("payload.json");
        let record = Record::new(
            &["name", "value"],
            vec![Value::Str("Carrot".into()), Value::Float(1.0)],
        );
        write_json(&path, &[record]).unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let (text, _, _) = WINDOWS_1252.decode(&bytes);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["data"][0]["name"], "Carrot");
        assert_eq!(parsed["data"][0]["value"], 1.0);
    }
}
