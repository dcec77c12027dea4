pub mod cells;
pub mod group;
pub mod normalize;
pub mod profile;
pub mod quantity;

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::artifact;
use crate::record::{Record, Value};
use self::profile::{Profile, SourceMode};

static ROWS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table tbody tr").unwrap());

/// Stage one: parse a saved wiki page and write the category's CSV.
/// Returns the number of data rows written.
pub fn html_to_csv(profile: &Profile, input: &Path, output: &Path) -> Result<usize> {
    let html =
        fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let doc = Html::parse_document(&html);
    let records = extract_records(&doc, profile);
    info!(category = profile.category, rows = records.len(), "extracted table");
    artifact::write_csv(output, profile, &records)?;
    Ok(records.len())
}

/// Stage two: read the CSV back, normalize each record's fields, sort by
/// name and write the JSON artifact. Returns the record count.
pub fn csv_to_json(profile: &Profile, input: &Path, output: &Path) -> Result<usize> {
    let mut records = artifact::read_csv(input, profile)?
        .into_iter()
        .map(|record| normalize::normalize_record(record, profile.rules))
        .collect::<Result<Vec<_>>>()?;
    records.sort_by(|a, b| a.name().cmp(b.name()));
    info!(category = profile.category, records = records.len(), "normalized records");
    artifact::write_json(output, &records)?;
    Ok(records.len())
}

/// Extract every table row of the document into records, in document order
/// (the meat profile collapses to one record per name, keyed by first
/// encounter). Blank rows are dropped before any shaping.
pub fn extract_records(doc: &Html, profile: &Profile) -> Vec<Record> {
    let mut rows = Vec::new();
    for (index, row) in doc.select(&ROWS).enumerate() {
        match cells::extract_row(row, profile.columns) {
            Some(values) => rows.push(values),
            None => debug!(row = index, "dropping blank row"),
        }
    }

    let shaped: Vec<Vec<Value>> = match profile.sources {
        SourceMode::None => rows,
        SourceMode::CopyName => rows
            .into_iter()
            .map(|mut row| {
                let name = row.first().cloned().unwrap_or(Value::Str(String::new()));
                row.insert(1, name);
                row
            })
            .collect(),
        SourceMode::MergeByName => group::merge_by_name(rows),
    };

    shaped
        .into_iter()
        .map(|values| Record::new(profile.header, values))
        .collect()
}

// ── Tests ──
