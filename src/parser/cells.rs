use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::record::Value;

static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// How one table column is read. Layouts are fixed per category, indexed
/// by cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    /// Icon-only or redundant column; contributes nothing.
    Skip,
    /// Trimmed text content.
    Text,
    /// `title` attributes of direct anchor children, "icon" stripped,
    /// joined with ", ".
    AnchorTitles,
    /// Anchor titles interleaved with plain-text fragments, reassembled
    /// into a single space-separated list.
    FilteredJoin,
    /// `true` iff the trimmed text is exactly "Yes".
    YesNo,
    /// Permissive float; non-numeric text coerces to 0.0.
    Float,
}

/// Extract one row's cells into values, in column order. Returns `None`
/// for rows whose every kept cell is blank.
pub fn extract_row(row: ElementRef, columns: &[ColumnRule]) -> Option<Vec<Value>> {
    let cells: Vec<ElementRef> = row.select(&TD).collect();
    let mut values = Vec::new();
    let mut any_content = false;

    for (index, rule) in columns.iter().enumerate() {
        if *rule == ColumnRule::Skip {
            continue;
        }
        match cells.get(index) {
            Some(cell) => {
                if !cell_is_blank(*cell) {
                    any_content = true;
                }
                values.push(apply_rule(*cell, *rule));
            }
            // Short rows pad out with empty text so the field set stays fixed.
            None => values.push(Value::Str(String::new())),
        }
    }

    any_content.then_some(values)
}

fn apply_rule(cell: ElementRef, rule: ColumnRule) -> Value {
    match rule {
        ColumnRule::Skip => Value::Str(String::new()),
        ColumnRule::Text => Value::Str(cell_text(cell)),
        ColumnRule::AnchorTitles => Value::Str(anchor_titles(cell)),
        ColumnRule::FilteredJoin => Value::Str(filtered_join(cell)),
        ColumnRule::YesNo => Value::Bool(cell_text(cell) == "Yes"),
        ColumnRule::Float => Value::Float(cell_text(cell).parse().unwrap_or(0.0)),
    }
}

/// A cell counts as blank when it has no visible text and no titled anchor.
fn cell_is_blank(cell: ElementRef) -> bool {
    if cell.text().any(|t| !t.trim().is_empty()) {
        return false;
    }
    !cell
        .select(&ANCHOR)
        .any(|a| a.value().attr("title").is_some_and(|t| !t.trim().is_empty()))
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn anchor_titles(cell: ElementRef) -> String {
    let mut titles = Vec::new();
    for child in cell.children() {
        let Some(element) = ElementRef::wrap(child) else {
            continue;
        };
        if element.value().name() != "a" {
            continue;
        }
        if let Some(title) = element.value().attr("title") {
            titles.push(title.replace("icon", "").trim().to_string());
        }
    }
    titles.join(", ")
}

/// Anchors contribute their `title`; everything else contributes its text
/// followed by a `,` marker. The concatenation is then split on commas,
/// trimmed, and rejoined with single spaces, reconstructing the
/// natural-language ingredient list.
fn filtered_join(cell: ElementRef) -> String {
    let mut pieces = String::new();
    for child in cell.children() {
        if let Some(element) = ElementRef::wrap(child) {
            if element.value().name() == "a" {
                pieces.push_str(element.value().attr("title").unwrap_or_default());
            } else {
                pieces.push_str(&element.text().collect::<String>());
                pieces.push(',');
            }
        } else if let Some(text) = child.value().as_text() {
            pieces.push_str(text);
            pieces.push(',');
        }
    }
    pieces
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
