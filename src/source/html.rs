use std::sync::LazyLock;

use regex::Regex;

use crate::domain::SalaryRow;

const FIELDS: [&str; 4] = ["player-name", "player-salary", "player-year", "player-level"];

static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr\s*>").expect("valid row pattern"));

static CELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<t[dh]\b([^>]*)>(.*?)</t[dh]\s*>").expect("valid cell pattern")
});

static CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
        .expect("valid class pattern")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag pattern"));

/// Parses every `<tr>` in the document into a [`SalaryRow`].
///
/// Cells are matched to fields by their `player-name`, `player-salary`,
/// `player-year` and `player-level` classes. Rows without any such cell
/// (headers, spacers) are returned with every field empty, so the caller
/// sees one row per `<tr>`.
#[must_use]
pub fn parse_rows(html: &str) -> Vec<SalaryRow> {
    ROW.captures_iter(html)
        .map(|row| parse_row(&row[1]))
        .collect()
}

fn parse_row(inner: &str) -> SalaryRow {
    let mut row = SalaryRow::default();

    for cell in CELL.captures_iter(inner) {
        let Some(class) = class_attr(&cell[1]) else {
            continue;
        };
        let Some(field) = class.split_whitespace().find(|c| FIELDS.contains(c)) else {
            continue;
        };
        let slot = match field {
            "player-name" => &mut row.name,
            "player-salary" => &mut row.salary,
            "player-year" => &mut row.year,
            _ => &mut row.level,
        };
        if slot.is_none() {
            *slot = Some(cell_text(&cell[2]));
        }
    }

    row
}

fn class_attr(attrs: &str) -> Option<&str> {
    let caps = CLASS.captures(attrs)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

/// Visible text of a cell: tags removed, common entities decoded and
/// whitespace collapsed.
fn cell_text(inner: &str) -> String {
    let stripped = TAG.replace_all(inner, "");
    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#36;", "$")
        .replace("&#44;", ",")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
