//! Plain-text rendering of the lookup page.

use std::io::{self, Write};

use tradefee_core::constants::{FEE_TABLE_HEADERS, SEARCH_PLACEHOLDER};
use tradefee_core::{FinanceActRow, FlattenedActivity, LookupSession, SelectionDetails};

/// Columns after the description and code hold amounts and are right-aligned.
const FIRST_AMOUNT_COLUMN: usize = 2;

pub fn write_page<W: Write>(
    out: &mut W,
    session: &LookupSession,
    matches: &[FlattenedActivity],
) -> io::Result<()> {
    writeln!(out, "Business Activity Information")?;
    writeln!(out)?;
    write_search_box(out, session)?;
    if session.is_search_open() && session.selected_activity().is_none() {
        write_matches(out, matches)?;
    }
    writeln!(out)?;
    write_details(out, &session.details())?;
    writeln!(out)?;
    writeln!(out, "Finance Act")?;
    write_fee_table(out, session.fees())
}

pub fn write_search_box<W: Write>(out: &mut W, session: &LookupSession) -> io::Result<()> {
    if !session.is_search_open() {
        return writeln!(out, "[ Search or select activity ]");
    }
    if session.query().is_empty() {
        writeln!(out, "> ({SEARCH_PLACEHOLDER})")
    } else {
        writeln!(out, "> {}", session.query())
    }
}

pub fn write_matches<W: Write>(out: &mut W, matches: &[FlattenedActivity]) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "  (no matching activities)");
    }
    let width = matches.len().to_string().len();
    for (i, activity) in matches.iter().enumerate() {
        writeln!(out, "  {:>width$}. {}", i + 1, activity.display_name())?;
    }
    Ok(())
}

pub fn write_details<W: Write>(out: &mut W, details: &SelectionDetails) -> io::Result<()> {
    let width = details
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);
    for field in &details.fields {
        if field.name.is_empty() {
            writeln!(out, "{:<width$} : {}", field.label, field.code)?;
        } else {
            writeln!(out, "{:<width$} : {}  ({})", field.label, field.code, field.name)?;
        }
    }
    Ok(())
}

/// Header row, a rule, then one line per fee row. No rows renders just the header.
pub fn write_fee_table<W: Write>(out: &mut W, rows: &[FinanceActRow]) -> io::Result<()> {
    let cells: Vec<[String; 7]> = rows.iter().map(FinanceActRow::table_cells).collect();

    let mut widths = FEE_TABLE_HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_table_line(out, &FEE_TABLE_HEADERS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &cells {
        write_table_line(out, row, &widths)?;
    }
    Ok(())
}

fn write_table_line<W: Write>(
    out: &mut W,
    cells: &[String; 7],
    widths: &[usize; 7],
) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, &width))| {
            if column >= FIRST_AMOUNT_COLUMN {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn restaurant_row() -> FinanceActRow {
        serde_json::from_str(
            r#"{ "code": "105", "NAICS": "722511", "des": "Restaurant",
                 "trade": 15000, "fire": 3500, "food": 2500, "health": 1000, "pest": 2000.5 }"#,
        )
        .unwrap()
    }

    fn activity() -> FlattenedActivity {
        FlattenedActivity {
            industry_code: "I".to_string(),
            industry_name: "Accommodation".to_string(),
            category_code: "I56".to_string(),
            category_name: "Food Services".to_string(),
            sub_category_code: "I561".to_string(),
            sub_category_name: "Restaurants".to_string(),
            activity_code: "I5610-01".to_string(),
            activity_name: "Full-Service Restaurant".to_string(),
            trade: "722511".to_string(),
        }
    }

    #[test]
    fn test_fee_table_formats_amounts() {
        let text = rendered(|out| write_fee_table(out, &[restaurant_row()]));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Business Description | Code"));
        assert!(lines[2].contains("15,000"));
        assert!(lines[2].contains("2,000.5"));
        assert!(!lines[2].contains("15000"));
    }

    #[test]
    fn test_empty_fee_table_has_only_header() {
        let text = rendered(|out| write_fee_table(out, &[]));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_matches_are_numbered_from_one() {
        let text = rendered(|out| write_matches(out, &[activity()]));
        assert_eq!(text, "  1. Full-Service Restaurant\n");

        let text = rendered(|out| write_matches(out, &[]));
        assert!(text.contains("no matching activities"));
    }

    #[test]
    fn test_page_for_selected_activity() {
        let mut session = LookupSession::new();
        session.open();
        session.select(&activity(), &[restaurant_row()]);

        let text = rendered(|out| write_page(out, &session, &[]));
        assert!(text.contains("> Full-Service Restaurant"));
        assert!(text.contains("Industry Code"));
        assert!(text.contains("I561  (Restaurants)"));
        assert!(text.contains("3,500"));
        assert!(!text.contains("no matching activities"));
    }

    #[test]
    fn test_page_when_idle() {
        let session = LookupSession::new();
        let text = rendered(|out| write_page(out, &session, &[]));
        assert!(text.contains("[ Search or select activity ]"));
        assert!(text.contains("Finance Act"));
    }
}
