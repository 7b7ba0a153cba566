//! Participant rosters: the spreadsheet rows behind participant import/export.
//!
//! The browser host reads and writes XLSX through its spreadsheet library and
//! hands this module plain rows of cells. The native tool uses the CSV text
//! form below instead.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::collections::HashSet;

use serde::Deserialize;
use tracing::warn;

use crate::consts::UNASSIGNED_LABEL;
use crate::doc::{Participant, SeatingPlan, parse_chair_id};

/// Header row written at the top of every export.
pub const EXPORT_HEADER: [&str; 3] = ["Name", "Table", "Seat"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    /// A quoted CSV field was never closed.
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
    /// A closing quote was followed by something other than a separator.
    #[error("unexpected character after closing quote on line {line}")]
    StrayQuote { line: usize },
}

/// One spreadsheet cell as the host's sheet reader hands it over. Empty cells
/// arrive as `null` and are read as `Option<Cell>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Cell {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// Plain text rows from host cells; empty cells become empty strings.
#[must_use]
pub fn text_rows(rows: Vec<Vec<Option<Cell>>>) -> Vec<Vec<String>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(|cell| cell.map(Cell::into_text).unwrap_or_default()).collect())
        .collect()
}

/// Participants from imported rows.
///
/// The first row is a header and is skipped. Each later row's first cell is a
/// name; rows whose name is blank are dropped. Every participant gets a fresh
/// id; de-duplication against the plan happens in IMPORT_PARTICIPANTS.
#[must_use]
pub fn participants_from_rows(rows: &[Vec<String>]) -> Vec<Participant> {
    rows.iter()
        .skip(1)
        .filter_map(|row| row.first())
        .filter(|name| !name.trim().is_empty())
        .map(|name| Participant::new(name.clone()))
        .collect()
}

/// Export rows: header, one row per occupied chair, then everyone without a seat.
///
/// Chairs whose participant or table no longer exists are skipped, and those
/// participants are listed as unassigned.
#[must_use]
pub fn export_rows(plan: &SeatingPlan) -> Vec<Vec<String>> {
    let mut rows = vec![EXPORT_HEADER.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>()];
    let mut seated: HashSet<&str> = HashSet::new();
    let mut seated_rows = Vec::new();

    for (chair, occupant) in &plan.assignments {
        let Some(participant_id) = occupant.as_deref() else {
            continue;
        };
        let Some((table_id, seat)) = parse_chair_id(chair) else {
            continue;
        };
        let Some(position) = plan.tables.iter().position(|t| t.id == table_id) else {
            continue;
        };
        let Some(participant) = plan.participant(participant_id) else {
            continue;
        };
        let table = &plan.tables[position];
        seated_rows.push((position, seat, vec![participant.name.clone(), table.name.clone(), seat.to_string()]));
        seated.insert(participant_id);
    }

    // Table order as drawn, then seat number.
    seated_rows.sort_by_key(|(position, seat, _)| (*position, *seat));
    rows.extend(seated_rows.into_iter().map(|(_, _, row)| row));

    for participant in &plan.participants {
        if !seated.contains(participant.id.as_str()) {
            rows.push(vec![participant.name.clone(), UNASSIGNED_LABEL.to_owned(), String::new()]);
        }
    }
    rows
}

/// Encode rows as CSV (comma separated, `\n` line endings, RFC 4180 quoting).
#[must_use]
pub fn write_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|cell| quote_cell(cell)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Decode CSV text into rows. Accepts `\n` and `\r\n` line endings; blank lines are skipped.
///
/// # Errors
///
/// Returns a [`RosterError`] for malformed quoting.
pub fn read_csv(text: &str) -> Result<Vec<Vec<String>>, RosterError> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut chars = text.chars().peekable();
    let mut line = 1;
    let mut quoted_from: Option<usize> = None;
    let mut after_quote = false;

    while let Some(c) = chars.next() {
        if quoted_from.is_some() {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => {
                    quoted_from = None;
                    after_quote = true;
                }
                '\n' => {
                    line += 1;
                    cell.push(c);
                }
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            ',' => {
                row.push(std::mem::take(&mut cell));
                after_quote = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                finish_row(&mut rows, &mut row, &mut cell);
                after_quote = false;
                line += 1;
            }
            '"' if cell.is_empty() && !after_quote => quoted_from = Some(line),
            _ if after_quote => {
                warn!(line, "stray character after quoted csv field");
                return Err(RosterError::StrayQuote { line });
            }
            _ => cell.push(c),
        }
    }

    if let Some(start) = quoted_from {
        warn!(line = start, "unterminated quoted csv field");
        return Err(RosterError::UnterminatedQuote { line: start });
    }
    finish_row(&mut rows, &mut row, &mut cell);
    Ok(rows)
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, cell: &mut String) {
    row.push(std::mem::take(cell));
    let done = std::mem::take(row);
    if !(done.len() == 1 && done[0].is_empty()) {
        rows.push(done);
    }
}

fn quote_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_owned()
    }
}
