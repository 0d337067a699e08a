//! Business transaction history: a bounded, append-only log with CSV export.
//!
//! Entries are stored in insertion (chronological) order; the visible list
//! and row recall use reverse-chronological order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::HISTORY_CAPACITY;

/// A recorded business calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The evaluated expression text.
    #[serde(rename = "expr")]
    pub expression: String,
    /// The formatted result.
    #[serde(rename = "res")]
    pub result: String,
    /// Customer attribution; empty when none was given.
    #[serde(default)]
    pub customer: String,
}

impl HistoryEntry {
    /// Create an entry. The customer name is stored as given; trim it at the
    /// call site.
    #[must_use]
    pub fn new(
        expression: impl Into<String>,
        result: impl Into<String>,
        customer: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
            customer: customer.into(),
        }
    }

    /// The visible row text: `<customer: ><expression> = <result>`, with the
    /// customer segment omitted when empty.
    #[must_use]
    pub fn display_line(&self) -> String {
        if self.customer.is_empty() {
            format!("{} = {}", self.expression, self.result)
        } else {
            format!("{}: {} = {}", self.customer, self.expression, self.result)
        }
    }
}

/// Ordered log of business entries, FIFO-evicted past [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, dropping the oldest when the log is full.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion (chronological) order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries in display (reverse-chronological) order.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// The entry at `row` counted in display order (0 = newest).
    #[must_use]
    pub fn display_row(&self, row: usize) -> Option<&HistoryEntry> {
        self.entries.iter().rev().nth(row)
    }

    /// Serialize the full log (insertion order) as CSV.
    ///
    /// Header row `Customer,Expression,Result`; every field double-quote
    /// wrapped, fields comma-joined, rows newline-joined, no trailing
    /// newline. Embedded quotes are doubled so the fields stay well-formed.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let header = csv_row(["Customer", "Expression", "Result"]);
        let rows = self.entries.iter().map(|entry| {
            csv_row([
                entry.customer.as_str(),
                entry.expression.as_str(),
                entry.result.as_str(),
            ])
        });
        std::iter::once(header)
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn csv_row(fields: [&str; 3]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
