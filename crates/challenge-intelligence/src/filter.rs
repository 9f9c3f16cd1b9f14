// ABOUTME: Row selection by person set, record type set, and inclusive date range
// ABOUTME: Produces the scoped row views consumed by every analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use challenge_core::models::{MeasurementRow, RecordType};
use serde::{Deserialize, Serialize};

/// Selection criteria for measurement rows
///
/// An empty person set means every person. Date bounds are inclusive and
/// compared as ISO strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    /// People to keep; empty keeps everyone
    pub people: Vec<String>,
    /// Record types to keep
    pub record_types: Vec<RecordType>,
    /// Earliest date kept
    pub from: Option<String>,
    /// Latest date kept
    pub to: Option<String>,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            record_types: RecordType::ALL.to_vec(),
            from: None,
            to: None,
        }
    }
}

impl RowFilter {
    /// Filter keeping every row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single person
    #[must_use]
    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.people.push(person.into());
        self
    }

    /// Restrict to the given people
    #[must_use]
    pub fn with_people<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.people.extend(people.into_iter().map(Into::into));
        self
    }

    /// Replace the accepted record types
    #[must_use]
    pub fn with_record_types(mut self, record_types: &[RecordType]) -> Self {
        self.record_types = record_types.to_vec();
        self
    }

    /// Keep rows on or after this date
    #[must_use]
    pub fn from_date(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Keep rows on or before this date
    #[must_use]
    pub fn to_date(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Whether a row passes every criterion
    #[must_use]
    pub fn matches(&self, row: &MeasurementRow) -> bool {
        let in_people = self.people.is_empty() || self.people.iter().any(|p| *p == row.person);
        let in_types = self.record_types.contains(&row.record_type);
        let in_from = self.from.as_deref().map_or(true, |from| row.date.as_str() >= from);
        let in_to = self.to.as_deref().map_or(true, |to| row.date.as_str() <= to);
        in_people && in_types && in_from && in_to
    }

    /// Rows passing the filter, in input order
    #[must_use]
    pub fn apply(&self, rows: &[MeasurementRow]) -> Vec<MeasurementRow> {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

/// Filter rows in one call
#[must_use]
pub fn filter_rows(
    rows: &[MeasurementRow],
    people: &[String],
    record_types: &[RecordType],
    from: Option<&str>,
    to: Option<&str>,
) -> Vec<MeasurementRow> {
    let mut filter = RowFilter::new()
        .with_people(people.iter().cloned())
        .with_record_types(record_types);
    filter.from = from.map(str::to_owned);
    filter.to = to.map(str::to_owned);
    filter.apply(rows)
}
