// ABOUTME: Chronological grouping of measurement rows by person and metric
// ABOUTME: Stable date sorting, first-seen person order, and distinct date walks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Helpers shared by the analyzers.
//!
//! Sorting is always stable on the date string, so rows sharing a date keep
//! their input order. People are listed in the order they are first seen.

use std::collections::{BTreeSet, HashMap};

use challenge_core::models::{MeasurementRow, MetricKey, RecordType};

/// A reading of one metric on one date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedValue<'a> {
    /// ISO date of the reading
    pub date: &'a str,
    /// Raw value
    pub value: f64,
}

/// Rows of one person, sorted by date
#[derive(Debug, Clone)]
pub struct PersonRows<'a> {
    /// Person identifier
    pub person: &'a str,
    /// Rows in chronological order
    pub rows: Vec<&'a MeasurementRow>,
}

/// Stable sort of row references by date
pub fn sort_by_date(rows: &mut [&MeasurementRow]) {
    rows.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Rows of `record_type` grouped per person (first-seen order), each sorted by date
#[must_use]
pub fn index_by_person(rows: &[MeasurementRow], record_type: RecordType) -> Vec<PersonRows<'_>> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<PersonRows<'_>> = Vec::new();

    for row in rows.iter().filter(|row| row.record_type == record_type) {
        let index = *positions.entry(row.person.as_str()).or_insert_with(|| {
            groups.push(PersonRows {
                person: row.person.as_str(),
                rows: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].rows.push(row);
    }

    for group in &mut groups {
        sort_by_date(&mut group.rows);
    }
    groups
}

/// Realised rows of one person, sorted by date
#[must_use]
pub fn person_realisation_rows<'a>(
    rows: &'a [MeasurementRow],
    person: &str,
) -> Vec<&'a MeasurementRow> {
    let mut scoped: Vec<&MeasurementRow> = rows
        .iter()
        .filter(|row| row.is_realisation() && row.person == person)
        .collect();
    sort_by_date(&mut scoped);
    scoped
}

/// Per-person chronological readings of one metric over realised rows
///
/// People without any reading of the metric are absent.
#[must_use]
pub fn metric_series_by_person(
    rows: &[MeasurementRow],
    metric: MetricKey,
) -> Vec<(&str, Vec<DatedValue<'_>>)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut grouped: Vec<(&str, Vec<DatedValue<'_>>)> = Vec::new();

    for row in rows.iter().filter(|row| row.is_realisation()) {
        let Some(value) = row.value(metric) else {
            continue;
        };
        let index = *positions.entry(row.person.as_str()).or_insert_with(|| {
            grouped.push((row.person.as_str(), Vec::new()));
            grouped.len() - 1
        });
        grouped[index].1.push(DatedValue {
            date: row.date.as_str(),
            value,
        });
    }

    for (_, values) in &mut grouped {
        values.sort_by(|a, b| a.date.cmp(b.date));
    }
    grouped
}

/// Present values of a metric in row order
#[must_use]
pub fn metric_values(rows: &[&MeasurementRow], metric: MetricKey) -> Vec<f64> {
    rows.iter().filter_map(|row| row.value(metric)).collect()
}

/// Most recent present value of a metric
#[must_use]
pub fn latest_value(rows: &[&MeasurementRow], metric: MetricKey) -> Option<f64> {
    rows.iter().rev().find_map(|row| row.value(metric))
}

/// Distinct dates in ascending order
#[must_use]
pub fn distinct_dates<'a, I>(rows: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a MeasurementRow>,
{
    rows.into_iter()
        .map(|row| row.date.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
