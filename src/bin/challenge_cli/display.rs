// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Plain text rendering of challenge reports for challenge-cli
// ABOUTME: Converts raw values to display units and formats them with their unit

use pierre_challenge::dashboard::{ForecastReport, GroupReport, PersonalReport};
use pierre_challenge::intelligence::{GlobalRecord, MetricProgressionSummary, StepVariation};
use pierre_challenge::models::{format_metric, MetricKey};

fn display_value(key: MetricKey, raw: f64) -> String {
    let metric = key.metric();
    format_metric(Some(metric.to_display_value(raw)), metric.unit)
}

fn signed_delta(key: MetricKey, delta: f64) -> String {
    let sign = if delta < 0.0 { "-" } else { "+" };
    format!("{sign}{}", display_value(key, delta.abs()))
}

fn pct(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:+.1}%"))
}

fn variation_line(label: &str, variation: Option<&StepVariation>) {
    match variation {
        Some(v) => println!(
            "   {label}: {} on {} ({}, {} -> {})",
            v.person,
            v.metric_label,
            signed_delta(v.metric_key, v.delta),
            v.from_date,
            v.to_date
        ),
        None => println!("   {label}: -"),
    }
}

/// Display the group page
pub fn display_group(report: &GroupReport) {
    println!("\nGROUP OVERVIEW");
    println!("{}", "=".repeat(60));
    println!("   Positive recent progressions: {}", report.kpis.positive_recent_count);
    println!(
        "   Average progression: {:+.1}%",
        report.kpis.average_progression_pct
    );
    println!("   Goals reached: {}", report.kpis.goals_reached);

    println!("\nHIGHLIGHTS");
    variation_line("Best progression", report.best_global_progression.as_ref());
    variation_line("Best recent progression", report.best_recent_progression.as_ref());
    variation_line("Worst regression", report.worst_regression.as_ref());

    println!("\nPEOPLE");
    println!("{}", "-".repeat(60));
    for summary in &report.summaries {
        println!(
            "   {:<20} score {:>+7.1}%   momentum {:>+6.1}%   {}",
            summary.person,
            summary.score,
            summary.recent_momentum,
            summary.badge.label()
        );
    }

    if let (Some(first), Some(last)) = (report.average_series.first(), report.average_series.last()) {
        println!(
            "\n   Group average: {:+.1}% ({}) -> {:+.1}% ({})",
            first.score, first.date, last.score, last.date
        );
    }
}

/// Display the personal page
pub fn display_personal(report: &PersonalReport) {
    println!("\n{}", report.person.to_uppercase());
    println!("{}", "=".repeat(60));
    println!("   Evolution score: {:+.1}%", report.score);
    println!("   Total variation: {:+.1}", report.total_variation);
    println!(
        "   Recent momentum: {:+.1}% ({})",
        report.recent_momentum,
        report.badge.label()
    );
    if let Some(gage) = &report.gage {
        println!("   Gage: {gage}");
    }
    if !report.improvement_zones.is_empty() {
        println!("   Improvement zones: {}", report.improvement_zones.join(", "));
    }

    println!("\nMETRICS");
    println!("{}", "-".repeat(60));
    for detail in &report.metrics {
        let badge = detail.badge.map_or("", |badge| badge.label());
        println!(
            "   {:<20} {:>8}   total {:>7}   recent {:>7}   {badge}",
            detail.metric_label,
            format_metric(detail.latest, detail.unit),
            pct(detail.total_progress_pct),
            pct(detail.recent_progress_pct),
        );
    }
}

/// Display global records and per-metric extremes
pub fn display_records(records: &[GlobalRecord], extremes: &[MetricProgressionSummary]) {
    println!("\nRECORDS");
    println!("{}", "=".repeat(60));
    for record in records {
        println!(
            "   {:<20} {:>8}   {} ({})",
            record.metric_label,
            display_value(record.metric_key, record.value),
            record.person,
            record.date
        );
    }

    println!("\nBEST AND WORST TRANSITIONS");
    println!("{}", "-".repeat(60));
    for summary in extremes {
        let describe = |variation: Option<&StepVariation>| {
            variation.map_or_else(
                || "-".to_owned(),
                |v| format!("{} {}", v.person, signed_delta(v.metric_key, v.delta)),
            )
        };
        println!(
            "   {:<20} best {:<24} worst {}",
            summary.metric_label,
            describe(summary.best.as_ref()),
            describe(summary.worst.as_ref())
        );
    }
}

/// Display a forecast lookup
pub fn display_forecast(report: &ForecastReport) {
    let metric = report.metric_key.metric();
    let value = report.value.map(|raw| metric.to_display_value(raw));
    println!(
        "{} {} on {}: {}",
        report.person,
        metric.label,
        report.date,
        format_metric(value, metric.unit)
    );
}
