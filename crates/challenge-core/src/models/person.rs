// ABOUTME: Participant metadata attached to the challenge snapshot
// ABOUTME: Holds each person's forfeit ("gage") and case-insensitive lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Metadata for one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonMeta {
    /// Person identifier, as used in measurement rows
    #[serde(rename = "personne")]
    pub person: String,
    /// Forfeit owed if the challenge is lost
    pub gage: Option<String>,
}

/// Find the forfeit of a person by trimmed, case-insensitive name
#[must_use]
pub fn person_gage<'a>(meta: &'a [PersonMeta], name: &str) -> Option<&'a str> {
    let target = name.trim().to_lowercase();
    meta.iter()
        .find(|entry| entry.person.trim().to_lowercase() == target)
        .and_then(|entry| entry.gage.as_deref())
}
