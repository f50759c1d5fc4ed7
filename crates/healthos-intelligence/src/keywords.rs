// ABOUTME: Condition and symptom keyword tables with case-insensitive matching
// ABOUTME: Auditable replacement for ad hoc free-text substring checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Keyword tables for matching free-text vulnerability and issue labels.
//!
//! Profiles carry self-reported, free-text condition labels. Matching is
//! case-insensitive substring containment against these fixed tables, so the
//! rule set stays auditable and testable in isolation rather than being
//! scattered across call sites.

/// Cardiac condition labels routed to cardiology
pub const CARDIAC_CONDITIONS: [&str; 3] = ["hypertension", "heart disease", "high blood pressure"];

/// Pulmonary condition labels routed to pulmonology
pub const PULMONARY_CONDITIONS: [&str; 3] = ["asthma", "copd", "bronchitis"];

/// Neurological and mental-wellness condition labels routed to neurology
pub const NEURO_CONDITIONS: [&str; 4] = ["anxiety", "depression", "insomnia", "migraine"];

/// Digestive condition labels routed to gastroenterology
pub const GASTRO_CONDITIONS: [&str; 4] = ["ibs", "liver disease", "acid reflux", "crohn's"];

/// Renal condition labels routed to nephrology
pub const RENAL_CONDITIONS: [&str; 2] = ["kidney disease", "ckd"];

/// Cardiac symptom labels in the current-issue list
pub const CARDIAC_ISSUES: [&str; 3] = ["chest pain", "palpitations", "high bp"];

/// Pulmonary symptom labels in the current-issue list
pub const PULMONARY_ISSUES: [&str; 3] = ["shortness of breath", "wheezing", "cough"];

/// Neurological symptom labels in the current-issue list
pub const NEURO_ISSUES: [&str; 4] = ["headache", "insomnia", "high stress", "fatigue"];

/// Digestive symptom labels in the current-issue list
pub const GASTRO_ISSUES: [&str; 4] = ["digestive", "stomach", "nausea", "bloating"];

/// Musculoskeletal symptom labels routed to general practice
pub const GP_ISSUES: [&str; 2] = ["back pain", "joint pain"];

/// True when `label` contains `term`, ignoring case
#[must_use]
pub fn label_contains(label: &str, term: &str) -> bool {
    label.to_lowercase().contains(term)
}

/// True when any label in `labels` contains `term`, ignoring case
#[must_use]
pub fn any_label_contains(labels: &[String], term: &str) -> bool {
    labels.iter().any(|label| label_contains(label, term))
}

/// True when `label` contains any term of `table`, ignoring case
#[must_use]
pub fn label_matches_table(label: &str, table: &[&str]) -> bool {
    let lowered = label.to_lowercase();
    table.iter().any(|term| lowered.contains(term))
}
