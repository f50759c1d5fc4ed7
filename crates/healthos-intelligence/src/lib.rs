// ABOUTME: Clinical inference engine for the HealthOS platform
// ABOUTME: Organ classification, derived biometric indices, and specialist triage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

#![deny(unsafe_code)]

//! # HealthOS Intelligence
//!
//! Pure-computation clinical inference engine. Three cooperating components
//! turn a self-reported health profile into renderable organ states, derived
//! biometric indices, and a specialist-routing decision:
//!
//! - [`health_state::HealthStateEngine`]: per-organ tri-state classification
//!   and the aggregate 0-100 health score
//! - [`clinical_metrics::ClinicalMetricsCalculator`]: the derived biometric
//!   index bank (anthropometric, hemodynamic, neuro-endocrine, systemic)
//! - [`triage::TriageRouter`]: weighted specialist assignment and the
//!   system-prompt context block for the conversation layer
//!
//! Every component is a deterministic, side-effect-free function over
//! immutable inputs: no internal state, no I/O, no locks. Callers may invoke
//! them concurrently from any number of threads without coordination.

/// Per-organ classification and the aggregate health score
pub mod health_state;

/// Derived biometric index bank
pub mod clinical_metrics;

/// Condition and symptom keyword tables with matching helpers
pub mod keywords;

/// Threshold and formula constants used across the engine
pub mod physiological_constants;

/// Specialist persona prompt skeletons and greetings
pub mod prompts;

/// Weighted specialist triage and prompt assembly
pub mod triage;

pub use clinical_metrics::{
    BmiCategory, ClinicalMetrics, ClinicalMetricsCalculator, MapBand, RenalBand, RiskBand,
    VitalsBand,
};
pub use health_state::HealthStateEngine;
pub use triage::{ProfileContext, TriageRouter};
