// ABOUTME: Main library entry point for the HealthOS clinical inference engine
// ABOUTME: Facade re-exporting the core models and intelligence components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

#![deny(unsafe_code)]

//! # HealthOS Engine
//!
//! The clinical inference engine of the HealthOS platform. Three cooperating
//! pure-computation components convert a patient's self-reported health
//! profile into renderable organ states, derived biometric indices, and a
//! specialist-routing decision for the conversation layer:
//!
//! - **`HealthStateEngine`**: per-organ tri-state classification plus an
//!   aggregate 0-100 health score
//! - **`ClinicalMetricsCalculator`**: the derived biometric index bank
//! - **`TriageRouter`**: weighted AI-specialist assignment and system-prompt
//!   assembly
//!
//! Persistence, HTTP, authentication, LLM transport, and rendering are
//! external collaborators: they hand the engine a profile document and
//! consume the result documents defined in [`models`].
//!
//! ## Example Usage
//!
//! ```rust
//! use healthos_engine::intelligence::{HealthStateEngine, TriageRouter, ProfileContext};
//! use healthos_engine::models::{Gender, HealthProfile, Lifestyle};
//!
//! let profile = HealthProfile {
//!     age: 34,
//!     weight: 70.0,
//!     height: 175.0,
//!     gender: Gender::Female,
//!     blood_type: "A+".into(),
//!     vulnerabilities: vec!["asthma".into()],
//!     current_issues: vec![],
//!     medications: vec![],
//!     lifestyle: Lifestyle::default(),
//! };
//!
//! let avatar = HealthStateEngine::new().compute_avatar_state(&profile);
//! let context = ProfileContext::from_profile(&profile, Some(&avatar));
//! let triage = TriageRouter::new().assign_specialist(&context);
//! assert!(triage.confidence <= 100);
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// Re-export modules so consumers keep stable import paths regardless of the
// workspace crate split.

/// Unified error handling (`AppError`, `AppResult`)
pub mod errors;

/// Domain documents (profile, avatar state, triage result)
pub mod models;

/// The three inference components
pub mod intelligence;
