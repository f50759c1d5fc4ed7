// ABOUTME: Domain model module for the HealthOS clinical intelligence engine
// ABOUTME: Re-exports profile, avatar state, and triage documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Domain documents exchanged with the surrounding platform.
//!
//! Serialized field names are the compatibility surface shared with the
//! persistence and presentation collaborators; documents serialize with
//! `camelCase` keys and lowercase enum values.

/// Self-reported patient health profile and lifestyle enumerations
pub mod health_profile;

/// Per-organ classification output and the aggregate avatar state
pub mod avatar;

/// Specialist personas and the triage decision document
pub mod triage;

pub use avatar::{
    AvatarState, BrainState, HeartState, LiverState, LungsState, Organ, OrganIndicator, Organs,
    OrganStatus,
};
pub use health_profile::{
    AlcoholConsumption, CurrentIssue, DietQuality, ExerciseFrequency, FatIntake, Gender,
    HealthProfile, Lifestyle, Severity,
};
pub use triage::{SpecialistType, TriageResult};
