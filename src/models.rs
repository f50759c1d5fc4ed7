// ABOUTME: Model module re-exports from the healthos-core crate
// ABOUTME: Preserves existing import paths while delegating to the foundation crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Domain documents exchanged with the surrounding platform.

pub use healthos_core::models::{
    AlcoholConsumption, AvatarState, BrainState, CurrentIssue, DietQuality, ExerciseFrequency,
    FatIntake, Gender, HealthProfile, HeartState, Lifestyle, LiverState, LungsState, Organ,
    OrganIndicator, Organs, OrganStatus, Severity, SpecialistType, TriageResult,
};
