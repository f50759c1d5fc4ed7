// ABOUTME: Intelligence module re-exports from the healthos-intelligence crate
// ABOUTME: Preserves existing import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! # Intelligence Module
//!
//! The three inference components and their supporting tables. This module
//! re-exports from the `healthos-intelligence` crate so the facade exposes a
//! single import surface.

pub use healthos_intelligence::{
    clinical_metrics, health_state, keywords, physiological_constants, prompts, triage,
};

pub use healthos_intelligence::{
    BmiCategory, ClinicalMetrics, ClinicalMetricsCalculator, HealthStateEngine, MapBand,
    ProfileContext, RenalBand, RiskBand, TriageRouter, VitalsBand,
};
