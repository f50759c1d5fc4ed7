// ABOUTME: Shared helpers for integration tests
// ABOUTME: Profile builders and tracing setup used across test suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

#![allow(missing_docs, dead_code)]

use healthos_engine::models::{Gender, HealthProfile, Lifestyle};

/// Initialize tracing output for test debugging; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A healthy adult baseline profile with default lifestyle.
pub fn baseline_profile() -> HealthProfile {
    HealthProfile {
        age: 28,
        weight: 72.0,
        height: 175.0,
        gender: Gender::Male,
        blood_type: "O+".to_owned(),
        vulnerabilities: vec![],
        current_issues: vec![],
        medications: vec![],
        lifestyle: Lifestyle::default(),
    }
}
