// ABOUTME: Integration tests for the organ/health-state classifier
// ABOUTME: Exercises per-organ rules, the aggregate score, and the wire format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthos_engine::intelligence::HealthStateEngine;
use healthos_engine::models::{
    CurrentIssue, DietQuality, ExerciseFrequency, OrganStatus, Severity,
};

mod common;

#[test]
fn test_health_score_is_always_in_range() {
    common::init_tracing();
    let engine = HealthStateEngine::new();

    // Sweep stress and sleep extremes; the score must stay clamped
    for stress in 1..=10_u8 {
        for sleep_tenths in 0..=120_u32 {
            let mut profile = common::baseline_profile();
            profile.lifestyle.stress_level = stress;
            profile.lifestyle.sleep_hours = f64::from(sleep_tenths) / 10.0;
            let state = engine.compute_avatar_state(&profile);
            assert!(state.health_score <= 100);
        }
    }
}

#[test]
fn test_perfect_lifestyle_reaches_the_ceiling() {
    let mut profile = common::baseline_profile();
    profile.lifestyle.stress_level = 3;
    profile.lifestyle.sleep_hours = 8.0;
    profile.lifestyle.exercise_frequency = ExerciseFrequency::High;
    profile.lifestyle.diet_quality = DietQuality::Excellent;

    let state = HealthStateEngine::new().compute_avatar_state(&profile);

    assert_eq!(state.health_score, 100);
    for (_, status) in state.organs.statuses() {
        assert_eq!(status, OrganStatus::Healthy);
    }
}

#[test]
fn test_heart_disease_profile_matches_contract() {
    let mut profile = common::baseline_profile();
    profile.vulnerabilities = vec!["heart disease".to_owned()];
    profile.lifestyle.smoker = true;
    profile.lifestyle.stress_level = 9;

    let state = HealthStateEngine::new().compute_avatar_state(&profile);

    assert_eq!(state.organs.heart.indicator.status, OrganStatus::Critical);
    assert_eq!(state.organs.heart.bpm, 115);
}

#[test]
fn test_issue_names_match_by_substring() {
    let mut profile = common::baseline_profile();
    profile.current_issues = vec![CurrentIssue {
        name: "Racing heartbeat after coffee".to_owned(),
        severity: Severity::Mild,
    }];

    let state = HealthStateEngine::new().compute_avatar_state(&profile);
    assert_eq!(state.organs.heart.indicator.status, OrganStatus::Critical);
}

#[test]
fn test_avatar_state_serializes_wire_field_names() {
    let state = HealthStateEngine::new().compute_avatar_state(&common::baseline_profile());
    let value = serde_json::to_value(&state).unwrap();

    assert!(value["healthScore"].is_number());
    let heart = &value["organs"]["heart"];
    assert_eq!(heart["status"], "healthy");
    assert_eq!(heart["color"], "#00e676");
    assert_eq!(heart["emissiveColor"], "#00c853");
    assert!(heart["glowIntensity"].is_number());
    assert!(heart["pulseScale"].is_number());
    assert_eq!(value["organs"]["liver"]["fatLevel"], "moderate");
    assert!(value["organs"]["lungs"]["capacityPercent"].is_number());
    assert!(value["organs"]["brain"]["stressLevel"].is_number());
}

#[test]
fn test_parallel_invocations_agree() {
    let mut profile = common::baseline_profile();
    profile.vulnerabilities = vec!["diabetes".to_owned()];
    profile.lifestyle.smoker = true;

    let reference = HealthStateEngine::new().compute_avatar_state(&profile);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let profile = profile.clone();
            std::thread::spawn(move || HealthStateEngine::new().compute_avatar_state(&profile))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), reference);
    }
}
