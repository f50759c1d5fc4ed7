// ABOUTME: Criterion benchmarks for the clinical inference engine
// ABOUTME: Measures organ classification, metrics derivation, and triage latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Criterion benchmarks for the clinical inference engine.
//!
//! Measures the latency of the three pure-computation components over a
//! representative multi-condition profile.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use healthos_engine::intelligence::{
    ClinicalMetricsCalculator, HealthStateEngine, ProfileContext, TriageRouter,
};
use healthos_engine::models::{
    AlcoholConsumption, CurrentIssue, DietQuality, ExerciseFrequency, FatIntake, Gender,
    HealthProfile, Lifestyle, Severity,
};

/// A profile that exercises every scoring path
fn loaded_profile() -> HealthProfile {
    HealthProfile {
        age: 58,
        weight: 96.0,
        height: 172.0,
        gender: Gender::Male,
        blood_type: "B+".to_owned(),
        vulnerabilities: vec![
            "hypertension".to_owned(),
            "diabetes".to_owned(),
            "acid reflux".to_owned(),
        ],
        current_issues: vec![
            CurrentIssue {
                name: "chest pain".to_owned(),
                severity: Severity::Moderate,
            },
            CurrentIssue {
                name: "fatigue".to_owned(),
                severity: Severity::Mild,
            },
        ],
        medications: vec!["metformin".to_owned()],
        lifestyle: Lifestyle {
            smoker: true,
            alcohol_consumption: AlcoholConsumption::Moderate,
            exercise_frequency: ExerciseFrequency::None,
            diet_quality: DietQuality::Poor,
            stress_level: 8,
            sleep_hours: 5.5,
            fat_intake: FatIntake::High,
        },
    }
}

fn bench_avatar_state(c: &mut Criterion) {
    let engine = HealthStateEngine::new();
    let profile = loaded_profile();

    c.bench_function("avatar_state", |b| {
        b.iter(|| engine.compute_avatar_state(black_box(&profile)));
    });
}

fn bench_clinical_metrics(c: &mut Criterion) {
    let profile = loaded_profile();
    let organs = HealthStateEngine::new()
        .compute_avatar_state(&profile)
        .organs;
    let calculator = ClinicalMetricsCalculator::new();

    c.bench_function("clinical_metrics", |b| {
        b.iter(|| {
            calculator
                .compute(black_box(&profile), black_box(&organs))
                .unwrap()
        });
    });
}

fn bench_triage(c: &mut Criterion) {
    let profile = loaded_profile();
    let avatar = HealthStateEngine::new().compute_avatar_state(&profile);
    let context = ProfileContext::from_profile(&profile, Some(&avatar));
    let router = TriageRouter::new();

    c.bench_function("triage_assignment", |b| {
        b.iter(|| router.assign_specialist(black_box(&context)));
    });
}

criterion_group!(
    benches,
    bench_avatar_state,
    bench_clinical_metrics,
    bench_triage
);
criterion_main!(benches);
