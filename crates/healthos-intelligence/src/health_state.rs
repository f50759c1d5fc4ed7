// ABOUTME: Per-organ health classification and aggregate score computation
// ABOUTME: Maps a health profile to tri-state organ statuses and avatar parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Organ/health-state classifier.
//!
//! Converts a self-reported [`HealthProfile`] into the renderable
//! [`AvatarState`]: a tri-state classification per organ (with the animation
//! parameters the presentation layer binds to) and an aggregate 0-100 health
//! score. The computation is pure and total; any well-formed profile yields a
//! state without error.

use crate::keywords::{any_label_contains, label_contains};
use crate::physiological_constants::{cardiac, neurological, pulmonary, score_modifiers};
use healthos_core::models::{
    AlcoholConsumption, AvatarState, BrainState, DietQuality, ExerciseFrequency, FatIntake,
    HealthProfile, HeartState, LiverState, LungsState, OrganIndicator, Organs, OrganStatus,
};
use tracing::debug;

/// Organ/health-state classification engine
///
/// Stateless; a single instance may be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct HealthStateEngine;

impl HealthStateEngine {
    /// Create a new engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classify all six organs and derive the aggregate health score
    #[must_use]
    pub fn compute_avatar_state(&self, profile: &HealthProfile) -> AvatarState {
        let heart_status = Self::classify_heart(profile);
        let liver_status = Self::classify_liver(profile);
        let lungs_status = Self::classify_lungs(profile);
        let kidneys_status = Self::classify_kidneys(profile);
        let brain_status = Self::classify_brain(profile);
        let stomach_status = Self::classify_stomach(profile);

        let health_score = Self::aggregate_score(
            profile,
            [
                heart_status,
                liver_status,
                lungs_status,
                kidneys_status,
                brain_status,
                stomach_status,
            ],
        );

        debug!(
            health_score,
            heart = %heart_status,
            liver = %liver_status,
            lungs = %lungs_status,
            kidneys = %kidneys_status,
            brain = %brain_status,
            stomach = %stomach_status,
            "computed avatar state"
        );

        let (bpm, pulse_scale) = match heart_status {
            OrganStatus::Healthy => (cardiac::HEALTHY_BPM, cardiac::HEALTHY_PULSE_SCALE),
            OrganStatus::Warning => (cardiac::WARNING_BPM, cardiac::WARNING_PULSE_SCALE),
            OrganStatus::Critical => (cardiac::CRITICAL_BPM, cardiac::CRITICAL_PULSE_SCALE),
        };
        let capacity_percent = match lungs_status {
            OrganStatus::Healthy => pulmonary::HEALTHY_CAPACITY_PERCENT,
            OrganStatus::Warning => pulmonary::WARNING_CAPACITY_PERCENT,
            OrganStatus::Critical => pulmonary::CRITICAL_CAPACITY_PERCENT,
        };

        AvatarState {
            health_score,
            organs: Organs {
                heart: HeartState {
                    indicator: OrganIndicator::from(heart_status),
                    bpm,
                    pulse_scale,
                },
                liver: LiverState {
                    indicator: OrganIndicator::from(liver_status),
                    fat_level: profile.lifestyle.fat_intake,
                },
                lungs: LungsState {
                    indicator: OrganIndicator::from(lungs_status),
                    capacity_percent,
                },
                kidneys: OrganIndicator::from(kidneys_status),
                brain: BrainState {
                    indicator: OrganIndicator::from(brain_status),
                    stress_level: profile.lifestyle.stress_level,
                },
                stomach: OrganIndicator::from(stomach_status),
            },
        }
    }

    /// Heart: cardiac conditions or combined stress and smoking
    fn classify_heart(profile: &HealthProfile) -> OrganStatus {
        let has_cardiac_condition = any_label_contains(&profile.vulnerabilities, "hypertension")
            || any_label_contains(&profile.vulnerabilities, "heart disease")
            || profile
                .current_issues
                .iter()
                .any(|issue| label_contains(&issue.name, "heart"));
        let high_stress = profile.lifestyle.stress_level > cardiac::HIGH_STRESS_THRESHOLD;
        let smoker = profile.lifestyle.smoker;

        if has_cardiac_condition || (high_stress && smoker) {
            OrganStatus::Critical
        } else if high_stress || smoker {
            OrganStatus::Warning
        } else {
            OrganStatus::Healthy
        }
    }

    /// Liver: dietary fat combined with alcohol, or a known liver condition
    fn classify_liver(profile: &HealthProfile) -> OrganStatus {
        let high_fat = profile.lifestyle.fat_intake == FatIntake::High;
        let high_alcohol = profile.lifestyle.alcohol_consumption == AlcoholConsumption::High;

        if (high_fat && high_alcohol) || any_label_contains(&profile.vulnerabilities, "liver disease")
        {
            OrganStatus::Critical
        } else if high_fat || high_alcohol {
            OrganStatus::Warning
        } else {
            OrganStatus::Healthy
        }
    }

    /// Lungs: smoking combined with a reported lung issue, or asthma
    fn classify_lungs(profile: &HealthProfile) -> OrganStatus {
        let smoker = profile.lifestyle.smoker;
        let lung_issue = profile
            .current_issues
            .iter()
            .any(|issue| label_contains(&issue.name, "lungs"));

        if smoker && lung_issue {
            OrganStatus::Critical
        } else if smoker || any_label_contains(&profile.vulnerabilities, "asthma") {
            OrganStatus::Warning
        } else {
            OrganStatus::Healthy
        }
    }

    /// Kidneys: diabetes combined with hypertension, or a known renal condition
    fn classify_kidneys(profile: &HealthProfile) -> OrganStatus {
        let diabetic = any_label_contains(&profile.vulnerabilities, "diabetes");
        let hypertensive = any_label_contains(&profile.vulnerabilities, "hypertension");

        if diabetic && hypertensive {
            OrganStatus::Critical
        } else if diabetic || any_label_contains(&profile.vulnerabilities, "kidney disease") {
            OrganStatus::Warning
        } else {
            OrganStatus::Healthy
        }
    }

    /// Brain: sustained stress or sleep deprivation
    fn classify_brain(profile: &HealthProfile) -> OrganStatus {
        let stress = profile.lifestyle.stress_level;
        let sleep = profile.lifestyle.sleep_hours;

        if stress > neurological::CRITICAL_STRESS_THRESHOLD
            || sleep < neurological::CRITICAL_SLEEP_HOURS
        {
            OrganStatus::Critical
        } else if stress > neurological::WARNING_STRESS_THRESHOLD
            || sleep < neurological::WARNING_SLEEP_HOURS
        {
            OrganStatus::Warning
        } else {
            OrganStatus::Healthy
        }
    }

    /// Stomach: poor diet or irritable bowel; no critical tier is defined
    fn classify_stomach(profile: &HealthProfile) -> OrganStatus {
        if profile.lifestyle.diet_quality == DietQuality::Poor
            || any_label_contains(&profile.vulnerabilities, "ibs")
        {
            OrganStatus::Warning
        } else {
            OrganStatus::Healthy
        }
    }

    /// Mean of the organ category scores plus bounded lifestyle modifiers
    fn aggregate_score(profile: &HealthProfile, statuses: [OrganStatus; 6]) -> u8 {
        let base: f64 = statuses.iter().map(|status| status.score()).sum::<f64>()
            / organ_count(statuses.len());

        let lifestyle = &profile.lifestyle;
        let mut modifier = 0.0;
        if lifestyle.exercise_frequency == ExerciseFrequency::High {
            modifier += score_modifiers::HIGH_EXERCISE_BONUS;
        }
        if lifestyle.diet_quality == DietQuality::Excellent {
            modifier += score_modifiers::EXCELLENT_DIET_BONUS;
        }
        if lifestyle.sleep_hours >= score_modifiers::RESTFUL_SLEEP_HOURS {
            modifier += score_modifiers::RESTFUL_SLEEP_BONUS;
        }
        if lifestyle.smoker {
            modifier -= score_modifiers::SMOKER_PENALTY;
        }
        if lifestyle.alcohol_consumption == AlcoholConsumption::High {
            modifier -= score_modifiers::HIGH_ALCOHOL_PENALTY;
        }

        (base + modifier).round().clamp(0.0, 100.0) as u8
    }
}

/// Organ count as f64 for the score mean
#[allow(clippy::cast_precision_loss)]
fn organ_count(len: usize) -> f64 {
    len as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use healthos_core::models::{CurrentIssue, Gender, Lifestyle, Severity};

    fn baseline_profile() -> HealthProfile {
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

    #[test]
    fn test_ideal_profile_scores_one_hundred() {
        let mut profile = baseline_profile();
        profile.lifestyle.stress_level = 3;
        profile.lifestyle.sleep_hours = 8.0;
        profile.lifestyle.exercise_frequency = ExerciseFrequency::High;
        profile.lifestyle.diet_quality = DietQuality::Excellent;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);

        for (_, status) in state.organs.statuses() {
            assert_eq!(status, OrganStatus::Healthy);
        }
        // 100 base + 5 exercise + 5 diet + 3 sleep, clamped back to 100
        assert_eq!(state.health_score, 100);
    }

    #[test]
    fn test_heart_disease_smoker_is_critical() {
        let mut profile = baseline_profile();
        profile.vulnerabilities = vec!["heart disease".to_owned()];
        profile.lifestyle.smoker = true;
        profile.lifestyle.stress_level = 9;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);

        assert_eq!(state.organs.heart.indicator.status, OrganStatus::Critical);
        assert_eq!(state.organs.heart.bpm, 115);
        assert!((state.organs.heart.pulse_scale - 1.18).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stress_and_smoking_combine_to_critical_heart() {
        let mut profile = baseline_profile();
        profile.lifestyle.smoker = true;
        profile.lifestyle.stress_level = 8;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.heart.indicator.status, OrganStatus::Critical);
    }

    #[test]
    fn test_smoker_alone_is_heart_warning() {
        let mut profile = baseline_profile();
        profile.lifestyle.smoker = true;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.heart.indicator.status, OrganStatus::Warning);
        assert_eq!(state.organs.heart.bpm, 95);
    }

    #[test]
    fn test_cardiac_matching_is_case_insensitive_substring() {
        let mut profile = baseline_profile();
        profile.vulnerabilities = vec!["Hypertension (diagnosed 2022)".to_owned()];

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.heart.indicator.status, OrganStatus::Critical);
    }

    #[test]
    fn test_liver_fat_and_alcohol_is_critical() {
        let mut profile = baseline_profile();
        profile.lifestyle.fat_intake = FatIntake::High;
        profile.lifestyle.alcohol_consumption = AlcoholConsumption::High;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.liver.indicator.status, OrganStatus::Critical);
        assert_eq!(state.organs.liver.fat_level, FatIntake::High);
    }

    #[test]
    fn test_liver_fat_alone_is_warning() {
        let mut profile = baseline_profile();
        profile.lifestyle.fat_intake = FatIntake::High;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.liver.indicator.status, OrganStatus::Warning);
    }

    #[test]
    fn test_smoker_with_lung_issue_is_critical() {
        let mut profile = baseline_profile();
        profile.lifestyle.smoker = true;
        profile.current_issues = vec![CurrentIssue {
            name: "Lungs feel tight".to_owned(),
            severity: Severity::Moderate,
        }];

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.lungs.indicator.status, OrganStatus::Critical);
        assert_eq!(state.organs.lungs.capacity_percent, 55);
    }

    #[test]
    fn test_asthma_is_lung_warning() {
        let mut profile = baseline_profile();
        profile.vulnerabilities = vec!["asthma".to_owned()];

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.lungs.indicator.status, OrganStatus::Warning);
        assert_eq!(state.organs.lungs.capacity_percent, 72);
    }

    #[test]
    fn test_diabetes_with_hypertension_is_critical_kidneys() {
        let mut profile = baseline_profile();
        profile.vulnerabilities = vec!["diabetes".to_owned(), "hypertension".to_owned()];

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.kidneys.status, OrganStatus::Critical);
    }

    #[test]
    fn test_diabetes_alone_is_kidney_warning() {
        let mut profile = baseline_profile();
        profile.vulnerabilities = vec!["diabetes".to_owned()];

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.kidneys.status, OrganStatus::Warning);
    }

    #[test]
    fn test_sleep_deprivation_is_critical_brain() {
        let mut profile = baseline_profile();
        profile.lifestyle.sleep_hours = 4.5;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.brain.indicator.status, OrganStatus::Critical);
    }

    #[test]
    fn test_brain_mirrors_lifestyle_stress() {
        let mut profile = baseline_profile();
        profile.lifestyle.stress_level = 7;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.brain.indicator.status, OrganStatus::Warning);
        assert_eq!(state.organs.brain.stress_level, 7);
    }

    #[test]
    fn test_stomach_never_goes_critical() {
        let mut profile = baseline_profile();
        profile.lifestyle.diet_quality = DietQuality::Poor;
        profile.vulnerabilities = vec!["IBS".to_owned()];

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert_eq!(state.organs.stomach.status, OrganStatus::Warning);
    }

    #[test]
    fn test_score_is_always_clamped() {
        let mut profile = baseline_profile();
        profile.vulnerabilities = vec![
            "heart disease".to_owned(),
            "liver disease".to_owned(),
            "diabetes".to_owned(),
            "hypertension".to_owned(),
            "IBS".to_owned(),
        ];
        profile.current_issues = vec![CurrentIssue {
            name: "lungs".to_owned(),
            severity: Severity::Severe,
        }];
        profile.lifestyle.smoker = true;
        profile.lifestyle.stress_level = 10;
        profile.lifestyle.sleep_hours = 3.0;
        profile.lifestyle.alcohol_consumption = AlcoholConsumption::High;
        profile.lifestyle.diet_quality = DietQuality::Poor;
        profile.lifestyle.fat_intake = FatIntake::High;

        let state = HealthStateEngine::new().compute_avatar_state(&profile);
        assert!(state.health_score <= 100);
        // Five critical organs and a warning stomach with every penalty applied
        assert_eq!(state.health_score, 11);
    }

    #[test]
    fn test_computation_is_idempotent() {
        let mut profile = baseline_profile();
        profile.vulnerabilities = vec!["asthma".to_owned()];
        profile.lifestyle.stress_level = 8;

        let engine = HealthStateEngine::new();
        let first = engine.compute_avatar_state(&profile);
        let second = engine.compute_avatar_state(&profile);
        assert_eq!(first, second);
    }
}
