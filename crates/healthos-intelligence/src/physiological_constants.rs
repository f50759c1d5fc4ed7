// ABOUTME: Threshold and formula constants for the clinical inference engine
// ABOUTME: Organ classification cutoffs, score modifiers, and biometric coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Physiological constants used throughout the inference engine.
//!
//! Values in the formula modules come from the published equations they are
//! named after; classification cutoffs are the platform's documented
//! behavioral contract and must be reproduced exactly for output parity
//! across releases.

/// Cardiac classification cutoffs and animation parameters
pub mod cardiac {
    /// Stress level above which cardiac strain is assumed
    pub const HIGH_STRESS_THRESHOLD: u8 = 7;
    /// Resting heart rate for a healthy heart (bpm)
    pub const HEALTHY_BPM: u16 = 72;
    /// Resting heart rate in warning state (bpm)
    pub const WARNING_BPM: u16 = 95;
    /// Resting heart rate in critical state (bpm)
    pub const CRITICAL_BPM: u16 = 115;
    /// Pulse animation scale for a healthy heart
    pub const HEALTHY_PULSE_SCALE: f64 = 1.05;
    /// Pulse animation scale in warning state
    pub const WARNING_PULSE_SCALE: f64 = 1.12;
    /// Pulse animation scale in critical state
    pub const CRITICAL_PULSE_SCALE: f64 = 1.18;
}

/// Pulmonary capacity estimates per classification tier
pub mod pulmonary {
    /// Estimated lung capacity for healthy lungs (percent)
    pub const HEALTHY_CAPACITY_PERCENT: u8 = 95;
    /// Estimated lung capacity in warning state (percent)
    pub const WARNING_CAPACITY_PERCENT: u8 = 72;
    /// Estimated lung capacity in critical state (percent)
    pub const CRITICAL_CAPACITY_PERCENT: u8 = 55;
}

/// Neurological classification cutoffs
pub mod neurological {
    /// Stress level above which the brain is critical
    pub const CRITICAL_STRESS_THRESHOLD: u8 = 8;
    /// Stress level above which the brain is in warning state
    pub const WARNING_STRESS_THRESHOLD: u8 = 6;
    /// Nightly sleep below which the brain is critical (hours)
    pub const CRITICAL_SLEEP_HOURS: f64 = 5.0;
    /// Nightly sleep below which the brain is in warning state (hours)
    pub const WARNING_SLEEP_HOURS: f64 = 6.0;
}

/// Additive lifestyle modifiers applied to the aggregate health score
pub mod score_modifiers {
    /// Bonus for high exercise frequency
    pub const HIGH_EXERCISE_BONUS: f64 = 5.0;
    /// Bonus for an excellent diet
    pub const EXCELLENT_DIET_BONUS: f64 = 5.0;
    /// Bonus for restful sleep
    pub const RESTFUL_SLEEP_BONUS: f64 = 3.0;
    /// Nightly sleep at or above which the restful-sleep bonus applies (hours)
    pub const RESTFUL_SLEEP_HOURS: f64 = 8.0;
    /// Penalty for smoking
    pub const SMOKER_PENALTY: f64 = 10.0;
    /// Penalty for high alcohol consumption
    pub const HIGH_ALCOHOL_PENALTY: f64 = 5.0;
}

/// Anthropometric formula coefficients
///
/// References:
/// - Du Bois, D., & Du Bois, E.F. (1916). A formula to estimate the
///   approximate surface area if height and weight be known.
///   *Archives of Internal Medicine*, 17(6), 863-871.
/// - Mifflin, M.D., et al. (1990). A new predictive equation for resting
///   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
///   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
/// - Boer, P. (1984). Estimated lean body mass as an index for normalization
///   of body fluid volumes in humans. *American Journal of Physiology*,
///   247(4), F632-F636.
pub mod anthropometric {
    /// Du Bois BSA scale factor
    pub const DU_BOIS_FACTOR: f64 = 0.007_184;
    /// Du Bois height exponent
    pub const DU_BOIS_HEIGHT_EXP: f64 = 0.725;
    /// Du Bois weight exponent
    pub const DU_BOIS_WEIGHT_EXP: f64 = 0.425;

    /// Mifflin-St Jeor weight coefficient (kcal per kg)
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient (kcal per cm)
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient (kcal per year)
    pub const MSJ_AGE_COEF: f64 = 5.0;
    /// Mifflin-St Jeor male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Mifflin-St Jeor female constant
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Boer lean-body-mass male coefficients (weight, height, constant)
    pub const BOER_MALE: (f64, f64, f64) = (0.407, 0.267, -19.2);
    /// Boer lean-body-mass female coefficients (weight, height, constant)
    pub const BOER_FEMALE: (f64, f64, f64) = (0.252, 0.473, -48.3);

    /// BMI underweight/normal boundary (kg/m^2)
    pub const BMI_UNDERWEIGHT_LIMIT: f64 = 18.5;
    /// BMI normal/overweight boundary (kg/m^2)
    pub const BMI_OVERWEIGHT_LIMIT: f64 = 25.0;
    /// BMI overweight/obese boundary (kg/m^2)
    pub const BMI_OBESE_LIMIT: f64 = 30.0;
}

/// TDEE activity multipliers per exercise frequency tier
///
/// Reference: McArdle, W.D., et al. (2010). *Exercise Physiology: Nutrition,
/// Energy, and Human Performance* (7th ed.).
pub mod activity_factors {
    /// Sedentary multiplier
    pub const SEDENTARY: f64 = 1.2;
    /// Light activity multiplier (1-3 sessions/week)
    pub const LIGHT: f64 = 1.375;
    /// Moderate activity multiplier (3-5 sessions/week)
    pub const MODERATE: f64 = 1.55;
    /// High activity multiplier (6-7 sessions/week)
    pub const HIGH: f64 = 1.725;
}

/// Blood pressure estimation: baseline and lifestyle deltas (mmHg)
pub mod hemodynamics {
    /// Baseline systolic pressure
    pub const BASE_SYSTOLIC: i32 = 120;
    /// Baseline diastolic pressure
    pub const BASE_DIASTOLIC: i32 = 80;
    /// Delta applied for stress above the cardiac threshold
    pub const HIGH_STRESS_DELTA: (i32, i32) = (12, 8);
    /// Delta applied for smoking
    pub const SMOKER_DELTA: (i32, i32) = (8, 5);
    /// Delta applied for high exercise frequency
    pub const HIGH_EXERCISE_DELTA: (i32, i32) = (-6, -4);
    /// Delta applied for high alcohol consumption
    pub const HIGH_ALCOHOL_DELTA: (i32, i32) = (10, 6);
    /// Delta applied for obesity (BMI over 30)
    pub const OBESE_DELTA: (i32, i32) = (8, 5);
    /// Delta applied past age 50
    pub const OVER_FIFTY_DELTA: (i32, i32) = (10, 3);
    /// Age above which the age delta applies
    pub const AGE_DELTA_THRESHOLD: u32 = 50;

    /// Lower bound of the normal mean-arterial-pressure band (mmHg)
    pub const MAP_NORMAL_MIN: i32 = 70;
    /// Upper bound of the normal mean-arterial-pressure band (mmHg)
    pub const MAP_NORMAL_MAX: i32 = 100;

    /// SpO2 clamp range (percent)
    pub const SPO2_RANGE: (i32, i32) = (88, 100);
    /// SpO2 at or above which saturation is normal (percent)
    pub const SPO2_NORMAL_MIN: i32 = 95;
}

/// Heart rate variability estimation terms (milliseconds)
pub mod hrv {
    /// Age-independent HRV baseline
    pub const BASELINE: f64 = 65.0;
    /// HRV decline per year of age
    pub const AGE_DECLINE_PER_YEAR: f64 = 0.3;
    /// Bonus for high exercise frequency
    pub const HIGH_EXERCISE_BONUS: f64 = 15.0;
    /// Bonus for moderate exercise frequency
    pub const MODERATE_EXERCISE_BONUS: f64 = 8.0;
    /// Penalty for stress above the cardiac threshold
    pub const HIGH_STRESS_PENALTY: f64 = 12.0;
    /// Penalty for short sleep (under 6 hours)
    pub const SHORT_SLEEP_PENALTY: f64 = 8.0;
    /// Clamp range
    pub const RANGE: (i32, i32) = (20, 100);
    /// HRV above which autonomic recovery is good
    pub const GOOD_THRESHOLD: i32 = 60;
    /// HRV above which autonomic recovery is fair
    pub const FAIR_THRESHOLD: i32 = 40;
}

/// Composite index clamp ranges and band boundaries
pub mod composite_indices {
    /// Allostatic load clamp range (0-10 scale)
    pub const ALLOSTATIC_RANGE: (f64, f64) = (0.0, 10.0);
    /// Allostatic load below which the burden is low
    pub const ALLOSTATIC_LOW_LIMIT: f64 = 3.0;
    /// Allostatic load below which the burden is moderate
    pub const ALLOSTATIC_MODERATE_LIMIT: f64 = 6.0;

    /// CNS fatigue clamp range (battery style, higher is more energy)
    pub const CNS_RANGE: (i32, i32) = (5, 100);
    /// CNS energy above which capacity is good
    pub const CNS_GOOD_THRESHOLD: i32 = 60;
    /// CNS energy above which capacity is fair
    pub const CNS_FAIR_THRESHOLD: i32 = 30;

    /// Cortisol index clamp range (relative 0-10 scale)
    pub const CORTISOL_RANGE: (f64, f64) = (0.0, 10.0);

    /// Sleep quality score clamp range
    pub const SLEEP_QUALITY_RANGE: (i32, i32) = (10, 100);

    /// Hydration clamp range (percent)
    pub const HYDRATION_RANGE: (i32, i32) = (30, 100);
    /// Hydration above which status is good (percent)
    pub const HYDRATION_GOOD_THRESHOLD: i32 = 70;

    /// Inflammatory load clamp range (CRP-like 0-10 scale)
    pub const INFLAMMATORY_RANGE: (f64, f64) = (0.5, 10.0);
    /// Inflammatory load below which the burden is low
    pub const INFLAMMATORY_LOW_LIMIT: f64 = 3.0;
    /// Inflammatory load below which the burden is moderate
    pub const INFLAMMATORY_MODERATE_LIMIT: f64 = 6.0;

    /// Hepatic function clamp range
    pub const HEPATIC_RANGE: (i32, i32) = (20, 100);

    /// Estimated GFR clamp range (mL/min)
    pub const EGFR_RANGE: (i32, i32) = (30, 130);
    /// eGFR above which filtration is normal (mL/min)
    pub const EGFR_NORMAL_THRESHOLD: i32 = 90;
    /// eGFR above which the reduction is mild (mL/min)
    pub const EGFR_MILD_THRESHOLD: i32 = 60;

    /// Metabolic efficiency clamp range
    pub const METABOLIC_RANGE: (i32, i32) = (20, 100);
}

/// Triage scoring weights per rule group
pub mod triage_weights {
    /// Seed score for the general practitioner baseline
    pub const GP_BASELINE: i32 = 10;

    /// Points for a critical heart, lungs, brain, or kidneys
    pub const ORGAN_CRITICAL: i32 = 50;
    /// Points for a warning heart, lungs, brain, or kidneys
    pub const ORGAN_WARNING: i32 = 25;
    /// Points for a critical stomach
    pub const STOMACH_CRITICAL: i32 = 40;
    /// Points for a warning stomach
    pub const STOMACH_WARNING: i32 = 20;
    /// Points for a critical liver
    pub const LIVER_CRITICAL: i32 = 35;
    /// Points for a warning liver
    pub const LIVER_WARNING: i32 = 18;

    /// Points for a vulnerability keyword match
    pub const VULNERABILITY_MATCH: i32 = 20;
    /// Nephrology points for a diabetes vulnerability
    pub const DIABETES_NEPHROLOGY: i32 = 15;
    /// Cardiology points for a diabetes vulnerability
    pub const DIABETES_CARDIOLOGY: i32 = 10;
    /// Points split across cardiology and general practice for obesity
    pub const OBESITY_SHARED: i32 = 10;

    /// Points for a cardiac, pulmonary, or gastro issue keyword match
    pub const ISSUE_MATCH: i32 = 30;
    /// Points for a neurological issue keyword match
    pub const NEURO_ISSUE_MATCH: i32 = 25;
    /// Points for a musculoskeletal issue keyword match
    pub const GP_ISSUE_MATCH: i32 = 15;

    /// Pulmonology points for smoking
    pub const SMOKER_PULMONOLOGY: i32 = 15;
    /// Cardiology points for smoking
    pub const SMOKER_CARDIOLOGY: i32 = 10;
    /// Gastroenterology points for high alcohol consumption
    pub const ALCOHOL_GASTRO: i32 = 15;
    /// Neurology points for stress above the cardiac threshold
    pub const STRESS_NEUROLOGY: i32 = 15;
    /// Neurology points for sleep under five hours
    pub const SLEEP_NEUROLOGY: i32 = 15;
    /// Nightly sleep below which the neurology sleep points apply (hours)
    pub const SLEEP_THRESHOLD_HOURS: f64 = 5.0;
}
