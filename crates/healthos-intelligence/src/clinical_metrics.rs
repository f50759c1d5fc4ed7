// ABOUTME: Derived biometric index bank computed from profile and organ states
// ABOUTME: Anthropometric, hemodynamic, neuro-endocrine, and systemic indices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Derived-metrics calculator.
//!
//! Computes the bank of independent biometric indices shown on the clinical
//! dashboard. Each index is a pure function of the health profile and the
//! organ states produced by the health-state engine, with its own clamp
//! range and status bands. Nothing here is persisted; the bank is recomputed
//! on demand.
//!
//! # Scientific References
//!
//! - Du Bois, D., & Du Bois, E.F. (1916). A formula to estimate the
//!   approximate surface area if height and weight be known.
//!   *Archives of Internal Medicine*, 17(6), 863-871.
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Boer, P. (1984). Estimated lean body mass as an index for normalization
//!   of body fluid volumes in humans. *American Journal of Physiology*,
//!   247(4), F632-F636.
//! - McArdle, W.D., et al. (2010). *Exercise Physiology* (7th ed.),
//!   activity multipliers.

use crate::physiological_constants::{
    activity_factors, anthropometric, cardiac, composite_indices, hemodynamics, hrv as hrv_consts,
};
use healthos_core::errors::AppResult;
use healthos_core::models::{
    AlcoholConsumption, DietQuality, ExerciseFrequency, FatIntake, Gender, HealthProfile, Organs,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// BMI classification bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI under 18.5
    Underweight,
    /// BMI 18.5 to 25
    Normal,
    /// BMI 25 to 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

/// Mean arterial pressure bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MapBand {
    /// MAP under 70 mmHg
    Low,
    /// MAP 70-100 mmHg
    Normal,
    /// MAP above 100 mmHg
    Elevated,
}

/// Three-tier band for recovery-style vitals (HRV, CNS energy)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VitalsBand {
    /// Good capacity
    Good,
    /// Fair capacity
    Fair,
    /// Poor capacity
    Poor,
}

/// Three-tier band for cumulative-burden indices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskBand {
    /// Low burden
    Low,
    /// Moderate burden
    Moderate,
    /// High burden
    High,
}

/// Renal filtration bands for the estimated GFR
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenalBand {
    /// eGFR above 90 mL/min
    Normal,
    /// eGFR 60-90 mL/min
    MildReduction,
    /// eGFR at or below 60 mL/min
    Reduced,
}

/// The derived biometric index bank
///
/// Float anthropometrics keep full precision for display formatting; every
/// other index is rounded to the integer (or one decimal for the 0-10
/// composite scales) it is reported at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalMetrics {
    /// Body mass index (kg/m^2)
    pub bmi: f64,
    /// BMI classification band
    pub bmi_category: BmiCategory,
    /// Body surface area, Du Bois formula (m^2)
    pub bsa: f64,
    /// Basal metabolic rate, Mifflin-St Jeor (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Lean body mass, Boer formula (kg)
    pub lbm: f64,
    /// Lean body mass share of total weight (percent)
    pub lbm_percent: f64,
    /// Resting heart rate, mirrored from the heart organ state (bpm)
    pub resting_hr: u16,
    /// Estimated systolic pressure (mmHg)
    pub systolic: i32,
    /// Estimated diastolic pressure (mmHg)
    pub diastolic: i32,
    /// Mean arterial pressure (mmHg)
    #[serde(rename = "map")]
    pub mean_arterial_pressure: i32,
    /// Mean arterial pressure band
    pub map_band: MapBand,
    /// Estimated oxygen saturation (percent)
    pub spo2: i32,
    /// Estimated heart rate variability (ms)
    pub hrv: i32,
    /// Brain stress level, mirrored from the brain organ state (0-10)
    pub brain_stress: u8,
    /// Allostatic load composite (0-10)
    pub allostatic_load: f64,
    /// CNS energy reserve, battery style (5-100, higher is more energy)
    pub cns_fatigue: i32,
    /// Relative cortisol index (0-10)
    pub cortisol_index: f64,
    /// Sleep quality score (10-100)
    pub sleep_quality: i32,
    /// Hydration status (30-100 percent)
    pub hydration: i32,
    /// Inflammatory load, CRP-like index (0.5-10)
    pub inflammatory_load: f64,
    /// Hepatic function estimate (20-100)
    pub hepatic_function: i32,
    /// Estimated glomerular filtration rate (mL/min)
    pub egfr: i32,
    /// Metabolic efficiency (20-100)
    pub metabolic_efficiency: i32,
}

impl ClinicalMetrics {
    /// HRV band: above 60 good, above 40 fair, otherwise poor
    #[must_use]
    pub const fn hrv_band(&self) -> VitalsBand {
        if self.hrv > hrv_consts::GOOD_THRESHOLD {
            VitalsBand::Good
        } else if self.hrv > hrv_consts::FAIR_THRESHOLD {
            VitalsBand::Fair
        } else {
            VitalsBand::Poor
        }
    }

    /// CNS energy band: above 60 good, above 30 fair, otherwise poor
    #[must_use]
    pub const fn cns_band(&self) -> VitalsBand {
        if self.cns_fatigue > composite_indices::CNS_GOOD_THRESHOLD {
            VitalsBand::Good
        } else if self.cns_fatigue > composite_indices::CNS_FAIR_THRESHOLD {
            VitalsBand::Fair
        } else {
            VitalsBand::Poor
        }
    }

    /// Allostatic load band: under 3 low, under 6 moderate, otherwise high
    #[must_use]
    pub fn allostatic_band(&self) -> RiskBand {
        if self.allostatic_load < composite_indices::ALLOSTATIC_LOW_LIMIT {
            RiskBand::Low
        } else if self.allostatic_load < composite_indices::ALLOSTATIC_MODERATE_LIMIT {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    /// Inflammatory load band: under 3 low, under 6 moderate, otherwise high
    #[must_use]
    pub fn inflammatory_band(&self) -> RiskBand {
        if self.inflammatory_load < composite_indices::INFLAMMATORY_LOW_LIMIT {
            RiskBand::Low
        } else if self.inflammatory_load < composite_indices::INFLAMMATORY_MODERATE_LIMIT {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    /// eGFR band: above 90 normal, above 60 mild reduction, otherwise reduced
    #[must_use]
    pub const fn egfr_band(&self) -> RenalBand {
        if self.egfr > composite_indices::EGFR_NORMAL_THRESHOLD {
            RenalBand::Normal
        } else if self.egfr > composite_indices::EGFR_MILD_THRESHOLD {
            RenalBand::MildReduction
        } else {
            RenalBand::Reduced
        }
    }

    /// True when oxygen saturation is at or above the normal floor
    #[must_use]
    pub const fn spo2_is_normal(&self) -> bool {
        self.spo2 >= hemodynamics::SPO2_NORMAL_MIN
    }

    /// True when hydration is above the good threshold
    #[must_use]
    pub const fn hydration_is_good(&self) -> bool {
        self.hydration > composite_indices::HYDRATION_GOOD_THRESHOLD
    }
}

/// Derived-metrics calculator
///
/// Stateless; a single instance may be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ClinicalMetricsCalculator;

impl ClinicalMetricsCalculator {
    /// Create a new calculator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compute the full index bank for a profile and its organ states
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when a required numeric field is
    /// missing its documented range (the profile is validated before any
    /// formula divides by height or weight).
    pub fn compute(&self, profile: &HealthProfile, organs: &Organs) -> AppResult<ClinicalMetrics> {
        profile.validate()?;

        let lifestyle = &profile.lifestyle;
        let height_m = profile.height / 100.0;
        let bmi = profile.weight / (height_m * height_m);

        let (systolic, diastolic) = Self::blood_pressure(profile, bmi);
        let mean_arterial_pressure = Self::mean_arterial_pressure(systolic, diastolic);
        let bmr = Self::basal_metabolic_rate(profile);
        let lbm = Self::lean_body_mass(profile);

        let metrics = ClinicalMetrics {
            bmi,
            bmi_category: Self::bmi_category(bmi),
            bsa: Self::body_surface_area(profile),
            bmr,
            tdee: bmr * Self::activity_factor(lifestyle.exercise_frequency),
            lbm,
            lbm_percent: (lbm / profile.weight) * 100.0,
            resting_hr: organs.heart.bpm,
            systolic,
            diastolic,
            mean_arterial_pressure,
            map_band: Self::map_band(mean_arterial_pressure),
            spo2: Self::oxygen_saturation(profile, organs),
            hrv: Self::heart_rate_variability(profile),
            brain_stress: organs.brain.stress_level,
            allostatic_load: Self::allostatic_load(profile, bmi),
            cns_fatigue: Self::cns_energy(profile, organs),
            cortisol_index: Self::cortisol_index(profile),
            sleep_quality: Self::sleep_quality(profile),
            hydration: Self::hydration(profile),
            inflammatory_load: Self::inflammatory_load(profile, bmi),
            hepatic_function: Self::hepatic_function(profile, organs, bmi),
            egfr: Self::estimated_gfr(profile, bmi),
            metabolic_efficiency: Self::metabolic_efficiency(profile, bmi),
        };

        debug!(
            bmi,
            map = mean_arterial_pressure,
            hrv = metrics.hrv,
            "computed clinical metrics"
        );

        Ok(metrics)
    }

    /// BMI band boundaries: 18.5 / 25 / 30
    fn bmi_category(bmi: f64) -> BmiCategory {
        if bmi < anthropometric::BMI_UNDERWEIGHT_LIMIT {
            BmiCategory::Underweight
        } else if bmi < anthropometric::BMI_OVERWEIGHT_LIMIT {
            BmiCategory::Normal
        } else if bmi < anthropometric::BMI_OBESE_LIMIT {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Du Bois body surface area
    fn body_surface_area(profile: &HealthProfile) -> f64 {
        anthropometric::DU_BOIS_FACTOR
            * profile.height.powf(anthropometric::DU_BOIS_HEIGHT_EXP)
            * profile.weight.powf(anthropometric::DU_BOIS_WEIGHT_EXP)
    }

    /// Mifflin-St Jeor resting energy expenditure
    ///
    /// The male constant applies to male profiles; female and undisclosed
    /// genders use the female constant.
    fn basal_metabolic_rate(profile: &HealthProfile) -> f64 {
        let gender_constant = match profile.gender {
            Gender::Male => anthropometric::MSJ_MALE_CONSTANT,
            Gender::Female | Gender::Other => anthropometric::MSJ_FEMALE_CONSTANT,
        };
        anthropometric::MSJ_WEIGHT_COEF * profile.weight
            + anthropometric::MSJ_HEIGHT_COEF * profile.height
            - anthropometric::MSJ_AGE_COEF * f64::from(profile.age)
            + gender_constant
    }

    /// TDEE activity multiplier; the match is exhaustive over the enum so an
    /// unrecognized tier cannot silently resolve to a default factor
    const fn activity_factor(frequency: ExerciseFrequency) -> f64 {
        match frequency {
            ExerciseFrequency::None => activity_factors::SEDENTARY,
            ExerciseFrequency::Low => activity_factors::LIGHT,
            ExerciseFrequency::Moderate => activity_factors::MODERATE,
            ExerciseFrequency::High => activity_factors::HIGH,
        }
    }

    /// Boer lean body mass
    fn lean_body_mass(profile: &HealthProfile) -> f64 {
        let (weight_coef, height_coef, constant) = match profile.gender {
            Gender::Male => anthropometric::BOER_MALE,
            Gender::Female | Gender::Other => anthropometric::BOER_FEMALE,
        };
        weight_coef * profile.weight + height_coef * profile.height + constant
    }

    /// Lifestyle-adjusted blood pressure estimate
    fn blood_pressure(profile: &HealthProfile, bmi: f64) -> (i32, i32) {
        let lifestyle = &profile.lifestyle;
        let mut systolic = hemodynamics::BASE_SYSTOLIC;
        let mut diastolic = hemodynamics::BASE_DIASTOLIC;

        let mut apply = |delta: (i32, i32)| {
            systolic += delta.0;
            diastolic += delta.1;
        };
        if lifestyle.stress_level > cardiac::HIGH_STRESS_THRESHOLD {
            apply(hemodynamics::HIGH_STRESS_DELTA);
        }
        if lifestyle.smoker {
            apply(hemodynamics::SMOKER_DELTA);
        }
        if lifestyle.exercise_frequency == ExerciseFrequency::High {
            apply(hemodynamics::HIGH_EXERCISE_DELTA);
        }
        if lifestyle.alcohol_consumption == AlcoholConsumption::High {
            apply(hemodynamics::HIGH_ALCOHOL_DELTA);
        }
        if bmi > anthropometric::BMI_OBESE_LIMIT {
            apply(hemodynamics::OBESE_DELTA);
        }
        if profile.age > hemodynamics::AGE_DELTA_THRESHOLD {
            apply(hemodynamics::OVER_FIFTY_DELTA);
        }

        (systolic, diastolic)
    }

    /// MAP = diastolic + (systolic - diastolic) / 3, rounded
    fn mean_arterial_pressure(systolic: i32, diastolic: i32) -> i32 {
        let map = f64::from(diastolic) + (f64::from(systolic) - f64::from(diastolic)) / 3.0;
        map.round() as i32
    }

    /// MAP bands: 70-100 normal
    const fn map_band(map: i32) -> MapBand {
        if map < hemodynamics::MAP_NORMAL_MIN {
            MapBand::Low
        } else if map > hemodynamics::MAP_NORMAL_MAX {
            MapBand::Elevated
        } else {
            MapBand::Normal
        }
    }

    /// Oxygen saturation from lung capacity, adjusted for smoking and exercise
    fn oxygen_saturation(profile: &HealthProfile, organs: &Organs) -> i32 {
        let mut spo2 = i32::from(organs.lungs.capacity_percent);
        if profile.lifestyle.smoker {
            spo2 -= 3;
        }
        if profile.lifestyle.exercise_frequency == ExerciseFrequency::High {
            spo2 += 2;
        }
        spo2.clamp(hemodynamics::SPO2_RANGE.0, hemodynamics::SPO2_RANGE.1)
    }

    /// Age- and lifestyle-adjusted HRV estimate
    fn heart_rate_variability(profile: &HealthProfile) -> i32 {
        let lifestyle = &profile.lifestyle;
        let mut hrv = hrv_consts::BASELINE
            - f64::from(profile.age) * hrv_consts::AGE_DECLINE_PER_YEAR
            + match lifestyle.exercise_frequency {
                ExerciseFrequency::High => hrv_consts::HIGH_EXERCISE_BONUS,
                ExerciseFrequency::Moderate => hrv_consts::MODERATE_EXERCISE_BONUS,
                ExerciseFrequency::None | ExerciseFrequency::Low => 0.0,
            };
        if lifestyle.stress_level > cardiac::HIGH_STRESS_THRESHOLD {
            hrv -= hrv_consts::HIGH_STRESS_PENALTY;
        }
        if lifestyle.sleep_hours < 6.0 {
            hrv -= hrv_consts::SHORT_SLEEP_PENALTY;
        }
        (hrv.round() as i32).clamp(hrv_consts::RANGE.0, hrv_consts::RANGE.1)
    }

    /// Allostatic load: weighted cumulative stress burden on a 0-10 scale
    fn allostatic_load(profile: &HealthProfile, bmi: f64) -> f64 {
        let lifestyle = &profile.lifestyle;
        let mut load = (f64::from(lifestyle.stress_level) / 10.0) * 2.5;
        if lifestyle.smoker {
            load += 1.5;
        }
        load += match lifestyle.exercise_frequency {
            ExerciseFrequency::None => 2.0,
            ExerciseFrequency::Low => 1.5,
            ExerciseFrequency::Moderate => 0.8,
            ExerciseFrequency::High => 0.3,
        };
        if lifestyle.sleep_hours < 6.0 {
            load += 2.0;
        } else if lifestyle.sleep_hours < 7.0 {
            load += 1.0;
        }
        load += match lifestyle.alcohol_consumption {
            AlcoholConsumption::None => 0.0,
            AlcoholConsumption::Low => 0.5,
            AlcoholConsumption::Moderate => 1.2,
            AlcoholConsumption::High => 2.0,
        };
        if bmi > anthropometric::BMI_OBESE_LIMIT {
            load += 1.5;
        } else if bmi > anthropometric::BMI_OVERWEIGHT_LIMIT {
            load += 0.8;
        }
        round_tenth(load).clamp(
            composite_indices::ALLOSTATIC_RANGE.0,
            composite_indices::ALLOSTATIC_RANGE.1,
        )
    }

    /// CNS energy reserve, battery style: higher means more capacity
    fn cns_energy(profile: &HealthProfile, organs: &Organs) -> i32 {
        let lifestyle = &profile.lifestyle;
        let mut energy = 100.0;
        energy -= f64::from(organs.brain.stress_level) * 8.0;
        energy -= f64::from(lifestyle.stress_level) * 3.0;
        if lifestyle.sleep_hours < 6.0 {
            energy -= 25.0;
        } else if lifestyle.sleep_hours < 7.0 {
            energy -= 12.0;
        }
        energy += match lifestyle.exercise_frequency {
            ExerciseFrequency::High => 10.0,
            ExerciseFrequency::Moderate => 5.0,
            ExerciseFrequency::None | ExerciseFrequency::Low => 0.0,
        };
        (energy.round() as i32).clamp(composite_indices::CNS_RANGE.0, composite_indices::CNS_RANGE.1)
    }

    /// Relative cortisol index on a 0-10 scale
    fn cortisol_index(profile: &HealthProfile) -> f64 {
        let lifestyle = &profile.lifestyle;
        let mut index = f64::from(lifestyle.stress_level) * 0.5;
        if lifestyle.sleep_hours < 6.0 {
            index += 2.5;
        } else if lifestyle.sleep_hours < 7.0 {
            index += 1.0;
        }
        if lifestyle.exercise_frequency == ExerciseFrequency::High {
            index -= 1.0;
        }
        round_tenth(index).clamp(
            composite_indices::CORTISOL_RANGE.0,
            composite_indices::CORTISOL_RANGE.1,
        )
    }

    /// Sleep quality score from duration deviation, stress, and intake
    fn sleep_quality(profile: &HealthProfile) -> i32 {
        let lifestyle = &profile.lifestyle;
        let mut quality = 100.0;
        quality -= (lifestyle.sleep_hours - 8.0).abs() * 8.0;
        quality -= f64::from(lifestyle.stress_level) * 3.0;
        if lifestyle.smoker {
            quality -= 10.0;
        }
        quality -= match lifestyle.alcohol_consumption {
            AlcoholConsumption::None => 0.0,
            AlcoholConsumption::Low => 3.0,
            AlcoholConsumption::Moderate => 8.0,
            AlcoholConsumption::High => 15.0,
        };
        (quality.round() as i32).clamp(
            composite_indices::SLEEP_QUALITY_RANGE.0,
            composite_indices::SLEEP_QUALITY_RANGE.1,
        )
    }

    /// Hydration status estimate
    fn hydration(profile: &HealthProfile) -> i32 {
        let lifestyle = &profile.lifestyle;
        let mut hydration = 75;
        if lifestyle.exercise_frequency == ExerciseFrequency::High {
            hydration += 8;
        }
        if lifestyle.alcohol_consumption == AlcoholConsumption::High {
            hydration -= 15;
        }
        if lifestyle.diet_quality == DietQuality::Excellent {
            hydration += 10;
        }
        if lifestyle.diet_quality == DietQuality::Poor {
            hydration -= 10;
        }
        hydration.clamp(
            composite_indices::HYDRATION_RANGE.0,
            composite_indices::HYDRATION_RANGE.1,
        )
    }

    /// Inflammatory load, CRP-like index
    fn inflammatory_load(profile: &HealthProfile, bmi: f64) -> f64 {
        let lifestyle = &profile.lifestyle;
        let mut load = 1.0;
        if bmi > anthropometric::BMI_OBESE_LIMIT {
            load += 2.5;
        } else if bmi > anthropometric::BMI_OVERWEIGHT_LIMIT {
            load += 1.0;
        }
        if lifestyle.smoker {
            load += 2.0;
        }
        if lifestyle.diet_quality == DietQuality::Poor {
            load += 1.5;
        }
        if lifestyle.stress_level > cardiac::HIGH_STRESS_THRESHOLD {
            load += 1.5;
        }
        if lifestyle.exercise_frequency == ExerciseFrequency::High {
            load -= 1.0;
        }
        round_tenth(load).clamp(
            composite_indices::INFLAMMATORY_RANGE.0,
            composite_indices::INFLAMMATORY_RANGE.1,
        )
    }

    /// Hepatic function estimate from the liver state and intake tiers
    fn hepatic_function(profile: &HealthProfile, organs: &Organs, bmi: f64) -> i32 {
        let lifestyle = &profile.lifestyle;
        let mut function = 90;
        function -= match organs.liver.fat_level {
            FatIntake::High => 30,
            FatIntake::Moderate => 15,
            FatIntake::Low => 0,
        };
        function -= match lifestyle.alcohol_consumption {
            AlcoholConsumption::High => 20,
            AlcoholConsumption::Moderate => 8,
            AlcoholConsumption::None | AlcoholConsumption::Low => 0,
        };
        if bmi > anthropometric::BMI_OBESE_LIMIT {
            function -= 10;
        }
        function.clamp(
            composite_indices::HEPATIC_RANGE.0,
            composite_indices::HEPATIC_RANGE.1,
        )
    }

    /// Estimated glomerular filtration rate (simplified age-decline model)
    fn estimated_gfr(profile: &HealthProfile, bmi: f64) -> i32 {
        let mut egfr = 120.0 - (f64::from(profile.age) - 30.0) * 0.8;
        if profile.lifestyle.smoker {
            egfr -= 5.0;
        }
        if bmi > anthropometric::BMI_OBESE_LIMIT {
            egfr -= 8.0;
        }
        (egfr.round() as i32).clamp(
            composite_indices::EGFR_RANGE.0,
            composite_indices::EGFR_RANGE.1,
        )
    }

    /// Metabolic efficiency estimate
    fn metabolic_efficiency(profile: &HealthProfile, bmi: f64) -> i32 {
        let lifestyle = &profile.lifestyle;
        let mut efficiency = 80;
        efficiency += match lifestyle.exercise_frequency {
            ExerciseFrequency::High => 12,
            ExerciseFrequency::Moderate => 5,
            ExerciseFrequency::None => -15,
            ExerciseFrequency::Low => 0,
        };
        efficiency += match lifestyle.diet_quality {
            DietQuality::Excellent => 8,
            DietQuality::Poor => -12,
            DietQuality::Fair | DietQuality::Good => 0,
        };
        if bmi > anthropometric::BMI_OBESE_LIMIT {
            efficiency -= 10;
        }
        efficiency.clamp(
            composite_indices::METABOLIC_RANGE.0,
            composite_indices::METABOLIC_RANGE.1,
        )
    }
}

/// Round to one decimal for the 0-10 composite scales
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
