// ABOUTME: Self-reported patient health profile document and lifestyle enumerations
// ABOUTME: Validated input to the health state, clinical metrics, and triage engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient gender for anthropometric formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (Mifflin-St Jeor constant +5, Boer male coefficients)
    Male,
    /// Female (Mifflin-St Jeor constant -161, Boer female coefficients)
    Female,
    /// Other or undisclosed (female formula coefficients apply)
    Other,
}

impl Gender {
    /// Lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::unknown_enum(
                "gender",
                other,
                "male, female, other",
            )),
        }
    }
}

/// Alcohol consumption tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlcoholConsumption {
    /// No alcohol
    None,
    /// Occasional consumption
    Low,
    /// Regular consumption
    Moderate,
    /// Heavy consumption
    High,
}

impl AlcoholConsumption {
    /// Lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl FromStr for AlcoholConsumption {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(AppError::unknown_enum(
                "alcoholConsumption",
                other,
                "none, low, moderate, high",
            )),
        }
    }
}

/// Exercise frequency tier, mapped to TDEE activity factors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseFrequency {
    /// Sedentary (activity factor 1.2)
    None,
    /// 1-3 sessions per week (activity factor 1.375)
    Low,
    /// 3-5 sessions per week (activity factor 1.55)
    Moderate,
    /// 6-7 sessions per week (activity factor 1.725)
    High,
}

impl ExerciseFrequency {
    /// Lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl FromStr for ExerciseFrequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(AppError::unknown_enum(
                "exerciseFrequency",
                other,
                "none, low, moderate, high",
            )),
        }
    }
}

/// Self-assessed diet quality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DietQuality {
    /// Poor diet
    Poor,
    /// Fair diet
    Fair,
    /// Good diet
    Good,
    /// Excellent diet
    Excellent,
}

impl DietQuality {
    /// Lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl FromStr for DietQuality {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "poor" => Ok(Self::Poor),
            "fair" => Ok(Self::Fair),
            "good" => Ok(Self::Good),
            "excellent" => Ok(Self::Excellent),
            other => Err(AppError::unknown_enum(
                "dietQuality",
                other,
                "poor, fair, good, excellent",
            )),
        }
    }
}

/// Dietary fat intake tier, mirrored into the liver organ state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FatIntake {
    /// Low fat intake
    Low,
    /// Moderate fat intake
    Moderate,
    /// High fat intake
    High,
}

impl FatIntake {
    /// Lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl FromStr for FatIntake {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(AppError::unknown_enum(
                "fatIntake",
                other,
                "low, moderate, high",
            )),
        }
    }
}

/// Severity of a currently reported issue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Mild severity
    Mild,
    /// Moderate severity
    Moderate,
    /// Severe
    Severe,
}

impl FromStr for Severity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            other => Err(AppError::unknown_enum(
                "severity",
                other,
                "mild, moderate, severe",
            )),
        }
    }
}

/// A currently reported health issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIssue {
    /// Free-text issue label, matched against fixed keyword tables
    pub name: String,
    /// Reported severity
    pub severity: Severity,
}

/// Lifestyle block of the health profile
///
/// Every field carries the documented default, so a partially supplied
/// lifestyle document resolves uniformly instead of per-call-site fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Lifestyle {
    /// Current smoker
    pub smoker: bool,
    /// Alcohol consumption tier
    pub alcohol_consumption: AlcoholConsumption,
    /// Exercise frequency tier
    pub exercise_frequency: ExerciseFrequency,
    /// Self-assessed diet quality
    pub diet_quality: DietQuality,
    /// Perceived stress level, 1..=10
    pub stress_level: u8,
    /// Average nightly sleep (hours)
    pub sleep_hours: f64,
    /// Dietary fat intake tier
    pub fat_intake: FatIntake,
}

impl Default for Lifestyle {
    fn default() -> Self {
        Self {
            smoker: false,
            alcohol_consumption: AlcoholConsumption::Low,
            exercise_frequency: ExerciseFrequency::Low,
            diet_quality: DietQuality::Fair,
            stress_level: 5,
            sleep_hours: 7.0,
            fat_intake: FatIntake::Moderate,
        }
    }
}

/// Self-reported patient health profile
///
/// Created once at patient onboarding and supplied by the data-access
/// collaborator. The engine never caches or mutates it; every computation
/// re-reads the profile it is handed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Age in years (must be positive)
    pub age: u32,
    /// Body weight in kilograms (must be positive and finite)
    pub weight: f64,
    /// Height in centimeters (must be positive and finite)
    pub height: f64,
    /// Patient gender
    pub gender: Gender,
    /// Blood type label (pass-through, unused by the engine)
    pub blood_type: String,
    /// Free-text condition labels, matched case-insensitively by substring
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
    /// Currently reported issues, in reported order
    #[serde(default)]
    pub current_issues: Vec<CurrentIssue>,
    /// Medication labels (pass-through, unused by the engine)
    #[serde(default)]
    pub medications: Vec<String>,
    /// Lifestyle block; missing sub-fields resolve to documented defaults
    #[serde(default)]
    pub lifestyle: Lifestyle,
}

impl HealthProfile {
    /// Validate the numeric fields required by the formula bank
    ///
    /// Rejects non-positive or non-finite age, weight, and height before any
    /// derived metric divides by them; a zero height must never silently
    /// produce an infinite BMI.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when a required numeric field is
    /// non-positive, non-finite, or out of its documented range.
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_input("Age must be positive"));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(AppError::invalid_input(
                "Weight must be a positive number of kilograms",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(AppError::invalid_input(
                "Height must be a positive number of centimeters",
            ));
        }
        if !(1..=10).contains(&self.lifestyle.stress_level) {
            return Err(AppError::invalid_input(
                "Stress level must be between 1 and 10",
            ));
        }
        if !self.lifestyle.sleep_hours.is_finite() || self.lifestyle.sleep_hours < 0.0 {
            return Err(AppError::invalid_input(
                "Sleep hours must be a non-negative number",
            ));
        }
        Ok(())
    }
}
