// ABOUTME: Per-organ classification documents and the aggregate avatar state
// ABOUTME: Tri-state organ statuses with fixed palette values and animation fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

use crate::models::health_profile::FatIntake;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state health classification for a modeled organ
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrganStatus {
    /// Organ shows no concerning indicators
    Healthy,
    /// Organ shows elevated-risk indicators
    Warning,
    /// Organ shows high-risk indicators
    Critical,
}

impl OrganStatus {
    /// Category score feeding the aggregate health score
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Healthy => 100.0,
            Self::Warning => 55.0,
            Self::Critical => 20.0,
        }
    }

    /// Base render color for this status
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Healthy => "#00e676",
            Self::Warning => "#ffab40",
            Self::Critical => "#ff1744",
        }
    }

    /// Emissive render color for this status
    #[must_use]
    pub const fn emissive_color(self) -> &'static str {
        match self {
            Self::Healthy => "#00c853",
            Self::Warning => "#ff6d00",
            Self::Critical => "#d50000",
        }
    }

    /// Glow intensity for this status
    #[must_use]
    pub const fn glow_intensity(self) -> f64 {
        match self {
            Self::Healthy => 0.4,
            Self::Warning => 0.7,
            Self::Critical => 1.2,
        }
    }

    /// Lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for OrganStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six modeled organs
///
/// Declared in the order organ statuses are rendered and reported; iteration
/// over this order keeps every derived text block deterministic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Organ {
    /// Heart
    Heart,
    /// Liver
    Liver,
    /// Lungs
    Lungs,
    /// Kidneys
    Kidneys,
    /// Brain
    Brain,
    /// Stomach
    Stomach,
}

impl Organ {
    /// All modeled organs in declared order
    pub const ALL: [Self; 6] = [
        Self::Heart,
        Self::Liver,
        Self::Lungs,
        Self::Kidneys,
        Self::Brain,
        Self::Stomach,
    ];

    /// Lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Liver => "liver",
            Self::Lungs => "lungs",
            Self::Kidneys => "kidneys",
            Self::Brain => "brain",
            Self::Stomach => "stomach",
        }
    }
}

impl fmt::Display for Organ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status and render parameters shared by every organ document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganIndicator {
    /// Tri-state classification
    pub status: OrganStatus,
    /// Base render color
    pub color: String,
    /// Emissive render color
    pub emissive_color: String,
    /// Glow intensity
    pub glow_intensity: f64,
}

impl From<OrganStatus> for OrganIndicator {
    fn from(status: OrganStatus) -> Self {
        Self {
            status,
            color: status.color().to_owned(),
            emissive_color: status.emissive_color().to_owned(),
            glow_intensity: status.glow_intensity(),
        }
    }
}

/// Heart state with pulse animation parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeartState {
    /// Shared status and render parameters
    #[serde(flatten)]
    pub indicator: OrganIndicator,
    /// Resting heart rate (beats per minute)
    pub bpm: u16,
    /// Pulse animation scale factor
    pub pulse_scale: f64,
}

/// Liver state mirroring dietary fat intake
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiverState {
    /// Shared status and render parameters
    #[serde(flatten)]
    pub indicator: OrganIndicator,
    /// Dietary fat intake tier, carried verbatim from the profile
    pub fat_level: FatIntake,
}

/// Lung state with estimated capacity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LungsState {
    /// Shared status and render parameters
    #[serde(flatten)]
    pub indicator: OrganIndicator,
    /// Estimated lung capacity (percent)
    pub capacity_percent: u8,
}

/// Brain state mirroring perceived stress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrainState {
    /// Shared status and render parameters
    #[serde(flatten)]
    pub indicator: OrganIndicator,
    /// Perceived stress level, mirrored from the lifestyle block
    pub stress_level: u8,
}

/// Classification of all six modeled organs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organs {
    /// Heart classification
    pub heart: HeartState,
    /// Liver classification
    pub liver: LiverState,
    /// Lung classification
    pub lungs: LungsState,
    /// Kidney classification (no organ-specific fields)
    pub kidneys: OrganIndicator,
    /// Brain classification
    pub brain: BrainState,
    /// Stomach classification (no critical tier is defined for the stomach)
    pub stomach: OrganIndicator,
}

impl Organs {
    /// Status of a single organ by key
    #[must_use]
    pub fn status_of(&self, organ: Organ) -> OrganStatus {
        match organ {
            Organ::Heart => self.heart.indicator.status,
            Organ::Liver => self.liver.indicator.status,
            Organ::Lungs => self.lungs.indicator.status,
            Organ::Kidneys => self.kidneys.status,
            Organ::Brain => self.brain.indicator.status,
            Organ::Stomach => self.stomach.status,
        }
    }

    /// Organ statuses in declared order
    #[must_use]
    pub fn statuses(&self) -> [(Organ, OrganStatus); 6] {
        [
            (Organ::Heart, self.heart.indicator.status),
            (Organ::Liver, self.liver.indicator.status),
            (Organ::Lungs, self.lungs.indicator.status),
            (Organ::Kidneys, self.kidneys.status),
            (Organ::Brain, self.brain.indicator.status),
            (Organ::Stomach, self.stomach.status),
        ]
    }
}

/// Aggregate avatar state derived from a health profile
///
/// Consumed by the persistence collaborator and the organ-status UI. The
/// health score is always the mean of the six organ category scores plus
/// bounded lifestyle modifiers, clamped to 0..=100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvatarState {
    /// Aggregate health score, clamped to 0..=100
    pub health_score: u8,
    /// Per-organ classification
    pub organs: Organs,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_values_are_fixed_per_status() {
        assert_eq!(OrganStatus::Healthy.color(), "#00e676");
        assert_eq!(OrganStatus::Warning.emissive_color(), "#ff6d00");
        assert!((OrganStatus::Critical.glow_intensity() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_scores() {
        assert!((OrganStatus::Healthy.score() - 100.0).abs() < f64::EPSILON);
        assert!((OrganStatus::Warning.score() - 55.0).abs() < f64::EPSILON);
        assert!((OrganStatus::Critical.score() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_organ_declared_order() {
        let names: Vec<&str> = Organ::ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(
            names,
            ["heart", "liver", "lungs", "kidneys", "brain", "stomach"]
        );
    }

    #[test]
    fn test_indicator_serializes_flattened_camel_case() {
        let indicator = OrganIndicator::from(OrganStatus::Warning);
        let value = serde_json::to_value(&indicator).unwrap();
        assert_eq!(value["status"], "warning");
        assert_eq!(value["emissiveColor"], "#ff6d00");
        assert!(value["glowIntensity"].is_number());
    }
}
