// ABOUTME: Specialist persona enumeration and the triage decision document
// ABOUTME: Output contract consumed by the LLM-invocation collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six AI specialist personas a conversation can be routed to
///
/// Declared in canonical order: this ordering is the documented tie-break
/// rule of the triage scorer and must not be rearranged, or identical
/// profiles would route to different specialists across releases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpecialistType {
    /// Heart and cardiovascular health
    #[serde(rename = "AI Cardiologist")]
    Cardiologist,
    /// Respiratory and lung health
    #[serde(rename = "AI Pulmonologist")]
    Pulmonologist,
    /// Brain, nervous system, and mental wellness
    #[serde(rename = "AI Neurologist")]
    Neurologist,
    /// Digestive system health
    #[serde(rename = "AI Gastroenterologist")]
    Gastroenterologist,
    /// Kidney and renal health
    #[serde(rename = "AI Nephrologist")]
    Nephrologist,
    /// Holistic care baseline; seeded so every patient has a route
    #[serde(rename = "AI General Practitioner")]
    GeneralPractitioner,
}

impl SpecialistType {
    /// All personas in canonical (tie-break) order
    pub const ALL: [Self; 6] = [
        Self::Cardiologist,
        Self::Pulmonologist,
        Self::Neurologist,
        Self::Gastroenterologist,
        Self::Nephrologist,
        Self::GeneralPractitioner,
    ];

    /// Display name shared with the chat and voice surfaces
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cardiologist => "AI Cardiologist",
            Self::Pulmonologist => "AI Pulmonologist",
            Self::Neurologist => "AI Neurologist",
            Self::Gastroenterologist => "AI Gastroenterologist",
            Self::Nephrologist => "AI Nephrologist",
            Self::GeneralPractitioner => "AI General Practitioner",
        }
    }

    /// Persona icon shown in the conversation header
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Cardiologist => "\u{1fac0}",
            Self::Pulmonologist => "\u{1fac1}",
            Self::Neurologist => "\u{1f9e0}",
            Self::Gastroenterologist => "\u{1f3e5}",
            Self::Nephrologist => "\u{1f4a7}",
            Self::GeneralPractitioner => "\u{1fa7a}",
        }
    }

    /// Persona accent gradient consumed by the presentation layer
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Cardiologist => "from-red-500 to-rose-600",
            Self::Pulmonologist => "from-sky-500 to-blue-600",
            Self::Neurologist => "from-purple-500 to-violet-600",
            Self::Gastroenterologist => "from-amber-500 to-orange-600",
            Self::Nephrologist => "from-teal-500 to-cyan-600",
            Self::GeneralPractitioner => "from-green-500 to-emerald-600",
        }
    }
}

impl fmt::Display for SpecialistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Specialist-assignment decision produced by the triage router
///
/// Computed fresh per triage request and never mutated or persisted by the
/// engine; the `system_prompt` and `greeting` are inert text consumed by the
/// LLM-invocation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    /// Winning specialist persona
    pub specialist_type: SpecialistType,
    /// Persona icon (presentation)
    pub specialist_icon: String,
    /// Persona accent gradient (presentation)
    pub specialist_color: String,
    /// Fully assembled system prompt with interpolated patient context
    pub system_prompt: String,
    /// Persona greeting opening the conversation
    pub greeting: String,
    /// How dominant the winning score was, 0..=100
    pub confidence: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_is_fixed() {
        let names: Vec<&str> = SpecialistType::ALL
            .iter()
            .map(|s| s.display_name())
            .collect();
        assert_eq!(
            names,
            [
                "AI Cardiologist",
                "AI Pulmonologist",
                "AI Neurologist",
                "AI Gastroenterologist",
                "AI Nephrologist",
                "AI General Practitioner",
            ]
        );
    }

    #[test]
    fn test_specialist_serializes_to_display_name() {
        let value = serde_json::to_value(SpecialistType::Cardiologist).unwrap();
        assert_eq!(value, "AI Cardiologist");
    }

    #[test]
    fn test_specialist_round_trips_through_serde() {
        let json = serde_json::to_string(&SpecialistType::GeneralPractitioner).unwrap();
        let parsed: SpecialistType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SpecialistType::GeneralPractitioner);
    }
}
