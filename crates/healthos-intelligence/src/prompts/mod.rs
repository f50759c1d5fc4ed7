// ABOUTME: Specialist persona prompt skeletons loaded at compile time
// ABOUTME: Markdown persona definitions and greetings for the conversation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! # Persona Prompts
//!
//! Persona prompt skeletons for the six AI specialists. Skeletons are loaded
//! at compile time from markdown files for easy maintenance; the triage
//! router interpolates the patient-context block and appends the shared
//! behavioral rules before handing the result to the LLM collaborator.

use healthos_core::models::SpecialistType;

/// Cardiologist persona skeleton
pub const CARDIOLOGIST_PROMPT: &str = include_str!("cardiologist.md");

/// Pulmonologist persona skeleton
pub const PULMONOLOGIST_PROMPT: &str = include_str!("pulmonologist.md");

/// Neurologist persona skeleton
pub const NEUROLOGIST_PROMPT: &str = include_str!("neurologist.md");

/// Gastroenterologist persona skeleton
pub const GASTROENTEROLOGIST_PROMPT: &str = include_str!("gastroenterologist.md");

/// Nephrologist persona skeleton
pub const NEPHROLOGIST_PROMPT: &str = include_str!("nephrologist.md");

/// General practitioner persona skeleton
pub const GENERAL_PRACTITIONER_PROMPT: &str = include_str!("general_practitioner.md");

/// Behavioral rules appended to every assembled system prompt
pub const BEHAVIORAL_RULES: &str = include_str!("behavioral_rules.md");

/// Persona prompt skeleton for a specialist
#[must_use]
pub const fn persona_prompt(specialist: SpecialistType) -> &'static str {
    match specialist {
        SpecialistType::Cardiologist => CARDIOLOGIST_PROMPT,
        SpecialistType::Pulmonologist => PULMONOLOGIST_PROMPT,
        SpecialistType::Neurologist => NEUROLOGIST_PROMPT,
        SpecialistType::Gastroenterologist => GASTROENTEROLOGIST_PROMPT,
        SpecialistType::Nephrologist => NEPHROLOGIST_PROMPT,
        SpecialistType::GeneralPractitioner => GENERAL_PRACTITIONER_PROMPT,
    }
}

/// Persona greeting opening the conversation
#[must_use]
pub const fn persona_greeting(specialist: SpecialistType) -> &'static str {
    match specialist {
        SpecialistType::Cardiologist => {
            "I'm Dr. ARIA, your AI Cardiologist. I can see some cardiovascular indicators in your profile that I'd like to discuss. How's your heart been feeling lately?"
        }
        SpecialistType::Pulmonologist => {
            "I'm Dr. ARIA, your AI Pulmonologist. Your lung health profile caught my attention. Let's talk about your breathing — any shortness of breath or coughing?"
        }
        SpecialistType::Neurologist => {
            "I'm Dr. ARIA, your AI Neurologist. Your stress and sleep indicators suggest your brain could use some attention. How have you been sleeping lately?"
        }
        SpecialistType::Gastroenterologist => {
            "I'm Dr. ARIA, your AI Gastroenterologist. Your digestive health profile has a few things I'd like to explore. How's your digestion been?"
        }
        SpecialistType::Nephrologist => {
            "I'm Dr. ARIA, your AI Nephrologist. Your kidney health indicators need monitoring. Are you staying well hydrated? Let's review your renal health."
        }
        SpecialistType::GeneralPractitioner => {
            "I'm Dr. ARIA, your AI General Practitioner. Your overall health looks manageable! What would you like to discuss today?"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_persona_has_a_skeleton_and_greeting() {
        for specialist in SpecialistType::ALL {
            assert!(!persona_prompt(specialist).is_empty());
            assert!(persona_greeting(specialist).starts_with("I'm Dr. ARIA"));
        }
    }

    #[test]
    fn test_rules_forbid_structured_output() {
        assert!(BEHAVIORAL_RULES.contains("NOT JSON"));
        assert!(BEHAVIORAL_RULES.contains("under 100 words"));
    }
}
