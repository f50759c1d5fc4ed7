// ABOUTME: Weighted specialist triage over profile, organ, and lifestyle signals
// ABOUTME: Produces the persona assignment and assembled system prompt for the chat layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! Specialist-triage router.
//!
//! Scores the six AI specialist personas against whatever patient signals
//! are available (organ statuses, vulnerability keywords, current-issue
//! keywords, lifestyle flags) and assembles the winning persona's system
//! prompt with an interpolated patient-context block. Every call is
//! independent and stateless; a context with no signals at all degrades to
//! the general-practitioner baseline rather than failing.

use crate::keywords::{
    label_matches_table, CARDIAC_CONDITIONS, CARDIAC_ISSUES, GASTRO_CONDITIONS, GASTRO_ISSUES,
    GP_ISSUES, NEURO_CONDITIONS, NEURO_ISSUES, PULMONARY_CONDITIONS, PULMONARY_ISSUES,
    RENAL_CONDITIONS,
};
use crate::physiological_constants::{cardiac, triage_weights as weights};
use crate::prompts::{persona_greeting, persona_prompt, BEHAVIORAL_RULES};
use healthos_core::models::{
    AlcoholConsumption, AvatarState, CurrentIssue, Gender, HealthProfile, Lifestyle, Organ,
    OrganStatus, SpecialistType, TriageResult,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Patient context supplied to the triage router
///
/// Any subset of fields may be absent; absent organ statuses simply
/// contribute no organ-based points. An entirely empty context routes to the
/// general practitioner with the seeded baseline confidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileContext {
    /// Patient display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Patient gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Free-text condition labels
    pub vulnerabilities: Vec<String>,
    /// Currently reported issues
    pub current_issues: Vec<CurrentIssue>,
    /// Lifestyle block, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<Lifestyle>,
    /// Organ statuses keyed by organ, iterated in canonical organ order
    pub organ_statuses: BTreeMap<Organ, OrganStatus>,
    /// Aggregate health score, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<u8>,
}

impl ProfileContext {
    /// Assemble a context from a profile and an optional computed avatar state
    #[must_use]
    pub fn from_profile(profile: &HealthProfile, avatar: Option<&AvatarState>) -> Self {
        let organ_statuses = avatar
            .map(|state| state.organs.statuses().into_iter().collect())
            .unwrap_or_default();
        Self {
            name: None,
            age: Some(profile.age),
            gender: Some(profile.gender),
            vulnerabilities: profile.vulnerabilities.clone(),
            current_issues: profile.current_issues.clone(),
            lifestyle: Some(profile.lifestyle.clone()),
            organ_statuses,
            health_score: avatar.map(|state| state.health_score),
        }
    }

    /// Attach the patient display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Score map over the six personas, indexed in canonical order
#[derive(Debug, Clone, Copy)]
struct ScoreMap {
    scores: [i32; 6],
}

impl ScoreMap {
    /// Seed the map: everyone at zero except the general practitioner
    fn seeded() -> Self {
        let mut scores = [0; 6];
        scores[Self::index(SpecialistType::GeneralPractitioner)] = weights::GP_BASELINE;
        Self { scores }
    }

    const fn index(specialist: SpecialistType) -> usize {
        match specialist {
            SpecialistType::Cardiologist => 0,
            SpecialistType::Pulmonologist => 1,
            SpecialistType::Neurologist => 2,
            SpecialistType::Gastroenterologist => 3,
            SpecialistType::Nephrologist => 4,
            SpecialistType::GeneralPractitioner => 5,
        }
    }

    fn add(&mut self, specialist: SpecialistType, points: i32) {
        self.scores[Self::index(specialist)] += points;
    }

    /// Winner by highest score; ties resolve to the earlier canonical entry
    fn winner(&self) -> (SpecialistType, i32) {
        let mut best = SpecialistType::ALL[0];
        let mut best_score = self.scores[0];
        for specialist in SpecialistType::ALL {
            let score = self.scores[Self::index(specialist)];
            if score > best_score {
                best = specialist;
                best_score = score;
            }
        }
        (best, best_score)
    }
}

/// Specialist-triage router
///
/// Stateless; a single instance may be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TriageRouter;

impl TriageRouter {
    /// Create a new router
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Score every persona against the context and assemble the winner's prompt
    #[must_use]
    pub fn assign_specialist(&self, context: &ProfileContext) -> TriageResult {
        let mut scores = ScoreMap::seeded();

        Self::score_organ_statuses(context, &mut scores);
        Self::score_vulnerabilities(context, &mut scores);
        Self::score_current_issues(context, &mut scores);
        Self::score_lifestyle(context, &mut scores);

        let (specialist, top_score) = scores.winner();
        let confidence = top_score.clamp(0, 100) as u8;

        debug!(
            specialist = specialist.display_name(),
            top_score, confidence, "assigned specialist"
        );

        TriageResult {
            specialist_type: specialist,
            specialist_icon: specialist.icon().to_owned(),
            specialist_color: specialist.color().to_owned(),
            system_prompt: Self::assemble_system_prompt(specialist, context),
            greeting: persona_greeting(specialist).to_owned(),
            confidence,
        }
    }

    /// Organ-status points: the strongest signal group
    fn score_organ_statuses(context: &ProfileContext, scores: &mut ScoreMap) {
        let status_of = |organ: Organ| context.organ_statuses.get(&organ).copied();

        let mut tiered = |organ: Organ, target: SpecialistType, critical: i32, warning: i32| {
            match status_of(organ) {
                Some(OrganStatus::Critical) => scores.add(target, critical),
                Some(OrganStatus::Warning) => scores.add(target, warning),
                Some(OrganStatus::Healthy) | None => {}
            }
        };

        tiered(
            Organ::Heart,
            SpecialistType::Cardiologist,
            weights::ORGAN_CRITICAL,
            weights::ORGAN_WARNING,
        );
        tiered(
            Organ::Lungs,
            SpecialistType::Pulmonologist,
            weights::ORGAN_CRITICAL,
            weights::ORGAN_WARNING,
        );
        tiered(
            Organ::Brain,
            SpecialistType::Neurologist,
            weights::ORGAN_CRITICAL,
            weights::ORGAN_WARNING,
        );
        // Stomach and liver both contribute to the gastroenterology score
        tiered(
            Organ::Stomach,
            SpecialistType::Gastroenterologist,
            weights::STOMACH_CRITICAL,
            weights::STOMACH_WARNING,
        );
        tiered(
            Organ::Liver,
            SpecialistType::Gastroenterologist,
            weights::LIVER_CRITICAL,
            weights::LIVER_WARNING,
        );
        tiered(
            Organ::Kidneys,
            SpecialistType::Nephrologist,
            weights::ORGAN_CRITICAL,
            weights::ORGAN_WARNING,
        );
    }

    /// Vulnerability-keyword points, accumulated per reported label
    fn score_vulnerabilities(context: &ProfileContext, scores: &mut ScoreMap) {
        for label in &context.vulnerabilities {
            if label_matches_table(label, &CARDIAC_CONDITIONS) {
                scores.add(SpecialistType::Cardiologist, weights::VULNERABILITY_MATCH);
            }
            if label_matches_table(label, &PULMONARY_CONDITIONS) {
                scores.add(SpecialistType::Pulmonologist, weights::VULNERABILITY_MATCH);
            }
            if label_matches_table(label, &NEURO_CONDITIONS) {
                scores.add(SpecialistType::Neurologist, weights::VULNERABILITY_MATCH);
            }
            if label_matches_table(label, &GASTRO_CONDITIONS) {
                scores.add(
                    SpecialistType::Gastroenterologist,
                    weights::VULNERABILITY_MATCH,
                );
            }
            if label_matches_table(label, &RENAL_CONDITIONS) {
                scores.add(SpecialistType::Nephrologist, weights::VULNERABILITY_MATCH);
            }
            if label_matches_table(label, &["diabetes"]) {
                scores.add(SpecialistType::Nephrologist, weights::DIABETES_NEPHROLOGY);
                scores.add(SpecialistType::Cardiologist, weights::DIABETES_CARDIOLOGY);
            }
            if label_matches_table(label, &["obesity"]) {
                scores.add(SpecialistType::Cardiologist, weights::OBESITY_SHARED);
                scores.add(SpecialistType::GeneralPractitioner, weights::OBESITY_SHARED);
            }
        }
    }

    /// Current-issue keyword points, accumulated per reported issue
    fn score_current_issues(context: &ProfileContext, scores: &mut ScoreMap) {
        for issue in &context.current_issues {
            if label_matches_table(&issue.name, &CARDIAC_ISSUES) {
                scores.add(SpecialistType::Cardiologist, weights::ISSUE_MATCH);
            }
            if label_matches_table(&issue.name, &PULMONARY_ISSUES) {
                scores.add(SpecialistType::Pulmonologist, weights::ISSUE_MATCH);
            }
            if label_matches_table(&issue.name, &NEURO_ISSUES) {
                scores.add(SpecialistType::Neurologist, weights::NEURO_ISSUE_MATCH);
            }
            if label_matches_table(&issue.name, &GASTRO_ISSUES) {
                scores.add(SpecialistType::Gastroenterologist, weights::ISSUE_MATCH);
            }
            if label_matches_table(&issue.name, &GP_ISSUES) {
                scores.add(SpecialistType::GeneralPractitioner, weights::GP_ISSUE_MATCH);
            }
        }
    }

    /// Lifestyle points; skipped entirely when no lifestyle block is present
    fn score_lifestyle(context: &ProfileContext, scores: &mut ScoreMap) {
        let Some(lifestyle) = &context.lifestyle else {
            return;
        };

        if lifestyle.smoker {
            scores.add(SpecialistType::Pulmonologist, weights::SMOKER_PULMONOLOGY);
            scores.add(SpecialistType::Cardiologist, weights::SMOKER_CARDIOLOGY);
        }
        if lifestyle.alcohol_consumption == AlcoholConsumption::High {
            scores.add(SpecialistType::Gastroenterologist, weights::ALCOHOL_GASTRO);
        }
        if lifestyle.stress_level > cardiac::HIGH_STRESS_THRESHOLD {
            scores.add(SpecialistType::Neurologist, weights::STRESS_NEUROLOGY);
        }
        if lifestyle.sleep_hours < weights::SLEEP_THRESHOLD_HOURS {
            scores.add(SpecialistType::Neurologist, weights::SLEEP_NEUROLOGY);
        }
    }

    /// Persona skeleton + patient context block + shared behavioral rules
    fn assemble_system_prompt(specialist: SpecialistType, context: &ProfileContext) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            persona_prompt(specialist).trim_end(),
            Self::patient_context_block(context),
            BEHAVIORAL_RULES.trim_end()
        )
    }

    /// The interpolated patient-context text block
    fn patient_context_block(context: &ProfileContext) -> String {
        let name = context.name.as_deref().unwrap_or("Patient");
        let age = context
            .age
            .map_or_else(|| "Unknown".to_owned(), |age| age.to_string());
        let gender = context
            .gender
            .map_or_else(|| "Unknown".to_owned(), |gender| gender.to_string());
        let health_score = context.health_score.unwrap_or(75);

        let vulnerabilities = if context.vulnerabilities.is_empty() {
            "None reported".to_owned()
        } else {
            context.vulnerabilities.join(", ")
        };
        let issues = if context.current_issues.is_empty() {
            "None reported".to_owned()
        } else {
            context
                .current_issues
                .iter()
                .map(|issue| issue.name.clone())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let (smoker, exercise, stress, sleep) = context.lifestyle.as_ref().map_or_else(
            || ("No", "Unknown".to_owned(), 5, 7.0),
            |lifestyle| {
                (
                    if lifestyle.smoker { "Yes" } else { "No" },
                    lifestyle.exercise_frequency.as_str().to_owned(),
                    lifestyle.stress_level,
                    lifestyle.sleep_hours,
                )
            },
        );

        let organ_lines = if context.organ_statuses.is_empty() {
            "- No organ data available".to_owned()
        } else {
            context
                .organ_statuses
                .iter()
                .map(|(organ, status)| format!("- {organ}: {status}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "PATIENT CONTEXT:\n\
             - Name: {name}\n\
             - Age: {age}, Gender: {gender}\n\
             - Health Score: {health_score}/100\n\
             - Vulnerabilities: {vulnerabilities}\n\
             - Current Issues: {issues}\n\
             - Smoker: {smoker}\n\
             - Exercise: {exercise}\n\
             - Stress Level: {stress}/10\n\
             - Sleep: {sleep}h/night\n\
             \n\
             ORGAN STATUS:\n\
             {organ_lines}"
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use healthos_core::models::Severity;

    fn context_with_organ(organ: Organ, status: OrganStatus) -> ProfileContext {
        let mut context = ProfileContext::default();
        context.organ_statuses.insert(organ, status);
        context
    }

    #[test]
    fn test_critical_heart_routes_to_cardiologist() {
        let context = context_with_organ(Organ::Heart, OrganStatus::Critical);
        let result = TriageRouter::new().assign_specialist(&context);

        assert_eq!(result.specialist_type, SpecialistType::Cardiologist);
        assert!(result.confidence >= 50);
    }

    #[test]
    fn test_empty_context_degrades_to_general_practitioner() {
        let result = TriageRouter::new().assign_specialist(&ProfileContext::default());

        assert_eq!(result.specialist_type, SpecialistType::GeneralPractitioner);
        assert_eq!(result.confidence, 10);
        assert!(result
            .system_prompt
            .contains("- No organ data available"));
    }

    #[test]
    fn test_tie_resolves_to_canonical_order() {
        // Asthma and anxiety both score 20; pulmonology precedes neurology
        let context = ProfileContext {
            vulnerabilities: vec!["asthma".to_owned(), "anxiety".to_owned()],
            ..ProfileContext::default()
        };
        let result = TriageRouter::new().assign_specialist(&context);

        assert_eq!(result.specialist_type, SpecialistType::Pulmonologist);
        assert_eq!(result.confidence, 20);
    }

    #[test]
    fn test_stomach_and_liver_both_feed_gastroenterology() {
        let mut context = context_with_organ(Organ::Stomach, OrganStatus::Warning);
        context
            .organ_statuses
            .insert(Organ::Liver, OrganStatus::Warning);
        let result = TriageRouter::new().assign_specialist(&context);

        assert_eq!(result.specialist_type, SpecialistType::Gastroenterologist);
        assert_eq!(result.confidence, 38);
    }

    #[test]
    fn test_diabetes_splits_points_between_nephrology_and_cardiology() {
        let context = ProfileContext {
            vulnerabilities: vec!["Type 2 Diabetes".to_owned()],
            ..ProfileContext::default()
        };
        let result = TriageRouter::new().assign_specialist(&context);

        // 15 nephrology beats 10 cardiology and the 10 GP baseline
        assert_eq!(result.specialist_type, SpecialistType::Nephrologist);
        assert_eq!(result.confidence, 15);
    }

    #[test]
    fn test_issue_keywords_are_case_insensitive_substrings() {
        let context = ProfileContext {
            current_issues: vec![CurrentIssue {
                name: "Sharp Chest Pain at night".to_owned(),
                severity: Severity::Severe,
            }],
            ..ProfileContext::default()
        };
        let result = TriageRouter::new().assign_specialist(&context);

        assert_eq!(result.specialist_type, SpecialistType::Cardiologist);
        assert_eq!(result.confidence, 30);
    }

    #[test]
    fn test_lifestyle_group_is_additive() {
        let context = ProfileContext {
            lifestyle: Some(Lifestyle {
                smoker: true,
                stress_level: 9,
                sleep_hours: 4.0,
                ..Lifestyle::default()
            }),
            ..ProfileContext::default()
        };
        let result = TriageRouter::new().assign_specialist(&context);

        // Neurology: 15 stress + 15 sleep beats pulmonology's 15 smoker
        assert_eq!(result.specialist_type, SpecialistType::Neurologist);
        assert_eq!(result.confidence, 30);
    }

    #[test]
    fn test_confidence_is_clamped_to_one_hundred() {
        let mut context = context_with_organ(Organ::Heart, OrganStatus::Critical);
        context.vulnerabilities = vec![
            "hypertension".to_owned(),
            "heart disease".to_owned(),
            "diabetes".to_owned(),
        ];
        context.current_issues = vec![CurrentIssue {
            name: "chest pain and palpitations".to_owned(),
            severity: Severity::Severe,
        }];
        let result = TriageRouter::new().assign_specialist(&context);

        assert_eq!(result.specialist_type, SpecialistType::Cardiologist);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_prompt_contains_persona_context_and_rules() {
        let mut context = context_with_organ(Organ::Heart, OrganStatus::Warning);
        context = ProfileContext {
            name: Some("Alex".to_owned()),
            age: Some(41),
            gender: Some(Gender::Other),
            health_score: Some(62),
            ..context
        };
        let result = TriageRouter::new().assign_specialist(&context);

        assert!(result.system_prompt.starts_with("You are Dr. ARIA"));
        assert!(result.system_prompt.contains("- Name: Alex"));
        assert!(result.system_prompt.contains("- Age: 41, Gender: other"));
        assert!(result.system_prompt.contains("- Health Score: 62/100"));
        assert!(result.system_prompt.contains("- heart: warning"));
        assert!(result.system_prompt.contains("IMPORTANT RULES:"));
        assert!(result.greeting.starts_with("I'm Dr. ARIA"));
    }

    #[test]
    fn test_missing_context_fields_fall_back_in_prompt() {
        let result = TriageRouter::new().assign_specialist(&ProfileContext::default());

        assert!(result.system_prompt.contains("- Name: Patient"));
        assert!(result
            .system_prompt
            .contains("- Age: Unknown, Gender: Unknown"));
        assert!(result.system_prompt.contains("- Health Score: 75/100"));
        assert!(result.system_prompt.contains("- Exercise: Unknown"));
        assert!(result.system_prompt.contains("- Sleep: 7h/night"));
    }

    #[test]
    fn test_organ_lines_follow_canonical_order() {
        let mut context = ProfileContext::default();
        context
            .organ_statuses
            .insert(Organ::Stomach, OrganStatus::Warning);
        context
            .organ_statuses
            .insert(Organ::Heart, OrganStatus::Critical);
        let result = TriageRouter::new().assign_specialist(&context);

        let heart_at = result.system_prompt.find("- heart: critical").unwrap();
        let stomach_at = result.system_prompt.find("- stomach: warning").unwrap();
        assert!(heart_at < stomach_at);
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let context = ProfileContext {
            vulnerabilities: vec!["migraine".to_owned()],
            lifestyle: Some(Lifestyle::default()),
            ..ProfileContext::default()
        };
        let router = TriageRouter::new();
        let first = router.assign_specialist(&context);
        let second = router.assign_specialist(&context);
        assert_eq!(first, second);
    }
}
