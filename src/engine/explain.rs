use super::experience::has_kind;
use super::matcher::{normalize, SkillMatcher};
use super::projects::high_complexity_count;
use super::skills::is_satisfied;
use crate::types::profile::{CandidateProfile, ExperienceKind, SkillLevel};
use crate::types::role::RoleRequirementProfile;
use crate::types::scoring::{Status, Thresholds};
use std::collections::BTreeSet;

pub const MISSING_SKILL_PREFIX: &str = "Missing core skill: ";
pub const PROJECT_GAP_PREFIX: &str = "Lack of projects: ";
pub const NO_INTERNSHIP: &str = "No internship experience";
pub const NO_RESUME: &str = "Resume not uploaded";

pub const HIGH_DEPTH: &str = "High technical depth in projects";
pub const INTERNSHIP_STRENGTH: &str = "Professional internship experience";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Explanation {
    pub gaps: Vec<String>,
    pub strengths: Vec<String>,
    pub skill_gap: bool,
    pub project_gap: bool,
}

pub fn explain(
    candidate: &CandidateProfile,
    role: &RoleRequirementProfile,
    matcher: &dyn SkillMatcher,
) -> Explanation {
    let mut explanation = Explanation::default();

    for requirement in &role.required_skills {
        if !is_satisfied(&candidate.skills, requirement, matcher) {
            explanation
                .gaps
                .push(format!("{MISSING_SKILL_PREFIX}{}", requirement.text));
            explanation.skill_gap = true;
        }
    }

    let project_count = candidate.projects.len();
    if project_count < role.min_projects as usize {
        explanation.gaps.push(format!(
            "{PROJECT_GAP_PREFIX}Add {} more",
            role.min_projects as usize - project_count
        ));
        explanation.project_gap = true;
    }

    if role.internship_preference && !has_kind(&candidate.experiences, ExperienceKind::Internship)
    {
        explanation.gaps.push(NO_INTERNSHIP.to_string());
    }

    if !candidate.has_resume() {
        explanation.gaps.push(NO_RESUME.to_string());
    }

    if high_complexity_count(&candidate.projects) > 0 {
        explanation.strengths.push(HIGH_DEPTH.to_string());
    }
    if has_kind(&candidate.experiences, ExperienceKind::Internship) {
        explanation.strengths.push(INTERNSHIP_STRENGTH.to_string());
    }
    let advanced = advanced_skill_count(candidate);
    if advanced >= 2 {
        explanation
            .strengths
            .push(format!("Advanced proficiency in {advanced} core areas"));
    }

    explanation
}

/// Distinct skill names held at Advanced level.
pub fn advanced_skill_count(candidate: &CandidateProfile) -> usize {
    candidate
        .skills
        .iter()
        .filter(|skill| skill.level == SkillLevel::Advanced)
        .map(|skill| normalize(&skill.name))
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

pub fn derive_status(score: u8, explanation: &Explanation, thresholds: &Thresholds) -> Status {
    if score >= thresholds.strong_threshold {
        Status::Strong
    } else if score < thresholds.beginner_floor {
        Status::Beginner
    } else if explanation.project_gap {
        Status::NeedsProjects
    } else if explanation.skill_gap {
        Status::SkillGap
    } else {
        Status::Beginner
    }
}
