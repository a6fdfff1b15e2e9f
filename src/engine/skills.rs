use super::matcher::SkillMatcher;
use crate::types::profile::{Skill, SkillLevel};
use crate::types::role::{RoleRequirementProfile, SkillRequirement};

const PREFERRED_BONUS_SCALE: f32 = 0.2;

/// Strongest level among the candidate's skills matching any of `alternatives`.
pub fn best_match<S: AsRef<str>>(
    skills: &[Skill],
    alternatives: &[S],
    matcher: &dyn SkillMatcher,
) -> Option<SkillLevel> {
    skills
        .iter()
        .filter(|skill| {
            alternatives
                .iter()
                .any(|wanted| matcher.matches(&skill.name, wanted.as_ref()))
        })
        .map(|skill| skill.level)
        .max()
}

pub fn is_satisfied(
    skills: &[Skill],
    requirement: &SkillRequirement,
    matcher: &dyn SkillMatcher,
) -> bool {
    best_match(skills, &requirement.alternatives, matcher).is_some()
}

pub fn required_match_ratio(
    skills: &[Skill],
    role: &RoleRequirementProfile,
    matcher: &dyn SkillMatcher,
) -> f32 {
    if role.required_skills.is_empty() {
        return 1.0;
    }
    let total: f32 = role
        .required_skills
        .iter()
        .map(|requirement| {
            best_match(skills, &requirement.alternatives, matcher)
                .map(SkillLevel::weight)
                .unwrap_or(0.0)
        })
        .sum();
    total / role.required_skills.len() as f32
}

pub fn preferred_bonus(
    skills: &[Skill],
    role: &RoleRequirementProfile,
    matcher: &dyn SkillMatcher,
) -> f32 {
    if role.preferred_skills.is_empty() {
        return 0.0;
    }
    let total: f32 = role
        .preferred_skills
        .iter()
        .map(|wanted| {
            best_match(skills, std::slice::from_ref(wanted), matcher)
                .map(SkillLevel::weight)
                .unwrap_or(0.0)
        })
        .sum();
    total / role.preferred_skills.len() as f32 * PREFERRED_BONUS_SCALE
}

pub fn skill_score(
    skills: &[Skill],
    role: &RoleRequirementProfile,
    matcher: &dyn SkillMatcher,
) -> f32 {
    let score = required_match_ratio(skills, role, matcher) + preferred_bonus(skills, role, matcher);
    score.clamp(0.0, 1.0)
}
