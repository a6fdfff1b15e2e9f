use super::Engine;
use crate::error::{Result, RoleFitError};
use crate::types::profile::{
    CandidateProfile, Complexity, Experience, ExperienceKind, Project, Skill, SkillLevel,
};
use crate::types::role::RoleRequirementProfile;
use crate::types::scoring::ScoringResult;
use serde::{Deserialize, Serialize};

/// A hypothetical single change to a candidate profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WhatIf {
    AddSkill {
        name: String,
        level: SkillLevel,
    },
    AddProject {
        tech_stack: Vec<String>,
        complexity: Complexity,
    },
    AddExperience {
        kind: ExperienceKind,
        duration: String,
    },
}

impl WhatIf {
    /// Returns a modified copy; `profile` is left untouched.
    pub fn apply(&self, profile: &CandidateProfile) -> CandidateProfile {
        let mut projected = profile.clone();
        match self {
            WhatIf::AddSkill { name, level } => {
                projected.skills.push(Skill::new(name.clone(), *level));
            }
            WhatIf::AddProject {
                tech_stack,
                complexity,
            } => {
                projected
                    .projects
                    .push(Project::new(tech_stack.clone(), *complexity));
            }
            WhatIf::AddExperience { kind, duration } => {
                projected
                    .experiences
                    .push(Experience::new(*kind, duration.clone()));
            }
        }
        projected
    }

    pub fn describe(&self) -> String {
        match self {
            WhatIf::AddSkill { name, level } => format!("add skill {name} ({level:?})"),
            WhatIf::AddProject {
                tech_stack,
                complexity,
            } => {
                if tech_stack.is_empty() {
                    format!("add {complexity:?}-complexity project")
                } else {
                    format!(
                        "add {complexity:?}-complexity project using {}",
                        tech_stack.join(", ")
                    )
                }
            }
            WhatIf::AddExperience { kind, duration } => {
                format!("add {kind:?} experience of {duration}")
            }
        }
    }

    /// Parses `Name:Level`, e.g. `Docker:Intermediate`.
    pub fn parse_skill(raw: &str) -> Result<Self> {
        let (name, level) = split_pair(raw, "skill", "Name:Level")?;
        let level = parse_strict_level(level)?;
        Ok(WhatIf::AddSkill {
            name: name.to_string(),
            level,
        })
    }

    /// Parses `Complexity` or `Complexity:tech,tech`, e.g. `High:Python,SQL`.
    pub fn parse_project(raw: &str) -> Result<Self> {
        let (complexity, tech) = match raw.split_once(':') {
            Some((complexity, tech)) => (complexity, tech),
            None => (raw, ""),
        };
        let complexity = parse_strict_complexity(complexity)?;
        let tech_stack = tech
            .split(',')
            .map(str::trim)
            .filter(|tech| !tech.is_empty())
            .map(str::to_string)
            .collect();
        Ok(WhatIf::AddProject {
            tech_stack,
            complexity,
        })
    }

    /// Parses `Type:duration`, e.g. `Internship:6 months`.
    pub fn parse_experience(raw: &str) -> Result<Self> {
        let (kind, duration) = split_pair(raw, "experience", "Type:duration")?;
        let kind = parse_strict_kind(kind)?;
        Ok(WhatIf::AddExperience {
            kind,
            duration: duration.to_string(),
        })
    }
}

fn split_pair<'a>(raw: &'a str, what: &str, shape: &str) -> Result<(&'a str, &'a str)> {
    match raw.split_once(':') {
        Some((left, right)) if !left.trim().is_empty() && !right.trim().is_empty() => {
            Ok((left.trim(), right.trim()))
        }
        _ => Err(RoleFitError::InvalidAction(format!(
            "{what} must be written as {shape}, got '{raw}'"
        ))),
    }
}

fn parse_strict_level(raw: &str) -> Result<SkillLevel> {
    match raw.trim().to_lowercase().as_str() {
        "beginner" => Ok(SkillLevel::Beginner),
        "intermediate" => Ok(SkillLevel::Intermediate),
        "advanced" => Ok(SkillLevel::Advanced),
        other => Err(RoleFitError::InvalidAction(format!(
            "unknown skill level '{other}' (expected beginner, intermediate or advanced)"
        ))),
    }
}

fn parse_strict_complexity(raw: &str) -> Result<Complexity> {
    match raw.trim().to_lowercase().as_str() {
        "low" => Ok(Complexity::Low),
        "medium" => Ok(Complexity::Medium),
        "high" => Ok(Complexity::High),
        other => Err(RoleFitError::InvalidAction(format!(
            "unknown project complexity '{other}' (expected low, medium or high)"
        ))),
    }
}

fn parse_strict_kind(raw: &str) -> Result<ExperienceKind> {
    match raw.trim().to_lowercase().as_str() {
        "job" => Ok(ExperienceKind::Job),
        "internship" => Ok(ExperienceKind::Internship),
        "freelance" => Ok(ExperienceKind::Freelance),
        "project" => Ok(ExperienceKind::Project),
        other => Err(RoleFitError::InvalidAction(format!(
            "unknown experience type '{other}' (expected job, internship, freelance or project)"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub role: String,
    pub action: WhatIf,
    pub baseline: ScoringResult,
    pub projected: ScoringResult,
    /// Always `projected.score - baseline.score`.
    pub delta: i16,
}

impl Engine {
    pub fn simulate(
        &self,
        candidate: &CandidateProfile,
        role: &RoleRequirementProfile,
        action: &WhatIf,
    ) -> SimulationOutcome {
        let baseline = self.score(candidate, role);
        let projected = self.score(&action.apply(candidate), role);
        let delta = i16::from(projected.score) - i16::from(baseline.score);

        tracing::debug!(
            role = %role.name,
            action = %action.describe(),
            baseline = baseline.score,
            projected = projected.score,
            delta,
            "simulated what-if"
        );

        SimulationOutcome {
            role: role.name.clone(),
            action: action.clone(),
            baseline,
            projected,
            delta,
        }
    }

    /// One outcome per role, in input order. Deltas differ per role.
    pub fn simulate_across(
        &self,
        candidate: &CandidateProfile,
        roles: &[RoleRequirementProfile],
        action: &WhatIf,
    ) -> Vec<SimulationOutcome> {
        roles
            .iter()
            .map(|role| self.simulate(candidate, role, action))
            .collect()
    }
}
