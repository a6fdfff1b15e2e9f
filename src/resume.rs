//! Boundary with the external resume parser.
//!
//! The parser runs out of process and prints JSON with snake_case keys. Only
//! the completeness score feeds scoring directly; extracted skill names are
//! offered as Beginner-level additions when the profile lacks them.

use crate::engine::matcher::normalize;
use crate::error::{Result, RoleFitError};
use crate::types::profile::{null_as_default, CandidateProfile, Skill, SkillLevel};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResumeParse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    /// Parser-native 0-1 scale.
    #[serde(default)]
    pub resume_completeness_score: Option<f32>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ResumeParse {
    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RoleFitError::InputNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| RoleFitError::InvalidInput {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Completeness on the engine's 0-100 scale. Values above 1 are taken as
    /// already being percentages.
    pub fn completeness_percent(&self) -> f32 {
        match self.resume_completeness_score {
            Some(score) if score.is_finite() && score > 1.0 => score.min(100.0),
            Some(score) if score.is_finite() => (score * 100.0).max(0.0),
            _ => 0.0,
        }
    }

    /// Returns a copy of `profile` carrying the resume-derived fields.
    ///
    /// A parse that reported an error never counts as an uploaded resume.
    pub fn apply_to(&self, profile: &CandidateProfile) -> CandidateProfile {
        let mut merged = profile.clone();
        let completeness = match &self.error {
            Some(error) => {
                tracing::warn!(%error, "resume parser reported an error; completeness treated as 0");
                0.0
            }
            None => self.completeness_percent(),
        };
        merged.resume_completeness_score = Some(completeness);

        let mut known: HashSet<String> = merged
            .skills
            .iter()
            .map(|skill| normalize(&skill.name))
            .collect();
        for name in &self.skills {
            let key = normalize(name);
            if key.is_empty() || !known.insert(key) {
                continue;
            }
            merged
                .skills
                .push(Skill::new(name.trim(), SkillLevel::Beginner));
        }

        tracing::debug!(
            completeness,
            skills_added = merged.skills.len() - profile.skills.len(),
            "merged resume parse into profile"
        );
        merged
    }
}
