//! Role-fit scoring.
//!
//! `Engine::score` is a pure, total function of (candidate, role):
//!
//! 1. Sub-scores in [0, 1]: skills, projects, experience, resume.
//! 2. Weighted sum using the career-stage weight tuple.
//! 3. Market adjustment: × demand multiplier, × competition factor.
//! 4. `round(clamp(raw, 0, 1) × 100)`, then gaps, strengths, status.
//!
//! Unknown roles are resolved before scoring (see `roles::RoleCatalog`), so
//! the engine itself has no failure path.

pub mod experience;
pub mod explain;
pub mod matcher;
pub mod projects;
pub mod simulate;
pub mod skills;

use crate::types::config::RoleFitConfig;
use crate::types::profile::CandidateProfile;
use crate::types::role::RoleRequirementProfile;
use crate::types::scoring::{
    Confidence, ScoreBreakdown, ScoringResult, Thresholds, WeightTable,
};
use matcher::{CaseInsensitiveMatcher, SkillMatcher};
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Clone)]
pub struct Engine {
    weights: WeightTable,
    thresholds: Thresholds,
    matcher: Arc<dyn SkillMatcher>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(WeightTable::default(), Thresholds::default())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("weights", &self.weights)
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

impl Engine {
    pub fn new(weights: WeightTable, thresholds: Thresholds) -> Self {
        Self {
            weights,
            thresholds,
            matcher: Arc::new(CaseInsensitiveMatcher),
        }
    }

    pub fn from_config(config: Option<&RoleFitConfig>) -> Self {
        match config {
            Some(cfg) => Self::new(cfg.weight_table(), cfg.thresholds()),
            None => Self::default(),
        }
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn SkillMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn score(
        &self,
        candidate: &CandidateProfile,
        role: &RoleRequirementProfile,
    ) -> ScoringResult {
        let matcher = self.matcher.as_ref();
        let weights = self.weights.for_stage(candidate.career_stage);

        let skill = skills::skill_score(&candidate.skills, role, matcher);
        let project = projects::project_score(&candidate.projects, role.min_projects);
        let experience = experience::experience_score(
            &candidate.experiences,
            self.thresholds.full_credit_months,
        );
        let resume = resume_score(candidate);

        let weighted = skill * weights.skill
            + project * weights.project
            + experience * weights.experience
            + resume * weights.resume;
        let adjusted =
            weighted * role.market_demand_multiplier * role.competition_level.factor();
        let score = to_percent(adjusted);

        let explanation = explain::explain(candidate, role, matcher);
        let status = explain::derive_status(score, &explanation, &self.thresholds);

        tracing::debug!(
            role = %role.name,
            stage = ?candidate.career_stage,
            skill,
            project,
            experience,
            resume,
            weighted,
            adjusted,
            score,
            "scored candidate"
        );

        ScoringResult {
            role: role.name.clone(),
            role_source: role.source,
            score,
            status,
            confidence: Confidence::from_score(score),
            gaps: explanation.gaps,
            strengths: explanation.strengths,
            breakdown: ScoreBreakdown {
                skill,
                project,
                experience,
                resume,
                weights,
                weighted,
                adjusted,
            },
        }
    }

    /// Scores every role, best fit first; ties break on role name.
    pub fn rank(
        &self,
        candidate: &CandidateProfile,
        roles: &[RoleRequirementProfile],
    ) -> Vec<ScoringResult> {
        let mut results = roles
            .iter()
            .map(|role| self.score(candidate, role))
            .collect::<Vec<_>>();
        results.sort_by(|a, b| match b.score.cmp(&a.score) {
            Ordering::Equal => a.role.cmp(&b.role),
            other => other,
        });
        results
    }
}

/// Scores with the canonical weights and exact skill matching.
pub fn score(candidate: &CandidateProfile, role: &RoleRequirementProfile) -> ScoringResult {
    Engine::default().score(candidate, role)
}

fn resume_score(candidate: &CandidateProfile) -> f32 {
    candidate
        .resume_completeness_score
        .filter(|value| value.is_finite())
        .map(|value| (value / 100.0).clamp(0.0, 1.0))
        .unwrap_or(0.0)
}

fn to_percent(raw: f32) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    (raw.clamp(0.0, 1.0) * 100.0).round() as u8
}
