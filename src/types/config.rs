use super::role::{CompetitionLevel, RoleRequirementProfile, RoleSource, SkillRequirement};
use super::scoring::{Thresholds, WeightTable, Weights};
use crate::error::RoleFitError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

pub const WEIGHT_STAGE_KEYS: [&str; 5] = [
    "student",
    "fresher",
    "working_professional",
    "career_switcher",
    "default",
];

pub const MAX_MARKET_DEMAND_MULTIPLIER: f32 = 1.2;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleFitConfig {
    pub scoring: Option<ScoringConfig>,
    pub weights: Option<BTreeMap<String, WeightsConfig>>,
    #[serde(default)]
    pub roles: BTreeMap<String, RoleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub strong_threshold: Option<u8>,
    pub beginner_floor: Option<u8>,
    pub full_credit_months: Option<f32>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightsConfig {
    pub skill: f32,
    pub project: f32,
    pub experience: f32,
    pub resume: f32,
}

impl From<WeightsConfig> for Weights {
    fn from(cfg: WeightsConfig) -> Self {
        Weights::new(cfg.skill, cfg.project, cfg.experience, cfg.resume)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleConfig {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_projects: u32,
    #[serde(default)]
    pub internship_preference: bool,
    pub competition_level: Option<String>,
    pub market_demand_multiplier: Option<f32>,
}

impl RoleConfig {
    pub fn to_profile(&self, name: &str) -> RoleRequirementProfile {
        let mut profile = RoleRequirementProfile::new(name)
            .min_projects(self.min_projects)
            .source(RoleSource::Configured);
        profile.required_skills = self
            .required_skills
            .iter()
            .map(|text| SkillRequirement::parse(text))
            .collect();
        profile.preferred_skills = self.preferred_skills.clone();
        profile.internship_preference = self.internship_preference;
        profile.competition_level = self
            .competition_level
            .clone()
            .map(CompetitionLevel::from)
            .unwrap_or_default();
        if let Some(multiplier) = self.market_demand_multiplier {
            profile.market_demand_multiplier = multiplier;
        }
        profile
    }
}

impl RoleFitConfig {
    pub fn weight_table(&self) -> WeightTable {
        let mut table = WeightTable::default();
        if let Some(weights) = &self.weights {
            for (stage, tuple) in weights {
                let tuple = Weights::from(*tuple);
                match stage.as_str() {
                    "student" => table.student = tuple,
                    "fresher" => table.fresher = tuple,
                    "working_professional" => table.working_professional = tuple,
                    "career_switcher" => table.career_switcher = tuple,
                    "default" => table.default = tuple,
                    _ => {}
                }
            }
        }
        table
    }

    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.scoring {
            Some(scoring) => Thresholds {
                strong_threshold: scoring
                    .strong_threshold
                    .unwrap_or(defaults.strong_threshold),
                beginner_floor: scoring.beginner_floor.unwrap_or(defaults.beginner_floor),
                full_credit_months: scoring
                    .full_credit_months
                    .unwrap_or(defaults.full_credit_months),
            },
            None => defaults,
        }
    }

    pub fn role_profiles(&self) -> Vec<RoleRequirementProfile> {
        self.roles
            .iter()
            .map(|(name, role)| role.to_profile(name))
            .collect()
    }

    pub fn validate(&self) -> Result<(), RoleFitError> {
        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| !WEIGHT_STAGE_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(RoleFitError::ConfigParse(format!(
                    "weights contains unknown stage key(s): {}",
                    unknown.join(", ")
                )));
            }

            for (stage, tuple) in weights {
                let tuple = Weights::from(*tuple);
                if tuple
                    .as_array()
                    .iter()
                    .any(|weight| !(0.0..=1.0).contains(weight))
                {
                    return Err(RoleFitError::ConfigParse(format!(
                        "weights.{stage} values must be between 0.0 and 1.0"
                    )));
                }
                if (tuple.sum() - 1.0).abs() > 0.001 {
                    return Err(RoleFitError::ConfigParse(format!(
                        "weights.{stage} must sum to 1.0 (found {:.3})",
                        tuple.sum()
                    )));
                }
            }
        }

        let thresholds = self.thresholds();
        if thresholds.strong_threshold > 100 {
            return Err(RoleFitError::ConfigParse(
                "scoring.strong_threshold must be between 0 and 100".to_string(),
            ));
        }
        if thresholds.beginner_floor > thresholds.strong_threshold {
            return Err(RoleFitError::ConfigParse(
                "scoring.beginner_floor cannot exceed scoring.strong_threshold".to_string(),
            ));
        }
        if thresholds.full_credit_months <= 0.0 || !thresholds.full_credit_months.is_finite() {
            return Err(RoleFitError::ConfigParse(
                "scoring.full_credit_months must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (name, role) in &self.roles {
            if name.trim().is_empty() {
                return Err(RoleFitError::ConfigParse(
                    "roles entries must have a non-empty name".to_string(),
                ));
            }
            if !seen.insert(name.trim().to_lowercase()) {
                return Err(RoleFitError::ConfigParse(format!(
                    "roles contains duplicate role name (case-insensitive): {name}"
                )));
            }
            if role.required_skills.iter().any(|skill| skill.trim().is_empty()) {
                return Err(RoleFitError::ConfigParse(format!(
                    "roles.\"{name}\".required_skills entries must be non-empty"
                )));
            }
            if let Some(multiplier) = role.market_demand_multiplier {
                if !(0.0..=MAX_MARKET_DEMAND_MULTIPLIER).contains(&multiplier) {
                    return Err(RoleFitError::ConfigParse(format!(
                        "roles.\"{name}\".market_demand_multiplier must be between 0.0 and {MAX_MARKET_DEMAND_MULTIPLIER}"
                    )));
                }
            }
        }

        Ok(())
    }
}
