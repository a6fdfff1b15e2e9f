use super::profile::CareerStage;
use super::role::RoleSource;
use serde::{Deserialize, Serialize};

pub type Score = f32;

/// Relative importance of each sub-score. Each tuple sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub skill: Score,
    pub project: Score,
    pub experience: Score,
    pub resume: Score,
}

impl Weights {
    pub const fn new(skill: Score, project: Score, experience: Score, resume: Score) -> Self {
        Self {
            skill,
            project,
            experience,
            resume,
        }
    }

    pub fn as_array(&self) -> [Score; 4] {
        [self.skill, self.project, self.experience, self.resume]
    }

    pub fn sum(&self) -> Score {
        self.as_array().iter().sum()
    }
}

/// Career-stage-conditioned weight tuples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub student: Weights,
    pub fresher: Weights,
    pub working_professional: Weights,
    pub career_switcher: Weights,
    pub default: Weights,
}

impl Default for WeightTable {
    fn default() -> Self {
        let early_career = Weights::new(0.45, 0.30, 0.05, 0.20);
        Self {
            student: early_career,
            fresher: early_career,
            working_professional: Weights::new(0.30, 0.10, 0.40, 0.20),
            career_switcher: Weights::new(0.40, 0.40, 0.10, 0.10),
            default: Weights::new(0.35, 0.25, 0.20, 0.20),
        }
    }
}

impl WeightTable {
    pub fn for_stage(&self, stage: CareerStage) -> Weights {
        match stage {
            CareerStage::Student => self.student,
            CareerStage::Fresher => self.fresher,
            CareerStage::WorkingProfessional => self.working_professional,
            CareerStage::CareerSwitcher => self.career_switcher,
            CareerStage::Unspecified => self.default,
        }
    }
}

/// Score cut-offs used for status and experience credit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub strong_threshold: u8,
    pub beginner_floor: u8,
    pub full_credit_months: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            strong_threshold: 75,
            beginner_floor: 40,
            full_credit_months: 36.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Strong,
    NeedsProjects,
    SkillGap,
    Beginner,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Strong => "Strong",
            Status::NeedsProjects => "Needs projects",
            Status::SkillGap => "Skill gap",
            Status::Beginner => "Beginner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_score(score: u8) -> Self {
        if score >= 65 {
            Confidence::High
        } else if score >= 40 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Intermediate values behind a score, kept for explanations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill: Score,
    pub project: Score,
    pub experience: Score,
    pub resume: Score,
    pub weights: Weights,
    pub weighted: Score,
    pub adjusted: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub role: String,
    pub role_source: RoleSource,
    pub score: u8,
    pub status: Status,
    pub confidence: Confidence,
    pub gaps: Vec<String>,
    pub strengths: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weight_tuples_sum_to_one() {
        let table = WeightTable::default();
        for stage in [
            CareerStage::Student,
            CareerStage::Fresher,
            CareerStage::WorkingProfessional,
            CareerStage::CareerSwitcher,
            CareerStage::Unspecified,
        ] {
            assert!((table.for_stage(stage).sum() - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn confidence_bands_follow_score() {
        assert_eq!(Confidence::from_score(65), Confidence::High);
        assert_eq!(Confidence::from_score(64), Confidence::Medium);
        assert_eq!(Confidence::from_score(40), Confidence::Medium);
        assert_eq!(Confidence::from_score(39), Confidence::Low);
    }
}
