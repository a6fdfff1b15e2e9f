use super::profile::fold_enum_text;
use serde::{Deserialize, Serialize};

/// One required-skill slot. Any of `alternatives` satisfies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SkillRequirement {
    pub text: String,
    pub alternatives: Vec<String>,
}

impl SkillRequirement {
    /// Parses requirement text such as `"Java OR Python"` or `"AWS | GCP"`.
    pub fn parse(text: &str) -> Self {
        let mut alternatives = Vec::new();
        for pipe_part in text.split('|') {
            let mut current = Vec::new();
            for word in pipe_part.split_whitespace() {
                if word.eq_ignore_ascii_case("or") {
                    push_alternative(&mut alternatives, &current);
                    current.clear();
                } else {
                    current.push(word);
                }
            }
            push_alternative(&mut alternatives, &current);
        }

        Self {
            text: text.trim().to_string(),
            alternatives,
        }
    }
}

fn push_alternative(alternatives: &mut Vec<String>, words: &[&str]) {
    if !words.is_empty() {
        alternatives.push(words.join(" "));
    }
}

impl From<String> for SkillRequirement {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<SkillRequirement> for String {
    fn from(requirement: SkillRequirement) -> Self {
        requirement.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum CompetitionLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl CompetitionLevel {
    pub fn factor(self) -> f32 {
        match self {
            CompetitionLevel::High => 0.95,
            CompetitionLevel::Medium => 1.0,
            CompetitionLevel::Low => 1.05,
        }
    }
}

impl From<String> for CompetitionLevel {
    fn from(raw: String) -> Self {
        match fold_enum_text(&raw).as_str() {
            "low" => CompetitionLevel::Low,
            "high" => CompetitionLevel::High,
            _ => CompetitionLevel::Medium,
        }
    }
}

/// Where a resolved role profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSource {
    #[default]
    Catalog,
    Configured,
    Synthesized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequirementProfile {
    pub name: String,
    #[serde(default)]
    pub required_skills: Vec<SkillRequirement>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_projects: u32,
    #[serde(default)]
    pub internship_preference: bool,
    #[serde(default)]
    pub competition_level: CompetitionLevel,
    #[serde(default = "default_market_multiplier")]
    pub market_demand_multiplier: f32,
    #[serde(default)]
    pub source: RoleSource,
}

pub(crate) fn default_market_multiplier() -> f32 {
    1.0
}

impl RoleRequirementProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
            min_projects: 0,
            internship_preference: false,
            competition_level: CompetitionLevel::Medium,
            market_demand_multiplier: default_market_multiplier(),
            source: RoleSource::Catalog,
        }
    }

    pub fn require(mut self, requirements: &[&str]) -> Self {
        self.required_skills
            .extend(requirements.iter().map(|text| SkillRequirement::parse(text)));
        self
    }

    pub fn prefer(mut self, skills: &[&str]) -> Self {
        self.preferred_skills
            .extend(skills.iter().map(|skill| skill.to_string()));
        self
    }

    pub fn min_projects(mut self, min_projects: u32) -> Self {
        self.min_projects = min_projects;
        self
    }

    pub fn internship_preferred(mut self) -> Self {
        self.internship_preference = true;
        self
    }

    pub fn competition(mut self, level: CompetitionLevel) -> Self {
        self.competition_level = level;
        self
    }

    pub fn market_demand(mut self, multiplier: f32) -> Self {
        self.market_demand_multiplier = multiplier;
        self
    }

    pub fn source(mut self, source: RoleSource) -> Self {
        self.source = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_splits_on_or_keyword_and_pipe() {
        let requirement = SkillRequirement::parse("Java OR Python or C++ | Go");
        assert_eq!(requirement.text, "Java OR Python or C++ | Go");
        assert_eq!(
            requirement.alternatives,
            vec!["Java", "Python", "C++", "Go"]
        );
    }

    #[test]
    fn requirement_keeps_multi_word_names() {
        let requirement = SkillRequirement::parse("Machine Learning OR Deep Learning");
        assert_eq!(
            requirement.alternatives,
            vec!["Machine Learning", "Deep Learning"]
        );
    }

    #[test]
    fn single_requirement_has_one_alternative() {
        let requirement = SkillRequirement::parse("  SQL ");
        assert_eq!(requirement.text, "SQL");
        assert_eq!(requirement.alternatives, vec!["SQL"]);
    }

    #[test]
    fn role_profile_parses_from_json_with_defaults() {
        let role: RoleRequirementProfile = serde_json::from_str(
            r#"{"name": "Tester", "requiredSkills": ["Selenium OR Cypress"], "competitionLevel": "HIGH"}"#,
        )
        .expect("role should parse");
        assert_eq!(role.required_skills[0].alternatives.len(), 2);
        assert_eq!(role.competition_level, CompetitionLevel::High);
        assert_eq!(role.min_projects, 0);
        assert!((role.market_demand_multiplier - 1.0).abs() < f32::EPSILON);
    }
}
