use serde::{Deserialize, Deserializer, Serialize};

/// Self-declared career stage; selects the weight tuple used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum CareerStage {
    Student,
    Fresher,
    WorkingProfessional,
    CareerSwitcher,
    #[default]
    Unspecified,
}

impl From<String> for CareerStage {
    fn from(raw: String) -> Self {
        match fold_enum_text(&raw).as_str() {
            "student" => CareerStage::Student,
            "fresher" => CareerStage::Fresher,
            "workingprofessional" | "professional" => CareerStage::WorkingProfessional,
            "careerswitcher" | "switcher" => CareerStage::CareerSwitcher,
            _ => CareerStage::Unspecified,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "String")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn weight(self) -> f32 {
        match self {
            SkillLevel::Advanced => 1.0,
            SkillLevel::Intermediate => 0.75,
            SkillLevel::Beginner => 0.5,
        }
    }
}

impl From<String> for SkillLevel {
    fn from(raw: String) -> Self {
        match fold_enum_text(&raw).as_str() {
            "advanced" | "expert" => SkillLevel::Advanced,
            "intermediate" => SkillLevel::Intermediate,
            _ => SkillLevel::Beginner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Complexity {
    #[default]
    Low,
    Medium,
    High,
}

impl From<String> for Complexity {
    fn from(raw: String) -> Self {
        match fold_enum_text(&raw).as_str() {
            "high" => Complexity::High,
            "medium" => Complexity::Medium,
            _ => Complexity::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ExperienceKind {
    Job,
    Internship,
    Freelance,
    #[default]
    Project,
}

impl ExperienceKind {
    pub fn weight(self) -> f32 {
        match self {
            ExperienceKind::Job => 1.0,
            ExperienceKind::Internship => 0.8,
            ExperienceKind::Freelance => 0.6,
            ExperienceKind::Project => 0.4,
        }
    }
}

impl From<String> for ExperienceKind {
    fn from(raw: String) -> Self {
        match fold_enum_text(&raw).as_str() {
            "job" | "fulltime" | "parttime" => ExperienceKind::Job,
            "internship" | "intern" => ExperienceKind::Internship,
            "freelance" | "contract" => ExperienceKind::Freelance,
            _ => ExperienceKind::Project,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub complexity: Complexity,
}

impl Project {
    pub fn new(tech_stack: Vec<String>, complexity: Complexity) -> Self {
        Self {
            tech_stack,
            complexity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: ExperienceKind,
    /// Free text such as "6 months" or "1 year 6 months".
    #[serde(
        rename = "duration",
        alias = "durationRaw",
        default,
        deserialize_with = "null_as_default"
    )]
    pub duration_raw: String,
}

impl Experience {
    pub fn new(kind: ExperienceKind, duration_raw: impl Into<String>) -> Self {
        Self {
            kind,
            duration_raw: duration_raw.into(),
        }
    }
}

/// Snapshot of a job seeker's profile as assembled from upstream records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_stage: CareerStage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experiences: Vec<Experience>,
    /// 0-100 as produced by the resume parser. `None` when no resume was uploaded.
    #[serde(default)]
    pub resume_completeness_score: Option<f32>,
}

impl CandidateProfile {
    pub fn new(career_stage: CareerStage) -> Self {
        Self {
            career_stage,
            ..Self::default()
        }
    }

    pub fn with_skill(mut self, name: &str, level: SkillLevel) -> Self {
        self.skills.push(Skill::new(name, level));
        self
    }

    pub fn with_project(mut self, tech_stack: &[&str], complexity: Complexity) -> Self {
        self.projects.push(Project::new(
            tech_stack.iter().map(|tech| tech.to_string()).collect(),
            complexity,
        ));
        self
    }

    pub fn with_experience(mut self, kind: ExperienceKind, duration: &str) -> Self {
        self.experiences.push(Experience::new(kind, duration));
        self
    }

    pub fn with_resume_score(mut self, score: f32) -> Self {
        self.resume_completeness_score = Some(score);
        self
    }

    pub fn has_resume(&self) -> bool {
        self.resume_completeness_score
            .map(|score| score > 0.0)
            .unwrap_or(false)
    }
}

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn fold_enum_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_upstream_record() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{
                "careerStage": "WorkingProfessional",
                "skills": [{"name": "Rust", "level": "advanced"}],
                "projects": [{"techStack": ["Rust"], "complexity": "High"}],
                "experiences": [{"type": "Job", "duration": "2 years"}],
                "resumeCompletenessScore": 80
            }"#,
        )
        .expect("profile should parse");

        assert_eq!(profile.career_stage, CareerStage::WorkingProfessional);
        assert_eq!(profile.skills[0].level, SkillLevel::Advanced);
        assert_eq!(profile.projects[0].complexity, Complexity::High);
        assert_eq!(profile.experiences[0].kind, ExperienceKind::Job);
        assert_eq!(profile.experiences[0].duration_raw, "2 years");
        assert_eq!(profile.resume_completeness_score, Some(80.0));
    }

    #[test]
    fn coerces_missing_and_null_fields() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{
                "careerStage": null,
                "skills": null,
                "projects": [{"complexity": "medium"}],
                "experiences": [{"type": "internship", "duration": null}, {}]
            }"#,
        )
        .expect("loose profile should parse");

        assert_eq!(profile.career_stage, CareerStage::Unspecified);
        assert!(profile.skills.is_empty());
        assert!(profile.projects[0].tech_stack.is_empty());
        assert_eq!(profile.experiences[0].kind, ExperienceKind::Internship);
        assert_eq!(profile.experiences[0].duration_raw, "");
        assert_eq!(profile.experiences[1].kind, ExperienceKind::Project);
        assert!(!profile.has_resume());
    }

    #[test]
    fn null_inside_records_falls_back_to_defaults() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{
                "skills": [
                    {"name": "Python", "level": null},
                    {"name": null, "level": "Advanced"}
                ],
                "projects": [{"techStack": ["Rust"], "complexity": null}],
                "experiences": [{"type": null, "duration": "1 year"}]
            }"#,
        )
        .expect("nulls inside records should be coerced");

        assert_eq!(profile.skills[0], Skill::new("Python", SkillLevel::Beginner));
        assert_eq!(profile.skills[1], Skill::new("", SkillLevel::Advanced));
        assert_eq!(profile.projects[0].complexity, Complexity::Low);
        assert_eq!(profile.projects[0].tech_stack, vec!["Rust"]);
        assert_eq!(profile.experiences[0].kind, ExperienceKind::Project);
        assert_eq!(profile.experiences[0].duration_raw, "1 year");
    }

    #[test]
    fn unknown_enum_text_falls_back_to_weakest_variant() {
        assert_eq!(SkillLevel::from("guru".to_string()), SkillLevel::Beginner);
        assert_eq!(Complexity::from("epic".to_string()), Complexity::Low);
        assert_eq!(
            ExperienceKind::from("volunteer".to_string()),
            ExperienceKind::Project
        );
        assert_eq!(
            CareerStage::from("career_switcher".to_string()),
            CareerStage::CareerSwitcher
        );
        assert_eq!(
            CareerStage::from("working professional".to_string()),
            CareerStage::WorkingProfessional
        );
    }

    #[test]
    fn duration_raw_alias_is_accepted() {
        let experience: Experience =
            serde_json::from_str(r#"{"type": "Freelance", "durationRaw": "6 months"}"#)
                .expect("experience should parse");
        assert_eq!(experience.kind, ExperienceKind::Freelance);
        assert_eq!(experience.duration_raw, "6 months");
    }
}
