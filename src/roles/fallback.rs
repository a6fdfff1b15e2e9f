use crate::types::role::{CompetitionLevel, RoleRequirementProfile, RoleSource};

const TECHNICAL_MARKERS: [&str; 26] = [
    "engineer",
    "developer",
    "sde",
    "software",
    "data",
    "ml",
    "machine learning",
    "ai",
    "devops",
    "cloud",
    "backend",
    "frontend",
    "full stack",
    "fullstack",
    "programmer",
    "scientist",
    "analyst",
    "security",
    "qa",
    "test",
    "architect",
    "web",
    "mobile",
    "android",
    "ios",
    "sre",
];

pub fn is_technical(role_name: &str) -> bool {
    let lowered = role_name.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    TECHNICAL_MARKERS.iter().any(|marker| {
        if marker.contains(' ') {
            lowered.contains(marker)
        } else if marker.len() <= 3 {
            // short markers must be whole words ("ai" should not match "retail")
            words.iter().any(|word| word == marker)
        } else {
            words.iter().any(|word| word.starts_with(marker))
        }
    })
}

/// Default profile for a role name missing from the catalog and config.
pub fn synthesize(role_name: &str) -> RoleRequirementProfile {
    let name = role_name.trim();
    let profile = if is_technical(name) {
        RoleRequirementProfile::new(name)
            .require(&["Programming Fundamentals", "Data Structures & Algorithms", "Git"])
            .prefer(&["SQL"])
            .min_projects(2)
    } else {
        RoleRequirementProfile::new(name)
            .require(&["Communication", "Problem Solving", "Teamwork"])
            .prefer(&["MS Office"])
            .min_projects(1)
    };

    profile
        .competition(CompetitionLevel::Medium)
        .market_demand(1.0)
        .source(RoleSource::Synthesized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_technical_role_names() {
        for name in [
            "Blockchain Developer",
            "Site Reliability Engineer",
            "AI Researcher",
            "iOS Dev",
            "Penetration Tester",
            "Full Stack Intern",
        ] {
            assert!(is_technical(name), "{name} should be technical");
        }
    }

    #[test]
    fn classifies_non_technical_role_names() {
        for name in ["Retail Associate", "HR Generalist", "Content Writer", "Sales Executive"] {
            assert!(!is_technical(name), "{name} should not be technical");
        }
    }

    #[test]
    fn technical_fallback_requires_two_projects() {
        let role = synthesize("Rust Developer");
        assert_eq!(role.name, "Rust Developer");
        assert_eq!(role.min_projects, 2);
        assert_eq!(role.source, RoleSource::Synthesized);
        assert_eq!(role.required_skills.len(), 3);
    }

    #[test]
    fn non_technical_fallback_uses_soft_skills() {
        let role = synthesize("  Event Coordinator ");
        assert_eq!(role.name, "Event Coordinator");
        assert_eq!(role.min_projects, 1);
        assert_eq!(role.required_skills[0].text, "Communication");
    }
}
