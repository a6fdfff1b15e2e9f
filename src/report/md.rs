use crate::engine::simulate::SimulationOutcome;
use crate::types::role::RoleSource;
use crate::types::scoring::ScoringResult;

pub fn score_markdown(result: &ScoringResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Role Fit: {}\n\n", result.role));
    if result.role_source == RoleSource::Synthesized {
        output.push_str("_Role not in catalog; scored against a synthesized default profile._\n\n");
    }
    output.push_str(&format!(
        "Score: {}/100 ({}, {:?} confidence)\n\n",
        result.score,
        result.status.label(),
        result.confidence
    ));

    let breakdown = &result.breakdown;
    output.push_str("## Breakdown\n\n");
    output.push_str(&format!(
        "- skills: {:.3} (weight {:.2})\n- projects: {:.3} (weight {:.2})\n- experience: {:.3} (weight {:.2})\n- resume: {:.3} (weight {:.2})\n- market adjusted: {:.3}\n\n",
        breakdown.skill,
        breakdown.weights.skill,
        breakdown.project,
        breakdown.weights.project,
        breakdown.experience,
        breakdown.weights.experience,
        breakdown.resume,
        breakdown.weights.resume,
        breakdown.adjusted
    ));

    push_list(&mut output, "Gaps", &result.gaps);
    push_list(&mut output, "Strengths", &result.strengths);
    output
}

pub fn ranking_markdown(results: &[ScoringResult]) -> String {
    let mut output = String::new();
    output.push_str("# Role Ranking\n\n");
    if results.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| # | Role | Score | Status | Top gap |\n|---|---|---|---|---|\n");
    for (index, result) in results.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            index + 1,
            table_cell(&result.role),
            result.score,
            result.status.label(),
            result.gaps.first().map(|gap| table_cell(gap)).unwrap_or_else(|| "-".to_string())
        ));
    }
    output
}

pub fn simulation_markdown(outcomes: &[SimulationOutcome]) -> String {
    let mut output = String::new();
    output.push_str("# What-if Simulation\n\n");
    match outcomes.first() {
        Some(first) => output.push_str(&format!("Action: {}\n\n", first.action.describe())),
        None => {
            output.push_str("- none\n");
            return output;
        }
    }

    output.push_str("| Role | Before | After | Delta | Status |\n|---|---|---|---|---|\n");
    for outcome in outcomes {
        output.push_str(&format!(
            "| {} | {} | {} | {:+} | {} |\n",
            table_cell(&outcome.role),
            outcome.baseline.score,
            outcome.projected.score,
            outcome.delta,
            outcome.projected.status.label()
        ));
    }
    output
}

fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn push_list(output: &mut String, title: &str, items: &[String]) {
    output.push_str(&format!("## {title}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulate::WhatIf;
    use crate::engine::Engine;
    use crate::roles::RoleCatalog;
    use crate::types::profile::{CandidateProfile, CareerStage, SkillLevel};
    use crate::types::role::RoleRequirementProfile;

    fn candidate() -> CandidateProfile {
        CandidateProfile::new(CareerStage::Student).with_skill("Python", SkillLevel::Advanced)
    }

    #[test]
    fn score_markdown_contains_sections() {
        let catalog = RoleCatalog::default();
        let result = Engine::default().score(&candidate(), &catalog.resolve("Data Analyst"));

        let rendered = score_markdown(&result);
        assert!(rendered.contains("# Role Fit: Data Analyst"));
        assert!(rendered.contains("## Breakdown"));
        assert!(rendered.contains("## Gaps"));
        assert!(rendered.contains("- Missing core skill: SQL"));
        assert!(rendered.contains("## Strengths\n\n- none"));
    }

    #[test]
    fn synthesized_role_is_flagged() {
        let catalog = RoleCatalog::default();
        let result = Engine::default().score(&candidate(), &catalog.resolve("Florist"));
        assert!(score_markdown(&result).contains("synthesized default profile"));
    }

    #[test]
    fn simulation_markdown_shows_signed_delta() {
        let catalog = RoleCatalog::default();
        let outcomes = Engine::default().simulate_across(
            &candidate(),
            &[catalog.resolve("Data Analyst")],
            &WhatIf::AddSkill {
                name: "SQL".to_string(),
                level: SkillLevel::Advanced,
            },
        );
        let rendered = simulation_markdown(&outcomes);
        assert!(rendered.contains("Action: add skill SQL (Advanced)"));
        assert!(rendered.contains("| Data Analyst |"));
        assert!(rendered.contains("| +"));
    }

    #[test]
    fn ranking_markdown_numbers_rows() {
        let catalog = RoleCatalog::default();
        let ranked = Engine::default().rank(&candidate(), catalog.roles());
        let rendered = ranking_markdown(&ranked);
        assert!(rendered.contains("# Role Ranking"));
        assert!(rendered.contains("| 1 |"));
    }

    fn unescaped_pipes(line: &str) -> usize {
        line.match_indices('|')
            .filter(|(index, _)| *index == 0 || &line[index - 1..*index] != "\\")
            .count()
    }

    #[test]
    fn table_cells_escape_pipes() {
        let role = RoleRequirementProfile::new("Cloud | Ops").require(&["AWS | GCP"]);
        let ranked = Engine::default().rank(&candidate(), &[role.clone()]);
        let rendered = ranking_markdown(&ranked);
        let row = rendered
            .lines()
            .find(|line| line.starts_with("| 1 |"))
            .expect("ranking should have a first row");
        assert!(row.contains("Cloud \\| Ops"));
        assert!(row.contains("Missing core skill: AWS \\| GCP"));
        assert_eq!(unescaped_pipes(row), 6);

        let outcomes = Engine::default().simulate_across(
            &candidate(),
            &[role],
            &WhatIf::AddSkill {
                name: "AWS".to_string(),
                level: SkillLevel::Beginner,
            },
        );
        let rendered = simulation_markdown(&outcomes);
        let row = rendered
            .lines()
            .find(|line| line.starts_with("| Cloud"))
            .expect("simulation should have a row");
        assert_eq!(unescaped_pipes(row), 6);
    }
}
