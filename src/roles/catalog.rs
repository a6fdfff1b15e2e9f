use crate::types::role::{CompetitionLevel, RoleRequirementProfile};

/// Built-in role requirement profiles.
pub fn builtin_roles() -> Vec<RoleRequirementProfile> {
    vec![
        RoleRequirementProfile::new("SDE Intern")
            .require(&["Data Structures & Algorithms", "Java OR Python OR C++", "Git"])
            .prefer(&["SQL", "Linux"])
            .min_projects(2)
            .internship_preferred()
            .competition(CompetitionLevel::High)
            .market_demand(1.0),
        RoleRequirementProfile::new("Software Engineer")
            .require(&[
                "Data Structures & Algorithms",
                "Java OR Python OR C++ OR Go",
                "Git",
                "SQL",
            ])
            .prefer(&["Docker", "System Design"])
            .min_projects(2)
            .competition(CompetitionLevel::High)
            .market_demand(1.05),
        RoleRequirementProfile::new("Frontend Developer")
            .require(&["JavaScript OR TypeScript", "HTML", "CSS", "React OR Angular OR Vue"])
            .prefer(&["Tailwind", "Git"])
            .min_projects(2)
            .competition(CompetitionLevel::Medium)
            .market_demand(1.0),
        RoleRequirementProfile::new("Backend Developer")
            .require(&["Java OR Python OR Node.js OR Go", "SQL", "REST APIs"])
            .prefer(&["Docker", "Redis"])
            .min_projects(2)
            .competition(CompetitionLevel::Medium)
            .market_demand(1.05),
        RoleRequirementProfile::new("Full Stack Developer")
            .require(&[
                "JavaScript OR TypeScript",
                "React OR Angular OR Vue",
                "Node.js OR Python OR Java",
                "SQL OR MongoDB",
            ])
            .prefer(&["Docker", "Git"])
            .min_projects(3)
            .competition(CompetitionLevel::High)
            .market_demand(1.1),
        RoleRequirementProfile::new("Data Analyst")
            .require(&["Python", "SQL", "Statistics", "Excel"])
            .prefer(&["Tableau", "Power BI"])
            .min_projects(1)
            .competition(CompetitionLevel::Medium)
            .market_demand(0.9),
        RoleRequirementProfile::new("Data Scientist")
            .require(&["Python", "Statistics", "Machine Learning", "SQL"])
            .prefer(&["Pandas", "Deep Learning"])
            .min_projects(2)
            .competition(CompetitionLevel::High)
            .market_demand(1.1),
        RoleRequirementProfile::new("ML Engineer")
            .require(&[
                "Python",
                "Machine Learning",
                "TensorFlow OR PyTorch",
                "Data Structures & Algorithms",
            ])
            .prefer(&["Docker", "AWS"])
            .min_projects(2)
            .competition(CompetitionLevel::High)
            .market_demand(1.2),
        RoleRequirementProfile::new("DevOps Engineer")
            .require(&["Linux", "Docker", "Kubernetes", "AWS OR Azure OR GCP"])
            .prefer(&["Terraform", "CI/CD"])
            .min_projects(2)
            .competition(CompetitionLevel::Medium)
            .market_demand(1.1),
        RoleRequirementProfile::new("QA Engineer")
            .require(&["Manual Testing", "Selenium OR Cypress OR Playwright", "SQL"])
            .prefer(&["Java OR Python", "Jira"])
            .min_projects(1)
            .competition(CompetitionLevel::Low)
            .market_demand(0.85),
        RoleRequirementProfile::new("Business Analyst")
            .require(&["Excel", "SQL", "Communication", "Requirements Gathering"])
            .prefer(&["Power BI", "Jira"])
            .min_projects(1)
            .competition(CompetitionLevel::Medium)
            .market_demand(0.9),
        RoleRequirementProfile::new("Product Manager")
            .require(&["Communication", "Product Strategy", "Stakeholder Management"])
            .prefer(&["SQL", "Agile"])
            .min_projects(1)
            .competition(CompetitionLevel::High)
            .market_demand(1.0),
    ]
}
