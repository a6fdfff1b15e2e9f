pub mod catalog;
pub mod fallback;

use crate::types::config::RoleFitConfig;
use crate::types::role::RoleRequirementProfile;

/// Lookup table of role requirement profiles keyed by case-insensitive name.
///
/// Configured roles shadow built-in roles of the same name. Names that match
/// neither are synthesized by `fallback::synthesize`, so `resolve` never fails.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleRequirementProfile>,
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self {
            roles: catalog::builtin_roles(),
        }
    }
}

impl RoleCatalog {
    pub fn from_config(config: Option<&RoleFitConfig>) -> Self {
        let mut roles = config.map(RoleFitConfig::role_profiles).unwrap_or_default();
        for builtin in catalog::builtin_roles() {
            if !roles.iter().any(|role| same_name(&role.name, &builtin.name)) {
                roles.push(builtin);
            } else {
                tracing::info!(role = %builtin.name, "configured role overrides built-in profile");
            }
        }
        Self { roles }
    }

    pub fn get(&self, name: &str) -> Option<&RoleRequirementProfile> {
        self.roles.iter().find(|role| same_name(&role.name, name))
    }

    pub fn resolve(&self, name: &str) -> RoleRequirementProfile {
        match self.get(name) {
            Some(role) => role.clone(),
            None => {
                let synthesized = fallback::synthesize(name);
                tracing::info!(
                    role = %synthesized.name,
                    technical = fallback::is_technical(name),
                    "unknown role, synthesized default requirement profile"
                );
                synthesized
            }
        }
    }

    pub fn roles(&self) -> &[RoleRequirementProfile] {
        &self.roles
    }
}

fn same_name(left: &str, right: &str) -> bool {
    left.trim().eq_ignore_ascii_case(right.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::role::RoleSource;

    #[test]
    fn resolves_known_roles_case_insensitively() {
        let catalog = RoleCatalog::default();
        let role = catalog.resolve("data analyst");
        assert_eq!(role.name, "Data Analyst");
        assert_eq!(role.source, RoleSource::Catalog);
    }

    #[test]
    fn unknown_role_is_synthesized_not_an_error() {
        let catalog = RoleCatalog::default();
        let role = catalog.resolve("Quantum Software Engineer");
        assert_eq!(role.source, RoleSource::Synthesized);
        assert_eq!(role.min_projects, 2);

        let soft = catalog.resolve("Office Manager");
        assert_eq!(soft.source, RoleSource::Synthesized);
        assert_eq!(soft.min_projects, 1);
    }

    #[test]
    fn configured_roles_shadow_builtins() {
        let config: RoleFitConfig = toml::from_str(
            r#"
[roles."data analyst"]
required_skills = ["SQL"]
min_projects = 0

[roles."Cloud Engineer"]
required_skills = ["AWS OR Azure"]
"#,
        )
        .expect("config should parse");
        let catalog = RoleCatalog::from_config(Some(&config));

        let analyst = catalog.resolve("Data Analyst");
        assert_eq!(analyst.source, RoleSource::Configured);
        assert_eq!(analyst.required_skills.len(), 1);
        assert_eq!(
            catalog
                .roles()
                .iter()
                .filter(|role| role.name.eq_ignore_ascii_case("data analyst"))
                .count(),
            1
        );
        assert_eq!(catalog.resolve("cloud engineer").source, RoleSource::Configured);
        assert_eq!(catalog.resolve("SDE Intern").source, RoleSource::Catalog);
    }
}
