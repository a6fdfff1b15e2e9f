mod cli;

use clap::Parser;
use rolefit::config;
use rolefit::engine::simulate::WhatIf;
use rolefit::engine::Engine;
use rolefit::error::RoleFitError;
use rolefit::input::load_candidate_with_resume;
use rolefit::report::{self, OutputFormat};
use rolefit::roles::RoleCatalog;
use rolefit::types::role::RoleSource;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn warn_synthesized(quiet: bool, role: &str) {
    if !quiet {
        eprintln!("warning: unknown role '{role}', scored against a synthesized default profile");
    }
}

fn run() -> Result<i32, RoleFitError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config(&cli.config_dir)?;
    let engine = Engine::from_config(loaded.as_ref());
    let catalog = RoleCatalog::from_config(loaded.as_ref());

    match cli.command {
        cli::Commands::Score(cmd) => {
            let candidate = load_candidate_with_resume(&cmd.candidate, cmd.resume.as_deref())?;
            let role = catalog.resolve(&cmd.role);
            let result = engine.score(&candidate, &role);
            println!("{}", report::render_score(&result, output_format(&cmd.format))?);

            if result.role_source == RoleSource::Synthesized {
                warn_synthesized(cli.quiet, &result.role);
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Rank(cmd) => {
            let candidate = load_candidate_with_resume(&cmd.candidate, cmd.resume.as_deref())?;
            let mut ranked = engine.rank(&candidate, catalog.roles());
            if let Some(top) = cmd.top {
                ranked.truncate(top);
            }
            println!(
                "{}",
                report::render_ranking(&ranked, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Simulate(cmd) => {
            let candidate = load_candidate_with_resume(&cmd.candidate, cmd.resume.as_deref())?;
            let action = match (&cmd.add_skill, &cmd.add_project, &cmd.add_experience) {
                (Some(skill), _, _) => WhatIf::parse_skill(skill)?,
                (_, Some(project), _) => match &cmd.tech {
                    Some(tech) => WhatIf::parse_project(&format!("{project}:{tech}"))?,
                    None => WhatIf::parse_project(project)?,
                },
                (_, _, Some(experience)) => WhatIf::parse_experience(experience)?,
                (None, None, None) => {
                    return Err(RoleFitError::InvalidAction(
                        "one of --add-skill, --add-project or --add-experience is required"
                            .to_string(),
                    ))
                }
            };

            let roles = cmd
                .roles
                .iter()
                .map(|name| catalog.resolve(name))
                .collect::<Vec<_>>();
            let outcomes = engine.simulate_across(&candidate, &roles, &action);
            println!(
                "{}",
                report::render_simulation(&outcomes, output_format(&cmd.format))?
            );

            let synthesized = roles
                .iter()
                .filter(|role| role.source == RoleSource::Synthesized)
                .collect::<Vec<_>>();
            for role in &synthesized {
                warn_synthesized(cli.quiet, &role.name);
            }
            if synthesized.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Roles => {
            for role in catalog.roles() {
                let source = match role.source {
                    RoleSource::Catalog => "built-in",
                    RoleSource::Configured => "configured",
                    RoleSource::Synthesized => "synthesized",
                };
                println!(
                    "{} [{}] min_projects={} required={}",
                    role.name,
                    source,
                    role.min_projects,
                    role.required_skills
                        .iter()
                        .map(|requirement| requirement.text.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check => match loaded {
            Some(cfg) => {
                println!(
                    "config ok: {} configured role(s), strong threshold {}",
                    cfg.roles.len(),
                    cfg.thresholds().strong_threshold
                );
                Ok(exit_code::SUCCESS)
            }
            None => {
                if !cli.quiet {
                    eprintln!(
                        "warning: no {} found in {}",
                        config::DEFAULT_CONFIG_FILE,
                        cli.config_dir.display()
                    );
                }
                Ok(exit_code::WARNINGS)
            }
        },
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
