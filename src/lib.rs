pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;
pub mod resume;
pub mod roles;
pub mod types;

pub use engine::simulate::{SimulationOutcome, WhatIf};
pub use engine::{score, Engine};
pub use error::{Result, RoleFitError};
pub use roles::RoleCatalog;
pub use types::profile::CandidateProfile;
pub use types::role::RoleRequirementProfile;
pub use types::scoring::{ScoringResult, Status};
