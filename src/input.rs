use crate::error::{Result, RoleFitError};
use crate::resume::ResumeParse;
use crate::types::profile::CandidateProfile;
use std::path::Path;

pub fn load_candidate(path: &Path) -> Result<CandidateProfile> {
    if !path.exists() {
        return Err(RoleFitError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| RoleFitError::InvalidInput {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Candidate profile, merged with resume parser output when given.
pub fn load_candidate_with_resume(
    candidate: &Path,
    resume: Option<&Path>,
) -> Result<CandidateProfile> {
    let profile = load_candidate(candidate)?;
    match resume {
        Some(path) => Ok(ResumeParse::load(path)?.apply_to(&profile)),
        None => Ok(profile),
    }
}
