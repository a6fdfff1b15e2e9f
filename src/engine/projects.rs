use crate::types::profile::{Complexity, Project};

const PARTIAL_CREDIT_CAP: f32 = 0.8;
const HIGH_COMPLEXITY_BONUS: f32 = 0.1;

pub fn project_score(projects: &[Project], min_projects: u32) -> f32 {
    if min_projects == 0 {
        return 1.0;
    }

    let count = projects.len();
    let base = if count >= min_projects as usize {
        1.0
    } else {
        count as f32 / min_projects as f32 * PARTIAL_CREDIT_CAP
    };
    let bonus = high_complexity_count(projects) as f32 * HIGH_COMPLEXITY_BONUS;

    (base + bonus).clamp(0.0, 1.0)
}

pub fn high_complexity_count(projects: &[Project]) -> usize {
    projects
        .iter()
        .filter(|project| project.complexity == Complexity::High)
        .count()
}
