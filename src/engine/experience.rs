use crate::types::profile::{Experience, ExperienceKind};
use lazy_static::lazy_static;
use regex::Regex;

const JOB_BONUS: f32 = 0.1;
const FALLBACK_MONTHS: f64 = 1.0;

lazy_static! {
    static ref YEARS_RE: Regex =
        Regex::new(r"(?i)(\d+(?:\.\d+)?)[\s-]*(?:years?|yrs?)\b").expect("years pattern is valid");
    static ref MONTHS_RE: Regex =
        Regex::new(r"(?i)(\d+(?:\.\d+)?)[\s-]*(?:months?|mos?)\b").expect("months pattern is valid");
}

/// Duration recovered from free text such as "1 year 6 months".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationMonths {
    pub years: f64,
    pub months: f64,
    /// Neither a year nor a month quantity was found.
    pub fallback: bool,
}

impl DurationMonths {
    /// First `<N> year|yr` plus first `<N> month|mo`; unmatched text counts as one month.
    pub fn parse(raw: &str) -> Self {
        let years = first_quantity(&YEARS_RE, raw);
        let months = first_quantity(&MONTHS_RE, raw);

        if years.is_none() && months.is_none() {
            return Self {
                years: 0.0,
                months: FALLBACK_MONTHS,
                fallback: true,
            };
        }

        Self {
            years: years.unwrap_or(0.0),
            months: months.unwrap_or(0.0),
            fallback: false,
        }
    }

    pub fn total_months(&self) -> f64 {
        self.years * 12.0 + self.months
    }
}

fn first_quantity(pattern: &Regex, raw: &str) -> Option<f64> {
    pattern
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .and_then(|quantity| quantity.as_str().parse::<f64>().ok())
        .filter(|quantity| quantity.is_finite())
}

pub fn weighted_months(experiences: &[Experience]) -> f64 {
    experiences
        .iter()
        .map(|experience| {
            DurationMonths::parse(&experience.duration_raw).total_months()
                * f64::from(experience.kind.weight())
        })
        .sum()
}

pub fn experience_score(experiences: &[Experience], full_credit_months: f32) -> f32 {
    if experiences.is_empty() {
        return 0.0;
    }

    let horizon = f64::from(full_credit_months.max(f32::MIN_POSITIVE));
    let credit = (weighted_months(experiences) / horizon).min(1.0) as f32;
    let bonus = if has_kind(experiences, ExperienceKind::Job) {
        JOB_BONUS
    } else {
        0.0
    };

    (credit + bonus).clamp(0.0, 1.0)
}

pub fn has_kind(experiences: &[Experience], kind: ExperienceKind) -> bool {
    experiences.iter().any(|experience| experience.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_years_months_and_combinations() {
        assert!((DurationMonths::parse("6 months").total_months() - 6.0).abs() < 1e-9);
        assert!((DurationMonths::parse("2 years").total_months() - 24.0).abs() < 1e-9);
        assert!((DurationMonths::parse("1 year 6 months").total_months() - 18.0).abs() < 1e-9);
        assert!((DurationMonths::parse("3 yrs").total_months() - 36.0).abs() < 1e-9);
        assert!((DurationMonths::parse("4 mos").total_months() - 4.0).abs() < 1e-9);
        assert!((DurationMonths::parse("1.5 Years").total_months() - 18.0).abs() < 1e-9);
    }

    #[test]
    fn hyphenated_units_are_recognised() {
        let parsed = DurationMonths::parse("6-month internship");
        assert!(!parsed.fallback);
        assert!((parsed.total_months() - 6.0).abs() < 1e-9);
        assert!((DurationMonths::parse("2-year contract").total_months() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn unparseable_duration_defaults_to_one_month() {
        for raw in ["", "ongoing", "since forever"] {
            let parsed = DurationMonths::parse(raw);
            assert!(parsed.fallback);
            assert!((parsed.total_months() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn month_pattern_does_not_match_inside_words() {
        let parsed = DurationMonths::parse("2 moments");
        assert!(parsed.fallback);
    }

    #[test]
    fn no_experience_scores_zero() {
        assert!(experience_score(&[], 36.0).abs() < 1e-6);
    }

    #[test]
    fn two_year_job_scores_two_thirds_plus_job_bonus() {
        let experiences = vec![Experience::new(ExperienceKind::Job, "2 years")];
        let expected = 24.0 / 36.0 + 0.1;
        assert!((experience_score(&experiences, 36.0) - expected).abs() < 1e-5);
    }

    #[test]
    fn type_weights_scale_months() {
        let experiences = vec![
            Experience::new(ExperienceKind::Internship, "10 months"),
            Experience::new(ExperienceKind::Freelance, "10 months"),
            Experience::new(ExperienceKind::Project, "10 months"),
        ];
        assert!((weighted_months(&experiences) - 18.0).abs() < 1e-6);
        assert!((experience_score(&experiences, 36.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn enormous_durations_stay_bounded() {
        let experiences = vec![Experience::new(
            ExperienceKind::Job,
            "99999999999999999999999999999999 years",
        )];
        let score = experience_score(&experiences, 36.0);
        assert!((score - 1.0).abs() < 1e-6);
    }
}
