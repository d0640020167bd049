use crate::core::filters::{
    academic_level_bonus, matches_area, passes_project_gate, AREA_MATCH_POINTS,
    PROJECT_GATE_POINTS,
};
use crate::models::{FacultyProfile, PreferenceQuery};

/// Upper bound of a match score
pub const MAX_SCORE: f64 = 100.0;

/// Calculate a match score (0-100) for an advisor against a preference query
///
/// Scoring formula:
/// score = min(100,
///     60 * area_match +            # query area is one of the advisor's tags
///     20 * project_gate +          # experience meets the project type minimum
///     level_bonus +                # PG: 10 with >= 5 years else 0; UG: 5
///     rating                       # current aggregated rating, unmodified
/// )
///
/// Only the upper bound is clamped; a negative rating flows through.
pub fn calculate_match_score(query: &PreferenceQuery, faculty: &FacultyProfile) -> f64 {
    let mut score = 0.0;

    if matches_area(query, faculty) {
        score += AREA_MATCH_POINTS;
    }

    if passes_project_gate(query.project_type, faculty.experience_years) {
        score += PROJECT_GATE_POINTS;
    }

    score += academic_level_bonus(query.academic_level, faculty.experience_years);
    score += faculty.rating;

    score.min(MAX_SCORE)
}
