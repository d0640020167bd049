use std::cmp::Ordering;

use crate::core::scoring::calculate_match_score;
use crate::models::{FacultyProfile, PreferenceQuery, ScoredCandidate};

/// Result of ranking a faculty set
#[derive(Debug)]
pub struct RankResult {
    pub candidates: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Orders advisors against a preference query
///
/// # Pipeline Stages
/// 1. Score every advisor
/// 2. Snapshot each profile into its candidate
/// 3. Stable sort, best score first
///
/// No advisor is dropped, whatever its score.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Rank advisors for a query
    ///
    /// # Arguments
    /// * `query` - The student's preferences
    /// * `faculty` - Advisors in catalog order; this order breaks ties
    ///
    /// # Returns
    /// RankResult with candidates in descending score order
    pub fn rank(&self, query: &PreferenceQuery, faculty: Vec<FacultyProfile>) -> RankResult {
        let total_candidates = faculty.len();

        // Profiles are moved in by value, so each candidate owns its snapshot
        let mut candidates: Vec<ScoredCandidate> = faculty
            .into_iter()
            .map(|profile| {
                let match_score = calculate_match_score(query, &profile);
                ScoredCandidate {
                    faculty: profile,
                    match_score,
                }
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order
        candidates.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });

        RankResult {
            candidates,
            total_candidates,
        }
    }
}
