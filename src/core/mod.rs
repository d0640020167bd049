// Core algorithm exports
pub mod filters;
pub mod ranker;
pub mod rating;
pub mod scoring;

pub use filters::{academic_level_bonus, matches_area, passes_project_gate};
pub use ranker::{RankResult, Ranker};
pub use rating::{aggregate_rating, round_to_tenth};
pub use scoring::calculate_match_score;
