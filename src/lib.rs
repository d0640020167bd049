//! Faculty Match - preference-based advisor matching service
//!
//! This library ranks faculty advisors against a student's project
//! preferences, keeps immutable recommendation snapshots, and derives each
//! advisor's rating from accumulated student feedback.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{aggregate_rating, calculate_match_score, Ranker};
pub use error::{MatchError, Result};
pub use models::{FacultyProfile, FeedbackEntry, PreferenceQuery, Recommendation, ScoredCandidate};
pub use services::{FeedbackAggregator, RecommendationService};
