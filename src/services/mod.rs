// Service exports
pub mod catalog;
pub mod feedback_aggregator;
pub mod feedback_store;
pub mod recommendation_service;
pub mod recommendation_store;

pub use catalog::{FacultyCatalog, InMemoryFacultyCatalog};
pub use feedback_aggregator::{FeedbackAggregator, FeedbackOutcome};
pub use feedback_store::{FeedbackStore, InMemoryFeedbackStore};
pub use recommendation_service::RecommendationService;
pub use recommendation_store::{InMemoryRecommendationStore, RecommendationStore};
