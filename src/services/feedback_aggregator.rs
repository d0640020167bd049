use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::aggregate_rating;
use crate::error::{MatchError, Result};
use crate::models::{FacultyId, FeedbackEntry, SubmitFeedbackRequest};
use crate::services::{FacultyCatalog, FeedbackStore};

/// Outcome of recording one feedback entry
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackOutcome {
    pub entry: FeedbackEntry,
    /// New advisor rating; `None` when the catalog has no such advisor
    pub rating: Option<f64>,
}

/// Records feedback and re-derives advisor ratings from the full history
///
/// Recomputes for the same advisor are serialized through a per-advisor
/// lock; different advisors proceed independently.
#[derive(Clone)]
pub struct FeedbackAggregator {
    catalog: Arc<dyn FacultyCatalog>,
    feedback: Arc<dyn FeedbackStore>,
    locks: Arc<DashMap<FacultyId, Arc<Mutex<()>>>>,
}

impl FeedbackAggregator {
    pub fn new(catalog: Arc<dyn FacultyCatalog>, feedback: Arc<dyn FeedbackStore>) -> Self {
        Self {
            catalog,
            feedback,
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Append a feedback entry and update the advisor's rating
    ///
    /// Feedback for an unknown advisor is still stored; the catalog is left
    /// alone and the outcome carries no rating.
    pub async fn record(&self, request: SubmitFeedbackRequest) -> Result<FeedbackOutcome> {
        let draft = request.into_draft(Utc::now())?;
        let faculty_id = draft.faculty_id;

        let entry = self.feedback.append(draft).await?;
        let rating = self.recompute(faculty_id).await?;

        match rating {
            Some(rating) => tracing::info!(
                "Feedback {} from student {} for faculty {}: rating now {}",
                entry.id,
                entry.requester_id,
                faculty_id,
                rating
            ),
            None => tracing::warn!(
                "Feedback {} targets unknown faculty {}; rating not updated",
                entry.id,
                faculty_id
            ),
        }

        Ok(FeedbackOutcome { entry, rating })
    }

    /// Re-derive an advisor's rating from every stored feedback entry
    ///
    /// Returns `None` when the advisor is unknown or has no feedback.
    /// Repeated calls without new feedback yield the same value.
    pub async fn recompute(&self, faculty_id: FacultyId) -> Result<Option<f64>> {
        let lock = self.lock_for(faculty_id);
        let _guard = lock.lock().await;

        let history = self.feedback.list_for_faculty(faculty_id).await?;
        let Some(rating) = aggregate_rating(history.iter().map(|f| f.rating)) else {
            return Ok(None);
        };

        match self.catalog.update_rating(faculty_id, rating).await {
            Ok(()) => Ok(Some(rating)),
            Err(MatchError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn lock_for(&self, faculty_id: FacultyId) -> Arc<Mutex<()>> {
        self.locks
            .entry(faculty_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, FacultyProfile};
    use crate::services::{InMemoryFacultyCatalog, InMemoryFeedbackStore};

    fn create_aggregator() -> (FeedbackAggregator, Arc<InMemoryFacultyCatalog>, Arc<InMemoryFeedbackStore>) {
        let catalog = Arc::new(InMemoryFacultyCatalog::with_profiles(vec![FacultyProfile {
            id: 1,
            name: "Dr. Alice AI".to_string(),
            expertise_areas: vec!["AI".to_string()],
            experience_years: 10,
            rating: 4.7,
            availability: Availability::Available,
        }]));
        let feedback = Arc::new(InMemoryFeedbackStore::new());
        let aggregator = FeedbackAggregator::new(catalog.clone(), feedback.clone());
        (aggregator, catalog, feedback)
    }

    fn feedback(faculty_id: u64, rating: f64) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            student_id: Some(3),
            faculty_id: Some(faculty_id),
            rating: Some(rating),
            comment: None,
        }
    }

    #[tokio::test]
    async fn test_rating_is_mean_of_feedback() {
        let (aggregator, catalog, _) = create_aggregator();

        let first = aggregator.record(feedback(1, 4.0)).await.unwrap();
        assert_eq!(first.rating, Some(4.0));

        let second = aggregator.record(feedback(1, 5.0)).await.unwrap();
        assert_eq!(second.rating, Some(4.5));
        assert_eq!(catalog.get_by_id(1).await.unwrap().rating, 4.5);
    }

    #[tokio::test]
    async fn test_unknown_faculty_still_stores_feedback() {
        let (aggregator, catalog, store) = create_aggregator();

        let outcome = aggregator.record(feedback(42, 5.0)).await.unwrap();

        assert_eq!(outcome.rating, None);
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(catalog.get_by_id(1).await.unwrap().rating, 4.7);
    }

    #[tokio::test]
    async fn test_invalid_feedback_is_not_stored() {
        let (aggregator, _, store) = create_aggregator();

        let mut req = feedback(1, 5.0);
        req.rating = None;

        assert!(matches!(
            aggregator.record(req).await,
            Err(MatchError::InvalidInput { .. })
        ));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_recompute_is_stable() {
        let (aggregator, _, _) = create_aggregator();
        aggregator.record(feedback(1, 3.0)).await.unwrap();
        aggregator.record(feedback(1, 4.0)).await.unwrap();

        let once = aggregator.recompute(1).await.unwrap();
        let twice = aggregator.recompute(1).await.unwrap();

        assert_eq!(once, Some(3.5));
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_recompute_without_feedback_leaves_rating() {
        let (aggregator, catalog, _) = create_aggregator();

        assert_eq!(aggregator.recompute(1).await.unwrap(), None);
        assert_eq!(catalog.get_by_id(1).await.unwrap().rating, 4.7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_feedback_for_same_faculty() {
        let (aggregator, catalog, store) = create_aggregator();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let aggregator = aggregator.clone();
                let rating = if i % 2 == 0 { 4.0 } else { 5.0 };
                tokio::spawn(async move { aggregator.record(feedback(1, rating)).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.count().await.unwrap(), 20);
        assert_eq!(catalog.get_by_id(1).await.unwrap().rating, 4.5);
    }
}
