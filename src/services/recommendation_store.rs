use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{Recommendation, RecommendationDraft, RequesterId};

/// Append-only storage for recommendation snapshots
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    /// Assign the next identifier and store the snapshot
    ///
    /// Identifier assignment and insertion are one atomic step: ids are
    /// unique, gap-free and never reused.
    async fn append(&self, draft: RecommendationDraft) -> Result<Arc<Recommendation>>;

    /// Recommendations for one requester, in stored order
    async fn list_by_requester(&self, requester_id: RequesterId) -> Result<Vec<Arc<Recommendation>>>;

    /// Every stored recommendation, in stored order
    async fn list_all(&self) -> Result<Vec<Arc<Recommendation>>>;
}

/// In-memory recommendation store
///
/// Entries live in a single vector in id order, so listing by requester
/// preserves insertion order without any reordering.
#[derive(Default)]
pub struct InMemoryRecommendationStore {
    entries: RwLock<Vec<Arc<Recommendation>>>,
}

impl InMemoryRecommendationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl RecommendationStore for InMemoryRecommendationStore {
    async fn append(&self, draft: RecommendationDraft) -> Result<Arc<Recommendation>> {
        let mut entries = self.entries.write().await;
        let id = entries.len() as u64 + 1;

        let recommendation = Arc::new(Recommendation {
            id,
            requester_id: draft.requester_id,
            preferences: draft.preferences,
            results: draft.results,
            created_at: draft.created_at,
        });

        entries.push(Arc::clone(&recommendation));
        tracing::debug!(
            "Stored recommendation {} for requester {}",
            id,
            recommendation.requester_id
        );

        Ok(recommendation)
    }

    async fn list_by_requester(&self, requester_id: RequesterId) -> Result<Vec<Arc<Recommendation>>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|r| r.requester_id == requester_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Arc<Recommendation>>> {
        Ok(self.entries.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcademicLevel, PreferenceQuery, ProjectType};
    use chrono::Utc;

    fn draft(requester_id: RequesterId) -> RecommendationDraft {
        RecommendationDraft {
            requester_id,
            preferences: PreferenceQuery {
                area_of_interest: "AI".to_string(),
                project_type: ProjectType::Mini,
                academic_level: AcademicLevel::UG,
            },
            results: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = InMemoryRecommendationStore::new();

        let first = store.append(draft(1)).await.unwrap();
        let second = store.append(draft(2)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_by_requester_keeps_order() {
        let store = InMemoryRecommendationStore::new();
        store.append(draft(7)).await.unwrap();
        store.append(draft(8)).await.unwrap();
        store.append(draft(7)).await.unwrap();

        let ids: Vec<u64> = store
            .list_by_requester(7)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, vec![1, 3]);
        assert!(store.list_by_requester(99).await.unwrap().is_empty());
    }
}
