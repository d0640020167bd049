use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{FacultyId, FeedbackDraft, FeedbackEntry};

/// Append-only storage for feedback entries
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Assign the next identifier and append; duplicates are kept
    async fn append(&self, draft: FeedbackDraft) -> Result<FeedbackEntry>;

    /// All feedback for one advisor, oldest first
    async fn list_for_faculty(&self, faculty_id: FacultyId) -> Result<Vec<FeedbackEntry>>;

    async fn count(&self) -> Result<usize>;
}

#[derive(Default)]
struct FeedbackLog {
    entries: Vec<FeedbackEntry>,
    // positions into `entries`, per faculty id
    by_faculty: HashMap<FacultyId, Vec<usize>>,
}

/// In-memory feedback store indexed by faculty id
#[derive(Default)]
pub struct InMemoryFeedbackStore {
    log: RwLock<FeedbackLog>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn append(&self, draft: FeedbackDraft) -> Result<FeedbackEntry> {
        let mut log = self.log.write().await;
        let position = log.entries.len();

        let entry = FeedbackEntry {
            id: position as u64 + 1,
            requester_id: draft.requester_id,
            faculty_id: draft.faculty_id,
            rating: draft.rating,
            comment: draft.comment,
            created_at: draft.created_at,
        };

        log.entries.push(entry.clone());
        log.by_faculty
            .entry(entry.faculty_id)
            .or_default()
            .push(position);

        Ok(entry)
    }

    async fn list_for_faculty(&self, faculty_id: FacultyId) -> Result<Vec<FeedbackEntry>> {
        let log = self.log.read().await;
        Ok(log
            .by_faculty
            .get(&faculty_id)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&i| log.entries[i].clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.log.read().await.entries.len())
    }
}
