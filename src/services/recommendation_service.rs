use chrono::Utc;
use std::sync::Arc;

use crate::core::Ranker;
use crate::error::Result;
use crate::models::{
    AssignedStudent, FacultyId, FacultyWorkload, Recommendation, RecommendationDraft,
    RequesterId, StatsResponse, SubmitRecommendationRequest,
};
use crate::services::{FacultyCatalog, FeedbackStore, RecommendationStore};

/// Ranks the catalog against preference queries and keeps the snapshots
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<dyn FacultyCatalog>,
    recommendations: Arc<dyn RecommendationStore>,
    feedback: Arc<dyn FeedbackStore>,
    ranker: Ranker,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<dyn FacultyCatalog>,
        recommendations: Arc<dyn RecommendationStore>,
        feedback: Arc<dyn FeedbackStore>,
    ) -> Self {
        Self {
            catalog,
            recommendations,
            feedback,
            ranker: Ranker::new(),
        }
    }

    /// Rank every advisor for the query and store the result
    ///
    /// Validation runs before anything is read or written, so a rejected
    /// request leaves the store and its id counter untouched.
    pub async fn submit(&self, request: SubmitRecommendationRequest) -> Result<Arc<Recommendation>> {
        let (requester_id, preferences) = request.into_query()?;

        let faculty = self.catalog.list_all().await?;
        let result = self.ranker.rank(&preferences, faculty);

        let recommendation = self
            .recommendations
            .append(RecommendationDraft {
                requester_id,
                preferences,
                results: result.candidates,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            "Recommendation {} for student {}: {} {} in {} ranked over {} advisors",
            recommendation.id,
            requester_id,
            recommendation.preferences.project_type,
            recommendation.preferences.academic_level,
            recommendation.preferences.area_of_interest,
            result.total_candidates
        );

        Ok(recommendation)
    }

    /// Stored recommendations for a requester; empty when there are none
    pub async fn list_by_requester(&self, requester_id: RequesterId) -> Result<Vec<Arc<Recommendation>>> {
        self.recommendations.list_by_requester(requester_id).await
    }

    /// Students whose recommendations included the given advisor
    pub async fn students_for_faculty(&self, faculty_id: FacultyId) -> Result<Vec<AssignedStudent>> {
        Ok(self
            .recommendations
            .list_all()
            .await?
            .iter()
            .filter(|r| r.includes_faculty(faculty_id))
            .map(|r| AssignedStudent {
                student_id: r.requester_id,
                preferences: r.preferences.clone(),
                recommendation_id: r.id,
            })
            .collect())
    }

    /// Totals and per-advisor workload over all stored recommendations
    pub async fn stats(&self) -> Result<StatsResponse> {
        let faculty = self.catalog.list_all().await?;
        let recommendations = self.recommendations.list_all().await?;
        let total_feedback = self.feedback.count().await?;

        let faculty_workload = faculty
            .iter()
            .map(|f| FacultyWorkload {
                faculty_id: f.id,
                name: f.name.clone(),
                recommendation_count: recommendations
                    .iter()
                    .filter(|r| r.includes_faculty(f.id))
                    .count(),
            })
            .collect();

        Ok(StatsResponse {
            total_faculty: faculty.len(),
            total_recommendations: recommendations.len(),
            total_feedback,
            faculty_workload,
        })
    }
}
