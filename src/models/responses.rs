use serde::{Deserialize, Serialize};

use crate::models::domain::{FacultyId, PreferenceQuery, RecommendationId, RequesterId};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Feedback submission response
///
/// `rating` is absent when the feedback targets a faculty id the catalog
/// does not know.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFeedbackResponse {
    pub message: String,
    #[serde(rename = "feedbackId")]
    pub feedback_id: u64,
    pub rating: Option<f64>,
}

/// A student who was recommended a given advisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedStudent {
    #[serde(rename = "studentId")]
    pub student_id: RequesterId,
    pub preferences: PreferenceQuery,
    #[serde(rename = "recommendationId")]
    pub recommendation_id: RecommendationId,
}

/// Number of stored recommendations that include one advisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyWorkload {
    #[serde(rename = "facultyId")]
    pub faculty_id: FacultyId,
    pub name: String,
    #[serde(rename = "recommendationCount")]
    pub recommendation_count: usize,
}

/// Aggregate statistics for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "totalFaculty")]
    pub total_faculty: usize,
    #[serde(rename = "totalRecommendations")]
    pub total_recommendations: usize,
    #[serde(rename = "totalFeedback")]
    pub total_feedback: usize,
    #[serde(rename = "facultyWorkload")]
    pub faculty_workload: Vec<FacultyWorkload>,
}
