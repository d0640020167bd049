// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AcademicLevel, Availability, FacultyId, FacultyProfile, FacultyUpdate, FeedbackDraft,
    FeedbackEntry, FeedbackId, NewFaculty, PreferenceQuery, ProjectType, Recommendation,
    RecommendationDraft, RecommendationId, RequesterId, ScoredCandidate,
};
pub use requests::{
    AdminUpdateFacultyRequest, CreateFacultyRequest, OverrideRatingRequest,
    SubmitFeedbackRequest, SubmitRecommendationRequest, UpdateFacultyRequest,
};
pub use responses::{
    AssignedStudent, ErrorResponse, FacultyWorkload, HealthResponse, StatsResponse,
    SubmitFeedbackResponse,
};
