use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchError;

pub type FacultyId = u64;
pub type RequesterId = u64;
pub type RecommendationId = u64;
pub type FeedbackId = u64;

/// Advisor profile held by the faculty catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyProfile {
    pub id: FacultyId,
    pub name: String,
    #[serde(rename = "expertiseAreas", default)]
    pub expertise_areas: Vec<String>,
    #[serde(rename = "experienceYears", default)]
    pub experience_years: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub availability: Availability,
}

impl FacultyProfile {
    /// Case-sensitive membership test against the expertise tags
    pub fn has_expertise(&self, area: &str) -> bool {
        self.expertise_areas.iter().any(|tag| tag == area)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Available,
    Limited,
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    Mini,
    Final,
    Research,
}

impl ProjectType {
    /// Minimum years of experience an advisor needs for this kind of project
    pub fn min_experience_years(self) -> u32 {
        match self {
            ProjectType::Research => 8,
            ProjectType::Final => 5,
            ProjectType::Mini => 2,
        }
    }
}

impl FromStr for ProjectType {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mini" => Ok(ProjectType::Mini),
            "Final" => Ok(ProjectType::Final),
            "Research" => Ok(ProjectType::Research),
            other => Err(MatchError::invalid(
                "projectType",
                format!("unknown project type '{}', expected one of: Mini, Final, Research", other),
            )),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectType::Mini => "Mini",
            ProjectType::Final => "Final",
            ProjectType::Research => "Research",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicLevel {
    UG,
    PG,
}

impl FromStr for AcademicLevel {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UG" => Ok(AcademicLevel::UG),
            "PG" => Ok(AcademicLevel::PG),
            other => Err(MatchError::invalid(
                "academicLevel",
                format!("unknown academic level '{}', expected one of: UG, PG", other),
            )),
        }
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcademicLevel::UG => f.write_str("UG"),
            AcademicLevel::PG => f.write_str("PG"),
        }
    }
}

impl FromStr for Availability {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Availability::Available),
            "Limited" => Ok(Availability::Limited),
            "Busy" => Ok(Availability::Busy),
            other => Err(MatchError::invalid(
                "availability",
                format!("unknown availability '{}', expected one of: Available, Limited, Busy", other),
            )),
        }
    }
}

/// A student's stated project preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceQuery {
    #[serde(rename = "areaOfInterest")]
    pub area_of_interest: String,
    #[serde(rename = "projectType")]
    pub project_type: ProjectType,
    #[serde(rename = "academicLevel")]
    pub academic_level: AcademicLevel,
}

/// Faculty snapshot paired with the score it had when ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub faculty: FacultyProfile,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// Ranked, timestamped result of one preference query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    #[serde(rename = "studentId")]
    pub requester_id: RequesterId,
    pub preferences: PreferenceQuery,
    pub results: Vec<ScoredCandidate>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn includes_faculty(&self, faculty_id: FacultyId) -> bool {
        self.results.iter().any(|c| c.faculty.id == faculty_id)
    }
}

/// Recommendation contents before the store assigns an identifier
#[derive(Debug, Clone)]
pub struct RecommendationDraft {
    pub requester_id: RequesterId,
    pub preferences: PreferenceQuery,
    pub results: Vec<ScoredCandidate>,
    pub created_at: DateTime<Utc>,
}

/// Single feedback submission about an advisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: FeedbackId,
    #[serde(rename = "studentId")]
    pub requester_id: RequesterId,
    #[serde(rename = "facultyId")]
    pub faculty_id: FacultyId,
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Feedback contents before the store assigns an identifier
#[derive(Debug, Clone)]
pub struct FeedbackDraft {
    pub requester_id: RequesterId,
    pub faculty_id: FacultyId,
    pub rating: f64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new catalog entry; missing values fall back to catalog defaults
#[derive(Debug, Clone, Default)]
pub struct NewFaculty {
    pub name: String,
    pub expertise_areas: Option<Vec<String>>,
    pub experience_years: Option<u32>,
    pub rating: Option<f64>,
    pub availability: Option<Availability>,
}

/// Partial update of catalog fields; rating only changes through feedback or an override
#[derive(Debug, Clone, Default)]
pub struct FacultyUpdate {
    pub name: Option<String>,
    pub expertise_areas: Option<Vec<String>>,
    pub experience_years: Option<u32>,
    pub availability: Option<Availability>,
}

impl FacultyUpdate {
    pub fn apply(self, profile: &mut FacultyProfile) {
        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            profile.name = name;
        }
        if let Some(areas) = self.expertise_areas {
            profile.expertise_areas = areas;
        }
        if let Some(years) = self.experience_years {
            profile.experience_years = years;
        }
        if let Some(availability) = self.availability {
            profile.availability = availability;
        }
    }
}
