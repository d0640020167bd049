use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{MatchError, Result};
use crate::models::domain::{
    AcademicLevel, Availability, FacultyUpdate, FeedbackDraft, NewFaculty, PreferenceQuery,
    ProjectType, RequesterId,
};
use chrono::{DateTime, Utc};

/// Request to rank faculty against a student's preferences
///
/// Every field is optional on the wire so that missing values surface as
/// `InvalidInput` naming the field rather than as a JSON decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmitRecommendationRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "studentId")]
    pub student_id: Option<u64>,
    #[validate(length(min = 1))]
    #[serde(rename = "areaOfInterest")]
    pub area_of_interest: Option<String>,
    #[serde(rename = "projectType")]
    pub project_type: Option<String>,
    #[serde(rename = "academicLevel")]
    pub academic_level: Option<String>,
}

impl SubmitRecommendationRequest {
    /// Validate and convert into the requester id and an immutable query
    pub fn into_query(self) -> Result<(RequesterId, PreferenceQuery)> {
        self.validate()?;

        match (
            self.student_id,
            self.area_of_interest,
            self.project_type,
            self.academic_level,
        ) {
            (Some(student_id), Some(area), Some(project_type), Some(level)) => {
                let query = PreferenceQuery {
                    area_of_interest: area,
                    project_type: project_type.parse::<ProjectType>()?,
                    academic_level: level.parse::<AcademicLevel>()?,
                };
                Ok((student_id, query))
            }
            (student_id, area, project_type, level) => Err(missing_fields(&[
                (student_id.is_none(), "studentId"),
                (area.is_none(), "areaOfInterest"),
                (project_type.is_none(), "projectType"),
                (level.is_none(), "academicLevel"),
            ])),
        }
    }
}

/// Build an `InvalidInput` naming every absent field
fn missing_fields(checks: &[(bool, &str)]) -> MatchError {
    MatchError::InvalidInput {
        fields: checks
            .iter()
            .filter(|(missing, _)| *missing)
            .map(|(_, field)| field.to_string())
            .collect(),
        message: "required field missing".to_string(),
    }
}

/// Request to submit feedback about an advisor
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "studentId")]
    pub student_id: Option<u64>,
    #[validate(range(min = 1))]
    #[serde(rename = "facultyId")]
    pub faculty_id: Option<u64>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl SubmitFeedbackRequest {
    /// Validate presence of the required fields; the rating range is taken as given
    pub fn into_draft(self, created_at: DateTime<Utc>) -> Result<FeedbackDraft> {
        self.validate()?;

        let (Some(student_id), Some(faculty_id), Some(rating)) =
            (self.student_id, self.faculty_id, self.rating)
        else {
            return Err(missing_fields(&[
                (self.student_id.is_none(), "studentId"),
                (self.faculty_id.is_none(), "facultyId"),
                (self.rating.is_none(), "rating"),
            ]));
        };

        if !rating.is_finite() {
            return Err(MatchError::invalid("rating", "rating must be a finite number"));
        }

        Ok(FeedbackDraft {
            requester_id: student_id,
            faculty_id,
            rating,
            comment: self.comment.unwrap_or_default(),
            created_at,
        })
    }
}

/// Faculty self-service update: expertise and availability only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFacultyRequest {
    #[serde(rename = "expertiseAreas", default)]
    pub expertise_areas: Option<Vec<String>>,
    #[serde(default)]
    pub availability: Option<Availability>,
}

impl From<UpdateFacultyRequest> for FacultyUpdate {
    fn from(req: UpdateFacultyRequest) -> Self {
        FacultyUpdate {
            expertise_areas: req.expertise_areas,
            availability: req.availability,
            ..Default::default()
        }
    }
}

/// Administrative update of any catalog field except rating
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminUpdateFacultyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "expertiseAreas", default)]
    pub expertise_areas: Option<Vec<String>>,
    #[serde(rename = "experienceYears", default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub availability: Option<Availability>,
}

impl From<AdminUpdateFacultyRequest> for FacultyUpdate {
    fn from(req: AdminUpdateFacultyRequest) -> Self {
        FacultyUpdate {
            name: req.name,
            expertise_areas: req.expertise_areas,
            experience_years: req.experience_years,
            availability: req.availability,
        }
    }
}

/// Request to add an advisor to the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateFacultyRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(rename = "expertiseAreas", default)]
    pub expertise_areas: Option<Vec<String>>,
    #[serde(rename = "experienceYears", default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub availability: Option<Availability>,
}

impl CreateFacultyRequest {
    pub fn into_new_faculty(self) -> Result<NewFaculty> {
        self.validate()?;

        let name = self
            .name
            .ok_or_else(|| missing_fields(&[(true, "name")]))?;

        Ok(NewFaculty {
            name,
            expertise_areas: self.expertise_areas,
            experience_years: self.experience_years,
            rating: None,
            availability: self.availability,
        })
    }
}

/// Administrative rating override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideRatingRequest {
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitRecommendationRequest {
        SubmitRecommendationRequest {
            student_id: Some(2),
            area_of_interest: Some("AI".to_string()),
            project_type: Some("Research".to_string()),
            academic_level: Some("PG".to_string()),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let (student, query) = valid_request().into_query().unwrap();
        assert_eq!(student, 2);
        assert_eq!(query.project_type, ProjectType::Research);
        assert_eq!(query.academic_level, AcademicLevel::PG);
    }

    #[test]
    fn test_missing_area_is_reported() {
        let mut req = valid_request();
        req.area_of_interest = None;

        match req.into_query() {
            Err(MatchError::InvalidInput { fields, .. }) => {
                assert_eq!(fields, vec!["areaOfInterest"]);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_area_is_rejected() {
        let mut req = valid_request();
        req.area_of_interest = Some(String::new());
        assert!(req.into_query().is_err());
    }

    #[test]
    fn test_zero_student_is_rejected() {
        let mut req = valid_request();
        req.student_id = Some(0);
        assert!(req.into_query().is_err());
    }

    #[test]
    fn test_unknown_project_type_is_rejected() {
        let mut req = valid_request();
        req.project_type = Some("Thesis".to_string());

        match req.into_query() {
            Err(MatchError::InvalidInput { fields, .. }) => {
                assert_eq!(fields, vec!["projectType"]);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let req: SubmitRecommendationRequest = serde_json::from_str(
            r#"{"studentId": 5, "areaOfInterest": "IoT", "projectType": "Mini", "academicLevel": "UG"}"#,
        )
        .unwrap();
        assert_eq!(req.student_id, Some(5));
        assert_eq!(req.area_of_interest.as_deref(), Some("IoT"));
    }

    #[test]
    fn test_feedback_rating_range_is_not_enforced() {
        let draft = SubmitFeedbackRequest {
            student_id: Some(1),
            faculty_id: Some(1),
            rating: Some(9.0),
            comment: None,
        }
        .into_draft(Utc::now())
        .unwrap();

        assert_eq!(draft.rating, 9.0);
        assert_eq!(draft.comment, "");
    }

    #[test]
    fn test_feedback_missing_fields() {
        let req = SubmitFeedbackRequest {
            student_id: Some(1),
            faculty_id: None,
            rating: None,
            comment: Some("great".to_string()),
        };

        match req.into_draft(Utc::now()) {
            Err(MatchError::InvalidInput { fields, .. }) => {
                assert_eq!(fields, vec!["facultyId", "rating"]);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_create_faculty_requires_name() {
        assert!(CreateFacultyRequest::default().into_new_faculty().is_err());

        let created = CreateFacultyRequest {
            name: Some("Dr. Eve".to_string()),
            ..Default::default()
        }
        .into_new_faculty()
        .unwrap();
        assert_eq!(created.name, "Dr. Eve");
        assert!(created.expertise_areas.is_none());
    }
}
