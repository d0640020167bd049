use crate::models::{AcademicLevel, FacultyProfile, PreferenceQuery, ProjectType};

/// Points for an exact expertise tag match
pub const AREA_MATCH_POINTS: f64 = 60.0;
/// Points when the advisor is experienced enough for the project type
pub const PROJECT_GATE_POINTS: f64 = 20.0;
/// Postgraduate bonus, only for advisors with enough experience
pub const PG_BONUS_POINTS: f64 = 10.0;
/// Years of experience required for the postgraduate bonus
pub const PG_MIN_EXPERIENCE_YEARS: u32 = 5;
/// Flat bonus for any non-postgraduate level
pub const DEFAULT_LEVEL_POINTS: f64 = 5.0;

/// Check whether the advisor lists the query's area of interest
#[inline]
pub fn matches_area(query: &PreferenceQuery, faculty: &FacultyProfile) -> bool {
    faculty.has_expertise(&query.area_of_interest)
}

/// Check the project-type / experience gate
///
/// Research needs 8 years, Final 5, Mini 2.
#[inline]
pub fn passes_project_gate(project_type: ProjectType, experience_years: u32) -> bool {
    experience_years >= project_type.min_experience_years()
}

/// Bonus contributed by the student's academic level
#[inline]
pub fn academic_level_bonus(level: AcademicLevel, experience_years: u32) -> f64 {
    match level {
        AcademicLevel::PG if experience_years >= PG_MIN_EXPERIENCE_YEARS => PG_BONUS_POINTS,
        AcademicLevel::PG => 0.0,
        _ => DEFAULT_LEVEL_POINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn create_faculty(tags: &[&str], experience_years: u32) -> FacultyProfile {
        FacultyProfile {
            id: 1,
            name: "Dr. Test".to_string(),
            expertise_areas: tags.iter().map(|t| t.to_string()).collect(),
            experience_years,
            rating: 4.0,
            availability: Availability::Available,
        }
    }

    fn create_query(area: &str) -> PreferenceQuery {
        PreferenceQuery {
            area_of_interest: area.to_string(),
            project_type: ProjectType::Final,
            academic_level: AcademicLevel::UG,
        }
    }

    #[test]
    fn test_area_match() {
        let faculty = create_faculty(&["AI", "ML"], 3);
        assert!(matches_area(&create_query("ML"), &faculty));
        assert!(!matches_area(&create_query("ml"), &faculty));
        assert!(!matches_area(&create_query("IoT"), &faculty));
    }

    #[test]
    fn test_duplicate_tags_are_membership_only() {
        let faculty = create_faculty(&["AI", "AI"], 3);
        assert!(matches_area(&create_query("AI"), &faculty));
    }

    #[test]
    fn test_project_gate_thresholds() {
        assert!(passes_project_gate(ProjectType::Research, 8));
        assert!(!passes_project_gate(ProjectType::Research, 7));
        assert!(passes_project_gate(ProjectType::Final, 5));
        assert!(!passes_project_gate(ProjectType::Final, 4));
        assert!(passes_project_gate(ProjectType::Mini, 2));
        assert!(!passes_project_gate(ProjectType::Mini, 1));
    }

    #[test]
    fn test_academic_level_bonus() {
        assert_eq!(academic_level_bonus(AcademicLevel::PG, 5), 10.0);
        assert_eq!(academic_level_bonus(AcademicLevel::PG, 4), 0.0);
        assert_eq!(academic_level_bonus(AcademicLevel::UG, 0), 5.0);
        assert_eq!(academic_level_bonus(AcademicLevel::UG, 20), 5.0);
    }
}
