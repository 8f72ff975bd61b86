//! Domain errors. Hard failures raised by registry lookups and capacity checks.
//!
//! Soft no-ops are not errors; see [`crate::domain::Outcome`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchoolError {
    #[error("Course {course} is full (capacity {capacity})")]
    CourseFull { course: String, capacity: usize },

    /// Unknown id, empty name search, or a student absent from a course roster.
    /// Carries the full message; build it with the constructors below.
    #[error("{0}")]
    StudentNotFound(String),

    #[error("Teacher with ID {0} not found")]
    TeacherNotFound(String),

    #[error("Course with ID {0} not found")]
    CourseNotFound(String),

    /// Reserved for lookups that span both students and teachers.
    #[error("Member with ID {0} not found")]
    MemberNotFound(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl SchoolError {
    pub fn student_not_found(id: impl std::fmt::Display) -> Self {
        Self::StudentNotFound(format!("Student with ID {id} not found"))
    }

    pub fn student_not_in_course(id: impl std::fmt::Display, course: &str) -> Self {
        Self::StudentNotFound(format!("Student {id} not found in course {course}"))
    }

    pub fn no_students_named(name: &str) -> Self {
        Self::StudentNotFound(format!("No students found with the name '{name}'"))
    }

    pub fn is_student_not_found(&self) -> bool {
        matches!(self, Self::StudentNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_lookups_share_one_kind() {
        let by_id = SchoolError::student_not_found("S9");
        assert_eq!(by_id.to_string(), "Student with ID S9 not found");
        assert!(by_id.is_student_not_found());

        let by_name = SchoolError::no_students_named("Zed");
        assert_eq!(by_name.to_string(), "No students found with the name 'Zed'");
        assert!(matches!(by_name, SchoolError::StudentNotFound(_)));

        let roster = SchoolError::student_not_in_course("S1", "Art");
        assert_eq!(roster.to_string(), "Student S1 not found in course Art");
        assert!(matches!(roster, SchoolError::StudentNotFound(_)));

        assert!(!SchoolError::CourseNotFound("X".into()).is_student_not_found());
    }

    #[test]
    fn test_course_full_message() {
        let err = SchoolError::CourseFull {
            course: "Mathematics".into(),
            capacity: 30,
        };
        assert_eq!(err.to_string(), "Course Mathematics is full (capacity 30)");
    }
}
