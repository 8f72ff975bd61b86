//! Shared identity of people in the school and the name lookups reports need.

use super::ids::{CourseId, StudentId, TeacherId};
use super::reports::Report;

/// Resolves ids to display names. Implemented by the registry; ids that no longer
/// resolve (e.g. after a registry-only removal) are rendered verbatim.
pub trait NameDirectory {
    fn course_name(&self, id: &CourseId) -> Option<&str>;
    fn student_name(&self, id: &StudentId) -> Option<&str>;
    fn teacher_name(&self, id: &TeacherId) -> Option<&str>;

    fn course_label(&self, id: &CourseId) -> String {
        self.course_name(id)
            .map_or_else(|| id.to_string(), str::to_string)
    }

    fn student_label(&self, id: &StudentId) -> String {
        self.student_name(id)
            .map_or_else(|| id.to_string(), str::to_string)
    }

    fn teacher_label(&self, id: &TeacherId) -> String {
        self.teacher_name(id)
            .map_or_else(|| id.to_string(), str::to_string)
    }
}

/// A person registered with the school: students and teachers.
pub trait SchoolMember {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    /// Registry key. Immutable after construction.
    fn member_id(&self) -> &str;

    /// Structured summary of this member.
    fn details(&self, directory: &dyn NameDirectory) -> Report;

    fn display_details(&self, directory: &dyn NameDirectory) -> String {
        self.details(directory).to_string()
    }
}
