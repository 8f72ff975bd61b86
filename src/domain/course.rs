//! Course record: capacity-bounded roster and an optional teacher.

use super::errors::SchoolError;
use super::ids::{CourseId, StudentId, TeacherId};
use super::member::NameDirectory;
use super::reports::{CourseDetails, CourseRoster, DirectoryEntry, Report};

/// Capacity used when a course is created without one.
pub const DEFAULT_COURSE_CAPACITY: usize = 30;

#[derive(Debug, Clone)]
pub struct Course {
    name: String,
    id: CourseId,
    capacity: usize,
    teacher: Option<TeacherId>,
    students: Vec<StudentId>,
}

impl Course {
    pub fn new(name: impl Into<String>, id: impl Into<CourseId>) -> Self {
        Self::with_capacity(name, id, DEFAULT_COURSE_CAPACITY)
    }

    pub fn with_capacity(name: impl Into<String>, id: impl Into<CourseId>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            capacity,
            teacher: None,
            students: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn teacher(&self) -> Option<&TeacherId> {
        self.teacher.as_ref()
    }

    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn has_student(&self, student: &StudentId) -> bool {
        self.students.contains(student)
    }

    pub fn is_full(&self) -> bool {
        self.students.len() >= self.capacity
    }

    /// Appends `student` unless the roster is at capacity. Adding a student already on
    /// the roster is accepted without growing it.
    pub fn add_student(&mut self, student: StudentId) -> Result<(), SchoolError> {
        if self.has_student(&student) {
            return Ok(());
        }
        if self.is_full() {
            return Err(SchoolError::CourseFull {
                course: self.name.clone(),
                capacity: self.capacity,
            });
        }
        self.students.push(student);
        Ok(())
    }

    pub fn remove_student(&mut self, student: &StudentId) -> Result<(), SchoolError> {
        let pos = self
            .students
            .iter()
            .position(|s| s == student)
            .ok_or_else(|| SchoolError::student_not_in_course(student, &self.name))?;
        self.students.remove(pos);
        Ok(())
    }

    /// Replaces any previous teacher.
    pub fn assign_teacher(&mut self, teacher: TeacherId) -> Option<TeacherId> {
        self.teacher.replace(teacher)
    }

    pub(crate) fn clear_teacher_if(&mut self, teacher: &TeacherId) {
        if self.teacher.as_ref() == Some(teacher) {
            self.teacher = None;
        }
    }

    pub(crate) fn retain_students(&mut self, keep: impl FnMut(&StudentId) -> bool) {
        self.students.retain(keep);
    }

    pub fn display_students(&self, directory: &dyn NameDirectory) -> Report {
        Report::Roster(CourseRoster {
            course: self.name.clone(),
            students: self
                .students
                .iter()
                .map(|s| DirectoryEntry {
                    name: directory.student_label(s),
                    id: s.to_string(),
                })
                .collect(),
        })
    }

    pub fn display_details(&self, directory: &dyn NameDirectory) -> Report {
        Report::CourseDetails(CourseDetails {
            name: self.name.clone(),
            id: self.id.to_string(),
            teacher: self.teacher.as_ref().map(|t| directory.teacher_label(t)),
            students: self
                .students
                .iter()
                .map(|s| directory.student_label(s))
                .collect(),
            capacity: self.capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_enforced() {
        let mut c = Course::with_capacity("Art", "ART1", 2);
        c.add_student("S1".into()).unwrap();
        c.add_student("S2".into()).unwrap();
        assert!(c.is_full());

        let err = c.add_student("S3".into()).unwrap_err();
        assert_eq!(
            err,
            SchoolError::CourseFull {
                course: "Art".into(),
                capacity: 2
            }
        );
        assert_eq!(c.students().len(), 2);
    }

    #[test]
    fn test_default_capacity() {
        let c = Course::new("Mathematics", "MATH101");
        assert_eq!(c.capacity(), DEFAULT_COURSE_CAPACITY);
        assert!(c.teacher().is_none());
    }

    #[test]
    fn test_remove_absent_student_fails() {
        let mut c = Course::new("Mathematics", "MATH101");
        let err = c.remove_student(&"S404".into()).unwrap_err();
        assert!(matches!(err, SchoolError::StudentNotFound(_)));
        assert_eq!(err.to_string(), "Student S404 not found in course Mathematics");

        c.add_student("S1".into()).unwrap();
        c.add_student("S1".into()).unwrap();
        assert_eq!(c.students().len(), 1);
        c.remove_student(&"S1".into()).unwrap();
        assert!(c.students().is_empty());
    }

    #[test]
    fn test_assign_teacher_overwrites() {
        let mut c = Course::new("Mathematics", "MATH101");
        assert_eq!(c.assign_teacher("T1".into()), None);
        assert_eq!(c.assign_teacher("T2".into()), Some(TeacherId::from("T1")));
        c.clear_teacher_if(&"T1".into());
        assert_eq!(c.teacher(), Some(&TeacherId::from("T2")));
        c.clear_teacher_if(&"T2".into());
        assert!(c.teacher().is_none());
    }
}
