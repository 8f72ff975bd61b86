//! School registry. Owns every entity and performs all operations that touch more than
//! one of them, so the Student <-> Course and Teacher <-> Course links stay in step.
//!
//! Entities refer to each other by id only; the registry resolves ids back to records.

use super::course::Course;
use super::errors::SchoolError;
use super::grade::LetterGrade;
use super::ids::{CourseId, StudentId, TeacherId};
use super::member::{NameDirectory, SchoolMember};
use super::outcome::{Notice, Outcome};
use super::reports::{DirectoryEntry, DirectoryKind, DirectoryListing, GradebookRow, Report};
use super::student::Student;
use super::teacher::Teacher;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

/// What removing an entity from the registry does to records that reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Scrub the removed id from every roster, enrolment, grade map and schedule.
    #[default]
    Cascade,
    /// Remove from the registry list only. References stay and render as raw ids.
    RegistryOnly,
}

#[derive(Debug, Default)]
pub struct School {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    courses: Vec<Course>,
    policy: RemovalPolicy,
}

impl School {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RemovalPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_student(&mut self, student: Student) {
        if self.student_index(student.id()).is_ok() {
            warn!(id = %student.id(), "duplicate student id; lookups keep returning the first");
        }
        info!(id = %student.id(), name = student.name(), "student registered");
        self.students.push(student);
    }

    pub fn add_teacher(&mut self, teacher: Teacher) {
        if self.teacher_index(teacher.id()).is_ok() {
            warn!(id = %teacher.id(), "duplicate teacher id; lookups keep returning the first");
        }
        info!(id = %teacher.id(), name = teacher.name(), "teacher registered");
        self.teachers.push(teacher);
    }

    pub fn add_course(&mut self, course: Course) {
        if self.course_index(course.id()).is_ok() {
            warn!(id = %course.id(), "duplicate course id; lookups keep returning the first");
        }
        info!(
            id = %course.id(),
            name = course.name(),
            capacity = course.capacity(),
            "course registered"
        );
        self.courses.push(course);
    }

    /// Under [`RemovalPolicy::Cascade`] every roster entry for `id` goes, except those
    /// still backed by a registered student with the same id.
    pub fn remove_student(&mut self, id: &StudentId) -> Result<Student, SchoolError> {
        let idx = self.student_index(id)?;
        let removed = self.students.remove(idx);
        if self.policy == RemovalPolicy::Cascade {
            let survivor_courses = self
                .find_student_by_id(id)
                .ok()
                .map(|s| s.courses().to_vec());
            for course in &mut self.courses {
                let backed = survivor_courses
                    .as_ref()
                    .is_some_and(|courses| courses.contains(course.id()));
                if !backed {
                    course.retain_students(|s| s != id);
                }
            }
        }
        info!(id = %id, policy = ?self.policy, "student removed");
        Ok(removed)
    }

    pub fn remove_teacher(&mut self, id: &TeacherId) -> Result<Teacher, SchoolError> {
        let idx = self.teacher_index(id)?;
        let removed = self.teachers.remove(idx);
        if self.policy == RemovalPolicy::Cascade {
            let survivor_courses = self
                .find_teacher_by_id(id)
                .ok()
                .map(|t| t.courses().to_vec());
            for course in &mut self.courses {
                let backed = survivor_courses
                    .as_ref()
                    .is_some_and(|courses| courses.contains(course.id()));
                if !backed {
                    course.clear_teacher_if(id);
                }
            }
        }
        info!(id = %id, policy = ?self.policy, "teacher removed");
        Ok(removed)
    }

    /// Under [`RemovalPolicy::Cascade`] enrolments, grades, attendance and schedule
    /// entries for `id` go, except for members of a same-id course still registered.
    pub fn remove_course(&mut self, id: &CourseId) -> Result<Course, SchoolError> {
        let idx = self.course_index(id)?;
        let removed = self.courses.remove(idx);
        if self.policy == RemovalPolicy::Cascade {
            let survivor = self
                .find_course_by_id(id)
                .ok()
                .map(|c| (c.students().to_vec(), c.teacher().cloned()));
            for student in &mut self.students {
                let stale = match &survivor {
                    None => true,
                    Some((roster, _)) => {
                        student.is_enrolled(id) && !roster.contains(student.id())
                    }
                };
                if stale {
                    student.forget_course(id);
                }
            }
            for teacher in &mut self.teachers {
                let stale = match &survivor {
                    None => true,
                    Some((_, lead)) => teacher.teaches(id) && lead.as_ref() != Some(teacher.id()),
                };
                if stale {
                    teacher.forget_course(id);
                }
            }
        }
        info!(id = %id, policy = ?self.policy, "course removed");
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────

    fn student_index(&self, id: &StudentId) -> Result<usize, SchoolError> {
        self.students
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| SchoolError::student_not_found(id))
    }

    fn teacher_index(&self, id: &TeacherId) -> Result<usize, SchoolError> {
        self.teachers
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| SchoolError::TeacherNotFound(id.to_string()))
    }

    fn course_index(&self, id: &CourseId) -> Result<usize, SchoolError> {
        self.courses
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| SchoolError::CourseNotFound(id.to_string()))
    }

    pub fn find_student_by_id(&self, id: &StudentId) -> Result<&Student, SchoolError> {
        self.student_index(id).map(|i| &self.students[i])
    }

    pub fn find_teacher_by_id(&self, id: &TeacherId) -> Result<&Teacher, SchoolError> {
        self.teacher_index(id).map(|i| &self.teachers[i])
    }

    pub fn find_course_by_id(&self, id: &CourseId) -> Result<&Course, SchoolError> {
        self.course_index(id).map(|i| &self.courses[i])
    }

    /// Case-insensitive exact match on the full name; every match is returned.
    pub fn find_student_by_name(&self, name: &str) -> Result<Vec<&Student>, SchoolError> {
        let wanted = name.to_lowercase();
        let found: Vec<&Student> = self
            .students
            .iter()
            .filter(|s| s.name().to_lowercase() == wanted)
            .collect();
        if found.is_empty() {
            return Err(SchoolError::no_students_named(name));
        }
        Ok(found)
    }

    pub fn rename_student(&mut self, id: &StudentId, name: String) -> Result<(), SchoolError> {
        let idx = self.student_index(id)?;
        self.students[idx].set_name(name);
        Ok(())
    }

    pub fn rename_teacher(&mut self, id: &TeacherId, name: String) -> Result<(), SchoolError> {
        let idx = self.teacher_index(id)?;
        self.teachers[idx].set_name(name);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Enrolment and grading
    // ─────────────────────────────────────────────────────────────────────────

    /// Enrols a student in a course. Capacity is checked before either side changes,
    /// so a full course leaves both rosters untouched.
    pub fn enroll(
        &mut self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Outcome, SchoolError> {
        let si = self.student_index(student_id)?;
        let ci = self.course_index(course_id)?;
        if self.students[si].is_enrolled(course_id) {
            return Ok(Outcome::Skipped(Notice::AlreadyEnrolled {
                student: self.students[si].name().to_string(),
                course: self.courses[ci].name().to_string(),
            }));
        }
        self.courses[ci].add_student(student_id.clone())?;
        self.students[si].add_course(course_id.clone());
        info!(student = %student_id, course = %course_id, "enrolled");
        Ok(Outcome::Applied)
    }

    /// Inverse of [`School::enroll`]. An enrolment no roster backs (the course left the
    /// registry, or a same-id course took its place) is detached from the student only.
    pub fn drop_course(
        &mut self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Outcome, SchoolError> {
        let si = self.student_index(student_id)?;
        let ci = self.course_index(course_id);
        if !self.students[si].is_enrolled(course_id) {
            let ci = ci?;
            return Ok(Outcome::Skipped(Notice::NotEnrolled {
                student: self.students[si].name().to_string(),
                course: self.courses[ci].name().to_string(),
            }));
        }
        match ci {
            Ok(ci) if self.courses[ci].has_student(student_id) => {
                self.courses[ci].remove_student(student_id)?;
            }
            Ok(_) => warn!(course = %course_id, "dropping enrolment missing from course roster"),
            Err(_) => warn!(course = %course_id, "dropping enrolment in unregistered course"),
        }
        self.students[si].remove_course(course_id);
        info!(student = %student_id, course = %course_id, "dropped");
        Ok(Outcome::Applied)
    }

    pub fn receive_grade(
        &mut self,
        student_id: &StudentId,
        course_id: &CourseId,
        grade: LetterGrade,
    ) -> Result<(), SchoolError> {
        let si = self.student_index(student_id)?;
        self.course_index(course_id)?;
        info!(student = %student_id, course = %course_id, %grade, "grade recorded");
        self.students[si].receive_grade(course_id.clone(), grade);
        Ok(())
    }

    pub fn mark_attendance(
        &mut self,
        student_id: &StudentId,
        course_id: &CourseId,
        date: NaiveDate,
        present: bool,
    ) -> Result<(), SchoolError> {
        let si = self.student_index(student_id)?;
        self.course_index(course_id)?;
        self.students[si].mark_attendance(course_id.clone(), date, present);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Teaching
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers the course with the teacher and points the course at the teacher,
    /// replacing whoever taught it before.
    pub fn teach(
        &mut self,
        teacher_id: &TeacherId,
        course_id: &CourseId,
    ) -> Result<Outcome, SchoolError> {
        let ti = self.teacher_index(teacher_id)?;
        let ci = self.course_index(course_id)?;
        if !self.teachers[ti].add_course(course_id.clone()) {
            return Ok(Outcome::Skipped(Notice::AlreadyTeaching {
                teacher: self.teachers[ti].name().to_string(),
                course: self.courses[ci].name().to_string(),
            }));
        }
        let previous = self.courses[ci].assign_teacher(teacher_id.clone());
        if let Some(prev) = previous.filter(|p| p != teacher_id) {
            info!(course = %course_id, previous = %prev, teacher = %teacher_id, "teacher replaced");
        } else {
            info!(course = %course_id, teacher = %teacher_id, "teacher assigned");
        }
        Ok(Outcome::Applied)
    }

    /// Grades only courses the teacher teaches; anything else is a notice.
    pub fn assign_grade(
        &mut self,
        teacher_id: &TeacherId,
        student_id: &StudentId,
        course_id: &CourseId,
        grade: LetterGrade,
    ) -> Result<Outcome, SchoolError> {
        let ti = self.teacher_index(teacher_id)?;
        if !self.teachers[ti].teaches(course_id) {
            return Ok(Outcome::Skipped(Notice::NotTaught {
                teacher: self.teachers[ti].name().to_string(),
                course: self.course_label(course_id),
            }));
        }
        self.receive_grade(student_id, course_id, grade)?;
        Ok(Outcome::Applied)
    }

    pub fn set_schedule(
        &mut self,
        teacher_id: &TeacherId,
        course_id: &CourseId,
        slot: impl Into<String>,
    ) -> Result<Outcome, SchoolError> {
        let ti = self.teacher_index(teacher_id)?;
        if !self.teachers[ti].set_slot(course_id.clone(), slot.into()) {
            return Ok(Outcome::Skipped(Notice::NotTaught {
                teacher: self.teachers[ti].name().to_string(),
                course: self.course_label(course_id),
            }));
        }
        Ok(Outcome::Applied)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────

    pub fn display_student_details_by_id(&self, id: &StudentId) -> Result<Report, SchoolError> {
        Ok(self.find_student_by_id(id)?.details(self))
    }

    pub fn display_student_details_by_name(&self, name: &str) -> Result<Vec<Report>, SchoolError> {
        Ok(self
            .find_student_by_name(name)?
            .into_iter()
            .map(|s| s.details(self))
            .collect())
    }

    pub fn display_teacher_details(&self, id: &TeacherId) -> Result<Report, SchoolError> {
        Ok(self.find_teacher_by_id(id)?.details(self))
    }

    pub fn display_teacher_schedule(&self, id: &TeacherId) -> Result<Report, SchoolError> {
        Ok(self.find_teacher_by_id(id)?.view_schedule(self))
    }

    pub fn display_course_details(&self, id: &CourseId) -> Result<Report, SchoolError> {
        Ok(self.find_course_by_id(id)?.display_details(self))
    }

    pub fn display_course_students(&self, id: &CourseId) -> Result<Report, SchoolError> {
        Ok(self.find_course_by_id(id)?.display_students(self))
    }

    pub fn view_grades(&self, id: &StudentId) -> Result<Report, SchoolError> {
        Ok(self.find_student_by_id(id)?.view_grades(self))
    }

    pub fn view_attendance(&self, id: &StudentId) -> Result<Report, SchoolError> {
        Ok(self.find_student_by_id(id)?.view_attendance(self))
    }

    pub fn cgpa(&self, id: &StudentId) -> Result<Report, SchoolError> {
        Ok(self.find_student_by_id(id)?.cgpa_line())
    }

    pub fn directory(&self, of: DirectoryKind) -> Report {
        let entries = match of {
            DirectoryKind::Students => self
                .students
                .iter()
                .map(|s| DirectoryEntry {
                    name: s.name().to_string(),
                    id: s.id().to_string(),
                })
                .collect(),
            DirectoryKind::Teachers => self
                .teachers
                .iter()
                .map(|t| DirectoryEntry {
                    name: t.name().to_string(),
                    id: t.id().to_string(),
                })
                .collect(),
            DirectoryKind::Courses => self
                .courses
                .iter()
                .map(|c| DirectoryEntry {
                    name: c.name().to_string(),
                    id: c.id().to_string(),
                })
                .collect(),
        };
        Report::Directory(DirectoryListing { of, entries })
    }

    /// Every recorded grade, students in registration order.
    pub fn gradebook(&self) -> Vec<GradebookRow> {
        self.students
            .iter()
            .flat_map(|s| {
                s.grades().iter().map(move |(course, grade)| GradebookRow {
                    student: s.name().to_string(),
                    student_id: s.id().to_string(),
                    course: self.course_label(course),
                    grade: grade.to_string(),
                    points: grade.points(),
                })
            })
            .collect()
    }
}

impl NameDirectory for School {
    fn course_name(&self, id: &CourseId) -> Option<&str> {
        self.find_course_by_id(id).ok().map(Course::name)
    }

    fn student_name(&self, id: &StudentId) -> Option<&str> {
        self.find_student_by_id(id).ok().map(|s| s.name())
    }

    fn teacher_name(&self, id: &TeacherId) -> Option<&str> {
        self.find_teacher_by_id(id).ok().map(|t| t.name())
    }
}
