//! Registrar: the application's entry into the registry.
//!
//! - Mutations go to [`School`]; soft no-ops are logged and their notice is emitted
//! - Display operations build a [`Report`] and hand it to the [`ReportSink`]
//! - Hard failures are returned to the caller untouched

use crate::domain::{
    Course, CourseId, DirectoryKind, LetterGrade, Outcome, Report, School, SchoolError, Student,
    StudentId, Teacher, TeacherId,
};
use crate::ports::ReportSink;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::warn;

pub struct Registrar {
    school: School,
    sink: Arc<dyn ReportSink>,
}

impl Registrar {
    pub fn new(school: School, sink: Arc<dyn ReportSink>) -> Self {
        Self { school, sink }
    }

    pub fn school(&self) -> &School {
        &self.school
    }

    pub fn into_school(self) -> School {
        self.school
    }

    fn settle(&self, outcome: Outcome) -> Result<Outcome, SchoolError> {
        if let Outcome::Skipped(notice) = &outcome {
            warn!(%notice, "skipped");
            self.sink.emit(&Report::Notice(notice.clone()))?;
        }
        Ok(outcome)
    }

    fn show(&self, report: Result<Report, SchoolError>) -> Result<(), SchoolError> {
        self.sink.emit(&report?)
    }

    pub fn add_student(&mut self, student: Student) {
        self.school.add_student(student);
    }

    pub fn add_teacher(&mut self, teacher: Teacher) {
        self.school.add_teacher(teacher);
    }

    pub fn add_course(&mut self, course: Course) {
        self.school.add_course(course);
    }

    pub fn rename_student(&mut self, id: &StudentId, name: String) -> Result<(), SchoolError> {
        self.school.rename_student(id, name)
    }

    pub fn rename_teacher(&mut self, id: &TeacherId, name: String) -> Result<(), SchoolError> {
        self.school.rename_teacher(id, name)
    }

    pub fn remove_student(&mut self, id: &StudentId) -> Result<Student, SchoolError> {
        self.school.remove_student(id)
    }

    pub fn remove_teacher(&mut self, id: &TeacherId) -> Result<Teacher, SchoolError> {
        self.school.remove_teacher(id)
    }

    pub fn remove_course(&mut self, id: &CourseId) -> Result<Course, SchoolError> {
        self.school.remove_course(id)
    }

    pub fn enroll(&mut self, student: &StudentId, course: &CourseId) -> Result<Outcome, SchoolError> {
        let outcome = self.school.enroll(student, course)?;
        self.settle(outcome)
    }

    pub fn drop_course(
        &mut self,
        student: &StudentId,
        course: &CourseId,
    ) -> Result<Outcome, SchoolError> {
        let outcome = self.school.drop_course(student, course)?;
        self.settle(outcome)
    }

    pub fn teach(&mut self, teacher: &TeacherId, course: &CourseId) -> Result<Outcome, SchoolError> {
        let outcome = self.school.teach(teacher, course)?;
        self.settle(outcome)
    }

    pub fn assign_grade(
        &mut self,
        teacher: &TeacherId,
        student: &StudentId,
        course: &CourseId,
        grade: LetterGrade,
    ) -> Result<Outcome, SchoolError> {
        let outcome = self.school.assign_grade(teacher, student, course, grade)?;
        self.settle(outcome)
    }

    pub fn mark_attendance(
        &mut self,
        student: &StudentId,
        course: &CourseId,
        date: NaiveDate,
        present: bool,
    ) -> Result<(), SchoolError> {
        self.school.mark_attendance(student, course, date, present)
    }

    pub fn set_schedule(
        &mut self,
        teacher: &TeacherId,
        course: &CourseId,
        slot: &str,
    ) -> Result<Outcome, SchoolError> {
        let outcome = self.school.set_schedule(teacher, course, slot)?;
        self.settle(outcome)
    }

    pub fn show_student(&self, id: &StudentId) -> Result<(), SchoolError> {
        self.show(self.school.display_student_details_by_id(id))
    }

    pub fn show_students_named(&self, name: &str) -> Result<(), SchoolError> {
        for report in self.school.display_student_details_by_name(name)? {
            self.sink.emit(&report)?;
        }
        Ok(())
    }

    pub fn show_teacher(&self, id: &TeacherId) -> Result<(), SchoolError> {
        self.show(self.school.display_teacher_details(id))
    }

    pub fn show_teacher_schedule(&self, id: &TeacherId) -> Result<(), SchoolError> {
        self.show(self.school.display_teacher_schedule(id))
    }

    pub fn show_course(&self, id: &CourseId) -> Result<(), SchoolError> {
        self.show(self.school.display_course_details(id))
    }

    pub fn show_course_students(&self, id: &CourseId) -> Result<(), SchoolError> {
        self.show(self.school.display_course_students(id))
    }

    pub fn show_grades(&self, id: &StudentId) -> Result<(), SchoolError> {
        self.show(self.school.view_grades(id))
    }

    pub fn show_attendance(&self, id: &StudentId) -> Result<(), SchoolError> {
        self.show(self.school.view_attendance(id))
    }

    pub fn show_cgpa(&self, id: &StudentId) -> Result<(), SchoolError> {
        self.show(self.school.cgpa(id))
    }

    pub fn show_directory(&self, of: DirectoryKind) -> Result<(), SchoolError> {
        self.sink.emit(&self.school.directory(of))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::MemorySink;
    use crate::domain::Notice;

    fn registrar() -> (Registrar, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let mut r = Registrar::new(School::new(), Arc::clone(&sink) as Arc<dyn ReportSink>);
        r.add_student(Student::new("Alice", "S001"));
        r.add_teacher(Teacher::new("Dr. Smith", "T001"));
        r.add_course(Course::new("Mathematics", "MATH101"));
        r.add_course(Course::new("Science", "SCI101"));
        (r, sink)
    }

    #[test]
    fn test_soft_no_op_emits_notice() {
        let (mut r, sink) = registrar();
        r.teach(&"T001".into(), &"SCI101".into()).unwrap();
        let outcome = r
            .assign_grade(&"T001".into(), &"S001".into(), &"MATH101".into(), LetterGrade::A)
            .unwrap();
        assert!(!outcome.is_applied());

        let reports = sink.take();
        assert_eq!(
            reports,
            vec![Report::Notice(Notice::NotTaught {
                teacher: "Dr. Smith".into(),
                course: "Mathematics".into()
            })]
        );
        assert!(r.school().find_student_by_id(&"S001".into()).unwrap().grades().is_empty());
    }

    #[test]
    fn test_applied_mutation_is_silent() {
        let (mut r, sink) = registrar();
        assert!(r.enroll(&"S001".into(), &"MATH101".into()).unwrap().is_applied());
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_hard_failure_emits_nothing() {
        let (r, sink) = registrar();
        let err = r.show_student(&"S404".into()).unwrap_err();
        assert_eq!(err, SchoolError::student_not_found("S404"));
        let err = r.show_students_named("nobody").unwrap_err();
        assert!(err.is_student_not_found());
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_display_operations_emit_reports() {
        let (mut r, sink) = registrar();
        r.enroll(&"S001".into(), &"MATH101".into()).unwrap();
        r.show_course_students(&"MATH101".into()).unwrap();
        r.show_directory(DirectoryKind::Students).unwrap();
        r.show_cgpa(&"S001".into()).unwrap();

        let text: Vec<String> = sink.take().iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            [
                "Students enrolled in Mathematics:\n- Alice (ID: S001)",
                "All Students in School:\n- Alice (ID: S001)",
                "CGPA for Alice: 0.00",
            ]
        );
    }

    #[test]
    fn test_into_school_keeps_state() {
        let (mut r, _sink) = registrar();
        r.enroll(&"S001".into(), &"SCI101".into()).unwrap();
        let removed = r.remove_course(&"SCI101".into()).unwrap();
        assert_eq!(removed.name(), "Science");
        let school = r.into_school();
        assert_eq!(school.courses().len(), 1);
        assert!(school.students()[0].courses().is_empty());
    }
}
