//! Scripted walkthrough: two courses, two students, one teacher, then every report.
//!
//! The first hard failure aborts the run and is returned to the caller.

use super::registrar::Registrar;
use crate::domain::{
    Course, CourseId, DirectoryKind, LetterGrade, SchoolError, Student, StudentId, Teacher,
    TeacherId, parse_date,
};
use tracing::info;

pub fn run_walkthrough(registrar: &mut Registrar, capacity: usize) -> Result<(), SchoolError> {
    info!(capacity, "starting walkthrough");

    let math = CourseId::from("MATH101");
    let science = CourseId::from("SCI101");
    let alice = StudentId::from("S001");
    let bob = StudentId::from("S002");
    let smith = TeacherId::from("T001");

    registrar.add_student(Student::new("Alice", alice.clone()));
    registrar.add_student(Student::new("Bob", bob.clone()));
    registrar.add_teacher(Teacher::new("Dr. Smith", smith.clone()));
    registrar.add_course(Course::with_capacity("Mathematics", math.clone(), capacity));
    registrar.add_course(Course::with_capacity("Science", science.clone(), capacity));

    registrar.enroll(&alice, &math)?;
    registrar.enroll(&alice, &science)?;
    registrar.enroll(&bob, &math)?;

    registrar.teach(&smith, &math)?;

    registrar.assign_grade(&smith, &alice, &math, LetterGrade::A)?;
    registrar.assign_grade(&smith, &bob, &math, LetterGrade::B)?;

    registrar.mark_attendance(&alice, &math, parse_date("2024-07-01")?, true)?;
    registrar.mark_attendance(&alice, &math, parse_date("2024-07-02")?, false)?;
    registrar.mark_attendance(&bob, &math, parse_date("2024-07-01")?, true)?;

    registrar.set_schedule(&smith, &math, "Monday 10-12")?;

    registrar.show_student(&alice)?;
    registrar.show_student(&bob)?;
    registrar.show_teacher(&smith)?;

    registrar.show_grades(&alice)?;
    registrar.show_attendance(&alice)?;

    registrar.show_directory(DirectoryKind::Students)?;
    registrar.show_directory(DirectoryKind::Teachers)?;
    registrar.show_directory(DirectoryKind::Courses)?;

    registrar.show_course_students(&math)?;
    registrar.show_student(&alice)?;
    registrar.show_students_named("Bob")?;
    registrar.show_teacher_schedule(&smith)?;

    registrar.show_cgpa(&alice)?;
    registrar.show_cgpa(&bob)?;

    info!("walkthrough finished");
    Ok(())
}
