//! Implements InputPort. Inquire-based interactive menu over the registrar.

use crate::domain::{
    Course, CourseId, DirectoryKind, LetterGrade, SchoolError, Student, StudentId, Teacher,
    TeacherId, parse_date,
};
use crate::ports::InputPort;
use crate::usecases::Registrar;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, CustomType, InquireError, Select, Text};
use std::fmt;
use tracing::error;

/// Applies the chalkboard theme to every subsequent inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightGreen))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(Color::LightYellow));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddStudent,
    AddTeacher,
    AddCourse,
    Enroll,
    DropCourse,
    Teach,
    AssignGrade,
    MarkAttendance,
    SetSchedule,
    ShowStudent,
    FindStudentsByName,
    ShowTeacher,
    ShowSchedule,
    ShowCourse,
    ShowRoster,
    ShowGrades,
    ShowAttendance,
    ShowCgpa,
    ListStudents,
    ListTeachers,
    ListCourses,
    RenameStudent,
    RenameTeacher,
    RemoveStudent,
    RemoveTeacher,
    RemoveCourse,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 27] = [
        Self::AddStudent,
        Self::AddTeacher,
        Self::AddCourse,
        Self::Enroll,
        Self::DropCourse,
        Self::Teach,
        Self::AssignGrade,
        Self::MarkAttendance,
        Self::SetSchedule,
        Self::ShowStudent,
        Self::FindStudentsByName,
        Self::ShowTeacher,
        Self::ShowSchedule,
        Self::ShowCourse,
        Self::ShowRoster,
        Self::ShowGrades,
        Self::ShowAttendance,
        Self::ShowCgpa,
        Self::ListStudents,
        Self::ListTeachers,
        Self::ListCourses,
        Self::RenameStudent,
        Self::RenameTeacher,
        Self::RemoveStudent,
        Self::RemoveTeacher,
        Self::RemoveCourse,
        Self::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AddStudent => "Add student",
            Self::AddTeacher => "Add teacher",
            Self::AddCourse => "Add course",
            Self::Enroll => "Enroll student in course",
            Self::DropCourse => "Drop student from course",
            Self::Teach => "Assign teacher to course",
            Self::AssignGrade => "Assign grade",
            Self::MarkAttendance => "Mark attendance",
            Self::SetSchedule => "Set teacher schedule",
            Self::ShowStudent => "Student details (by ID)",
            Self::FindStudentsByName => "Student details (by name)",
            Self::ShowTeacher => "Teacher details",
            Self::ShowSchedule => "Teacher schedule",
            Self::ShowCourse => "Course details",
            Self::ShowRoster => "Course roster",
            Self::ShowGrades => "Student grades",
            Self::ShowAttendance => "Student attendance",
            Self::ShowCgpa => "Student CGPA",
            Self::ListStudents => "List all students",
            Self::ListTeachers => "List all teachers",
            Self::ListCourses => "List all courses",
            Self::RenameStudent => "Rename student",
            Self::RenameTeacher => "Rename teacher",
            Self::RemoveStudent => "Remove student",
            Self::RemoveTeacher => "Remove teacher",
            Self::RemoveCourse => "Remove course",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Why a single menu action did not complete.
enum StepError {
    Domain(SchoolError),
    Prompt(InquireError),
}

impl From<SchoolError> for StepError {
    fn from(e: SchoolError) -> Self {
        Self::Domain(e)
    }
}

impl From<InquireError> for StepError {
    fn from(e: InquireError) -> Self {
        Self::Prompt(e)
    }
}

fn ask(message: &str) -> Result<String, InquireError> {
    Ok(Text::new(message).prompt()?.trim().to_string())
}

fn ask_student() -> Result<StudentId, InquireError> {
    ask("Student ID:").map(StudentId::from)
}

fn ask_teacher() -> Result<TeacherId, InquireError> {
    ask("Teacher ID:").map(TeacherId::from)
}

fn ask_course() -> Result<CourseId, InquireError> {
    ask("Course ID:").map(CourseId::from)
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort<'a> {
    registrar: &'a mut Registrar,
    default_capacity: usize,
}

impl<'a> TuiInputPort<'a> {
    pub fn new(registrar: &'a mut Registrar, default_capacity: usize) -> Self {
        Self {
            registrar,
            default_capacity,
        }
    }

    fn perform(&mut self, action: MenuAction) -> Result<(), StepError> {
        let r = &mut *self.registrar;
        match action {
            MenuAction::AddStudent => {
                let name = ask("Student name:")?;
                r.add_student(Student::new(name, ask_student()?));
            }
            MenuAction::AddTeacher => {
                let name = ask("Teacher name:")?;
                r.add_teacher(Teacher::new(name, ask_teacher()?));
            }
            MenuAction::AddCourse => {
                let name = ask("Course name:")?;
                let id = ask_course()?;
                let capacity = CustomType::<usize>::new("Capacity:")
                    .with_default(self.default_capacity)
                    .with_error_message("Enter a whole number")
                    .prompt()?;
                r.add_course(Course::with_capacity(name, id, capacity));
            }
            MenuAction::Enroll => {
                r.enroll(&ask_student()?, &ask_course()?)?;
            }
            MenuAction::DropCourse => {
                r.drop_course(&ask_student()?, &ask_course()?)?;
            }
            MenuAction::Teach => {
                r.teach(&ask_teacher()?, &ask_course()?)?;
            }
            MenuAction::AssignGrade => {
                let teacher = ask_teacher()?;
                let student = ask_student()?;
                let course = ask_course()?;
                let grade = LetterGrade::from(ask("Grade (A-D, F):")?);
                r.assign_grade(&teacher, &student, &course, grade)?;
            }
            MenuAction::MarkAttendance => {
                let student = ask_student()?;
                let course = ask_course()?;
                let date = parse_date(&ask("Date (YYYY-MM-DD):")?)?;
                let present = Confirm::new("Present?").with_default(true).prompt()?;
                r.mark_attendance(&student, &course, date, present)?;
            }
            MenuAction::SetSchedule => {
                let teacher = ask_teacher()?;
                let course = ask_course()?;
                let slot = ask("Time slot:")?;
                r.set_schedule(&teacher, &course, &slot)?;
            }
            MenuAction::ShowStudent => r.show_student(&ask_student()?)?,
            MenuAction::FindStudentsByName => r.show_students_named(&ask("Student name:")?)?,
            MenuAction::ShowTeacher => r.show_teacher(&ask_teacher()?)?,
            MenuAction::ShowSchedule => r.show_teacher_schedule(&ask_teacher()?)?,
            MenuAction::ShowCourse => r.show_course(&ask_course()?)?,
            MenuAction::ShowRoster => r.show_course_students(&ask_course()?)?,
            MenuAction::ShowGrades => r.show_grades(&ask_student()?)?,
            MenuAction::ShowAttendance => r.show_attendance(&ask_student()?)?,
            MenuAction::ShowCgpa => r.show_cgpa(&ask_student()?)?,
            MenuAction::ListStudents => r.show_directory(DirectoryKind::Students)?,
            MenuAction::ListTeachers => r.show_directory(DirectoryKind::Teachers)?,
            MenuAction::ListCourses => r.show_directory(DirectoryKind::Courses)?,
            MenuAction::RenameStudent => {
                let id = ask_student()?;
                r.rename_student(&id, ask("New name:")?)?;
            }
            MenuAction::RenameTeacher => {
                let id = ask_teacher()?;
                r.rename_teacher(&id, ask("New name:")?)?;
            }
            MenuAction::RemoveStudent => {
                let removed = r.remove_student(&ask_student()?)?;
                println!("Removed student {} ({})", removed.id(), policy_hint(r));
            }
            MenuAction::RemoveTeacher => {
                let removed = r.remove_teacher(&ask_teacher()?)?;
                println!("Removed teacher {} ({})", removed.id(), policy_hint(r));
            }
            MenuAction::RemoveCourse => {
                let removed = r.remove_course(&ask_course()?)?;
                println!("Removed course {} ({})", removed.id(), policy_hint(r));
            }
            MenuAction::Quit => {}
        }
        Ok(())
    }
}

fn policy_hint(r: &Registrar) -> &'static str {
    match r.school().policy() {
        crate::domain::RemovalPolicy::Cascade => "references cleared",
        crate::domain::RemovalPolicy::RegistryOnly => "references kept",
    }
}

impl InputPort for TuiInputPort<'_> {
    fn run(&mut self) -> Result<(), SchoolError> {
        loop {
            let action = match Select::new("What next?", MenuAction::ALL.to_vec())
                .with_page_size(12)
                .prompt()
            {
                Ok(MenuAction::Quit) => return Ok(()),
                Ok(action) => action,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(SchoolError::Output(e.to_string())),
            };

            match self.perform(action) {
                Ok(()) => {}
                Err(StepError::Domain(e)) => {
                    error!(error = %e, action = %action, "action failed");
                    println!("{e}");
                }
                Err(StepError::Prompt(InquireError::OperationCanceled)) => {}
                Err(StepError::Prompt(InquireError::OperationInterrupted)) => return Ok(()),
                Err(StepError::Prompt(e)) => return Err(SchoolError::Output(e.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_action_once() {
        let labels: Vec<String> = MenuAction::ALL.iter().map(ToString::to_string).collect();
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());
        assert_eq!(MenuAction::ALL.last(), Some(&MenuAction::Quit));
    }
}
