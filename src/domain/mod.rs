//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the registry that links them, and the reports they produce.

pub mod course;
pub mod errors;
pub mod grade;
pub mod ids;
pub mod member;
pub mod outcome;
pub mod reports;
pub mod school;
pub mod student;
pub mod teacher;

pub use course::{Course, DEFAULT_COURSE_CAPACITY};
pub use errors::SchoolError;
pub use grade::LetterGrade;
pub use ids::{CourseId, StudentId, TeacherId};
pub use member::{NameDirectory, SchoolMember};
pub use outcome::{Notice, Outcome};
pub use reports::{DirectoryKind, GradebookRow, Report};
pub use school::{RemovalPolicy, School};
pub use student::{AttendanceRecord, Student, parse_date};
pub use teacher::Teacher;
