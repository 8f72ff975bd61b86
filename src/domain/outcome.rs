//! Soft no-ops. An operation whose precondition does not hold leaves state untouched
//! and returns a [`Notice`] instead of failing.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    AlreadyEnrolled { student: String, course: String },
    NotEnrolled { student: String, course: String },
    AlreadyTeaching { teacher: String, course: String },
    NotTaught { teacher: String, course: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyEnrolled { student, course } => {
                write!(f, "Student {student} is already enrolled in {course}")
            }
            Self::NotEnrolled { student, course } => {
                write!(f, "Student {student} is not enrolled in {course}")
            }
            Self::AlreadyTeaching { teacher, course } => {
                write!(f, "Teacher {teacher} is already teaching {course}")
            }
            Self::NotTaught { teacher, course } => {
                write!(f, "Teacher {teacher} does not teach {course}")
            }
        }
    }
}

/// Result of a mutation that may be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(Notice),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Applied => None,
            Self::Skipped(n) => Some(n),
        }
    }
}
