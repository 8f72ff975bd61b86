//! Structured views over the registry. Adapters decide how to render them:
//! `Display` gives the human-readable console lines, `Serialize` gives JSON.

use super::outcome::Notice;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    StudentDetails(StudentDetails),
    TeacherDetails(TeacherDetails),
    CourseDetails(CourseDetails),
    Grades(GradeListing),
    Attendance(AttendanceListing),
    Schedule(ScheduleListing),
    Roster(CourseRoster),
    Directory(DirectoryListing),
    Cgpa(CgpaLine),
    Notice(Notice),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDetails {
    pub name: String,
    pub id: String,
    pub courses: Vec<String>,
    pub gpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherDetails {
    pub name: String,
    pub id: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDetails {
    pub name: String,
    pub id: String,
    pub teacher: Option<String>,
    pub students: Vec<String>,
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeEntry {
    pub course: String,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeListing {
    pub student: String,
    pub entries: Vec<GradeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseAttendance {
    pub course: String,
    pub records: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceListing {
    pub student: String,
    pub courses: Vec<CourseAttendance>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSlot {
    pub course: String,
    pub slot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleListing {
    pub teacher: String,
    pub slots: Vec<ScheduleSlot>,
}

/// `name (ID: id)` pair used by rosters and directories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRoster {
    pub course: String,
    pub students: Vec<DirectoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryKind {
    Students,
    Teachers,
    Courses,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryListing {
    pub of: DirectoryKind,
    pub entries: Vec<DirectoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CgpaLine {
    pub student: String,
    pub cgpa: f64,
}

/// One graded course of one student; the unit of the gradebook export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradebookRow {
    pub student: String,
    pub student_id: String,
    pub course: String,
    pub grade: String,
    pub points: f64,
}

fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[DirectoryEntry]) -> fmt::Result {
    for e in entries {
        write!(f, "\n- {} (ID: {})", e.name, e.id)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StudentDetails(s) => write!(
                f,
                "Student Name: {}, ID: {}, Courses: {}, GPA: {:.2}",
                s.name,
                s.id,
                bracketed(&s.courses),
                s.gpa
            ),
            Self::TeacherDetails(t) => write!(
                f,
                "Teacher Name: {}, ID: {}, Courses: {}",
                t.name,
                t.id,
                bracketed(&t.courses)
            ),
            Self::CourseDetails(c) => write!(
                f,
                "Course Name: {}, ID: {}, Teacher: {}, Students: {}",
                c.name,
                c.id,
                c.teacher.as_deref().unwrap_or("None"),
                bracketed(&c.students)
            ),
            Self::Grades(g) => {
                write!(f, "Grades for {}:", g.student)?;
                for e in &g.entries {
                    write!(f, "\nCourse: {}, Grade: {}", e.course, e.grade)?;
                }
                Ok(())
            }
            Self::Attendance(a) => {
                let mut first = true;
                for course in &a.courses {
                    if !first {
                        writeln!(f)?;
                    }
                    first = false;
                    write!(f, "Attendance for {}:", course.course)?;
                    for r in &course.records {
                        let status = if r.present { "Present" } else { "Absent" };
                        write!(f, "\n- {}: {}", r.date.format("%Y-%m-%d"), status)?;
                    }
                }
                if first {
                    write!(f, "No attendance recorded for {}", a.student)?;
                }
                Ok(())
            }
            Self::Schedule(s) => {
                write!(f, "Schedule for Teacher {}:", s.teacher)?;
                for slot in &s.slots {
                    write!(f, "\n- {}: {}", slot.course, slot.slot)?;
                }
                Ok(())
            }
            Self::Roster(r) => {
                write!(f, "Students enrolled in {}:", r.course)?;
                write_entries(f, &r.students)
            }
            Self::Directory(d) => {
                let heading = match d.of {
                    DirectoryKind::Students => "All Students in School:",
                    DirectoryKind::Teachers => "All Teachers in School:",
                    DirectoryKind::Courses => "All Courses in School:",
                };
                f.write_str(heading)?;
                write_entries(f, &d.entries)
            }
            Self::Cgpa(c) => write!(f, "CGPA for {}: {:.2}", c.student, c.cgpa),
            Self::Notice(n) => write!(f, "{n}"),
        }
    }
}
