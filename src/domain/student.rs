//! Student record: enrolments, grades, attendance and the cached GPA.

use super::errors::SchoolError;
use super::grade::{LetterGrade, grade_point_average};
use super::ids::{CourseId, StudentId};
use super::member::{NameDirectory, SchoolMember};
use super::reports::{
    AttendanceEntry, AttendanceListing, CgpaLine, CourseAttendance, GradeEntry, GradeListing,
    Report, StudentDetails,
};
use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

/// One attendance mark. Several marks for the same date are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub present: bool,
}

/// Parses an attendance date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, SchoolError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| SchoolError::InvalidDate(s.to_string()))
}

#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    id: StudentId,
    courses: Vec<CourseId>,
    grades: IndexMap<CourseId, LetterGrade>,
    attendance: IndexMap<CourseId, Vec<AttendanceRecord>>,
    gpa: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, id: impl Into<StudentId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            courses: Vec::new(),
            grades: IndexMap::new(),
            attendance: IndexMap::new(),
            gpa: 0.0,
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    /// Enrolled courses in enrolment order.
    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn grades(&self) -> &IndexMap<CourseId, LetterGrade> {
        &self.grades
    }

    pub fn grade_for(&self, course: &CourseId) -> Option<&LetterGrade> {
        self.grades.get(course)
    }

    pub fn attendance(&self) -> &IndexMap<CourseId, Vec<AttendanceRecord>> {
        &self.attendance
    }

    pub fn is_enrolled(&self, course: &CourseId) -> bool {
        self.courses.contains(course)
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Every course carries the same weight, so this equals the GPA.
    pub fn calculate_cgpa(&self) -> f64 {
        self.gpa
    }

    /// Sets or overwrites the grade for `course`.
    pub fn receive_grade(&mut self, course: CourseId, grade: LetterGrade) {
        self.grades.insert(course, grade);
        self.update_gpa();
    }

    pub fn mark_attendance(&mut self, course: CourseId, date: NaiveDate, present: bool) {
        self.attendance
            .entry(course)
            .or_default()
            .push(AttendanceRecord { date, present });
    }

    pub fn view_grades(&self, directory: &dyn NameDirectory) -> Report {
        Report::Grades(GradeListing {
            student: self.name.clone(),
            entries: self
                .grades
                .iter()
                .map(|(course, grade)| GradeEntry {
                    course: directory.course_label(course),
                    grade: grade.to_string(),
                })
                .collect(),
        })
    }

    pub fn view_attendance(&self, directory: &dyn NameDirectory) -> Report {
        Report::Attendance(AttendanceListing {
            student: self.name.clone(),
            courses: self
                .attendance
                .iter()
                .map(|(course, records)| CourseAttendance {
                    course: directory.course_label(course),
                    records: records
                        .iter()
                        .map(|r| AttendanceEntry {
                            date: r.date,
                            present: r.present,
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    pub fn cgpa_line(&self) -> Report {
        Report::Cgpa(CgpaLine {
            student: self.name.clone(),
            cgpa: self.calculate_cgpa(),
        })
    }

    /// Returns false when already enrolled.
    pub(crate) fn add_course(&mut self, course: CourseId) -> bool {
        if self.is_enrolled(&course) {
            return false;
        }
        self.courses.push(course);
        self.update_gpa();
        true
    }

    /// Removes the enrolment only; the grade for the course is kept.
    pub(crate) fn remove_course(&mut self, course: &CourseId) -> bool {
        let Some(pos) = self.courses.iter().position(|c| c == course) else {
            return false;
        };
        self.courses.remove(pos);
        self.update_gpa();
        true
    }

    /// Drops every trace of a course that no longer exists.
    pub(crate) fn forget_course(&mut self, course: &CourseId) {
        self.courses.retain(|c| c != course);
        self.grades.shift_remove(course);
        self.attendance.shift_remove(course);
        self.update_gpa();
    }

    fn update_gpa(&mut self) {
        self.gpa = grade_point_average(self.grades.values());
        debug!(student = %self.id, gpa = self.gpa, "gpa recomputed");
    }
}

impl SchoolMember for Student {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn member_id(&self) -> &str {
        self.id.as_str()
    }

    fn details(&self, directory: &dyn NameDirectory) -> Report {
        Report::StudentDetails(StudentDetails {
            name: self.name.clone(),
            id: self.id.to_string(),
            courses: self
                .courses
                .iter()
                .map(|c| directory.course_label(c))
                .collect(),
            gpa: self.gpa,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn test_gpa_tracks_grades() {
        let mut s = Student::new("Alice", "S001");
        assert_eq!(s.gpa(), 0.0);

        s.receive_grade("MATH101".into(), LetterGrade::A);
        assert_eq!(s.gpa(), 4.0);

        s.receive_grade("SCI101".into(), LetterGrade::B);
        assert_eq!(s.gpa(), 3.5);

        // overwrite, not append
        s.receive_grade("MATH101".into(), LetterGrade::C);
        assert_eq!(s.grades().len(), 2);
        assert_eq!(s.gpa(), 2.5);
        assert_eq!(s.calculate_cgpa(), s.gpa());
    }

    #[test]
    fn test_attendance_keeps_duplicates_in_order() {
        let mut s = Student::new("Alice", "S001");
        let math = CourseId::from("MATH101");
        s.mark_attendance(math.clone(), date(1), true);
        s.mark_attendance(math.clone(), date(1), false);
        s.mark_attendance(math.clone(), date(2), true);

        let records = &s.attendance()[&math];
        assert_eq!(records.len(), 3);
        assert!(records[0].present);
        assert!(!records[1].present);
        assert_eq!(records[2].date, date(2));
    }

    #[test]
    fn test_add_course_is_unique() {
        let mut s = Student::new("Bob", "S002");
        assert!(s.add_course("MATH101".into()));
        assert!(!s.add_course("MATH101".into()));
        assert_eq!(s.courses().len(), 1);
    }

    #[test]
    fn test_remove_course_keeps_grade_forget_clears_it() {
        let mut s = Student::new("Bob", "S002");
        let math = CourseId::from("MATH101");
        s.add_course(math.clone());
        s.receive_grade(math.clone(), LetterGrade::B);
        s.mark_attendance(math.clone(), date(1), true);

        assert!(s.remove_course(&math));
        assert!(!s.remove_course(&math));
        assert_eq!(s.grade_for(&math), Some(&LetterGrade::B));
        assert_eq!(s.gpa(), 3.0);

        s.forget_course(&math);
        assert!(s.grades().is_empty());
        assert!(s.attendance().is_empty());
        assert_eq!(s.gpa(), 0.0);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-07-02 ").unwrap(), date(2));
        assert_eq!(
            parse_date("07/02/2024").unwrap_err(),
            SchoolError::InvalidDate("07/02/2024".into())
        );
    }

    #[test]
    fn test_rename() {
        let mut s = Student::new("Alice", "S001");
        s.set_name("Alicia".into());
        assert_eq!(s.name(), "Alicia");
        assert_eq!(s.member_id(), "S001");
    }
}
