//! Teacher record: taught courses and the weekly schedule.

use super::ids::{CourseId, TeacherId};
use super::member::{NameDirectory, SchoolMember};
use super::reports::{Report, ScheduleListing, ScheduleSlot, TeacherDetails};
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct Teacher {
    name: String,
    id: TeacherId,
    courses: Vec<CourseId>,
    schedule: IndexMap<CourseId, String>,
}

impl Teacher {
    pub fn new(name: impl Into<String>, id: impl Into<TeacherId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            courses: Vec::new(),
            schedule: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &TeacherId {
        &self.id
    }

    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    /// Course -> time slot. Only taught courses appear here.
    pub fn schedule(&self) -> &IndexMap<CourseId, String> {
        &self.schedule
    }

    pub fn teaches(&self, course: &CourseId) -> bool {
        self.courses.contains(course)
    }

    pub fn view_schedule(&self, directory: &dyn NameDirectory) -> Report {
        Report::Schedule(ScheduleListing {
            teacher: self.name.clone(),
            slots: self
                .schedule
                .iter()
                .map(|(course, slot)| ScheduleSlot {
                    course: directory.course_label(course),
                    slot: slot.clone(),
                })
                .collect(),
        })
    }

    pub(crate) fn add_course(&mut self, course: CourseId) -> bool {
        if self.teaches(&course) {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Returns false (and leaves the schedule alone) for a course not taught.
    pub(crate) fn set_slot(&mut self, course: CourseId, slot: String) -> bool {
        if !self.teaches(&course) {
            return false;
        }
        self.schedule.insert(course, slot);
        true
    }

    pub(crate) fn forget_course(&mut self, course: &CourseId) {
        self.courses.retain(|c| c != course);
        self.schedule.shift_remove(course);
    }
}

impl SchoolMember for Teacher {
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
        Report::TeacherDetails(TeacherDetails {
            name: self.name.clone(),
            id: self.id.to_string(),
            courses: self
                .courses
                .iter()
                .map(|c| directory.course_label(c))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_only_for_taught_courses() {
        let mut t = Teacher::new("Dr. Smith", "T001");
        assert!(!t.set_slot("MATH101".into(), "Monday 10-12".into()));
        assert!(t.schedule().is_empty());

        assert!(t.add_course("MATH101".into()));
        assert!(!t.add_course("MATH101".into()));
        assert!(t.set_slot("MATH101".into(), "Monday 10-12".into()));
        assert!(t.set_slot("MATH101".into(), "Tuesday 8-10".into()));
        assert_eq!(t.schedule().len(), 1);
        assert_eq!(t.schedule()[&CourseId::from("MATH101")], "Tuesday 8-10");
    }

    #[test]
    fn test_forget_course_clears_schedule() {
        let mut t = Teacher::new("Dr. Smith", "T001");
        let math = CourseId::from("MATH101");
        t.add_course(math.clone());
        t.set_slot(math.clone(), "Monday 10-12".into());
        t.forget_course(&math);
        assert!(t.courses().is_empty());
        assert!(t.schedule().is_empty());
    }
}
