//! Gradebook export. Uses the `csv` crate for safe serialization.
//!
//! Format: `Student;ID;Course;Grade;Points` (semicolon-delimited, one row per recorded grade).

use crate::domain::GradebookRow;

/// Convert gradebook rows to a CSV string with a header row.
pub fn gradebook_to_csv(rows: &[GradebookRow]) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["Student", "ID", "Course", "Grade", "Points"])?;

    for row in rows {
        let points = format!("{:.1}", row.points);
        wtr.write_record([
            row.student.as_str(),
            row.student_id.as_str(),
            row.course.as_str(),
            row.grade.as_str(),
            points.as_str(),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(student: &str, course: &str, grade: &str, points: f64) -> GradebookRow {
        GradebookRow {
            student: student.to_string(),
            student_id: "S001".to_string(),
            course: course.to_string(),
            grade: grade.to_string(),
            points,
        }
    }

    #[test]
    fn test_gradebook_to_csv_basic() {
        let csv = gradebook_to_csv(&[row("Alice", "Mathematics", "A", 4.0)]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, ["Student;ID;Course;Grade;Points", "Alice;S001;Mathematics;A;4.0"]);
    }

    #[test]
    fn test_gradebook_to_csv_quotes_delimiters() {
        let csv = gradebook_to_csv(&[row("O'Neil; Jr", "Art", "P", 0.0)]).unwrap();
        assert!(csv.contains("\"O'Neil; Jr\""));
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_gradebook_to_csv_empty() {
        let csv = gradebook_to_csv(&[]).unwrap();
        assert_eq!(csv, "Student;ID;Course;Grade;Points\n");
    }
}
