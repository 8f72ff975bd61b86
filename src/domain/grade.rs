//! Letter grades and their grade points.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A letter grade as recorded by a teacher. Unknown letters are kept verbatim
/// and count as zero points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
    Other(String),
}

impl LetterGrade {
    pub fn points(&self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F | Self::Other(_) => 0.0,
        }
    }
}

impl FromStr for LetterGrade {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D" => Self::D,
            "F" => Self::F,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<&str> for LetterGrade {
    fn from(s: &str) -> Self {
        match s.parse::<Self>() {
            Ok(g) => g,
            Err(never) => match never {},
        }
    }
}

impl From<String> for LetterGrade {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<LetterGrade> for String {
    fn from(g: LetterGrade) -> Self {
        g.to_string()
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
            Self::C => f.write_str("C"),
            Self::D => f.write_str("D"),
            Self::F => f.write_str("F"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// Equal-weight mean of grade points; 0.0 when there are no grades.
pub fn grade_point_average<'a>(grades: impl IntoIterator<Item = &'a LetterGrade>) -> f64 {
    let (count, total) = grades
        .into_iter()
        .fold((0usize, 0.0f64), |(n, sum), g| (n + 1, sum + g.points()));
    if count == 0 { 0.0 } else { total / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_mapping() {
        assert_eq!(LetterGrade::from("A").points(), 4.0);
        assert_eq!(LetterGrade::from("B").points(), 3.0);
        assert_eq!(LetterGrade::from("C").points(), 2.0);
        assert_eq!(LetterGrade::from("D").points(), 1.0);
        assert_eq!(LetterGrade::from("F").points(), 0.0);
        assert_eq!(LetterGrade::from("E+").points(), 0.0);
    }

    #[test]
    fn test_lowercase_is_not_a_letter() {
        let g = LetterGrade::from("a");
        assert_eq!(g, LetterGrade::Other("a".into()));
        assert_eq!(g.points(), 0.0);
        assert_eq!(g.to_string(), "a");
    }

    #[test]
    fn test_average() {
        assert_eq!(grade_point_average(&[] as &[LetterGrade]), 0.0);
        let grades = [LetterGrade::A, LetterGrade::B];
        assert_eq!(grade_point_average(&grades), 3.5);
        let grades = [LetterGrade::A, LetterGrade::Other("P".into())];
        assert_eq!(grade_point_average(&grades), 2.0);
    }

    #[test]
    fn test_serde_as_string() {
        assert_eq!(serde_json::to_string(&LetterGrade::B).unwrap(), "\"B\"");
        let g: LetterGrade = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(g, LetterGrade::C);
    }
}
