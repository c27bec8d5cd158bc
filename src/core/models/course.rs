//! Course record model

use crate::core::error::{GradebookError, Result};
use std::fmt;

/// Lowest accepted grade
pub const MIN_GRADE: i32 = 0;

/// Highest accepted grade
pub const MAX_GRADE: i32 = 100;

/// A single graded course belonging to one student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Course name (e.g., "Math", "Physics")
    name: String,

    /// Grade in `[0, 100]`
    grade: u8,
}

impl CourseRecord {
    /// Create a new course record
    ///
    /// # Arguments
    /// * `name` - Course name, compared exactly and case-sensitively
    /// * `grade` - Grade, must be within `[0, 100]`
    ///
    /// # Errors
    /// Returns [`GradebookError::InvalidGrade`] if `grade` is out of range
    pub fn new(name: impl Into<String>, grade: i32) -> Result<Self> {
        let grade = u8::try_from(grade)
            .ok()
            .filter(|g| i32::from(*g) <= MAX_GRADE)
            .ok_or(GradebookError::InvalidGrade(grade))?;
        Ok(Self {
            name: name.into(),
            grade,
        })
    }

    /// Course name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grade for this course
    #[must_use]
    pub const fn grade(&self) -> u8 {
        self.grade
    }
}

impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_record_creation() {
        let record = CourseRecord::new("Discrete Structures", 88).unwrap();
        assert_eq!(record.name(), "Discrete Structures");
        assert_eq!(record.grade(), 88);
    }

    #[test]
    fn test_grade_bounds_are_inclusive() {
        assert!(CourseRecord::new("Low", 0).is_ok());
        assert!(CourseRecord::new("High", 100).is_ok());
        assert_eq!(
            CourseRecord::new("Below", -1),
            Err(GradebookError::InvalidGrade(-1))
        );
        assert_eq!(
            CourseRecord::new("Above", 101),
            Err(GradebookError::InvalidGrade(101))
        );
        assert_eq!(
            CourseRecord::new("Wraps", 256),
            Err(GradebookError::InvalidGrade(256))
        );
        assert_eq!(
            CourseRecord::new("Floor", MIN_GRADE).map(|c| c.grade()),
            Ok(0)
        );
    }

    #[test]
    fn test_display() {
        let record = CourseRecord::new("CS", 100).unwrap();
        assert_eq!(record.to_string(), "CS 100");
    }
}
