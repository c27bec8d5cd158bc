//! Student model

use super::CourseRecord;
use std::fmt;

/// A uniquely identified learner owning its course grades
///
/// Courses are kept in chronological insertion order, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: i32,
    name: String,
    courses: Vec<CourseRecord>,
}

impl Student {
    /// Create a student with no courses
    ///
    /// # Arguments
    /// * `name` - Student name
    /// * `id` - Caller-supplied numeric id
    #[must_use]
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Student id
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    /// Student name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Courses in the order they were added
    #[must_use]
    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Whether a course with exactly this name is already recorded
    #[must_use]
    pub fn has_course(&self, course_name: &str) -> bool {
        self.courses.iter().any(|course| course.name() == course_name)
    }

    /// Arithmetic mean of all grades, or `0.0` with no courses
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.courses.is_empty() {
            return 0.0;
        }
        let total: u32 = self.courses.iter().map(|c| u32::from(c.grade())).sum();
        f64::from(total) / self.courses.len() as f64
    }

    /// Append a course; uniqueness is checked by the owning gradebook
    pub(crate) fn push_course(&mut self, course: CourseRecord) {
        self.courses.push(course);
    }
}

/// Renders `NAME ID: COURSE1 GRADE1, COURSE2 GRADE2` without a trailing newline
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:", self.name, self.id)?;
        for (idx, course) in self.courses.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, " {course}")?;
        }
        Ok(())
    }
}
