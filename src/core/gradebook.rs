//! The gradebook: students, their course grades, averages and reports

use crate::core::error::{GradebookError, ReportError, Result};
use crate::core::models::{CourseRecord, Student};
use crate::debug;
use std::collections::HashMap;
use std::io::Write;

/// Owns every enrolled student and, through them, every course record
///
/// Students are stored in insertion order; all enumeration (reports,
/// [`Gradebook::students`]) is oldest first. The id index only speeds up
/// lookups and never decides output order.
#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    students: Vec<Student>,

    /// Student id -> position in `students`
    index: HashMap<i32, usize>,
}

impl Gradebook {
    /// Create an empty gradebook
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of enrolled students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether no student is enrolled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Whether a student with `id` is enrolled
    #[must_use]
    pub fn contains(&self, id: i32) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a student by id
    #[must_use]
    pub fn student(&self, id: i32) -> Option<&Student> {
        self.index.get(&id).map(|&pos| &self.students[pos])
    }

    /// Students in the order they were added
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Release every student and course record, leaving an empty gradebook
    pub fn clear(&mut self) {
        debug!("Clearing gradebook with {} students", self.students.len());
        self.students.clear();
        self.index.clear();
    }

    /// Enroll a new student with no courses
    ///
    /// # Errors
    /// Returns [`GradebookError::DuplicateId`] if `id` is already enrolled;
    /// the existing student is left untouched.
    pub fn add_student(&mut self, name: &str, id: i32) -> Result<()> {
        if self.contains(id) {
            return Err(GradebookError::DuplicateId(id));
        }
        self.index.insert(id, self.students.len());
        self.students.push(Student::new(name, id));
        debug!("Added student {name} ({id})");
        Ok(())
    }

    /// Record a grade for a course of an enrolled student
    ///
    /// The grade is validated before the student is looked up.
    ///
    /// # Errors
    /// - [`GradebookError::InvalidGrade`] if `grade` is outside `[0, 100]`
    /// - [`GradebookError::StudentNotFound`] if no student has `id`
    /// - [`GradebookError::DuplicateCourse`] if the student already has `course_name`
    pub fn add_grade(&mut self, id: i32, course_name: &str, grade: i32) -> Result<()> {
        let record = CourseRecord::new(course_name, grade)?;
        let student = self.student_mut(id)?;
        if student.has_course(course_name) {
            return Err(GradebookError::DuplicateCourse {
                id,
                course: course_name.to_string(),
            });
        }
        student.push_course(record);
        debug!("Added grade {grade} in {course_name} for student {id}");
        Ok(())
    }

    /// Average grade of a student together with an owned copy of the name
    ///
    /// A student with no courses averages `0.0`.
    ///
    /// # Errors
    /// Returns [`GradebookError::StudentNotFound`] if no student has `id`
    pub fn average_for(&self, id: i32) -> Result<(f64, String)> {
        let student = self.require(id)?;
        Ok((student.average(), student.name().to_string()))
    }

    /// Format one student as `NAME ID: COURSE1 GRADE1, ...` plus a newline
    ///
    /// # Errors
    /// Returns [`GradebookError::StudentNotFound`] if no student has `id`
    pub fn format_student(&self, id: i32) -> Result<String> {
        Ok(format!("{}\n", self.require(id)?))
    }

    /// Format every student, one line each, oldest first
    ///
    /// An empty gradebook yields an empty string.
    #[must_use]
    pub fn format_all(&self) -> String {
        self.students.iter().map(|s| format!("{s}\n")).collect()
    }

    /// Stream [`Gradebook::format_student`] output to `out`
    ///
    /// # Errors
    /// Returns [`ReportError::Gradebook`] if the student is unknown (nothing
    /// is written) or [`ReportError::Io`] if the writer fails.
    pub fn write_student<W: Write>(
        &self,
        id: i32,
        out: &mut W,
    ) -> std::result::Result<(), ReportError> {
        let student = self.require(id)?;
        writeln!(out, "{student}")?;
        Ok(())
    }

    /// Stream [`Gradebook::format_all`] output to `out`
    ///
    /// # Errors
    /// Returns [`ReportError::Io`] if the writer fails
    pub fn write_all<W: Write>(&self, out: &mut W) -> std::result::Result<(), ReportError> {
        for student in &self.students {
            writeln!(out, "{student}")?;
        }
        Ok(())
    }

    fn require(&self, id: i32) -> Result<&Student> {
        self.student(id).ok_or(GradebookError::StudentNotFound(id))
    }

    fn student_mut(&mut self, id: i32) -> Result<&mut Student> {
        let pos = *self
            .index
            .get(&id)
            .ok_or(GradebookError::StudentNotFound(id))?;
        Ok(&mut self.students[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Gradebook {
        let mut book = Gradebook::new();
        book.add_student("Alice", 1).unwrap();
        book.add_grade(1, "Math", 80).unwrap();
        book.add_grade(1, "CS", 100).unwrap();
        book
    }

    #[test]
    fn test_new_gradebook_is_empty() {
        let book = Gradebook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert_eq!(book.format_all(), "");
    }

    #[test]
    fn test_end_to_end_example() {
        let book = sample();
        assert_eq!(book.format_student(1).unwrap(), "Alice 1: Math 80, CS 100\n");
        let (avg, name) = book.average_for(1).unwrap();
        assert!((avg - 90.0).abs() < f64::EPSILON);
        assert_eq!(name, "Alice");
    }

    #[test]
    fn test_duplicate_id_leaves_first_student_intact() {
        let mut book = sample();
        assert_eq!(
            book.add_student("Impostor", 1),
            Err(GradebookError::DuplicateId(1))
        );
        assert_eq!(book.len(), 1);
        assert_eq!(book.student(1).unwrap().name(), "Alice");
        assert_eq!(book.student(1).unwrap().courses().len(), 2);
    }

    #[test]
    fn test_duplicate_course_rejected() {
        let mut book = sample();
        assert_eq!(
            book.add_grade(1, "Math", 95),
            Err(GradebookError::DuplicateCourse {
                id: 1,
                course: "Math".to_string()
            })
        );
        assert_eq!(book.student(1).unwrap().courses().len(), 2);
        assert_eq!(book.student(1).unwrap().courses()[0].grade(), 80);
    }

    #[test]
    fn test_same_course_allowed_for_different_students() {
        let mut book = sample();
        book.add_student("Bob", 2).unwrap();
        assert!(book.add_grade(2, "Math", 70).is_ok());
    }

    #[test]
    fn test_grade_checked_before_student_lookup() {
        let mut book = Gradebook::new();
        assert_eq!(
            book.add_grade(99, "Math", 101),
            Err(GradebookError::InvalidGrade(101))
        );
    }

    #[test]
    fn test_not_found() {
        let mut book = sample();
        assert_eq!(
            book.add_grade(2, "Math", 50),
            Err(GradebookError::StudentNotFound(2))
        );
        assert_eq!(book.average_for(2), Err(GradebookError::StudentNotFound(2)));
        assert_eq!(
            book.format_student(2),
            Err(GradebookError::StudentNotFound(2))
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_write_student_unknown_writes_nothing() {
        let book = sample();
        let mut out = Vec::new();
        let err = book.write_student(5, &mut out).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Gradebook(GradebookError::StudentNotFound(5))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_all_matches_format_all() {
        let mut book = sample();
        book.add_student("Bob", 2).unwrap();
        let mut out = Vec::new();
        book.write_all(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), book.format_all());
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut book = sample();
        book.clear();
        assert!(book.is_empty());
        assert!(!book.contains(1));
        assert!(book.add_student("Alice", 1).is_ok());
    }
}
