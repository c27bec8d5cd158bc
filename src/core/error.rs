//! Error taxonomy for gradebook operations

/// Convenience alias for results produced by gradebook operations
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Every way a gradebook operation can be rejected.
///
/// These are precondition violations, reported to the immediate caller. An
/// operation that returns one of these has not mutated anything.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GradebookError {
    /// The operation was invoked without a live gradebook
    #[error("invalid argument: no gradebook is available")]
    InvalidArgument,

    /// A student with this id is already enrolled
    #[error("a student with id {0} already exists")]
    DuplicateId(i32),

    /// The student already has a grade for this course
    #[error("student {id} already has a grade for course '{course}'")]
    DuplicateCourse {
        /// Id of the student that owns the course
        id: i32,
        /// Name of the duplicated course
        course: String,
    },

    /// Grades must lie in `[0, 100]`
    #[error("grade {0} is outside the range 0-100")]
    InvalidGrade(i32),

    /// No student matches the requested id
    #[error("no student with id {0}")]
    StudentNotFound(i32),
}

/// Failure while streaming a report to a writer
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// The requested data could not be produced
    #[error(transparent)]
    Gradebook(#[from] GradebookError),

    /// The writer rejected the output
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
