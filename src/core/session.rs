//! A holder for an optional gradebook
//!
//! Models the create/destroy lifecycle explicitly: once the gradebook is
//! destroyed, every operation fails with [`GradebookError::InvalidArgument`]
//! until a new one is created.

use crate::core::error::{GradebookError, Result};
use crate::core::gradebook::Gradebook;
use crate::{debug, warn};

/// Owns at most one live [`Gradebook`]
#[derive(Debug, Default)]
pub struct Session {
    gradebook: Option<Gradebook>,
}

impl Session {
    /// Start a session with a freshly created gradebook
    #[must_use]
    pub fn new() -> Self {
        Self {
            gradebook: Some(Gradebook::new()),
        }
    }

    /// Start a session without a gradebook
    #[must_use]
    pub const fn empty() -> Self {
        Self { gradebook: None }
    }

    /// Whether a gradebook is currently live
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.gradebook.is_some()
    }

    /// The live gradebook, if any
    #[must_use]
    pub const fn gradebook(&self) -> Option<&Gradebook> {
        self.gradebook.as_ref()
    }

    /// Create a new empty gradebook, replacing any current one
    pub fn create(&mut self) {
        if let Some(old) = self.gradebook.replace(Gradebook::new()) {
            warn!(
                "Replacing an existing gradebook with {} students",
                old.len()
            );
        }
        debug!("Created gradebook");
    }

    /// Destroy the current gradebook; no-op when none is live
    pub fn destroy(&mut self) {
        if self.gradebook.take().is_some() {
            debug!("Destroyed gradebook");
        }
    }

    /// See [`Gradebook::add_student`]
    ///
    /// # Errors
    /// [`GradebookError::InvalidArgument`] without a live gradebook, otherwise
    /// whatever the gradebook reports.
    pub fn add_student(&mut self, name: &str, id: i32) -> Result<()> {
        self.live_mut()?.add_student(name, id)
    }

    /// See [`Gradebook::add_grade`]
    ///
    /// # Errors
    /// [`GradebookError::InvalidArgument`] without a live gradebook, otherwise
    /// whatever the gradebook reports.
    pub fn add_grade(&mut self, id: i32, course_name: &str, grade: i32) -> Result<()> {
        self.live_mut()?.add_grade(id, course_name, grade)
    }

    /// See [`Gradebook::average_for`]
    ///
    /// # Errors
    /// [`GradebookError::InvalidArgument`] without a live gradebook, otherwise
    /// whatever the gradebook reports. No name is produced on failure.
    pub fn average_for(&self, id: i32) -> Result<(f64, String)> {
        self.live()?.average_for(id)
    }

    /// See [`Gradebook::format_student`]
    ///
    /// # Errors
    /// [`GradebookError::InvalidArgument`] without a live gradebook, otherwise
    /// whatever the gradebook reports.
    pub fn format_student(&self, id: i32) -> Result<String> {
        self.live()?.format_student(id)
    }

    /// See [`Gradebook::format_all`]
    ///
    /// # Errors
    /// [`GradebookError::InvalidArgument`] without a live gradebook
    pub fn format_all(&self) -> Result<String> {
        Ok(self.live()?.format_all())
    }

    fn live(&self) -> Result<&Gradebook> {
        self.gradebook.as_ref().ok_or(GradebookError::InvalidArgument)
    }

    fn live_mut(&mut self) -> Result<&mut Gradebook> {
        self.gradebook.as_mut().ok_or(GradebookError::InvalidArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_active() {
        let session = Session::new();
        assert!(session.is_active());
        assert_eq!(session.format_all(), Ok(String::new()));
    }

    #[test]
    fn test_empty_session_rejects_everything() {
        let mut session = Session::empty();
        assert_eq!(
            session.add_student("Alice", 1),
            Err(GradebookError::InvalidArgument)
        );
        assert_eq!(
            session.add_grade(1, "Math", 90),
            Err(GradebookError::InvalidArgument)
        );
        assert_eq!(session.average_for(1), Err(GradebookError::InvalidArgument));
        assert_eq!(
            session.format_student(1),
            Err(GradebookError::InvalidArgument)
        );
        assert_eq!(session.format_all(), Err(GradebookError::InvalidArgument));
    }

    #[test]
    fn test_destroy_then_create() {
        let mut session = Session::new();
        session.add_student("Alice", 1).unwrap();
        session.destroy();
        assert!(!session.is_active());
        session.destroy();

        session.create();
        assert!(session.gradebook().unwrap().is_empty());
        assert!(session.add_student("Alice", 1).is_ok());
    }

    #[test]
    fn test_create_replaces_existing() {
        let mut session = Session::new();
        session.add_student("Alice", 1).unwrap();
        session.create();
        assert_eq!(session.gradebook().map(Gradebook::len), Some(0));
    }
}
