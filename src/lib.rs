//! In-memory student gradebook
//!
//! Students are identified by a unique numeric id and own an ordered list of
//! `(course, grade)` records. The library supports enrollment, grading,
//! per-student averages and a line-oriented report format, plus a small
//! command language used by the `gradebook` CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::error::{GradebookError, ReportError, Result};
pub use crate::core::get_version;
pub use crate::core::gradebook::Gradebook;
pub use crate::core::models::{CourseRecord, Student};
pub use crate::core::session::Session;
