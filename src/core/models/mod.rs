//! Data models for the gradebook

pub mod course;
pub mod student;

pub use course::CourseRecord;
pub use student::Student;
