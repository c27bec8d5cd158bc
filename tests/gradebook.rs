//! Integration tests for gradebook operations

use gradebook::{Gradebook, GradebookError, Session};

fn book_with(names: &[(&str, i32)]) -> Gradebook {
    let mut book = Gradebook::new();
    for (name, id) in names {
        book.add_student(name, *id).expect("Failed to add student");
    }
    book
}

#[test]
fn test_end_to_end_example() {
    let mut book = Gradebook::new();
    book.add_student("Alice", 1).unwrap();
    book.add_grade(1, "Math", 80).unwrap();
    book.add_grade(1, "CS", 100).unwrap();

    assert_eq!(book.format_student(1).unwrap(), "Alice 1: Math 80, CS 100\n");

    let (average, name) = book.average_for(1).unwrap();
    assert!((average - 90.0).abs() < f64::EPSILON);
    assert_eq!(name, "Alice");
}

#[test]
fn test_duplicate_id_is_rejected_without_side_effects() {
    let mut book = book_with(&[("Alice", 1)]);
    book.add_grade(1, "Math", 75).unwrap();
    let before = book.format_all();

    assert_eq!(
        book.add_student("Bob", 1),
        Err(GradebookError::DuplicateId(1))
    );
    assert_eq!(book.len(), 1);
    assert_eq!(book.format_all(), before);
}

#[test]
fn test_duplicate_course_is_rejected() {
    let mut book = book_with(&[("Alice", 1)]);
    book.add_grade(1, "Math", 75).unwrap();

    let err = book.add_grade(1, "Math", 90).unwrap_err();
    assert!(matches!(err, GradebookError::DuplicateCourse { id: 1, .. }));
    assert_eq!(book.student(1).unwrap().courses().len(), 1);

    // Comparison is case-sensitive
    assert!(book.add_grade(1, "math", 90).is_ok());
}

#[test]
fn test_grade_bounds() {
    let mut book = book_with(&[("Alice", 1)]);

    assert_eq!(
        book.add_grade(1, "Below", -1),
        Err(GradebookError::InvalidGrade(-1))
    );
    assert_eq!(
        book.add_grade(1, "Above", 101),
        Err(GradebookError::InvalidGrade(101))
    );
    assert!(book.add_grade(1, "Zero", 0).is_ok());
    assert!(book.add_grade(1, "Full", 100).is_ok());
    assert_eq!(book.format_student(1).unwrap(), "Alice 1: Zero 0, Full 100\n");
}

#[test]
fn test_average_correctness() {
    let mut book = book_with(&[("Alice", 1), ("Bob", 2)]);
    for (course, grade) in [("Math", 80), ("Physics", 90), ("Bio", 100)] {
        book.add_grade(1, course, grade).unwrap();
    }

    let (average, _) = book.average_for(1).unwrap();
    assert!((average - 90.0).abs() < f64::EPSILON);

    let (empty_average, name) = book.average_for(2).unwrap();
    assert!(empty_average.abs() < f64::EPSILON);
    assert!(!empty_average.is_nan());
    assert_eq!(name, "Bob");
}

#[test]
fn test_course_order_is_chronological() {
    let mut book = book_with(&[("Alice", 1)]);
    book.add_grade(1, "Math", 81).unwrap();
    book.add_grade(1, "Physics", 82).unwrap();
    book.add_grade(1, "Bio", 83).unwrap();

    assert_eq!(
        book.format_student(1).unwrap(),
        "Alice 1: Math 81, Physics 82, Bio 83\n"
    );
}

#[test]
fn test_student_order_is_chronological() {
    let mut book = book_with(&[("Alice", 30), ("Bob", 10), ("Carol", 20)]);
    book.add_grade(10, "Art", 70).unwrap();

    assert_eq!(
        book.format_all(),
        "Alice 30:\nBob 10: Art 70\nCarol 20:\n"
    );
    let ids: Vec<i32> = book.students().map(|s| s.id()).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn test_not_found_has_no_side_effects() {
    let mut book = book_with(&[("Alice", 1)]);
    let before = book.format_all();

    assert_eq!(
        book.add_grade(7, "Math", 50),
        Err(GradebookError::StudentNotFound(7))
    );
    assert_eq!(book.average_for(7), Err(GradebookError::StudentNotFound(7)));
    assert_eq!(
        book.format_student(7),
        Err(GradebookError::StudentNotFound(7))
    );
    assert_eq!(book.format_all(), before);
}

#[test]
fn test_empty_gradebook_formats_to_nothing() {
    let book = Gradebook::new();
    assert_eq!(book.format_all(), "");

    let mut out = Vec::new();
    book.write_all(&mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_write_student_streams_line() {
    let mut book = book_with(&[("Dana", 4)]);
    book.add_grade(4, "Chem", 64).unwrap();

    let mut out = Vec::new();
    book.write_student(4, &mut out).unwrap();
    assert_eq!(out, b"Dana 4: Chem 64\n");
}

#[test]
fn test_destroyed_session_reports_invalid_argument() {
    let mut session = Session::new();
    session.add_student("Alice", 1).unwrap();
    session.destroy();

    assert_eq!(
        session.add_student("Alice", 1),
        Err(GradebookError::InvalidArgument)
    );
    assert_eq!(session.average_for(1), Err(GradebookError::InvalidArgument));
    assert_eq!(session.format_all(), Err(GradebookError::InvalidArgument));
}
