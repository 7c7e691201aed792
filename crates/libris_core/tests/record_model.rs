use libris_core::{Item, ItemKind, Member, MemberKind, RecordValidationError};

#[test]
fn book_starts_available() {
    let book = Item::book(101, "The C++ Book", "Some Guy", 100);

    assert_eq!(book.id, 101);
    assert_eq!(book.title, "The C++ Book");
    assert!(!book.issued);
    assert!(book.is_available());
    assert_eq!(
        book.kind,
        ItemKind::Book {
            author: "Some Guy".to_string(),
            page_count: 100,
        }
    );
}

#[test]
fn mark_issued_is_sticky() {
    let mut book = Item::book(1, "A", "X", 10);
    book.mark_issued();
    book.mark_issued();

    assert!(book.issued);
    assert!(!book.is_available());
}

#[test]
fn validate_rejects_zero_pages() {
    let book = Item::book(9, "Empty", "Nobody", 0);
    assert_eq!(
        book.validate().unwrap_err(),
        RecordValidationError::ZeroPageCount { item_id: 9 }
    );
}

#[test]
fn student_exposes_student_id_and_standard_does_not() {
    let student = Member::student(1002, "Ana", "STU-42");
    let standard = Member::standard(1003, "Bob");

    assert_eq!(student.student_id(), Some("STU-42"));
    assert_eq!(standard.student_id(), None);
    assert_eq!(standard.kind, MemberKind::Standard);
}
