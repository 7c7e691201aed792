use libris_core::{
    CatalogError, CatalogRepository, CatalogService, InMemoryCatalogRepository, Member,
    MemberKind, RecordValidationError, SeedOutcome, FIRST_MEMBER_ID,
};

fn service() -> CatalogService<InMemoryCatalogRepository> {
    CatalogService::new(InMemoryCatalogRepository::new())
}

#[test]
fn issuing_twice_fails_with_already_issued() {
    let mut catalog = service();
    catalog.add_book(1, "A", "X", 10).unwrap();
    let member_id = catalog.add_member("Bob");

    let receipt = catalog.issue_book(1, member_id).unwrap();
    assert_eq!(receipt.title, "A");
    assert_eq!(receipt.member_name, "Bob");
    assert_eq!(receipt.loan_days, 14);
    assert!(catalog.find_item(1).unwrap().issued);

    let err = catalog.issue_book(1, member_id).unwrap_err();
    assert!(matches!(err, CatalogError::AlreadyIssued { item_id: 1, .. }));
    assert!(catalog.find_item(1).unwrap().issued);
}

#[test]
fn issue_reports_missing_item_before_missing_member() {
    let mut catalog = service();

    let err = catalog.issue_book(404, 9999).unwrap_err();
    assert_eq!(err, CatalogError::ItemNotFound(404));
}

#[test]
fn issue_with_unknown_member_leaves_item_available() {
    let mut catalog = service();
    catalog.add_book(1, "A", "X", 10).unwrap();

    let err = catalog.issue_book(1, 9999).unwrap_err();
    assert_eq!(err, CatalogError::MemberNotFound(9999));
    assert!(catalog.find_item(1).unwrap().is_available());
}

#[test]
fn issue_book_for_uses_requested_loan_period() {
    let mut catalog = CatalogService::with_loan_days(InMemoryCatalogRepository::new(), 7);
    catalog.add_book(3, "C", "Z", 30).unwrap();
    let member_id = catalog.add_student("Ana", "STU-1");

    assert_eq!(catalog.issue_book(3, member_id).unwrap().loan_days, 7);

    catalog.add_book(4, "D", "Z", 40).unwrap();
    assert_eq!(catalog.issue_book_for(4, member_id, 30).unwrap().loan_days, 30);
}

#[test]
fn lookups_of_unknown_ids_fail_with_not_found() {
    let catalog = service();

    let item_err = catalog.find_item(1).unwrap_err();
    let member_err = catalog.find_member(FIRST_MEMBER_ID).unwrap_err();
    assert!(item_err.is_not_found());
    assert!(member_err.is_not_found());
    assert_eq!(member_err, CatalogError::MemberNotFound(FIRST_MEMBER_ID));
}

#[test]
fn empty_catalog_lists_are_empty_not_errors() {
    let catalog = service();
    assert!(catalog.list_items().is_empty());
    assert!(catalog.list_members().is_empty());
}

#[test]
fn lists_keep_insertion_order() {
    let mut catalog = service();
    catalog.add_book(30, "third id first", "a", 1).unwrap();
    catalog.add_book(10, "first id second", "b", 2).unwrap();
    catalog.add_member("Zed");
    catalog.add_student("Amy", "S-1");

    let item_ids: Vec<_> = catalog.list_items().iter().map(|item| item.id).collect();
    assert_eq!(item_ids, vec![30, 10]);
    let names: Vec<_> = catalog
        .list_members()
        .iter()
        .map(|member| member.name.as_str())
        .collect();
    assert_eq!(names, vec!["Zed", "Amy"]);
}

#[test]
fn member_ids_count_up_from_first_member_id() {
    let mut catalog = service();
    let first = catalog.add_member("Bob");
    let second = catalog.add_student("Ana", "STU-7");

    assert_eq!(first, FIRST_MEMBER_ID);
    assert_eq!(second, FIRST_MEMBER_ID + 1);
    assert_eq!(
        catalog.find_member(second).unwrap(),
        &Member::student(second, "Ana", "STU-7")
    );
}

#[test]
fn duplicate_item_ids_are_accepted_and_first_wins() {
    let mut catalog = service();
    catalog.add_book(5, "original", "a", 1).unwrap();
    catalog.add_book(5, "shadowed", "b", 2).unwrap();

    assert_eq!(catalog.list_items().len(), 2);
    assert_eq!(catalog.find_item(5).unwrap().title, "original");
}

#[test]
fn add_book_rejects_zero_pages() {
    let mut catalog = service();
    let err = catalog.add_book(8, "Blank", "None", 0).unwrap_err();

    assert_eq!(
        err,
        CatalogError::Validation(RecordValidationError::ZeroPageCount { item_id: 8 })
    );
    assert!(catalog.list_items().is_empty());
}

#[test]
fn seed_defaults_fills_only_empty_collections() {
    let mut catalog = service();
    catalog.add_member("Existing");

    let outcome = catalog.seed_defaults();
    assert_eq!(outcome.items_added, 3);
    assert_eq!(outcome.members_added, 0);

    let titles: Vec<_> = catalog
        .list_items()
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["The C++ Book", "Another C++ Book", "C++ for Dummies"]);
    assert_eq!(catalog.list_members().len(), 1);

    let again = catalog.seed_defaults();
    assert_eq!(again, SeedOutcome::default());
}

#[test]
fn seed_defaults_adds_default_member_with_counter_id() {
    let mut catalog = service();
    catalog.seed_defaults();

    let member = &catalog.list_members()[0];
    assert_eq!(member.name, "Default User");
    assert_eq!(member.id, FIRST_MEMBER_ID);
    assert_eq!(member.kind, MemberKind::Standard);
}

#[test]
fn repository_is_reachable_through_service() {
    let mut catalog = service();
    catalog.add_member("Bob");
    assert_eq!(catalog.repo().next_member_id(), FIRST_MEMBER_ID + 1);

    catalog.add_student("Ana", "STU-1");
    let repo = catalog.into_repo();
    assert_eq!(repo.list_members().len(), 2);
    assert_eq!(repo.next_member_id(), FIRST_MEMBER_ID + 2);
}
