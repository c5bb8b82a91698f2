use chrono::NaiveDate;
use hrnet_core::db::open_db_in_memory;
use hrnet_core::{
    CreateEmployeeForm, Department, EmployeeDraft, EmployeeField, EmployeeStore,
    EmployeeValidationError, FormError, SqliteKvRepository,
};

fn fill(form: &mut CreateEmployeeForm) {
    form.set_text(EmployeeField::FirstName, "Tom").unwrap();
    form.set_text(EmployeeField::LastName, "Hanks").unwrap();
    form.set_date(EmployeeField::DateOfBirth, NaiveDate::from_ymd_opt(1956, 7, 9))
        .unwrap();
    form.set_date(EmployeeField::StartDate, NaiveDate::from_ymd_opt(2024, 5, 6))
        .unwrap();
    form.set_text(EmployeeField::Street, "1 Studio Rd").unwrap();
    form.set_text(EmployeeField::City, "Concord").unwrap();
    form.select_state("ca").unwrap();
    form.set_text(EmployeeField::ZipCode, "94520").unwrap();
    form.select_department(Department::Marketing);
}

#[test]
fn submit_appends_record_and_resets_form() {
    let conn = open_db_in_memory().unwrap();
    let mut store = EmployeeStore::load(SqliteKvRepository::new(&conn));
    let mut form = CreateEmployeeForm::new();
    fill(&mut form);
    let submitted = form.draft().clone();

    let id = form.submit(&mut store).unwrap();

    assert_eq!(store.len(), 1);
    let stored = &store.list_employees()[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.to_draft(), submitted);
    assert_eq!(stored.state, "CA");
    assert_eq!(form.draft(), &EmployeeDraft::default());
}

#[test]
fn submit_with_missing_fields_appends_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut store = EmployeeStore::load(SqliteKvRepository::new(&conn));
    let mut form = CreateEmployeeForm::new();
    form.set_text(EmployeeField::FirstName, "Solo").unwrap();

    let err = form.submit(&mut store).unwrap_err();

    match err {
        FormError::Validation(EmployeeValidationError::MissingFields(fields)) => {
            assert!(fields.contains(&EmployeeField::LastName));
            assert!(fields.contains(&EmployeeField::ZipCode));
            assert!(!fields.contains(&EmployeeField::FirstName));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.is_empty());
    assert_eq!(form.draft().first_name, "Solo");
}

#[test]
fn consecutive_submits_get_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let mut store = EmployeeStore::load(SqliteKvRepository::new(&conn));
    let mut form = CreateEmployeeForm::new();

    fill(&mut form);
    let first = form.submit(&mut store).unwrap();
    fill(&mut form);
    let second = form.submit(&mut store).unwrap();

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
}
