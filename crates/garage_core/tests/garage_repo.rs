use garage_core::db::open_db_in_memory;
use garage_core::{GarageRepository, NewRepair, RepoError, SqliteGarageRepository};

#[test]
fn insert_then_find_by_car_number() {
    let store = open_db_in_memory().unwrap();
    let repo = SqliteGarageRepository::new(&store);

    let created = repo
        .insert(&NewRepair::new("42", "Oil leak", "555-0042"), false)
        .unwrap();
    assert_eq!(created.id, 1);

    let loaded = repo.find_by_car_number("42").unwrap().unwrap();
    assert_eq!(loaded, created);
    assert!(!loaded.fixed);
}

#[test]
fn find_missing_returns_none() {
    let store = open_db_in_memory().unwrap();
    let repo = SqliteGarageRepository::new(&store);
    assert!(repo.find_by_car_number("nope").unwrap().is_none());
}

#[test]
fn duplicate_insert_fails_and_leaves_table_unchanged() {
    let store = open_db_in_memory().unwrap();
    let repo = SqliteGarageRepository::new(&store);
    repo.insert(&NewRepair::new("42", "Oil leak", "555-0042"), false)
        .unwrap();

    let err = repo
        .insert(&NewRepair::new("42", "Different", "555-0000"), true)
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(ref number) if number == "42"));

    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].problem, "Oil leak");
    assert!(!all[0].fixed);
}

#[test]
fn set_fixed_and_delete_report_not_found_for_absent_cars() {
    let store = open_db_in_memory().unwrap();
    let repo = SqliteGarageRepository::new(&store);

    assert!(matches!(
        repo.set_fixed("missing", true).unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        repo.delete_by_car_number("missing").unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn list_waiting_returns_only_unfixed_rows_in_insertion_order() {
    let store = open_db_in_memory().unwrap();
    let repo = SqliteGarageRepository::new(&store);
    repo.insert(&NewRepair::new("b", "second", "2"), false).unwrap();
    repo.insert(&NewRepair::new("x", "done", "9"), true).unwrap();
    repo.insert(&NewRepair::new("a", "third", "3"), false).unwrap();

    let waiting: Vec<String> = repo
        .list_waiting()
        .unwrap()
        .into_iter()
        .map(|record| record.car_number)
        .collect();
    assert_eq!(waiting, vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn clear_removes_every_row_and_recreate_is_idempotent() {
    let store = open_db_in_memory().unwrap();
    let repo = SqliteGarageRepository::new(&store);
    repo.insert(&NewRepair::new("1", "p", "t"), false).unwrap();
    repo.insert(&NewRepair::new("2", "p", "t"), true).unwrap();

    repo.recreate_table().unwrap();
    assert_eq!(repo.count().unwrap(), 2);
    assert_eq!(repo.clear().unwrap(), 2);
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn invalid_fixed_value_is_rejected_on_read() {
    let store = open_db_in_memory().unwrap();
    store
        .execute(
            "INSERT INTO garage (car_number, car_problem, fixed, owner_ph) VALUES ('7', 'p', 5, 't');",
            [],
        )
        .unwrap();
    let repo = SqliteGarageRepository::new(&store);

    assert!(matches!(
        repo.find_by_car_number("7").unwrap_err(),
        RepoError::InvalidData(_)
    ));
    assert!(matches!(
        repo.list_all().unwrap_err(),
        RepoError::InvalidData(_)
    ));
}

#[test]
fn records_serialize_with_field_names() {
    let store = open_db_in_memory().unwrap();
    let repo = SqliteGarageRepository::new(&store);
    let record = repo
        .insert(&NewRepair::new("5", "Rust spot", "555-0005"), false)
        .unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["car_number"], "5");
    assert_eq!(json["fixed"], false);
    assert_eq!(json["owner_phone"], "555-0005");
}
