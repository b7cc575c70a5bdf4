mod common;

use bill_core::config::Config;
use bill_core::domain::{Bill, Category, PaymentHistoryEntry};
use bill_core::errors::BillError;
use bill_core::format::Locale;
use bill_core::storage::{BillStore, HistoryStore, JsonStorage};
use chrono::{TimeZone, Utc};

use common::setup_test_env;

fn sample_bill(name: &str, day: u32) -> Bill {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let due = Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap();
    Bill::new(name, 30.0, due, Category::Other, created)
}

#[test]
fn insert_assigns_monotonic_identities() {
    let (storage, _) = setup_test_env();
    let first = storage.insert(sample_bill("first", 5)).expect("insert");
    let second = storage.insert(sample_bill("second", 6)).expect("insert");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.is_persisted());
}

#[test]
fn list_all_orders_by_due_date() {
    let (storage, _) = setup_test_env();
    storage.insert(sample_bill("late", 20)).expect("insert");
    storage.insert(sample_bill("early", 2)).expect("insert");
    storage.insert(sample_bill("middle", 10)).expect("insert");

    let names: Vec<String> = storage
        .list_all()
        .expect("list bills")
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["early", "middle", "late"]);
}

#[test]
fn list_in_range_bounds_are_inclusive() {
    let (storage, _) = setup_test_env();
    storage.insert(sample_bill("in", 10)).expect("insert");
    storage.insert(sample_bill("out", 25)).expect("insert");

    let from = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
    let bills = storage.list_in_range(from, to).expect("list in range");
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].name, "in");
}

#[test]
fn update_preserves_identity_and_replaces_fields() {
    let (storage, _) = setup_test_env();
    let mut bill = storage.insert(sample_bill("rename me", 5)).expect("insert");
    bill.name = "renamed".into();
    bill.amount = 99.0;
    storage.update(&bill).expect("update bill");

    let stored = storage.list_all().expect("list bills").remove(0);
    assert_eq!(stored.id, bill.id);
    assert_eq!(stored.name, "renamed");
    assert_eq!(stored.amount, 99.0);
}

#[test]
fn update_and_delete_report_missing_bills() {
    let (storage, _) = setup_test_env();
    let ghost = sample_bill("ghost", 5);

    let err = storage.update(&ghost).expect_err("update must fail");
    assert!(matches!(err, BillError::BillNotFound(0)));
    let err = storage.delete(42).expect_err("delete must fail");
    assert!(matches!(err, BillError::BillNotFound(42)));
}

#[test]
fn insert_rejects_invalid_bills() {
    let (storage, _) = setup_test_env();
    let mut bill = sample_bill("broke", 5);
    bill.amount = -1.0;
    let err = storage.insert(bill).expect_err("insert must validate");
    assert!(matches!(err, BillError::Validation(_)));
}

#[test]
fn data_survives_reopening_the_store() {
    let temp = tempfile::TempDir::new().expect("temp dir");
    let path = temp.path().join("bills.json");

    let first = JsonStorage::open(&path).expect("open");
    first.insert(sample_bill("kept", 7)).expect("insert");
    drop(first);

    let reopened = JsonStorage::open(&path).expect("reopen");
    let bills = reopened.list_all().expect("list bills");
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].name, "kept");
    assert_eq!(bills[0].id, 1);

    // The id sequence continues where the previous handle left off.
    let next = reopened.insert(sample_bill("next", 8)).expect("insert");
    assert_eq!(next.id, 2);
}

#[test]
fn history_lists_newest_first_and_clears() {
    let (storage, _) = setup_test_env();
    let bill = sample_bill("paid", 5);
    let early = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();

    storage
        .append(PaymentHistoryEntry::snapshot(&bill, early))
        .expect("append early");
    storage
        .append(PaymentHistoryEntry::snapshot(&bill, late))
        .expect("append late");

    let entries = storage.entries().expect("list history");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].payment_date, late);
    assert_eq!(entries[1].payment_date, early);

    storage.clear().expect("clear history");
    assert!(storage.entries().expect("list history").is_empty());
}

#[test]
fn config_defaults_when_file_is_absent() {
    let (_, config_manager) = setup_test_env();
    let config = config_manager.load().expect("load default config");
    assert_eq!(config.locale, "en-US");
    assert_eq!(config.currency, "USD");
    assert_eq!(config.reminder_lookahead_days, 3);
}

#[test]
fn config_round_trips_through_save_and_load() {
    let (_, config_manager) = setup_test_env();
    let config = Config {
        locale: "pl-PL".into(),
        currency: "PLN".into(),
        reminder_lookahead_days: 7,
    };
    config_manager.save(&config).expect("save config");
    let loaded = config_manager.load().expect("load config");
    assert_eq!(loaded.locale, "pl-PL");
    assert_eq!(loaded.reminder_lookahead_days, 7);
    assert_eq!(loaded.lookahead(), chrono::Duration::days(7));
    assert_eq!(loaded.presentation_locale(), Locale::Pl);
}
