#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use cellphonedb_core::errors::TableError;
use cellphonedb_core::logging_facility::test_capture::init_test_capture;
use cellphonedb_core::{log_op_end, log_op_error, log_op_start, RepositoryRegistry};
use cellphonedb_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let events = capture.events_for_op(op_name);
    assert!(
        events.iter().any(|e| e.event.as_deref() == Some(EVENT_START)),
        "Should have captured a start event"
    );
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(end_events.len(), 1);
    assert_eq!(end_events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = TableError::UnknownColumn {
        column: "name_1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(error_events.len(), 1);
    assert_eq!(
        error_events[0].fields.get("err_code"),
        Some(&"ERR_UNKNOWN_COLUMN".to_string())
    );
}

#[test]
fn test_repository_operation_emits_start_and_end() {
    let capture = init_test_capture();
    let registry = RepositoryRegistry::new(common::source());

    registry.interactions().get_all_expanded().unwrap();

    capture.assert_event_exists("interaction_get_all_expanded", EVENT_START);
    capture.assert_event_exists("interaction_get_all_expanded", EVENT_END);

    let end = capture
        .events_for_op("interaction_get_all_expanded")
        .into_iter()
        .rev()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .expect("end event");
    assert_eq!(end.fields.get("row_count"), Some(&"2".to_string()));
}

#[test]
fn test_repository_failure_emits_end_error() {
    let capture = init_test_capture();
    let registry = RepositoryRegistry::new(cellphonedb_core::MemorySource::new());

    assert!(registry.multidatas().get_all_expanded().is_err());

    capture.assert_event_exists("multidata_get_all_expanded", EVENT_END_ERROR);
}
