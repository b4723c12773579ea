// Integration tests for the interaction repository over an in-memory source

mod common;

use cellphonedb_core::{interaction_exporter, RepositoryRegistry, Value};

#[test]
fn test_get_all_returns_every_interaction() {
    // Given: three stored interactions
    let registry = RepositoryRegistry::new(common::source());

    // When: we fetch everything
    let all = registry.interactions().get_all().unwrap();

    // Then: nothing is filtered or joined
    assert_eq!(all.len(), 3);
    assert!(!all.has_column("name_1"));
}

#[test]
fn test_get_by_multidata_id_matches_either_side() {
    let registry = RepositoryRegistry::new(common::source());

    // id 1 is participant 2 of interaction 1 and participant 1 of interaction 3
    let rows = registry
        .interactions()
        .get_interactions_by_multidata_id(1)
        .unwrap();

    let ids: Vec<Value> = rows
        .column_values("id_interaction")
        .unwrap()
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(ids, vec![Value::Integer(1), Value::Integer(3)]);
}

#[test]
fn test_get_by_unreferenced_id_is_empty_not_error() {
    let registry = RepositoryRegistry::new(common::source());

    let rows = registry
        .interactions()
        .get_interactions_by_multidata_id(5)
        .unwrap();

    assert!(rows.is_empty());
    assert_eq!(rows.columns().len(), 8);
}

#[test]
fn test_get_by_multidata_id_accepts_integer_like_inputs() {
    let registry = RepositoryRegistry::new(common::source());
    let repo = registry.interactions();

    let from_i64 = repo.get_interactions_by_multidata_id(2_i64).unwrap();
    let from_u32 = repo.get_interactions_by_multidata_id(2_u32).unwrap();
    let from_u64 = repo.get_interactions_by_multidata_id(2_u64).unwrap();
    let from_str = repo.get_interactions_by_multidata_id("2").unwrap();
    let from_string = repo.get_interactions_by_multidata_id(" 2 ".to_string()).unwrap();

    assert_eq!(from_i64, from_u32);
    assert_eq!(from_i64, from_u64);
    assert_eq!(from_i64, from_str);
    assert_eq!(from_i64, from_string);
    assert_eq!(from_i64.len(), 1);
}

#[test]
fn test_unconvertible_multidata_id_is_invalid_input() {
    // Given: ids that do not fit a multidata id
    let registry = RepositoryRegistry::new(common::source());
    let repo = registry.interactions();

    // When: querying with them
    let too_large = repo.get_interactions_by_multidata_id(u64::MAX).unwrap_err();
    let not_a_number = repo
        .get_interactions_multidata_by_multidata_id("EGFR")
        .unwrap_err();

    // Then: both fail as invalid input naming the value
    assert_eq!(too_large.code(), "ERR_INVALID_INPUT");
    assert!(too_large.to_string().contains(&u64::MAX.to_string()));
    assert_eq!(not_a_number.code(), "ERR_INVALID_INPUT");
    assert_eq!(
        not_a_number.op(),
        Some("interaction_get_multidata_by_multidata_id")
    );
}

#[test]
fn test_expanded_by_multidata_id_carries_both_sides() {
    let registry = RepositoryRegistry::new(common::source());

    let expanded = registry
        .interactions()
        .get_interactions_multidata_by_multidata_id(3)
        .unwrap();

    assert_eq!(expanded.len(), 1);
    assert_eq!(expanded.value(0, "name_1"), Some(&Value::from("IL6")));
    assert_eq!(expanded.value(0, "name_2"), Some(&Value::from("IL6_receptor")));
    assert_eq!(expanded.value(0, "entry_name_2"), Some(&Value::Null));
    assert!(!expanded.has_column("id_multidata_1"));
    assert!(!expanded.has_column("id_multidata_2"));
}

#[test]
fn test_expansion_drops_interaction_with_missing_participant() {
    // Given: interaction 3 references multidata 99, which does not exist
    let registry = RepositoryRegistry::new(common::source());

    // When: expanding by its only known participant
    let expanded = registry
        .interactions()
        .get_interactions_multidata_by_multidata_id(99)
        .unwrap();

    // Then: the interaction is silently dropped
    assert!(expanded.is_empty());
}

#[test]
fn test_get_all_expanded_then_export() {
    let registry = RepositoryRegistry::new(common::source());

    let mut expanded = registry.interactions().get_all_expanded().unwrap();
    assert_eq!(expanded.len(), 2);

    let exported = interaction_exporter::call(&mut expanded);
    assert_eq!(
        exported.columns(),
        &[
            "multidata_name_1",
            "entry_name_1",
            "multidata_name_2",
            "entry_name_2",
            "score_1",
            "score_2",
            "source",
            "comments",
        ]
    );
    assert_eq!(exported.value(0, "multidata_name_1"), Some(&Value::from("EGF")));
    assert_eq!(exported.value(0, "entry_name_2"), Some(&Value::from("EGFR_HUMAN")));
    assert_eq!(exported.value(0, "score_1"), Some(&Value::Real(0.9)));
}

#[test]
fn test_storage_errors_propagate() {
    // A source without the multidata table fails the expansion step
    let source = cellphonedb_core::MemorySource::new().with_table(
        cellphonedb_core::TableName::Interaction,
        cellphonedb_core::model::interaction::to_table(&common::interactions()),
    );
    let registry = RepositoryRegistry::new(source);

    let err = registry.interactions().get_all_expanded().unwrap_err();
    assert_eq!(err.kind(), cellphonedb_core::ExErrorKind::NotFound);
    assert_eq!(err.table(), Some("multidata_expanded"));
}
