use cellphonedb_core::errors::{ExError, ExErrorKind, TableError};
use cellphonedb_core::Table;

#[test]
fn test_error_kind_codes_are_stable() {
    let cases = [
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::UnknownColumn, "ERR_UNKNOWN_COLUMN"),
        (ExErrorKind::DuplicateColumn, "ERR_DUPLICATE_COLUMN"),
        (ExErrorKind::RowShape, "ERR_ROW_SHAPE"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in cases {
        assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        assert_eq!(ExError::new(kind).code(), expected_code);
    }
}

#[test]
fn test_table_error_conversion_keeps_column() {
    let err: ExError = TableError::UnknownColumn {
        column: "multidata_1_id".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::UnknownColumn);
    assert_eq!(err.column(), Some("multidata_1_id"));
}

#[test]
fn test_table_operations_surface_structured_errors() {
    // Given: a table without the join key
    let left = Table::new(vec!["a".to_string()]).unwrap();
    let right = Table::new(vec!["b".to_string()]).unwrap();

    // When: joining on a missing column
    let err: ExError = left
        .inner_join(&right, "missing", "b", ("_x", "_y"))
        .unwrap_err()
        .into();

    // Then: the column is named in the error
    assert_eq!(err.code(), "ERR_UNKNOWN_COLUMN");
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_builder_context_is_retained() {
    let err = ExError::new(ExErrorKind::NotFound)
        .with_op("memory_query")
        .with_table("multidata_expanded")
        .with_multidata_id(7)
        .with_message("table not loaded");

    assert_eq!(err.op(), Some("memory_query"));
    assert_eq!(err.table(), Some("multidata_expanded"));
    assert_eq!(err.multidata_id(), Some(7));
    assert_eq!(err.message(), "table not loaded");
    assert!(err.to_string().contains("(multidata_id: 7)"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "means.txt missing");
    let err: ExError = io.into();

    assert_eq!(err.kind(), ExErrorKind::Io);
    assert!(err.message().contains("means.txt"));
}
