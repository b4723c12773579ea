use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// testing and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    UnknownColumn,
    DuplicateColumn,
    RowShape,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // External runtime (plotting)
    RuntimeMissing,
    RuntimeExecution,
    MissingPlotFunction,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnknownColumn => "ERR_UNKNOWN_COLUMN",
            ExErrorKind::DuplicateColumn => "ERR_DUPLICATE_COLUMN",
            ExErrorKind::RowShape => "ERR_ROW_SHAPE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::RuntimeMissing => "ERR_RUNTIME_MISSING",
            ExErrorKind::RuntimeExecution => "ERR_RUNTIME_EXECUTION",
            ExErrorKind::MissingPlotFunction => "ERR_MISSING_PLOT_FUNCTION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, table, column, multidata id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    table: Option<String>,
    column: Option<String>,
    multidata_id: Option<i64>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            column: None,
            multidata_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add column context
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Add multidata id context
    pub fn with_multidata_id(mut self, id: i64) -> Self {
        self.multidata_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn multidata_id(&self) -> Option<i64> {
        self.multidata_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(column) = &self.column {
            write!(f, " (column: {})", column)?;
        }
        if let Some(id) = self.multidata_id {
            write!(f, " (multidata_id: {})", id)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Errors raised by in-memory table operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// A referenced column does not exist
    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    /// A column name appears twice in a header
    #[error("Duplicate column: {column}")]
    DuplicateColumn { column: String },

    /// A row does not have one cell per column
    #[error("Row has {actual} cells but the table has {expected} columns")]
    RowShape { expected: usize, actual: usize },

    /// A value could not be read as a multidata identifier
    #[error("Invalid multidata id: {value}")]
    InvalidMultidataId { value: String },
}

impl From<TableError> for ExError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::UnknownColumn { column } => ExError::new(ExErrorKind::UnknownColumn)
                .with_column(column)
                .with_message("Column not present in table"),

            TableError::DuplicateColumn { column } => ExError::new(ExErrorKind::DuplicateColumn)
                .with_column(column)
                .with_message("Column appears more than once"),

            TableError::RowShape { expected, actual } => ExError::new(ExErrorKind::RowShape)
                .with_message(format!("expected {} cells, got {}", expected, actual)),

            TableError::InvalidMultidataId { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid multidata id: {}", value)),
        }
    }
}

/// Conversion from std::io::Error
impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        ExError::new(ExErrorKind::Io).with_message(err.to_string())
    }
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}
