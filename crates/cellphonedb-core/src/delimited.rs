//! Delimited text tables
//!
//! `.csv` files are comma separated; every other extension is read and
//! written tab separated. Fields holding the separator, a quote or a line
//! break are double-quoted on write, and quoted fields may span lines.

use crate::errors::{ExError, ExErrorKind, Result};
use crate::table::{Table, Value};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Separator implied by a file's extension
pub fn separator_for_path(path: &Path) -> char {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => ',',
        _ => '\t',
    }
}

fn separator_byte(separator: char) -> Result<u8> {
    u8::try_from(separator).map_err(|_| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_message(format!("separator {:?} is not a single byte", separator))
    })
}

fn io_error(op: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(op)
        .with_message(format!("{}: {}", path.display(), err))
}

fn csv_error(op: &str, err: csv::Error) -> ExError {
    let kind = if err.is_io_error() {
        ExErrorKind::Io
    } else {
        ExErrorKind::Serialization
    };
    ExError::new(kind).with_op(op).with_message(err.to_string())
}

/// Records of a headerless delimited stream
///
/// Rows may have differing widths. Blank lines are skipped.
pub fn read_records<R: Read>(reader: R, separator: char) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(separator_byte(separator)?)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error("read_records", e))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

/// Read a delimited table with a header line
///
/// Empty cells become `Null`, everything else is kept as text. Short rows
/// are padded with `Null`; blank lines are skipped.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| io_error("read_table", path, e))?;
    let mut records = read_records(file, separator_for_path(path))
        .map_err(|e| {
            let message = format!("{}: {}", path.display(), e.message());
            e.with_op("read_table").with_message(message)
        })?
        .into_iter();

    let header = match records.next() {
        Some(header) => header,
        None => return Ok(Table::default()),
    };
    let mut table = Table::new(header)?;
    let width = table.column_count();

    for record in records {
        let mut row: Vec<Value> = record
            .into_iter()
            .map(|f| if f.is_empty() { Value::Null } else { Value::Text(f) })
            .collect();
        if row.len() < width {
            row.resize(width, Value::Null);
        }
        table.push_row(row)?;
    }

    tracing::debug!(
        path = %path.display(),
        row_count = table.len(),
        column_count = table.column_count(),
        "read delimited table"
    );

    Ok(table)
}

/// Write a table as delimited text
pub fn write_table<W: Write>(table: &Table, writer: &mut W, separator: char) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(separator_byte(separator)?)
        .from_writer(writer);

    out.write_record(table.columns())
        .map_err(|e| csv_error("write_table", e))?;
    for row in table.rows() {
        out.write_record(row.iter().map(|v| v.to_string()))
            .map_err(|e| csv_error("write_table", e))?;
    }
    out.flush()?;
    Ok(())
}

/// Write a table to `path`, choosing the separator from its extension and
/// creating missing parent directories
pub fn write_table_to_path(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("write_table", parent, e))?;
    }
    let file = File::create(path).map_err(|e| io_error("write_table", path, e))?;
    let mut writer = BufWriter::new(file);
    write_table(table, &mut writer, separator_for_path(path))?;
    writer.flush().map_err(|e| io_error("write_table", path, e))?;
    Ok(())
}
