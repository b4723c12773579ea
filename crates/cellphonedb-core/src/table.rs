//! In-memory tabular data
//!
//! `Table` is the single shape every pipeline stage consumes and produces:
//! an ordered, duplicate-free header plus rows of `Value` cells. Column
//! operations (rename, drop, retain, reorder) and the suffixing inner join
//! used by interaction expansion live here.

use crate::errors::TableError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A single cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

/// Normalized key used to match cells across tables in a join
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum JoinKey {
    Int(i64),
    /// Bit pattern of a finite, non-whole real
    Real(u64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Integer view of the cell: integers, whole reals and integer text
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Real(r) if r.fract() == 0.0 && r.is_finite() => Some(*r as i64),
            Value::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    fn join_key(&self) -> Option<JoinKey> {
        match self {
            Value::Null => None,
            Value::Text(s) => match s.trim().parse::<i64>() {
                Ok(i) => Some(JoinKey::Int(i)),
                Err(_) => Some(JoinKey::Text(s.clone())),
            },
            Value::Real(r) if r.is_finite() && r.fract() != 0.0 => Some(JoinKey::Real(r.to_bits())),
            other => other.as_i64().map(JoinKey::Int),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Ordered columns plus rows of cells
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given header
    pub fn new<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(TableError::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Create a table from a header and rows, checking every row's width
    pub fn with_rows<I, S>(columns: I, rows: Vec<Vec<Value>>) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Build from a header and rows already known to be unique and well-shaped
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Empty table with the same header
    pub fn empty_like(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowShape {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn require_column(&self, name: &str) -> Result<usize, TableError> {
        self.column_index(name)
            .ok_or_else(|| TableError::UnknownColumn {
                column: name.to_string(),
            })
    }

    /// Cell at `row` in the named column
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// All cells of one column, top to bottom
    pub fn column_values(&self, column: &str) -> Result<Vec<&Value>, TableError> {
        let idx = self.require_column(column)?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Rename columns in place
    ///
    /// Missing source columns are ignored. A rename whose target already
    /// names another column is skipped so the header stays unique.
    pub fn rename_columns(&mut self, mapping: &[(&str, &str)]) {
        for (from, to) in mapping {
            if from == to || self.has_column(to) {
                continue;
            }
            if let Some(idx) = self.column_index(from) {
                self.columns[idx] = (*to).to_string();
            }
        }
    }

    /// Drop the named columns in place; missing names are ignored
    pub fn drop_columns(&mut self, names: &[&str]) {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| !names.contains(&c.as_str()))
            .collect();
        self.retain_by_mask(&keep);
    }

    /// Keep only the allowed columns in place, preserving current order
    pub fn retain_columns(&mut self, allowed: &[&str]) {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| allowed.contains(&c.as_str()))
            .collect();
        self.retain_by_mask(&keep);
    }

    fn retain_by_mask(&mut self, keep: &[bool]) {
        let mut mask = keep.iter();
        self.columns.retain(|_| *mask.next().unwrap_or(&false));
        for row in &mut self.rows {
            let mut mask = keep.iter();
            row.retain(|_| *mask.next().unwrap_or(&false));
        }
    }

    /// Project onto the named columns in the given order; missing names are skipped
    pub fn select(&self, names: &[&str]) -> Table {
        let indices: Vec<usize> = names
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        self.project(&indices)
    }

    /// Move the named columns (those present) to the front, in the given
    /// order, followed by the rest in their existing order
    pub fn bring_columns_to_start(&self, names: &[&str]) -> Table {
        let mut indices: Vec<usize> = names
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect();
        let front: HashSet<usize> = indices.iter().copied().collect();
        indices.extend((0..self.columns.len()).filter(|i| !front.contains(i)));
        self.project(&indices)
    }

    fn project(&self, indices: &[usize]) -> Table {
        Table {
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        }
    }

    /// Rows for which `keep` returns true
    pub fn filter_rows<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&[Value]) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Rows where any of the named columns holds `key`
    pub fn filter_any_eq(&self, columns: &[&str], key: i64) -> Result<Table, TableError> {
        let indices = columns
            .iter()
            .map(|c| self.require_column(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.filter_rows(|row| indices.iter().any(|&i| row[i].as_i64() == Some(key))))
    }

    /// Inner join on `self[left_on] == right[right_on]`
    ///
    /// Column names present on both sides get `suffixes.0` (left) and
    /// `suffixes.1` (right). When both keys share one name, that column
    /// appears once, unsuffixed. Output rows follow the left table's order;
    /// left rows without a match, or with a null key, are dropped.
    ///
    /// Integers, whole reals and integer text compare as one integer key.
    /// Other reals match only an equal real; NaN and infinite keys never
    /// match, nor does non-integer text against a real.
    pub fn inner_join(
        &self,
        right: &Table,
        left_on: &str,
        right_on: &str,
        suffixes: (&str, &str),
    ) -> Result<Table, TableError> {
        let left_key = self.require_column(left_on)?;
        let right_key = right.require_column(right_on)?;
        let shared_key = left_on == right_on;

        let right_names: HashSet<&str> = right.columns.iter().map(String::as_str).collect();
        let left_names: HashSet<&str> = self.columns.iter().map(String::as_str).collect();

        let mut columns = Vec::with_capacity(self.columns.len() + right.columns.len());
        for name in &self.columns {
            let overlaps = right_names.contains(name.as_str()) && !(shared_key && name == left_on);
            columns.push(if overlaps {
                format!("{}{}", name, suffixes.0)
            } else {
                name.clone()
            });
        }
        let right_indices: Vec<usize> = (0..right.columns.len())
            .filter(|&i| !(shared_key && i == right_key))
            .collect();
        for &i in &right_indices {
            let name = &right.columns[i];
            columns.push(if left_names.contains(name.as_str()) {
                format!("{}{}", name, suffixes.1)
            } else {
                name.clone()
            });
        }

        let mut joined = Table::new(columns)?;

        let mut index: HashMap<JoinKey, Vec<usize>> = HashMap::new();
        for (pos, row) in right.rows.iter().enumerate() {
            if let Some(key) = row[right_key].join_key() {
                index.entry(key).or_default().push(pos);
            }
        }

        for left_row in &self.rows {
            let Some(key) = left_row[left_key].join_key() else {
                continue;
            };
            let Some(matches) = index.get(&key) else {
                continue;
            };
            for &pos in matches {
                let right_row = &right.rows[pos];
                let mut row = left_row.clone();
                row.extend(right_indices.iter().map(|&i| right_row[i].clone()));
                joined.rows.push(row);
            }
        }

        Ok(joined)
    }

    /// Rows as JSON objects keyed by column name
    pub fn to_records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(c, v)| (c.clone(), serde_json::to_value(v).unwrap_or_default()))
                    .collect()
            })
            .collect()
    }
}
