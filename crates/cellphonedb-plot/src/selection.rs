//! Row and column selections for the dot plot
//!
//! A selection file lists one label per line. Only the first
//! comma-separated field of each line is used.

use crate::errors::PlotError;
use cellphonedb_core::delimited::read_records;
use std::path::Path;

/// Labels as R sees them: `|` becomes `.`
pub fn sanitize_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|name| name.as_ref().replace('|', "."))
        .collect()
}

/// Read the raw labels of a selection file
pub fn read_selection(path: &Path) -> Result<Vec<String>, PlotError> {
    let file = std::fs::File::open(path).map_err(|e| PlotError::io(path, e))?;

    let labels: Vec<String> = read_records(file, ',')
        .map_err(|e| PlotError::io(path, e))?
        .into_iter()
        .filter_map(|record| record.into_iter().next())
        .collect();

    if labels.is_empty() {
        return Err(PlotError::InvalidInput {
            reason: format!("selection file {} has no entries", path.display()),
        });
    }

    Ok(labels)
}

/// The selected labels and the plot dimension they imply
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub size: usize,
    pub labels: Option<Vec<String>>,
}

/// Resolve an optional selection file against the full dimension `size`
///
/// Without a file the full dimension is kept and no labels are passed.
pub fn selected_items(selection: Option<&Path>, size: usize) -> Result<Selection, PlotError> {
    match selection {
        None => Ok(Selection { size, labels: None }),
        Some(path) => {
            let names = read_selection(path)?;
            Ok(Selection {
                size: names.len(),
                labels: Some(sanitize_names(&names)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sanitize_names() {
        assert_eq!(sanitize_names(&["A|B", "C.D"]), vec!["A.B", "C.D"]);
    }

    #[test]
    fn test_selected_items_without_file_keeps_size() {
        let selection = selected_items(None, 42).unwrap();
        assert_eq!(selection, Selection { size: 42, labels: None });
    }

    #[test]
    fn test_selected_items_reads_first_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "EGF_EGFR,ignored").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Mac|Tcell").unwrap();

        let selection = selected_items(Some(file.path()), 100).unwrap();

        assert_eq!(selection.size, 2);
        assert_eq!(
            selection.labels,
            Some(vec!["EGF_EGFR".to_string(), "Mac.Tcell".to_string()])
        );
    }

    #[test]
    fn test_empty_selection_is_invalid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = selected_items(Some(file.path()), 3).unwrap_err();
        assert!(matches!(err, PlotError::InvalidInput { .. }));
    }
}
