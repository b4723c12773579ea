//! P-values header rewriting for the heatmap script
//!
//! The heatmap script expects cluster pair columns named `A.B`. The header
//! line is rewritten (`.` to `_`, then `|` to `.`) into a temporary copy;
//! data lines are copied unchanged.

use crate::errors::PlotError;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn rewrite_header(line: &str) -> String {
    line.replace('.', "_").replace('|', ".")
}

/// Copy `source` into a temporary file with the same extension and a
/// rewritten header line
///
/// The file is removed when the returned handle is dropped.
pub fn rewrite_pvalues(source: &Path) -> Result<NamedTempFile, PlotError> {
    let suffix = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let input = File::open(source).map_err(|e| PlotError::io(source, e))?;
    let mut reader = BufReader::new(input);

    let temp = tempfile::Builder::new()
        .prefix("cellphonedb-pvalues-")
        .suffix(&suffix)
        .tempfile()
        .map_err(|e| PlotError::io(std::env::temp_dir(), e))?;

    {
        let mut writer = BufWriter::new(temp.as_file());

        let mut header = String::new();
        reader
            .read_line(&mut header)
            .map_err(|e| PlotError::io(source, e))?;
        writer
            .write_all(rewrite_header(&header).as_bytes())
            .map_err(|e| PlotError::io(temp.path(), e))?;

        std::io::copy(&mut reader, &mut writer).map_err(|e| PlotError::io(source, e))?;
        writer.flush().map_err(|e| PlotError::io(temp.path(), e))?;
    }

    tracing::debug!(
        source = %source.display(),
        rewritten = %temp.path().display(),
        "rewrote p-values header"
    );

    Ok(temp)
}
