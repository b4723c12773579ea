//! R runtime detection
//!
//! R is reached through the `Rscript` front end. Detection runs it once and
//! asks for the R home directory and version string.

use crate::errors::PlotError;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output};

/// Expression printing `R.home()` and the version string on separate lines
const PROBE_EXPR: &str = r#"cat(R.home(), R.version.string, sep = "\n")"#;

/// A working R installation
#[derive(Debug, Clone, PartialEq)]
pub struct RRuntime {
    rscript: OsString,
    home: String,
    version: String,
}

impl RRuntime {
    /// Probe `rscript` and return the runtime it reports
    ///
    /// # Errors
    ///
    /// `PlotError::RuntimeMissing` when the binary cannot be started, exits
    /// unsuccessfully, or reports no R home.
    pub fn detect(rscript: impl Into<OsString>) -> Result<Self, PlotError> {
        let rscript = rscript.into();

        let output = Command::new(&rscript)
            .arg("--vanilla")
            .arg("-e")
            .arg(PROBE_EXPR)
            .output()
            .map_err(|e| PlotError::RuntimeMissing {
                reason: format!("cannot run {}: {}", rscript.to_string_lossy(), e),
            })?;

        if !output.status.success() {
            return Err(PlotError::RuntimeMissing {
                reason: format!(
                    "{} probe failed: {}",
                    rscript.to_string_lossy(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
        let home = lines.next().unwrap_or_default().to_string();
        let version = lines.next().unwrap_or_default().to_string();

        if home.is_empty() {
            return Err(PlotError::RuntimeMissing {
                reason: "R did not report a home directory".to_string(),
            });
        }

        tracing::debug!(r_home = %home, r_version = %version, "detected R runtime");

        Ok(Self {
            rscript,
            home,
            version,
        })
    }

    pub fn rscript(&self) -> &OsString {
        &self.rscript
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Run an R file with `Rscript --vanilla`
    pub(crate) fn run_file(&self, script: &Path) -> Result<Output, PlotError> {
        Command::new(&self.rscript)
            .arg("--vanilla")
            .arg(script)
            .output()
            .map_err(|e| PlotError::RuntimeMissing {
                reason: format!("cannot run {}: {}", self.rscript.to_string_lossy(), e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_runtime_missing() {
        let err = RRuntime::detect("/nonexistent/cellphonedb/Rscript").unwrap_err();
        assert!(matches!(err, PlotError::RuntimeMissing { .. }));
    }
}
