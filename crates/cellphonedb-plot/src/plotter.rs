//! Dot plot and heatmap adapters
//!
//! Each plot writes a small driver file that sources the plotting script,
//! checks the expected function exists, and calls it with named arguments.
//! The driver runs under `Rscript --vanilla`.
//!
//! ## Logging Ownership
//!
//! `Plotter::dot_plot` and `Plotter::heatmaps_plot` own lifecycle logging.

use crate::errors::PlotError;
use crate::runtime::RRuntime;
use crate::selection::selected_items;
use crate::{pvalues, rexpr};
use cellphonedb_core::delimited::{read_table, separator_for_path};
use cellphonedb_core::{log_op_end, log_op_error, log_op_start};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const DOT_PLOT_SCRIPT: &str = "plot_dot_by_column_name.R";
pub const DOT_PLOT_FUNCTION: &str = "dot_plot";
pub const HEATMAP_SCRIPT: &str = "plot_heatmaps.R";
pub const HEATMAP_FUNCTION: &str = "heatmaps_plot";

/// Leading annotation columns of a means table
pub const MEANS_ANNOTATION_COLUMNS: usize = 11;

/// Driver exit status when the plotting function is not defined
const MISSING_FUNCTION_STATUS: i32 = 3;

const BUNDLED_DOT_PLOT: &str = include_str!("../R/plot_dot_by_column_name.R");
const BUNDLED_HEATMAPS: &str = include_str!("../R/plot_heatmaps.R");

/// Where the R scripts come from
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scripts {
    /// Scripts compiled into the binary
    #[default]
    Bundled,
    /// Scripts read from a directory at plot time
    Directory(PathBuf),
}

/// Result of a plot call
#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutcome {
    /// No R runtime; nothing was attempted
    Unavailable,
    /// R finished; the files it was asked to write
    Rendered(Vec<PathBuf>),
    Failed(PlotError),
}

/// Plot size in inches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSize {
    pub width: i64,
    pub height: i64,
}

impl PlotSize {
    /// Size for a dot plot of `n_rows` interactions by `n_cols` cluster pairs
    pub fn for_dot_plot(n_rows: usize, n_cols: i64) -> Self {
        let width = 5.0 + f64::max(3.0, n_cols as f64 * 0.8);
        let height = 5.0 + f64::max(5.0, n_rows as f64 * 0.5);
        Self {
            width: width.trunc() as i64,
            height: height.trunc() as i64,
        }
    }
}

/// Inputs of a dot plot
#[derive(Debug, Clone, PartialEq)]
pub struct DotPlotRequest {
    pub means_path: PathBuf,
    pub pvalues_path: PathBuf,
    pub output_path: PathBuf,
    pub output_name: String,
    pub rows: Option<PathBuf>,
    pub columns: Option<PathBuf>,
}

impl DotPlotRequest {
    pub fn new(
        means_path: impl Into<PathBuf>,
        pvalues_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        output_name: impl Into<String>,
    ) -> Self {
        Self {
            means_path: means_path.into(),
            pvalues_path: pvalues_path.into(),
            output_path: output_path.into(),
            output_name: output_name.into(),
            rows: None,
            columns: None,
        }
    }

    pub fn with_rows(mut self, rows: impl Into<PathBuf>) -> Self {
        self.rows = Some(rows.into());
        self
    }

    pub fn with_columns(mut self, columns: impl Into<PathBuf>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn filename(&self) -> PathBuf {
        self.output_path.join(&self.output_name)
    }

    /// Lower-cased extension of the output name, with its leading dot
    pub fn output_extension(&self) -> String {
        Path::new(&self.output_name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default()
    }
}

/// Inputs of the count and log-count heatmaps
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapRequest {
    pub meta_path: PathBuf,
    pub pvalues_path: PathBuf,
    pub output_path: PathBuf,
    pub count_name: String,
    pub log_name: String,
}

impl HeatmapRequest {
    pub fn new(
        meta_path: impl Into<PathBuf>,
        pvalues_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            meta_path: meta_path.into(),
            pvalues_path: pvalues_path.into(),
            output_path: output_path.into(),
            count_name: "heatmap_count.pdf".to_string(),
            log_name: "heatmap_log_count.pdf".to_string(),
        }
    }

    pub fn with_count_name(mut self, name: impl Into<String>) -> Self {
        self.count_name = name.into();
        self
    }

    pub fn with_log_name(mut self, name: impl Into<String>) -> Self {
        self.log_name = name.into();
        self
    }

    pub fn count_filename(&self) -> PathBuf {
        self.output_path.join(&self.count_name)
    }

    pub fn log_filename(&self) -> PathBuf {
        self.output_path.join(&self.log_name)
    }
}

/// Gateway to the R plotting scripts
#[derive(Debug, Clone)]
pub struct Plotter {
    runtime: Option<RRuntime>,
    scripts: Scripts,
}

impl Plotter {
    pub fn new(runtime: Option<RRuntime>, scripts: Scripts) -> Self {
        Self { runtime, scripts }
    }

    /// Probe `rscript` once; a failed probe leaves the plotter unavailable
    pub fn detect(rscript: impl Into<OsString>, scripts: Scripts) -> Self {
        let runtime = match RRuntime::detect(rscript) {
            Ok(runtime) => Some(runtime),
            Err(e) => {
                tracing::debug!(error = %e, "R runtime unavailable");
                None
            }
        };
        Self::new(runtime, scripts)
    }

    pub fn runtime(&self) -> Option<&RRuntime> {
        self.runtime.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.runtime.is_some()
    }

    /// Render a dot plot of mean expression against p-values
    pub fn dot_plot(&self, request: &DotPlotRequest) -> PlotOutcome {
        let Some(runtime) = &self.runtime else {
            return PlotOutcome::Unavailable;
        };

        log_op_start!("dot_plot");
        let start = Instant::now();
        let result = self.render_dot_plot(runtime, request);
        finish("dot_plot", start, result)
    }

    /// Render the count and log-count heatmaps
    pub fn heatmaps_plot(&self, request: &HeatmapRequest) -> PlotOutcome {
        let Some(runtime) = &self.runtime else {
            return PlotOutcome::Unavailable;
        };

        log_op_start!("heatmaps_plot");
        let start = Instant::now();
        let result = self.render_heatmaps(runtime, request);
        finish("heatmaps_plot", start, result)
    }

    fn render_dot_plot(
        &self,
        runtime: &RRuntime,
        request: &DotPlotRequest,
    ) -> Result<Vec<PathBuf>, PlotError> {
        let means = read_table(&request.means_path)
            .map_err(|e| PlotError::io(&request.means_path, e))?;
        let n_rows = means.len();
        let n_cols = means.column_count() as i64 - MEANS_ANNOTATION_COLUMNS as i64;

        let rows = selected_items(request.rows.as_deref(), n_rows)?;
        let columns = selected_items(request.columns.as_deref(), n_cols.max(0) as usize)?;
        let n_cols = if columns.labels.is_some() {
            columns.size as i64
        } else {
            n_cols
        };
        let size = PlotSize::for_dot_plot(rows.size, n_cols);

        let filename = request.filename();
        let call = format!(
            "{}(\n  selected_rows = {},\n  selected_columns = {},\n  filename = {},\n  width = {},\n  height = {},\n  means_path = {},\n  pvalues_path = {},\n  means_separator = {},\n  pvalues_separator = {},\n  output_extension = {}\n)\n",
            DOT_PLOT_FUNCTION,
            rexpr::character_vector(rows.labels.as_deref()),
            rexpr::character_vector(columns.labels.as_deref()),
            rexpr::path(&filename),
            rexpr::integer(size.width),
            rexpr::integer(size.height),
            rexpr::path(&request.means_path),
            rexpr::path(&request.pvalues_path),
            rexpr::string(&separator_for_path(&request.means_path).to_string()),
            rexpr::string(&separator_for_path(&request.pvalues_path).to_string()),
            rexpr::string(&request.output_extension()),
        );

        tracing::debug!(width = size.width, height = size.height, "dot plot size");

        self.run(runtime, DOT_PLOT_SCRIPT, BUNDLED_DOT_PLOT, DOT_PLOT_FUNCTION, &call)?;
        Ok(vec![filename])
    }

    fn render_heatmaps(
        &self,
        runtime: &RRuntime,
        request: &HeatmapRequest,
    ) -> Result<Vec<PathBuf>, PlotError> {
        let pvalues = pvalues::rewrite_pvalues(&request.pvalues_path)?;

        let count_filename = request.count_filename();
        let log_filename = request.log_filename();
        let call = format!(
            "{}(\n  meta_file = {},\n  pvalues_file = {},\n  count_filename = {},\n  log_filename = {}\n)\n",
            HEATMAP_FUNCTION,
            rexpr::path(&request.meta_path),
            rexpr::path(pvalues.path()),
            rexpr::path(&count_filename),
            rexpr::path(&log_filename),
        );

        self.run(runtime, HEATMAP_SCRIPT, BUNDLED_HEATMAPS, HEATMAP_FUNCTION, &call)?;
        Ok(vec![count_filename, log_filename])
    }

    /// Source `script`, verify `function` exists, evaluate `call`
    fn run(
        &self,
        runtime: &RRuntime,
        script: &str,
        bundled: &str,
        function: &str,
        call: &str,
    ) -> Result<(), PlotError> {
        let workdir = tempfile::Builder::new()
            .prefix("cellphonedb-plot-")
            .tempdir()
            .map_err(|e| PlotError::io(std::env::temp_dir(), e))?;

        let script_path = match &self.scripts {
            Scripts::Directory(dir) => dir.join(script),
            Scripts::Bundled => {
                let path = workdir.path().join(script);
                std::fs::write(&path, bundled).map_err(|e| PlotError::io(&path, e))?;
                path
            }
        };
        if !script_path.is_file() {
            return Err(PlotError::io(&script_path, "plotting script not found"));
        }

        let driver = format!(
            "source({})\nif (!exists({}, mode = \"function\")) quit(save = \"no\", status = {})\n{}",
            rexpr::path(&script_path),
            rexpr::string(function),
            MISSING_FUNCTION_STATUS,
            call,
        );
        let driver_path = workdir.path().join("driver.R");
        std::fs::write(&driver_path, driver).map_err(|e| PlotError::io(&driver_path, e))?;

        let output = runtime.run_file(&driver_path)?;

        match output.status.code() {
            Some(0) => Ok(()),
            Some(MISSING_FUNCTION_STATUS) => Err(PlotError::MissingPlotFunction {
                function: function.to_string(),
                script: script_path.display().to_string(),
            }),
            status => Err(PlotError::RuntimeException {
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
        }
    }
}

fn finish(op: &'static str, start: Instant, result: Result<Vec<PathBuf>, PlotError>) -> PlotOutcome {
    let duration_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(paths) => {
            log_op_end!(op, duration_ms = duration_ms, file_count = paths.len());
            PlotOutcome::Rendered(paths)
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
            PlotOutcome::Failed(e)
        }
    }
}
