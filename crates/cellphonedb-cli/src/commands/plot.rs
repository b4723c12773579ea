//! Plot commands
//!
//! The R runtime is probed once per invocation. Without it the command
//! still runs and reports that plotting is unavailable.

use cellphonedb_core::errors::ExError;
use cellphonedb_plot::{DotPlotRequest, HeatmapRequest, PlotError, PlotOutcome, Plotter, Scripts};
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub const NO_R_NOTICE: &str =
    "As there is no R environment set up, some functionalities will be disabled, e.g. plot";
pub const NO_R_PLOT: &str =
    "You cannot perform this plot command unless there is a working R setup according to CellPhoneDB specs";

#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Rscript executable used to run the plotting scripts
    #[arg(long, global = true, env = "CELLPHONEDB_RSCRIPT", default_value = "Rscript")]
    pub rscript: String,

    /// Directory holding the R scripts [bundled scripts]
    #[arg(long, global = true, env = "CELLPHONEDB_R_SCRIPTS")]
    pub scripts_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: PlotCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlotCommand {
    /// Dot plot of means against p-values
    DotPlot(DotPlotArgs),
    /// Count and log-count heatmaps of significant interactions
    HeatmapPlot(HeatmapPlotArgs),
}

/// Shared `--verbose/--quiet` switch; verbose is the default
#[derive(Debug, Args)]
pub struct Verbosity {
    /// Print the full error on unexpected failures [default]
    #[arg(long, overrides_with = "quiet")]
    pub verbose: bool,

    /// Hide the full error on unexpected failures
    #[arg(long, overrides_with = "verbose")]
    pub quiet: bool,
}

impl Verbosity {
    pub fn is_verbose(&self) -> bool {
        !self.quiet
    }
}

#[derive(Debug, Args)]
pub struct DotPlotArgs {
    /// Analysis output means
    #[arg(long, default_value = "./out/means.txt")]
    pub means_path: PathBuf,

    /// Analysis output p-values
    #[arg(long, default_value = "./out/pvalues.txt")]
    pub pvalues_path: PathBuf,

    /// Directory to write the plot to
    #[arg(long, default_value = "./out")]
    pub output_path: PathBuf,

    /// Output file name; its extension selects the format
    #[arg(long, default_value = "plot.pdf")]
    pub output_name: String,

    /// Rows to plot, one per line [all available]
    #[arg(long)]
    pub rows: Option<PathBuf>,

    /// Columns to plot, one per line [all available]
    #[arg(long)]
    pub columns: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

#[derive(Debug, Args)]
pub struct HeatmapPlotArgs {
    /// Cell to cell type meta file
    pub meta_path: PathBuf,

    /// Analysis output p-values
    #[arg(long, default_value = "./out/pvalues.txt")]
    pub pvalues_path: PathBuf,

    /// Directory to write the plots to
    #[arg(long, default_value = "./out")]
    pub output_path: PathBuf,

    /// Output file with the count heatmap
    #[arg(long, default_value = "heatmap_count.pdf")]
    pub count_name: String,

    /// Output file with the log count heatmap
    #[arg(long, default_value = "heatmap_log_count.pdf")]
    pub log_name: String,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

pub fn execute(args: PlotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let scripts = match args.scripts_dir {
        Some(dir) => Scripts::Directory(dir),
        None => Scripts::Bundled,
    };

    let plotter = Plotter::detect(&args.rscript, scripts);
    if !plotter.is_available() {
        println!("{}", NO_R_NOTICE);
    }

    match args.command {
        PlotCommand::DotPlot(dot_args) => {
            let mut request = DotPlotRequest::new(
                dot_args.means_path,
                dot_args.pvalues_path,
                dot_args.output_path,
                dot_args.output_name,
            );
            request.rows = dot_args.rows;
            request.columns = dot_args.columns;

            report(plotter.dot_plot(&request), dot_args.verbosity.is_verbose())
        }
        PlotCommand::HeatmapPlot(heatmap_args) => {
            let request = HeatmapRequest::new(
                heatmap_args.meta_path,
                heatmap_args.pvalues_path,
                heatmap_args.output_path,
            )
            .with_count_name(heatmap_args.count_name)
            .with_log_name(heatmap_args.log_name);

            report(
                plotter.heatmaps_plot(&request),
                heatmap_args.verbosity.is_verbose(),
            )
        }
    }
}

fn report(outcome: PlotOutcome, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    match outcome {
        PlotOutcome::Rendered(paths) => {
            for path in paths {
                println!("Plot written: {}", path.display());
            }
            Ok(())
        }
        PlotOutcome::Unavailable => {
            println!("{}", NO_R_PLOT);
            Ok(())
        }
        PlotOutcome::Failed(err @ PlotError::RuntimeException { .. }) => {
            tracing::error!("{}", err);
            Err(ExError::from(err).into())
        }
        PlotOutcome::Failed(err) => {
            tracing::error!("Unexpected error");
            if verbose {
                println!("{:#?}", err);
            } else {
                tracing::error!("execute with --verbose to see full stack trace");
            }
            Err(ExError::from(err).into())
        }
    }
}
