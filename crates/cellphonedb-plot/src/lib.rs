//! CellPhoneDB Plot - gateway to the R plotting scripts
//!
//! Provides:
//! - R runtime detection (`RRuntime`)
//! - Dot plot and heatmap adapters behind `Plotter`, reporting a tri-state
//!   `PlotOutcome`
//! - Selection file reading and p-values header rewriting
//! - The bundled R scripts

pub mod errors;
pub mod plotter;
pub mod pvalues;
pub mod rexpr;
pub mod runtime;
pub mod selection;

pub use errors::PlotError;
pub use plotter::{DotPlotRequest, HeatmapRequest, PlotOutcome, PlotSize, Plotter, Scripts};
pub use runtime::RRuntime;
