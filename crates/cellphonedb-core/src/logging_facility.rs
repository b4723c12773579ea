//! Structured logging facility for CellPhoneDB
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use cellphonedb_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Repository operations own the start/end events; helpers below them
//! log with `tracing::debug!` only.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
