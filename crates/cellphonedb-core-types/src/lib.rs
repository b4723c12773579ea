//! Core types shared across CellPhoneDB facilities
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging macros and error reporting

pub mod schema;
