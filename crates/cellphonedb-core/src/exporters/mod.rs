//! Presentation exporters

pub mod interaction_exporter;
