//! CLI library components for the CTCAE terminology tool.

pub mod logging;
