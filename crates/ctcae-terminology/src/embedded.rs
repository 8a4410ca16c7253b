//! Embedded reference data.
//!
//! All CTCAE reference tables are embedded at compile time using
//! `include_str!()`. This eliminates runtime file I/O and path resolution
//! issues; the tables are fixed for the life of the process.

/// Attribution options (name, description).
pub const ATTRIBUTIONS_CSV: &str = include_str!("../data/attributions.csv");

/// Severity grade options (name, description, NCI Metathesaurus code).
pub const GRADES_CSV: &str = include_str!("../data/grades.csv");

/// Adverse-event terms (MedDRA code, SOC, term, definition, grade criteria).
pub const ADVERSE_EVENTS_CSV: &str = include_str!("../data/adverse_events.csv");

/// File label used in parse errors for the attribution table.
pub const ATTRIBUTIONS_FILE: &str = "attributions.csv";

/// File label used in parse errors for the grade table.
pub const GRADES_FILE: &str = "grades.csv";

/// File label used in parse errors for the adverse-event table.
pub const ADVERSE_EVENTS_FILE: &str = "adverse_events.csv";
