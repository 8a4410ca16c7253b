//! CTCAE reference tables with lookup, filtering, and concept resolution.
//!
//! This crate embeds the CTCAE adverse-event reference data (attribution
//! options, severity grades, adverse-event terms) and exposes the lookup
//! surface over it:
//!
//! - **Resolution**: case-insensitive exact name matching over each table
//! - **Compatibility filters**: which grades an event defines, and which
//!   events define a grade
//! - **Coded-value adapter**: resolve-and-format into the
//!   (value, codeSystem, displayText) triple consumed by clinical-data
//!   layers
//! - **Validity predicates**: boolean checks built on the same resolution
//!
//! Tables are parsed from embedded CSV once per process and are immutable
//! afterwards; all operations are pure reads, safe to call concurrently.
//!
//! "Not found" is a normal outcome throughout: record lookups return
//! `None`, adapter calls return the all-empty [`CodedValue`] sentinel, and
//! predicates return `false`. Nothing on the lookup path fails.
//!
//! # Example
//!
//! ```
//! use ctcae_terminology as ctcae;
//!
//! let concept = ctcae::grade_codeable_concept("grade 3");
//! assert_eq!(concept.display_text, "Grade 3");
//!
//! assert!(ctcae::is_valid_grade_for_adverse_event("Grade 3", "Diarrhea"));
//! assert!(!ctcae::is_valid_grade_for_adverse_event("Grade 4", "Tinnitus"));
//! ```

pub mod descriptions;
pub mod embedded;
pub mod error;
pub mod loader;
pub mod registry;
pub mod resolver;

pub use crate::descriptions::field_description;
pub use crate::error::{Result, TerminologyError};
pub use crate::registry::{Terminology, shared};
pub use crate::resolver::{Named, find, find_index};

use ctcae_model::{AdverseEvent, AttributionOption, CodedValue, GradeOption};

// =============================================================================
// Convenience surface over the shared instance
// =============================================================================

/// The attribution table, in source order.
pub fn attribution_options() -> &'static [AttributionOption] {
    shared().attribution_options()
}

/// The grade table, in source order.
pub fn grade_options() -> &'static [GradeOption] {
    shared().grade_options()
}

/// The adverse-event table, in source order.
pub fn adverse_event_options() -> &'static [AdverseEvent] {
    shared().adverse_event_options()
}

/// Resolve an attribution by name, case-insensitively.
pub fn find_attribution(name: &str) -> Option<&'static AttributionOption> {
    shared().find_attribution(name)
}

/// Resolve a grade option by name, case-insensitively.
pub fn find_grade(name: &str) -> Option<&'static GradeOption> {
    shared().find_grade(name)
}

/// Resolve an adverse-event term by name, case-insensitively.
pub fn find_adverse_event(name: &str) -> Option<&'static AdverseEvent> {
    shared().find_adverse_event(name)
}

/// Coded value for an attribution name; empty sentinel when unresolved.
pub fn attribution_codeable_concept(name: &str) -> CodedValue {
    shared().attribution_codeable_concept(name)
}

/// Coded value for a grade name; empty sentinel when unresolved.
pub fn grade_codeable_concept(name: &str) -> CodedValue {
    shared().grade_codeable_concept(name)
}

/// Coded value for an adverse-event name; empty sentinel when unresolved.
pub fn adverse_event_codeable_concept(name: &str) -> CodedValue {
    shared().adverse_event_codeable_concept(name)
}

/// The grade options the named event defines, in table order.
pub fn grade_options_for_adverse_event(event_name: &str) -> Vec<&'static GradeOption> {
    shared().grade_options_for_adverse_event(event_name)
}

/// The adverse events defining the named grade, in table order.
pub fn adverse_event_options_for_grade(grade_name: &str) -> Vec<&'static AdverseEvent> {
    shared().adverse_event_options_for_grade(grade_name)
}

/// True iff the name resolves in the grade table.
pub fn is_valid_grade(name: &str) -> bool {
    shared().is_valid_grade(name)
}

/// True iff the name is non-blank and resolves in the adverse-event table.
pub fn is_valid_adverse_event(name: &str) -> bool {
    shared().is_valid_adverse_event(name)
}

/// True iff both names resolve and the event defines that grade.
pub fn is_valid_grade_for_adverse_event(grade_name: &str, event_name: &str) -> bool {
    shared().is_valid_grade_for_adverse_event(grade_name, event_name)
}
