//! Data model for the CTCAE adverse-event terminology.
//!
//! This crate holds the value types shared by the terminology registry and
//! its consumers: the three reference-table record types, the closed
//! severity [`Grade`] scale, and the [`CodedValue`] triple used to hand
//! coded concepts to clinical-data layers.

pub mod attribution;
pub mod concept;
pub mod event;
pub mod grade;

pub use attribution::AttributionOption;
pub use concept::{CodedValue, MEDDRA, NCI_METATHESAURUS};
pub use event::AdverseEvent;
pub use grade::{Grade, GradeOption};
