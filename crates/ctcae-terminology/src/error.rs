#![deny(unsafe_code)]

use ctcae_model::Grade;

/// Errors raised while loading and validating the embedded reference tables.
///
/// These are the only fatal conditions in the crate; every lookup operation
/// degrades to an empty result instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum TerminologyError {
    #[error("failed to parse embedded CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    #[error("duplicate name in {table} table: {name}")]
    DuplicateName { table: &'static str, name: String },

    #[error("grade table entry is not a recognized grade: {name}")]
    UnknownGrade { name: String },

    #[error("grade table is missing {grade}")]
    MissingGrade { grade: Grade },

    #[error("adverse event defines no grade criteria: {name}")]
    NoGradeCriteria { name: String },
}

pub type Result<T> = std::result::Result<T, TerminologyError>;
