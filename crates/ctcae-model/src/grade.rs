use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CTCAE severity grade per the CTCAE v5.0 general guideline.
///
/// Grades run from 1 (mild) to 5 (death related to the adverse event).
/// Individual adverse-event terms define criteria text for a subset of
/// these grades; a grade with no criteria text does not apply to the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// Grade 1: mild; intervention not indicated.
    Grade1,
    /// Grade 2: moderate; minimal or noninvasive intervention indicated.
    Grade2,
    /// Grade 3: severe or medically significant; not immediately life-threatening.
    Grade3,
    /// Grade 4: life-threatening consequences; urgent intervention indicated.
    Grade4,
    /// Grade 5: death related to the adverse event.
    Grade5,
}

impl Grade {
    /// All five grades in ascending severity order.
    pub const fn all() -> &'static [Grade] {
        &[
            Grade::Grade1,
            Grade::Grade2,
            Grade::Grade3,
            Grade::Grade4,
            Grade::Grade5,
        ]
    }

    /// The canonical grade name as it appears in the grade table.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Grade::Grade1 => "Grade 1",
            Grade::Grade2 => "Grade 2",
            Grade::Grade3 => "Grade 3",
            Grade::Grade4 => "Grade 4",
            Grade::Grade5 => "Grade 5",
        }
    }

    /// Parse a grade from its table name, case-insensitively.
    ///
    /// Exact match only: no trimming, no bare digits. Unknown names map to
    /// `None` so a free-text grade query degrades to "no grade applies"
    /// rather than an error.
    pub fn from_name(name: &str) -> Option<Grade> {
        Grade::all()
            .iter()
            .find(|grade| grade.as_str().to_lowercase() == name.to_lowercase())
            .copied()
    }

    /// Numeric severity (1..=5).
    pub const fn number(&self) -> u8 {
        match self {
            Grade::Grade1 => 1,
            Grade::Grade2 => 2,
            Grade::Grade3 => 3,
            Grade::Grade4 => 4,
            Grade::Grade5 => 5,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::from_name(s).ok_or_else(|| format!("Unknown grade: {}", s))
    }
}

/// One row of the grade reference table.
///
/// Each option carries the fixed NCI Metathesaurus concept code emitted by
/// the coded-value adapter alongside the general CTCAE grade description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeOption {
    /// Canonical grade name (e.g., "Grade 3").
    pub name: String,
    /// General CTCAE severity description for this grade.
    pub description: String,
    /// Fixed NCI Metathesaurus concept code (e.g., "C1519275").
    pub code: String,
}

impl GradeOption {
    /// The closed-scale grade this option names.
    ///
    /// The loader guarantees every table row parses; `None` only occurs for
    /// hand-built records with a name outside the scale.
    pub fn grade(&self) -> Option<Grade> {
        Grade::from_name(&self.name)
    }
}
