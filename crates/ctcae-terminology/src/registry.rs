//! The terminology registry: the three reference tables plus every lookup,
//! filter, adapter, and predicate operation defined over them.

use std::sync::LazyLock;

use tracing::debug;

use ctcae_model::{
    AdverseEvent, AttributionOption, CodedValue, Grade, GradeOption, MEDDRA, NCI_METATHESAURUS,
};

use crate::embedded;
use crate::error::Result;
use crate::loader;
use crate::resolver;

static SHARED: LazyLock<Terminology> =
    LazyLock::new(|| Terminology::load().expect("embedded CTCAE tables are valid"));

/// The process-wide terminology instance.
///
/// Built once from the embedded tables on first use and read-only
/// thereafter, so concurrent callers need no coordination.
pub fn shared() -> &'static Terminology {
    &SHARED
}

/// The CTCAE reference tables and the operations over them.
///
/// Tables keep their source order; every operation is a pure read. Lookups
/// that fail resolve to `None`, an empty list, an empty [`CodedValue`], or
/// `false`, never an error.
#[derive(Debug, Clone)]
pub struct Terminology {
    attributions: Vec<AttributionOption>,
    grades: Vec<GradeOption>,
    adverse_events: Vec<AdverseEvent>,
}

impl Terminology {
    /// Load and validate the embedded reference tables.
    pub fn load() -> Result<Self> {
        let terminology = Self {
            attributions: loader::parse_attributions(
                embedded::ATTRIBUTIONS_CSV,
                embedded::ATTRIBUTIONS_FILE,
            )?,
            grades: loader::parse_grades(embedded::GRADES_CSV, embedded::GRADES_FILE)?,
            adverse_events: loader::parse_adverse_events(
                embedded::ADVERSE_EVENTS_CSV,
                embedded::ADVERSE_EVENTS_FILE,
            )?,
        };
        debug!(
            attributions = terminology.attributions.len(),
            grades = terminology.grades.len(),
            adverse_events = terminology.adverse_events.len(),
            "terminology tables ready"
        );
        Ok(terminology)
    }

    // =========================================================================
    // Table accessors
    // =========================================================================

    /// The attribution table, in source order.
    pub fn attribution_options(&self) -> &[AttributionOption] {
        &self.attributions
    }

    /// The grade table, in source order.
    pub fn grade_options(&self) -> &[GradeOption] {
        &self.grades
    }

    /// The adverse-event table, in source order.
    pub fn adverse_event_options(&self) -> &[AdverseEvent] {
        &self.adverse_events
    }

    // =========================================================================
    // Name resolution
    // =========================================================================

    /// Resolve an attribution by name, case-insensitively.
    pub fn find_attribution(&self, name: &str) -> Option<&AttributionOption> {
        resolver::find(&self.attributions, name)
    }

    /// Resolve a grade option by name, case-insensitively.
    pub fn find_grade(&self, name: &str) -> Option<&GradeOption> {
        resolver::find(&self.grades, name)
    }

    /// Resolve an adverse-event term by name, case-insensitively.
    pub fn find_adverse_event(&self, name: &str) -> Option<&AdverseEvent> {
        resolver::find(&self.adverse_events, name)
    }

    // =========================================================================
    // Coded-value adapter
    // =========================================================================

    /// Coded value for an attribution name.
    ///
    /// On a match the value is the canonical name prefixed with `#` under
    /// the MedDRA system; otherwise the empty sentinel.
    pub fn attribution_codeable_concept(&self, name: &str) -> CodedValue {
        match self.find_attribution(name) {
            Some(option) => CodedValue::new(format!("#{}", option.name), MEDDRA, &option.name),
            None => CodedValue::empty(),
        }
    }

    /// Coded value for a grade name.
    ///
    /// On a match the value is the grade's fixed NCI Metathesaurus code;
    /// otherwise the empty sentinel.
    pub fn grade_codeable_concept(&self, name: &str) -> CodedValue {
        match self.find_grade(name) {
            Some(option) => CodedValue::new(&option.code, NCI_METATHESAURUS, &option.name),
            None => CodedValue::empty(),
        }
    }

    /// Coded value for an adverse-event name.
    ///
    /// On a match the value is the MedDRA code rendered as text; otherwise
    /// the empty sentinel.
    pub fn adverse_event_codeable_concept(&self, name: &str) -> CodedValue {
        match self.find_adverse_event(name) {
            Some(event) => CodedValue::new(event.code.to_string(), MEDDRA, &event.name),
            None => CodedValue::empty(),
        }
    }

    // =========================================================================
    // Grade/event compatibility
    // =========================================================================

    /// The grade options whose grade the named event defines, in table order.
    ///
    /// An unresolved event name yields an empty list.
    pub fn grade_options_for_adverse_event(&self, event_name: &str) -> Vec<&GradeOption> {
        let Some(event) = self.find_adverse_event(event_name) else {
            return Vec::new();
        };
        self.grades
            .iter()
            .filter(|option| {
                option
                    .grade()
                    .is_some_and(|grade| event.defines_grade(grade))
            })
            .collect()
    }

    /// The adverse events defining the named grade, in table order.
    ///
    /// A name outside the grade scale yields an empty list.
    pub fn adverse_event_options_for_grade(&self, grade_name: &str) -> Vec<&AdverseEvent> {
        let Some(grade) = Grade::from_name(grade_name) else {
            return Vec::new();
        };
        self.adverse_events
            .iter()
            .filter(|event| event.defines_grade(grade))
            .collect()
    }

    // =========================================================================
    // Validity predicates
    // =========================================================================

    /// True iff the name resolves in the grade table.
    pub fn is_valid_grade(&self, name: &str) -> bool {
        self.find_grade(name).is_some()
    }

    /// True iff the name is non-blank and resolves in the adverse-event table.
    ///
    /// Blank input is rejected before lookup; `is_valid_grade` carries no
    /// such guard. The asymmetry is part of the inherited contract.
    pub fn is_valid_adverse_event(&self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.find_adverse_event(name).is_some()
    }

    /// True iff both names resolve and the event defines that grade.
    pub fn is_valid_grade_for_adverse_event(&self, grade_name: &str, event_name: &str) -> bool {
        let Some(option) = self.find_grade(grade_name) else {
            return false;
        };
        let Some(event) = self.find_adverse_event(event_name) else {
            return false;
        };
        option.grade().is_some_and(|grade| event.defines_grade(grade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_embedded_tables() {
        let terminology = Terminology::load().expect("load terminology");
        assert_eq!(terminology.attribution_options().len(), 5);
        assert_eq!(terminology.grade_options().len(), 5);
        assert!(terminology.adverse_event_options().len() > 40);
    }

    #[test]
    fn shared_instance_is_loaded() {
        assert_eq!(shared().grade_options().len(), 5);
    }
}
