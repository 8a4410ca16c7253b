use serde::{Deserialize, Serialize};

/// Coding system URI for MedDRA-coded concepts (adverse events, attributions).
///
/// Consumed downstream by systems expecting standard terminology URIs;
/// the exact string is part of the wire contract.
pub const MEDDRA: &str = "https://www.meddra.org/";

/// Coding system URI for NCI Metathesaurus-coded concepts (severity grades).
pub const NCI_METATHESAURUS: &str = "http://ncimeta.nci.nih.gov";

/// A coded clinical concept: (code, coding-system URI, display text).
///
/// This is the CodeableConcept-style triple handed to clinical-data layers.
/// An unresolved lookup yields the all-empty triple from [`CodedValue::empty`]
/// rather than an error; callers distinguish "found" from "not found" with
/// [`CodedValue::is_empty`]. There is no separate found flag on the wire.
///
/// Serializes with the field names downstream consumers expect:
/// `value`, `codeSystem`, `displayText`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedValue {
    /// Code or identifier appropriate to the record kind.
    pub value: String,
    /// Coding system URI ([`MEDDRA`] or [`NCI_METATHESAURUS`]).
    #[serde(rename = "codeSystem")]
    pub code_system: String,
    /// The matched record's canonical name.
    #[serde(rename = "displayText")]
    pub display_text: String,
}

impl CodedValue {
    /// Build a populated coded value.
    pub fn new(
        value: impl Into<String>,
        code_system: impl Into<String>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            code_system: code_system.into(),
            display_text: display_text.into(),
        }
    }

    /// The "not found" sentinel: a well-formed triple with every field empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when this is the "not found" sentinel.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.code_system.is_empty() && self.display_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_concept_is_well_formed() {
        let concept = CodedValue::empty();
        assert!(concept.is_empty());
        assert_eq!(concept.value, "");
        assert_eq!(concept.code_system, "");
        assert_eq!(concept.display_text, "");
    }

    #[test]
    fn populated_concept_is_not_empty() {
        let concept = CodedValue::new("10002272", MEDDRA, "Anemia");
        assert!(!concept.is_empty());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let concept = CodedValue::new("C1519275", NCI_METATHESAURUS, "Grade 3");
        let json = serde_json::to_value(&concept).expect("serialize concept");
        assert_eq!(json["value"], "C1519275");
        assert_eq!(json["codeSystem"], "http://ncimeta.nci.nih.gov");
        assert_eq!(json["displayText"], "Grade 3");
    }
}
