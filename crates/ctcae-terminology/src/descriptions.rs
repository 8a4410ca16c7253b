//! Fixed descriptive text for the adverse-event form fields.

/// Description of the toxicity field.
pub const TOXICITY: &str = "Any unfavorable and unintended sign, symptom, or disease \
     temporally associated with the use of a medical treatment or procedure, graded per \
     the Common Terminology Criteria for Adverse Events (CTCAE).";

/// Description of the adverse-event field.
pub const ADVERSE_EVENT: &str = "The CTCAE term describing the unfavorable clinical \
     occurrence, identified by its MedDRA code under a System Organ Class.";

/// Description of the grade field.
pub const GRADE: &str = "The CTCAE severity grade of the adverse event, from Grade 1 \
     (mild) through Grade 5 (death related to the adverse event).";

/// Description of the attribution field.
pub const ATTRIBUTION: &str = "The judged causal relationship between the adverse event \
     and the study treatment, the disease under study, or another cause.";

/// Look up the fixed description for a field-kind label.
///
/// The label set is closed: `"toxicity"`, `"adverseEvent"`, `"grade"`,
/// `"attribution"`. Anything else maps to `None`.
pub fn field_description(kind: &str) -> Option<&'static str> {
    match kind {
        "toxicity" => Some(TOXICITY),
        "adverseEvent" => Some(ADVERSE_EVENT),
        "grade" => Some(GRADE),
        "attribution" => Some(ATTRIBUTION),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_have_descriptions() {
        for kind in ["toxicity", "adverseEvent", "grade", "attribution"] {
            assert!(field_description(kind).is_some(), "missing {kind}");
        }
    }

    #[test]
    fn unknown_kinds_are_none() {
        assert_eq!(field_description("unknown-kind"), None);
        assert_eq!(field_description(""), None);
        // Labels are exact: no case folding on this closed set.
        assert_eq!(field_description("Grade"), None);
        assert_eq!(field_description("adverseevent"), None);
    }
}
