use serde::{Deserialize, Serialize};

use crate::grade::Grade;

/// One adverse-event term from the CTCAE reference table.
///
/// Each term lives under a System Organ Class and defines severity
/// criteria text for a subset of the five grades; a `None` grade field
/// means that grade does not apply to this term. Every real record (the
/// per-SOC "Other, specify" catch-alls included) defines at least one
/// grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdverseEvent {
    /// MedDRA code for this term (e.g., 10002272 for Anemia).
    pub code: u32,
    /// System Organ Class grouping this term (e.g., "Cardiac disorders").
    pub soc: String,
    /// CTCAE term name, unique case-insensitively within the table.
    pub name: String,
    /// Term definition, when the source table provides one.
    pub description: Option<String>,
    /// Grade 1 severity criteria text.
    pub grade1: Option<String>,
    /// Grade 2 severity criteria text.
    pub grade2: Option<String>,
    /// Grade 3 severity criteria text.
    pub grade3: Option<String>,
    /// Grade 4 severity criteria text.
    pub grade4: Option<String>,
    /// Grade 5 severity criteria text.
    pub grade5: Option<String>,
}

impl AdverseEvent {
    /// The severity criteria text for a grade, if this term defines it.
    pub fn grade_text(&self, grade: Grade) -> Option<&str> {
        let text = match grade {
            Grade::Grade1 => &self.grade1,
            Grade::Grade2 => &self.grade2,
            Grade::Grade3 => &self.grade3,
            Grade::Grade4 => &self.grade4,
            Grade::Grade5 => &self.grade5,
        };
        text.as_deref()
    }

    /// True when this term defines criteria for the grade.
    pub fn defines_grade(&self, grade: Grade) -> bool {
        self.grade_text(grade).is_some()
    }

    /// The grades this term defines, in ascending order.
    pub fn defined_grades(&self) -> Vec<Grade> {
        Grade::all()
            .iter()
            .filter(|grade| self.defines_grade(**grade))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tinnitus() -> AdverseEvent {
        AdverseEvent {
            code: 10043882,
            soc: "Ear and labyrinth disorders".to_string(),
            name: "Tinnitus".to_string(),
            description: Some("A disorder characterized by noise in the ears.".to_string()),
            grade1: Some("Mild symptoms; intervention not indicated".to_string()),
            grade2: Some("Moderate symptoms; limiting instrumental ADL".to_string()),
            grade3: Some("Severe symptoms; limiting self care ADL".to_string()),
            grade4: None,
            grade5: None,
        }
    }

    #[test]
    fn grade_text_maps_to_named_fields() {
        let event = tinnitus();
        assert!(event.grade_text(Grade::Grade1).is_some());
        assert!(event.grade_text(Grade::Grade3).is_some());
        assert_eq!(event.grade_text(Grade::Grade4), None);
        assert_eq!(event.grade_text(Grade::Grade5), None);
    }

    #[test]
    fn defined_grades_preserve_order() {
        let event = tinnitus();
        assert_eq!(
            event.defined_grades(),
            vec![Grade::Grade1, Grade::Grade2, Grade::Grade3]
        );
    }
}
