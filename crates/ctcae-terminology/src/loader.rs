//! Reference-table loading.
//!
//! Parses the embedded CSV tables into model types and validates the table
//! invariants: unique names within each table, a complete five-grade scale,
//! and at least one grade criterion per adverse-event term.

use std::collections::BTreeSet;
use std::io::Cursor;

use serde::Deserialize;
use tracing::debug;

use ctcae_model::{AdverseEvent, AttributionOption, Grade, GradeOption};

use crate::error::{Result, TerminologyError};

/// Parse and validate the attribution table.
pub fn parse_attributions(content: &str, file: &str) -> Result<Vec<AttributionOption>> {
    let mut options = Vec::new();
    for result in reader(content).deserialize::<AttributionRow>() {
        let row = result.map_err(|e| csv_error(file, &e))?;
        options.push(AttributionOption {
            name: row.name.trim().to_string(),
            description: row.description.trim().to_string(),
        });
    }
    check_unique_names("attribution", options.iter().map(|o| o.name.as_str()))?;
    debug!(rows = options.len(), "loaded attribution table");
    Ok(options)
}

/// Parse and validate the grade table.
///
/// Every row must name a grade on the closed scale, and the table must
/// cover all five grades exactly once.
pub fn parse_grades(content: &str, file: &str) -> Result<Vec<GradeOption>> {
    let mut options = Vec::new();
    for result in reader(content).deserialize::<GradeRow>() {
        let row = result.map_err(|e| csv_error(file, &e))?;
        options.push(GradeOption {
            name: row.name.trim().to_string(),
            description: row.description.trim().to_string(),
            code: row.code.trim().to_string(),
        });
    }
    check_unique_names("grade", options.iter().map(|o| o.name.as_str()))?;
    for option in &options {
        if option.grade().is_none() {
            return Err(TerminologyError::UnknownGrade {
                name: option.name.clone(),
            });
        }
    }
    for grade in Grade::all() {
        if !options.iter().any(|o| o.grade() == Some(*grade)) {
            return Err(TerminologyError::MissingGrade { grade: *grade });
        }
    }
    debug!(rows = options.len(), "loaded grade table");
    Ok(options)
}

/// Parse and validate the adverse-event table.
pub fn parse_adverse_events(content: &str, file: &str) -> Result<Vec<AdverseEvent>> {
    let mut events = Vec::new();
    for result in reader(content).deserialize::<AdverseEventRow>() {
        let row = result.map_err(|e| csv_error(file, &e))?;
        let event = AdverseEvent {
            code: row.code,
            soc: row.soc.trim().to_string(),
            name: row.name.trim().to_string(),
            description: non_empty(&row.definition),
            grade1: non_empty(&row.grade1),
            grade2: non_empty(&row.grade2),
            grade3: non_empty(&row.grade3),
            grade4: non_empty(&row.grade4),
            grade5: non_empty(&row.grade5),
        };
        if event.defined_grades().is_empty() {
            return Err(TerminologyError::NoGradeCriteria { name: event.name });
        }
        events.push(event);
    }
    check_unique_names("adverse event", events.iter().map(|e| e.name.as_str()))?;
    debug!(rows = events.len(), "loaded adverse event table");
    Ok(events)
}

// =============================================================================
// CSV Row Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct AttributionRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Debug, Deserialize)]
struct GradeRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "NCI Code")]
    code: String,
}

#[derive(Debug, Deserialize)]
struct AdverseEventRow {
    #[serde(rename = "MedDRA Code")]
    code: u32,
    #[serde(rename = "System Organ Class")]
    soc: String,
    #[serde(rename = "CTCAE Term")]
    name: String,
    #[serde(rename = "Definition")]
    definition: String,
    #[serde(rename = "Grade 1")]
    grade1: String,
    #[serde(rename = "Grade 2")]
    grade2: String,
    #[serde(rename = "Grade 3")]
    grade3: String,
    #[serde(rename = "Grade 4")]
    grade4: String,
    #[serde(rename = "Grade 5")]
    grade5: String,
}

// =============================================================================
// Helpers
// =============================================================================

fn reader(content: &str) -> csv::Reader<Cursor<&[u8]>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(content.as_bytes()))
}

fn csv_error(file: &str, error: &csv::Error) -> TerminologyError {
    TerminologyError::CsvParse {
        file: file.to_string(),
        message: error.to_string(),
    }
}

/// Names must be unique case-insensitively within a table.
fn check_unique_names<'a>(
    table: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name.to_lowercase()) {
            return Err(TerminologyError::DuplicateName {
                table,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Return Some(value) if non-empty after trimming, None otherwise.
fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT_HEADER: &str = "MedDRA Code,System Organ Class,CTCAE Term,Definition,\
                                Grade 1,Grade 2,Grade 3,Grade 4,Grade 5\n";

    #[test]
    fn parses_minimal_event_table() {
        let data = format!(
            "{EVENT_HEADER}10043882,Ear and labyrinth disorders,Tinnitus,,Mild,Moderate,Severe,,\n"
        );
        let events = parse_adverse_events(&data, "test.csv").expect("parse events");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Tinnitus");
        assert_eq!(events[0].description, None);
        assert_eq!(events[0].grade3.as_deref(), Some("Severe"));
        assert_eq!(events[0].grade4, None);
    }

    #[test]
    fn rejects_event_without_grade_criteria() {
        let data = format!("{EVENT_HEADER}10000001,Some class,Gradeless event,,,,,,\n");
        let error = parse_adverse_events(&data, "test.csv").expect_err("must fail");
        assert!(matches!(
            error,
            TerminologyError::NoGradeCriteria { name } if name == "Gradeless event"
        ));
    }

    #[test]
    fn rejects_case_insensitive_duplicate_names() {
        let data = format!(
            "{EVENT_HEADER}10000001,Some class,Anemia,,Mild,,,,\n\
             10000002,Some class,ANEMIA,,Mild,,,,\n"
        );
        let error = parse_adverse_events(&data, "test.csv").expect_err("must fail");
        assert!(matches!(
            error,
            TerminologyError::DuplicateName { table: "adverse event", .. }
        ));
    }

    #[test]
    fn rejects_unrecognized_grade_name() {
        let data = "Name,Description,NCI Code\nGrade 6,Beyond the scale,C0000000\n";
        let error = parse_grades(data, "test.csv").expect_err("must fail");
        assert!(matches!(
            error,
            TerminologyError::UnknownGrade { name } if name == "Grade 6"
        ));
    }

    #[test]
    fn rejects_incomplete_grade_scale() {
        let data = "Name,Description,NCI Code\n\
                   Grade 1,Mild,C1513302\n\
                   Grade 2,Moderate,C1513374\n";
        let error = parse_grades(data, "test.csv").expect_err("must fail");
        assert!(matches!(
            error,
            TerminologyError::MissingGrade { grade: Grade::Grade3 }
        ));
    }

    #[test]
    fn rejects_malformed_csv() {
        let data = format!("{EVENT_HEADER}not-a-number,Some class,Event,,Mild,,,,\n");
        let error = parse_adverse_events(&data, "events.csv").expect_err("must fail");
        assert!(matches!(
            error,
            TerminologyError::CsvParse { file, .. } if file == "events.csv"
        ));
    }
}
