#![allow(missing_docs)]

use ctcae_model::{AdverseEvent, CodedValue, Grade, GradeOption, MEDDRA};

#[test]
fn test_grade_option_parses_its_grade() {
    let option = GradeOption {
        name: "Grade 4".to_string(),
        description: "Life-threatening consequences; urgent intervention indicated".to_string(),
        code: "C1517874".to_string(),
    };
    assert_eq!(option.grade(), Some(Grade::Grade4));

    let bogus = GradeOption {
        name: "Grade 99".to_string(),
        description: String::new(),
        code: String::new(),
    };
    assert_eq!(bogus.grade(), None);
}

#[test]
fn test_event_with_sparse_grades() {
    let event = AdverseEvent {
        code: 10019515,
        soc: "Blood and lymphatic system disorders".to_string(),
        name: "Hemolytic uremic syndrome".to_string(),
        description: None,
        grade1: Some("Evidence of RBC destruction without clinical consequences".to_string()),
        grade2: None,
        grade3: Some("Laboratory findings with clinical consequences".to_string()),
        grade4: Some("Life-threatening consequences".to_string()),
        grade5: Some("Death".to_string()),
    };

    assert!(event.defines_grade(Grade::Grade1));
    assert!(!event.defines_grade(Grade::Grade2));
    assert_eq!(
        event.defined_grades(),
        vec![Grade::Grade1, Grade::Grade3, Grade::Grade4, Grade::Grade5]
    );
}

#[test]
fn test_coded_value_round_trips_through_json() {
    let concept = CodedValue::new("#Treatment", MEDDRA, "Treatment");
    let json = serde_json::to_string(&concept).expect("serialize coded value");
    let round: CodedValue = serde_json::from_str(&json).expect("deserialize coded value");
    assert_eq!(round, concept);
    assert!(json.contains("\"codeSystem\""));
    assert!(json.contains("\"displayText\""));
}

#[test]
fn test_empty_sentinel_survives_serialization() {
    let json = serde_json::to_string(&CodedValue::empty()).expect("serialize empty");
    assert_eq!(json, r#"{"value":"","codeSystem":"","displayText":""}"#);
    let round: CodedValue = serde_json::from_str(&json).expect("deserialize empty");
    assert!(round.is_empty());
}
