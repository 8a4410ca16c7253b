use anyhow::{Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::{info, warn};

use ctcae_model::{AdverseEvent, CodedValue};
use ctcae_terminology as ctcae;

use crate::cli::{
    CheckArgs, DescribeArgs, EventsArgs, GradesArgs, KindArg, LookupArgs, TableArg, TablesArgs,
};

pub fn run_tables(args: &TablesArgs) -> Result<()> {
    match args.table {
        TableArg::Attributions => print_attributions(),
        TableArg::Grades => print_grades(),
        TableArg::Events => print_events(ctcae::adverse_event_options()),
        TableArg::All => {
            print_attributions();
            print_grades();
            print_events(ctcae::adverse_event_options());
        }
    }
    Ok(())
}

pub fn run_lookup(args: &LookupArgs) -> Result<bool> {
    let concept = match args.kind {
        KindArg::Attribution => ctcae::attribution_codeable_concept(&args.name),
        KindArg::Grade => ctcae::grade_codeable_concept(&args.name),
        KindArg::Event => ctcae::adverse_event_codeable_concept(&args.name),
    };
    let found = !concept.is_empty();
    if !found {
        warn!(name = %args.name, "no matching record; returning the empty concept");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&concept)?);
    } else {
        print_concept(&concept);
    }
    Ok(found)
}

pub fn run_grades(args: &GradesArgs) -> Result<()> {
    let Some(event) = ctcae::find_adverse_event(&args.event) else {
        warn!(event = %args.event, "adverse event not found; no grades apply");
        println!("No grades apply: unknown adverse event \"{}\"", args.event);
        return Ok(());
    };

    let options = ctcae::grade_options_for_adverse_event(&args.event);
    info!(event = %event.name, grades = options.len(), "resolved applicable grades");

    let mut table = new_table(vec!["Grade", "NCI Code", "Criteria"]);
    for option in options {
        let criteria = option
            .grade()
            .and_then(|grade| event.grade_text(grade))
            .unwrap_or_default();
        table.add_row(vec![option.name.as_str(), option.code.as_str(), criteria]);
    }
    println!("{}: {}", event.name, event.soc);
    println!("{table}");
    Ok(())
}

pub fn run_events(args: &EventsArgs) -> Result<()> {
    let events = ctcae::adverse_event_options_for_grade(&args.grade);
    if events.is_empty() {
        warn!(grade = %args.grade, "no adverse events define this grade");
        println!("No adverse events define \"{}\"", args.grade);
        return Ok(());
    }
    info!(grade = %args.grade, events = events.len(), "resolved events for grade");
    print_events(events);
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let valid = match (args.grade.as_deref(), args.event.as_deref()) {
        (Some(grade), Some(event)) => {
            let valid = ctcae::is_valid_grade_for_adverse_event(grade, event);
            println!(
                "{} for {}: {}",
                grade,
                event,
                if valid { "valid" } else { "invalid" }
            );
            valid
        }
        (Some(grade), None) => {
            let valid = ctcae::is_valid_grade(grade);
            println!("{}: {}", grade, if valid { "valid grade" } else { "invalid grade" });
            valid
        }
        (None, Some(event)) => {
            let valid = ctcae::is_valid_adverse_event(event);
            println!(
                "{}: {}",
                event,
                if valid { "valid adverse event" } else { "invalid adverse event" }
            );
            valid
        }
        (None, None) => bail!("provide --grade and/or --event"),
    };
    Ok(valid)
}

pub fn run_describe(args: &DescribeArgs) -> Result<bool> {
    match ctcae::field_description(&args.kind) {
        Some(description) => {
            println!("{description}");
            Ok(true)
        }
        None => {
            warn!(kind = %args.kind, "unknown field kind");
            println!(
                "Unknown field \"{}\" (expected toxicity, adverseEvent, grade, or attribution)",
                args.kind
            );
            Ok(false)
        }
    }
}

fn print_attributions() {
    let mut table = new_table(vec!["Attribution", "Description"]);
    for option in ctcae::attribution_options() {
        table.add_row(vec![option.name.as_str(), option.description.as_str()]);
    }
    println!("{table}");
}

fn print_grades() {
    let mut table = new_table(vec!["Grade", "NCI Code", "Description"]);
    for option in ctcae::grade_options() {
        table.add_row(vec![
            option.name.as_str(),
            option.code.as_str(),
            option.description.as_str(),
        ]);
    }
    println!("{table}");
}

fn print_events<'a>(events: impl IntoIterator<Item = &'a AdverseEvent>) {
    let mut table = new_table(vec!["MedDRA Code", "System Organ Class", "Term", "Grades"]);
    for event in events {
        let grades = event
            .defined_grades()
            .iter()
            .map(|grade| grade.number().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            event.code.to_string(),
            event.soc.clone(),
            event.name.clone(),
            grades,
        ]);
    }
    println!("{table}");
}

fn print_concept(concept: &CodedValue) {
    let mut table = new_table(vec!["Value", "Code System", "Display Text"]);
    table.add_row(vec![
        concept.value.as_str(),
        concept.code_system.as_str(),
        concept.display_text.as_str(),
    ]);
    println!("{table}");
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_header(headers);
    table
}
