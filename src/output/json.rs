use serde_json::{Value, json};

use crate::session::Outcome;
use crate::syllabus::{CourseDuration, SUBJECT_CATALOG};

/// Machine-readable form of one submission
pub(crate) fn outcome_json(outcome: &Outcome) -> Value {
    match outcome {
        Outcome::Generated(syllabus) => json!({
            "success": true,
            "subject": syllabus.subject.as_str(),
            "duration": syllabus.duration.label(),
            "weeks": syllabus.duration.weeks(),
            "generated_at": syllabus.generated_at.to_rfc3339(),
            "content": syllabus.content,
        }),
        Outcome::Failed { request, error } => json!({
            "success": false,
            "kind": error.kind(),
            "message": error.to_string(),
            "subject": request.subject.as_str(),
            "duration": request.duration.label(),
        }),
        Outcome::Rejected(error) => json!({
            "success": false,
            "kind": "input",
            "message": error.to_string(),
        }),
    }
}

pub(crate) fn catalog_json() -> Value {
    let durations: Vec<Value> = CourseDuration::all()
        .map(|d| json!({ "weeks": d.weeks(), "label": d.label() }))
        .collect();
    json!({
        "subjects": SUBJECT_CATALOG,
        "durations": durations,
        "default_duration": CourseDuration::default().label(),
    })
}

/// Error payload for failures that happen outside a submission
pub(crate) fn error_json(kind: &str, message: &str) -> Value {
    json!({
        "success": false,
        "kind": kind,
        "message": message,
    })
}

pub(crate) fn print_json(value: &Value) {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    });
    println!("{text}");
}
