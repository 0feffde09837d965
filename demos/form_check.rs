//! Form validation and sanitization demonstration.
//!
//! This example runs a hostile submission through the validator and the
//! sanitizer, prints the combined report, and appends it to a validation log.
//!
//! Run with: `cargo run --example form_check`

use octoguard::{
    sanitize_message, validate_all, FieldName, FormData, FormReport, ValidationLog,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Form Check Example ===\n");

    println!("--- Scenario 1: Clean Submission ---");
    let clean = FormData::new()
        .with(FieldName::FullName, "Mary-Jane O'Neil")
        .with(FieldName::Email, "mj@example.com")
        .with(FieldName::Username, "mj_oneil")
        .with(FieldName::Message, "Looking forward to the meetup!");

    let report = FormReport::evaluate(&clean);
    for field in FieldName::ALL {
        println!("{:<10} {}", field.title(), report.status(field));
    }
    println!("All valid: {}", report.all_valid());

    println!("\n--- Scenario 2: Hostile Submission ---");
    let hostile = FormData::new()
        .with(FieldName::FullName, "  R0bert'); DROP")
        .with(FieldName::Email, " Bobby @Tables.COM")
        .with(FieldName::Username, "1bobby tables!")
        .with(
            FieldName::Message,
            "<script>steal()</script>Hi <b>admin</b>' OR '1'='1 --",
        );

    let report = FormReport::evaluate(&hostile);
    print!("{}", report);

    println!("--- Scenario 3: Missing vs Empty ---");
    let partial = FormData::new().with(FieldName::Username, "");
    for (field, outcome) in validate_all(&partial) {
        println!("{:<10} {}", field.title(), outcome);
    }

    println!("\n--- Scenario 4: Escaping Is Not Idempotent ---");
    let once = sanitize_message("Fish & chips");
    let twice = sanitize_message(once.sanitized());
    println!("Once:  {}", once.sanitized());
    println!("Twice: {}", twice.sanitized());

    println!("\n--- Scenario 5: Persisting the Report ---");
    let log = ValidationLog::default();
    match log.append_report(&report) {
        Ok(()) => println!("Report appended to {}", log.path().display()),
        Err(err) => println!("Could not write report: {}", err),
    }
}
