use octoguard::{
    assess, generate, hash, sanitize_full_name, sanitize_message, sanitize_username,
    validate_all, validate_email, validate_username, FieldName, FieldStatus, FormData,
    FormReport, PasswordHistory, PasswordPolicy, Rating, ValidationLog, DEFAULT_PASSWORD_LOG,
    DEFAULT_VALIDATION_LOG, GENERATOR_SPECIAL_CHARACTERS, NO_HISTORY,
};

#[test]
fn email_examples() {
    let outcome = validate_email("john@example.com");
    assert!(outcome.is_valid());
    assert_eq!(outcome.reason(), None);

    let outcome = validate_email("bad email@x.com");
    assert!(!outcome.is_valid());
    assert_eq!(
        outcome.reason(),
        Some("Email address cannot contain spaces")
    );
}

#[test]
fn username_examples() {
    let outcome = validate_username("ab");
    assert_eq!(
        outcome.reason(),
        Some("Username must be at least 4 characters long")
    );

    assert!(validate_username("johndoe123").is_valid());
}

#[test]
fn script_block_is_stripped_from_message() {
    let outcome = sanitize_message("<script>alert(1)</script>Hello");

    assert_eq!(outcome.sanitized(), "Hello");
    assert!(outcome.was_modified());
    assert!(outcome.notes().iter().any(|n| n == "Script tags removed"));
}

#[test]
fn assessor_examples() {
    let weak = assess("password");
    assert_eq!(weak.rating(), Rating::Weak);
    assert!(weak
        .feedback()
        .iter()
        .any(|line| line.contains("Common password detected")));

    let strong = assess("Tr0ub4dor&3Zz!");
    assert_eq!(strong.rating(), Rating::Strong);
    assert_eq!(strong.feedback(), ["+ Excellent security!"]);
    assert_eq!(strong.color_token(), "#00C853");
}

#[test]
fn generate_twelve_always_meets_composition() {
    for _ in 0..1000 {
        let password = generate(12).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password
            .chars()
            .any(|c| GENERATOR_SPECIAL_CHARACTERS.contains(c)));
    }
}

#[test]
fn hash_is_deterministic() {
    let first = hash("correct horse battery staple");
    let second = hash("correct horse battery staple");

    assert_eq!(first, second);
    assert_eq!(first.len(), 64);
    assert_ne!(first, hash("correct horse battery stapler"));
}

// Re-running a sanitizer on its own output. Username is always a fixed
// point; full name and message are not in general.

#[test]
fn username_resanitize_is_fixed_point() {
    let once = sanitize_username("  john.doe!! ");
    let twice = sanitize_username(once.sanitized());

    assert_eq!(once.sanitized(), "johndoe");
    assert_eq!(twice.sanitized(), "johndoe");
    assert!(!twice.was_modified());
}

#[test]
fn full_name_resanitize_trims_exposed_space() {
    let once = sanitize_full_name("Ann 1");
    assert_eq!(once.sanitized(), "Ann ");

    let twice = sanitize_full_name(once.sanitized());
    assert_eq!(twice.sanitized(), "Ann");
    assert!(twice.was_modified());

    let clean = sanitize_full_name("Mary-Jane O'Neil");
    assert!(!clean.was_modified());
}

#[test]
fn message_resanitize_escapes_again() {
    let once = sanitize_message("Fish & chips");
    assert_eq!(once.sanitized(), "Fish &amp; chips");

    let twice = sanitize_message(once.sanitized());
    assert_eq!(twice.sanitized(), "Fish &amp;amp; chips");

    let plain = sanitize_message("Hello there");
    assert_eq!(
        sanitize_message(plain.sanitized()).sanitized(),
        plain.sanitized()
    );
}

#[test]
fn missing_and_empty_fields_are_distinguished() {
    let form = FormData::new().with(FieldName::Username, "");
    let results = validate_all(&form);

    assert_eq!(
        results[&FieldName::Username].reason(),
        Some("Username is required")
    );
    assert_eq!(
        results[&FieldName::Email].reason(),
        Some("Email field is missing")
    );
}

#[test]
fn end_to_end_submission_report() {
    let dir = tempfile::tempdir().unwrap();
    let form: FormData = [
        (FieldName::FullName, "Jane Doe"),
        (FieldName::Email, " Jane@Example.com"),
        (FieldName::Username, "jane_doe"),
        (FieldName::Message, "<b>Hi</b> there; 1=1 OR 1=1"),
    ]
    .into_iter()
    .collect();

    let report = FormReport::evaluate(&form);
    assert_eq!(report.status(FieldName::FullName), FieldStatus::Valid);
    assert_eq!(report.status(FieldName::Username), FieldStatus::Valid);
    assert_eq!(report.status(FieldName::Email), FieldStatus::Sanitized);
    assert_eq!(report.status(FieldName::Message), FieldStatus::Sanitized);
    assert!(report.all_valid());

    let log = ValidationLog::new(dir.path().join("results.txt"));
    log.append_report(&report).unwrap();

    let stored = std::fs::read_to_string(log.path()).unwrap();
    assert!(stored.contains("Validation Run: "));
    assert!(stored.contains("  Sanitized: jane@example.com"));
    assert!(stored.contains("  Changes: Removed spaces, Converted to lowercase"));
}

#[test]
fn minted_password_round_trips_through_history() {
    let dir = tempfile::tempdir().unwrap();
    let history = PasswordHistory::new(dir.path().join("log.txt"));

    let minted = PasswordPolicy::default().mint(16).unwrap();
    history.append(&minted).unwrap();

    let contents = history.load();
    assert!(contents.contains(&format!(
        "Password: {}",
        minted.value().expose_secret()
    )));
    assert!(contents.contains(&format!("Hash: {}", minted.hash_hex())));
}

#[test]
fn stores_default_to_data_directory() {
    assert_eq!(
        PasswordHistory::default().path(),
        std::path::Path::new(DEFAULT_PASSWORD_LOG)
    );
    assert_eq!(
        ValidationLog::default().path(),
        std::path::Path::new(DEFAULT_VALIDATION_LOG)
    );

    let dir = tempfile::tempdir().unwrap();
    assert_eq!(PasswordHistory::new(dir.path().join("none.txt")).load(), NO_HISTORY);
}

#[test]
fn out_of_policy_length_is_rejected_before_generation() {
    let policy = PasswordPolicy::default();

    let err = policy.mint(4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "password length must be between 8 and 16, got 4"
    );
}
