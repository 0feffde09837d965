//! Password strength, generation and history demonstration.
//!
//! Run with: `cargo run --example password_tools`

use octoguard::{assess, hash, PasswordHistory, PasswordPolicy};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Password Tools Example ===\n");

    println!("--- Scenario 1: Strength Assessment ---");
    for candidate in ["password", "monkey2024", "Summer2024", "Tr0ub4dor&3Zz!"] {
        let assessment = assess(candidate);
        println!(
            "{:<16} {} (score {}/7, color {})",
            candidate,
            assessment.rating(),
            assessment.score(),
            assessment.color_token()
        );
        for line in assessment.feedback() {
            println!("    {}", line);
        }
    }

    println!("\n--- Scenario 2: Minting Within Policy ---");
    let policy = PasswordPolicy::default();
    let minted = match policy.mint_default() {
        Ok(minted) => minted,
        Err(err) => {
            println!("Generation failed: {}", err);
            return;
        }
    };
    // Debug output keeps the plaintext redacted
    println!("Minted: {:?}", minted);
    println!("Plaintext (explicit): {}", minted.value().expose_secret());
    println!(
        "Self-assessed: {}",
        assess(minted.value().expose_secret()).rating()
    );

    println!("\n--- Scenario 3: Out-of-Policy Length ---");
    match policy.mint(32) {
        Ok(_) => println!("Unexpectedly accepted"),
        Err(err) => println!("Rejected: {}", err),
    }

    println!("\n--- Scenario 4: Hashing ---");
    println!("hash(\"abc\") = {}", hash("abc"));
    println!(
        "Digest matches record: {}",
        hash(minted.value().expose_secret()) == minted.hash_hex()
    );

    println!("\n--- Scenario 5: History ---");
    let history = PasswordHistory::default();
    if let Err(err) = history.append(&minted) {
        println!("Could not record password: {}", err);
    }
    print!("{}", history.load());
}
