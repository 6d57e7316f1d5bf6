//! Example: Generate an MVP scope document with Google Gemini
//!
//! Prerequisites:
//! - Set the GEMINI_API_KEY environment variable
//!
//! Run with:
//! ```bash
//! export GEMINI_API_KEY=your-api-key
//! cargo run --example generate_scope
//! ```

use aura_llm::{build_prompt, GenerationClient, GenerationConfig, DEFAULT_BASE_URL};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Aura MVP Scope Generator with Gemini ===\n");

    let api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
        eprintln!("Error: GEMINI_API_KEY environment variable not set");
        eprintln!("Please set it with: export GEMINI_API_KEY=your-api-key");
        std::process::exit(1);
    });
    let model =
        env::var("GEMINI_MODEL_NAME").unwrap_or_else(|_| "gemini-1.5-flash-latest".to_string());

    let client = GenerationClient::from_gemini(&api_key, &model, DEFAULT_BASE_URL);
    let config = GenerationConfig::scope_default();

    let examples = vec![
        (
            "E-commerce and Local Artisan Marketplace",
            "A mobile application that connects local artisans with buyers interested in unique, handmade crafts.",
        ),
        (
            "Health & Wellness Technology",
            "An AI-powered fitness coaching app that creates personalized workout and meal plans based on user goals and biometrics.",
        ),
    ];

    for (i, (industry, idea)) in examples.iter().enumerate() {
        println!("Idea {} ({}):", i + 1, industry);
        println!("  {}\n", idea);

        match client.generate(build_prompt(industry, idea), &config).await {
            Ok(scope) => {
                println!("{}", scope);
                println!("\n{}\n", "-".repeat(80));
            }
            Err(e) => {
                eprintln!("Error generating scope: {}\n", e);
            }
        }
    }

    Ok(())
}
