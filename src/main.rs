//! pwd-check - Password security analyzer
//!
//! CLI shell around the rule engine, breach lookup and generator.

use std::io::{self, Write};

use clap::Parser;
use eyre::Result;
use secrecy::{ExposeSecret, SecretString};

use pwd_check::{generate, generate_report, BreachOracle, HibpClient, Verdict};

#[derive(Parser)]
#[command(name = "pwd-check", about = "Password Security Analyzer", version)]
struct Cli {
    /// Generate a strong password immediately
    #[arg(short, long)]
    generate: bool,

    /// Length of generated passwords (clamped to a minimum of 12)
    #[arg(short, long, default_value_t = 16)]
    length: usize,
}

fn offer_generated_password(length: usize) -> Result<()> {
    print!("Do you want us to generate a strong password for you? (y/n)\n> ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().read_line(&mut choice)?;
    if choice.trim().eq_ignore_ascii_case("y") {
        let pwd = generate(length)?;
        println!("\nSuggested strong password: {}", pwd.expose_secret());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("PWD-CHECK - Password Security Analyzer");
    println!("=======================================");

    if cli.generate {
        let pwd = generate(cli.length)?;
        println!("\nGenerated strong password: {}", pwd.expose_secret());
        return Ok(());
    }

    let input = rpassword::prompt_password("Enter a password to analyze: ")?;
    let password = SecretString::new(input.into());

    let (mut verdict, report) = generate_report(&password);
    println!("\nAnalysis of your password:\n");
    println!("{report}");

    // Breach lookup failure is recoverable: report it and fall back to the
    // heuristic verdict alone.
    let breached = match HibpClient::new().breach_count(&password).await {
        Ok(0) => {
            println!("\nThis password was NOT found in known leaks.");
            false
        }
        Ok(count) => {
            println!("\nWARNING: this password was found {count} times in data breaches!");
            true
        }
        Err(e) => {
            eprintln!("\nCould not check breach database: {e}");
            false
        }
    };
    if breached {
        verdict = Verdict::Weak;
    }

    println!("\n--- Final Verdict ---");
    println!("Password Strength: {verdict}");
    match verdict {
        Verdict::Weak => {
            println!("NOT SAFE: Please choose another password.");
        }
        Verdict::Medium => {
            println!("Improve by fixing the failed checks above (e.g., add length/specials/remove sequences).");
        }
        Verdict::Strong => {
            println!("Excellent! Your password looks strong.");
            println!();
            println!("Even strong passwords can be predictable if they contain personal");
            println!("information (birthdays, names, favorite words, etc.). For maximum");
            println!("security we recommend a randomly generated password instead.");
        }
    }
    offer_generated_password(cli.length)?;

    Ok(())
}
