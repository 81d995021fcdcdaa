//! Command-line front end for coursebook person records.
//!
//! Records are passed inline as JSON, so the tool never touches the disk.
//!
//! # Usage
//!
//! ```bash
//! # Print the display form of a person
//! coursebook format --person '{"name":"alice","phone":"85355255","email":"alice@example.com","address":"123 Main St","courses":["CS2103"],"tags":["friends"]}'
//!
//! # Check two records for duplication and equality
//! coursebook compare --left '<json>' --right '<json>'
//!
//! # Print the canonical JSON of a record
//! coursebook normalize --person '<json>'
//! ```
//!
//! # Environment Variables
//!
//! See [`coursebook::config`]. A `.env` file is loaded if present.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use coursebook::config;
use coursebook::prelude::*;
use coursebook::telemetry;

/// Validate, format and compare person records.
#[derive(Parser)]
#[command(name = "coursebook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display form of a person
    Format {
        /// Person record as JSON
        #[arg(short, long)]
        person: String,
    },

    /// Report whether two records are the same person and whether they are equal
    Compare {
        /// First person record as JSON
        #[arg(short, long)]
        left: String,

        /// Second person record as JSON
        #[arg(short, long)]
        right: String,
    },

    /// Print the canonical JSON form of a person
    Normalize {
        /// Person record as JSON
        #[arg(short, long)]
        person: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init_tracing(&config);
    config.print_summary();

    if !config.color {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Format { person } => {
            let person = parse_person(&person, "person")?;
            println!("{}", format_person(&person));
        }
        Commands::Compare { left, right } => {
            let left = parse_person(&left, "left")?;
            let right = parse_person(&right, "right")?;
            print_comparison(&left, &right);
        }
        Commands::Normalize { person } => {
            let person = parse_person(&person, "person")?;
            let json = PersonRecord::from(&person).to_json()?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Parses a JSON argument into a validated person.
fn parse_person(json: &str, argument: &str) -> Result<Person> {
    let record = PersonRecord::from_json(json)
        .with_context(|| format!("Failed to read --{argument} record"))?;
    let person =
        Person::try_from(record).with_context(|| format!("Invalid --{argument} person"))?;

    tracing::debug!(argument, name = %person.name(), "person record accepted");
    Ok(person)
}

fn print_comparison(left: &Person, right: &Person) {
    println!("{}", "Comparison".bright_blue().bold());
    println!("  {} {}", "Left: ".dimmed(), format_person(left));
    println!("  {} {}", "Right:".dimmed(), format_person(right));
    println!();

    let same = left.is_same_person(Some(right));
    let equal = left == right;

    println!("  Same person: {}", yes_no(same));
    println!("  Equal:       {}", yes_no(equal));

    if same && !equal {
        println!();
        println!(
            "{}",
            "These records look like duplicates of the same person.".yellow()
        );
    }

    tracing::info!(same, equal, "comparison finished");
}

fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".red() }
}
