//! # Seed Data Generator
//!
//! Populates the database with employees for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 employees (default)
//! cargo run -p roster-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p roster-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p roster-db --bin seed -- --db ./data/roster.db
//! ```
//!
//! Names and birthdays are derived from the row index, so two runs produce
//! the same roster. Every record goes through the same validation as the
//! HTTP write path.

use std::env;

use roster_core::{Clock, EmployeeDraft, EmployeeInput, SystemClock};
use roster_db::{Database, DbConfig};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Grace", "Edsger", "Barbara", "Donald", "Frances", "Dennis", "Margaret", "Ken",
    "Radia", "Niklaus", "Sophie", "Linus", "Hedy", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Turing", "Hopper", "Dijkstra", "Liskov", "Knuth", "Allen", "Ritchie",
    "Hamilton", "Thompson", "Perlman", "Wirth", "Wilson", "Torvalds", "Lamarr", "Berners",
];

const DEFAULT_COUNT: usize = 50;
const DEFAULT_DB_PATH: &str = "./roster_dev.db";

/// Parsed command line.
#[derive(Debug, PartialEq)]
enum Command {
    Seed { count: usize, db_path: String },
    Help,
}

/// Parses arguments (without the program name).
///
/// Unknown flags are ignored. A `--count` that is not a whole number is an
/// error.
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut count: usize = DEFAULT_COUNT;
    let mut db_path = String::from(DEFAULT_DB_PATH);

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let value = args.get(i + 1).ok_or("--count needs a value")?;
                count = value
                    .parse()
                    .map_err(|_| format!("invalid --count value '{}': expected a whole number", value))?;
                i += 1;
            }
            "--db" | "-d" => {
                db_path = args.get(i + 1).ok_or("--db needs a path")?.clone();
                i += 1;
            }
            "--help" | "-h" => return Ok(Command::Help),
            _ => {}
        }
        i += 1;
    }

    Ok(Command::Seed { count, db_path })
}

fn print_help() {
    println!("Roster Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --count <N>    Number of employees to generate (default: {DEFAULT_COUNT})");
    println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
    println!("  -h, --help         Show this help message");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (count, db_path) = match parse_args(&args) {
        Ok(Command::Seed { count, db_path }) => (count, db_path),
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    println!("🌱 Roster Seed Data Generator");
    println!("============================");
    println!("Database:  {}", db_path);
    println!("Employees: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.employees().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} employees", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let today = SystemClock.today();
    let start = std::time::Instant::now();
    let mut generated = 0;

    for index in 0..count {
        let input = generate_input(index);

        let draft = match EmployeeDraft::prepare(&input, today) {
            Ok(draft) => draft,
            Err(e) => {
                eprintln!("Skipping {} {}: {}", input.first_name, input.last_name, e);
                continue;
            }
        };

        if let Err(e) = db.employees().insert(&draft).await {
            eprintln!("Failed to insert {} {}: {}", input.first_name, input.last_name, e);
            continue;
        }

        generated += 1;

        if generated % 25 == 0 {
            println!("  Generated {} employees...", generated);
        }
    }

    println!();
    println!("✓ Generated {} employees in {:?}", generated, start.elapsed());

    db.close().await;
    Ok(())
}

/// Builds the form input for the employee at `index`.
///
/// Birthdays fall between 1960 and 2003 and never on a day past the 28th.
fn generate_input(index: usize) -> EmployeeInput {
    let first = FIRST_NAMES[index % FIRST_NAMES.len()];
    let last = LAST_NAMES[(index / FIRST_NAMES.len() + index * 7) % LAST_NAMES.len()];

    let year = 1960 + (index * 7) % 44;
    let month = (index * 5) % 12 + 1;
    let day = (index * 11) % 28 + 1;

    EmployeeInput::new(first, last, format!("{year:04}-{month:02}-{day:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            parse_args(&[]).unwrap(),
            Command::Seed {
                count: DEFAULT_COUNT,
                db_path: DEFAULT_DB_PATH.to_string()
            }
        );
    }

    #[test]
    fn test_count_and_db() {
        assert_eq!(
            parse_args(&args(&["-c", "200", "--db", "/tmp/r.db"])).unwrap(),
            Command::Seed {
                count: 200,
                db_path: "/tmp/r.db".to_string()
            }
        );
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_bad_count_is_rejected() {
        let err = parse_args(&args(&["--count", "abc"])).unwrap_err();
        assert!(err.contains("abc"));

        assert!(parse_args(&args(&["--count"])).is_err());
        assert!(parse_args(&args(&["--count", "-5"])).is_err());
    }

    #[test]
    fn test_generated_inputs_are_valid() {
        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        for index in 0..200 {
            let input = generate_input(index);
            assert!(EmployeeDraft::prepare(&input, today).is_ok(), "{input:?}");
        }
    }
}
