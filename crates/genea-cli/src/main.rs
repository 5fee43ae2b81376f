//! `genea` — authoring tools for genealogy puzzle levels.
//!
//! Levels ship their answer key obfuscated; this binary is the offline
//! side of that arrangement. `encode` turns a plain solution JSON file
//! into the string embedded in level data, `decode` reverses it, and
//! `check` verifies a finished level file is internally consistent and
//! winnable.

mod check;

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use genea_core::{decode_solution, encode_solution, Level, Solution};

#[derive(Parser)]
#[command(name = "genea", version, about = "Authoring tools for genealogy puzzle levels")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a plain solution JSON file for embedding in level data
    Encode {
        /// Path to a solution JSON file ({"couples": [...], "children": [...]})
        solution: PathBuf,
    },
    /// Decode an embedded solution string back to readable JSON
    Decode {
        /// The encoded string, or `-` to read it from stdin
        encoded: String,
    },
    /// Check a level file for consistency and winnability
    Check {
        /// Path to a level JSON file
        level: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Encode { solution } => {
            let json = fs::read_to_string(&solution)
                .with_context(|| format!("reading {}", solution.display()))?;
            let solution: Solution =
                serde_json::from_str(&json).context("parsing solution JSON")?;
            println!("{}", encode_solution(&solution));
            Ok(ExitCode::SUCCESS)
        }
        Command::Decode { encoded } => {
            let encoded = if encoded == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                buf
            } else {
                encoded
            };
            let solution = decode_solution(&encoded).context("decoding solution")?;
            println!("{}", serde_json::to_string_pretty(&solution)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { level } => {
            let json = fs::read_to_string(&level)
                .with_context(|| format!("reading {}", level.display()))?;
            let level = Level::from_json(&json).context("parsing level JSON")?;
            let solution = decode_solution(&level.solution_encoded)
                .context("decoding embedded solution")?;

            let report = check::check_level(&level, &solution);
            println!("{} ({})", level.title, level.difficulty);
            println!(
                "  {} people, {} documents",
                level.initial_people.len(),
                level.documents.len()
            );
            println!(
                "  {} couples + {} children = {} relationships",
                report.couples,
                report.children,
                report.total()
            );

            if report.is_clean() {
                println!("  ok");
                Ok(ExitCode::SUCCESS)
            } else {
                for issue in &report.issues {
                    println!("  problem: {}", issue);
                }
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
