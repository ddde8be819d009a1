use clap::{Parser, Subcommand};
use divcheck_balance::{report, BalanceReport};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "divcheck")]
#[command(about = "divcheck — report unbalanced <div> tags in HTML-like text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a whole file for div balance
    Check {
        /// Input file
        path: PathBuf,

        /// Print the raw report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report every div event (opens, closes, extra closes) in a line range
    Range {
        /// Input file
        path: PathBuf,

        /// First line of the range (1-based, inclusive)
        start: usize,

        /// Last line of the range (inclusive)
        end: usize,

        /// Print the raw report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report only unclosed opens and extra closes in a line range
    Unclosed {
        /// Input file
        path: PathBuf,

        /// First line of the range (1-based, inclusive)
        start: usize,

        /// Last line of the range (inclusive)
        end: usize,

        /// Print the raw report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { path, json } => {
            let report = scan(&path);
            print_report(&report, json, || report::whole_file(&report));
        }
        Command::Range {
            path,
            start,
            end,
            json,
        } => {
            let report = scan(&path);
            print_report(&report, json, || report::range(&report, start, end));
        }
        Command::Unclosed {
            path,
            start,
            end,
            json,
        } => {
            let report = scan(&path);
            print_report(&report, json, || report::find_unclosed(&report, start, end));
        }
    }
}

/// Scan the file, or exit with an error. Imbalance is a report, not a
/// failure; only an unreadable file exits non-zero.
fn scan(path: &Path) -> BalanceReport {
    match divcheck_balance::check_file(path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_report<F>(report: &BalanceReport, json: bool, render: F)
where
    F: FnOnce() -> Vec<String>,
{
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        for line in render() {
            println!("{line}");
        }
    }
}
