pub mod config;
pub mod export;
pub mod list;
pub mod session;
pub mod summary;

use clap::{Parser, Subcommand};

use crate::ingest::{load_files, BatchReport};
use crate::ledger::Ledger;

#[derive(Parser)]
#[command(
    name = "extracto",
    about = "Merge bank statement exports into one deduplicated ledger."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load statements and show income, outcome and net balance.
    Summary {
        /// Statement files (.xlsx, .xls, .ods, .csv)
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Load statements and list transactions, most recent first.
    List {
        /// Statement files (.xlsx, .xls, .ods, .csv)
        #[arg(required = true)]
        files: Vec<String>,
        /// Show at most this many transactions (default from settings)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Load statements and write the merged ledger to CSV.
    Export {
        /// Statement files (.xlsx, .xls, .ods, .csv)
        #[arg(required = true)]
        files: Vec<String>,
        /// Output CSV path
        #[arg(long, short)]
        output: String,
    },
    /// Interactive session: load files one batch at a time, list, clear.
    Session,
    /// Show or change settings.
    Config {
        /// Currency marker used when displaying amounts
        #[arg(long)]
        currency: Option<String>,
        /// Default row limit for `list`
        #[arg(long, conflicts_with = "no_limit")]
        limit: Option<usize>,
        /// Remove the default row limit
        #[arg(long = "no-limit")]
        no_limit: bool,
    },
}

/// Per-file lines for a finished batch.
pub(crate) fn report_lines(report: &BatchReport) -> Vec<String> {
    let mut lines = Vec::new();
    for s in &report.summaries {
        if !s.header_found {
            lines.push(format!("{}: no FECHA header row, nothing imported", s.file_name));
            continue;
        }
        lines.push(format!(
            "{}: {} transactions, {} new, {} of {} rows skipped",
            s.file_name, s.accepted, s.new_transactions, s.skipped, s.data_rows
        ));
    }
    for (path, reason) in &report.failures {
        lines.push(format!("{}: could not be loaded ({reason})", path.display()));
    }
    lines
}

/// Build a fresh ledger from the given files and print what happened.
pub(crate) fn load_ledger(files: &[String]) -> Ledger {
    let mut ledger = Ledger::new();
    let report = load_files(&mut ledger, files);
    for line in report_lines(&report) {
        println!("{line}");
    }
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::IngestSummary;

    #[test]
    fn test_report_lines() {
        let report = BatchReport {
            summaries: vec![
                IngestSummary {
                    file_name: "enero.xlsx".to_string(),
                    header_found: true,
                    data_rows: 4,
                    accepted: 3,
                    skipped: 1,
                    new_transactions: 2,
                },
                IngestSummary {
                    file_name: "vacio.csv".to_string(),
                    header_found: false,
                    data_rows: 0,
                    accepted: 0,
                    skipped: 0,
                    new_transactions: 0,
                },
            ],
            failures: vec![("roto.xlsx".into(), "bad zip".to_string())],
        };
        let lines = report_lines(&report);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "enero.xlsx: 3 transactions, 2 new, 1 of 4 rows skipped");
        assert_eq!(lines[1], "vacio.csv: no FECHA header row, nothing imported");
        assert_eq!(lines[2], "roto.xlsx: could not be loaded (bad zip)");
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["extracto", "list", "a.xlsx", "b.csv", "--limit", "5"]).unwrap();
        match cli.command {
            Commands::List { files, limit } => {
                assert_eq!(files, vec!["a.xlsx", "b.csv"]);
                assert_eq!(limit, Some(5));
            }
            _ => panic!("expected list"),
        }
        assert!(Cli::try_parse_from(["extracto", "summary"]).is_err());
        assert!(Cli::try_parse_from(["extracto", "config", "--limit", "3", "--no-limit"]).is_err());
    }
}
