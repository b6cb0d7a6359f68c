use std::io::{BufRead, Write};

use crate::cli::report_lines;
use crate::error::Result;
use crate::ingest::load_files;
use crate::ledger::Ledger;
use crate::render::{dashboard, loaded_files_label, transactions_table};
use crate::settings::{load_settings, Settings};

const HELP: &str = "\
Commands:
  load <file>...   add statement files to the ledger
  summary          income, outcome and net balance
  list [n]         transactions, most recent first
  files            files loaded so far
  clear            empty the ledger
  help             this message
  quit             leave the session";

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Load(Vec<&'a str>),
    Summary,
    List(Option<usize>),
    Files,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let cmd = match head.to_lowercase().as_str() {
        "load" | "open" => Command::Load(words.collect()),
        "summary" | "s" => Command::Summary,
        "list" | "ls" => Command::List(words.next().and_then(|n| n.parse().ok())),
        "files" => Command::Files,
        "clear" | "reset" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(head),
    };
    Some(cmd)
}

/// Drive one ledger from line commands until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(input: R, out: &mut W, settings: &Settings) -> Result<()> {
    let mut ledger = Ledger::new();
    let symbol = settings.currency_symbol.as_str();
    writeln!(out, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        match cmd {
            Command::Load(paths) if paths.is_empty() => {
                writeln!(out, "Usage: load <file>...")?;
            }
            Command::Load(paths) => {
                let report = load_files(&mut ledger, &paths);
                for l in report_lines(&report) {
                    writeln!(out, "{l}")?;
                }
                writeln!(out, "{}", dashboard(&ledger, symbol))?;
            }
            Command::Summary => {
                writeln!(out, "{}", loaded_files_label(&ledger))?;
                writeln!(out, "{}", dashboard(&ledger, symbol))?;
            }
            Command::List(n) => {
                if ledger.is_empty() {
                    writeln!(out, "No transactions loaded.")?;
                } else {
                    let limit = n.or(settings.list_limit);
                    writeln!(out, "{}", transactions_table(&ledger, symbol, limit))?;
                }
            }
            Command::Files => {
                writeln!(out, "{}", loaded_files_label(&ledger))?;
            }
            Command::Clear => {
                ledger.reset();
                writeln!(out, "Ledger cleared.")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(word) => {
                writeln!(out, "Unknown command: {word} (try `help`)")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

pub fn run() -> Result<()> {
    let settings = load_settings();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_session(stdin.lock(), &mut stdout, &settings)
}
