use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn write_statement(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!(",FECHA,CONCEPTO,F. VALOR,CARGO,ABONO,SALDO,REFERENCIA\n{body}")).unwrap();
    path
}

fn extracto(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("extracto").unwrap();
    cmd.env("HOME", home).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn summary_reports_totals() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_statement(
        dir.path(),
        "enero.csv",
        ",03/02/2024,PAGO,,100,,,\n,03/02/2024,SALDO,,,,900,\n",
    );
    extracto(dir.path())
        .arg("summary")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("enero.csv: 1 transactions, 1 new, 1 of 2 rows skipped"))
        .stdout(predicate::str::contains("-$100.00"));
}

#[test]
fn overlapping_files_are_deduplicated() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_statement(
        dir.path(),
        "a.csv",
        ",01/01/2024,NOMINA,,,\"2.500,00\",,N1\n,05/01/2024,ALQUILER,,900,,,A1\n",
    );
    let b = write_statement(
        dir.path(),
        "b.csv",
        ",05/01/2024,ALQUILER,,900,,,A1\n,10/01/2024,SUPER,,50,,,\n",
    );
    extracto(dir.path())
        .args(["list"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("b.csv: 2 transactions, 1 new"))
        .stdout(predicate::str::contains("$2500.00"))
        .stdout(predicate::str::contains("$950.00"))
        .stdout(predicate::str::contains("2 files loaded: a.csv, b.csv"));
}

#[test]
fn unreadable_file_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_statement(dir.path(), "good.csv", ",03/02/2024,PAGO,,100,,,\n");
    let missing = dir.path().join("missing.csv");
    extracto(dir.path())
        .arg("summary")
        .arg(&missing)
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be loaded"))
        .stdout(predicate::str::contains("1 file loaded: good.csv"));
}

#[test]
fn export_writes_sorted_csv() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_statement(
        dir.path(),
        "stmt.csv",
        ",01/01/2024,ENERO,,10,,,\n,15/06/2024,JUNIO,,20,,,\n,,SIN FECHA,,30,,,\n",
    );
    let out = dir.path().join("ledger.csv");
    extracto(dir.path())
        .arg("export")
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 transactions"));

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[1], "15/06/2024,JUNIO,,20.00,0.00");
    assert_eq!(lines[2], "01/01/2024,ENERO,,10.00,0.00");
    assert_eq!(lines[3], ",SIN FECHA,,30.00,0.00");
}

#[test]
fn session_clear_resets_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_statement(dir.path(), "s.csv", ",03/02/2024,PAGO,,100,,,\n");
    extracto(dir.path())
        .arg("session")
        .write_stdin(format!("load {}\nfiles\nclear\nfiles\nquit\n", file.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file loaded: s.csv"))
        .stdout(predicate::str::contains("Ledger cleared."))
        .stdout(predicate::str::contains("No files loaded"));
}

#[test]
fn config_persists_currency() {
    let dir = tempfile::tempdir().unwrap();
    extracto(dir.path())
        .args(["config", "--currency", "EUR "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency:    EUR"));
    assert!(dir.path().join(".config/extracto/settings.json").exists());

    let file = write_statement(dir.path(), "e.csv", ",03/02/2024,PAGO,,100,,,\n");
    extracto(dir.path())
        .arg("summary")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR 100.00"));
}

#[test]
fn summary_requires_files() {
    let dir = tempfile::tempdir().unwrap();
    extracto(dir.path()).arg("summary").assert().failure();
}
