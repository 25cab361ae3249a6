//! End-to-end tests for the markscope binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const CONTENT: &str = "\
MARK P1_MC_TVP.TVPAY1_NS r0 0 0 2 2
MARK P2_MC_TVP.TVPAY1_NS r0 3 4 5 6
MARK A1_MC_AGA.AGAY1X7_NS r1 -1 -1 1 1
MARK bad_MC_AGA.AGAY1X7_NS r1 -1 -1
";

fn markscope(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_markscope"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_input(dir: &Path) -> String {
    let path = dir.join("content.txt");
    fs::write(&path, CONTENT).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_writes_default_report_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let out = markscope(dir.path(), &[&input]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        "Done. TVP: 2, AGA: 1. Saved to: mark_analysis_report.html"
    );

    let html = fs::read_to_string(dir.path().join("mark_analysis_report.html")).unwrap();
    assert!(html.contains("<h2 id='tvp'>TVP Marks</h2>"));
    assert!(html.contains("<h2 id='aga'>AGA Marks</h2>"));
    assert!(!html.contains("bad_MC_AGA"));
}

#[test]
fn test_outfile_and_deselected_family() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let outfile = dir.path().join("tvp_only.html");
    let outfile = outfile.to_string_lossy();

    let out = markscope(dir.path(), &[&input, "--no-aga", "-o", &outfile]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Done. TVP: 2, AGA: 0."));

    let html = fs::read_to_string(outfile.as_ref()).unwrap();
    assert!(!html.contains("id='aga'"));
}

#[test]
fn test_report_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let out = markscope(dir.path(), &[&input, "-o", "-", "--strategy", "indexed"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert!(stdout.contains("<a href=\"#tvp-2\">P2_MC_TVP.TVPAY1_NS</a>"));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Saved to: <stdout>"));
    assert!(!dir.path().join("mark_analysis_report.html").exists());
}

#[test]
fn test_no_family_selected_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let out = markscope(dir.path(), &[&input, "--no-tvp", "--no-aga"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Please select at least one mark type (TVP/AGA)."));
    assert!(!dir.path().join("mark_analysis_report.html").exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = markscope(dir.path(), &["does_not_exist.txt"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Failed to read file"));
}
