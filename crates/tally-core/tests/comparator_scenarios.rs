//! Grading scenarios over on-disk artifact trees.

use std::fs;
use std::path::Path;

use tally_core::comparator::Comparator;
use tally_core::config::HarnessConfig;
use tally_core::discovery::discover_fixtures;
use tally_core::model::{FailReason, RunSummary};

fn config_for(root: &Path) -> HarnessConfig {
    HarnessConfig {
        version: 1,
        subject: root.join("frontend"),
        accounts: root.join("accounts.txt"),
        inputs_dir: root.join("inputs"),
        outputs_dir: root.join("outputs"),
        expected_dir: root.join("expected"),
        timeout_seconds: None,
    }
}

fn scaffold(root: &Path) {
    for dir in ["inputs", "outputs", "expected"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
}

fn add_fixture(root: &Path, name: &str) {
    fs::write(root.join("inputs").join(format!("{name}.txt")), "login\n").unwrap();
}

#[test]
fn matching_out_without_golden_atf_passes() {
    // Scenario A: matching .out, no golden .atf, stray actual .atf ignored.
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    add_fixture(dir.path(), "deposit");
    fs::write(dir.path().join("outputs/deposit.out"), "Balance: 100\n").unwrap();
    fs::write(dir.path().join("expected/deposit.out"), "Balance: 100\n").unwrap();
    fs::write(dir.path().join("outputs/deposit.atf"), "ES garbage\n").unwrap();

    let config = config_for(dir.path());
    let fixtures = discover_fixtures(&config.inputs_dir).unwrap();
    let verdicts = Comparator::new(&config).grade_all(&fixtures).unwrap();

    assert_eq!(verdicts.len(), 1);
    assert!(verdicts[0].passed());
}

#[test]
fn terminal_mismatch_fails_with_diff() {
    // Scenario B: a one-line difference in .out.
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    add_fixture(dir.path(), "overdraw");
    fs::write(dir.path().join("expected/overdraw.out"), "Balance: 100\n").unwrap();
    fs::write(dir.path().join("outputs/overdraw.out"), "Balance: 90\n").unwrap();

    let config = config_for(dir.path());
    let fixtures = discover_fixtures(&config.inputs_dir).unwrap();
    let verdicts = Comparator::new(&config).grade_all(&fixtures).unwrap();

    assert!(!verdicts[0].passed());
    assert_eq!(verdicts[0].failures.len(), 1);
    assert_eq!(verdicts[0].failures[0].reason, FailReason::TerminalMismatch);
    let diff = verdicts[0].failures[0].diff.as_deref().unwrap();
    assert!(diff.contains("-Balance: 100"));
    assert!(diff.contains("+Balance: 90"));

    let summary = RunSummary::from_verdicts(&verdicts);
    assert_eq!(summary.failed, 1);
}

#[test]
fn golden_atf_without_actual_atf_fails_despite_matching_out() {
    // Scenario C: terminal output matches but the expected log is absent.
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    add_fixture(dir.path(), "withdraw");
    fs::write(dir.path().join("expected/withdraw.out"), "ok\n").unwrap();
    fs::write(dir.path().join("outputs/withdraw.out"), "ok\n").unwrap();
    fs::write(dir.path().join("expected/withdraw.atf"), "WD record\n").unwrap();

    let config = config_for(dir.path());
    let fixtures = discover_fixtures(&config.inputs_dir).unwrap();
    let verdicts = Comparator::new(&config).grade_all(&fixtures).unwrap();

    assert!(!verdicts[0].passed());
    assert_eq!(verdicts[0].failures.len(), 1);
    assert_eq!(verdicts[0].failures[0].reason, FailReason::MissingActualLog);
}

#[test]
fn empty_inputs_dir_yields_zero_totals() {
    // Scenario D.
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());

    let config = config_for(dir.path());
    let fixtures = discover_fixtures(&config.inputs_dir).unwrap();
    let verdicts = Comparator::new(&config).grade_all(&fixtures).unwrap();
    let summary = RunSummary::from_verdicts(&verdicts);

    assert_eq!(summary.passed, 0);
    assert_eq!(summary.failed, 0);
}

#[test]
fn missing_actual_out_is_terminal_and_skips_atf_check() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    add_fixture(dir.path(), "transfer");
    fs::write(dir.path().join("expected/transfer.out"), "ok\n").unwrap();
    fs::write(dir.path().join("expected/transfer.atf"), "TR record\n").unwrap();

    let config = config_for(dir.path());
    let fixtures = discover_fixtures(&config.inputs_dir).unwrap();
    let verdicts = Comparator::new(&config).grade_all(&fixtures).unwrap();

    // Only the missing-output reason, even though the golden .atf has no
    // actual counterpart either.
    assert_eq!(verdicts[0].failures.len(), 1);
    assert_eq!(
        verdicts[0].failures[0].reason,
        FailReason::MissingActualOutput
    );
}

#[test]
fn missing_expected_out_fails_rather_than_skips() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    add_fixture(dir.path(), "paybill");
    fs::write(dir.path().join("outputs/paybill.out"), "ok\n").unwrap();

    let config = config_for(dir.path());
    let fixtures = discover_fixtures(&config.inputs_dir).unwrap();
    let verdicts = Comparator::new(&config).grade_all(&fixtures).unwrap();

    assert_eq!(verdicts[0].failures.len(), 1);
    assert_eq!(
        verdicts[0].failures[0].reason,
        FailReason::MissingExpectedOutput
    );
}

#[test]
fn both_mismatches_are_reported_on_one_verdict() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    add_fixture(dir.path(), "changeplan");
    fs::write(dir.path().join("expected/changeplan.out"), "ok\n").unwrap();
    fs::write(dir.path().join("outputs/changeplan.out"), "no\n").unwrap();
    fs::write(dir.path().join("expected/changeplan.atf"), "CP a\n").unwrap();
    fs::write(dir.path().join("outputs/changeplan.atf"), "CP b\n").unwrap();

    let config = config_for(dir.path());
    let fixtures = discover_fixtures(&config.inputs_dir).unwrap();
    let verdicts = Comparator::new(&config).grade_all(&fixtures).unwrap();

    let reasons: Vec<_> = verdicts[0].failures.iter().map(|f| f.reason).collect();
    assert_eq!(
        reasons,
        [FailReason::TerminalMismatch, FailReason::LogMismatch]
    );
    // One fixture, one FAIL, regardless of how many reasons applied.
    let summary = RunSummary::from_verdicts(&verdicts);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total(), 1);
}

#[test]
fn regrading_the_same_tree_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    scaffold(dir.path());
    add_fixture(dir.path(), "deposit");
    add_fixture(dir.path(), "overdraw");
    fs::write(dir.path().join("expected/deposit.out"), "ok\n").unwrap();
    fs::write(dir.path().join("outputs/deposit.out"), "ok\n").unwrap();
    fs::write(dir.path().join("expected/overdraw.out"), "a\n").unwrap();
    fs::write(dir.path().join("outputs/overdraw.out"), "b\n").unwrap();

    let config = config_for(dir.path());
    let fixtures = discover_fixtures(&config.inputs_dir).unwrap();
    let comparator = Comparator::new(&config);

    let first = comparator.grade_all(&fixtures).unwrap();
    let second = comparator.grade_all(&fixtures).unwrap();

    let outcome = |vs: &[tally_core::model::Verdict]| {
        vs.iter()
            .map(|v| (v.fixture.clone(), v.passed(), v.reason_line()))
            .collect::<Vec<_>>()
    };
    assert_eq!(outcome(&first), outcome(&second));
    assert_eq!(
        RunSummary::from_verdicts(&first),
        RunSummary::from_verdicts(&second)
    );
}
