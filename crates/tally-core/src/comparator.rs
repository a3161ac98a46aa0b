//! Grading: one verdict per fixture, judged purely from files on disk so a
//! second pass over the same artifacts always reproduces the same result.

use crate::comparison::compare_artifacts;
use crate::config::HarnessConfig;
use crate::model::{FailReason, Failure, Fixture, Verdict};
use std::path::Path;

pub struct Comparator<'a> {
    config: &'a HarnessConfig,
}

impl<'a> Comparator<'a> {
    pub fn new(config: &'a HarnessConfig) -> Self {
        Self { config }
    }

    /// Grade every fixture in order. Failures never stop the batch.
    pub fn grade_all(&self, fixtures: &[Fixture]) -> anyhow::Result<Vec<Verdict>> {
        fixtures.iter().map(|f| self.grade(f)).collect()
    }

    /// Per-fixture state machine:
    /// 1. missing actual `.out` is terminal (the `.atf` check is skipped);
    /// 2. missing expected `.out` is terminal;
    /// 3. terminal-output mismatch is recorded but grading continues;
    /// 4. the transaction file is checked only when a golden `.atf` exists,
    ///    with an explicit existence check before any diff.
    pub fn grade(&self, fixture: &Fixture) -> anyhow::Result<Verdict> {
        let name = fixture.name.as_str();
        let actual_out = self.config.actual_out(name);
        let expected_out = self.config.expected_out(name);

        if !actual_out.exists() {
            return Ok(Verdict::fail(
                name,
                vec![Failure::new(FailReason::MissingActualOutput)],
            ));
        }
        if !expected_out.exists() {
            return Ok(Verdict::fail(
                name,
                vec![Failure::new(FailReason::MissingExpectedOutput)],
            ));
        }

        let mut failures = Vec::new();

        let cmp = compare_files(&expected_out, &actual_out)?;
        if cmp.has_differences() {
            failures.push(Failure::with_diff(FailReason::TerminalMismatch, cmp.diff));
        }

        let expected_atf = self.config.expected_atf(name);
        if expected_atf.exists() {
            let actual_atf = self.config.actual_atf(name);
            if !actual_atf.exists() {
                failures.push(Failure::new(FailReason::MissingActualLog));
            } else {
                let cmp = compare_files(&expected_atf, &actual_atf)?;
                if cmp.has_differences() {
                    failures.push(Failure::with_diff(FailReason::LogMismatch, cmp.diff));
                }
            }
        }

        if failures.is_empty() {
            Ok(Verdict::pass(name))
        } else {
            Ok(Verdict::fail(name, failures))
        }
    }
}

fn compare_files(expected: &Path, actual: &Path) -> anyhow::Result<crate::comparison::ArtifactComparison> {
    let expected_bytes = std::fs::read(expected)?;
    let actual_bytes = std::fs::read(actual)?;
    Ok(compare_artifacts(&expected_bytes, &actual_bytes))
}
