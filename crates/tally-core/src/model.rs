use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One test case: the input script piped to the subject, named by the
/// file stem shared with its golden artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    MissingActualOutput,
    MissingExpectedOutput,
    MissingActualLog,
    TerminalMismatch,
    LogMismatch,
}

impl FailReason {
    pub fn describe(&self) -> &'static str {
        match self {
            FailReason::MissingActualOutput => "missing output file",
            FailReason::MissingExpectedOutput => "missing expected .out file",
            FailReason::MissingActualLog => "missing actual .atf file",
            FailReason::TerminalMismatch => "terminal output mismatch",
            FailReason::LogMismatch => "transaction log mismatch",
        }
    }
}

impl std::fmt::Display for FailReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// A single recorded failure; `diff` holds the literal unified diff for
/// the two mismatch reasons and is `None` for missing-file reasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Failure {
    pub reason: FailReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

impl Failure {
    pub fn new(reason: FailReason) -> Self {
        Self { reason, diff: None }
    }

    pub fn with_diff(reason: FailReason, diff: String) -> Self {
        Self {
            reason,
            diff: Some(diff),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub fixture: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<Failure>,
}

impl Verdict {
    pub fn pass(fixture: impl Into<String>) -> Self {
        Self {
            fixture: fixture.into(),
            failures: Vec::new(),
        }
    }

    pub fn fail(fixture: impl Into<String>, failures: Vec<Failure>) -> Self {
        Self {
            fixture: fixture.into(),
            failures,
        }
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Reason list for the `FAIL (...)` console line.
    pub fn reason_line(&self) -> String {
        self.failures
            .iter()
            .map(|f| f.reason.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Fold verdicts in discovery order; each verdict is counted exactly
    /// once, however many reasons it carries.
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        verdicts.iter().fold(Self::default(), |mut acc, v| {
            if v.passed() {
                acc.passed += 1;
            } else {
                acc.failed += 1;
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Serializable record of one complete grading pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub verdicts: Vec<Verdict>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        let summary = RunSummary::from_verdicts(&verdicts);
        Self {
            timestamp: chrono::Utc::now(),
            verdicts,
            summary,
        }
    }
}
