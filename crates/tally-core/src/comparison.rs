//! Artifact comparison: exact byte equality, with a line-oriented unified
//! diff produced for reporting when the bytes diverge.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactComparison {
    pub has_differences: bool,
    /// Unified diff text, empty when the artifacts match.
    pub diff: String,
    pub added_lines: usize,
    pub removed_lines: usize,
}

impl ArtifactComparison {
    pub fn matches() -> Self {
        Self {
            has_differences: false,
            diff: String::new(),
            added_lines: 0,
            removed_lines: 0,
        }
    }

    pub fn has_differences(&self) -> bool {
        self.has_differences
    }

    pub fn diff(&self) -> &str {
        &self.diff
    }
}

/// Compare a golden artifact against the actual one. Equality is judged on
/// raw bytes with no normalization of whitespace, line endings or ordering;
/// the diff is rendered from a lossy UTF-8 view only when bytes differ.
pub fn compare_artifacts(expected: &[u8], actual: &[u8]) -> ArtifactComparison {
    if expected == actual {
        return ArtifactComparison::matches();
    }

    let expected_text = String::from_utf8_lossy(expected);
    let actual_text = String::from_utf8_lossy(actual);
    generate_diff(&expected_text, &actual_text)
}

fn generate_diff(expected: &str, actual: &str) -> ArtifactComparison {
    let diff = TextDiff::from_lines(expected, actual);

    let mut out = String::new();
    let mut added_lines = 0;
    let mut removed_lines = 0;

    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");

    for group in diff.grouped_ops(3) {
        if let Some((first, _last)) = group.first().zip(group.last()) {
            out.push_str(&format!(
                "@@ -{},{} +{},{} @@\n",
                first.old_range().start + 1,
                first.old_range().len(),
                first.new_range().start + 1,
                first.new_range().len(),
            ));
        }

        for op in group {
            for change in diff.iter_changes(&op) {
                let prefix = match change.tag() {
                    ChangeTag::Delete => {
                        removed_lines += 1;
                        "-"
                    }
                    ChangeTag::Insert => {
                        added_lines += 1;
                        "+"
                    }
                    ChangeTag::Equal => " ",
                };
                out.push_str(prefix);
                out.push_str(change.value());
                if !change.value().ends_with('\n') {
                    out.push('\n');
                }
            }
        }
    }

    ArtifactComparison {
        has_differences: true,
        diff: out,
        added_lines,
        removed_lines,
    }
}
