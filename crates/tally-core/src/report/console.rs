//! Console report. This output is the harness's product and CI pipelines
//! grep it, so it goes to stdout, stays uncolored and keeps a stable shape:
//! banner, one block per fixture ending in a dashed separator, totals.

use crate::model::{RunSummary, Verdict};

const SEPARATOR: &str = "----------------------------------------";

pub fn print_banner(fixture_count: usize) {
    println!("Checking {} fixture(s) against expected artifacts", fixture_count);
    println!("{SEPARATOR}");
}

pub fn print_verdict(verdict: &Verdict) {
    if verdict.passed() {
        println!("{}: PASS", verdict.fixture);
    } else {
        println!("{}: FAIL ({})", verdict.fixture, verdict.reason_line());
        for failure in &verdict.failures {
            if let Some(diff) = &failure.diff {
                print!("{diff}");
                if !diff.ends_with('\n') {
                    println!();
                }
            }
        }
    }
    println!("{SEPARATOR}");
}

pub fn print_summary(summary: &RunSummary) {
    println!("Total PASS: {}", summary.passed);
    println!("Total FAIL: {}", summary.failed);
}

pub fn print_all(verdicts: &[Verdict], summary: &RunSummary) {
    print_banner(verdicts.len());
    for v in verdicts {
        print_verdict(v);
    }
    print_summary(summary);
}
