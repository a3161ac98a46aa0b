use crate::cli::args::CheckArgs;
use crate::cli::commands::{exit_codes, load_harness};
use tally_core::report::json;

pub fn run(args: CheckArgs) -> anyhow::Result<i32> {
    let harness = match load_harness(&args.common, None) {
        Ok(h) => h,
        Err(code) => return Ok(code),
    };

    let report = harness.check()?;

    if let Some(path) = &args.report {
        json::save_to_file(&report, path)?;
        tracing::info!(path = %path.display(), "wrote JSON report");
    }

    if report.summary.all_passed() || args.exit_zero {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::FIXTURES_FAILED)
    }
}
