use crate::cli::args::RunArgs;
use crate::cli::commands::{exit_codes, load_harness};
use tally_core::report::json;

pub async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let harness = match load_harness(&args.common, args.timeout) {
        Ok(h) => h,
        Err(code) => return Ok(code),
    };

    let report = harness.run().await?;

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
