use crate::cli::args::ExecArgs;
use crate::cli::commands::{exit_codes, load_harness};

pub async fn run(args: ExecArgs) -> anyhow::Result<i32> {
    let harness = match load_harness(&args.common, args.timeout) {
        Ok(h) => h,
        Err(code) => return Ok(code),
    };

    let count = harness.execute().await?;
    println!("Executed {count} fixture(s)");
    Ok(exit_codes::OK)
}
