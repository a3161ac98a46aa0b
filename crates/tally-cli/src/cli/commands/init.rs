use crate::cli::args::InitArgs;
use crate::cli::commands::exit_codes;
use tally_core::config::write_sample_config;

pub fn run(args: InitArgs) -> anyhow::Result<i32> {
    if args.out.exists() && !args.force {
        eprintln!(
            "refusing to overwrite {} (use --force)",
            args.out.display()
        );
        return Ok(exit_codes::CONFIG_ERROR);
    }

    write_sample_config(&args.out)?;
    println!("Wrote sample config to {}", args.out.display());
    Ok(exit_codes::OK)
}
