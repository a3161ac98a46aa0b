use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Golden-output test harness for the banking front end"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run every fixture through the subject, then grade the artifacts
    Run(RunArgs),
    /// Run the subject only, producing outputs/ artifacts without grading
    Exec(ExecArgs),
    /// Grade existing outputs/ artifacts against expected/ without re-running
    Check(CheckArgs),
    /// Write a commented sample tally.yaml
    Init(InitArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    #[arg(long, default_value = "tally.yaml", env = "TALLY_CONFIG")]
    pub config: PathBuf,

    /// Override the subject executable from the config file
    #[arg(long)]
    pub subject: Option<PathBuf>,

    /// Override the accounts side-input file
    #[arg(long)]
    pub accounts: Option<PathBuf>,

    #[arg(long)]
    pub inputs_dir: Option<PathBuf>,

    #[arg(long)]
    pub outputs_dir: Option<PathBuf>,

    #[arg(long)]
    pub expected_dir: Option<PathBuf>,

    /// Only fixtures whose name contains one of these substrings
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Fail on unknown config keys instead of warning
    #[arg(long)]
    pub strict_config: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Per-fixture timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit 0 even when fixtures fail (legacy harness behavior)
    #[arg(long)]
    pub exit_zero: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExecArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit 0 even when fixtures fail (legacy harness behavior)
    #[arg(long)]
    pub exit_zero: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = "tally.yaml")]
    pub out: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
