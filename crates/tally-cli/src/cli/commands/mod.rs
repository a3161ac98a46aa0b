use crate::cli::args::{Cli, Command, CommonArgs};
use tally_core::config::{load_config, HarnessConfig};
use tally_core::harness::Harness;

pub mod check;
pub mod exec;
pub mod init;
pub mod run;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const FIXTURES_FAILED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args).await,
        Command::Exec(args) => exec::run(args).await,
        Command::Check(args) => check::run(args),
        Command::Init(args) => init::run(args),
    }
}

/// Load the config file and fold in CLI overrides. Config problems print
/// to stderr and surface as exit code 2 in the callers.
pub(crate) fn load_harness(common: &CommonArgs, timeout: Option<u64>) -> Result<Harness, i32> {
    let mut cfg: HarnessConfig = match load_config(&common.config, common.strict_config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return Err(exit_codes::CONFIG_ERROR);
        }
    };

    if let Some(subject) = &common.subject {
        cfg.subject = subject.clone();
    }
    if let Some(accounts) = &common.accounts {
        cfg.accounts = accounts.clone();
    }
    if let Some(dir) = &common.inputs_dir {
        cfg.inputs_dir = dir.clone();
    }
    if let Some(dir) = &common.outputs_dir {
        cfg.outputs_dir = dir.clone();
    }
    if let Some(dir) = &common.expected_dir {
        cfg.expected_dir = dir.clone();
    }
    if timeout.is_some() {
        cfg.timeout_seconds = timeout;
    }

    Ok(Harness::new(cfg).with_filters(common.filters.clone()))
}
