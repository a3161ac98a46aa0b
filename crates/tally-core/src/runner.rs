//! Subject execution: pipes each fixture's input script into the subject
//! program and captures its terminal output, leaving the transaction file
//! to the subject itself.

use crate::config::HarnessConfig;
use crate::model::Fixture;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

pub struct Runner<'a> {
    config: &'a HarnessConfig,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a HarnessConfig) -> Self {
        Self { config }
    }

    /// Run every fixture in order, strictly sequentially: each invocation
    /// completes (including output capture) before the next one starts.
    /// Subject failures are not judged here; the comparator grades whatever
    /// artifacts materialized.
    pub async fn run_all(&self, fixtures: &[Fixture]) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.config.outputs_dir).await?;

        for fixture in fixtures {
            self.run_fixture(fixture).await?;
        }
        Ok(())
    }

    async fn run_fixture(&self, fixture: &Fixture) -> anyhow::Result<()> {
        let name = fixture.name.as_str();
        let out_path = self.config.actual_out(name);
        let atf_path = self.config.actual_atf(name);

        // A leftover artifact from a previous run must not pass for this
        // run's output, in particular when the subject writes no log at all.
        remove_if_present(&out_path).await?;
        remove_if_present(&atf_path).await?;

        let input = tokio::fs::read(&fixture.input_path).await?;

        tracing::info!(fixture = name, "running subject");

        let mut child = Command::new(&self.config.subject)
            .arg(&self.config.accounts)
            .arg(&atf_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // The subject may exit before draining its input; a broken pipe
            // here is not an error for the harness.
            let _ = stdin.write_all(&input).await;
            let _ = stdin.shutdown().await;
        }

        let wait = child.wait_with_output();
        let output = match self.config.timeout_seconds {
            Some(secs) => match timeout(Duration::from_secs(secs), wait).await {
                Ok(output) => output?,
                Err(_) => {
                    // kill_on_drop reaps the child; no .out is written, so
                    // the comparator reports the fixture as missing output.
                    tracing::warn!(fixture = name, timeout_seconds = secs, "subject timed out");
                    return Ok(());
                }
            },
            None => wait.await?,
        };

        tracing::debug!(
            fixture = name,
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            "subject finished"
        );

        tokio::fs::write(&out_path, &output.stdout).await?;
        Ok(())
    }
}

async fn remove_if_present(path: &std::path::Path) -> anyhow::Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
