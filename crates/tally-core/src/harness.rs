//! Orchestration facade: discover fixtures, drive the subject, grade the
//! artifacts, report. The CLI's subcommands map onto the three entry
//! points here.

use crate::comparator::Comparator;
use crate::config::HarnessConfig;
use crate::discovery::{discover_fixtures, filter_fixtures};
use crate::model::{Fixture, RunReport};
use crate::report::console;
use crate::runner::Runner;

pub struct Harness {
    config: HarnessConfig,
    filters: Vec<String>,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            filters: Vec::new(),
        }
    }

    pub fn with_filters(mut self, filters: Vec<String>) -> Self {
        self.filters = filters;
        self
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    fn fixtures(&self) -> anyhow::Result<Vec<Fixture>> {
        let all = discover_fixtures(&self.config.inputs_dir)?;
        Ok(filter_fixtures(all, &self.filters))
    }

    /// Runner only: produce `outputs/<name>.out` (and whatever `.atf` the
    /// subject writes) for every fixture.
    pub async fn execute(&self) -> anyhow::Result<usize> {
        self.config.validate_for_run()?;
        let fixtures = self.fixtures()?;
        tracing::info!(fixtures = fixtures.len(), "executing fixtures");
        Runner::new(&self.config).run_all(&fixtures).await?;
        Ok(fixtures.len())
    }

    /// Comparator only: grade existing artifacts and print the report.
    pub fn check(&self) -> anyhow::Result<RunReport> {
        self.config.validate_for_check()?;
        let fixtures = self.fixtures()?;
        let verdicts = Comparator::new(&self.config).grade_all(&fixtures)?;
        let report = RunReport::new(verdicts);
        console::print_all(&report.verdicts, &report.summary);
        Ok(report)
    }

    /// Full run: Runner first, then Comparator over its artifacts.
    pub async fn run(&self) -> anyhow::Result<RunReport> {
        self.execute().await?;
        self.check()
    }
}
