use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Harness configuration, normally loaded from `tally.yaml`.
///
/// Directory roles are fixed: `inputs/` holds one `<name>.txt` per fixture,
/// `outputs/` receives `<name>.out` and `<name>.atf`, `expected/` holds the
/// golden copies. The paths themselves are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(default, rename = "configVersion", alias = "version")]
    pub version: u32,

    /// Subject executable, invoked as `subject <accounts> <atf-path>`.
    pub subject: PathBuf,

    /// Fixed side input passed to every invocation.
    pub accounts: PathBuf,

    #[serde(default = "default_inputs_dir")]
    pub inputs_dir: PathBuf,
    #[serde(default = "default_outputs_dir")]
    pub outputs_dir: PathBuf,
    #[serde(default = "default_expected_dir")]
    pub expected_dir: PathBuf,

    /// Per-fixture wall-clock limit. `None` means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

fn default_inputs_dir() -> PathBuf {
    PathBuf::from("inputs")
}

fn default_outputs_dir() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_expected_dir() -> PathBuf {
    PathBuf::from("expected")
}

impl HarnessConfig {
    pub fn input_file(&self, name: &str) -> PathBuf {
        self.inputs_dir.join(format!("{name}.txt"))
    }

    pub fn actual_out(&self, name: &str) -> PathBuf {
        self.outputs_dir.join(format!("{name}.out"))
    }

    pub fn actual_atf(&self, name: &str) -> PathBuf {
        self.outputs_dir.join(format!("{name}.atf"))
    }

    pub fn expected_out(&self, name: &str) -> PathBuf {
        self.expected_dir.join(format!("{name}.out"))
    }

    pub fn expected_atf(&self, name: &str) -> PathBuf {
        self.expected_dir.join(format!("{name}.atf"))
    }

    /// Checks done before a run touches anything: the comparator-only path
    /// skips the accounts check since it never invokes the subject.
    pub fn validate_for_run(&self) -> Result<(), ConfigError> {
        if !self.subject.exists() {
            return Err(ConfigError(format!(
                "subject executable not found: {}",
                self.subject.display()
            )));
        }
        if !self.accounts.exists() {
            return Err(ConfigError(format!(
                "accounts file not found: {}",
                self.accounts.display()
            )));
        }
        self.validate_for_check()
    }

    pub fn validate_for_check(&self) -> Result<(), ConfigError> {
        if !self.inputs_dir.is_dir() {
            return Err(ConfigError(format!(
                "inputs directory not found: {}",
                self.inputs_dir.display()
            )));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path, strict: bool) -> Result<HarnessConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    let mut ignored_keys = std::collections::HashSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(&raw);

    let mut cfg: HarnessConfig = serde_ignored::deserialize(deserializer, |path| {
        ignored_keys.insert(path.to_string());
    })
    .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;

    if !ignored_keys.is_empty() {
        let meaningful: Vec<_> = ignored_keys
            .iter()
            .filter(|k| !k.starts_with('_') && !k.starts_with("x-"))
            .collect();
        if !meaningful.is_empty() {
            if strict {
                return Err(ConfigError(format!(
                    "unknown fields in strict mode: {:?} (file: {})",
                    meaningful,
                    path.display()
                )));
            }
            tracing::warn!(?meaningful, "ignored unknown config fields");
        }
    }

    // A missing version field reads as 0 and is accepted as version 1
    // written before the field existed.
    if cfg.version != 0 && cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: {})",
            cfg.version, SUPPORTED_CONFIG_VERSION
        )));
    }

    normalize_paths(&mut cfg, path);
    Ok(cfg)
}

/// Relative paths in the file are anchored at the config file's directory,
/// not the process working directory.
fn normalize_paths(cfg: &mut HarnessConfig, config_path: &Path) {
    let base = config_path.parent().unwrap_or(Path::new("."));
    for p in [
        &mut cfg.subject,
        &mut cfg.accounts,
        &mut cfg.inputs_dir,
        &mut cfg.outputs_dir,
        &mut cfg.expected_dir,
    ] {
        if p.is_relative() {
            *p = base.join(&*p);
        }
    }
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(
        path,
        r#"configVersion: 1

# Subject under test, invoked as: subject <accounts> <transaction-file>
subject: ./frontend
accounts: current_accounts.txt

# Fixture tree (relative paths resolve against this file's directory)
inputs_dir: inputs
outputs_dir: outputs
expected_dir: expected

# Kill a fixture's subject invocation after this many seconds.
# Omit to wait indefinitely.
# timeout_seconds: 30
"#,
    )
    .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}
