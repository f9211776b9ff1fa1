//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use mpags_engine::{EngineConfig, ExecutionMode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Engine-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EngineSection {
    /// Number of worker threads (0 = one per CPU)
    pub worker_count: usize,

    /// Minimum input length (characters) for adaptive mode to go parallel
    pub parallel_threshold: usize,

    /// Overall worker timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,

    /// "sequential", "parallel" or "adaptive"
    pub execution_mode: String,
}

impl Default for EngineSection {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            worker_count: engine.worker_count,
            parallel_threshold: engine.parallel_threshold,
            timeout_secs: engine.timeout.map_or(0, |t| t.as_secs()),
            execution_mode: "parallel".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format ("text" or "json")
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()).into())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()).into())
    }

    /// Convert to an engine configuration
    ///
    /// `worker_override` (from `-j`) takes precedence over the file.
    pub fn to_engine_config(&self, worker_override: Option<usize>) -> Result<EngineConfig> {
        let execution_mode = parse_execution_mode(&self.engine.execution_mode)?;
        let requested = worker_override.unwrap_or(self.engine.worker_count);
        let worker_count = if requested == 0 {
            num_cpus::get()
        } else {
            requested
        };

        let timeout = match self.engine.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(EngineConfig {
            execution_mode,
            worker_count,
            parallel_threshold: self.engine.parallel_threshold,
            timeout,
        })
    }
}

fn parse_execution_mode(value: &str) -> Result<ExecutionMode> {
    match value.to_ascii_lowercase().as_str() {
        "sequential" => Ok(ExecutionMode::Sequential),
        "parallel" => Ok(ExecutionMode::Parallel),
        "adaptive" => Ok(ExecutionMode::Adaptive),
        other => Err(CliError::Config(format!("unknown execution_mode '{other}'")).into()),
    }
}
