//! Configuration template generation

use crate::config::CliConfig;
use anyhow::Result;

/// Render `config` as a commented TOML template
pub fn render_template(config: &CliConfig) -> Result<String> {
    let body = config.to_toml()?;
    Ok(format!(
        r#"# mpags-cipher configuration
#
# [engine]
#   worker_count       number of concurrent workers (0 = one per CPU)
#   parallel_threshold minimum input length for "adaptive" mode to go parallel
#   timeout_secs       overall limit on waiting for workers (0 = no limit)
#   execution_mode     "sequential", "parallel" or "adaptive"
#
# [output]
#   format             "text" or "json"

{body}"#
    ))
}
