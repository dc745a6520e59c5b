use std::time::Duration;

use catseek::{EnginePreset, SandboxRunner};
use serde::{Deserialize, Serialize};

const DEFAULT_REPLY_DELAY_MS: u64 = 200;
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub sandbox: SandboxConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reply engine for new conversations: "catgpt", "copycat" or "catmind".
    pub preset: EnginePreset,
    /// Fixes the joke rotation for scripted sessions.
    pub seed: Option<u64>,
    /// Pause before a reply appears, for effect.
    pub reply_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            preset: EnginePreset::default(),
            seed: None,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub enabled: bool,
    /// Interpreter command; it must read the program from stdin.
    pub interpreter: String,
    pub args: Vec<String>,
    pub timeout_secs: u64,
    pub max_output_bytes: usize,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interpreter: catseek::sandbox::DEFAULT_INTERPRETER.to_string(),
            args: vec!["-I".to_string(), "-".to_string()],
            timeout_secs: catseek::sandbox::DEFAULT_TIMEOUT_SECS,
            max_output_bytes: catseek::sandbox::DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

impl SandboxConfig {
    /// Builds the runner this config describes, or `None` when running
    /// code is switched off.
    pub fn build_runner(&self) -> Option<SandboxRunner> {
        if !self.enabled {
            return None;
        }
        Some(
            SandboxRunner::new()
                .with_interpreter(self.interpreter.clone(), self.args.clone())
                .with_timeout(Duration::from_secs(self.timeout_secs))
                .with_max_output_bytes(self.max_output_bytes),
        )
    }
}

/// # Available Themes
/// - `deepsea` (default): dark blue chat bubbles
/// - `paper`: light green-on-white bubbles
/// - `mono`: high contrast monochrome for accessibility
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: "deepsea" (default), "paper" or "mono".
    pub theme: String,
    /// Show timestamps on messages.
    pub timestamps: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "deepsea".to_string(),
            timestamps: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<String>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_is_catgpt() {
        let config = AppConfig::default();
        assert_eq!(config.engine.preset, EnginePreset::Catgpt);
        assert!(config.engine.seed.is_none());
    }

    #[test]
    fn deserialize_preset_names() {
        let json = r#"{"preset": "catmind"}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.preset, EnginePreset::Catmind);
    }

    #[test]
    fn disabled_sandbox_builds_no_runner() {
        let mut config = SandboxConfig::default();
        config.enabled = false;
        assert!(config.build_runner().is_none());
    }

    #[test]
    fn sandbox_runner_uses_the_configured_interpreter() {
        let mut config = SandboxConfig::default();
        config.interpreter = "python3.12".to_string();
        let runner = config.build_runner().unwrap();
        assert_eq!(runner.interpreter(), "python3.12");
    }
}
