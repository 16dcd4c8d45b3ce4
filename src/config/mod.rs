//! @acp:module "Configuration"
//! @acp:summary "Optional JSON configuration with per-field defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::provider::{ProviderKind, DEFAULT_BASE_URL};
use crate::synth::{ContentKind, GenerationRequest, REFERENCE_COUNTRY};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".ai-blog.config.json";

/// @acp:summary "Top-level ai-blog configuration"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Request defaults used when a flag is not given
    #[serde(default)]
    pub defaults: RequestDefaults,

    /// Output directory for generated files
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    #[serde(default)]
    pub provider: ProviderKind,

    /// Model name; environment variables take precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default)]
    pub openai: OpenAiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: RequestDefaults::default(),
            out_dir: default_out_dir(),
            provider: ProviderKind::default(),
            model: None,
            openai: OpenAiConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load from default location or fall back to defaults"
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Request with this config's defaults
    pub fn request(&self, topic: impl Into<String>, kind: ContentKind) -> GenerationRequest {
        GenerationRequest::new(topic, kind)
            .with_words(self.defaults.words)
            .with_tone(self.defaults.tone.clone())
            .with_audience(self.defaults.audience.clone())
            .with_country(self.defaults.country.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDefaults {
    #[serde(default = "default_words")]
    pub words: u32,

    #[serde(default = "default_tone")]
    pub tone: String,

    #[serde(default = "default_audience")]
    pub audience: String,

    #[serde(default = "default_country")]
    pub country: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            words: default_words(),
            tone: default_tone(),
            audience: default_audience(),
            country: default_country(),
        }
    }
}

/// @acp:summary "OpenAI-compatible endpoint settings"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("./out")
}

fn default_words() -> u32 {
    1200
}

fn default_tone() -> String {
    "friendly".to_string()
}

fn default_audience() -> String {
    "beginners".to_string()
}

fn default_country() -> String {
    REFERENCE_COUNTRY.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.defaults.words, 1200);
        assert_eq!(config.out_dir, PathBuf::from("./out"));
        assert_eq!(config.openai.base_url, "https://api.openai.com/v1");
        assert_eq!(config.openai.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_partial_config() {
        let config: Config = serde_json::from_str(
            r#"{"defaults": {"tone": "formal"}, "provider": "mock", "model": "gpt-x"}"#,
        )
        .unwrap();
        assert_eq!(config.defaults.tone, "formal");
        assert_eq!(config.defaults.audience, "beginners");
        assert_eq!(config.provider, ProviderKind::Mock);
        assert_eq!(config.model.as_deref(), Some("gpt-x"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut config = Config::default();
        config.defaults.country = "Nepal".into();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.request("tea", ContentKind::Article).country, "Nepal");
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(Config::load("/nonexistent/.ai-blog.config.json").is_err());
    }
}
