use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

const ENV_CONFIG_PATH: &str = "SCAMSHIELD_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const DEFAULT_CLASSIFIER_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_CLASSIFIER_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_CHAT_ENDPOINT: &str = "https://api.a0.dev/ai/llm";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upstream model endpoints and call parameters
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the generative-content API used for classification
    #[serde(default = "default_classifier_endpoint")]
    pub classifier_endpoint: Url,
    /// Model name appended to the classification endpoint path
    #[serde(default = "default_classifier_model")]
    pub classifier_model: String,
    /// Chat-completion endpoint used by the assistant
    #[serde(default = "default_chat_endpoint")]
    pub chat_endpoint: Url,
    /// Per-request timeout for outbound model calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_classifier_endpoint() -> Url {
    Url::parse(DEFAULT_CLASSIFIER_ENDPOINT).expect("default classifier endpoint is a valid URL")
}

fn default_classifier_model() -> String {
    DEFAULT_CLASSIFIER_MODEL.to_string()
}

fn default_chat_endpoint() -> Url {
    Url::parse(DEFAULT_CHAT_ENDPOINT).expect("default chat endpoint is a valid URL")
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            classifier_endpoint: default_classifier_endpoint(),
            classifier_model: default_classifier_model(),
            chat_endpoint: default_chat_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let llm = Self::load_config_file(&config_path)
            .map(|cf| cf.llm)
            .unwrap_or_default();

        Self { llm, port, host }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration file");
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
