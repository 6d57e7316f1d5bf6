//! Server configuration

use serde::{Deserialize, Deserializer};
use std::fmt;

/// Secret configuration value, redacted in `Debug` output
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Raw value, for handing to the provider client only
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(\"***\")")
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Secret)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_project_name() -> String {
    "Aura MVP Scope Generator (Gemini Edition)".to_string()
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_gemini_model_name() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_gemini_base_url() -> String {
    aura_llm::DEFAULT_BASE_URL.to_string()
}

fn default_max_output_tokens() -> u32 {
    4096
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_openai_max_tokens() -> u32 {
    1500
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_allowed_origins() -> String {
    "https://your-frontend-domain.com".to_string()
}

/// Application settings, loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Versioned route prefix
    #[serde(default = "default_api_prefix", rename = "api_v1_str")]
    pub api_prefix: String,

    /// development, staging, production
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Google Gemini credential (required)
    #[serde(default)]
    pub gemini_api_key: Option<Secret>,

    #[serde(default = "default_gemini_model_name")]
    pub gemini_model_name: String,

    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    /// Output token limit for scope generation
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Optional secondary provider credential
    #[serde(default)]
    pub openai_api_key: Option<Secret>,

    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    #[serde(default = "default_openai_max_tokens")]
    pub openai_max_tokens: u32,

    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Comma-separated origins allowed outside development
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: String,
}

impl Settings {
    /// Load settings from `config/aura.*`, `.env` and the process environment.
    ///
    /// Fails when `GEMINI_API_KEY` is missing or blank.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::File::with_name("config/aura").required(false))
            .add_source(config::Environment::default())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read configuration: {}", e))?;

        Self::from_config(cfg)
    }

    /// Build settings from an already assembled configuration
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        let settings: Settings = cfg
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> anyhow::Result<()> {
        match &self.gemini_api_key {
            Some(key) if !key.is_blank() => {}
            _ => anyhow::bail!(
                "GEMINI_API_KEY is not set in the environment or .env file; the service cannot start"
            ),
        }
        if !self.api_prefix.starts_with('/') {
            anyhow::bail!("API_V1_STR must start with '/', got '{}'", self.api_prefix);
        }
        if !self.is_development() && self.allowed_origins().iter().any(|o| o == "*") {
            anyhow::bail!(
                "CORS_ALLOWED_ORIGINS cannot contain '*' outside development; list explicit origins"
            );
        }
        Ok(())
    }

    /// Gemini key; present once validation passed
    pub fn gemini_api_key(&self) -> &str {
        self.gemini_api_key
            .as_ref()
            .map(Secret::expose)
            .unwrap_or_default()
    }

    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|key| !key.is_blank())
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Origins allowed by CORS outside development
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
