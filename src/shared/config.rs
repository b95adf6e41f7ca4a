//! Application configuration. API credential, endpoint, model.

use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Environment variable read for the credential when `api_key` is not configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Completion API key. Read from EXPERT_CONSULT_API_KEY, falling back to OPENAI_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat completions endpoint. Read from EXPERT_CONSULT_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model name. Read from EXPERT_CONSULT_MODEL.
    #[serde(default)]
    pub model: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("EXPERT_CONSULT"));
        if let Ok(path) = std::env::var("EXPERT_CONSULT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API key if configured. Checked on every request, so a key
    /// exported after startup is still picked up.
    pub fn api_key(&self) -> Option<String> {
        let present = |k: &String| !k.trim().is_empty();
        self.api_key
            .clone()
            .filter(present)
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(present))
    }

    /// Returns the API URL. Defaults to the OpenAI chat completions endpoint.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the model name. Defaults to "gpt-3.5-turbo".
    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Returns true if an API key is available right now.
    pub fn is_api_key_configured(&self) -> bool {
        self.api_key().is_some()
    }
}

/// Serializes tests that read or mutate `OPENAI_API_KEY`.
#[cfg(test)]
pub(crate) static ENV_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Set or clear `OPENAI_API_KEY`. Callers must hold `ENV_LOCK`.
#[cfg(test)]
pub(crate) fn set_api_key_env(value: Option<&str>) {
    // SAFETY: every test touching this variable holds ENV_LOCK.
    unsafe {
        match value {
            Some(v) => std::env::set_var(API_KEY_ENV, v),
            None => std::env::remove_var(API_KEY_ENV),
        }
    }
}
