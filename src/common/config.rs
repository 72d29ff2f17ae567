use crate::common::TickerError;

/// Environment variable holding the CoinMarketCap Pro API key.
pub const API_KEY_VAR: &str = "CMC_KEY";
/// Optional override of the API host, e.g. a proxy or mock server.
pub const API_BASE_VAR: &str = "CMC_API_BASE";

/// Loads `.env` from the current or project directory. Call before reading env vars.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Runtime settings taken from the process environment.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, TickerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TickerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TickerError::MissingCredential(API_KEY_VAR.to_string()))?;

        let api_base = lookup(API_BASE_VAR)
            .map(|base| base.trim().to_string())
            .filter(|base| !base.is_empty());

        Ok(Self { api_key, api_base })
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}
