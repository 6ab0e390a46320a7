use anyhow::Context;

/// Runtime configuration, read once at startup and injected via `AppState`.
///
/// The credentials and endpoints the service cannot run without are required
/// environment variables; startup fails with the variable name when one is
/// missing. Everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Hosted data store (auth endpoint + row storage)
    pub store: StoreConfig,
    /// Chat-completion model endpoint
    pub model: ModelConfig,
}

/// Connection settings for the hosted data store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project base URL, without a trailing slash
    pub url: String,
    /// Publishable anon key, sent as the `apikey` header on every call
    pub anon_key: String,
}

/// Connection settings for the chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Base URL of an OpenAI-compatible gateway
    pub base_url: String,
    /// API key sent as a bearer token
    pub api_key: String,
    /// Model identifier for ranking requests
    pub chat_model: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let store_url = std::env::var("STORE_URL").context("STORE_URL is required")?;
        let anon_key = std::env::var("STORE_ANON_KEY").context("STORE_ANON_KEY is required")?;
        let api_key = std::env::var("LLM_API_KEY").context("LLM_API_KEY is required")?;

        let base_url = std::env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api".to_string());
        let chat_model = std::env::var("LLM_CHAT_MODEL")
            .unwrap_or_else(|_| "google/gemini-2.5-flash".to_string());
        let bind_addr =
            std::env::var("ORG_SEARCH_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        Ok(Self {
            bind_addr,
            store: StoreConfig {
                url: store_url.trim_end_matches('/').to_string(),
                anon_key,
            },
            model: ModelConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key,
                chat_model,
            },
        })
    }
}

impl StoreConfig {
    /// REST endpoint for one table, e.g. `{url}/rest/v1/meetings`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    /// Endpoint that resolves a bearer token to the user it belongs to.
    pub fn auth_user_url(&self) -> String {
        format!("{}/auth/v1/user", self.url)
    }
}

impl ModelConfig {
    pub fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}
