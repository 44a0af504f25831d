use anyhow::Context;
use std::sync::Arc;

use crate::config::Config;
use crate::llm::{CompletionProvider, OpenAiCompatibleProvider};

/// Credential env var for the upstream provider. Read once at startup and
/// never logged.
const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .with_context(|| format!("{} must be set", API_KEY_VAR))?;
        let provider = Arc::new(OpenAiCompatibleProvider::new(&config.llm_config, api_key));

        Ok(Self { config, provider })
    }

    #[cfg(test)]
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { config, provider }
    }
}
