use std::sync::Arc;

use crate::client::AsanaClient;
use crate::config::{get_api_token, load_config, save_config};
use crate::error::{ExportError, ExportResult};

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    api_token: Option<String>,
    client: Option<Arc<AsanaClient>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            api_token: None,
            client: None,
        }
    }

    /// Load context from saved configuration
    pub fn load() -> ExportResult<Self> {
        let api_token = get_api_token().ok();
        let client = match api_token.as_ref() {
            Some(token) => Some(Arc::new(AsanaClient::new(token)?)),
            None => None,
        };

        Ok(Self { api_token, client })
    }

    /// Get or create a client (requires an API token)
    pub fn verified_client(&mut self) -> ExportResult<Arc<AsanaClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let api_token = self.api_token()?.clone();
        let client = Arc::new(AsanaClient::new(&api_token)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Get the API token, loading from config if necessary
    pub fn api_token(&mut self) -> ExportResult<&String> {
        if self.api_token.is_none() {
            self.api_token = Some(get_api_token()?);
        }

        self.api_token.as_ref().ok_or(ExportError::ApiTokenNotFound)
    }

    /// Set and save a new API token
    pub fn set_api_token(&mut self, api_token: String) -> ExportResult<()> {
        let mut config = load_config();
        config.api_token = Some(api_token.clone());
        save_config(&config)?;
        self.client = Some(Arc::new(AsanaClient::new(&api_token)?));
        self.api_token = Some(api_token);
        Ok(())
    }

    /// Check if context has an API token available
    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some() || get_api_token().is_ok()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    api_token: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self { api_token: None }
    }

    pub fn with_api_token(mut self, api_token: String) -> Self {
        self.api_token = Some(api_token);
        self
    }

    pub fn build(self) -> ExportResult<CliContext> {
        let context = if let Some(api_token) = self.api_token {
            let client = Some(Arc::new(AsanaClient::new(&api_token)?));
            CliContext {
                api_token: Some(api_token),
                client,
            }
        } else {
            CliContext::load()?
        };

        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
