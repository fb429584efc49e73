use crate::domain::ports::{CommandInvoker, ConfigProvider};
use crate::utils::error::{BridgeError, Result};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Forwards commands to an HTTP relay in front of the backend.
///
/// `POST {base_url}/invoke/{command}` with the argument object as the JSON
/// body. The relay must expose `/invoke`; the desktop backend's own HTTP
/// server (port 8088) only serves `/config`, `/vendas` and `/resumes`, so
/// pointing `base_url` at it will not work. A 2xx body is the result, an empty body reads as `null`. Any other
/// status is a command failure whose message comes from the
/// `{"error": "..."}` envelope, or the raw body when there is none.
#[derive(Debug, Clone)]
pub struct HttpInvoker {
    client: Client,
    base_url: String,
}

impl HttpInvoker {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url = config.backend_url();
        let base_url = validate_required_field("backend.base_url", &base_url)?;
        Self::new(*base_url, Duration::from_secs(config.timeout_seconds()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn command_url(&self, command: &str) -> String {
        format!("{}/invoke/{}", self.base_url, command)
    }
}

#[async_trait]
impl CommandInvoker for HttpInvoker {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        let url = self.command_url(command);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(&args).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Command {} answered with status {}", command, status);

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            return Err(BridgeError::command(command, message));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|source| BridgeError::Decode {
            command: command.to_string(),
            source,
        })
    }
}
