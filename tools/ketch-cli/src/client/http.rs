use super::error::ClientError;
use crate::config::ContextConfig;
use reqwest::{Client, Response};
use serde::Deserialize;

/// HTTP client for the Ketch server API
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client for the given context
    pub fn new(context: &ContextConfig) -> Result<Self, ClientError> {
        let base_url = context
            .server_url
            .as_ref()
            .ok_or_else(|| {
                ClientError::config_error("Server URL not configured")
            })?
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .user_agent(concat!("ketch-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::RequestFailed)?;

        Ok(Self { client, base_url })
    }

    /// Make a GET request
    pub async fn get<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::RequestFailed)?;
        self.handle_response(response).await
    }

    /// Handle HTTP response and deserialize JSON
    async fn handle_response<T>(
        &self,
        response: Response,
    ) -> Result<T, ClientError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status();

        if status.is_success() {
            let text =
                response.text().await.map_err(ClientError::RequestFailed)?;
            serde_json::from_str(&text)
                .map_err(ClientError::SerializationError)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::api_error(status.as_u16(), error_text))
        }
    }
}
