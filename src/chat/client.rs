use super::types::*;
use crate::{Error, Result, config::ClientConfig};
use async_trait::async_trait;
use reqwest::{Url, header::CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends one message and returns the server's JSON reply.
    ///
    /// Non-2xx statuses and connection failures come back as
    /// [`Error::Transport`]; a 2xx body that is not JSON as [`Error::Decode`].
    async fn send(&self, message: &str) -> Result<ChatResponse>;
}

pub struct HttpChatClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpChatClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            Error::config(format!("Invalid endpoint '{}': {}", config.endpoint, e))
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Unsupported endpoint scheme '{}', expected http or https",
                endpoint.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Created chat client for endpoint: {}", endpoint);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn post(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(
                Some(status.as_u16()),
                format!("HTTP error! status: {}", status),
            ));
        }

        let body = response.bytes().await?;
        debug!("Received {} byte response body", body.len());

        let value: Value = serde_json::from_slice(&body)?;
        Ok(ChatResponse::new(value))
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn send(&self, message: &str) -> Result<ChatResponse> {
        let span = info_span!(
            "chat_send",
            request_id = %Uuid::new_v4(),
            endpoint = %self.endpoint
        );

        async {
            let request = ChatRequest::new(message);
            debug!("Sending chat message ({} bytes)", request.message.len());

            match self.post(&request).await {
                Ok(response) => {
                    info!("Chat reply received: {}", response);
                    Ok(response)
                }
                Err(e) => {
                    error!("Chat request failed: {}", e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
