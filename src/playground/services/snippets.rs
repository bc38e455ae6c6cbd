//! # Remote Snippet Store Client
//!
//! Saves a buffer and gets back the identifier the store assigned, or loads
//! a buffer back by identifier.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::wire::{
    non_empty, parse_first, CodeRequest, GetCodeResponse, SaveCodeResponse, CODE_PATH,
};
use super::{error_chain, SnippetStore};
use crate::playground::errors::StoreError;
use crate::playground::models::Snippet;

/// Largest snippet, in characters, the store accepts
pub const MAX_SNIPPET_LEN: usize = 400_000;

/// Snippet store client speaking JSON over HTTP
pub struct HttpSnippetStore {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSnippetStore {
    pub fn new(client: reqwest::Client, server: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{CODE_PATH}", server.trim_end_matches('/')),
        }
    }

    fn snippet_url(&self, identifier: &str) -> String {
        format!("{}/{}", self.endpoint, urlencoding::encode(identifier))
    }

    async fn read_body<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<(StatusCode, Option<T>), StoreError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(error_chain(&e)))?;
        tracing::debug!("Store response: status={}, length={}", status, body.len());

        match parse_first(&body) {
            Ok(parsed) => Ok((status, Some(parsed))),
            Err(_) if status == StatusCode::NOT_FOUND => Ok((status, None)),
            Err(e) => Err(StoreError::Malformed(format!(
                "HTTP {}: {e}",
                status.as_u16()
            ))),
        }
    }
}

#[async_trait]
impl SnippetStore for HttpSnippetStore {
    async fn save(&self, code: &str) -> Result<String, StoreError> {
        let len = code.chars().count();
        if len > MAX_SNIPPET_LEN {
            return Err(StoreError::TooLarge {
                len,
                max: MAX_SNIPPET_LEN,
            });
        }

        tracing::debug!("Saving {} characters to {}", len, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CodeRequest { code })
            .send()
            .await
            .map_err(|e| StoreError::Transport(error_chain(&e)))?;

        let (status, body) = Self::read_body::<SaveCodeResponse>(response).await?;
        let body = body.unwrap_or_default();

        if let Some(id) = non_empty(body.id) {
            tracing::info!("Snippet saved as {id}");
            return Ok(id);
        }
        match non_empty(body.message) {
            Some(message) => Err(StoreError::Rejected { message }),
            None => Err(StoreError::Malformed(format!(
                "HTTP {}: save response carries no id",
                status.as_u16()
            ))),
        }
    }

    async fn load(&self, identifier: &str) -> Result<Snippet, StoreError> {
        let url = self.snippet_url(identifier);
        tracing::debug!("Loading snippet from {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Transport(error_chain(&e)))?;

        let (_, body) = Self::read_body::<GetCodeResponse>(response).await?;
        let body = body.unwrap_or_default();

        if let Some(contents) = body.contents {
            return Ok(Snippet::new(identifier, contents));
        }
        match non_empty(body.message) {
            Some(message) => Err(StoreError::Rejected { message }),
            None => Err(StoreError::NotFound {
                id: identifier.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HttpSnippetStore {
        HttpSnippetStore::new(reqwest::Client::new(), "http://localhost:8000")
    }

    #[test]
    fn snippet_url_should_percent_encode_identifier() {
        assert_eq!(
            store().snippet_url("a b/c"),
            "http://localhost:8000/api/v1/code/a%20b%2Fc"
        );
    }

    #[tokio::test]
    async fn oversized_buffer_should_be_refused_without_a_request() {
        let code = "x".repeat(MAX_SNIPPET_LEN + 1);
        let err = store().save(&code).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::TooLarge {
                len: MAX_SNIPPET_LEN + 1,
                max: MAX_SNIPPET_LEN
            }
        );
    }
}
