use log::debug;

use crate::{
    error::{LoadErr, Result},
    payload::EventPayload,
};

/// What came back from the target: the status code and the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Delivers a single payload to a target.
#[allow(unused)]
#[trait_variant::make(Transport: Send)]
pub trait TransportTemplate {
    /// Posts `payload` to `target` and waits for the full response.
    ///
    /// # Returns
    /// The response's status and body, whatever the status is.
    async fn post(&self, target: &str, payload: &EventPayload) -> Result<Reply>;
}

/// A `Transport` speaking JSON over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post(&self, target: &str, payload: &EventPayload) -> Result<Reply> {
        let response = self
            .client
            .post(target)
            .json(payload)
            .send()
            .await
            .map_err(|source| LoadErr::Transport {
                target: target.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|source| LoadErr::Transport {
            target: target.to_string(),
            source,
        })?;

        debug!("{target} answered {status} ({} bytes)", body.len());
        Ok(Reply { status, body })
    }
}
