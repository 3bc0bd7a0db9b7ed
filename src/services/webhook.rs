// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use reqwest::Client;

use crate::core::action::TimeRecord;
use crate::sdebug;

pub const DEFAULT_WEBHOOK_URL: &str = "https://hook.us1.make.com/dlkqk2ip7lvmq7flot6o4y4qtka20cxx";

#[derive(Debug)]
pub enum SaveError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    Request(reqwest::Error),

    /// The webhook answered with a non-success status.
    Status { status: u16, body: String },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Request(e) => write!(f, "request failed: {e}"),
            SaveError::Status { status, body } if body.is_empty() => {
                write!(f, "webhook returned HTTP {status}")
            }
            SaveError::Status { status, body } => {
                write!(f, "webhook returned HTTP {status}: {body}")
            }
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Request(e) => Some(e),
            SaveError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for SaveError {
    fn from(e: reqwest::Error) -> Self {
        SaveError::Request(e)
    }
}

/// Posts time records to the configured webhook. No timeout, no retry.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Returns the response body on success.
    pub async fn post_time(&self, record: &TimeRecord) -> Result<String, SaveError> {
        sdebug!("Webhook", "POST {} {:?}", self.url, record);

        let resp = self.client.post(&self.url).json(record).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(SaveError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
