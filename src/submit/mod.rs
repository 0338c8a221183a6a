//! Form submission client.
//!
//! The contact and contribute forms post a single JSON payload to an
//! externally configured script endpoint. Any HTTP success status counts
//! as accepted; every other outcome (error status, transport failure)
//! folds into the one submission error kind, whose message is surfaced
//! to the user as-is. No retry, no partial state.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

use crate::config::SubmitConfig;
use crate::error::{GeocatError, Result};

/// A message for the maintainers, sent from the Contact page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: String,
}

impl ContactMessage {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            submitted_at: Utc::now().to_rfc3339(),
        }
    }
}

/// A proposed catalogue listing, sent from the Contribute page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolProposal {
    pub name: String,
    pub link: String,
    pub description: String,
    pub tags: Vec<String>,
    pub submitter: Option<String>,
    pub email: Option<String>,
    pub submitted_at: String,
}

impl ToolProposal {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            description: String::new(),
            tags: Vec::new(),
            submitter: None,
            email: None,
            submitted_at: Utc::now().to_rfc3339(),
        }
    }
}

/// The JSON body posted to the endpoint, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SubmissionPayload {
    #[serde(rename = "contact")]
    Contact(ContactMessage),
    #[serde(rename = "tool-proposal")]
    Proposal(ToolProposal),
}

impl SubmissionPayload {
    /// Short label for log lines and status messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Contact(_) => "contact",
            Self::Proposal(_) => "tool-proposal",
        }
    }
}

/// The submission boundary. One implementation talks HTTP; tests swap in
/// the mock.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()>;
}

/// Posts payloads to the configured script endpoint.
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(config: &SubmitConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GeocatError::Submission(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        log::info!("Posting {} submission to {}", payload.kind(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| GeocatError::Submission(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            log::info!("Submission accepted ({})", status);
            Ok(())
        } else {
            log::warn!("Submission rejected ({})", status);
            Err(GeocatError::Submission(format!("Endpoint returned {}", status)))
        }
    }
}

/// Records payloads instead of sending them; optionally fails every call.
pub struct MockSubmitter {
    sent: Mutex<Vec<SubmissionPayload>>,
    fail_with: Option<String>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// A mock that rejects every submission with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// Payloads submitted so far.
    pub fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Submitter for MockSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(GeocatError::Submission(message.clone()));
        }
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }
}
