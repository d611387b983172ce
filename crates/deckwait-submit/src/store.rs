//! Storage API seam
//!
//! The external spreadsheet service is an opaque collaborator behind the
//! [`StorageApi`] trait. The production implementation ([`SheetStore`])
//! POSTs one JSON envelope per submission and only looks at the response
//! status; the body is unused.

use crate::config::SubmitConfig;
use crate::payload::{SheetEnvelope, SheetRow};
use deckwait_form::ValidationErrors;
use std::sync::Arc;

/// Submission failures
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Per-field validation failure; no request was made
    #[error("validation failed: {0}")]
    Invalid(#[from] ValidationErrors),

    /// Endpoint answered outside the success range
    #[error("storage endpoint returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Request never completed
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A submission is already in flight for this form instance
    #[error("submission already in flight")]
    InFlight,
}

impl SubmitError {
    /// Whether resubmitting manually can succeed
    ///
    /// Validation failures need corrected input first; an in-flight guard
    /// hit resolves on its own.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Transport(_))
    }
}

/// Opaque external storage collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StorageApi: Send + Sync {
    /// Persist one flattened row
    ///
    /// # Errors
    /// - `SubmitError::Status` for a non-success HTTP status
    /// - `SubmitError::Transport` when the request never completes
    async fn store(&self, row: &SheetRow) -> Result<(), SubmitError>;
}

#[async_trait::async_trait]
impl<S: StorageApi + ?Sized> StorageApi for Arc<S> {
    async fn store(&self, row: &SheetRow) -> Result<(), SubmitError> {
        (**self).store(row).await
    }
}

/// Spreadsheet-backed storage client
#[derive(Debug, Clone)]
pub struct SheetStore {
    client: reqwest::Client,
    endpoint_url: String,
}

impl SheetStore {
    /// Create a client for the configured endpoint
    #[inline]
    #[must_use]
    pub fn new(config: &SubmitConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url: config.endpoint_url.clone(),
        }
    }

    /// Endpoint this store posts to
    #[inline]
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

#[async_trait::async_trait]
impl StorageApi for SheetStore {
    async fn store(&self, row: &SheetRow) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&SheetEnvelope::new(row.clone()))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "row stored");
            Ok(())
        } else {
            Err(SubmitError::Status {
                status: status.as_u16(),
            })
        }
    }
}
