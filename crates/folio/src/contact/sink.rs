//! Delivery of accepted submissions.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use super::form::Submission;

/// A submission could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to deliver submission via {sink}: {reason}")]
pub struct DeliveryError {
    /// Name of the sink that failed.
    pub sink: &'static str,
    /// Description of what went wrong.
    pub reason: String,
}

impl DeliveryError {
    /// Create a delivery error for the named sink.
    #[must_use]
    pub fn new(sink: &'static str, reason: impl Into<String>) -> Self {
        Self {
            sink,
            reason: reason.into(),
        }
    }
}

/// Receives submissions that passed validation.
///
/// Implementors would forward the submission to an email or API backend.
/// Delivery is synchronous.
pub trait SubmissionSink: fmt::Debug {
    /// The name of this sink (for logging).
    fn name(&self) -> &'static str;

    /// Deliver one submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission could not be handed off. The
    /// controller turns this into a form-level error.
    fn deliver(&mut self, submission: &Submission) -> Result<(), DeliveryError>;
}

/// Accepts every submission without sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAcknowledgement;

impl SubmissionSink for LocalAcknowledgement {
    fn name(&self) -> &'static str {
        "local"
    }

    fn deliver(&mut self, submission: &Submission) -> Result<(), DeliveryError> {
        debug!(
            received_at = %submission.received_at,
            "Submission acknowledged locally; nothing was sent"
        );
        Ok(())
    }
}
