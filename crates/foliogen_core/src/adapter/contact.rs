//! Contact-form submission adapter.
//!
//! # Responsibility
//! - Forward one contact message to an external form-collection endpoint.
//! - Report the outcome as a single result value with a human-readable
//!   message.
//!
//! # Invariants
//! - One-shot semantics: no retry is performed here or anywhere in core.
//! - Submission never reads or writes the portfolio document.

use crate::model::validate::{is_valid_email, require_non_empty, ValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_FORM_URL: &str = "https://docs.google.com/forms/u/0/d/e/1FAIpQLSdbKshYeMJzT9vK_f1-Kv5MgKsrx38r_PsScdFC96hrBVanBQ/formResponse";
const DEFAULT_NAME_ENTRY: &str = "entry.509883359";
const DEFAULT_EMAIL_ENTRY: &str = "entry.1448404709";
const DEFAULT_MESSAGE_ENTRY: &str = "entry.1667764568";

/// One visitor message from the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Form-side checks run before any network call.
    ///
    /// # Contract
    /// - All three fields must be non-empty after trimming.
    /// - The email must have a plausible address shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        require_non_empty("message", &self.message)
    }
}

/// Errors from one submission attempt.
#[derive(Debug)]
pub enum SubmissionError {
    /// Transport-level failure (connect, timeout).
    Transport(reqwest::Error),
    /// The endpoint answered with a non-success status.
    Status(u16),
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "form submission failed: {err}"),
            Self::Status(code) => write!(f, "form endpoint returned status {code}"),
        }
    }
}

impl Error for SubmissionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Seam views and tests program against.
pub trait SubmissionSink {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError>;
}

/// Target form endpoint and the per-field entry keys it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget {
    pub form_url: String,
    pub name_entry: String,
    pub email_entry: String,
    pub message_entry: String,
}

impl Default for FormTarget {
    fn default() -> Self {
        Self {
            form_url: DEFAULT_FORM_URL.to_string(),
            name_entry: DEFAULT_NAME_ENTRY.to_string(),
            email_entry: DEFAULT_EMAIL_ENTRY.to_string(),
            message_entry: DEFAULT_MESSAGE_ENTRY.to_string(),
        }
    }
}

/// Blocking Google-Forms implementation of [`SubmissionSink`].
///
/// Posts the submission as form-encoded entry fields, the wire shape a
/// Google Form's `formResponse` endpoint accepts.
pub struct GoogleFormAdapter {
    client: reqwest::blocking::Client,
    target: FormTarget,
}

impl GoogleFormAdapter {
    /// Creates an adapter posting to the given form target.
    pub fn new(target: FormTarget) -> Result<Self, SubmissionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self { client, target })
    }
}

impl SubmissionSink for GoogleFormAdapter {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        let fields = [
            (self.target.name_entry.as_str(), submission.name.as_str()),
            (self.target.email_entry.as_str(), submission.email.as_str()),
            (
                self.target.message_entry.as_str(),
                submission.message.as_str(),
            ),
        ];

        let response = self.client.post(&self.target.form_url).form(&fields).send()?;
        let status = response.status();
        if !status.is_success() {
            debug!(
                "event=contact_submit module=adapter status=rejected http_status={}",
                status.as_u16()
            );
            return Err(SubmissionError::Status(status.as_u16()));
        }

        debug!("event=contact_submit module=adapter status=ok");
        Ok(())
    }
}
