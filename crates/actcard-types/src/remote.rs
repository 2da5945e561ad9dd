use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::error::Result;

/// Why a fetch settled without data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "HTTP {}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for FetchError {}

/// Lifecycle of a remote fetch as seen by presentation code.
///
/// The four states are mutually exclusive and consumers fold over all of
/// them; there is no way to reach activity data without going through
/// `Success`.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteData<E, A> {
    /// Fetch not started.
    Initial,
    /// Fetch in flight.
    Pending,
    Failure(E),
    Success(A),
}

impl<E, A> RemoteData<E, A> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteData::Pending)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteData::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    pub fn success(&self) -> Option<&A> {
        match self {
            RemoteData::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            RemoteData::Failure(error) => Some(error),
            _ => None,
        }
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> RemoteData<E, B> {
        match self {
            RemoteData::Initial => RemoteData::Initial,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure(error) => RemoteData::Failure(error),
            RemoteData::Success(value) => RemoteData::Success(f(value)),
        }
    }

    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> RemoteData<F, A> {
        match self {
            RemoteData::Initial => RemoteData::Initial,
            RemoteData::Pending => RemoteData::Pending,
            RemoteData::Failure(error) => RemoteData::Failure(f(error)),
            RemoteData::Success(value) => RemoteData::Success(value),
        }
    }

    /// Collapse all four states into one value. Argument order follows the
    /// lifecycle: initial, pending, failure, success.
    pub fn fold<R>(
        &self,
        on_initial: impl FnOnce() -> R,
        on_pending: impl FnOnce() -> R,
        on_failure: impl FnOnce(&E) -> R,
        on_success: impl FnOnce(&A) -> R,
    ) -> R {
        match self {
            RemoteData::Initial => on_initial(),
            RemoteData::Pending => on_pending(),
            RemoteData::Failure(error) => on_failure(error),
            RemoteData::Success(value) => on_success(value),
        }
    }
}

impl<E, A> From<std::result::Result<A, E>> for RemoteData<E, A> {
    fn from(result: std::result::Result<A, E>) -> Self {
        match result {
            Ok(value) => RemoteData::Success(value),
            Err(error) => RemoteData::Failure(error),
        }
    }
}

/// Serialized form of a settled (or still unsettled) activity fetch.
///
/// `{"state": "success", "activity": {…}}` and friends. A document without
/// the lifecycle wrapper is accepted too and treated as a successful fetch
/// of the bare activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ActivityDocument {
    Initial,
    Pending,
    Failure { error: FetchError },
    Success { activity: Box<Activity> },
}

impl ActivityDocument {
    /// Parse a document, falling back to a bare activity record. On failure
    /// the bare-record error is reported, since that is the common shape.
    pub fn parse(json: &str) -> Result<Self> {
        if let Ok(document) = serde_json::from_str::<ActivityDocument>(json) {
            return Ok(document);
        }
        let activity = serde_json::from_str::<Activity>(json)?;
        Ok(ActivityDocument::Success {
            activity: Box::new(activity),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::parse(&json)
    }

    pub fn into_remote(self) -> RemoteData<FetchError, Activity> {
        match self {
            ActivityDocument::Initial => RemoteData::Initial,
            ActivityDocument::Pending => RemoteData::Pending,
            ActivityDocument::Failure { error } => RemoteData::Failure(error),
            ActivityDocument::Success { activity } => RemoteData::Success(*activity),
        }
    }
}
