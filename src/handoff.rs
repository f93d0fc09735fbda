//! Deliver-once channel between a listing and the comparison view.
//!
//! A listing writes the selected records under a session key right before
//! the client navigates to [`COMPARISON_ROUTE`]. The comparison view takes
//! the payload, which removes it, so a payload is shown at most once and a
//! later visit never sees stale data.

use std::{sync::OnceLock, time::Duration};

use async_graphql::{Enum, SimpleObject, Union};
use regex::Regex;
use sled::Tree;
use tracing::{info, warn};

use crate::{comparison::ComparisonTable, record::Record};

/// Route of the comparison view. It takes no parameters.
pub(crate) const COMPARISON_ROUTE: &str = "/compare";
pub(crate) const DEFAULT_SESSION: &str = "default";
const KEY_PREFIX: &str = "comparison/";

static SESSION_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Session names become store keys, so they are limited to a safe alphabet.
pub(crate) fn is_valid_session(session: &str) -> bool {
    SESSION_PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid regex"))
        .is_match(session)
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum HandoffError {
    #[error("no comparison data was handed off")]
    Missing,

    #[error("the handed-off comparison list is empty")]
    Empty,

    #[error("malformed comparison data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid session name: {0:?}")]
    InvalidSession(String),

    #[error("store error: {0}")]
    Store(#[from] sled::Error),
}

#[derive(Clone)]
pub(crate) struct Handoff {
    tree: Tree,
}

impl Handoff {
    pub(crate) fn new(tree: Tree) -> Self {
        Self { tree }
    }

    fn key(session: &str) -> Result<String, HandoffError> {
        if is_valid_session(session) {
            Ok(format!("{KEY_PREFIX}{session}"))
        } else {
            Err(HandoffError::InvalidSession(session.to_string()))
        }
    }

    /// Writes `records` for `session`, replacing any payload not yet taken.
    pub(crate) fn deliver(&self, session: &str, records: &[Record]) -> Result<(), HandoffError> {
        let key = Handoff::key(session)?;
        let payload = serde_json::to_vec(records)?;
        self.tree.insert(key, payload)?;
        info!(session, count = records.len(), "comparison handed off");
        Ok(())
    }

    /// Removes and decodes the payload for `session`.
    ///
    /// The entry is removed even when it cannot be decoded.
    pub(crate) fn take(&self, session: &str) -> Result<Vec<Record>, HandoffError> {
        let key = Handoff::key(session)?;
        let Some(payload) = self.tree.remove(key)? else {
            return Err(HandoffError::Missing);
        };
        let records: Vec<Record> = serde_json::from_slice(&payload)?;
        if records.is_empty() {
            return Err(HandoffError::Empty);
        }
        Ok(records)
    }

    /// Loads the comparison view for `session`.
    ///
    /// A missing payload is polled once more after `retry_delay`, in case
    /// the writer has not landed yet. Every failure settles into an empty
    /// state.
    pub(crate) async fn load(&self, session: &str, retry_delay: Duration) -> ComparisonView {
        let result = match self.take(session) {
            Err(HandoffError::Missing) => {
                tokio::time::sleep(retry_delay).await;
                self.take(session)
            }
            other => other,
        };
        match result {
            Ok(records) => {
                info!(session, count = records.len(), "comparison loaded");
                ComparisonView::Ready(ComparisonTable::new(records))
            }
            Err(e) => {
                warn!(session, "comparison unavailable: {e}");
                ComparisonView::Unavailable(EmptyState::from(&e))
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn put_raw(&self, session: &str, payload: &[u8]) {
        self.tree
            .insert(Handoff::key(session).unwrap(), payload)
            .unwrap();
    }
}

/// What the comparison view shows.
#[derive(Union, Debug)]
pub(crate) enum ComparisonView {
    Ready(ComparisonTable),
    Unavailable(EmptyState),
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum EmptyReason {
    Missing,
    Empty,
    Malformed,
    Unavailable,
}

/// Explanation shown instead of a comparison table.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct EmptyState {
    pub(crate) reason: EmptyReason,
    pub(crate) title: String,
    pub(crate) message: String,
}

impl From<&HandoffError> for EmptyState {
    fn from(error: &HandoffError) -> Self {
        let (reason, title, message) = match error {
            HandoffError::Missing => (
                EmptyReason::Missing,
                "No records selected for comparison",
                "Select at least 2 records in a listing and choose Compare.",
            ),
            HandoffError::Empty => (
                EmptyReason::Empty,
                "No records to compare",
                "The comparison list was empty. Select at least 2 records and try again.",
            ),
            HandoffError::Malformed(_) => (
                EmptyReason::Malformed,
                "Comparison data could not be read",
                "Return to the listing and start a new comparison.",
            ),
            HandoffError::InvalidSession(_) | HandoffError::Store(_) => (
                EmptyReason::Unavailable,
                "Comparison unavailable",
                "The comparison could not be loaded. Return to the listing and try again.",
            ),
        };
        Self {
            reason,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}
