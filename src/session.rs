//! Filter state of each client session, kept between requests.
//!
//! Every edit reads the saved state, replays one [`FilterModel`] operation
//! on it, and writes the result back only if nobody else wrote in between.

use serde::{Deserialize, Serialize};
use sled::Tree;
use tracing::debug;

use crate::{
    filter::{FilterModel, FilterState},
    handoff::is_valid_session,
};

const KEY_PREFIX: &str = "filters/";

#[derive(Debug, thiserror::Error)]
pub(crate) enum SessionError {
    #[error("No condition at index {index} ({count} conditions).")]
    NoCondition { index: usize, count: usize },

    #[error("invalid session name: {0:?}")]
    InvalidSession(String),

    #[error("malformed filter state: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(#[from] sled::Error),
}

#[derive(Serialize, Deserialize, Default)]
struct Saved {
    revision: u64,
    state: FilterState,
}

#[derive(Clone)]
pub(crate) struct FilterSessions {
    tree: Tree,
}

impl FilterSessions {
    pub(crate) fn new(tree: Tree) -> Self {
        Self { tree }
    }

    fn key(session: &str) -> Result<String, SessionError> {
        if is_valid_session(session) {
            Ok(format!("{KEY_PREFIX}{session}"))
        } else {
            Err(SessionError::InvalidSession(session.to_string()))
        }
    }

    fn decode(payload: Option<&[u8]>) -> Result<FilterModel, SessionError> {
        let saved = match payload {
            Some(payload) => serde_json::from_slice(payload)?,
            None => Saved::default(),
        };
        Ok(FilterModel::restore(saved.state, saved.revision))
    }

    /// The saved filters of `session`. A session never edited has none.
    pub(crate) fn load(&self, session: &str) -> Result<FilterModel, SessionError> {
        let key = FilterSessions::key(session)?;
        let payload = self.tree.get(key)?;
        FilterSessions::decode(payload.as_deref())
    }

    /// Applies `edit` to the saved filters of `session` and returns the
    /// updated model. A concurrent writer makes the edit start over on the
    /// newer state.
    pub(crate) fn update<F>(&self, session: &str, mut edit: F) -> Result<FilterModel, SessionError>
    where
        F: FnMut(&mut FilterModel) -> Result<(), SessionError>,
    {
        let key = FilterSessions::key(session)?;
        loop {
            let current = self.tree.get(&key)?;
            let mut model = FilterSessions::decode(current.as_deref())?;
            edit(&mut model)?;
            let next = serde_json::to_vec(&Saved {
                revision: model.revision(),
                state: model.state().clone(),
            })?;
            if self
                .tree
                .compare_and_swap(&key, current, Some(next))?
                .is_ok()
            {
                debug!(session, revision = model.revision(), "filters saved");
                return Ok(model);
            }
        }
    }
}

/// Fails unless `index` names an existing condition of `model`.
pub(crate) fn check_condition(model: &FilterModel, index: usize) -> Result<(), SessionError> {
    let count = model.state().conditions.len();
    if index < count {
        Ok(())
    } else {
        Err(SessionError::NoCondition { index, count })
    }
}
