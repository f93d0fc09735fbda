use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

use crate::{
    handoff::{Handoff, HandoffError, COMPARISON_ROUTE},
    record::{Attributes, Record},
};

/// The smallest selection that can be compared.
pub(crate) const MIN_COMPARE: usize = 2;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CompareError {
    #[error("Select at least {required} records to compare ({selected} selected).")]
    TooFewSelected { selected: usize, required: usize },

    #[error("Record {id} is not available in this listing.")]
    UnknownRecord { id: String },

    #[error("Could not hand off the comparison: {0}")]
    Handoff(#[from] HandoffError),
}

/// Where the client should go after a successful compare request.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub(crate) struct CompareReceipt {
    pub(crate) session: String,
    pub(crate) route: String,
    pub(crate) ids: Vec<String>,
}

/// Record identifiers checked for comparison, in the order they were
/// checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Checks or unchecks `id`. Returns whether it is now selected.
    pub(crate) fn toggle_select(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Checks `id` unless it is already checked.
    pub(crate) fn select(&mut self, id: &str) {
        if !self.ids.iter().any(|selected| selected == id) {
            self.toggle_select(id);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    /// Resolves the selection against `catalog` and hands the records to the
    /// comparison view through `handoff`.
    ///
    /// Nothing is written unless every check passes.
    pub(crate) fn request_compare<R>(
        &self,
        catalog: &[R],
        handoff: &Handoff,
        session: &str,
    ) -> Result<CompareReceipt, CompareError>
    where
        R: Attributes + Clone + Into<Record>,
    {
        if self.len() < MIN_COMPARE {
            return Err(CompareError::TooFewSelected {
                selected: self.len(),
                required: MIN_COMPARE,
            });
        }
        let records = self
            .ids
            .iter()
            .map(|id| {
                catalog
                    .iter()
                    .find(|record| record.id() == id)
                    .map(|record| record.clone().into())
                    .ok_or_else(|| CompareError::UnknownRecord { id: id.clone() })
            })
            .collect::<Result<Vec<Record>, _>>()?;
        handoff.deliver(session, &records)?;
        Ok(CompareReceipt {
            session: session.to_string(),
            route: COMPARISON_ROUTE.to_string(),
            ids: self.ids.clone(),
        })
    }
}
