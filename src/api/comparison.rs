use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    api::RetryDelay,
    catalog,
    database::Database,
    handoff::{ComparisonView, DEFAULT_SESSION},
    listing::ListingView,
    selection::{CompareError, CompareReceipt},
};

impl ErrorExtensions for CompareError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            CompareError::TooFewSelected { selected, required } => {
                e.set("code", "TOO_FEW_SELECTED");
                e.set("selected", *selected);
                e.set("required", *required);
            }
            CompareError::UnknownRecord { id } => {
                e.set("code", "UNKNOWN_RECORD");
                e.set("id", id.as_str());
            }
            CompareError::Handoff(_) => e.set("code", "HANDOFF_FAILED"),
        })
    }
}

#[derive(Default)]
pub(super) struct ComparisonMutation;

#[Object]
impl ComparisonMutation {
    /// Hands the records with `ids` to the comparison view, in the given
    /// order. Repeated ids count once. Navigate to the returned route
    /// afterwards.
    #[allow(clippy::unused_async)]
    async fn request_compare(
        &self,
        ctx: &Context<'_>,
        ids: Vec<String>,
        session: Option<String>,
    ) -> Result<CompareReceipt> {
        let db = ctx.data::<Database>()?;
        let mut view = ListingView::new(catalog::records());
        for id in &ids {
            view.select(id);
        }
        let session = session.as_deref().unwrap_or(DEFAULT_SESSION);
        view.request_compare(&db.handoff(), session).map_err(|e| e.extend())
    }

    /// Loads the comparison view, consuming the handed-off records.
    async fn load_comparison(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
    ) -> Result<ComparisonView> {
        let db = ctx.data::<Database>()?;
        let RetryDelay(retry_delay) = *ctx.data::<RetryDelay>()?;
        let session = session.as_deref().unwrap_or(DEFAULT_SESSION);
        Ok(db.handoff().load(session, retry_delay).await)
    }
}
