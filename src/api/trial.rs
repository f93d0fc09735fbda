use async_graphql::{
    connection::{query, Connection, EmptyFields},
    Context, Object, Result,
};

use crate::{
    api::{self, RecordFilter, TotalCountField},
    catalog,
    record::Trial,
};

#[derive(Default)]
pub(super) struct TrialQuery;

#[Object]
impl TrialQuery {
    /// Trials matching `filter`, in catalog order. The saved filters of
    /// `session`, if given, apply first.
    async fn trials(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        filter: Option<RecordFilter>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<String, Trial, TotalCountField, EmptyFields>> {
        let nodes =
            api::filter_listing(ctx, catalog::trials(), session.as_deref(), filter.as_ref())?;
        query(
            after,
            before,
            first,
            last,
            |after, before, first, last| async move {
                api::load_connection(nodes, after, before, first, last)
            },
        )
        .await
    }

    /// The trial detail view.
    async fn trial(&self, id: String) -> Option<Trial> {
        catalog::trials().iter().find(|t| t.id == id).cloned()
    }
}
