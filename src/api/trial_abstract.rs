use async_graphql::{
    connection::{query, Connection, EmptyFields},
    Context, Object, Result,
};

use crate::{
    api::{self, RecordFilter, TotalCountField},
    catalog,
    record::Abstract,
};

#[derive(Default)]
pub(super) struct AbstractQuery;

#[Object]
impl AbstractQuery {
    /// Conference abstracts matching `filter`.
    async fn abstracts(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        filter: Option<RecordFilter>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<String, Abstract, TotalCountField, EmptyFields>> {
        let nodes =
            api::filter_listing(ctx, catalog::abstracts(), session.as_deref(), filter.as_ref())?;
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
}
