use async_graphql::{
    connection::{query, Connection, EmptyFields},
    Context, Object, Result,
};

use crate::{
    api::{self, RecordFilter, TotalCountField},
    catalog,
    record::Treatment,
};

#[derive(Default)]
pub(super) struct TreatmentQuery;

#[Object]
impl TreatmentQuery {
    /// Treatments matching `filter`.
    async fn treatments(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        filter: Option<RecordFilter>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<String, Treatment, TotalCountField, EmptyFields>> {
        let nodes =
            api::filter_listing(ctx, catalog::treatments(), session.as_deref(), filter.as_ref())?;
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
