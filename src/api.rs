mod comparison;
mod filter_field;
mod filter_input;
mod record;
mod session_filter;
mod treatment;
mod trial;
mod trial_abstract;

use std::{fmt::Display, time::Duration};

use async_graphql::{
    connection::{Connection, Edge, EmptyFields},
    Context, EmptySubscription, ErrorExtensions, MergedObject, OutputType, Result, SimpleObject,
};
use base64::{engine::general_purpose, Engine as _};

pub(crate) use self::filter_input::RecordFilter;
use crate::{
    database::Database,
    filter::FilterModel,
    listing::ListingView,
    record::{Attributes, Record},
};

/// The default page size for connections when neither `first` nor `last` is provided.
const DEFAULT_PAGE_SIZE: usize = 100;

/// A set of queries defined in the schema.
///
/// This is exposed only for [`Schema`], and not used directly.
#[derive(Default, MergedObject)]
pub(crate) struct Query(
    trial::TrialQuery,
    trial_abstract::AbstractQuery,
    treatment::TreatmentQuery,
    record::RecordQuery,
    filter_field::FilterFieldQuery,
    filter_input::ActiveFilterQuery,
    session_filter::SessionFilterQuery,
);

/// A set of mutations defined in the schema.
#[derive(Default, MergedObject)]
pub(crate) struct Mutation(
    comparison::ComparisonMutation,
    session_filter::SessionFilterMutation,
);

pub(crate) type Schema = async_graphql::Schema<Query, Mutation, EmptySubscription>;

/// Delay before the comparison view retries a missing hand-off.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryDelay(pub(crate) Duration);

#[derive(SimpleObject)]
pub(crate) struct TotalCountField {
    pub(crate) total_count: usize,
}

pub(crate) fn schema(database: Database, retry_delay: Duration) -> Schema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .data(database)
        .data(RetryDelay(retry_delay))
        .finish()
}

/// Lists `catalog` through a listing view opened with the saved filters of
/// `session`, then narrowed by `filter`.
fn filter_listing<R>(
    ctx: &Context<'_>,
    catalog: &'static [R],
    session: Option<&str>,
    filter: Option<&RecordFilter>,
) -> Result<Vec<R>>
where
    R: Attributes + Clone + Into<Record> + 'static,
{
    let filters = match session {
        Some(session) => ctx
            .data::<Database>()?
            .filter_sessions()
            .load(session)
            .map_err(|e| e.extend())?,
        None => FilterModel::new(),
    };
    let mut view = ListingView::with_filters(catalog, filters);
    if let Some(filter) = filter {
        filter.apply(view.filters_mut());
        view.refresh();
    }
    let mut nodes = Vec::with_capacity(view.visible_count());
    nodes.extend(view.visible().cloned());
    Ok(nodes)
}

fn encode_cursor<T: Display>(node: &T) -> String {
    general_purpose::STANDARD.encode(format!("{node}"))
}

fn cursor_position<N: Display>(nodes: &[N], cursor: &str) -> Result<usize> {
    let key = String::from_utf8(general_purpose::STANDARD.decode(cursor)?)?;
    nodes
        .iter()
        .position(|node| node.to_string() == key)
        .ok_or_else(|| format!("unknown cursor: {cursor}").into())
}

/// Cuts one page out of an already filtered listing.
fn load_connection<N>(
    nodes: Vec<N>,
    after: Option<String>,
    before: Option<String>,
    first: Option<usize>,
    last: Option<usize>,
) -> Result<Connection<String, N, TotalCountField, EmptyFields>>
where
    N: OutputType + Display,
{
    if after.is_some() && before.is_some() {
        return Err("cannot use both `after` and `before`".into());
    }
    if first.is_some() && last.is_some() {
        return Err("first and last cannot be used together".into());
    }

    let total_count = nodes.len();
    let start = match after {
        Some(after) => cursor_position(&nodes, &after)? + 1,
        None => 0,
    };
    let end = match before {
        Some(before) => cursor_position(&nodes, &before)?,
        None => total_count,
    };
    let (start, end) = if let Some(last) = last {
        (end.saturating_sub(last).max(start), end)
    } else {
        let first = first.unwrap_or(DEFAULT_PAGE_SIZE);
        (start, end.min(start + first))
    };

    let mut connection = Connection::with_additional_fields(
        start > 0,
        end < total_count,
        TotalCountField { total_count },
    );
    for node in nodes.into_iter().skip(start).take(end - start) {
        connection.edges.push(Edge::new(encode_cursor(&node), node));
    }
    Ok(connection)
}

#[cfg(test)]
struct TestSchema {
    _dir: tempfile::TempDir, // to prevent the data directory from being deleted while the test is running
    db: Database,
    schema: Schema,
}

#[cfg(test)]
impl TestSchema {
    fn new() -> Self {
        let db_dir = tempfile::tempdir().unwrap();
        let db = Database::connect(db_dir.path()).unwrap();
        let schema = schema(db.clone(), Duration::from_millis(10));
        Self {
            _dir: db_dir,
            db,
            schema,
        }
    }

    async fn execute(&self, query: &str) -> async_graphql::Response {
        let request: async_graphql::Request = query.into();
        self.schema.execute(request).await
    }
}
