use async_graphql::{Context, ErrorExtensions, Object, Result, SimpleObject};

use super::filter_input::simple_value;
use crate::{
    catalog::FilterField,
    database::Database,
    filter::{FilterModel, FilterValue, Logic, Operator},
    handoff::DEFAULT_SESSION,
    session::{check_condition, SessionError},
};

impl ErrorExtensions for SessionError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            SessionError::NoCondition { index, count } => {
                e.set("code", "NO_CONDITION");
                e.set("index", *index);
                e.set("count", *count);
            }
            SessionError::InvalidSession(_) => e.set("code", "INVALID_SESSION"),
            SessionError::Malformed(_) | SessionError::Store(_) => {
                e.set("code", "SESSION_UNAVAILABLE");
            }
        })
    }
}

#[derive(SimpleObject)]
struct SimpleFilter {
    field: String,
    values: Vec<String>,
}

#[derive(SimpleObject)]
struct Condition {
    field: Option<FilterField>,
    operator: Operator,
    values: Vec<String>,
    logic: Logic,
}

/// The saved filters of one session.
#[derive(SimpleObject)]
pub(super) struct SessionFilters {
    /// Number of changes since the session started.
    revision: u64,
    simple: Vec<SimpleFilter>,
    conditions: Vec<Condition>,
    search_text: String,
    identifier_search: String,
    active_filters: Vec<String>,
}

impl From<&FilterModel> for SessionFilters {
    fn from(model: &FilterModel) -> Self {
        let state = model.state();
        let simple = state
            .criteria
            .iter()
            .map(|(field, value)| SimpleFilter {
                field: field.clone(),
                values: match value {
                    FilterValue::One(value) => vec![value.clone()],
                    FilterValue::Many(values) => values.iter().cloned().collect(),
                },
            })
            .collect();
        let conditions = state
            .conditions
            .iter()
            .map(|condition| Condition {
                field: condition.field,
                operator: condition.operator,
                values: condition.values.iter().cloned().collect(),
                logic: condition.logic,
            })
            .collect();
        Self {
            revision: model.revision(),
            simple,
            conditions,
            search_text: state.search_text.clone(),
            identifier_search: state.identifier_search.clone(),
            active_filters: state.active_filters.clone(),
        }
    }
}

fn edit<F>(ctx: &Context<'_>, session: Option<&str>, edit: F) -> Result<SessionFilters>
where
    F: FnMut(&mut FilterModel) -> Result<(), SessionError>,
{
    let db = ctx.data::<Database>()?;
    let session = session.unwrap_or(DEFAULT_SESSION);
    db.filter_sessions()
        .update(session, edit)
        .map(|model| SessionFilters::from(&model))
        .map_err(|e| e.extend())
}

/// Like [`edit`], for operations on the condition at `index`.
fn edit_condition<F>(
    ctx: &Context<'_>,
    session: Option<&str>,
    index: usize,
    mut edit_at: F,
) -> Result<SessionFilters>
where
    F: FnMut(&mut FilterModel, usize),
{
    edit(ctx, session, |model| {
        check_condition(model, index)?;
        edit_at(model, index);
        Ok(())
    })
}

#[derive(Default)]
pub(super) struct SessionFilterQuery;

#[Object]
impl SessionFilterQuery {
    /// The filters saved for `session`. Pass the same session to a listing
    /// query to apply them.
    async fn session_filters(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
    ) -> Result<SessionFilters> {
        let db = ctx.data::<Database>()?;
        let session = session.as_deref().unwrap_or(DEFAULT_SESSION);
        db.filter_sessions()
            .load(session)
            .map(|model| SessionFilters::from(&model))
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub(super) struct SessionFilterMutation;

#[Object]
#[allow(clippy::unused_async)]
impl SessionFilterMutation {
    /// Sets a simple filter. An empty `values` list clears it.
    async fn set_simple_filter(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        field: String,
        values: Vec<String>,
    ) -> Result<SessionFilters> {
        let value = simple_value(&values);
        edit(ctx, session.as_deref(), |model| {
            model.set_simple_filter(&field, value.clone());
            Ok(())
        })
    }

    async fn set_search_text(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        text: String,
    ) -> Result<SessionFilters> {
        edit(ctx, session.as_deref(), |model| {
            model.set_search_text(&text);
            Ok(())
        })
    }

    async fn set_identifier_search(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        text: String,
    ) -> Result<SessionFilters> {
        edit(ctx, session.as_deref(), |model| {
            model.set_identifier_search(&text);
            Ok(())
        })
    }

    /// Appends an empty `INCLUDE` / `AND` condition.
    async fn add_condition(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
    ) -> Result<SessionFilters> {
        edit(ctx, session.as_deref(), |model| {
            model.add_condition();
            Ok(())
        })
    }

    async fn remove_condition(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        index: usize,
    ) -> Result<SessionFilters> {
        edit_condition(ctx, session.as_deref(), index, FilterModel::remove_condition)
    }

    /// Chooses or clears the field of a condition. Its values reset.
    async fn set_condition_field(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        index: usize,
        field: Option<FilterField>,
    ) -> Result<SessionFilters> {
        edit_condition(ctx, session.as_deref(), index, |model, index| {
            model.set_condition_field(index, field);
        })
    }

    async fn set_condition_operator(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        index: usize,
        operator: Operator,
    ) -> Result<SessionFilters> {
        edit_condition(ctx, session.as_deref(), index, |model, index| {
            model.set_condition_operator(index, operator);
        })
    }

    async fn set_condition_logic(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        index: usize,
        logic: Logic,
    ) -> Result<SessionFilters> {
        edit_condition(ctx, session.as_deref(), index, |model, index| {
            model.set_condition_logic(index, logic);
        })
    }

    /// Adds or removes one value. Ignored until the condition has a field.
    async fn toggle_condition_value(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        index: usize,
        value: String,
    ) -> Result<SessionFilters> {
        edit_condition(ctx, session.as_deref(), index, |model, index| {
            model.toggle_condition_value(index, &value);
        })
    }

    async fn select_all_values_for_condition(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        index: usize,
    ) -> Result<SessionFilters> {
        edit_condition(
            ctx,
            session.as_deref(),
            index,
            FilterModel::select_all_values_for_condition,
        )
    }

    /// Empties the values of a condition but keeps it.
    async fn clear_condition(
        &self,
        ctx: &Context<'_>,
        session: Option<String>,
        index: usize,
    ) -> Result<SessionFilters> {
        edit_condition(ctx, session.as_deref(), index, FilterModel::clear_condition)
    }

    /// Resets every filter of the session.
    async fn clear_all(&self, ctx: &Context<'_>, session: Option<String>) -> Result<SessionFilters> {
        edit(ctx, session.as_deref(), |model| {
            model.clear_all();
            Ok(())
        })
    }
}
