use std::collections::BTreeSet;

use async_graphql::{InputObject, Object};

use crate::{
    catalog::FilterField,
    filter::{FilterModel, FilterValue, Logic, Operator},
};

/// A simple key/value selection. An empty `values` list leaves the field
/// inactive.
#[derive(InputObject, Debug)]
pub(crate) struct SimpleFilterInput {
    /// Field name, e.g. `phase` or `drugs`.
    field: String,
    values: Vec<String>,
}

/// One advanced-filter condition.
#[derive(InputObject, Debug)]
pub(crate) struct FilterConditionInput {
    field: Option<FilterField>,
    #[graphql(default)]
    operator: Operator,
    #[graphql(default)]
    values: Vec<String>,
    /// Selects the field's whole value domain instead of `values`.
    #[graphql(default)]
    select_all: bool,
    /// How this condition combines with the ones before it. Ignored on the
    /// first condition.
    #[graphql(default)]
    logic: Logic,
}

#[derive(InputObject, Debug, Default)]
pub(crate) struct RecordFilter {
    #[graphql(default)]
    simple: Vec<SimpleFilterInput>,
    #[graphql(default)]
    conditions: Vec<FilterConditionInput>,
    /// Case-insensitive text searched in titles, sponsors and treatments.
    search_text: Option<String>,
    /// Record or trial identifiers separated by spaces, commas or
    /// semicolons.
    identifier_search: Option<String>,
}

/// One value selects like a dropdown, several like a multi-select.
pub(super) fn simple_value(values: &[String]) -> FilterValue {
    match values {
        [single] => FilterValue::from(single.clone()),
        values => FilterValue::from(values.to_vec()),
    }
}

impl RecordFilter {
    /// Replays this filter onto `model` through its regular operations.
    pub(crate) fn apply(&self, model: &mut FilterModel) {
        for simple in &self.simple {
            model.set_simple_filter(&simple.field, simple_value(&simple.values));
        }
        for input in &self.conditions {
            let index = model.add_condition();
            model.set_condition_field(index, input.field);
            model.set_condition_operator(index, input.operator);
            model.set_condition_logic(index, input.logic);
            if input.select_all {
                model.select_all_values_for_condition(index);
            } else if input.field.is_some() {
                let values: BTreeSet<&str> = input.values.iter().map(String::as_str).collect();
                for value in values {
                    model.toggle_condition_value(index, value);
                }
            }
        }
        if let Some(text) = &self.search_text {
            model.set_search_text(text);
        }
        if let Some(text) = &self.identifier_search {
            model.set_identifier_search(text);
        }
    }
}

#[derive(Default)]
pub(super) struct ActiveFilterQuery;

#[Object]
impl ActiveFilterQuery {
    /// The active-filter badges for `filter`, in activation order.
    async fn active_filters(&self, filter: RecordFilter) -> Vec<String> {
        let mut model = FilterModel::new();
        filter.apply(&mut model);
        model.state().active_filters.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TestSchema;

    #[test]
    fn apply_builds_state() {
        let filter = RecordFilter {
            simple: vec![
                SimpleFilterInput {
                    field: "phase".to_string(),
                    values: vec!["Phase 3".to_string()],
                },
                SimpleFilterInput {
                    field: "drugs".to_string(),
                    values: vec!["Sotorasib".to_string(), "Olaparib".to_string()],
                },
            ],
            conditions: vec![FilterConditionInput {
                field: Some(FilterField::Status),
                operator: Operator::Exclude,
                values: vec!["Completed".to_string(), "Completed".to_string()],
                select_all: false,
                logic: Logic::Or,
            }],
            search_text: Some("nsclc".to_string()),
            identifier_search: None,
        };
        let mut model = FilterModel::new();
        filter.apply(&mut model);

        let state = model.state();
        assert_eq!(state.criteria["phase"], FilterValue::from("Phase 3"));
        assert_eq!(
            state.criteria["drugs"],
            FilterValue::from(["Olaparib", "Sotorasib"])
        );
        assert_eq!(state.conditions.len(), 1);
        assert_eq!(state.conditions[0].operator, Operator::Exclude);
        assert_eq!(state.conditions[0].values.len(), 1);
        assert_eq!(state.search_text, "nsclc");
    }

    #[test]
    fn values_without_field_are_dropped() {
        let filter = RecordFilter {
            conditions: vec![FilterConditionInput {
                field: None,
                operator: Operator::Include,
                values: vec!["Phase 3".to_string()],
                select_all: false,
                logic: Logic::And,
            }],
            ..Default::default()
        };
        let mut model = FilterModel::new();
        filter.apply(&mut model);
        assert!(model.state().conditions[0].values.is_empty());
    }

    #[test]
    fn select_all_takes_whole_domain() {
        let filter = RecordFilter {
            conditions: vec![FilterConditionInput {
                field: Some(FilterField::Phase),
                operator: Operator::Include,
                values: Vec::new(),
                select_all: true,
                logic: Logic::And,
            }],
            ..Default::default()
        };
        let mut model = FilterModel::new();
        filter.apply(&mut model);
        assert_eq!(
            model.state().conditions[0].values.len(),
            FilterField::Phase.domain().len()
        );
    }

    #[tokio::test]
    async fn active_filter_badges() {
        let schema = TestSchema::new();
        let query = r#"
        {
            activeFilters(filter: {simple: [
                {field: "status", values: ["Recruiting"]},
                {field: "phase", values: []},
                {field: "company", values: ["Merck", "Amgen"]}
            ]})
        }"#;
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{activeFilters: [\"status\", \"company\"]}"
        );
    }

    #[tokio::test]
    async fn unknown_simple_field_matches_nothing() {
        let schema = TestSchema::new();
        let query = r#"
        {
            trials(filter: {simple: [{field: "sponsorCountry", values: ["US"]}]}) {
                totalCount
            }
        }"#;
        let data = schema.execute(query).await.data.into_json().unwrap();
        assert_eq!(data["trials"]["totalCount"], 0);
    }
}
