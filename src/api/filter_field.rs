use async_graphql::{Object, SimpleObject};

use crate::catalog::FilterField;

/// A filterable field and the values a filter panel may offer for it.
#[derive(SimpleObject)]
struct FilterFieldInfo {
    field: FilterField,
    /// The key used in simple filters.
    name: String,
    label: String,
    multi_valued: bool,
    values: Vec<String>,
}

impl From<FilterField> for FilterFieldInfo {
    fn from(field: FilterField) -> Self {
        Self {
            field,
            name: field.name().to_string(),
            label: field.label().to_string(),
            multi_valued: field.is_multi_valued(),
            values: field.domain().iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Default)]
pub(super) struct FilterFieldQuery;

#[Object]
impl FilterFieldQuery {
    /// Every filterable field with its value domain.
    async fn filter_fields(&self) -> Vec<FilterFieldInfo> {
        FilterField::ALL.into_iter().map(FilterFieldInfo::from).collect()
    }

    async fn filter_field(&self, field: FilterField) -> FilterFieldInfo {
        field.into()
    }
}

#[cfg(test)]
mod tests {
    use crate::api::TestSchema;

    #[tokio::test]
    async fn phase_domain() {
        let schema = TestSchema::new();
        let query = r"
        {
            filterField(field: PHASE) {
                name
                multiValued
                values
            }
        }";
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{filterField: {name: \"phase\", multiValued: false, values: [\"Phase 1\", \"Phase 1/2\", \"Phase 2\", \"Phase 2/3\", \"Phase 3\", \"Phase 4\"]}}"
        );
    }

    #[tokio::test]
    async fn status_domain() {
        let schema = TestSchema::new();
        let query = r"
        {
            filterField(field: STATUS) {
                values
            }
        }";
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{filterField: {values: [\"Active\", \"Recruiting\", \"Completed\", \"Terminated\", \"Suspended\", \"Withdrawn\"]}}"
        );
    }

    #[tokio::test]
    async fn all_fields_listed() {
        let schema = TestSchema::new();
        let query = r"
        {
            filterFields {
                name
            }
        }";
        let data = schema.execute(query).await.data.into_json().unwrap();
        let fields = data["filterFields"].as_array().unwrap();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0]["name"], "indication");
        assert_eq!(fields[5]["name"], "drugs");
    }
}
