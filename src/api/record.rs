use async_graphql::Object;

use crate::{catalog, record::Record};

#[derive(Default)]
pub(super) struct RecordQuery;

#[Object]
impl RecordQuery {
    /// Any record by identifier, whichever catalog holds it.
    async fn record(&self, id: String) -> Option<Record> {
        catalog::find_record(&id)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::TestSchema;

    #[tokio::test]
    async fn record_resolves_each_kind() {
        let schema = TestSchema::new();
        let query = r#"
        {
            trial: record(id: "NCT03600883") {
                __typename
                ... on Trial { enrollment }
            }
            abstract: record(id: "ESMO-2023-LBA6") {
                __typename
                ... on Abstract { conference }
            }
            treatment: record(id: "TX-OLAPARIB") {
                __typename
                ... on Treatment { target }
            }
            missing: record(id: "nope") {
                __typename
            }
        }"#;
        let res = schema.execute(query).await;
        assert_eq!(
            res.data.to_string(),
            "{trial: {__typename: \"Trial\", enrollment: 126}, abstract: {__typename: \"Abstract\", conference: \"ESMO\"}, treatment: {__typename: \"Treatment\", target: \"PARP\"}, missing: null}"
        );
    }
}
