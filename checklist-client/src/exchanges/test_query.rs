//! A tiny operation used by the tests in this crate.

use crate::{
    codegen::{FieldSelector, QueryInfo},
    exchange::{OperationMeta, OperationType},
    GraphQLQuery, QueryBody
};

pub const QUERY: &str = "query EchoQuery($id: ID!) { echo(id: $id) { id } }";

#[derive(Clone, Debug, Serialize)]
pub struct Variables {
    pub id: String
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Echo {
    pub id: String
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResponseData {
    pub echo: Option<Echo>
}

impl QueryInfo<Variables> for ResponseData {
    fn selection(variables: &Variables) -> Vec<FieldSelector> {
        vec![FieldSelector::Object(
            "echo",
            format!("{{\"id\":{:?}}}", variables.id),
            "Echo",
            vec![FieldSelector::Scalar("id", String::new())]
        )]
    }
}

pub struct EchoQuery;

impl GraphQLQuery for EchoQuery {
    type Variables = Variables;
    type ResponseData = ResponseData;

    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta) {
        let meta = OperationMeta {
            query_key: 1297,
            operation_type: OperationType::Query
        };
        let body = QueryBody {
            variables,
            query: QUERY,
            operation_name: "EchoQuery"
        };
        (body, meta)
    }
}
