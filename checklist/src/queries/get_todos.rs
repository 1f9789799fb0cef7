#[allow(clippy::all)]
pub struct GetTodos;
#[allow(clippy::all)]
pub mod get_todos {
    #![allow(dead_code)]
    pub const OPERATION_NAME: &str = "getTodos";
    pub const QUERY: &str = "query getTodos {\n  todos {\n    id\n    text\n    done\n  }\n}";
    use checklist_client::codegen::{FieldSelector, QueryInfo};
    use serde::{Deserialize, Serialize};
    #[allow(dead_code)]
    type Boolean = bool;
    #[allow(dead_code, non_camel_case_types)]
    type uuid = String;
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    #[doc = "columns and relationships of \"todos\""]
    pub struct GetTodosTodos {
        pub id: uuid,
        pub text: String,
        pub done: Boolean
    }
    impl GetTodosTodos {
        #[allow(unused_variables)]
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![
                FieldSelector::Scalar("id", String::new()),
                FieldSelector::Scalar("text", String::new()),
                FieldSelector::Scalar("done", String::new())
            ]
        }
    }
    #[derive(Clone, Debug, PartialEq, Serialize)]
    pub struct Variables;
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    pub struct ResponseData {
        #[doc = "fetch data from the table: \"todos\""]
        pub todos: Vec<GetTodosTodos>
    }
    impl QueryInfo<Variables> for ResponseData {
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![FieldSelector::Object(
                "todos",
                String::new(),
                "todos",
                GetTodosTodos::selection(variables)
            )]
        }
    }
}
#[allow(clippy::all)]
impl ::checklist_client::GraphQLQuery for GetTodos {
    type Variables = get_todos::Variables;
    type ResponseData = get_todos::ResponseData;
    fn build_query(
        variables: Self::Variables
    ) -> (
        ::checklist_client::QueryBody<Self::Variables>,
        ::checklist_client::exchange::OperationMeta
    ) {
        let meta = ::checklist_client::exchange::OperationMeta {
            query_key: 2406470597u32,
            operation_type: ::checklist_client::exchange::OperationType::Query
        };
        let body = ::checklist_client::QueryBody {
            variables,
            query: get_todos::QUERY,
            operation_name: get_todos::OPERATION_NAME
        };
        (body, meta)
    }
}
