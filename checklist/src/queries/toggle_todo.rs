#[allow(clippy::all)]
pub struct ToggleTodo;
#[allow(clippy::all)]
pub mod toggle_todo {
    #![allow(dead_code)]
    pub const OPERATION_NAME: &str = "toggleTodo";
    pub const QUERY: &str = "mutation toggleTodo($id: uuid!, $done: Boolean!) {\n  update_todos(where: {id: {_eq: $id}}, _set: {done: $done}) {\n    returning {\n      done\n      id\n      text\n    }\n  }\n}";
    use checklist_client::codegen::{FieldSelector, QueryInfo};
    use serde::{Deserialize, Serialize};
    #[allow(dead_code)]
    type Boolean = bool;
    #[allow(dead_code, non_camel_case_types)]
    type uuid = String;
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    #[doc = "columns and relationships of \"todos\""]
    pub struct ToggleTodoUpdateTodosReturning {
        pub done: Boolean,
        pub id: uuid,
        pub text: String
    }
    impl ToggleTodoUpdateTodosReturning {
        #[allow(unused_variables)]
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![
                FieldSelector::Scalar("done", String::new()),
                FieldSelector::Scalar("id", String::new()),
                FieldSelector::Scalar("text", String::new())
            ]
        }
    }
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    #[doc = "response of any mutation on the table \"todos\""]
    pub struct ToggleTodoUpdateTodos {
        #[doc = "data from the rows affected by the mutation"]
        pub returning: Vec<ToggleTodoUpdateTodosReturning>
    }
    impl ToggleTodoUpdateTodos {
        #[allow(unused_variables)]
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![FieldSelector::Object(
                "returning",
                String::new(),
                "todos",
                ToggleTodoUpdateTodosReturning::selection(variables)
            )]
        }
    }
    #[derive(Clone, Debug, PartialEq, Serialize)]
    pub struct Variables {
        pub id: uuid,
        pub done: Boolean
    }
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    pub struct ResponseData {
        #[doc = "update data of the table: \"todos\""]
        pub update_todos: Option<ToggleTodoUpdateTodos>
    }
    impl QueryInfo<Variables> for ResponseData {
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![FieldSelector::Object(
                "update_todos",
                format!(
                    "{{_set:{{done:{:?}}},where:{{id:{{_eq:{:?}}}}}}}",
                    variables.done, variables.id
                ),
                "todos_mutation_response",
                ToggleTodoUpdateTodos::selection(variables)
            )]
        }
    }
}
#[allow(clippy::all)]
impl ::checklist_client::GraphQLQuery for ToggleTodo {
    type Variables = toggle_todo::Variables;
    type ResponseData = toggle_todo::ResponseData;
    fn build_query(
        variables: Self::Variables
    ) -> (
        ::checklist_client::QueryBody<Self::Variables>,
        ::checklist_client::exchange::OperationMeta
    ) {
        let meta = ::checklist_client::exchange::OperationMeta {
            query_key: 3954102385u32,
            operation_type: ::checklist_client::exchange::OperationType::Mutation
        };
        let body = ::checklist_client::QueryBody {
            variables,
            query: toggle_todo::QUERY,
            operation_name: toggle_todo::OPERATION_NAME
        };
        (body, meta)
    }
}
