#[allow(clippy::all)]
pub struct DeleteTodo;
#[allow(clippy::all)]
pub mod delete_todo {
    #![allow(dead_code)]
    pub const OPERATION_NAME: &str = "deleteTodo";
    pub const QUERY: &str = "mutation deleteTodo($id: uuid!) {\n  delete_todos(where: {id: {_eq: $id}}) {\n    returning {\n      done\n      id\n      text\n    }\n  }\n}";
    use checklist_client::codegen::{FieldSelector, QueryInfo};
    use serde::{Deserialize, Serialize};
    #[allow(dead_code)]
    type Boolean = bool;
    #[allow(dead_code, non_camel_case_types)]
    type uuid = String;
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    #[doc = "columns and relationships of \"todos\""]
    pub struct DeleteTodoDeleteTodosReturning {
        pub done: Boolean,
        pub id: uuid,
        pub text: String
    }
    impl DeleteTodoDeleteTodosReturning {
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
    pub struct DeleteTodoDeleteTodos {
        #[doc = "data from the rows affected by the mutation"]
        pub returning: Vec<DeleteTodoDeleteTodosReturning>
    }
    impl DeleteTodoDeleteTodos {
        #[allow(unused_variables)]
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![FieldSelector::Object(
                "returning",
                String::new(),
                "todos",
                DeleteTodoDeleteTodosReturning::selection(variables)
            )]
        }
    }
    #[derive(Clone, Debug, PartialEq, Serialize)]
    pub struct Variables {
        pub id: uuid
    }
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    pub struct ResponseData {
        #[doc = "delete data from the table: \"todos\""]
        pub delete_todos: Option<DeleteTodoDeleteTodos>
    }
    impl QueryInfo<Variables> for ResponseData {
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![FieldSelector::Object(
                "delete_todos",
                format!("{{where:{{id:{{_eq:{:?}}}}}}}", variables.id),
                "todos_mutation_response",
                DeleteTodoDeleteTodos::selection(variables)
            )]
        }
    }
}
#[allow(clippy::all)]
impl ::checklist_client::GraphQLQuery for DeleteTodo {
    type Variables = delete_todo::Variables;
    type ResponseData = delete_todo::ResponseData;
    fn build_query(
        variables: Self::Variables
    ) -> (
        ::checklist_client::QueryBody<Self::Variables>,
        ::checklist_client::exchange::OperationMeta
    ) {
        let meta = ::checklist_client::exchange::OperationMeta {
            query_key: 2768145910u32,
            operation_type: ::checklist_client::exchange::OperationType::Mutation
        };
        let body = ::checklist_client::QueryBody {
            variables,
            query: delete_todo::QUERY,
            operation_name: delete_todo::OPERATION_NAME
        };
        (body, meta)
    }
}
