#[allow(clippy::all)]
pub struct AddTodo;
#[allow(clippy::all)]
pub mod add_todo {
    #![allow(dead_code)]
    pub const OPERATION_NAME: &str = "addTodo";
    pub const QUERY: &str = "mutation addTodo($text: String!) {\n  insert_todos(objects: {text: $text}) {\n    returning {\n      done\n      id\n      text\n    }\n  }\n}";
    use checklist_client::codegen::{FieldSelector, QueryInfo};
    use serde::{Deserialize, Serialize};
    #[allow(dead_code)]
    type Boolean = bool;
    #[allow(dead_code, non_camel_case_types)]
    type uuid = String;
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    #[doc = "columns and relationships of \"todos\""]
    pub struct AddTodoInsertTodosReturning {
        pub done: Boolean,
        pub id: uuid,
        pub text: String
    }
    impl AddTodoInsertTodosReturning {
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
    pub struct AddTodoInsertTodos {
        #[doc = "data from the rows affected by the mutation"]
        pub returning: Vec<AddTodoInsertTodosReturning>
    }
    impl AddTodoInsertTodos {
        #[allow(unused_variables)]
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![FieldSelector::Object(
                "returning",
                String::new(),
                "todos",
                AddTodoInsertTodosReturning::selection(variables)
            )]
        }
    }
    #[derive(Clone, Debug, PartialEq, Serialize)]
    pub struct Variables {
        pub text: String
    }
    #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
    pub struct ResponseData {
        #[doc = "insert data into the table: \"todos\""]
        pub insert_todos: Option<AddTodoInsertTodos>
    }
    impl QueryInfo<Variables> for ResponseData {
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            vec![FieldSelector::Object(
                "insert_todos",
                format!("{{objects:{{text:{:?}}}}}", variables.text),
                "todos_mutation_response",
                AddTodoInsertTodos::selection(variables)
            )]
        }
    }
}
#[allow(clippy::all)]
impl ::checklist_client::GraphQLQuery for AddTodo {
    type Variables = add_todo::Variables;
    type ResponseData = add_todo::ResponseData;
    fn build_query(
        variables: Self::Variables
    ) -> (
        ::checklist_client::QueryBody<Self::Variables>,
        ::checklist_client::exchange::OperationMeta
    ) {
        let meta = ::checklist_client::exchange::OperationMeta {
            query_key: 1126386231u32,
            operation_type: ::checklist_client::exchange::OperationType::Mutation
        };
        let body = ::checklist_client::QueryBody {
            variables,
            query: add_todo::QUERY,
            operation_name: add_todo::OPERATION_NAME
        };
        (body, meta)
    }
}
