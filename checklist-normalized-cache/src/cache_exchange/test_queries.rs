//! Hand-written operations over a Hasura-style `todos` table, shared by the cache tests.

#![allow(dead_code)]

use checklist_client::{
    codegen::{FieldSelector, QueryInfo},
    exchange::{OperationMeta, OperationType},
    GraphQLQuery, QueryBody
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool
}

impl Todo {
    pub fn new(id: &str, text: &str, done: bool) -> Self {
        Todo {
            id: id.to_string(),
            text: text.to_string(),
            done
        }
    }

    fn selection() -> Vec<FieldSelector> {
        vec![
            FieldSelector::Scalar("id", String::new()),
            FieldSelector::Scalar("text", String::new()),
            FieldSelector::Scalar("done", String::new())
        ]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Returning {
    pub returning: Vec<Todo>
}

impl Returning {
    fn selection() -> Vec<FieldSelector> {
        vec![FieldSelector::Object(
            "returning",
            String::new(),
            "todos",
            Todo::selection()
        )]
    }
}

fn build<V: Serialize + Clone + Send + Sync>(
    variables: V,
    query_key: u32,
    operation_type: OperationType,
    operation_name: &'static str
) -> (QueryBody<V>, OperationMeta) {
    let meta = OperationMeta {
        query_key,
        operation_type
    };
    let body = QueryBody {
        variables,
        query: "",
        operation_name
    };
    (body, meta)
}

pub mod todo_list {
    use super::*;

    #[derive(Clone, Debug, Serialize)]
    pub struct Variables;

    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct ResponseData {
        pub todos: Vec<Todo>
    }

    impl QueryInfo<Variables> for ResponseData {
        fn selection(_variables: &Variables) -> Vec<FieldSelector> {
            vec![FieldSelector::Object(
                "todos",
                String::new(),
                "todos",
                Todo::selection()
            )]
        }
    }
}

pub struct TodoList;

impl GraphQLQuery for TodoList {
    type Variables = todo_list::Variables;
    type ResponseData = todo_list::ResponseData;

    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta) {
        build(variables, 1, OperationType::Query, "TodoList")
    }
}

pub mod set_done {
    use super::*;

    #[derive(Clone, Debug, Serialize)]
    pub struct Variables {
        pub id: String,
        pub done: bool
    }

    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct ResponseData {
        pub update_todos: Option<Returning>
    }

    impl QueryInfo<Variables> for ResponseData {
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            let args = serde_json::json!({
                "where": { "id": { "_eq": variables.id } },
                "_set": { "done": variables.done }
            });
            vec![FieldSelector::Object(
                "update_todos",
                args.to_string(),
                "todos_mutation_response",
                Returning::selection()
            )]
        }
    }
}

pub struct SetDone;

impl GraphQLQuery for SetDone {
    type Variables = set_done::Variables;
    type ResponseData = set_done::ResponseData;

    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta) {
        build(variables, 2, OperationType::Mutation, "SetDone")
    }
}

pub mod remove {
    use super::*;

    #[derive(Clone, Debug, Serialize)]
    pub struct Variables {
        pub id: String
    }

    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct ResponseData {
        pub delete_todos: Option<Returning>
    }

    impl QueryInfo<Variables> for ResponseData {
        fn selection(variables: &Variables) -> Vec<FieldSelector> {
            let args = serde_json::json!({ "where": { "id": { "_eq": variables.id } } });
            vec![FieldSelector::Object(
                "delete_todos",
                args.to_string(),
                "todos_mutation_response",
                Returning::selection()
            )]
        }
    }
}

pub struct Remove;

impl GraphQLQuery for Remove {
    type Variables = remove::Variables;
    type ResponseData = remove::ResponseData;

    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta) {
        build(variables, 3, OperationType::Mutation, "Remove")
    }
}

/// Selects a `priority` column the response type never carries, so its results can't be
/// normalized.
pub mod mismatched {
    use super::*;

    #[derive(Clone, Debug, Serialize)]
    pub struct Variables;

    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct ResponseData {
        pub todos: Vec<Todo>
    }

    impl QueryInfo<Variables> for ResponseData {
        fn selection(_variables: &Variables) -> Vec<FieldSelector> {
            let mut selection = Todo::selection();
            selection.push(FieldSelector::Scalar("priority", String::new()));
            vec![FieldSelector::Object("todos", String::new(), "todos", selection)]
        }
    }
}

pub struct Mismatched;

impl GraphQLQuery for Mismatched {
    type Variables = mismatched::Variables;
    type ResponseData = mismatched::ResponseData;

    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta) {
        build(variables, 4, OperationType::Query, "Mismatched")
    }
}
