use crate::store::{
    data::{InMemoryData, Link},
    field_key, CacheError
};
use checklist_client::codegen::FieldSelector;
use fnv::FnvHashMap;
use serde_json::{Map, Value};

/// Splits a result into records and links, walking it along its static selection.
pub(crate) struct Writer<'a> {
    data: &'a mut InMemoryData,
    custom_keys: &'a FnvHashMap<&'static str, String>
}

impl<'a> Writer<'a> {
    pub fn new(
        data: &'a mut InMemoryData,
        custom_keys: &'a FnvHashMap<&'static str, String>
    ) -> Self {
        Self { data, custom_keys }
    }

    pub fn write_entity(
        &mut self,
        entity_key: &str,
        selection: &[FieldSelector],
        value: &Map<String, Value>
    ) -> Result<(), CacheError> {
        for field in selection {
            match field {
                FieldSelector::Scalar(field_name, args) => {
                    let field_value = value.get(*field_name).ok_or_else(|| {
                        CacheError::MissingField(entity_key.to_owned(), field_name.to_string())
                    })?;
                    self.data
                        .write_record(entity_key, field_key(field_name, args), field_value.clone());
                }
                FieldSelector::Object(field_name, args, typename, subselection) => {
                    let field_value = value.get(*field_name).ok_or_else(|| {
                        CacheError::MissingField(entity_key.to_owned(), field_name.to_string())
                    })?;
                    let field_key = field_key(field_name, args);
                    let path = format!("{}.{}", entity_key, field_key);
                    let link = self.write_link(path, typename, subselection, field_value)?;
                    self.data.write_link(entity_key, field_key, link);
                }
            }
        }
        Ok(())
    }

    /// `path` is used as the entity key for objects without an ID.
    fn write_link(
        &mut self,
        path: String,
        typename: &str,
        selection: &[FieldSelector],
        value: &Value
    ) -> Result<Link, CacheError> {
        match value {
            Value::Null => Ok(Link::Null),
            Value::Object(entity) => {
                let key = key_of_entity(self.custom_keys, typename, entity).unwrap_or(path);
                self.write_entity(&key, selection, entity)?;
                Ok(Link::Single(key))
            }
            Value::Array(items) => {
                let links = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        self.write_link(format!("{}.{}", path, i), typename, selection, item)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Link::List(links))
            }
            _ => Err(CacheError::UnexpectedScalar(path))
        }
    }
}

/// The normalized key of an entity, `typename:id`, or `None` if it has no usable ID.
pub(crate) fn key_of_entity(
    custom_keys: &FnvHashMap<&'static str, String>,
    typename: &str,
    entity: &Map<String, Value>
) -> Option<String> {
    let id = if let Some(custom_key) = custom_keys.get(typename) {
        entity.get(custom_key)
    } else {
        entity.get("id").or_else(|| entity.get("_id"))
    };

    let id = match id? {
        Value::String(id) => id.clone(),
        Value::Number(id) => id.to_string(),
        _ => return None
    };

    let mut key = String::with_capacity(typename.len() + id.len() + 1);
    key.push_str(typename);
    key.push(':');
    key.push_str(&id);
    Some(key)
}

#[cfg(test)]
mod test {
    use super::{key_of_entity, Writer};
    use crate::store::data::{InMemoryData, Link};
    use checklist_client::codegen::FieldSelector;
    use fnv::FnvHashMap;
    use serde_json::{json, Value};

    fn todo_selection() -> Vec<FieldSelector> {
        vec![
            FieldSelector::Scalar("id", String::new()),
            FieldSelector::Scalar("text", String::new()),
            FieldSelector::Scalar("done", String::new())
        ]
    }

    fn object(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!()
        }
    }

    #[test]
    fn keys_entities_by_id() {
        let keys = FnvHashMap::default();
        let entity = object(json!({ "id": "a1", "text": "Buy milk" }));
        assert_eq!(
            key_of_entity(&keys, "todos", &entity),
            Some("todos:a1".to_string())
        );

        let numeric = object(json!({ "_id": 7 }));
        assert_eq!(
            key_of_entity(&keys, "todos", &numeric),
            Some("todos:7".to_string())
        );

        let anonymous = object(json!({ "affected_rows": 1 }));
        assert_eq!(key_of_entity(&keys, "todos_mutation_response", &anonymous), None);
    }

    #[test]
    fn uses_custom_keys() {
        let mut keys = FnvHashMap::default();
        keys.insert("users", "name".to_string());
        let entity = object(json!({ "id": "1", "name": "genna" }));

        assert_eq!(
            key_of_entity(&keys, "users", &entity),
            Some("users:genna".to_string())
        );
    }

    #[test]
    fn embeds_objects_without_ids() {
        let keys = FnvHashMap::default();
        let mut data = InMemoryData::new();
        let selection = vec![FieldSelector::Object(
            "update_todos",
            "{\"id\":\"1\"}".to_string(),
            "todos_mutation_response",
            vec![FieldSelector::Object(
                "returning",
                String::new(),
                "todos",
                todo_selection()
            )]
        )];
        let value = object(json!({
            "update_todos": {
                "returning": [{ "id": "1", "text": "Buy milk", "done": true }]
            }
        }));

        Writer::new(&mut data, &keys)
            .write_entity("Mutation", &selection, &value)
            .unwrap();

        let embedded = "Mutation.update_todos({\"id\":\"1\"})";
        assert_eq!(
            data.read_link("Mutation", "update_todos({\"id\":\"1\"})"),
            Some(&Link::Single(embedded.to_string()))
        );
        assert_eq!(
            data.read_link(embedded, "returning"),
            Some(&Link::List(vec![Link::Single("todos:1".to_string())]))
        );
        assert_eq!(data.read_record("todos:1", "done"), Some(&json!(true)));
    }

    #[test]
    fn rejects_missing_fields() {
        let keys = FnvHashMap::default();
        let mut data = InMemoryData::new();
        let value = object(json!({ "id": "1", "text": "Buy milk" }));

        let result = Writer::new(&mut data, &keys).write_entity("todos:1", &todo_selection(), &value);

        assert!(result.is_err(), "missing `done` was accepted");
    }
}
