use crate::store::{
    data::{InMemoryData, Link},
    field_key
};
use checklist_client::codegen::FieldSelector;
use serde_json::{Map, Value};

/// Rebuild an entity from the store. Returns `None` if any selected field is missing, which
/// counts as a cache miss.
pub(crate) fn read_entity(
    data: &InMemoryData,
    entity_key: &str,
    selection: &[FieldSelector]
) -> Option<Map<String, Value>> {
    let mut entity = Map::with_capacity(selection.len());
    for field in selection {
        match field {
            FieldSelector::Scalar(field_name, args) => {
                let value = data.read_record(entity_key, &field_key(field_name, args))?;
                entity.insert(field_name.to_string(), value.clone());
            }
            FieldSelector::Object(field_name, args, _, subselection) => {
                let link = data.read_link(entity_key, &field_key(field_name, args))?;
                let value = read_link(data, link, subselection)?;
                entity.insert(field_name.to_string(), value);
            }
        }
    }
    Some(entity)
}

fn read_link(data: &InMemoryData, link: &Link, selection: &[FieldSelector]) -> Option<Value> {
    match link {
        Link::Null => Some(Value::Null),
        Link::Single(entity_key) => read_entity(data, entity_key, selection).map(Value::Object),
        Link::List(links) => links
            .iter()
            .map(|link| read_link(data, link, selection))
            .collect::<Option<Vec<_>>>()
            .map(Value::Array)
    }
}
