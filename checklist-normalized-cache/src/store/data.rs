use fnv::{FnvHashMap, FnvHashSet};
use serde_json::Value;

pub(crate) const QUERY_ROOT: &str = "Query";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Link {
    Single(String),
    List(Vec<Link>),
    Null
}

impl Link {
    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        match self {
            Link::Single(key) => keys.push(key),
            Link::List(links) => {
                for link in links {
                    link.collect_keys(keys);
                }
            }
            Link::Null => {}
        }
    }
}

type Fields<V> = FnvHashMap<String, V>;

/// Scalar field values and links between entities, both keyed by entity key and field key.
#[derive(Default)]
pub struct InMemoryData {
    records: FnvHashMap<String, Fields<Value>>,
    links: FnvHashMap<String, Fields<Link>>
}

impl InMemoryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_record(&self, entity_key: &str, field_key: &str) -> Option<&Value> {
        self.records
            .get(entity_key)
            .and_then(|entity| entity.get(field_key))
    }

    pub fn read_link(&self, entity_key: &str, field_key: &str) -> Option<&Link> {
        self.links
            .get(entity_key)
            .and_then(|entity| entity.get(field_key))
    }

    pub fn write_record(&mut self, entity_key: &str, field_key: String, value: Value) {
        self.records
            .entry(entity_key.to_owned())
            .or_default()
            .insert(field_key, value);
    }

    pub fn write_link(&mut self, entity_key: &str, field_key: String, link: Link) {
        self.links
            .entry(entity_key.to_owned())
            .or_default()
            .insert(field_key, link);
    }

    /// Remove a field from an entity, whether it's a record or a link.
    pub fn remove_field(&mut self, entity_key: &str, field_key: &str) {
        if let Some(entity) = self.records.get_mut(entity_key) {
            entity.remove(field_key);
        }
        if let Some(entity) = self.links.get_mut(entity_key) {
            entity.remove(field_key);
        }
    }

    pub fn contains_entity(&self, entity_key: &str) -> bool {
        self.records.contains_key(entity_key) || self.links.contains_key(entity_key)
    }

    /// Drop every entity that can't be reached from the query root. Returns how many entities
    /// were removed.
    pub fn collect_garbage(&mut self) -> usize {
        let mut reachable = FnvHashSet::default();
        let mut queue = vec![QUERY_ROOT.to_string()];

        while let Some(key) = queue.pop() {
            if let Some(fields) = self.links.get(&key) {
                let mut keys = Vec::new();
                for link in fields.values() {
                    link.collect_keys(&mut keys);
                }
                queue.extend(
                    keys.into_iter()
                        .filter(|key| !reachable.contains(*key))
                        .map(str::to_owned)
                );
            }
            reachable.insert(key);
        }

        let before = self.entity_count();
        self.records.retain(|key, _| reachable.contains(key));
        self.links.retain(|key, _| reachable.contains(key));
        before - self.entity_count()
    }

    fn entity_count(&self) -> usize {
        let mut keys: FnvHashSet<&String> = self.records.keys().collect();
        keys.extend(self.links.keys());
        keys.len()
    }
}
