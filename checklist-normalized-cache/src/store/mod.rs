mod data;
mod read;
#[allow(clippy::module_inception)]
mod store;
mod write;

pub use self::store::{CacheError, QueryStore, Store};

/// The key a field is stored under on its parent entity.
pub(crate) fn field_key(field_name: &str, args: &str) -> String {
    if args.is_empty() {
        field_name.to_string()
    } else {
        let mut key = String::with_capacity(field_name.len() + args.len() + 2);
        key.push_str(field_name);
        key.push('(');
        key.push_str(args);
        key.push(')');
        key
    }
}
