use serde::Serialize;
use std::num::Wrapping;

/// When we have separate values it's useful to run a progressive
/// version of djb2 where we pretend that we're still looping over
/// the same value
pub fn progressive_hash<V: Serialize>(h: u32, x: &V) -> Result<u64, bincode::Error> {
    let x = bincode::serialize(x)?;

    let mut h = Wrapping(h as u64);

    for byte in x {
        h = (h << 5) + h + Wrapping(byte as u64)
    }

    Ok(h.0)
}

/// Builds [`Extensions`](../type.Extensions.html) from a list of values.
///
/// ```
/// # use checklist_client::ext;
/// struct Marker(u8);
///
/// let extensions = ext![Marker(1)];
/// assert_eq!(extensions.get::<Marker>().map(|m| m.0), Some(1));
/// ```
#[macro_export]
macro_rules! ext {
    ($($x: expr),*) => {
        {
            let mut typemap = $crate::ExtensionMap::new();
            $(
                typemap.insert($x);
            )*
            ::std::sync::Arc::new(typemap)
        }
    };
}

#[cfg(test)]
mod test {
    use super::progressive_hash;

    #[derive(Serialize)]
    struct Variables {
        id: String
    }

    #[test]
    fn hash_depends_on_variables() {
        let a = progressive_hash(7, &Variables { id: "a".into() }).unwrap();
        let a_again = progressive_hash(7, &Variables { id: "a".into() }).unwrap();
        let b = progressive_hash(7, &Variables { id: "b".into() }).unwrap();
        let other_query = progressive_hash(8, &Variables { id: "a".into() }).unwrap();

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_ne!(a, other_query);
    }
}
