use crate::error::MathError;
use crate::storage::config::Settings;
use serde_json::{Map, Value};

/// Separator used by [`flatten_dict`]
pub const DEFAULT_SEPARATOR: &str = "_";

/// Flatten nested JSON objects into a single level, joining keys with `_`
///
/// # Examples
/// ```
/// use common_utils::utils::data::flatten_dict;
/// use serde_json::json;
///
/// let nested = json!({"a": {"b": 1, "c": {"d": 2}}});
/// let flat = flatten_dict(nested.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(flat), json!({"a_b": 1, "a_c_d": 2}));
/// ```
pub fn flatten_dict(map: &Map<String, Value>) -> Map<String, Value> {
    flatten_dict_with(map, "", DEFAULT_SEPARATOR)
}

/// Flatten nested JSON objects, prefixing every key with `parent_key`
///
/// Leaves are emitted in depth-first order. Empty nested objects produce no
/// entry. When two paths flatten to the same key, the first position is kept
/// and the last value wins.
pub fn flatten_dict_with(
    map: &Map<String, Value>,
    parent_key: &str,
    sep: &str,
) -> Map<String, Value> {
    let mut flat = Map::new();
    let mut stack: Vec<(String, &Value)> = Vec::new();
    push_entries(&mut stack, map, parent_key, sep);

    while let Some((key, value)) = stack.pop() {
        match value {
            Value::Object(children) => push_entries(&mut stack, children, &key, sep),
            leaf => {
                flat.insert(key, leaf.clone());
            }
        }
    }

    flat
}

/// Flatten using the separator configured in `settings`
pub fn flatten_dict_with_settings(
    map: &Map<String, Value>,
    settings: &Settings,
) -> Map<String, Value> {
    flatten_dict_with(map, "", &settings.flatten_separator)
}

// Reversed so the first entry is popped first.
fn push_entries<'a>(
    stack: &mut Vec<(String, &'a Value)>,
    map: &'a Map<String, Value>,
    parent_key: &str,
    sep: &str,
) {
    for (key, value) in map.iter().rev() {
        let compound = if parent_key.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", parent_key, sep, key)
        };
        stack.push((compound, value));
    }
}

/// Split `items` into chunks of `chunk_size`; only the last may be shorter
///
/// # Errors
/// Returns [`MathError::InvalidChunkSize`] when `chunk_size` is 0
pub fn chunk_list<T: Clone>(items: &[T], chunk_size: usize) -> Result<Vec<Vec<T>>, MathError> {
    if chunk_size == 0 {
        return Err(MathError::InvalidChunkSize);
    }

    Ok(items.chunks(chunk_size).map(<[T]>::to_vec).collect())
}
