//! Per-attribute extraction from raw JSON objects.
//!
//! A typed attribute is only taken out of the object when its value has the
//! expected shape. Anything else stays in the object and is forwarded verbatim
//! with the rest of the unrecognized attributes.
use serde_json::{Map, Value};

/// Implements `Deserialize` by buffering a `Value` and converting it.
macro_rules! deserialize_via_value {
    ($ty:ty, $convert:path) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $convert(value).map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use deserialize_via_value;

/// Removes `key` only when its value passes `accept`.
pub(crate) fn take_if(
    map: &mut Map<String, Value>,
    key: &str,
    accept: impl Fn(&Value) -> bool,
) -> Option<Value> {
    if map.get(key).is_some_and(accept) {
        map.shift_remove(key)
    } else {
        None
    }
}

pub(crate) fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match take_if(map, key, Value::is_string) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

pub(crate) fn take_object(map: &mut Map<String, Value>, key: &str) -> Option<Map<String, Value>> {
    match take_if(map, key, Value::is_object) {
        Some(Value::Object(object)) => Some(object),
        _ => None,
    }
}

pub(crate) fn take_array(map: &mut Map<String, Value>, key: &str) -> Option<Vec<Value>> {
    match take_if(map, key, Value::is_array) {
        Some(Value::Array(items)) => Some(items),
        _ => None,
    }
}
