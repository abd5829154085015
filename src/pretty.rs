use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

const INDENT: &[u8] = b"    ";

/// Renders a response body for the log: object keys in alphabetical order, four space indent.
pub fn pretty_json(value: &Value) -> String {
    let sorted = sort_keys(value);
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    if sorted.serialize(&mut ser).is_err() {
        return sorted.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| sorted.to_string())
}

/// Rebuilds every object with its keys inserted in order, so the result doesn't depend on which
/// map type `serde_json` was built with.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<&String, Value> =
                map.iter().map(|(k, v)| (k, sort_keys(v))).collect();
            let mut rebuilt = Map::new();
            for (k, v) in ordered {
                rebuilt.insert(k.clone(), v);
            }
            Value::Object(rebuilt)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
