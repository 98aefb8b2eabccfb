use serde_json::{Number, Value};

/// One step of a path into a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Field(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Field(name)
    }
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// Build a `[Key]` array from a mix of field names and indices.
///
/// `path!["PowerControl", 0, "PowerMetrics"]`
#[macro_export]
macro_rules! path {
    ($($key:expr),* $(,)?) => {
        [$($crate::redfish::navigate::Key::from($key)),*]
    };
}

/// Walk `keys` down from `root`.
///
/// Returns `None` as soon as a step does not apply: indexing a non-array,
/// looking up a field on a non-object, a missing field, an out-of-range
/// index, or a `null` anywhere along the way (the final value included).
pub fn safe_get<'v>(root: &'v Value, keys: &[Key<'_>]) -> Option<&'v Value> {
    let mut current = root;
    for key in keys {
        current = match (key, current) {
            (Key::Field(name), Value::Object(map)) => map.get(*name)?,
            (Key::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }
    if current.is_null() {
        return None;
    }
    Some(current)
}

/// Like [`safe_get`], falling back to `default` when the path does not resolve.
pub fn get_or<'v>(root: &'v Value, keys: &[Key<'_>], default: &'v Value) -> &'v Value {
    safe_get(root, keys).unwrap_or(default)
}

pub fn get_str<'v>(root: &'v Value, keys: &[Key<'_>]) -> Option<&'v str> {
    safe_get(root, keys)?.as_str()
}

/// String field with blank values treated as absent.
pub fn get_text(root: &Value, keys: &[Key<'_>]) -> Option<String> {
    get_str(root, keys)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Numeric reading, kept as the source wrote it (`35` stays `35`, `35.5` stays `35.5`).
pub fn get_number(root: &Value, keys: &[Key<'_>]) -> Option<Number> {
    match safe_get(root, keys)? {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}

/// Array at `keys`, or an empty slice for anything else.
pub fn get_array<'v>(root: &'v Value, keys: &[Key<'_>]) -> &'v [Value] {
    match safe_get(root, keys) {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

/// Strings of an array at `keys`; non-string entries are dropped.
pub fn get_string_list(root: &Value, keys: &[Key<'_>]) -> Vec<String> {
    get_array(root, keys)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_descends_objects_and_arrays() {
        let doc = json!({
            "PowerControl": [
                { "PowerConsumedWatts": 412, "PowerMetrics": { "MinConsumedWatts": 380 } }
            ]
        });

        assert_eq!(
            safe_get(&doc, &path!["PowerControl", 0, "PowerMetrics", "MinConsumedWatts"]),
            Some(&json!(380))
        );
        assert_eq!(get_number(&doc, &path!["PowerControl", 0, "PowerConsumedWatts"]), Some(Number::from(412)));
    }

    #[test]
    fn test_empty_path_returns_root() {
        let doc = json!({"a": 1});
        assert_eq!(safe_get(&doc, &[]), Some(&doc));
        assert_eq!(safe_get(&Value::Null, &[]), None);
    }

    #[test]
    fn test_failed_prefix_yields_default() {
        let doc = json!({
            "Members": [{"@odata.id": "/redfish/v1/Chassis/1"}],
            "Name": "Chassis Collection",
            "Thermal": null
        });
        let default = json!("NA");

        // missing field
        assert_eq!(get_or(&doc, &path!["Missing", "Deeper"], &default), &default);
        // out-of-range index
        assert_eq!(get_or(&doc, &path!["Members", 3, "@odata.id"], &default), &default);
        // field lookup on an array
        assert_eq!(get_or(&doc, &path!["Members", "@odata.id"], &default), &default);
        // index on an object
        assert_eq!(get_or(&doc, &path![0], &default), &default);
        // descending into a scalar
        assert_eq!(get_or(&doc, &path!["Name", "Inner"], &default), &default);
        // null mid-path and at the end
        assert_eq!(get_or(&doc, &path!["Thermal", "@odata.id"], &default), &default);
        assert_eq!(get_or(&doc, &path!["Thermal"], &default), &default);
    }

    #[test]
    fn test_arbitrary_shapes_never_panic() {
        let shapes = [
            json!(null),
            json!(true),
            json!(42),
            json!("text"),
            json!([]),
            json!([null, [1, 2], {"k": null}]),
            json!({"k": {"k": {"k": []}}}),
        ];
        let paths: [&[Key]; 5] = [
            &path!["k"],
            &path![0],
            &path![1, 1],
            &path!["k", "k", "k", 0],
            &path![2, "k", "x"],
        ];
        for shape in &shapes {
            for keys in &paths {
                let _ = safe_get(shape, keys);
                let _ = get_array(shape, keys);
                let _ = get_number(shape, keys);
            }
        }
        assert_eq!(safe_get(&shapes[5], &path![1, 1]), Some(&json!(2)));
    }

    #[test]
    fn test_typed_helpers() {
        let doc = json!({
            "Name": "  ",
            "Model": "PERC H755",
            "Reading": 35.5,
            "CapacityBytes": "lots",
            "SupportedRAIDTypes": ["RAID0", 5, "RAID1"]
        });

        assert_eq!(get_text(&doc, &path!["Name"]), None);
        assert_eq!(get_text(&doc, &path!["Model"]).as_deref(), Some("PERC H755"));
        assert_eq!(get_number(&doc, &path!["Reading"]).map(|n| n.to_string()).as_deref(), Some("35.5"));
        assert_eq!(get_number(&doc, &path!["CapacityBytes"]), None);
        assert_eq!(get_string_list(&doc, &path!["SupportedRAIDTypes"]), vec!["RAID0", "RAID1"]);
        assert!(get_array(&doc, &path!["Model"]).is_empty());
    }
}
