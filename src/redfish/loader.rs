use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

/// Read and parse a JSON document.
///
/// Missing files, I/O failures, invalid JSON and empty documents (`null`,
/// `{}`, `[]`, `""`, `0`, `false`) all come back as `None`; callers treat that as
/// "resource unavailable".
pub fn read_json(path: &Path) -> Option<Value> {
    let content = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "resource unavailable");
            return None;
        }
    };

    match serde_json::from_slice::<Value>(&content) {
        Ok(value) if is_empty_document(&value) => {
            debug!(path = %path.display(), "resource is empty");
            None
        }
        Ok(value) => Some(value),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "resource is not valid JSON");
            None
        }
    }
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
    }
}

/// One captured host: `<root>/<datacenter>/<hostname>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDir {
    pub datacenter: String,
    pub hostname: String,
    pub path: PathBuf,
}

impl HostDir {
    pub fn new(datacenter: impl Into<String>, hostname: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            datacenter: datacenter.into(),
            hostname: hostname.into(),
            path: path.into(),
        }
    }

    /// Path of a resource below this host, e.g. `["Chassis", "1", "Thermal.json"]`.
    pub fn resource_path(&self, segments: &[&str]) -> PathBuf {
        segments.iter().fold(self.path.clone(), |path, segment| path.join(segment))
    }

    /// Load the resource at `segments`.
    pub fn load(&self, segments: &[&str]) -> Option<Value> {
        read_json(&self.resource_path(segments))
    }

    /// Load a resource whose final segment is a local identifier,
    /// e.g. `load_member(&["Chassis"], "1")` reads `Chassis/1.json`.
    pub fn load_member(&self, parent: &[&str], id: &str) -> Option<Value> {
        let file_name = format!("{}.json", id);
        let mut segments = parent.to_vec();
        segments.push(&file_name);
        self.load(&segments)
    }

    /// `<datacenter>/<hostname>`, the label every report line starts with.
    pub fn label(&self) -> String {
        format!("{}/{}", self.datacenter, self.hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_unavailable_cases() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{\"Members\": [").unwrap();

        assert!(read_json(&dir.path().join("missing.json")).is_none());
        assert!(read_json(&broken).is_none());
        for empty in ["{}", "[]", "null", " {  }\n", "\"\"", "0", "false"] {
            fs::write(&broken, empty).unwrap();
            assert!(read_json(&broken).is_none(), "{:?} should be unavailable", empty);
        }
        fs::write(&broken, "{\"Id\": \"1\"}").unwrap();
        assert!(read_json(&broken).is_some());
        // a directory is not a document
        assert!(read_json(dir.path()).is_none());
    }

    #[test]
    fn test_host_paths() {
        let dir = TempDir::new().unwrap();
        let host = HostDir::new("dc1", "node-01", dir.path());
        fs::create_dir_all(dir.path().join("Chassis")).unwrap();
        fs::write(dir.path().join("Chassis").join("1.json"), r#"{"Id": "1"}"#).unwrap();

        assert_eq!(
            host.resource_path(&["Chassis", "1", "Thermal.json"]),
            dir.path().join("Chassis").join("1").join("Thermal.json")
        );
        assert_eq!(host.load_member(&["Chassis"], "1"), Some(serde_json::json!({"Id": "1"})));
        assert_eq!(host.load_member(&["Chassis"], "2"), None);
        assert_eq!(host.label(), "dc1/node-01");
    }
}
