//! Shared test utilities for the strictuse workspace.
//!
//! `xtask` needs these at runtime (not behind `#[cfg(test)]`), so they live in their own crate.

use serde_json::Value;

const TIMESTAMP: &str = "__TIMESTAMP__";
const VERSION: &str = "__VERSION__";
const ROOT: &str = "__ROOT__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced only when the *root* object is a report envelope (has `schema`,
/// `tool`, `run`, `verdict` and `findings`). Timestamp keys (`started_at`, `ended_at`) and
/// `duration_ms` are normalized at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "run", "verdict", "findings"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert("version".to_string(), Value::String(VERSION.to_string()));
        }
    }
    normalize_run_recursive(&mut value);
    value
}

fn normalize_run_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "ended_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String(TIMESTAMP.to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_run_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_run_recursive(val);
            }
        }
        _ => {}
    }
}

/// Replace a leading `project_root` in every string value with `__ROOT__`.
///
/// Scope files carry canonical absolute paths, which differ per checkout.
pub fn normalize_project_root(mut value: Value, project_root: &str) -> Value {
    let root = project_root.trim_end_matches('/');
    if !root.is_empty() {
        replace_root_recursive(&mut value, root);
    }
    value
}

fn replace_root_recursive(value: &mut Value, root: &str) {
    match value {
        Value::String(s) => {
            if let Some(rest) = s.strip_prefix(root)
                && (rest.is_empty() || rest.starts_with('/'))
            {
                *s = format!("{ROOT}{rest}");
            }
        }
        Value::Object(map) => {
            for val in map.values_mut() {
                replace_root_recursive(val, root);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                replace_root_recursive(val, root);
            }
        }
        _ => {}
    }
}
