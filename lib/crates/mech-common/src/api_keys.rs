//! API-key map (`.api_keys.json`): tool or provider name → ordered list of
//! credential strings.
//!
//! The map is consumed by the agent; this module only checks its shape and
//! never echoes credential values back.

use serde_json::Value;

use crate::problem::Problem;

/// Check the shape of a decoded API-key map.
///
/// Every value must be a non-empty array of non-empty strings.
#[must_use]
pub fn check_api_keys(value: &Value) -> Vec<Problem> {
    let Some(map) = value.as_object() else {
        return vec![Problem::new("", "expected a JSON object of name -> [keys]")];
    };

    let mut problems = Vec::new();
    if map.is_empty() {
        problems.push(Problem::new("", "no API keys declared"));
    }
    for (name, keys) in map {
        if name.trim().is_empty() {
            problems.push(Problem::new("", "empty tool name"));
        }
        let Some(keys) = keys.as_array() else {
            problems.push(Problem::new(name, "expected a list of keys"));
            continue;
        };
        if keys.is_empty() {
            problems.push(Problem::new(name, "key list is empty"));
        }
        for (i, key) in keys.iter().enumerate() {
            match key.as_str() {
                Some(s) if !s.trim().is_empty() => {}
                Some(_) => problems.push(Problem::new(format!("{name}[{i}]"), "key is empty")),
                None => problems.push(Problem::new(format!("{name}[{i}]"), "key is not a string")),
            }
        }
    }
    problems
}
