//! Persisted/shared-state codec for [`UserInput`].
//!
//! The web front-end saves profiles to local storage and embeds them in
//! share links. Records written by older versions may be missing newer
//! fields, so decoding merges the stored object over the default profile
//! key by key; a record that fails to parse at all falls back to the
//! defaults wholesale. Defaulting happens here, never inside the engine.

use serde_json::Value;

use super::data::UserInput;

/// Encode an input record as the canonical JSON the front-end persists
pub fn encode(input: &UserInput) -> String {
    // UserInput always serializes; the schema has no non-serializable states
    serde_json::to_string(input).unwrap_or_default()
}

/// Decode a persisted or shared record, filling missing fields from
/// [`UserInput::default_profile`]. Malformed input yields the defaults.
pub fn decode(raw: &str, current_year: i32) -> UserInput {
    let defaults = UserInput::default_profile(current_year);

    let Ok(stored) = serde_json::from_str::<Value>(raw) else {
        log::warn!("failed to parse persisted profile, using defaults");
        return defaults;
    };

    let Value::Object(stored_map) = stored else {
        log::warn!("persisted profile is not an object, using defaults");
        return defaults;
    };

    // Top-level merge, mirroring the front-end's `{ ...defaults, ...stored }`
    let mut merged = match serde_json::to_value(&defaults) {
        Ok(Value::Object(map)) => map,
        _ => return defaults,
    };
    for (key, value) in stored_map {
        merged.insert(key, value);
    }

    match serde_json::from_value(Value::Object(merged)) {
        Ok(input) => input,
        Err(err) => {
            log::warn!("persisted profile rejected ({err}), using defaults");
            defaults
        }
    }
}
