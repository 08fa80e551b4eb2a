//! JSON binding for component trees
//!
//! Persists a component tree to the structured wire format and back. The
//! serialized shape is the internally tagged serde model declared on
//! [`Component`]: every object carries a `type` discriminator, translatable
//! nodes carry `key`, an optional `fallback`, and an ordered `args` array of
//! nested serialized components.

use crate::component::Component;

/// Serialize a component tree to a compact JSON string.
pub fn to_json(component: &Component) -> serde_json::Result<String> {
    serde_json::to_string(component)
}

/// Serialize a component tree to a human-readable JSON string.
pub fn to_json_pretty(component: &Component) -> serde_json::Result<String> {
    serde_json::to_string_pretty(component)
}

/// Deserialize a component tree from JSON text.
pub fn from_json(input: &str) -> serde_json::Result<Component> {
    serde_json::from_str(input)
}
