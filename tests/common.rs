//! Shared helpers for the integration tests.

use taioflow::prelude::*;

/// Deterministic session prefix, shaped like a real time-derived one.
pub const PREFIX: &str = "M3KTEST00-ZZZZ";

/// A builder over a deterministic session so encoded placeholders are
/// predictable across runs.
#[allow(dead_code)]
pub fn flow(name: &str) -> FlowBuilder {
    FlowBuilder::with_session(name, Session::with_prefix(PREFIX))
}

/// The `type` tags of a slice of actions, in order.
#[allow(dead_code)]
pub fn action_types(actions: &[Action]) -> Vec<&'static str> {
    actions.iter().map(Action::type_tag).collect()
}

/// Serializes a document to a `serde_json::Value` for shape assertions.
#[allow(dead_code)]
pub fn to_value(doc: &FlowDocument) -> serde_json::Value {
    serde_json::to_value(doc).expect("document serializes")
}
