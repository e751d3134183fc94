use serde::{Deserialize, Serialize};

/// The wire form of a text parameter that may contain embedded variable
/// references: literal text with each reference collapsed to a single `$`
/// sentinel, plus a side list of tokens mapping sentinel positions back to
/// variable identifiers.
///
/// `tokens` is omitted from the JSON entirely when no reference was found;
/// the consuming app distinguishes a missing list from an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<FlowToken>>,
}

impl FlowValue {
    /// Wraps literal text that carries no embedded references.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tokens: None,
        }
    }
}

/// One embedded reference: `location` is a character offset into the
/// sentinel-substituted `value`, `value` is the referenced variable id
/// (`@input`, `V-XXXXXX`, a user-chosen name, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowToken {
    pub location: usize,
    pub value: String,
}
