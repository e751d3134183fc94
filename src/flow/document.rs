use super::action::Action;
use serde::{Deserialize, Serialize};

/// Fixed build version stamped into every exported document.
pub const BUILD_VERSION: u32 = 1;
/// Fixed minimum-client baseline; the computed `client_version` never goes
/// below this.
pub const CLIENT_MIN_VERSION: u32 = 1;

/// Icon shown by the app when none is configured.
pub const DEFAULT_ICON: &str = "wand.and.stars";
/// Icon tint used when none is configured.
pub const DEFAULT_ICON_COLOR: &str = "#307ABC";

/// The exported workflow document, ready for JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDocument {
    pub name: String,
    pub summary: String,
    pub icon: Icon,
    pub build_version: u32,
    pub client_min_version: u32,
    /// Highest client version any contained action requires; computed at
    /// export from the action list.
    pub client_version: u32,
    pub actions: Vec<Action>,
}

/// Workflow icon metadata: an SF Symbols glyph name and a hex tint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub glyph: String,
    pub color: String,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_ICON.to_string(),
            color: DEFAULT_ICON_COLOR.to_string(),
        }
    }
}

impl FlowDocument {
    /// Serializes the document as pretty-printed JSON with two-space indent.
    pub fn to_json(&self) -> serde_json::Result<String> {
        self.to_json_indented(2)
    }

    /// Serializes the document as pretty-printed JSON with a caller-chosen
    /// indent width.
    pub fn to_json_indented(&self, indent: usize) -> serde_json::Result<String> {
        let pad = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&pad);
        let mut out = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(out).unwrap_or_default())
    }
}
