use super::value::FlowValue;
use super::BlockId;
use serde::{Deserialize, Serialize};

/// Minimum client version required by the for-each block markers.
pub const FOR_EACH_MIN_VERSION: u32 = 52;

/// One step in a workflow. Serializes to the app's native
/// `{"type": ..., "parameters": {...}}` records; variants without fields
/// serialize as a bare `{"type": ...}`.
///
/// Ordering in the action list is execution order and is preserved exactly
/// as produced by the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "parameters", rename_all_fields = "camelCase")]
pub enum Action {
    // General
    #[serde(rename = "@comment")]
    Comment { text: FlowValue },

    // Text
    #[serde(rename = "@text")]
    Text { text: FlowValue },
    #[serde(rename = "@text.case")]
    TextCase { mode: u32, text: FlowValue },

    // User interface
    #[serde(rename = "@ui.render-text")]
    RenderText { text: FlowValue, title: FlowValue },
    #[serde(rename = "@ui.menu")]
    Menu {
        prompt: FlowValue,
        multi_value: bool,
        lines: FlowValue,
    },
    #[serde(rename = "@ui.toast")]
    Toast {
        title: FlowValue,
        style: u32,
        wait_until_done: bool,
    },

    // Scripting
    #[serde(rename = "@flow.if")]
    If {
        block_identifier: BlockId,
        condition: u32,
        lhs: FlowValue,
        rhs: FlowValue,
    },
    #[serde(rename = "@flow.else")]
    Else { block_identifier: BlockId },
    #[serde(rename = "@flow.endif")]
    EndIf { block_identifier: BlockId },
    #[serde(rename = "@flow.delay")]
    Delay { interval: f64 },
    #[serde(rename = "@flow.finish")]
    Finish,
    #[serde(rename = "@flow.set-variable")]
    SetVariable { value: FlowValue, name: FlowValue },
    #[serde(rename = "@flow.get-variable")]
    GetVariable { fallback: u32, name: FlowValue },
    #[serde(rename = "@flow.repeat-begin")]
    RepeatBegin {
        block_identifier: BlockId,
        count: u32,
    },
    #[serde(rename = "@flow.repeat-end")]
    RepeatEnd { block_identifier: BlockId },
    #[serde(rename = "@flow.foreach-begin")]
    ForEachBegin {
        block_identifier: BlockId,
        text: FlowValue,
        mode: u32,
        pattern: FlowValue,
        group: u32,
        reverse: bool,
    },
    #[serde(rename = "@flow.foreach-end")]
    ForEachEnd { block_identifier: BlockId },
    #[serde(rename = "@flow.javascript")]
    Script { script: FlowValue },

    // Utilities
    #[serde(rename = "@util.get-clipboard")]
    GetClipboard,
    #[serde(rename = "@util.set-clipboard")]
    SetClipboard {
        text: FlowValue,
        local_only: bool,
        expire_after: u32,
    },
    #[serde(rename = "@util.math")]
    Math { expr: FlowValue },
    #[serde(rename = "@util.open-url")]
    OpenUrl { url: FlowValue, browser: u32 },
    #[serde(rename = "@util.request")]
    Request {
        body: FlowValue,
        url: FlowValue,
        method: u32,
        headers: FlowValue,
    },
}

impl Action {
    /// The minimum app version able to run this action. Used only while
    /// assembling the document; never serialized.
    pub fn client_min_version(&self) -> u32 {
        match self {
            Action::ForEachBegin { .. } | Action::ForEachEnd { .. } => FOR_EACH_MIN_VERSION,
            _ => 1,
        }
    }

    /// The `type` tag this action serializes under.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Action::Comment { .. } => "@comment",
            Action::Text { .. } => "@text",
            Action::TextCase { .. } => "@text.case",
            Action::RenderText { .. } => "@ui.render-text",
            Action::Menu { .. } => "@ui.menu",
            Action::Toast { .. } => "@ui.toast",
            Action::If { .. } => "@flow.if",
            Action::Else { .. } => "@flow.else",
            Action::EndIf { .. } => "@flow.endif",
            Action::Delay { .. } => "@flow.delay",
            Action::Finish => "@flow.finish",
            Action::SetVariable { .. } => "@flow.set-variable",
            Action::GetVariable { .. } => "@flow.get-variable",
            Action::RepeatBegin { .. } => "@flow.repeat-begin",
            Action::RepeatEnd { .. } => "@flow.repeat-end",
            Action::ForEachBegin { .. } => "@flow.foreach-begin",
            Action::ForEachEnd { .. } => "@flow.foreach-end",
            Action::Script { .. } => "@flow.javascript",
            Action::GetClipboard => "@util.get-clipboard",
            Action::SetClipboard { .. } => "@util.set-clipboard",
            Action::Math { .. } => "@util.math",
            Action::OpenUrl { .. } => "@util.open-url",
            Action::Request { .. } => "@util.request",
        }
    }
}
