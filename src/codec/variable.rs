use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VarKind {
    /// Auto-generated `V-XXXXXX` identifier.
    Auto,
    /// User-chosen name, framed in braces inside placeholder text.
    Named,
    /// Host-runtime built-in (`@input`, `@clipboard.text`, ...).
    Builtin,
}

/// A handle to a named slot in the target runtime.
///
/// A variable is referenced *by value*: rendering it (via `Display` or
/// [`Variable::placeholder`]) yields session-prefixed placeholder text that
/// can be embedded anywhere inside a string parameter and is recovered by the
/// codec at encode time. Handles are immutable once created; assignment goes
/// through [`crate::builder::FlowBuilder::assign`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    kind: VarKind,
    vid: String,
    prefix: Arc<str>,
}

impl Variable {
    pub(crate) fn new(kind: VarKind, vid: String, prefix: Arc<str>) -> Self {
        Self { kind, vid, prefix }
    }

    /// The wire identifier this handle resolves to.
    pub fn id(&self) -> &str {
        &self.vid
    }

    /// Whether this handle refers to a read-only host built-in.
    pub fn is_builtin(&self) -> bool {
        self.kind == VarKind::Builtin
    }

    /// The placeholder text embedded into parameters to reference this
    /// variable.
    pub fn placeholder(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            VarKind::Named => write!(f, "{}-{{{}}}", self.prefix, self.vid),
            VarKind::Auto | VarKind::Builtin => write!(f, "{}-{}", self.prefix, self.vid),
        }
    }
}
