use thiserror::Error;

/// Errors raised synchronously at the call that declares or touches a variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("Invalid variable name '{name}': only letters, digits, '_' and '-' are allowed")]
    InvalidVariableName { name: String },

    #[error("Invalid date format '{format}': ')' and line breaks cannot appear in a format")]
    InvalidDateFormat { format: String },

    #[error("The built-in variable '{id}' is read-only and cannot be assigned")]
    AssignToBuiltin { id: String },
}

/// Block-nesting integrity errors. These indicate a bug in builder code, not
/// bad user input: a scope was closed twice, or out of order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Block '{expected}' is not open; the innermost open block is '{found}'")]
    IdentifierMismatch { expected: String, found: String },

    #[error("The root scope is only closed by exporting the workflow")]
    ClosedRoot,
}

/// Errors from encoding parameter text into the wire `FlowValue` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Embedded reference '{vid}' was not declared by this workflow")]
    UnknownReference { vid: String },

    #[error("Text contains an unrecognized reference placeholder near '{fragment}'")]
    UnresolvedReference { fragment: String },
}

/// Umbrella error for fluent builder calls and scope callbacks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}
