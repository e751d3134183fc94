//! Prelude module for convenient imports
//!
//! Re-exports the types needed for everyday workflow building. Import this
//! module to get the builder, parameter and error types without importing
//! each one individually.
//!
//! # Example
//!
//! ```rust
//! use taioflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut flow = FlowBuilder::new("Example");
//! let greeting = flow.set_variable("greeting", "hi")?;
//! flow.show_text(&greeting)?;
//! let json = flow.export().to_json().unwrap_or_default();
//! # let _ = json;
//! # Ok(())
//! # }
//! ```

// Builder facade
pub use crate::builder::{Condition, FlowBuilder, ForEachOptions, IfChain};

// Codec types
pub use crate::codec::{Builtin, Param, ValueCodec, Variable};

// Wire model
pub use crate::flow::{
    Action, BlockId, Browser, Comparison, DateStyle, Fallback, FlowDocument, FlowToken, FlowValue,
    ForEachMode, Icon, RequestMethod, TextCaseMode, TimeStyle, ToastStyle,
};

// Scope tracking
pub use crate::scope::{ScopeKind, ScopeTracker};

// Session / identifiers
pub use crate::session::Session;

// Error types
pub use crate::error::{BuildError, CodecError, DeclarationError, ScopeError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BuildError>;
