//! The wire model: the JSON shapes the Taio app actually reads.

pub mod action;
pub mod document;
pub mod options;
pub mod value;

pub use action::*;
pub use document::*;
pub use options::*;
pub use value::*;

/// Opaque token pairing a block's begin-marker with its end-marker.
pub type BlockId = String;
