//! # taioflow - Taio Workflow Builder and Serializer
//!
//! **taioflow** builds workflow documents for the Taio text-automation app.
//! A fluent [`builder::FlowBuilder`] accumulates action records — create
//! text, show UI, manipulate the clipboard, branch, loop, run an embedded
//! script — and serializes them, together with name/icon/version metadata,
//! into the app's native JSON schema.
//!
//! ## Core machinery
//!
//! Two pieces carry the real logic:
//!
//! 1. **Value reference encoding** ([`codec`]): variable references are
//!    rendered into parameter text as placeholders namespaced by a random
//!    per-session prefix, then reversibly recovered at encode time into the
//!    wire form `{ value, tokens }` — literal text with each reference
//!    collapsed to a `$` sentinel plus a token recording its character
//!    offset and variable id.
//! 2. **Scope tracking** ([`scope`]): conditional, repeat and for-each
//!    blocks nest through synchronous closures; the tracker pairs every
//!    begin-marker with its end-marker and auto-closes scopes a closure
//!    left open, so the exported document is always properly nested.
//!
//! ## Quick Start
//!
//! ```rust
//! use taioflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut flow = FlowBuilder::new("Greeter").with_summary("Says hello");
//!
//!     // Declare a variable; the handle renders as placeholder text.
//!     let name = flow.set_variable("name", "world")?;
//!     flow.create_text(format!("hello {name}"))?;
//!
//!     // Conditional blocks nest through plain closures.
//!     flow.if_block(
//!         Condition::new(&name, Comparison::EqualTo, "world"),
//!         |flow| {
//!             flow.show_text("hello to the whole world")?;
//!             Ok(())
//!         },
//!     )?
//!     .else_branch(|flow| {
//!         flow.show_text(&name)?;
//!         Ok(())
//!     })?;
//!
//!     let document = flow.export();
//!     println!("{}", document.to_json().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod codec;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod scope;
pub mod session;
