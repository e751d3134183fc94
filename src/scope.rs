//! Nested block scope tracking.
//!
//! Every block-opening builder call pushes a scope; the matching end-marker
//! action must be appended before any outer scope closes. Scope callbacks are
//! plain synchronous closures and may return without closing blocks they
//! opened, so closing is driven by expectation: whoever needs a particular
//! block on top of the stack calls [`ScopeTracker::unwind_to`], and every
//! scope popped on the way down emits its synthesized end-marker first.
//! A missing expectation identifier is a hard error — silently mis-nested
//! markers would produce a document the app cannot execute.

use crate::error::ScopeError;
use crate::flow::{Action, BlockId};

/// What kind of block a scope belongs to; decides the end-marker synthesized
/// when the scope closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Root,
    Condition,
    Repeat,
    ForEach,
}

#[derive(Debug, Clone)]
struct Scope {
    id: BlockId,
    kind: ScopeKind,
}

impl Scope {
    /// The end-marker action closing this scope. Root has none: its boundary
    /// is the document itself, emitted only at export.
    fn end_marker(&self) -> Option<Action> {
        match self.kind {
            ScopeKind::Root => None,
            ScopeKind::Condition => Some(Action::EndIf {
                block_identifier: self.id.clone(),
            }),
            ScopeKind::Repeat => Some(Action::RepeatEnd {
                block_identifier: self.id.clone(),
            }),
            ScopeKind::ForEach => Some(Action::ForEachEnd {
                block_identifier: self.id.clone(),
            }),
        }
    }
}

/// Stack of currently-open block scopes, root at the bottom.
#[derive(Debug)]
pub struct ScopeTracker {
    stack: Vec<Scope>,
}

impl ScopeTracker {
    /// Creates a tracker with the implicit root scope open.
    pub fn new(root_id: BlockId) -> Self {
        Self {
            stack: vec![Scope {
                id: root_id,
                kind: ScopeKind::Root,
            }],
        }
    }

    /// Opens a child scope. The caller emits the matching begin-marker.
    pub fn open(&mut self, kind: ScopeKind, id: BlockId) {
        self.stack.push(Scope { id, kind });
    }

    /// Identifier of the innermost open scope.
    pub fn current_id(&self) -> &BlockId {
        // The root scope is never popped, so the stack is never empty.
        &self.stack[self.stack.len() - 1].id
    }

    /// Number of open scopes, the root included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Auto-closes scopes top-down until `expected` is the innermost open
    /// scope, pushing each synthesized end-marker into `sink`. Fails without
    /// modifying anything further if `expected` is not on the stack at all.
    pub fn unwind_to(&mut self, expected: &BlockId, sink: &mut Vec<Action>) -> Result<(), ScopeError> {
        if !self.stack.iter().any(|s| &s.id == expected) {
            return Err(ScopeError::IdentifierMismatch {
                expected: expected.clone(),
                found: self.current_id().clone(),
            });
        }
        while self.current_id() != expected {
            if let Some(scope) = self.stack.pop() {
                if let Some(marker) = scope.end_marker() {
                    sink.push(marker);
                }
            }
        }
        Ok(())
    }

    /// Closes the scope identified by `expected`, first auto-closing anything
    /// opened inside it. Closing the root this way is an error; the root is
    /// only drained by [`ScopeTracker::finalize`].
    pub fn close(&mut self, expected: &BlockId, sink: &mut Vec<Action>) -> Result<(), ScopeError> {
        self.unwind_to(expected, sink)?;
        if self.stack.len() == 1 {
            return Err(ScopeError::ClosedRoot);
        }
        if let Some(scope) = self.stack.pop() {
            if let Some(marker) = scope.end_marker() {
                sink.push(marker);
            }
        }
        Ok(())
    }

    /// Closes every remaining non-root scope, innermost first. The root scope
    /// stays open and emits no marker; the assembled document is its boundary.
    pub fn finalize(&mut self, sink: &mut Vec<Action>) {
        while self.stack.len() > 1 {
            if let Some(scope) = self.stack.pop() {
                if let Some(marker) = scope.end_marker() {
                    sink.push(marker);
                }
            }
        }
    }
}
