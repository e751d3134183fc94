use super::FlowBuilder;
use crate::codec::Param;
use crate::error::BuildError;
use crate::flow::{BlockId, Comparison};

/// Operands and comparison kind for a conditional block.
#[derive(Debug, Clone)]
pub struct Condition {
    pub lhs: Param,
    pub comparison: Comparison,
    pub rhs: Param,
}

impl Condition {
    pub fn new(lhs: impl Into<Param>, comparison: Comparison, rhs: impl Into<Param>) -> Self {
        Self {
            lhs: lhs.into(),
            comparison,
            rhs: rhs.into(),
        }
    }
}

/// Handle returned by [`FlowBuilder::if_block`], keeping the condition scope
/// open so `else_if` / `else_branch` can extend it.
///
/// The scope closes when the chain is consumed by [`IfChain::else_branch`] or
/// [`IfChain::end`], or when the handle is dropped — so a bare
/// `flow.if_block(..)?;` statement emits its `endif` before the next action
/// is appended. `else_if` lowers to a nested if/else inside the open else
/// branch; the target format has no native elseif, and the tracker's unwind
/// emits the nested end-markers innermost-first.
#[must_use = "dropping the chain closes the block immediately; call else_branch/end to extend it"]
pub struct IfChain<'a> {
    flow: Option<&'a mut FlowBuilder>,
    block: BlockId,
}

impl<'a> IfChain<'a> {
    pub(crate) fn new(flow: &'a mut FlowBuilder, block: BlockId) -> Self {
        Self {
            flow: Some(flow),
            block,
        }
    }

    /// Identifier shared by this chain's if/else/endif markers.
    pub fn block_id(&self) -> &BlockId {
        &self.block
    }

    /// Opens a further conditional inside the current else branch.
    pub fn else_if<F>(mut self, condition: Condition, then_scope: F) -> Result<IfChain<'a>, BuildError>
    where
        F: FnOnce(&mut FlowBuilder) -> Result<(), BuildError>,
    {
        let flow = self.take_flow();
        flow.begin_if(condition, then_scope)?;
        Ok(IfChain::new(flow, self.block.clone()))
    }

    /// Populates the else branch and closes the whole chain.
    pub fn else_branch<F>(mut self, else_scope: F) -> Result<(), BuildError>
    where
        F: FnOnce(&mut FlowBuilder) -> Result<(), BuildError>,
    {
        let flow = self.take_flow();
        else_scope(flow)?;
        flow.close_scope(&self.block)?;
        Ok(())
    }

    /// Closes the chain with an empty else branch.
    pub fn end(mut self) -> Result<(), BuildError> {
        let flow = self.take_flow();
        flow.close_scope(&self.block)?;
        Ok(())
    }

    fn take_flow(&mut self) -> &'a mut FlowBuilder {
        match self.flow.take() {
            Some(flow) => flow,
            // Only the consuming methods and drop take the builder back.
            None => unreachable!("if-chain consumed twice"),
        }
    }
}

impl Drop for IfChain<'_> {
    fn drop(&mut self) {
        if let Some(flow) = self.flow.take() {
            // The chain's block is still on the stack unless builder
            // internals are broken, so the result is asserted, not returned.
            let closed = flow.close_scope(&self.block);
            debug_assert!(closed.is_ok(), "if-chain block missing from scope stack");
        }
    }
}
