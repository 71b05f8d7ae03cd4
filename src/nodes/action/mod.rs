use std::{fmt, marker::PhantomData};

use super::{Node, NodeStatus};

/// Adapts a step function into a leaf node.
///
/// The step function is called once per `execute()` with the threaded context
/// and its result is returned unchanged. `reset()` does nothing: a leaf has no
/// cursor of its own, so any progress it keeps lives in the closure's captured
/// state or in the context.
pub struct LeafNode<C: ?Sized, F> {
    step: F,
    _context: PhantomData<fn(&mut C)>,
}

impl<C, F> LeafNode<C, F>
where
    C: ?Sized,
    F: FnMut(&mut C) -> NodeStatus,
{
    pub fn new(step: F) -> Self {
        Self {
            step,
            _context: PhantomData,
        }
    }
}

impl<C, F> Node<C> for LeafNode<C, F>
where
    C: ?Sized,
    F: FnMut(&mut C) -> NodeStatus,
{
    fn reset(&mut self) {}

    #[inline]
    fn execute(&mut self, ctx: &mut C) -> NodeStatus {
        (self.step)(ctx)
    }
}

impl<C: ?Sized, F> fmt::Debug for LeafNode<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafNode").finish_non_exhaustive()
    }
}
