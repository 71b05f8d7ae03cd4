pub use crate::basic_types::NodeStatus;

pub mod action;
pub mod control;

pub use action::LeafNode;
pub use control::{SelectorNode, SequenceNode};

/// A node of a behavior tree, evaluated one tick at a time.
///
/// `C` is the context threaded through every `execute()` call. It is owned by
/// the caller, never by the tree, and is passed unchanged from a parent to the
/// child it delegates to. Trees that don't need shared state use the default
/// `()`.
pub trait Node<C: ?Sized = ()> {
    /// Return the node to its initial, pre-evaluation state. Nodes with
    /// children must reset all of them, whether or not they ran this round.
    ///
    /// Must be idempotent and must not perform domain work.
    fn reset(&mut self);

    /// Advance the node by one tick's worth of work and report its status.
    ///
    /// Must not block. Returning `NodeStatus::NotDone` means the node wants to
    /// be called again on a later tick, continuing where it left off.
    fn execute(&mut self, ctx: &mut C) -> NodeStatus;
}

/// Owned, dynamically dispatched node. Composites store their children as this.
pub type BoxedNode<C = ()> = Box<dyn Node<C>>;

impl<C: ?Sized, N: Node<C> + ?Sized> Node<C> for Box<N> {
    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn execute(&mut self, ctx: &mut C) -> NodeStatus {
        (**self).execute(ctx)
    }
}
