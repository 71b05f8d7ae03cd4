//! Shorthands for building trees out of boxed nodes.
//!
//! Instead of `Box::new(SequenceNode::new(vec![...]))` write
//! `sequence(vec![...])`.

use crate::nodes::{BoxedNode, LeafNode, NodeStatus, SelectorNode, SequenceNode};

/// Creates a boxed sequence node.
#[inline]
pub fn sequence<C: ?Sized + 'static>(children: Vec<BoxedNode<C>>) -> BoxedNode<C> {
    Box::new(SequenceNode::new(children))
}

/// Creates a boxed selector node.
#[inline]
pub fn selector<C: ?Sized + 'static>(children: Vec<BoxedNode<C>>) -> BoxedNode<C> {
    Box::new(SelectorNode::new(children))
}

/// Creates a boxed leaf from a step function that receives the context.
#[inline]
pub fn leaf<C, F>(step: F) -> BoxedNode<C>
where
    C: ?Sized + 'static,
    F: FnMut(&mut C) -> NodeStatus + 'static,
{
    Box::new(LeafNode::new(step))
}

/// Creates a boxed leaf from a step function that doesn't look at the
/// context. Usable in a tree with any context type.
#[inline]
pub fn action<C, F>(mut step: F) -> BoxedNode<C>
where
    C: ?Sized + 'static,
    F: FnMut() -> NodeStatus + 'static,
{
    Box::new(LeafNode::new(move |_: &mut C| step()))
}
