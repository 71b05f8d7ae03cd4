use std::fmt;

use crate::nodes::{BoxedNode, Node, NodeStatus};

/// The SequenceNode ticks its children in order, one child per tick, and
/// succeeds only if every child succeeds.
///
/// - If the current child returns NOT_DONE, this node returns NOT_DONE.
///   The same child is ticked again next time.
///
/// - If the current child returns SUCCESS, the cursor moves to the next
///   child and this node returns NOT_DONE, or SUCCESS if that was the
///   last child.
///
/// - If the current child returns FAILURE, this node returns FAILURE.
///   The cursor stays put until the node is reset.
///
/// A sequence with no children (or one already past its last child) returns
/// SUCCESS.
pub struct SequenceNode<C: ?Sized = ()> {
    children: Vec<BoxedNode<C>>,
    cursor: usize,
}

impl<C: ?Sized> SequenceNode<C> {
    pub fn new(children: Vec<BoxedNode<C>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }
}

impl<C: ?Sized> Node<C> for SequenceNode<C> {
    fn reset(&mut self) {
        self.cursor = 0;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn execute(&mut self, ctx: &mut C) -> NodeStatus {
        let Some(child) = self.children.get_mut(self.cursor) else {
            return NodeStatus::Success;
        };

        match child.execute(ctx) {
            NodeStatus::Success => {
                self.cursor += 1;
                if self.cursor < self.children.len() {
                    ::log::trace!("[bt_tick]: sequence advanced to child {}", self.cursor);
                    NodeStatus::NotDone
                } else {
                    ::log::trace!("[bt_tick]: sequence finished all {} children", self.cursor);
                    NodeStatus::Success
                }
            }
            NodeStatus::Failure => {
                ::log::trace!("[bt_tick]: sequence child {} failed", self.cursor);
                NodeStatus::Failure
            }
            NodeStatus::NotDone => NodeStatus::NotDone,
        }
    }
}

impl<C: ?Sized> fmt::Debug for SequenceNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceNode")
            .field("children", &self.children.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
