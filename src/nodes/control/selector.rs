use std::fmt;

use crate::nodes::{BoxedNode, Node, NodeStatus};

/// The SelectorNode tries its children in order, one child per tick, until
/// one of them succeeds.
///
/// - If the current child returns NOT_DONE, this node returns NOT_DONE.
///
/// - If the current child returns FAILURE, the cursor moves to the next
///   child and this node returns NOT_DONE, or FAILURE if that was the
///   last child.
///
/// - If the current child returns SUCCESS, this node returns SUCCESS.
///
/// A selector with no children (or one already past its last child) returns
/// FAILURE.
pub struct SelectorNode<C: ?Sized = ()> {
    children: Vec<BoxedNode<C>>,
    cursor: usize,
}

impl<C: ?Sized> SelectorNode<C> {
    pub fn new(children: Vec<BoxedNode<C>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }
}

impl<C: ?Sized> Node<C> for SelectorNode<C> {
    fn reset(&mut self) {
        self.cursor = 0;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn execute(&mut self, ctx: &mut C) -> NodeStatus {
        let Some(child) = self.children.get_mut(self.cursor) else {
            return NodeStatus::Failure;
        };

        match child.execute(ctx) {
            NodeStatus::Failure => {
                self.cursor += 1;
                if self.cursor < self.children.len() {
                    ::log::trace!("[bt_tick]: selector falling back to child {}", self.cursor);
                    NodeStatus::NotDone
                } else {
                    ::log::trace!("[bt_tick]: selector exhausted all {} children", self.cursor);
                    NodeStatus::Failure
                }
            }
            NodeStatus::Success => {
                ::log::trace!("[bt_tick]: selector child {} succeeded", self.cursor);
                NodeStatus::Success
            }
            NodeStatus::NotDone => NodeStatus::NotDone,
        }
    }
}

impl<C: ?Sized> fmt::Debug for SelectorNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorNode")
            .field("children", &self.children.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
