use std::fmt;

use thiserror::Error;

use crate::nodes::{BoxedNode, Node, NodeStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickLimitError {
    #[error("Tree was still NOT_DONE after {0} ticks")]
    StillRunning(usize),
}

/// Runs a tree for one tick, returning the result of the root node's
/// `execute()`. If the root reports SUCCESS or FAILURE, it is reset, which
/// resets the entire tree so the next call starts over from the beginning.
pub fn run<N>(root: &mut N) -> NodeStatus
where
    N: Node + ?Sized,
{
    run_with(root, &mut ())
}

/// Same as [`run`], threading `ctx` through every node that is executed.
pub fn run_with<C, N>(root: &mut N, ctx: &mut C) -> NodeStatus
where
    C: ?Sized,
    N: Node<C> + ?Sized,
{
    let status = root.execute(ctx);

    if status.is_completed() {
        ::log::debug!("[bt_tick]: root returned {status}, resetting tree");
        root.reset();
    }

    status
}

/// Calls [`run_with`] until the tree reports SUCCESS or FAILURE, giving up
/// after `max_ticks` ticks.
///
/// # Errors
///
/// Returns `TickLimitError::StillRunning` if every tick returned NOT_DONE.
/// The tree keeps whatever progress it made; call `reset()` to cancel it.
pub fn run_until_done<C, N>(
    root: &mut N,
    ctx: &mut C,
    max_ticks: usize,
) -> Result<NodeStatus, TickLimitError>
where
    C: ?Sized,
    N: Node<C> + ?Sized,
{
    for _ in 0..max_ticks {
        let status = run_with(&mut *root, &mut *ctx);
        if status.is_completed() {
            return Ok(status);
        }
    }

    Err(TickLimitError::StillRunning(max_ticks))
}

/// Owns the root of a behavior tree.
pub struct BehaviorTree<C: ?Sized = ()> {
    root: BoxedNode<C>,
}

impl<C: ?Sized> BehaviorTree<C> {
    pub fn new(root: BoxedNode<C>) -> BehaviorTree<C> {
        Self { root }
    }

    /// One tick of the tree. See [`run_with`].
    pub fn tick_once(&mut self, ctx: &mut C) -> NodeStatus {
        run_with(&mut self.root, ctx)
    }

    /// See [`run_until_done`].
    pub fn tick_while_not_done(
        &mut self,
        ctx: &mut C,
        max_ticks: usize,
    ) -> Result<NodeStatus, TickLimitError> {
        run_until_done(&mut self.root, ctx, max_ticks)
    }

    /// Abandon any progress and start from the beginning on the next tick.
    pub fn reset(&mut self) {
        ::log::debug!("[bt_tick]: tree reset by caller");
        self.root.reset();
    }
}

impl<C: ?Sized> fmt::Debug for BehaviorTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorTree").finish_non_exhaustive()
    }
}
