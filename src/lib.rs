/*!
# bt-tick

A small behavior tree engine that is evaluated incrementally, one tick at a time.
A node may report [`NodeStatus::NotDone`] and be called again on a later tick,
continuing exactly where it left off. Nothing in here blocks, sleeps, or spawns:
an external clock (a game loop, a timer, a control loop) decides when to tick.

## Nodes

Every node implements [`nodes::Node`], which has two methods:

- `execute(&mut self, ctx)` does one tick's worth of work and returns
  `NotDone`, `Success` or `Failure`.
- `reset(&mut self)` returns the node, and everything below it, to its initial state.

The library provides:

- [`nodes::SequenceNode`]: ordered AND. Runs one child per tick, fails on the first failure.
- [`nodes::SelectorNode`]: ordered OR. Runs one child per tick, succeeds on the first success.
- [`nodes::LeafNode`]: turns a closure into a node. This is where your own logic goes.

## Context

`Node<C>` is generic over a context type `C` that the caller owns and passes into
every tick. The context is handed unchanged to every node that runs, so leaves can
read and mutate shared state without capturing it. Trees that don't need one use
the default, `()`.

## Ticking

[`run`] / [`run_with`] execute the root once. When the root finishes (`Success` or
`Failure`) the whole tree is reset, so the next call starts over.

```rust
use bt_tick::{builder::{leaf, sequence}, run_with, NodeStatus};

struct Counter {
    value: u32,
}

// Count to 3, then to 5.
let count_to = |target: u32| {
    leaf(move |ctx: &mut Counter| {
        ctx.value += 1;
        if ctx.value >= target {
            NodeStatus::Success
        } else {
            NodeStatus::NotDone
        }
    })
};

let mut tree = sequence(vec![count_to(3), count_to(5)]);
let mut counter = Counter { value: 0 };

let mut ticks = 1;
while run_with(&mut tree, &mut counter) == NodeStatus::NotDone {
    ticks += 1;
}

assert_eq!(counter.value, 5);
assert_eq!(ticks, 5);
```
*/

pub mod basic_types;
pub mod builder;
pub mod nodes;
pub mod tree;

// Re-exports for convenience
pub use basic_types::NodeStatus;
pub use nodes::{BoxedNode, Node};
pub use tree::{run, run_until_done, run_with, BehaviorTree, TickLimitError};
