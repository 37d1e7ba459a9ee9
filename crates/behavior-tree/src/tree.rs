//! Root node.

use crate::{Behavior, BoxedBehavior, Context, Status};

/// Entry point of a behavior tree.
///
/// # Semantics
///
/// - Every top-level child is evaluated in order; the root itself never
///   short-circuits
/// - The status of the last child is returned
/// - With no children the result is `Status::Invalid`, which callers should
///   treat as a configuration error
///
/// When tracing is enabled the root reports at the `BehaviorTree` frame
/// (level 0) rather than opening a frame of its own.
pub struct BehaviorTree {
    children: Vec<BoxedBehavior>,
}

impl BehaviorTree {
    pub fn new(children: Vec<BoxedBehavior>) -> Self {
        Self { children }
    }

    /// Returns `true` if the tree has no top-level children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Behavior for BehaviorTree {
    fn execute(&self, ctx: &Context<'_>) -> Status {
        let mut status = Status::Invalid;
        for child in &self.children {
            status = child.execute(ctx);
        }
        ctx.report(status);
        status
    }
}
