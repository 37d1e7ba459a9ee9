//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes, and the [`Action`] adapter that
//! turns a plain closure into a node.

use std::fmt;
use std::sync::Arc;

use crate::{Context, Status};

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior: Send + Sync {
    /// Evaluate this behavior once.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Execution context carrying the cancellation signal and, when
    ///   enabled, the trace chain. Composite nodes pass it (or a derived
    ///   context) down to their children unchanged in meaning.
    ///
    /// # Returns
    ///
    /// Exactly one [`Status`]. Failure is reported as `Status::Failure`, never
    /// by panicking.
    fn execute(&self, ctx: &Context<'_>) -> Status;
}

/// Owned, type-erased behavior node.
pub type BoxedBehavior = Box<dyn Behavior>;

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior>` to also implement `Behavior`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl Behavior for Box<dyn Behavior> {
    #[inline]
    fn execute(&self, ctx: &Context<'_>) -> Status {
        (**self).execute(ctx)
    }
}

/// Shared subtrees: the same node may appear under several parents.
impl<B> Behavior for Arc<B>
where
    B: Behavior + ?Sized,
{
    #[inline]
    fn execute(&self, ctx: &Context<'_>) -> Status {
        (**self).execute(ctx)
    }
}

/// Adapts a closure into a [`Behavior`].
///
/// This is how domain logic enters the tree. Any state the leaf needs
/// (counters, handles to the world) is captured by the closure; the engine
/// never owns it.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Behavior, Context, Status};
///
/// let is_player_visible = Action::new(|_ctx| Status::Failure);
/// assert_eq!(is_player_visible.execute(&Context::background()), Status::Failure);
/// ```
pub struct Action<F> {
    run: F,
}

impl<F> Action<F>
where
    F: Fn(&Context<'_>) -> Status + Send + Sync,
{
    /// Wraps `run` so it can be placed in a tree.
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F> Behavior for Action<F>
where
    F: Fn(&Context<'_>) -> Status + Send + Sync,
{
    #[inline]
    fn execute(&self, ctx: &Context<'_>) -> Status {
        (self.run)(ctx)
    }
}

impl<F> fmt::Debug for Action<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn action_forwards_to_closure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let action = Action::new(move |_ctx| {
            counter.fetch_add(1, Ordering::SeqCst);
            Status::Running
        });

        let ctx = Context::background();
        assert_eq!(action.execute(&ctx), Status::Running);
        assert_eq!(action.execute(&ctx), Status::Running);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn action_sees_the_context() {
        let token = tokio_util::sync::CancellationToken::new();
        let action = Action::new(|ctx| Status::from(!ctx.is_cancelled()));

        assert_eq!(action.execute(&Context::new(&token)), Status::Success);
        token.cancel();
        assert_eq!(action.execute(&Context::new(&token)), Status::Failure);
    }

    #[test]
    fn boxed_and_shared_nodes_dispatch() {
        let boxed: BoxedBehavior = Box::new(Action::new(|_| Status::Success));
        let shared: Arc<dyn Behavior> = Arc::new(Action::new(|_| Status::Failure));

        let ctx = Context::background();
        assert_eq!(boxed.execute(&ctx), Status::Success);
        assert_eq!(shared.execute(&ctx), Status::Failure);
    }
}
