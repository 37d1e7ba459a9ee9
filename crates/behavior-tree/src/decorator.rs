//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`Condition`] (IF), [`Inverter`] (NOT) and [`Repeat`].

use crate::{Behavior, BoxedBehavior, Context, Status};

/// Gates on its child's result, collapsing it to two values.
///
/// # Semantics
///
/// - If the child returns `Success`, the condition returns `Success`
/// - Anything else (including `Running`) becomes `Failure`
/// - The traced status is the child's own result, so a swallowed `Running`
///   stays visible in the trace
///
/// Leaves often report `Running` while an action is in progress. Wrapping
/// them in a `Condition` keeps that `Running` from leaking out of a gate at
/// the head of a [`Sequence`](crate::Sequence).
pub struct Condition {
    child: BoxedBehavior,
}

impl Condition {
    /// Creates a new condition that gates on the given child behavior.
    pub fn new(child: BoxedBehavior) -> Self {
        Self { child }
    }
}

impl Behavior for Condition {
    fn execute(&self, ctx: &Context<'_>) -> Status {
        ctx.scoped_reporting("Condition", |ctx| {
            let status = self.child.execute(ctx);
            let gated = if status.is_success() {
                Status::Success
            } else {
                Status::Failure
            };
            (gated, status)
        })
    }
}

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - Otherwise the inverter returns `Success`
///
/// This is a two-way negation: a `Running` child also yields `Success`.
pub struct Inverter {
    child: BoxedBehavior,
}

impl Inverter {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: BoxedBehavior) -> Self {
        Self { child }
    }
}

impl Behavior for Inverter {
    fn execute(&self, ctx: &Context<'_>) -> Status {
        ctx.scoped("Invert", |ctx| self.child.execute(ctx).invert())
    }
}

/// Evaluates its child a fixed number of times.
///
/// # Semantics
///
/// - The child is evaluated exactly `times` times, with no early exit
/// - The child's results are ignored and `Repeat` always returns `Success`
/// - The traced status is the child's last result (`Invalid` if `times == 0`)
pub struct Repeat {
    child: BoxedBehavior,
    times: usize,
}

impl Repeat {
    /// Creates a decorator that runs `child` `times` times per tick.
    pub fn new(child: BoxedBehavior, times: usize) -> Self {
        Self { child, times }
    }

    /// Number of evaluations per tick.
    pub fn times(&self) -> usize {
        self.times
    }
}

impl Behavior for Repeat {
    fn execute(&self, ctx: &Context<'_>) -> Status {
        ctx.scoped_reporting("Repeat", |ctx| {
            let mut last = Status::Invalid;
            for _ in 0..self.times {
                last = self.child.execute(ctx);
            }
            (Status::Success, last)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{Action, MemorySink};

    fn always(status: Status) -> BoxedBehavior {
        Box::new(Action::new(move |_| status))
    }

    fn counted(status: Status) -> (BoxedBehavior, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let leaf = Action::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            status
        });
        (Box::new(leaf), calls)
    }

    #[test]
    fn condition_passes_success() {
        let condition = Condition::new(always(Status::Success));
        assert_eq!(condition.execute(&Context::background()), Status::Success);
    }

    #[test]
    fn condition_collapses_failure_and_running() {
        let ctx = Context::background();
        assert_eq!(
            Condition::new(always(Status::Failure)).execute(&ctx),
            Status::Failure
        );
        assert_eq!(
            Condition::new(always(Status::Running)).execute(&ctx),
            Status::Failure
        );
        assert_eq!(
            Condition::new(always(Status::Invalid)).execute(&ctx),
            Status::Failure
        );
    }

    #[test]
    fn condition_traces_child_status() {
        let sink = MemorySink::new();
        let ctx = Context::background().with_tracing(&sink);

        assert_eq!(
            Condition::new(always(Status::Running)).execute(&ctx),
            Status::Failure
        );
        assert_eq!(
            Condition::new(always(Status::Success)).execute(&ctx),
            Status::Success
        );
        assert_eq!(sink.render(), " Condition Running\n Condition Success");
    }

    #[test]
    fn inverter_inverts_success() {
        let inverter = Inverter::new(always(Status::Success));
        assert_eq!(inverter.execute(&Context::background()), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let inverter = Inverter::new(always(Status::Failure));
        assert_eq!(inverter.execute(&Context::background()), Status::Success);
    }

    #[test]
    fn inverter_turns_running_into_success() {
        // Current behavior: negation is two-valued, so an in-progress child
        // reads as "not successful" and inverts to Success.
        let inverter = Inverter::new(always(Status::Running));
        assert_eq!(inverter.execute(&Context::background()), Status::Success);
    }

    #[test]
    fn repeat_runs_child_exactly_n_times() {
        let (child, calls) = counted(Status::Success);
        let repeat = Repeat::new(child, 3);
        assert_eq!(repeat.times(), 3);

        assert_eq!(repeat.execute(&Context::background()), Status::Success);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn repeat_ignores_failures() {
        let (child, calls) = counted(Status::Failure);
        let repeat = Repeat::new(child, 4);

        assert_eq!(repeat.execute(&Context::background()), Status::Success);
        assert_eq!(calls.load(Ordering::SeqCst), 4); // No early exit
    }

    #[test]
    fn repeat_zero_times_never_runs_child() {
        let (child, calls) = counted(Status::Failure);
        let repeat = Repeat::new(child, 0);

        assert_eq!(repeat.execute(&Context::background()), Status::Success);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn repeat_traces_last_child_status() {
        let sink = MemorySink::new();
        let ctx = Context::background().with_tracing(&sink);

        assert_eq!(
            Repeat::new(always(Status::Failure), 2).execute(&ctx),
            Status::Success
        );
        assert_eq!(
            Repeat::new(always(Status::Failure), 0).execute(&ctx),
            Status::Success
        );
        assert_eq!(sink.render(), " Repeat Failure\n Repeat Invalid");
    }
}
