//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both short-circuit. Children commonly perform actions rather than pure
//! checks, so siblings after the deciding child are never evaluated.

use crate::{Behavior, BoxedBehavior, Context, Status};

/// Executes child behaviors in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - Any other status (`Failure`, `Running`, `Invalid`) **stops** the sequence
///   and is returned as-is
/// - If all children return `Success`, the sequence returns `Success`
///
/// An empty sequence succeeds. This is analogous to a short-circuited
/// logical AND (&&) operation.
pub struct Sequence {
    children: Vec<BoxedBehavior>,
}

impl Sequence {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<BoxedBehavior>) -> Self {
        Self { children }
    }
}

impl Behavior for Sequence {
    fn execute(&self, ctx: &Context<'_>) -> Status {
        ctx.scoped("Sequence", |ctx| {
            for child in &self.children {
                let status = child.execute(ctx);
                if !status.is_success() {
                    return status; // Short-circuit
                }
            }
            Status::Success
        })
    }
}

/// Executes child behaviors in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - Any other status (`Success`, `Running`, `Invalid`) **stops** the selector
///   and is returned as-is
/// - If all children return `Failure`, the selector returns `Failure`
///
/// An empty selector fails. This is analogous to a short-circuited
/// logical OR (||) operation.
pub struct Selector {
    children: Vec<BoxedBehavior>,
}

impl Selector {
    /// Creates a new selector with the given child behaviors.
    pub fn new(children: Vec<BoxedBehavior>) -> Self {
        Self { children }
    }
}

impl Behavior for Selector {
    fn execute(&self, ctx: &Context<'_>) -> Status {
        ctx.scoped("Selector", |ctx| {
            for child in &self.children {
                let status = child.execute(ctx);
                if !status.is_failure() {
                    return status; // Short-circuit
                }
            }
            Status::Failure
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};

    use super::*;
    use crate::Action;

    /// Shared counter standing in for world state mutated by leaves.
    #[derive(Clone, Default)]
    struct Value(Arc<AtomicI32>);

    impl Value {
        fn get(&self) -> i32 {
            self.0.load(Ordering::SeqCst)
        }

        fn add(&self, status: Status, delta: i32) -> BoxedBehavior {
            let value = self.clone();
            Box::new(Action::new(move |_| {
                value.0.fetch_add(delta, Ordering::SeqCst);
                status
            }))
        }

        fn increment(&self) -> BoxedBehavior {
            self.add(Status::Success, 1)
        }

        fn decrement(&self) -> BoxedBehavior {
            self.add(Status::Success, -1)
        }
    }

    fn always(status: Status) -> BoxedBehavior {
        Box::new(Action::new(move |_| status))
    }

    #[test]
    fn sequence_all_success() {
        let value = Value::default();
        let seq = Sequence::new(vec![value.increment(), value.increment()]);

        assert_eq!(seq.execute(&Context::background()), Status::Success);
        assert_eq!(value.get(), 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let value = Value::default();
        let seq = Sequence::new(vec![
            value.increment(),
            always(Status::Failure),
            value.increment(), // Should not execute
        ]);

        assert_eq!(seq.execute(&Context::background()), Status::Failure);
        assert_eq!(value.get(), 1); // Only first increment executed
    }

    #[test]
    fn sequence_returns_running_as_is() {
        let value = Value::default();
        let seq = Sequence::new(vec![always(Status::Running), value.increment()]);

        assert_eq!(seq.execute(&Context::background()), Status::Running);
        assert_eq!(value.get(), 0);
    }

    #[test]
    fn empty_sequence_succeeds() {
        assert_eq!(
            Sequence::new(Vec::new()).execute(&Context::background()),
            Status::Success
        );
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let value = Value::default();
        let sel = Selector::new(vec![
            always(Status::Failure),
            value.increment(),
            value.decrement(), // Should not execute
        ]);

        assert_eq!(sel.execute(&Context::background()), Status::Success);
        assert_eq!(value.get(), 1); // Only increment executed
    }

    #[test]
    fn selector_returns_running_as_is() {
        let value = Value::default();
        let sel = Selector::new(vec![
            always(Status::Failure),
            always(Status::Running),
            value.increment(),
        ]);

        assert_eq!(sel.execute(&Context::background()), Status::Running);
        assert_eq!(value.get(), 0);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let value = Value::default();
        let sel = Selector::new(vec![
            value.add(Status::Failure, 1),
            value.add(Status::Failure, 1),
        ]);

        assert_eq!(sel.execute(&Context::background()), Status::Failure);
        assert_eq!(value.get(), 2); // Every child was tried
    }

    #[test]
    fn empty_selector_fails() {
        assert_eq!(
            Selector::new(Vec::new()).execute(&Context::background()),
            Status::Failure
        );
    }
}
