//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.
//!
//! # Example
//!
//! ```rust
//! use behavior_tree::builder::*;
//! use behavior_tree::{Behavior, Context, Status};
//!
//! let root = tree(vec![selector(vec![
//!     sequence(vec![
//!         condition(action(|_| Status::Failure)),
//!         println("never printed"),
//!     ]),
//!     action(|_| Status::Running),
//! ])]);
//!
//! assert_eq!(root.execute(&Context::background()), Status::Running);
//! ```

use crate::{
    Action, BehaviorTree, BoxedBehavior, Condition, Context, Inverter, Println, Repeat, Selector,
    Sequence, Status,
};

/// Creates a root node.
///
/// Shorthand for `Box::new(BehaviorTree::new(children))`.
#[inline]
pub fn tree(children: Vec<BoxedBehavior>) -> BoxedBehavior {
    Box::new(BehaviorTree::new(children))
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence(children: Vec<BoxedBehavior>) -> BoxedBehavior {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector(children: Vec<BoxedBehavior>) -> BoxedBehavior {
    Box::new(Selector::new(children))
}

/// Creates a condition node.
///
/// Shorthand for `Box::new(Condition::new(child))`.
#[inline]
pub fn condition(child: BoxedBehavior) -> BoxedBehavior {
    Box::new(Condition::new(child))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn invert(child: BoxedBehavior) -> BoxedBehavior {
    Box::new(Inverter::new(child))
}

/// Creates a repeat node.
///
/// Shorthand for `Box::new(Repeat::new(child, times))`.
#[inline]
pub fn repeat(child: BoxedBehavior, times: usize) -> BoxedBehavior {
    Box::new(Repeat::new(child, times))
}

/// Creates a leaf from a closure.
///
/// Shorthand for `Box::new(Action::new(run))`.
#[inline]
pub fn action<F>(run: F) -> BoxedBehavior
where
    F: Fn(&Context<'_>) -> Status + Send + Sync + 'static,
{
    Box::new(Action::new(run))
}

/// Creates a leaf that prints `message` and succeeds.
///
/// Shorthand for `Box::new(Println::new(message))`.
#[inline]
pub fn println(message: impl Into<String>) -> BoxedBehavior {
    Box::new(Println::new(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Behavior;

    #[test]
    fn builders_compose() {
        let root = tree(vec![sequence(vec![
            invert(action(|_| Status::Failure)),
            repeat(action(|_| Status::Failure), 2),
            selector(vec![condition(action(|_| Status::Running)), println("fallback")]),
        ])]);

        assert_eq!(root.execute(&Context::background()), Status::Success);
    }
}
