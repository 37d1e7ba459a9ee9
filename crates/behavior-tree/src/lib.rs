//! Composable behavior tree evaluation engine.
//!
//! Small decision and action units are nested into a tree that the host
//! re-evaluates ("ticks") to drive agent logic, without writing a state
//! machine per agent.
//!
//! - **Four-valued status**: `Invalid`, `Running`, `Success`, `Failure`
//! - **Stateless composites**: tree shape is fixed at construction; any
//!   mutable state belongs to the leaf closures
//! - **No engine-held continuation**: `Running` means "tick me again", and the
//!   next tick starts over from the root
//! - **Opt-in tracing**: a context flag prints one indented line per
//!   composite/decorator without changing results
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes; [`Action`] adapts closures
//! - [`Status`]: Result of one evaluation
//! - [`Context`]: Cancellation signal plus optional trace chain
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Condition`], [`Inverter`], [`Repeat`]
//! - Root: [`BehaviorTree`]
//! - Tracing: [`Trace`], [`TraceSink`] and its implementations
//!
//! # Example
//!
//! ```rust
//! use behavior_tree::builder::*;
//! use behavior_tree::{Behavior, Context, MemorySink, Status};
//!
//! let root = tree(vec![sequence(vec![
//!     condition(action(|_| Status::Success)),
//!     repeat(action(|_| Status::Success), 3),
//! ])]);
//!
//! let sink = MemorySink::new();
//! let status = root.execute(&Context::background().with_tracing(&sink));
//!
//! assert_eq!(status, Status::Success);
//! assert_eq!(
//!     sink.render(),
//!     "  Condition Success\n  Repeat Success\n Sequence Success\nBehaviorTree Success"
//! );
//! ```

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod context;
pub mod decorator;
pub mod leaf;
pub mod status;
pub mod trace;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Action, Behavior, BoxedBehavior};
pub use composite::{Selector, Sequence};
pub use context::Context;
pub use decorator::{Condition, Inverter, Repeat};
pub use leaf::Println;
pub use status::Status;
pub use trace::{MemorySink, StdoutSink, Trace, TraceLine, TraceSink, TracingSink};
pub use tree::BehaviorTree;
pub use tokio_util::sync::CancellationToken;
