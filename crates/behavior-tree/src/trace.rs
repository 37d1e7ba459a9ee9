//! Execution tracing.
//!
//! Tracing is an observation-only overlay. When a [`Context`](crate::Context)
//! is created with tracing enabled, every composite and decorator opens a
//! [`Trace`] frame one level below its parent's, evaluates its children, and
//! reports its resolved status to a [`TraceSink`]. Frames live on the stack of
//! the node that created them and are gone once the tick returns.
//!
//! Lines are emitted when a node resolves, so children appear before their
//! parents:
//!
//! ```text
//!   Condition Failure
//!  Sequence Failure
//!  Sequence Success
//! BehaviorTree Success
//! ```

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::Status;

/// Root frame installed by [`Context::with_tracing`](crate::Context::with_tracing).
pub(crate) static ROOT_TRACE: Trace<'static> = Trace::root();

/// One link in the trace chain.
///
/// The parent reference is used for level bookkeeping and inspection during
/// the tick only.
#[derive(Debug, Clone, Copy)]
pub struct Trace<'a> {
    description: &'static str,
    level: usize,
    parent: Option<&'a Trace<'a>>,
}

impl Trace<'static> {
    /// The `BehaviorTree` frame at level 0.
    pub const fn root() -> Self {
        Self {
            description: "BehaviorTree",
            level: 0,
            parent: None,
        }
    }
}

impl<'a> Trace<'a> {
    /// Creates a frame nested one level below `parent`.
    pub fn child_of(parent: &'a Trace<'a>, description: &'static str) -> Self {
        Self {
            description,
            level: parent.level + 1,
            parent: Some(parent),
        }
    }

    /// Name of the node that opened this frame.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Nesting depth; the root is 0.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Enclosing frame; `None` for the root.
    pub fn parent(&self) -> Option<&'a Trace<'a>> {
        self.parent
    }
}

/// Indentation (one space per level) followed by the description.
impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.description, indent = self.level)
    }
}

/// Destination for trace output.
pub trait TraceSink: Send + Sync {
    /// Called once per traced node after it resolves.
    fn record(&self, frame: &Trace<'_>, status: Status);
}

/// Prints each trace line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn record(&self, frame: &Trace<'_>, status: Status) {
        println!("{frame} {status}");
    }
}

/// Forwards trace lines to the `tracing` ecosystem as `DEBUG` events on the
/// `behavior_tree::trace` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, frame: &Trace<'_>, status: Status) {
        tracing::debug!(
            target: "behavior_tree::trace",
            depth = frame.level(),
            node = frame.description(),
            status = status.as_ref(),
            "{frame} {status}"
        );
    }
}

/// A recorded trace line, detached from the tick that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine {
    pub level: usize,
    pub description: &'static str,
    pub status: Status,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:indent$}{} {}",
            "",
            self.description,
            self.status,
            indent = self.level
        )
    }
}

/// Collects trace lines in memory.
///
/// Useful for tests and for hosts that want to inspect what a tick did.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<TraceLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines recorded so far.
    pub fn lines(&self) -> Vec<TraceLine> {
        self.guard().clone()
    }

    /// Drains the recorded lines, leaving the sink empty for the next tick.
    pub fn take(&self) -> Vec<TraceLine> {
        std::mem::take(&mut *self.guard())
    }

    /// Renders the recorded lines exactly as [`StdoutSink`] would print them.
    pub fn render(&self) -> String {
        self.guard()
            .iter()
            .map(TraceLine::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn guard(&self) -> MutexGuard<'_, Vec<TraceLine>> {
        // A panicking leaf must not make the trace unreadable.
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TraceSink for MemorySink {
    fn record(&self, frame: &Trace<'_>, status: Status) {
        self.guard().push(TraceLine {
            level: frame.level(),
            description: frame.description(),
            status,
        });
    }
}
