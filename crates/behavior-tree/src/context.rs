//! Execution context threaded through every tick.
//!
//! A [`Context`] carries two optional pieces of state:
//!
//! - a cancellation signal, borrowed from a [`CancellationToken`] owned by the
//!   host loop;
//! - the trace chain, present only when tracing was enabled with
//!   [`Context::with_tracing`].
//!
//! The context is a small `Copy` value. Composite nodes derive a child context
//! for the duration of their own evaluation; nothing outlives the call that
//! created it.

use tokio_util::sync::CancellationToken;

use crate::Status;
use crate::trace::{ROOT_TRACE, Trace, TraceSink};

/// Cancellation-aware evaluation context.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    cancel: Option<&'a CancellationToken>,
    sink: Option<&'a dyn TraceSink>,
    frame: Option<&'a Trace<'a>>,
}

impl<'a> Context<'a> {
    /// A context that is never cancelled and does not trace.
    pub fn background() -> Self {
        Self {
            cancel: None,
            sink: None,
            frame: None,
        }
    }

    /// A context bound to `token`. Tracing is off.
    pub fn new(token: &'a CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..Self::background()
        }
    }

    /// Enables tracing for every evaluation that receives this context.
    ///
    /// The chain is rooted at the `BehaviorTree` frame (level 0). Each
    /// composite or decorator below it adds one level and emits one line to
    /// `sink` once it resolves.
    pub fn with_tracing(self, sink: &'a dyn TraceSink) -> Self {
        Self {
            sink: Some(sink),
            frame: Some(&ROOT_TRACE),
            ..self
        }
    }

    /// Returns `true` once the host has cancelled the token.
    ///
    /// Always `false` for a [`Context::background`] context. Composite nodes
    /// never poll this; long-running leaves should.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(CancellationToken::is_cancelled)
    }

    /// The token this context observes, if any.
    pub fn cancellation_token(&self) -> Option<&'a CancellationToken> {
        self.cancel
    }

    /// Returns `true` if tracing is enabled.
    #[inline]
    pub fn is_tracing(&self) -> bool {
        self.sink.is_some()
    }

    /// The innermost trace frame, if tracing is enabled.
    pub fn trace(&self) -> Option<&'a Trace<'a>> {
        self.frame
    }

    /// Evaluates `f` inside a new trace frame named `description`.
    ///
    /// With tracing off this is a direct call. With tracing on, `f` receives a
    /// context whose frame is one level deeper, and the returned status is
    /// recorded after `f` completes.
    #[inline]
    pub(crate) fn scoped<F>(&self, description: &'static str, f: F) -> Status
    where
        F: FnOnce(&Context<'_>) -> Status,
    {
        self.scoped_reporting(description, |ctx| {
            let status = f(ctx);
            (status, status)
        })
    }

    /// Like [`Context::scoped`], but `f` returns `(returned, reported)` so a
    /// node can trace a status other than the one it hands back.
    pub(crate) fn scoped_reporting<F>(&self, description: &'static str, f: F) -> Status
    where
        F: FnOnce(&Context<'_>) -> (Status, Status),
    {
        let Some(sink) = self.sink else {
            return f(self).0;
        };

        let frame = Trace::child_of(self.frame.unwrap_or(&ROOT_TRACE), description);
        let child = Context {
            cancel: self.cancel,
            sink: self.sink,
            frame: Some(&frame),
        };

        let (status, reported) = f(&child);
        sink.record(&frame, reported);
        status
    }

    /// Records `status` against the current frame without opening a new one.
    pub(crate) fn report(&self, status: Status) {
        if let Some(sink) = self.sink {
            sink.record(self.frame.unwrap_or(&ROOT_TRACE), status);
        }
    }
}

impl Default for Context<'_> {
    fn default() -> Self {
        Self::background()
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("cancelled", &self.is_cancelled())
            .field("tracing", &self.is_tracing())
            .field("frame", &self.frame)
            .finish()
    }
}
