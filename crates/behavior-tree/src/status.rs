//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every node resolves to exactly one of these values per tick. There is no
/// error channel: a leaf that cannot do its job reports [`Status::Failure`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Uninitialized result.
    ///
    /// Well-formed nodes never return this on purpose. It surfaces from
    /// degenerate trees (a root with no children) and should be treated as a
    /// configuration smell.
    #[default]
    Invalid,

    /// The behavior has not finished and wants to be ticked again.
    ///
    /// The engine keeps no continuation: the next tick re-evaluates the tree
    /// from the root.
    Running,

    /// The behavior completed successfully.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: the condition was not met.
    /// For actions: the action could not be executed.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Invalid`.
    #[inline]
    pub fn is_invalid(self) -> bool {
        matches!(self, Status::Invalid)
    }

    /// Two-way negation: `Success` becomes `Failure`, anything else becomes
    /// `Success`.
    ///
    /// `Running` and `Invalid` are not preserved; both invert to `Success`.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            _ => Status::Success,
        }
    }
}

impl From<bool> for Status {
    /// `true` maps to `Success`, `false` to `Failure`.
    #[inline]
    fn from(ok: bool) -> Self {
        if ok { Status::Success } else { Status::Failure }
    }
}
