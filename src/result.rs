//! Round and answer outcomes.

use core::fmt;
use core::time::Duration;

/// Value shown when a Numboard round is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealResult {
    /// The built equation evaluated to this value.
    Value(i64),
    /// The equation had an unset operator or could not be evaluated.
    Invalid,
}

impl RevealResult {
    /// Wraps an evaluation, mapping "no result" to [`RevealResult::Invalid`].
    #[must_use]
    pub const fn from_evaluation(value: Option<i64>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Invalid,
        }
    }

    /// Returns the value, if any.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Invalid => None,
        }
    }

    /// Returns the distance to `target`, if the result is valid.
    #[must_use]
    pub const fn distance_to(self, target: u32) -> Option<u64> {
        match self {
            Self::Value(value) => Some(value.abs_diff(target as i64)),
            Self::Invalid => None,
        }
    }
}

impl fmt::Display for RevealResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Invalid => f.write_str("Invalid"),
        }
    }
}

/// How a Single-Player answer was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct and under the fast-answer threshold.
    Fast {
        /// Time taken.
        latency: Duration,
    },
    /// Correct but slow.
    Slow {
        /// Time taken.
        latency: Duration,
    },
    /// Wrong or not a number.
    Wrong,
    /// The question deadline passed.
    TimedOut,
}

impl AnswerOutcome {
    /// Returns whether the session continues after this answer.
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Fast { .. } | Self::Slow { .. })
    }
}
