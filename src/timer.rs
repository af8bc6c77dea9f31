//! The cancellable round timer.
//!
//! The engine has no clock of its own. The presentation layer drives the
//! active timer with [`TimerSlot::advance`] and passes back the token it was
//! given when the timer started. Starting a new timer replaces the old one,
//! so ticks that still carry an old token are ignored.

use core::time::Duration;

/// Length of one countdown tick.
pub const TICK: Duration = Duration::from_secs(1);

/// Identifies one started timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Returns the raw token value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Rebuilds a token from its raw value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }
}

/// What a timer is counting down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Numboard thinking time.
    Thinking,
    /// Pause between locking and revealing a Numboard round.
    RevealDelay,
    /// Count-Dice countdown after the last die.
    CountDice,
    /// Single-Player question deadline.
    Question,
}

/// A running timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    token: TimerToken,
    kind: TimerKind,
    remaining: Duration,
    elapsed: Duration,
}

impl Timer {
    /// Returns the token.
    #[must_use]
    pub const fn token(&self) -> TimerToken {
        self.token
    }

    /// Returns the kind.
    #[must_use]
    pub const fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Returns the time left.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Returns the time since the timer started.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Result of advancing the timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The token does not belong to the active timer.
    Stale,
    /// The timer is still running.
    Running {
        /// Time left.
        remaining: Duration,
    },
    /// The timer ran out and was removed from the slot.
    Expired {
        /// What the timer was counting down to.
        kind: TimerKind,
    },
}

/// Holds at most one active timer.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    active: Option<Timer>,
    next_token: u64,
}

impl TimerSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: None,
            next_token: 0,
        }
    }

    /// Starts a timer, cancelling whatever was running.
    pub fn start(&mut self, kind: TimerKind, duration: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.active = Some(Timer {
            token,
            kind,
            remaining: duration,
            elapsed: Duration::ZERO,
        });
        token
    }

    /// Cancels the active timer, returning it.
    pub fn cancel(&mut self) -> Option<Timer> {
        self.active.take()
    }

    /// Returns the active timer.
    #[must_use]
    pub const fn active(&self) -> Option<&Timer> {
        self.active.as_ref()
    }

    /// Advances the timer identified by `token` by `elapsed`.
    pub fn advance(&mut self, token: TimerToken, elapsed: Duration) -> TickOutcome {
        let Some(timer) = self.active.as_mut().filter(|timer| timer.token == token) else {
            return TickOutcome::Stale;
        };

        timer.elapsed = timer.elapsed.saturating_add(elapsed);
        timer.remaining = timer.remaining.saturating_sub(elapsed);

        if timer.remaining.is_zero() {
            let kind = timer.kind;
            self.active = None;
            TickOutcome::Expired { kind }
        } else {
            TickOutcome::Running {
                remaining: timer.remaining,
            }
        }
    }
}
