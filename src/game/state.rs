//! Round state types.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use crate::challenge::{Challenge, Difficulty, NormalRoll};
use crate::equation::Equation;
use crate::error::ParseModeError;
use crate::result::{AnswerOutcome, RevealResult};
use crate::room::RoomCode;
use crate::timer::TimerToken;

/// Game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Everyone solves the same roll; the slowest drinks.
    Normal,
    /// Dice are rolled one at a time into a fixed equation.
    CountDice,
    /// Players build their own equation towards a target.
    Numboard,
    /// A timed question streak for one player.
    SinglePlayer,
}

impl Mode {
    /// Returns the short name used by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::CountDice => "count",
            Self::Numboard => "numboard",
            Self::SinglePlayer => "single",
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(Self::Normal),
            "count" | "count-dice" => Ok(Self::CountDice),
            "numboard" => Ok(Self::Numboard),
            "single" | "single-player" => Ok(Self::SinglePlayer),
            _ => Err(ParseModeError),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No mode selected.
    #[default]
    Idle,
    /// Mode selected, waiting for the round to start.
    Setup,
    /// Numboard: the clock is running and the equation can be edited.
    Thinking,
    /// Numboard: time is up, waiting for the reveal.
    Locked,
    /// Numboard and Normal: the result is on show.
    Reveal,
    /// Count-Dice: rolling dice one at a time.
    CollectingDice,
    /// Count-Dice: all dice rolled, the countdown is running.
    Countdown,
    /// Count-Dice: the countdown ran out.
    Ended,
    /// Single-Player: a question is waiting for an answer.
    Question,
    /// Single-Player: the streak is over.
    GameOver,
}

/// Single-Player streak state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinglePlayerSession {
    /// Difficulty for the whole session.
    pub difficulty: Difficulty,
    /// Current level, starting at 1.
    pub level: u32,
    /// Current combo streak.
    pub combo: u32,
    /// Highest combo reached this session.
    pub best_combo: u32,
    /// The open question, if any.
    pub challenge: Option<Challenge>,
    /// How the last answer was judged.
    pub last_outcome: Option<AnswerOutcome>,
}

impl SinglePlayerSession {
    /// Creates a session that has not started yet.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            level: 1,
            combo: 0,
            best_combo: 0,
            challenge: None,
            last_outcome: None,
        }
    }
}

/// The state of one round.
///
/// A round is replaced wholesale on every transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Round {
    /// Selected mode, `None` while idle.
    pub mode: Option<Mode>,
    /// Current phase.
    pub phase: Phase,
    /// Value the equation should hit, for Numboard and Count-Dice.
    pub target: Option<u32>,
    /// The equation built or rolled so far.
    pub equation: Equation,
    /// Numboard result once revealed.
    pub result: Option<RevealResult>,
    /// Normal-mode roll.
    pub normal_roll: Option<NormalRoll>,
    /// Single-Player session.
    pub single_player: Option<SinglePlayerSession>,
}

impl Round {
    /// Creates a fresh round in `phase` for `mode`.
    #[must_use]
    pub const fn new(mode: Mode, phase: Phase) -> Self {
        Self {
            mode: Some(mode),
            phase,
            target: None,
            equation: Equation::new(),
            result: None,
            normal_roll: None,
            single_player: None,
        }
    }

    /// Returns whether the round is in `mode` and one of `phases`.
    #[must_use]
    pub fn is_in(&self, mode: Mode, phases: &[Phase]) -> bool {
        self.mode == Some(mode) && phases.contains(&self.phase)
    }
}

/// What the presentation layer receives after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// The cosmetic room code.
    pub room_code: RoomCode,
    /// The round state.
    pub round: Round,
    /// Token of the running timer; pass it back to [`Game::tick`](super::Game::tick).
    pub timer: Option<TimerToken>,
    /// Time left on the running timer.
    pub time_remaining: Option<Duration>,
}

impl Snapshot {
    /// Returns the mode.
    #[must_use]
    pub const fn mode(&self) -> Option<Mode> {
        self.round.mode
    }

    /// Returns the phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.round.phase
    }

    /// Returns the time left in whole seconds, rounded up.
    #[must_use]
    pub fn seconds_remaining(&self) -> Option<u64> {
        self.time_remaining.map(|remaining| {
            let secs = remaining.as_secs();
            if remaining.subsec_nanos() > 0 {
                secs + 1
            } else {
                secs
            }
        })
    }
}
