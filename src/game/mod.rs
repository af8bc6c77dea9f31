//! Game controller and round flow.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;
use core::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::error::OptionsError;
use crate::options::GameOptions;
use crate::room::RoomCode;
use crate::sync::Mutex;
use crate::timer::{TICK, TickOutcome, TimerKind, TimerSlot, TimerToken};

mod count_dice;
mod normal;
mod numboard;
mod single_player;
pub mod state;

pub use state::{Mode, Phase, Round, SinglePlayerSession, Snapshot};

/// Receives a [`Snapshot`] after every transition.
///
/// Observers may send intents back to the game. A snapshot produced by such
/// an intent reaches every observer before the outer notification finishes.
pub trait Observer {
    /// Called with the state after a transition.
    fn on_snapshot(&self, snapshot: &Snapshot);
}

impl<F: Fn(&Snapshot)> Observer for F {
    fn on_snapshot(&self, snapshot: &Snapshot) {
        self(snapshot);
    }
}

/// The round controller shared by every mode.
///
/// The game owns the current [`Round`], the single round timer and the RNG.
/// The presentation layer sends intents (select a mode, add a die, submit an
/// answer, ...) and drives time with [`Game::tick`]. Intents that do not fit
/// the current phase are ignored and return `None`.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The current round.
    pub round: Mutex<Round>,
    /// The round timer.
    pub timer: Mutex<TimerSlot>,
    /// Cosmetic room code.
    room_code: RoomCode,
    /// Subscribed observers.
    observers: Mutex<Vec<Arc<dyn Observer>>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new idle game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use alcoroll::{Game, GameOptions, Mode, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// let snapshot = game.select_mode(Mode::Numboard);
    /// assert_eq!(snapshot.phase(), Phase::Setup);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let room_code = RoomCode::random(&mut rng);
        debug!(seed, room = room_code.as_str(), "game created");

        Ok(Self {
            options,
            round: Mutex::new(Round::default()),
            timer: Mutex::new(TimerSlot::new()),
            room_code,
            observers: Mutex::new(Vec::new()),
            rng: Mutex::new(rng),
        })
    }

    /// Returns the room code.
    pub const fn room_code(&self) -> RoomCode {
        self.room_code
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Option<Mode> {
        self.round.lock().mode
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.round.lock().phase
    }

    /// Registers an observer for every future snapshot.
    pub fn subscribe<O: Observer + 'static>(&self, observer: O) {
        self.observers.lock().push(Arc::new(observer));
    }

    /// Returns the current state without notifying observers.
    pub fn snapshot(&self) -> Snapshot {
        let round = self.round.cloned();
        let timer = self.timer.lock().active().copied();
        Snapshot {
            room_code: self.room_code,
            round,
            timer: timer.map(|timer| timer.token()),
            time_remaining: timer.map(|timer| timer.remaining()),
        }
    }

    /// Selects a mode, discarding the current round and its timer.
    ///
    /// Numboard and Count-Dice draw a target straight away.
    pub fn select_mode(&self, mode: Mode) -> Snapshot {
        self.timer.lock().cancel();
        let round = match mode {
            Mode::Normal => Round::new(Mode::Normal, Phase::Setup),
            Mode::CountDice => self.count_dice_round(),
            Mode::Numboard => self.numboard_round(),
            Mode::SinglePlayer => self.single_player_round(),
        };
        let previous = self.round.replace(round);
        debug!(from = ?previous.mode, to = %mode, "mode selected");
        self.emit()
    }

    /// Returns to the idle state, cancelling any timer.
    pub fn reset(&self) -> Snapshot {
        self.timer.lock().cancel();
        self.round.replace(Round::default());
        debug!("game reset");
        self.emit()
    }

    /// Starts the round: Numboard thinking time or a Single-Player session.
    pub fn start_round(&self) -> Option<Snapshot> {
        match self.mode()? {
            Mode::Numboard => self.start_thinking(),
            Mode::SinglePlayer => self.start_session(),
            Mode::Normal | Mode::CountDice => self.ignored("start_round"),
        }
    }

    /// Rolls the next dice in Normal and Count-Dice.
    pub fn roll_next(&self) -> Option<Snapshot> {
        match self.mode()? {
            Mode::Normal => self.roll_normal(),
            Mode::CountDice => self.roll_count_die(),
            Mode::Numboard | Mode::SinglePlayer => self.ignored("roll_next"),
        }
    }

    /// Moves a finished round back to its starting phase with a new target.
    pub fn next_round(&self) -> Option<Snapshot> {
        match self.mode()? {
            Mode::Normal => self.next_normal(),
            Mode::CountDice => self.next_count_dice(),
            Mode::Numboard => self.next_numboard(),
            Mode::SinglePlayer => self.ignored("next_round"),
        }
    }

    /// Advances the running timer by one [`TICK`].
    pub fn tick(&self, token: TimerToken) -> Option<Snapshot> {
        self.advance(token, TICK)
    }

    /// Advances the running timer by `elapsed`.
    ///
    /// Returns `None` if `token` belongs to a timer that has been cancelled
    /// or replaced.
    pub fn advance(&self, token: TimerToken, elapsed: Duration) -> Option<Snapshot> {
        let outcome = self.timer.lock().advance(token, elapsed);
        match outcome {
            TickOutcome::Stale => {
                trace!(token = token.get(), "stale tick ignored");
                None
            }
            TickOutcome::Running { remaining } => {
                trace!(token = token.get(), ?remaining, "tick");
                Some(self.emit())
            }
            TickOutcome::Expired { kind } => {
                debug!(token = token.get(), ?kind, "timer expired");
                match kind {
                    TimerKind::Thinking => self.lock_equation(),
                    TimerKind::RevealDelay => self.reveal(),
                    TimerKind::CountDice => self.end_count_dice(),
                    TimerKind::Question => self.time_out(),
                }
            }
        }
    }

    /// Replaces the round with the one built by `step`, then notifies
    /// observers. `step` returns `None` when the intent does not apply.
    fn transition<F>(&self, intent: &'static str, step: F) -> Option<Snapshot>
    where
        F: FnOnce(&Self, &Round) -> Option<Round>,
    {
        let mut round = self.round.lock();
        let Some(next) = step(self, &*round) else {
            debug!(intent, mode = ?round.mode, phase = ?round.phase, "intent ignored");
            return None;
        };
        debug!(intent, from = ?round.phase, to = ?next.phase, "transition");
        *round = next;
        drop(round);
        Some(self.emit())
    }

    fn ignored(&self, intent: &'static str) -> Option<Snapshot> {
        debug!(intent, mode = ?self.mode(), "intent ignored");
        None
    }

    fn emit(&self) -> Snapshot {
        let snapshot = self.snapshot();
        let observers = self.observers.lock().clone();
        for observer in &observers {
            observer.on_snapshot(&snapshot);
        }
        snapshot
    }

    fn start_timer(&self, kind: TimerKind, duration: Duration) -> TimerToken {
        let token = self.timer.lock().start(kind, duration);
        debug!(token = token.get(), ?kind, ?duration, "timer started");
        token
    }

    fn draw_target(&self, targets: Range<u32>) -> u32 {
        self.rng.lock().random_range(targets)
    }
}
