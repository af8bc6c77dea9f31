//! Round engine for Alcoroll, a dice and mental-arithmetic party game, with
//! optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs every mode of the game:
//! Normal rolls, Count-Dice, the free-form Numboard and the timed
//! Single-Player streak. It rolls dice, builds and evaluates equations,
//! keeps the single round timer and emits a [`Snapshot`] after every
//! transition. Rendering is left to the caller.
//!
//! # Example
//!
//! ```
//! use alcoroll::{Game, GameOptions, Mode, Phase};
//!
//! let game = Game::new(GameOptions::default(), 42).unwrap();
//! game.select_mode(Mode::Numboard);
//! game.start_round();
//! game.add_die(6);
//! game.add_die(6);
//! game.cycle_operator(0);
//! assert_eq!(game.phase(), Phase::Thinking);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod challenge;
pub mod dice;
pub mod equation;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod room;
mod sync;
pub mod timer;

// Re-export main types
pub use challenge::{
    Challenge, Difficulty, DrinkRule, NormalRoll, OperatorPool, generate_challenge,
    generate_operators,
};
pub use dice::{Die, roll_dice_set, roll_die};
pub use equation::{Equation, Operator};
pub use error::{
    DieError, EquationError, OptionsError, ParseDifficultyError, ParseModeError, PoolError,
};
pub use game::{Game, Mode, Observer, Phase, Round, SinglePlayerSession, Snapshot};
pub use options::GameOptions;
pub use result::{AnswerOutcome, RevealResult};
pub use room::RoomCode;
pub use timer::{TICK, TickOutcome, Timer, TimerKind, TimerSlot, TimerToken};
