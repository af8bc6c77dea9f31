//! Error types for engine construction and parsing.
//!
//! Player intents never fail: an intent that does not fit the current phase
//! is ignored. The errors here cover invalid building blocks instead.

use thiserror::Error;

/// Errors that can occur when creating a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DieError {
    /// A die needs at least one side.
    #[error("a die needs at least one side")]
    ZeroSides,
}

/// Errors that can occur when creating an operator pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The pool has no operators to sample from.
    #[error("operator pool is empty")]
    Empty,
}

/// Errors that can occur when assembling an equation from parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EquationError {
    /// The number of operator slots does not match the number of operands.
    #[error("{operands} operands need {expected} operator slots, got {operators}")]
    OperatorCount {
        /// Number of operands supplied.
        operands: usize,
        /// Number of operator slots expected.
        expected: usize,
        /// Number of operator slots supplied.
        operators: usize,
    },
}

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The Numboard target range is empty.
    #[error("numboard target range is empty")]
    EmptyNumboardTargets,
    /// The Count-Dice target range is empty.
    #[error("count-dice target range is empty")]
    EmptyCountDiceTargets,
    /// The Numboard must allow at least one die.
    #[error("numboard must allow at least one die")]
    ZeroMaxDice,
    /// Count-Dice must roll at least one die.
    #[error("count-dice must roll at least one die")]
    ZeroCountDiceRolls,
}

/// Error returned when parsing an unknown game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown game mode")]
pub struct ParseModeError;

/// Error returned when parsing an unknown difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown difficulty")]
pub struct ParseDifficultyError;
