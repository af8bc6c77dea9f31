//! Operator pools and generated arithmetic challenges.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::dice::Die;
use crate::equation::{Equation, Operator};
use crate::error::{ParseDifficultyError, PoolError};

#[cfg(feature = "std")]
fn ceil(value: f64) -> f64 {
    value.ceil()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn ceil(value: f64) -> f64 {
    libm::ceil(value)
}

/// A multiset of operators to sample from.
///
/// Repeating an operator makes it more likely, so the composition of the
/// pool sets the difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorPool {
    operators: Vec<Operator>,
}

impl OperatorPool {
    /// Creates a pool from the given operators.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Empty`] if `operators` is empty.
    pub fn new(operators: Vec<Operator>) -> Result<Self, PoolError> {
        if operators.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { operators })
    }

    /// Returns the operators in the pool.
    #[must_use]
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Draws one operator.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Operator {
        // The pool is never empty.
        self.operators.choose(rng).copied().unwrap_or(Operator::Add)
    }
}

impl Default for OperatorPool {
    fn default() -> Self {
        use Operator::{Add, Div, Mul, Sub};
        Self {
            operators: vec![Add, Add, Add, Sub, Sub, Mul, Mul, Div],
        }
    }
}

/// Draws `count` operators from `pool`, independently and with repeats.
pub fn generate_operators<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &OperatorPool,
    count: usize,
) -> Vec<Operator> {
    (0..count).map(|_| pool.sample(rng)).collect()
}

/// Single-Player difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Smaller numbers, long deadlines.
    Easy,
    /// The default.
    #[default]
    Normal,
    /// Larger numbers, short deadlines, bonus combo.
    Hard,
}

impl Difficulty {
    /// Factor applied to operand magnitude.
    #[must_use]
    pub const fn scale(self) -> f64 {
        match self {
            Self::Easy => 0.75,
            Self::Normal => 1.0,
            Self::Hard => 1.5,
        }
    }

    /// Extra combo awarded on top of the usual +1 for a fast answer.
    #[must_use]
    pub const fn combo_bonus(self) -> u32 {
        match self {
            Self::Easy | Self::Normal => 0,
            Self::Hard => 1,
        }
    }

    /// Deadline of the first question.
    #[must_use]
    pub const fn base_deadline(self) -> Duration {
        match self {
            Self::Easy => Duration::from_secs(15),
            Self::Normal => Duration::from_secs(12),
            Self::Hard => Duration::from_secs(10),
        }
    }

    /// Shortest deadline, reached at high levels.
    #[must_use]
    pub const fn min_deadline(self) -> Duration {
        match self {
            Self::Easy => Duration::from_secs(6),
            Self::Normal => Duration::from_secs(4),
            Self::Hard => Duration::from_secs(3),
        }
    }

    /// Deadline for a question at `level` (1-based).
    ///
    /// ```
    /// use core::time::Duration;
    /// use alcoroll::Difficulty;
    ///
    /// assert_eq!(Difficulty::Hard.deadline(1), Duration::from_secs(10));
    /// assert_eq!(Difficulty::Hard.deadline(3), Duration::from_secs(9));
    /// assert_eq!(Difficulty::Hard.deadline(100), Duration::from_secs(3));
    /// ```
    #[must_use]
    pub fn deadline(self, level: u32) -> Duration {
        const STEP: Duration = Duration::from_millis(500);
        let cut = STEP.saturating_mul(level.saturating_sub(1));
        self.base_deadline()
            .saturating_sub(cut)
            .max(self.min_deadline())
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError),
        }
    }
}

/// A two-operand question with an exact integer answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    /// Left operand.
    pub lhs: u32,
    /// The operator.
    pub operator: Operator,
    /// Right operand.
    pub rhs: u32,
}

impl Challenge {
    /// Returns the correct answer.
    ///
    /// Generated challenges never go negative and always divide evenly.
    #[must_use]
    pub fn answer(&self) -> i64 {
        let (lhs, rhs) = (i64::from(self.lhs), i64::from(self.rhs));
        match self.operator {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs.checked_div(rhs).unwrap_or(0),
        }
    }

    /// Returns the challenge as a complete equation.
    #[must_use]
    pub fn to_equation(&self) -> Equation {
        let mut equation = Equation::new();
        equation.push(self.lhs);
        equation.push_with(self.operator, self.rhs);
        equation
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

/// Scales `base` by the difficulty factor, rounding up, never below `floor`.
fn magnitude(base: u32, difficulty: Difficulty, floor: u32) -> u32 {
    let scaled = ceil(f64::from(base) * difficulty.scale()) as u32;
    scaled.max(floor)
}

/// Generates a challenge for `level` (1-based).
///
/// Levels 1 to 3 add, 4 to 6 subtract, 7 to 9 multiply and everything above
/// divides. Division picks the divisor and quotient first and multiplies them
/// into the dividend, so the answer is always an exact integer.
pub fn generate_challenge<R: Rng + ?Sized>(
    rng: &mut R,
    level: u32,
    difficulty: Difficulty,
) -> Challenge {
    let level = level.max(1);
    match level {
        1..=3 => {
            let max = magnitude(10 * level, difficulty, 2);
            Challenge {
                lhs: rng.random_range(1..=max),
                operator: Operator::Add,
                rhs: rng.random_range(1..=max),
            }
        }
        4..=6 => {
            let max = magnitude(10 + 5 * level, difficulty, 2);
            let lhs = rng.random_range(1..=max);
            Challenge {
                lhs,
                operator: Operator::Sub,
                rhs: rng.random_range(1..=lhs),
            }
        }
        7..=9 => {
            let max = magnitude(level + 3, difficulty, 3);
            Challenge {
                lhs: rng.random_range(2..=max),
                operator: Operator::Mul,
                rhs: rng.random_range(2..=magnitude(9, difficulty, 3)),
            }
        }
        _ => {
            let divisor = rng.random_range(2..=magnitude(9, difficulty, 3));
            let max = magnitude(level, difficulty, 2).min(u32::MAX / divisor);
            let quotient = rng.random_range(1..=max);
            Challenge {
                lhs: divisor * quotient,
                operator: Operator::Div,
                rhs: divisor,
            }
        }
    }
}

/// The maths rule that decides how many sips a Normal roll costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrinkRule {
    /// Total times the d4.
    Multiply,
    /// Total plus the d4.
    Add,
    /// Distance between the total and the d4.
    Subtract,
    /// Total divided by the d4, rounded up.
    Divide,
}

impl DrinkRule {
    const ALL: [Self; 4] = [Self::Multiply, Self::Add, Self::Subtract, Self::Divide];

    /// Picks a rule uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Self::Add)
    }

    /// Applies the rule.
    #[must_use]
    pub const fn apply(self, total: u32, d4: u32) -> u32 {
        match self {
            Self::Multiply => total * d4,
            Self::Add => total + d4,
            Self::Subtract => total.abs_diff(d4),
            Self::Divide => {
                if d4 == 0 {
                    total
                } else {
                    total.div_ceil(d4)
                }
            }
        }
    }

    /// Returns a label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Multiply => "Multiply",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Divide => "Divide (rounded up)",
        }
    }
}

/// A Normal-mode roll: four d6, one d4, then four more d6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalRoll {
    /// The first four d6.
    pub first: [u8; 4],
    /// The d4.
    pub d4: u8,
    /// The second four d6.
    pub second: [u8; 4],
    /// Rule applied to the first total and the d4 to count sips.
    pub rule: DrinkRule,
}

impl NormalRoll {
    /// Rolls a fresh set of dice and picks a drink rule.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut first = [0; 4];
        for value in &mut first {
            *value = Die::D6.roll(rng);
        }
        let d4 = Die::D4.roll(rng);
        let mut second = [0; 4];
        for value in &mut second {
            *value = Die::D6.roll(rng);
        }
        Self {
            first,
            d4,
            second,
            rule: DrinkRule::random(rng),
        }
    }

    /// Sum of the first four d6.
    #[must_use]
    pub fn first_total(&self) -> u32 {
        self.first.iter().copied().map(u32::from).sum()
    }

    /// Sum of the second four d6.
    #[must_use]
    pub fn second_total(&self) -> u32 {
        self.second.iter().copied().map(u32::from).sum()
    }

    /// The challenge `(first + second) × d4`.
    #[must_use]
    pub fn answer(&self) -> u32 {
        (self.first_total() + self.second_total()) * u32::from(self.d4)
    }

    /// Sips for the slowest player.
    #[must_use]
    pub fn sips(&self) -> u32 {
        self.rule.apply(self.first_total(), u32::from(self.d4))
    }
}
