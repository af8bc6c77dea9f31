//! Dice and uniform rolls.

use alloc::vec::Vec;

use rand::Rng;

use crate::error::DieError;

/// A die with a fixed number of sides.
///
/// Dice are stateless: every roll draws a fresh value from the caller's RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    sides: u8,
}

impl Die {
    /// A four-sided die.
    pub const D4: Self = Self { sides: 4 };
    /// A six-sided die.
    pub const D6: Self = Self { sides: 6 };

    /// Creates a die with the given number of sides.
    ///
    /// # Errors
    ///
    /// Returns [`DieError::ZeroSides`] if `sides` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use alcoroll::Die;
    ///
    /// assert_eq!(Die::new(6).unwrap(), Die::D6);
    /// assert!(Die::new(0).is_err());
    /// ```
    pub const fn new(sides: u8) -> Result<Self, DieError> {
        if sides == 0 {
            return Err(DieError::ZeroSides);
        }
        Ok(Self { sides })
    }

    /// Returns the number of sides.
    #[must_use]
    pub const fn sides(&self) -> u8 {
        self.sides
    }

    /// Rolls the die, returning a value in `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        rng.random_range(1..=self.sides)
    }
}

/// Rolls a single die with `sides` faces.
///
/// # Errors
///
/// Returns [`DieError::ZeroSides`] if `sides` is zero.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R, sides: u8) -> Result<u8, DieError> {
    Die::new(sides).map(|die| die.roll(rng))
}

/// Rolls `count` independent copies of `die`.
pub fn roll_dice_set<R: Rng + ?Sized>(rng: &mut R, die: Die, count: usize) -> Vec<u8> {
    (0..count).map(|_| die.roll(rng)).collect()
}
