//! Game configuration options.

use core::ops::Range;
use core::time::Duration;

use crate::challenge::OperatorPool;
use crate::dice::Die;
use crate::error::OptionsError;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use alcoroll::GameOptions;
///
/// let options = GameOptions::default()
///     .with_max_dice(5)
///     .with_think_time(Duration::from_secs(45))
///     .with_numboard_targets(10..50);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Most dice a Numboard equation may hold.
    pub max_dice: usize,
    /// Range the Numboard target is drawn from.
    pub numboard_targets: Range<u32>,
    /// Numboard thinking time.
    pub think_time: Duration,
    /// Pause between locking and revealing a Numboard round.
    pub reveal_delay: Duration,
    /// Range the Count-Dice target is drawn from.
    pub count_dice_targets: Range<u32>,
    /// Number of dice rolled in Count-Dice.
    pub count_dice_rolls: usize,
    /// Die used for every Count-Dice roll except the second.
    pub count_dice_die: Die,
    /// Die used for the second Count-Dice roll.
    pub count_dice_second_die: Die,
    /// Countdown after the last Count-Dice roll.
    pub count_dice_time: Duration,
    /// Operators drawn between Count-Dice rolls.
    pub operator_pool: OperatorPool,
    /// Single-Player answers faster than this grow the combo.
    pub fast_answer: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_dice: 6,
            numboard_targets: 30..90,
            think_time: Duration::from_secs(60),
            reveal_delay: Duration::from_secs(2),
            count_dice_targets: 20..60,
            count_dice_rolls: 4,
            count_dice_die: Die::D6,
            count_dice_second_die: Die::D4,
            count_dice_time: Duration::from_secs(60),
            operator_pool: OperatorPool::default(),
            fast_answer: Duration::from_secs(3),
        }
    }
}

impl GameOptions {
    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if a target range is empty or a dice count is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.numboard_targets.start >= self.numboard_targets.end {
            return Err(OptionsError::EmptyNumboardTargets);
        }
        if self.count_dice_targets.start >= self.count_dice_targets.end {
            return Err(OptionsError::EmptyCountDiceTargets);
        }
        if self.max_dice == 0 {
            return Err(OptionsError::ZeroMaxDice);
        }
        if self.count_dice_rolls == 0 {
            return Err(OptionsError::ZeroCountDiceRolls);
        }
        Ok(())
    }

    /// Sets the most dice a Numboard equation may hold.
    ///
    /// # Example
    ///
    /// ```
    /// use alcoroll::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_dice(4);
    /// assert_eq!(options.max_dice, 4);
    /// ```
    #[must_use]
    pub fn with_max_dice(mut self, max_dice: usize) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Sets the Numboard target range.
    #[must_use]
    pub fn with_numboard_targets(mut self, targets: Range<u32>) -> Self {
        self.numboard_targets = targets;
        self
    }

    /// Sets the Numboard thinking time.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use alcoroll::GameOptions;
    ///
    /// let options = GameOptions::default().with_think_time(Duration::from_secs(30));
    /// assert_eq!(options.think_time, Duration::from_secs(30));
    /// ```
    #[must_use]
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    /// Sets the pause between locking and revealing.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Sets the Count-Dice target range.
    #[must_use]
    pub fn with_count_dice_targets(mut self, targets: Range<u32>) -> Self {
        self.count_dice_targets = targets;
        self
    }

    /// Sets how many dice Count-Dice rolls.
    #[must_use]
    pub fn with_count_dice_rolls(mut self, rolls: usize) -> Self {
        self.count_dice_rolls = rolls;
        self
    }

    /// Sets the Count-Dice dice: `die` for most rolls, `second` for the second roll.
    #[must_use]
    pub fn with_count_dice_dice(mut self, die: Die, second: Die) -> Self {
        self.count_dice_die = die;
        self.count_dice_second_die = second;
        self
    }

    /// Sets the Count-Dice countdown.
    #[must_use]
    pub fn with_count_dice_time(mut self, time: Duration) -> Self {
        self.count_dice_time = time;
        self
    }

    /// Sets the operator pool used by Count-Dice.
    ///
    /// # Example
    ///
    /// ```
    /// use alcoroll::{GameOptions, Operator, OperatorPool};
    ///
    /// let pool = OperatorPool::new(vec![Operator::Add]).unwrap();
    /// let options = GameOptions::default().with_operator_pool(pool.clone());
    /// assert_eq!(options.operator_pool, pool);
    /// ```
    #[must_use]
    pub fn with_operator_pool(mut self, pool: OperatorPool) -> Self {
        self.operator_pool = pool;
        self
    }

    /// Sets the Single-Player fast-answer threshold.
    #[must_use]
    pub fn with_fast_answer(mut self, threshold: Duration) -> Self {
        self.fast_answer = threshold;
        self
    }
}
