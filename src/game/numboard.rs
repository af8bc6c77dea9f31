use crate::dice::Die;
use crate::result::RevealResult;
use crate::timer::TimerKind;

use super::{Game, Mode, Phase, Round, Snapshot};

const EDITABLE: &[Phase] = &[Phase::Setup, Phase::Thinking];

impl Game {
    pub(super) fn numboard_round(&self) -> Round {
        let mut round = Round::new(Mode::Numboard, Phase::Setup);
        round.target = Some(self.draw_target(self.options.numboard_targets.clone()));
        round
    }

    /// Starts the thinking countdown.
    pub(super) fn start_thinking(&self) -> Option<Snapshot> {
        self.transition("start_round", |game, round| {
            if !round.is_in(Mode::Numboard, &[Phase::Setup]) {
                return None;
            }
            game.start_timer(TimerKind::Thinking, game.options.think_time);
            Some(Round {
                phase: Phase::Thinking,
                ..round.clone()
            })
        })
    }

    /// Rolls a die with `sides` faces and appends it to the Numboard equation.
    ///
    /// Every die after the first opens an unset operator slot. Ignored
    /// outside Numboard setup and thinking, when the equation already holds
    /// [`GameOptions::max_dice`](crate::GameOptions::max_dice) dice, or when
    /// `sides` is zero.
    pub fn add_die(&self, sides: u8) -> Option<Snapshot> {
        let Ok(die) = Die::new(sides) else {
            return self.ignored("add_die");
        };
        self.transition("add_die", |game, round| {
            if !round.is_in(Mode::Numboard, EDITABLE)
                || round.equation.len() >= game.options.max_dice
            {
                return None;
            }
            let value = die.roll(&mut *game.rng.lock());
            let mut next = round.clone();
            next.equation.push(u32::from(value));
            Some(next)
        })
    }

    /// Removes the most recently added die and its operator slot.
    pub fn remove_die(&self) -> Option<Snapshot> {
        self.transition("remove_die", |_, round| {
            if !round.is_in(Mode::Numboard, EDITABLE) || round.equation.is_empty() {
                return None;
            }
            let mut next = round.clone();
            next.equation.pop();
            Some(next)
        })
    }

    /// Cycles the operator slot at `index` through `+ − × ÷`.
    pub fn cycle_operator(&self, index: usize) -> Option<Snapshot> {
        self.transition("cycle_operator", |_, round| {
            if !round.is_in(Mode::Numboard, EDITABLE) {
                return None;
            }
            let mut next = round.clone();
            next.equation.cycle_operator(index)?;
            Some(next)
        })
    }

    pub(super) fn lock_equation(&self) -> Option<Snapshot> {
        self.transition("lock", |game, round| {
            if !round.is_in(Mode::Numboard, &[Phase::Thinking]) {
                return None;
            }
            game.start_timer(TimerKind::RevealDelay, game.options.reveal_delay);
            Some(Round {
                phase: Phase::Locked,
                ..round.clone()
            })
        })
    }

    pub(super) fn reveal(&self) -> Option<Snapshot> {
        self.transition("reveal", |_, round| {
            if !round.is_in(Mode::Numboard, &[Phase::Locked]) {
                return None;
            }
            let result = RevealResult::from_evaluation(round.equation.evaluate());
            Some(Round {
                phase: Phase::Reveal,
                result: Some(result),
                ..round.clone()
            })
        })
    }

    pub(super) fn next_numboard(&self) -> Option<Snapshot> {
        self.transition("next_round", |game, round| {
            if !round.is_in(Mode::Numboard, &[Phase::Reveal]) {
                return None;
            }
            Some(game.numboard_round())
        })
    }
}
