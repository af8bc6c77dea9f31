use crate::timer::TimerKind;

use super::{Game, Mode, Phase, Round, Snapshot};

impl Game {
    pub(super) fn count_dice_round(&self) -> Round {
        let mut round = Round::new(Mode::CountDice, Phase::CollectingDice);
        round.target = Some(self.draw_target(self.options.count_dice_targets.clone()));
        round
    }

    /// Rolls the next Count-Dice die. The second roll uses the odd die out,
    /// and every roll after the first is joined by an operator from the pool.
    /// The countdown starts on its own after the last roll.
    pub(super) fn roll_count_die(&self) -> Option<Snapshot> {
        self.transition("roll_next", |game, round| {
            if !round.is_in(Mode::CountDice, &[Phase::CollectingDice]) {
                return None;
            }
            let options = &game.options;
            let die = if round.equation.len() == 1 {
                options.count_dice_second_die
            } else {
                options.count_dice_die
            };

            let mut next = round.clone();
            {
                let mut rng = game.rng.lock();
                let value = u32::from(die.roll(&mut *rng));
                if next.equation.is_empty() {
                    next.equation.push(value);
                } else {
                    let operator = options.operator_pool.sample(&mut *rng);
                    next.equation.push_with(operator, value);
                }
            }

            if next.equation.len() >= options.count_dice_rolls {
                next.phase = Phase::Countdown;
                game.start_timer(TimerKind::CountDice, options.count_dice_time);
            }
            Some(next)
        })
    }

    pub(super) fn end_count_dice(&self) -> Option<Snapshot> {
        self.transition("count_dice_expired", |_, round| {
            if !round.is_in(Mode::CountDice, &[Phase::Countdown]) {
                return None;
            }
            Some(Round {
                phase: Phase::Ended,
                ..round.clone()
            })
        })
    }

    pub(super) fn next_count_dice(&self) -> Option<Snapshot> {
        self.transition("next_round", |game, round| {
            if !round.is_in(Mode::CountDice, &[Phase::Ended]) {
                return None;
            }
            Some(game.count_dice_round())
        })
    }
}
