use crate::challenge::NormalRoll;

use super::{Game, Mode, Phase, Round, Snapshot};

impl Game {
    /// Rolls `4d6 → 1d4 → 4d6` and shows the challenge. Rolling again from
    /// the reveal re-rolls.
    pub(super) fn roll_normal(&self) -> Option<Snapshot> {
        self.transition("roll_next", |game, round| {
            if !round.is_in(Mode::Normal, &[Phase::Setup, Phase::Reveal]) {
                return None;
            }
            let roll = NormalRoll::roll(&mut *game.rng.lock());
            Some(Round {
                phase: Phase::Reveal,
                normal_roll: Some(roll),
                ..round.clone()
            })
        })
    }

    pub(super) fn next_normal(&self) -> Option<Snapshot> {
        self.transition("next_round", |_, round| {
            if !round.is_in(Mode::Normal, &[Phase::Reveal]) {
                return None;
            }
            Some(Round::new(Mode::Normal, Phase::Setup))
        })
    }
}
