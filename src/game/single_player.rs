use core::time::Duration;

use tracing::debug;

use crate::challenge::{Difficulty, generate_challenge};
use crate::result::AnswerOutcome;
use crate::timer::TimerKind;

use super::{Game, Mode, Phase, Round, SinglePlayerSession, Snapshot};

const RESTARTABLE: &[Phase] = &[Phase::Setup, Phase::GameOver];

impl Game {
    pub(super) fn single_player_round(&self) -> Round {
        let mut round = Round::new(Mode::SinglePlayer, Phase::Setup);
        round.single_player = Some(SinglePlayerSession::new(Difficulty::default()));
        round
    }

    /// Picks the Single-Player difficulty. Only allowed before a session
    /// starts or after it ends.
    pub fn select_difficulty(&self, difficulty: Difficulty) -> Option<Snapshot> {
        self.transition("select_difficulty", |_, round| {
            if !round.is_in(Mode::SinglePlayer, RESTARTABLE) {
                return None;
            }
            Some(Round {
                phase: Phase::Setup,
                single_player: Some(SinglePlayerSession::new(difficulty)),
                ..round.clone()
            })
        })
    }

    /// Opens the first question of a new session.
    pub(super) fn start_session(&self) -> Option<Snapshot> {
        self.transition("start_round", |game, round| {
            if !round.is_in(Mode::SinglePlayer, RESTARTABLE) {
                return None;
            }
            let difficulty = round
                .single_player
                .map_or_else(Difficulty::default, |session| session.difficulty);
            let mut session = SinglePlayerSession::new(difficulty);
            game.ask(&mut session);
            Some(Round {
                phase: Phase::Question,
                single_player: Some(session),
                ..round.clone()
            })
        })
    }

    /// Submits an answer to the open question.
    ///
    /// Input that does not parse as a whole number counts as a wrong answer.
    /// A correct answer faster than
    /// [`GameOptions::fast_answer`](crate::GameOptions::fast_answer) adds one
    /// plus the difficulty bonus to the combo; a slower one resets the combo
    /// to 1. A wrong answer ends the session.
    pub fn submit_answer(&self, input: &str) -> Option<Snapshot> {
        self.transition("submit_answer", |game, round| {
            if !round.is_in(Mode::SinglePlayer, &[Phase::Question]) {
                return None;
            }
            let mut session = round.single_player?;
            let challenge = session.challenge?;

            let latency = game
                .timer
                .lock()
                .active()
                .filter(|timer| timer.kind() == TimerKind::Question)
                .map_or(Duration::ZERO, |timer| timer.elapsed());

            let correct = input
                .trim()
                .parse::<i64>()
                .is_ok_and(|value| value == challenge.answer());

            if !correct {
                game.timer.lock().cancel();
                debug!(level = session.level, "wrong answer, session over");
                return Some(game_over(round, session, AnswerOutcome::Wrong));
            }

            let outcome = if latency < game.options.fast_answer {
                session.combo += 1 + session.difficulty.combo_bonus();
                AnswerOutcome::Fast { latency }
            } else {
                session.combo = 1;
                AnswerOutcome::Slow { latency }
            };
            session.best_combo = session.best_combo.max(session.combo);
            session.last_outcome = Some(outcome);
            session.level += 1;
            game.ask(&mut session);

            Some(Round {
                single_player: Some(session),
                ..round.clone()
            })
        })
    }

    pub(super) fn time_out(&self) -> Option<Snapshot> {
        self.transition("question_expired", |_, round| {
            if !round.is_in(Mode::SinglePlayer, &[Phase::Question]) {
                return None;
            }
            let session = round.single_player?;
            Some(game_over(round, session, AnswerOutcome::TimedOut))
        })
    }

    /// Puts a fresh question for the session's level and restarts the deadline.
    fn ask(&self, session: &mut SinglePlayerSession) {
        let challenge =
            generate_challenge(&mut *self.rng.lock(), session.level, session.difficulty);
        session.challenge = Some(challenge);
        self.start_timer(
            TimerKind::Question,
            session.difficulty.deadline(session.level),
        );
    }
}

fn game_over(round: &Round, mut session: SinglePlayerSession, outcome: AnswerOutcome) -> Round {
    session.combo = 0;
    session.last_outcome = Some(outcome);
    Round {
        phase: Phase::GameOver,
        single_player: Some(session),
        ..round.clone()
    }
}
