use alcoroll::{
    AnswerOutcome, Difficulty, Equation, Game, GameOptions, Mode, NormalRoll, Phase,
    SinglePlayerSession, Snapshot, TimerToken,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Browser bridge: forwards intents to the engine and hands snapshots to JS.
///
/// Every intent returns whether it was applied. JS drives the clock by
/// calling `tick` once a second with the token from the latest snapshot.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        Game::new(GameOptions::default(), seed as u64)
            .map(|game| Self { game })
            .map_err(js_err)
    }

    pub fn room_code(&self) -> String {
        self.game.room_code().to_string()
    }

    pub fn select_mode(&self, mode: &str) -> Result<(), JsValue> {
        let mode: Mode = mode.parse().map_err(js_err)?;
        self.game.select_mode(mode);
        Ok(())
    }

    pub fn select_difficulty(&self, difficulty: &str) -> Result<bool, JsValue> {
        let difficulty: Difficulty = difficulty.parse().map_err(js_err)?;
        Ok(self.game.select_difficulty(difficulty).is_some())
    }

    pub fn start_round(&self) -> bool {
        self.game.start_round().is_some()
    }

    pub fn add_die(&self, sides: u8) -> bool {
        self.game.add_die(sides).is_some()
    }

    pub fn remove_die(&self) -> bool {
        self.game.remove_die().is_some()
    }

    pub fn cycle_operator(&self, index: u32) -> bool {
        self.game.cycle_operator(index as usize).is_some()
    }

    pub fn roll_next(&self) -> bool {
        self.game.roll_next().is_some()
    }

    pub fn next_round(&self) -> bool {
        self.game.next_round().is_some()
    }

    pub fn submit_answer(&self, answer: &str) -> bool {
        self.game.submit_answer(answer).is_some()
    }

    /// Returns `false` when the token belongs to a cancelled timer; the
    /// caller should clear the interval that sent it.
    pub fn tick(&self, token: f64) -> bool {
        token_from_js(token).is_some_and(|token| self.game.tick(token).is_some())
    }

    pub fn reset(&self) {
        self.game.reset();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    room_code: String,
    mode: Option<&'static str>,
    phase: &'static str,
    target: Option<u32>,
    equation: JsEquation,
    timer: Option<f64>,
    seconds_remaining: Option<u32>,
    result: Option<String>,
    normal_roll: Option<JsNormalRoll>,
    single_player: Option<JsSession>,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        let seconds_remaining = snapshot.seconds_remaining().map(|secs| secs as u32);
        let round = snapshot.round;
        Self {
            room_code: snapshot.room_code.to_string(),
            mode: round.mode.map(Mode::as_str),
            phase: phase_to_str(round.phase),
            target: round.target,
            equation: JsEquation::from(&round.equation),
            timer: snapshot.timer.map(token_to_js),
            seconds_remaining,
            result: round.result.map(|result| result.to_string()),
            normal_roll: round.normal_roll.map(JsNormalRoll::from),
            single_player: round.single_player.map(JsSession::from),
        }
    }
}

#[derive(Serialize)]
struct JsEquation {
    operands: Vec<u32>,
    operators: Vec<Option<String>>,
    text: String,
    complete: bool,
}

impl From<&Equation> for JsEquation {
    fn from(equation: &Equation) -> Self {
        Self {
            operands: equation.operands().to_vec(),
            operators: equation
                .operators()
                .iter()
                .map(|slot| slot.map(|operator| operator.symbol().to_string()))
                .collect(),
            text: equation.to_string(),
            complete: equation.is_complete(),
        }
    }
}

#[derive(Serialize)]
struct JsNormalRoll {
    first: [u8; 4],
    d4: u8,
    second: [u8; 4],
    first_total: u32,
    second_total: u32,
    answer: u32,
    rule: &'static str,
    sips: u32,
}

impl From<NormalRoll> for JsNormalRoll {
    fn from(roll: NormalRoll) -> Self {
        Self {
            first: roll.first,
            d4: roll.d4,
            second: roll.second,
            first_total: roll.first_total(),
            second_total: roll.second_total(),
            answer: roll.answer(),
            rule: roll.rule.label(),
            sips: roll.sips(),
        }
    }
}

#[derive(Serialize)]
struct JsSession {
    difficulty: &'static str,
    level: u32,
    combo: u32,
    best_combo: u32,
    question: Option<String>,
    last_outcome: Option<&'static str>,
    answer: Option<i64>,
}

impl From<SinglePlayerSession> for JsSession {
    fn from(session: SinglePlayerSession) -> Self {
        // The answer is only revealed once the session is over.
        let finished = session
            .last_outcome
            .is_some_and(|outcome| !outcome.is_correct());
        Self {
            difficulty: session.difficulty.as_str(),
            level: session.level,
            combo: session.combo,
            best_combo: session.best_combo,
            question: session.challenge.map(|challenge| challenge.to_string()),
            last_outcome: session.last_outcome.map(outcome_to_str),
            answer: session
                .challenge
                .filter(|_| finished)
                .map(|challenge| challenge.answer()),
        }
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::Setup => "Setup",
        Phase::Thinking => "Thinking",
        Phase::Locked => "Locked",
        Phase::Reveal => "Reveal",
        Phase::CollectingDice => "CollectingDice",
        Phase::Countdown => "Countdown",
        Phase::Ended => "Ended",
        Phase::Question => "Question",
        Phase::GameOver => "GameOver",
    }
}

fn outcome_to_str(outcome: AnswerOutcome) -> &'static str {
    match outcome {
        AnswerOutcome::Fast { .. } => "Fast",
        AnswerOutcome::Slow { .. } => "Slow",
        AnswerOutcome::Wrong => "Wrong",
        AnswerOutcome::TimedOut => "TimedOut",
    }
}

/// Largest integer a JS number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// Tokens count up from 1, so they stay below 2^53.
fn token_to_js(token: TimerToken) -> f64 {
    token.get() as f64
}

fn token_from_js(token: f64) -> Option<TimerToken> {
    (token.fract() == 0.0 && (0.0..=MAX_SAFE_INTEGER).contains(&token))
        .then(|| TimerToken::from_raw(token as u64))
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_tokens_survive_the_js_boundary() {
        for raw in [1, u64::from(u32::MAX), u64::from(u32::MAX) + 1, (1 << 53) - 1] {
            let token = TimerToken::from_raw(raw);
            assert_eq!(token_from_js(token_to_js(token)), Some(token));
        }
        assert_ne!(
            token_from_js(token_to_js(TimerToken::from_raw(u64::from(u32::MAX) + 2))),
            token_from_js(token_to_js(TimerToken::from_raw(1)))
        );
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(token_from_js(-1.0), None);
        assert_eq!(token_from_js(1.5), None);
        assert_eq!(token_from_js(f64::NAN), None);
        assert_eq!(token_from_js(f64::INFINITY), None);
    }
}
