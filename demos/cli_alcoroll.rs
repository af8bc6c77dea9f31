//! Terminal Alcoroll.
//!
//! Set `RUST_LOG=alcoroll=debug` to watch the round machine.

use std::cell::Cell;
use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use alcoroll::{Difficulty, Game, GameOptions, Mode, Phase, Snapshot};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Invalid options: {err}");
            return;
        }
    };
    let last_phase = Cell::new(Phase::Idle);
    game.subscribe(move |snapshot: &Snapshot| {
        if last_phase.replace(snapshot.phase()) != snapshot.phase() {
            print_snapshot(snapshot);
        }
    });

    println!("Alcoroll (room {}) - type 'q' to quit", game.room_code());

    loop {
        let choice = prompt_line("Mode ([n]ormal, [c]ount-dice, num[b]oard, [s]ingle): ");
        let mode = match choice.as_str() {
            "n" => Mode::Normal,
            "c" => Mode::CountDice,
            "b" => Mode::Numboard,
            "s" => Mode::SinglePlayer,
            "q" | "quit" => return,
            other => match other.parse() {
                Ok(mode) => mode,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            },
        };

        game.select_mode(mode);
        match mode {
            Mode::Normal => play_normal(&game),
            Mode::CountDice => play_count_dice(&game),
            Mode::Numboard => play_numboard(&game),
            Mode::SinglePlayer => play_single(&game),
        }
        game.reset();
    }
}

/// Feeds wall-clock time into the running timer.
struct Clock {
    last: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    fn catch_up(&mut self, game: &Game) {
        let elapsed = self.last.elapsed();
        self.last = Instant::now();
        if let Some(token) = game.snapshot().timer {
            game.advance(token, elapsed);
        }
    }
}

fn play_normal(game: &Game) {
    loop {
        let Some(snapshot) = game.roll_next() else {
            return;
        };
        if let Some(roll) = snapshot.round.normal_roll {
            println!("First 4d6:  {:?} = {}", roll.first, roll.first_total());
            println!("1d4:        {}", roll.d4);
            println!("Second 4d6: {:?} = {}", roll.second, roll.second_total());
            println!(
                "Solve: ({} + {}) × {}",
                roll.first_total(),
                roll.second_total(),
                roll.d4
            );
            prompt_line("Press enter for the answer...");
            println!("Answer: {}", roll.answer());
            println!(
                "Rule: {} - slowest player drinks {} sips",
                roll.rule.label(),
                roll.sips()
            );
        }
        if prompt_line("Roll again? (y/n): ") != "y" {
            return;
        }
    }
}

fn play_count_dice(game: &Game) {
    if let Some(target) = game.snapshot().round.target {
        println!("Target: {target}");
    }
    while game.phase() == Phase::CollectingDice {
        prompt_line("Press enter to roll...");
        if let Some(snapshot) = game.roll_next() {
            println!("Equation: {}", snapshot.round.equation);
        }
    }

    let mut clock = Clock::new();
    while game.phase() == Phase::Countdown {
        let remaining = game.snapshot().seconds_remaining().unwrap_or(0);
        prompt_line(&format!("{remaining}s left - press enter to check the clock..."));
        clock.catch_up(game);
    }
}

fn play_numboard(game: &Game) {
    let snapshot = game.snapshot();
    if let Some(target) = snapshot.round.target {
        println!("Target: {target}");
    }
    game.start_round();
    println!("Commands: a<sides> add die, r remove, o<index> cycle operator, l lock");

    let mut clock = Clock::new();
    while game.phase() == Phase::Thinking {
        let snapshot = game.snapshot();
        println!(
            "[{}s] {}",
            snapshot.seconds_remaining().unwrap_or(0),
            snapshot.round.equation
        );
        let command = prompt_line("> ");
        clock.catch_up(game);
        if game.phase() != Phase::Thinking {
            break;
        }

        let applied = match command.split_at_checked(1) {
            Some(("a", sides)) => sides.parse().ok().and_then(|sides| game.add_die(sides)),
            Some(("r", _)) => game.remove_die(),
            Some(("o", index)) => index.parse().ok().and_then(|i| game.cycle_operator(i)),
            Some(("l", _)) => lock_now(game),
            Some(("q", _)) => return,
            _ => None,
        };
        if applied.is_none() {
            println!("Not allowed right now.");
        }
    }

    // Run out the reveal delay.
    while game.phase() == Phase::Locked {
        let Some(token) = game.snapshot().timer else {
            break;
        };
        game.tick(token);
    }
}

/// Runs the thinking clock down to zero.
fn lock_now(game: &Game) -> Option<Snapshot> {
    let snapshot = game.snapshot();
    game.advance(snapshot.timer?, snapshot.time_remaining?)
}

fn play_single(game: &Game) {
    let difficulty = prompt_line("Difficulty (easy/normal/hard): ")
        .parse()
        .unwrap_or(Difficulty::Normal);
    game.select_difficulty(difficulty);
    game.start_round();

    let mut clock = Clock::new();
    while game.phase() == Phase::Question {
        let snapshot = game.snapshot();
        let Some(session) = snapshot.round.single_player else {
            return;
        };
        let Some(challenge) = session.challenge else {
            return;
        };
        let answer = prompt_line(&format!(
            "Level {} | combo {} | {}s | {challenge} = ",
            session.level,
            session.combo,
            snapshot.seconds_remaining().unwrap_or(0),
        ));
        clock.catch_up(game);
        game.submit_answer(&answer);
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    match snapshot.phase() {
        Phase::Locked => println!("Time's up! {}", snapshot.round.equation),
        Phase::Reveal => {
            if let Some(result) = snapshot.round.result {
                let target = snapshot.round.target.unwrap_or(0);
                println!("{} = {result} (target {target})", snapshot.round.equation);
                if let Some(distance) = result.distance_to(target) {
                    println!("Off by {distance}");
                }
            }
        }
        Phase::Ended => println!("Countdown over: {}", snapshot.round.equation),
        Phase::GameOver => {
            if let Some(session) = snapshot.round.single_player {
                let answer = session.challenge.map(|c| c.answer()).unwrap_or_default();
                println!(
                    "Game over at level {} ({:?}), answer was {answer}, best combo {}",
                    session.level,
                    session.last_outcome,
                    session.best_combo
                );
            }
        }
        _ => {}
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}
