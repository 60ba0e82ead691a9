//! `yh play`: interactive terminal game over stdin/stdout.
//!
//! This is the thin I/O shell: it renders snapshots and forwards commands;
//! every rule decision happens inside `yh_core::Game`.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use yh_core::{Category, ChanceMode, Game, GameConfig, GameError, HandView};
use yh_logging::{
    hash_config_bytes, write_snapshot_atomic, CommitEventV1, GameOverEventV1, NdjsonWriter,
    RollEventV1, SessionStartV1,
};

pub struct PlayOpts {
    pub seed: u64,
    pub config: GameConfig,
    pub log_path: Option<PathBuf>,
    pub resume_path: Option<PathBuf>,
}

pub fn run(opts: PlayOpts) -> Result<(), Box<dyn Error>> {
    let chance = ChanceMode::new_rng(opts.seed);
    let mut game = match &opts.resume_path {
        Some(path) => Game::resume(yh_logging::read_snapshot(path)?, chance)?,
        None => Game::new(opts.config, chance)?,
    };

    let mut log = match &opts.log_path {
        Some(path) => Some(NdjsonWriter::open_append(path)?),
        None => None,
    };
    if let Some(w) = log.as_mut() {
        let hash = game
            .config()
            .to_yaml_string()
            .ok()
            .map(|y| hash_config_bytes(y.as_bytes()));
        w.write_event(&SessionStartV1::new(Some(opts.seed), hash))?;
    }

    println!("yh {} -- round {} of {}", yh_core::VERSION, game.round_state().round + 1, game.config().rounds);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["help"] | ["h"] => print_help(),
            ["quit"] | ["q"] => break,
            ["roll"] | ["r"] => match game.roll() {
                Ok(view) => {
                    if let Some(w) = log.as_mut() {
                        let rs = game.round_state();
                        w.write_event(&RollEventV1::new(
                            rs.round,
                            rs.roll_count,
                            view.values,
                            view.holds,
                        ))?;
                    }
                    print_hand(&view);
                    print_candidates(&game);
                }
                Err(e) => report(e),
            },
            ["hold", rest @ ..] => {
                for tok in rest {
                    match tok.parse::<usize>() {
                        Ok(i) => {
                            if let Err(e) = game.toggle_hold(i) {
                                report(e);
                            }
                        }
                        Err(_) => eprintln!("not a die index: {}", tok),
                    }
                }
                print_hand(&game.hand_view());
            }
            ["table"] | ["t"] => print_table(&game),
            ["totals"] => print_totals(&game),
            ["commit", name] => match Category::from_name(name) {
                None => eprintln!("unknown category: {} (see `table` for names)", name),
                Some(cat) => match game.select_category(cat) {
                    Ok(outcome) => {
                        if let Some(w) = log.as_mut() {
                            w.write_event(&CommitEventV1::new(
                                outcome.round - 1,
                                outcome.category,
                                outcome.committed_value,
                                outcome.totals,
                            ))?;
                        }
                        println!(
                            "{} scored {} (grand total {})",
                            outcome.category.name(),
                            outcome.committed_value,
                            outcome.totals.grand_total
                        );
                        if outcome.game_over {
                            println!();
                            println!("game over!");
                            print_totals(&game);
                            if let Some(w) = log.as_mut() {
                                w.write_event(&GameOverEventV1::new(outcome.totals))?;
                                w.flush()?;
                            }
                            return Ok(());
                        }
                        println!(
                            "round {} of {}",
                            game.round_state().round + 1,
                            game.config().rounds
                        );
                    }
                    Err(e) => report(e),
                },
            },
            ["save", path] => {
                write_snapshot_atomic(path, &game.snapshot())?;
                println!("saved to {}", path);
            }
            _ => eprintln!("unknown command (try `help`)"),
        }
    }

    if let Some(w) = log.as_mut() {
        w.flush()?;
    }
    Ok(())
}

fn report(e: GameError) {
    eprintln!("rejected: {}", e);
}

fn print_help() {
    println!(
        r#"commands:
    roll              roll all unheld dice
    hold <i> [..]     toggle hold on die index 0..4
    table             score table with live candidates
    totals            current totals
    commit <name>     score the current hand into a category
    save <path>       write a resumable snapshot
    quit"#
    );
}

fn print_hand(view: &HandView) {
    print!("dice:");
    for (v, h) in view.values.iter().zip(view.holds.iter()) {
        if *h {
            print!(" [{}]", v);
        } else {
            print!("  {} ", v);
        }
    }
    println!("   rolls remaining: {}", view.rolls_remaining);
}

fn print_candidates(game: &Game) {
    let cands = game.candidates();
    if cands.is_empty() {
        return;
    }
    print!("open:");
    for (c, v) in cands {
        match v {
            Some(v) => print!(" {}={}", c.name(), v),
            None => print!(" {}=-", c.name()),
        }
    }
    println!();
}

fn print_table(game: &Game) {
    let cands = game.candidates();
    for c in yh_core::category::ALL {
        let entry = game.sheet().entry(c);
        let status = if entry.used {
            format!("{:>3}", entry.value.unwrap_or(0))
        } else {
            match cands.iter().find(|(cc, _)| *cc == c) {
                Some((_, Some(v))) => format!("({})", v),
                Some((_, None)) => "(0)".to_string(),
                None => "open".to_string(),
            }
        };
        println!("  {:<15} {}", c.name(), status);
    }
    print_totals(game);
}

fn print_totals(game: &Game) {
    let t = game.totals();
    println!(
        "upper {} (+{} bonus) = {}   lower {}   grand {}",
        t.upper_sum, t.upper_bonus, t.upper_total, t.lower_total, t.grand_total
    );
}
