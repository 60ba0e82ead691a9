//! yh: CLI shell for the yh-core Yahtzee engine.
//!
//! Subcommands:
//! - play : interactive terminal game
//! - sim  : batch games with a baseline policy, score statistics

use std::env;
use std::path::PathBuf;
use std::process;

use yh_core::GameConfig;

mod play;
mod policy;
mod sim;

fn main() {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("play") => cmd_play(&args[2..]),
        Some("sim") => cmd_sim(&args[2..]),
        Some("--help") | Some("-h") | None => {
            print_usage();
        }
        Some(other) => {
            eprintln!("Unknown subcommand: {}", other);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"yh {}

USAGE:
    yh play [--seed S] [--config PATH] [--log PATH] [--resume PATH]
    yh sim  [--games N] [--seed S] [--config PATH] [--no-hist]
"#,
        yh_core::VERSION
    );
}

fn cmd_play(args: &[String]) {
    let mut seed: u64 = default_seed();
    let mut config_path: Option<PathBuf> = None;
    let mut log_path: Option<PathBuf> = None;
    let mut resume_path: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yh play

USAGE:
    yh play [--seed S] [--config PATH] [--log PATH] [--resume PATH]

OPTIONS:
    --seed S        Dice RNG seed (default: time-derived)
    --config PATH   YAML rules config (default: standard Yahtzee)
    --log PATH      Append NDJSON game events to PATH
    --resume PATH   Resume from a snapshot written by `save`
"#
                );
                return;
            }
            "--seed" => seed = parse_value(args, &mut i, "--seed"),
            "--config" => config_path = Some(PathBuf::from(take_value(args, &mut i, "--config"))),
            "--log" => log_path = Some(PathBuf::from(take_value(args, &mut i, "--log"))),
            "--resume" => resume_path = Some(PathBuf::from(take_value(args, &mut i, "--resume"))),
            other => {
                eprintln!("Unknown option for `yh play`: {}", other);
                eprintln!("Run `yh play --help` for usage.");
                process::exit(1);
            }
        }
    }

    let config = load_config(config_path.as_deref());
    let opts = play::PlayOpts {
        seed,
        config,
        log_path,
        resume_path,
    };
    if let Err(e) = play::run(opts) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn cmd_sim(args: &[String]) {
    let mut games: usize = 10_000;
    let mut seed: u64 = 0;
    let mut no_hist = false;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yh sim

USAGE:
    yh sim [--games N] [--seed S] [--config PATH] [--no-hist]

OPTIONS:
    --games N       Number of games to simulate (default: 10000)
    --seed S        RNG seed (default: 0)
    --config PATH   YAML rules config (default: standard Yahtzee)
    --no-hist       Skip printing histogram
"#
                );
                return;
            }
            "--games" => games = parse_value(args, &mut i, "--games"),
            "--seed" => seed = parse_value(args, &mut i, "--seed"),
            "--no-hist" => {
                no_hist = true;
                i += 1;
            }
            "--config" => config_path = Some(PathBuf::from(take_value(args, &mut i, "--config"))),
            other => {
                eprintln!("Unknown option for `yh sim`: {}", other);
                eprintln!("Run `yh sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    let config = load_config(config_path.as_deref());
    let res = sim::run(games, seed, config);
    sim::print_report(&res, no_hist);
}

fn load_config(path: Option<&std::path::Path>) -> GameConfig {
    match path {
        None => GameConfig::default(),
        Some(p) => GameConfig::load_path(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {}", p.display(), e);
            process::exit(1);
        }),
    }
}

fn default_seed() -> u64 {
    yh_logging::now_ms()
}

fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> &'a str {
    if *i + 1 >= args.len() {
        eprintln!("Missing value for {}", flag);
        process::exit(1);
    }
    let v = &args[*i + 1];
    *i += 2;
    v
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> T {
    let raw = take_value(args, i, flag).to_string();
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, raw);
        process::exit(1);
    })
}
