//! Arena CLI
//!
//! Run batches of self-play dice chess games and report the results.

use std::env;
use std::path::Path;
use std::process;

use dice_arena::{MatchConfig, MatchRunner};

fn print_usage() {
    println!("Dice chess arena");
    println!();
    println!("Usage:");
    println!("  dice_arena [--games N] [--turns N] [--seed S] [--config FILE] [--json] [--quiet]");
    println!();
    println!("Options:");
    println!("  --games N      Number of games to play (default 10)");
    println!("  --turns N      Turn cap per game (default 400)");
    println!("  --seed S       Seed dice and choosers for a reproducible run");
    println!("  --config FILE  Load the options above from a TOML file");
    println!("  --json         Print the summary as JSON instead of a report");
    println!("  --quiet        Suppress per-game progress lines");
}

fn parse_or_exit<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("Error: {} needs a numeric argument", flag);
            process::exit(2);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut config = MatchConfig::default();
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                config.num_games = parse_or_exit("--games", args.get(i + 1));
                i += 2;
            }
            "--turns" => {
                config.max_turns = parse_or_exit("--turns", args.get(i + 1));
                i += 2;
            }
            "--seed" => {
                config.seed = Some(parse_or_exit("--seed", args.get(i + 1)));
                i += 2;
            }
            "--config" => {
                let path = match args.get(i + 1) {
                    Some(p) => p,
                    None => {
                        eprintln!("Error: --config needs a file path");
                        process::exit(2);
                    }
                };
                config = match MatchConfig::from_toml_file(Path::new(path)) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error: failed to load {}: {}", path, e);
                        process::exit(2);
                    }
                };
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            "--quiet" => {
                config.verbose = false;
                i += 1;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    let summary = MatchRunner::new(config).run_match();
    if json {
        println!("{}", summary.to_json());
    } else {
        summary.print_report();
    }
}
