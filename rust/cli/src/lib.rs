//! # quinte-cli: terminal front end for the five-seat hold'em table
//!
//! The [`run`] entry point parses arguments and dispatches to the
//! subcommand handlers. Output and error streams are passed in as
//! `&mut dyn Write`, so tests drive the whole binary through buffers.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["quinte", "deal", "--seed", "42"];
//! let code = quinte_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `play`: run a table of humans and bots until one seat holds all chips
//! - `deal`: deal one seeded hand face up with evaluator verdicts
//! - `cfg`: show the resolved configuration and value sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod prompt;
pub mod ui;
pub mod validation;

use cli::{Commands, QuinteCli};
use commands::{handle_cfg_command, handle_deal_command, handle_play_command};
pub use error::CliError;

/// Parses the argument list and runs one subcommand, returning the
/// process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = QuinteCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: quinte <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: quinte --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play {
                seed,
                chips,
                bot_seed,
                max_hands,
            } => {
                // QUINTE_TEST_INPUT scripts the whole session for tests
                // and automation; real stdin otherwise
                let result = match std::env::var("QUINTE_TEST_INPUT") {
                    Ok(script) => {
                        let mut input = std::io::Cursor::new(script.into_bytes());
                        handle_play_command(seed, chips, bot_seed, max_hands, out, err, &mut input)
                    }
                    Err(_) => {
                        let stdin = std::io::stdin();
                        let mut stdin_lock = stdin.lock();
                        handle_play_command(
                            seed,
                            chips,
                            bot_seed,
                            max_hands,
                            out,
                            err,
                            &mut stdin_lock,
                        )
                    }
                };
                match result {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => report(err, &e),
                }
            }
            Commands::Deal { seed, json } => match handle_deal_command(seed, json, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => report(err, &e),
            },
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => report(err, &e),
            },
        },
    }
}

fn report(err: &mut dyn Write, e: &CliError) -> i32 {
    let _ = writeln!(err, "Error: {}", e);
    exit_code::ERROR
}
