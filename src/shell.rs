use crate::ant::AntKind;
use crate::error::{GameError, Result};
use crate::render::{paint_event, render_board};
use crate::simulation::{Game, Outcome};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// One line of player input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Deploy { ant: String, at: String },
    Remove { at: String },
    Boost { boost: String, at: String },
    Turn,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let verb = words.first().map(|w| w.to_ascii_lowercase()).unwrap_or_default();
        let args = words.get(1..).unwrap_or_default();

        let command = match (verb.as_str(), args) {
            ("show", []) => Command::Show,
            ("deploy" | "add" | "d", [ant, at]) => Command::Deploy {
                ant: ant.to_string(),
                at: at.to_string(),
            },
            ("remove" | "rm", [at]) => Command::Remove { at: at.to_string() },
            ("boost" | "b", [boost, at]) => Command::Boost {
                boost: boost.to_string(),
                at: at.to_string(),
            },
            ("turn" | "t", []) => Command::Turn,
            ("end" | "take", [next]) if next.eq_ignore_ascii_case("turn") => Command::Turn,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            _ => return Err(GameError::InvalidCommand(s.trim().to_string())),
        };
        Ok(command)
    }
}

/// Shell behaviour switches
#[derive(Clone, Debug, Default)]
pub struct ShellOptions {
    /// Do not print event lines
    pub suppress_events: bool,
}

/// Read commands from `input` until EOF, `quit`, or the game is decided.
/// Returns the outcome at that point.
pub fn run_shell<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
    options: &ShellOptions,
) -> Result<Outcome> {
    writeln!(out, "{}", render_board(game))?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(out)?;
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}. Type `help` for the list of commands.")?;
                prompt(out)?;
                continue;
            }
        };

        let redraw = match command {
            Command::Show => true,
            Command::Deploy { ant, at } => {
                report(out, game.deploy(&ant, &at), "Invalid deployment: ", ".")?
            }
            Command::Remove { at } => {
                report(out, game.remove(&at).map(drop), "Invalid removal: ", ".")?
            }
            Command::Boost { boost, at } => {
                report(out, game.boost(&boost, &at), "Invalid boost: ", "")?;
                false
            }
            Command::Turn => {
                game.take_turn();
                true
            }
            Command::Help => {
                write_help(out)?;
                false
            }
            Command::Quit => return Ok(game.outcome()),
        };

        let events = game.drain_events();
        if !options.suppress_events {
            for event in &events {
                writeln!(out, "{}", paint_event(event))?;
            }
        }
        if redraw {
            writeln!(out, "{}", render_board(game))?;
        }

        match game.outcome() {
            Outcome::Won => {
                writeln!(out, "{}", "Yaaaay---\nAll bees are vanquished. You win!\n".green())?;
                return Ok(Outcome::Won);
            }
            Outcome::Lost => {
                writeln!(
                    out,
                    "{}",
                    "Bzzzzz---\nThe ant queen has perished! Please try again.\n".yellow()
                )?;
                return Ok(Outcome::Lost);
            }
            Outcome::Ongoing => prompt(out)?,
        }
    }

    Ok(game.outcome())
}

/// Print a failed request; returns whether the board changed
fn report<W: Write>(out: &mut W, result: Result<()>, prefix: &str, suffix: &str) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err) => {
            writeln!(out, "{prefix}{err}{suffix}")?;
            Ok(false)
        }
    }
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{} ", "AvB $".green())?;
    out.flush()?;
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  show                        Shows the current game board.")?;
    writeln!(
        out,
        "  deploy <antType> <tunnel>   Deploys an ant to tunnel (as \"row,col\" eg. \"0,6\"). Types: {}",
        AntKind::NAMES.join(", ")
    )?;
    writeln!(out, "  remove <tunnel>             Removes the ant from the tunnel.")?;
    writeln!(out, "  boost <boost> <tunnel>      Applies a boost to the ant in a tunnel.")?;
    writeln!(out, "  turn                        Ends the current turn. Ants and bees will act.")?;
    writeln!(out, "  quit                        Leaves the game.")?;
    Ok(())
}
