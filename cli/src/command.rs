//! Parsing of the typed commands read from standard input.

use anyhow::{Context, Result, bail};
use minegrid_core::{Action, Coord, Coord2};

pub const HELP: &str = "\
Commands:
  r ROW COL   reveal a cell (also `r ROW,COL`)
  f ROW COL   cycle flag / unknown / covered on a cell
  n           start a new game
  h           show this help
  q           quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action, Coord2),
    Restart,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    let action = match verb {
        "r" | "reveal" => Action::RevealPrimary,
        "f" | "flag" => Action::ToggleFlag,
        "n" | "new" => return no_arguments(Command::Restart, rest),
        "h" | "help" | "?" => return no_arguments(Command::Help, rest),
        "q" | "quit" | "exit" => return no_arguments(Command::Quit, rest),
        "" => bail!("empty command"),
        other => bail!("unknown command `{other}`"),
    };

    Ok(Command::Act(action, parse_coords(rest)?))
}

fn no_arguments(command: Command, rest: &str) -> Result<Command> {
    if rest.trim().is_empty() {
        Ok(command)
    } else {
        bail!("unexpected arguments `{}`", rest.trim())
    }
}

fn parse_coords(text: &str) -> Result<Coord2> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        bail!("expected a row and a column, got `{}`", text.trim());
    };

    let row: Coord = row.parse().with_context(|| format!("invalid row `{row}`"))?;
    let col: Coord = col.parse().with_context(|| format!("invalid column `{col}`"))?;
    Ok((row, col))
}
