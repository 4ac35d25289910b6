//! Line-oriented console front end for the minegrid engine.

mod command;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use command::{Command, HELP};
use minegrid_core::{ActionOutcome, ActionResult, BoardEngine, CellCount, Coord, GameConfig, GameState};
use std::io::{self, BufRead, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Preset {
    Default,
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    fn config(self) -> GameConfig {
        match self {
            Self::Default => GameConfig::DEFAULT,
            Self::Beginner => GameConfig::BEGINNER,
            Self::Intermediate => GameConfig::INTERMEDIATE,
            Self::Expert => GameConfig::EXPERT,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size and mine count to start from
    #[arg(short, long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,
    /// Number of rows, overrides the preset
    #[arg(short, long)]
    rows: Option<Coord>,
    /// Number of columns, overrides the preset
    #[arg(short, long)]
    cols: Option<Coord>,
    /// Number of mines, overrides the preset
    #[arg(short, long)]
    mines: Option<CellCount>,
    /// Seed for mine placement, random if omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Print one JSON result per command instead of drawing the board
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    verbose: Verbosity,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let preset = self.preset.config();
        let rows = self.rows.unwrap_or(preset.rows());
        let cols = self.cols.unwrap_or(preset.cols());
        let mines = self.mines.unwrap_or(preset.mines());

        GameConfig::new(rows, cols, mines).context("Invalid board configuration")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Starting session, seed {}", seed);

    let mut engine = BoardEngine::new(config, seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    if !args.json {
        writeln!(stdout, "{HELP}")?;
        draw(&mut stdout, &engine)?;
    }

    for line in stdin.lock().lines() {
        let line = line.context("Could not read command")?;
        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err:#}")?;
                continue;
            }
        };

        match command {
            Command::Act(action, coords) => {
                let result = engine.apply(coords, action);
                if args.json {
                    writeln!(stdout, "{}", serde_json::to_string(&result)?)?;
                } else {
                    report(&mut stdout, &engine, result)?;
                }
            }
            Command::Restart => {
                engine.restart();
                if !args.json {
                    draw(&mut stdout, &engine)?;
                }
            }
            Command::Help => writeln!(stdout, "{HELP}")?,
            Command::Quit => break,
        }
    }

    Ok(())
}

fn draw(out: &mut impl Write, engine: &BoardEngine) -> io::Result<()> {
    write!(out, "{}", engine.board())?;
    writeln!(out, "Mines left: {}", engine.mines_left())
}

fn report(out: &mut impl Write, engine: &BoardEngine, result: ActionResult) -> io::Result<()> {
    if result.outcome == ActionOutcome::Ignored {
        return writeln!(out, "Nothing to do there.");
    }

    draw(out, engine)?;
    match result.state {
        GameState::Playing => Ok(()),
        GameState::Won => writeln!(out, "You Win! (`n` for a new game)"),
        GameState::Lost => writeln!(out, "Game Over! (`n` for a new game)"),
    }
}
