// main.rs - Terminal Game of Life on a wrap-around board loaded from a file

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use conway::{Grid, Simulation};
use grid_display::{FrameWriter, Palette};

#[derive(Parser)]
#[command(name = "conway_term")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal board, printed to the terminal")]
struct Cli {
    /// Board file: width line, height line, then rows of 0/1
    #[arg(default_value = "board.txt")]
    board: PathBuf,

    /// Number of generations to run after the initial frame
    #[arg(short, long, default_value = "100")]
    generations: u64,

    /// Pause before each generation, in milliseconds
    #[arg(short, long, default_value = "100")]
    delay_ms: u64,

    /// Redraw in place instead of appending frames
    #[arg(long)]
    clear: bool,

    /// Glyph for live cells
    #[arg(long, default_value = "o")]
    live: char,

    /// Glyph for dead cells
    #[arg(long, default_value = " ")]
    dead: char,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    execute(&cli, io::stdout().lock(), io::stderr().lock())
}

/// Loads the board and runs it, frames to `out` and diagnostics to `err`.
fn execute<W: Write, E: Write>(cli: &Cli, out: W, mut err: E) -> ExitCode {
    let grid = match Grid::from_file(&cli.board) {
        Ok(grid) => grid,
        Err(e) => {
            log::debug!("load failed: {:?}", e);
            let _ = writeln!(err, "Could not load {}: {}", cli.board.display(), e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "loaded {}: {}x{}, population {}",
        cli.board.display(),
        grid.width(),
        grid.height(),
        grid.population()
    );

    match run(cli, grid, out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Output error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(cli: &Cli, grid: Grid, out: W) -> io::Result<W> {
    let palette = Palette { live: cli.live, dead: cli.dead };
    let mut frames = FrameWriter::new(out, palette).with_clear(cli.clear);
    let delay = Duration::from_millis(cli.delay_ms);

    let mut sim = Simulation::new(grid);
    frames.write_frame(sim.grid())?;

    for _ in 0..cli.generations {
        thread::sleep(delay);
        sim.advance();
        frames.write_frame(sim.grid())?;
    }

    match sim.period() {
        Some(period) => log::info!(
            "finished {} generations, population {}, period {}",
            sim.generation(),
            sim.grid().population(),
            period
        ),
        None => log::info!(
            "finished {} generations, population {}",
            sim.generation(),
            sim.grid().population()
        ),
    }
    Ok(frames.into_inner())
}
