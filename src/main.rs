/// Entry point and browse loop.

mod config;
mod domain;
mod map;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use config::{ColorMode, ViewerConfig};
use map::composite::UnifiedGrid;
use map::source;
use ui::input::{self, Command};
use ui::palette::Palette;
use ui::renderer::Renderer;
use ui::viewport::Viewport;

#[derive(Parser, Debug)]
#[command(name = "twview")]
#[command(about = "View Teeworlds maps through the command line")]
struct Args {
    /// Path to the map file
    map: PathBuf,

    /// Scroll step of the view window, in map cells (default 3)
    #[arg(long)]
    step: Option<usize>,

    /// Width of the view window, in map cells (default: fit the terminal)
    #[arg(long)]
    width: Option<usize>,

    /// Height of the view window, in map cells (default: fit the terminal)
    #[arg(long)]
    height: Option<usize>,

    /// Draw the view window without a border
    #[arg(long)]
    no_border: bool,

    /// Palette selection
    #[arg(long, value_enum)]
    colors: Option<ColorMode>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = resolve_config(&args);

    // Load and composite before touching the terminal, so a bad map path
    // fails as an ordinary error message with a non-zero exit.
    let layers = match source::load_map(&args.map) {
        Ok(layers) => layers,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let grid = UnifiedGrid::compose(&layers);

    let palette = Palette::select(config.colors);
    let mut renderer = Renderer::new(palette, layers.title.clone(), config.border);

    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return ExitCode::FAILURE;
    }

    let result = browse_loop(&grid, &config, &mut renderer);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// File config with command-line flags layered on top.
fn resolve_config(args: &Args) -> ViewerConfig {
    let mut config = ViewerConfig::load();
    if let Some(step) = args.step {
        config.step = step;
    }
    if args.width.is_some() {
        config.width = args.width;
    }
    if args.height.is_some() {
        config.height = args.height;
    }
    if args.no_border {
        config.border = false;
    }
    if let Some(colors) = args.colors {
        config.colors = colors;
    }
    config
}

/// Render, block for one command, mutate, repeat. The input read is the
/// only suspension point; Quit breaks out before the next render.
fn browse_loop(grid: &UnifiedGrid, config: &ViewerConfig, renderer: &mut Renderer) -> Result<()> {
    let (term_cols, term_rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut view = Viewport::open(config, grid.width(), grid.height(), term_cols, term_rows);

    loop {
        renderer.render(grid, &view)?;

        match input::read_command()? {
            Command::Scroll(dir) => {
                view.scroll(dir, grid.width(), grid.height());
            }
            Command::Redraw => {}
            Command::Quit => return Ok(()),
        }
    }
}
