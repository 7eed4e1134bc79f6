use docopt::Docopt;
use serde_derive::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mazes::{
    canvas::ImageCanvas,
    config::MazeConfig,
    driver::{Driver, TickClock},
    units::{ColumnsCount, Height, RowsCount, Width},
};

const USAGE: &str = "Mazes

Grow a maze with the recursive backtracker, one step per tick.

Usage:
    mazes_driver -h | --help
    mazes_driver [--rows=<r>] [--columns=<c>] [--width=<w>] [--height=<h>] [--fps=<n>] [--seed=<s>] [--image-out=<path>] [--text] [--screen-view]

Options:
    -h --help              Show this screen.
    --rows=<r>             Number of grid rows [default: 20].
    --columns=<c>          Number of grid columns [default: 20].
    --width=<w>            Canvas width in pixels [default: 600].
    --height=<h>           Canvas height in pixels [default: 600].
    --fps=<n>              Generation steps per second, 0 runs as fast as possible [default: 60].
    --seed=<s>             Seed the neighbour choice for a reproducible maze.
    --image-out=<path>     Output file path for a PNG of the finished maze.
    --text                 Print the finished maze as text to stdout.
    --screen-view          Watch the maze grow in a window (needs the `sdl` feature).
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_width: u32,
    flag_height: u32,
    flag_fps: u32,
    flag_seed: Option<u64>,
    flag_image_out: String,
    flag_text: bool,
    flag_screen_view: bool,
}

mod errors {
    #![allow(deprecated)]
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let config = MazeConfig {
        canvas_width: Width(args.flag_width),
        canvas_height: Height(args.flag_height),
        rows: RowsCount(args.flag_rows),
        columns: ColumnsCount(args.flag_columns),
        ticks_per_second: args.flag_fps,
        seed: args.flag_seed,
    };

    let mut driver = Driver::setup(&config)?;
    let mut clock = TickClock::new(config.ticks_per_second);

    if args.flag_screen_view {
        show_on_screen(&mut driver, &mut clock)?;
    } else {
        let background = driver.render_options().palette().unvisited;
        let mut canvas = ImageCanvas::new(config.canvas_width, config.canvas_height, background);
        driver.run(&mut canvas, &mut clock);

        if !args.flag_image_out.is_empty() {
            canvas.save_png(&args.flag_image_out)?;
            info!(path = %args.flag_image_out, "saved maze image");
        }
    }

    if args.flag_text {
        print!("{}", driver.state());
    }

    Ok(())
}

#[cfg(feature = "sdl")]
fn show_on_screen<C>(driver: &mut Driver<C>, clock: &mut TickClock) -> Result<()>
    where C: mazes::generators::NeighbourChooser
{
    mazes::sdl::show(driver, clock)?;
    Ok(())
}

#[cfg(not(feature = "sdl"))]
fn show_on_screen<C>(driver: &mut Driver<C>, clock: &mut TickClock) -> Result<()>
    where C: mazes::generators::NeighbourChooser
{
    tracing::warn!("built without the `sdl` feature, running the maze headless instead");
    let background = driver.render_options().palette().unvisited;
    let options = *driver.render_options();
    let mut canvas = ImageCanvas::new(options.canvas_width(), options.canvas_height(), background);
    driver.run(&mut canvas, clock);
    Ok(())
}
