use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::canvas::{draw, DrawSurface};
use crate::config::MazeConfig;
use crate::errors::*;
use crate::generators::{step, NeighbourChooser, RandomChooser};
use crate::renderers::{render, DrawCommand, RenderOptions};
use crate::state::MazeState;

/// Paces ticks to a target rate by sleeping until the next tick deadline.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl TickClock {
    /// `ticks_per_second == 0` never waits.
    pub fn new(ticks_per_second: u32) -> TickClock {
        let period = if ticks_per_second == 0 {
            None
        } else {
            Some(Duration::from_secs(1) / ticks_per_second)
        };
        TickClock {
            period,
            next_deadline: None,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Block until the next tick is due. A late tick resets the schedule instead of bursting.
    pub fn wait_for_next_tick(&mut self) {
        let period = match self.period {
            Some(p) => p,
            None => return,
        };
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + period);
        if deadline > now {
            thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + period);
        } else {
            self.next_deadline = Some(now + period);
        }
    }
}

/// Owns the maze state and drives it one step and one render per tick.
#[derive(Debug)]
pub struct Driver<C: NeighbourChooser> {
    state: MazeState,
    chooser: C,
    options: RenderOptions,
    ticks: usize,
}

impl Driver<RandomChooser<SmallRng>> {
    /// Validate the configuration and build a driver with a uniform random chooser.
    pub fn setup(config: &MazeConfig) -> Result<Driver<RandomChooser<SmallRng>>> {
        let chooser = match config.seed {
            Some(seed) => RandomChooser::from_seed(seed),
            None => RandomChooser::from_entropy(),
        };
        Driver::with_chooser(config, chooser)
    }
}

impl<C: NeighbourChooser> Driver<C> {
    pub fn with_chooser(config: &MazeConfig, chooser: C) -> Result<Driver<C>> {
        config.validate().chain_err(|| "Invalid maze configuration")?;
        let state = MazeState::new(config.rows, config.columns)?;
        info!(rows = config.rows.0,
              columns = config.columns.0,
              seed = ?config.seed,
              ticks_per_second = config.ticks_per_second,
              "maze driver set up");

        Ok(Driver {
            state,
            chooser,
            options: config.render_options(),
            ticks: 0,
        })
    }

    #[inline]
    pub fn state(&self) -> &MazeState {
        &self.state
    }

    #[inline]
    pub fn render_options(&self) -> &RenderOptions {
        &self.options
    }

    #[inline]
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state.is_complete()
    }

    /// One step, unless generation has finished, then one render of the result.
    pub fn tick(&mut self) -> Vec<DrawCommand> {
        if !self.state.is_complete() {
            let outcome = step(&mut self.state, &mut self.chooser);
            debug!(tick = self.ticks, ?outcome, "tick");
        }
        self.ticks += 1;
        self.frame()
    }

    /// Render the current state without stepping.
    pub fn frame(&self) -> Vec<DrawCommand> {
        render(&self.state, &self.options)
    }

    /// Tick until the maze is complete, drawing every frame onto `surface`, then
    /// draw the finished maze once more. Returns the number of ticks taken.
    pub fn run<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, clock: &mut TickClock) -> usize {
        let started = Instant::now();
        let first_tick = self.ticks;

        while !self.state.is_complete() {
            let commands = self.tick();
            draw(&commands, surface);
            clock.wait_for_next_tick();
        }
        draw(&self.frame(), surface);

        let ticks = self.ticks - first_tick;
        info!(ticks, elapsed_ms = started.elapsed().as_millis() as u64, "maze driver finished");
        ticks
    }
}
