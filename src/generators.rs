use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec};
use crate::state::MazeState;

/// Picks one element out of a sequence of candidates.
///
/// Returns None only when `items` is empty.
pub trait NeighbourChooser {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

/// Uniform choice over the candidates using any `Rng`.
#[derive(Debug, Clone)]
pub struct RandomChooser<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> RandomChooser<R> {
        RandomChooser { rng }
    }
}

impl RandomChooser<SmallRng> {
    /// Reproducible mazes: the same seed always carves the same maze.
    pub fn from_seed(seed: u64) -> RandomChooser<SmallRng> {
        RandomChooser::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> RandomChooser<SmallRng> {
        RandomChooser::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> NeighbourChooser for RandomChooser<R> {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.rng.gen_range(0..items.len()))
        }
    }
}

/// Always takes the first candidate. Carves the same maze every time, useful for demos and tests.
#[derive(Debug, Copy, Clone, Default)]
pub struct FirstChoice;

impl NeighbourChooser for FirstChoice {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.first()
    }
}

/// The transition a single `step` applied.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StepOutcome {
    /// Carved a passage from `from` into the unvisited neighbour `to`.
    Advanced {
        from: Cartesian2DCoordinate,
        to: Cartesian2DCoordinate,
    },
    /// Dead end at `from`, resumed from `to` popped off the stack.
    Backtracked {
        from: Cartesian2DCoordinate,
        to: Cartesian2DCoordinate,
    },
    /// Dead end with an empty stack: every cell is visited.
    Completed,
    /// The maze was already complete, nothing changed.
    AlreadyComplete,
}

/// Unvisited in-bounds neighbours of `coord`, in West, North, East, South order.
pub fn unvisited_neighbours(state: &MazeState,
                            coord: Cartesian2DCoordinate)
                            -> CoordinateSmallVec {
    let grid = state.grid();
    grid.neighbours(coord)
        .iter()
        .cloned()
        .filter(|&c| grid.cell(c).map_or(false, |cell| !cell.is_visited()))
        .collect()
}

/// Apply one transition of the recursive backtracker.
///
/// Either carves into a random unvisited neighbour of the active cell, or
/// backtracks to the top of the stack, or, with nowhere left to go, completes.
/// Once complete every further call is a no-op.
pub fn step<C: NeighbourChooser>(state: &mut MazeState, chooser: &mut C) -> StepOutcome {
    if state.is_complete() {
        warn!("step called on a completed maze, ignoring");
        return StepOutcome::AlreadyComplete;
    }

    let active = state.active();
    let candidates = unvisited_neighbours(state, active);
    let outcome = match chooser.choose(&candidates[..]) {
        Some(&next) => {
            // `next` came from the active cell's neighbours so it is 4-adjacent and inside the grid.
            let dir = state.grid_mut()
                .remove_wall_between(active, next)
                .unwrap_or_else(|e| panic!("carving {:?} -> {:?}: {}", active, next, e));
            state.visit_active();
            state.advance_to(next);
            debug!(?active, ?next, ?dir, "carved passage");
            StepOutcome::Advanced {
                from: active,
                to: next,
            }
        }
        None => {
            state.visit_active();
            match state.backtrack() {
                Some(resume) => {
                    debug!(from = ?active, to = ?resume, "backtracked");
                    StepOutcome::Backtracked {
                        from: active,
                        to: resume,
                    }
                }
                None => {
                    state.mark_complete();
                    StepOutcome::Completed
                }
            }
        }
    };
    state.count_step();

    if outcome == StepOutcome::Completed {
        info!(cells = state.grid().size(),
              steps = state.steps(),
              "maze generation complete");
    }
    outcome
}

/// Step the state until the maze is complete, returning the number of steps applied.
///
/// A fresh grid of n cells takes exactly `2n - 1` steps: one advance into each cell
/// but the first, one backtrack out of each, and the final completing step.
pub fn recursive_backtracker<C: NeighbourChooser>(state: &mut MazeState, chooser: &mut C) -> usize {
    let mut steps = 0;
    while !state.is_complete() {
        step(state, chooser);
        steps += 1;
    }
    steps
}
