use bit_set::BitSet;

use crate::cells::Cartesian2DCoordinate;
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{ColumnsCount, RowsCount};

/// The mutable simulation state of a step-wise recursive backtracker.
///
/// Only `MazeState::new` produces one. The generator is the single writer.
#[derive(Debug, Clone)]
pub struct MazeState {
    grid: Grid,
    active: Cartesian2DCoordinate,
    stack: Vec<Cartesian2DCoordinate>,
    // Row-major indices of the coordinates on `stack`.
    on_stack: BitSet,
    complete: bool,
    steps: usize,
}

impl MazeState {
    /// A fully walled grid with the active cell at `(0, 0)` and nothing on the stack.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<MazeState> {
        let grid = Grid::new(rows, columns)?;
        let on_stack = BitSet::with_capacity(grid.size());

        Ok(MazeState {
            grid,
            active: Cartesian2DCoordinate::new(0, 0),
            stack: Vec::new(),
            on_stack,
            complete: false,
            steps: 0,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn active(&self) -> Cartesian2DCoordinate {
        self.active
    }

    /// The backtracking path, bottom of the stack first.
    #[inline]
    pub fn stack(&self) -> &[Cartesian2DCoordinate] {
        &self.stack
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of transitions applied so far. No-op steps after completion are not counted.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_on_stack(&self, coord: Cartesian2DCoordinate) -> bool {
        self.grid.index_of(coord).map_or(false, |i| self.on_stack.contains(i))
    }

    #[inline]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn visit_active(&mut self) {
        let active = self.active;
        self.grid
            .cell_mut(active)
            .expect("the active cell is always inside the grid")
            .visit();
    }

    /// Push the active cell and make `next` active.
    pub(crate) fn advance_to(&mut self, next: Cartesian2DCoordinate) {
        let index = self.grid.index_of(self.active).expect("the active cell is always inside the grid");
        let inserted = self.on_stack.insert(index);
        assert!(inserted, "cell {:?} pushed onto the backtracking stack twice", self.active);

        self.stack.push(self.active);
        self.active = next;
        debug_assert!(!self.is_on_stack(next), "active cell {:?} is on the stack", next);
    }

    /// Pop the top of the stack into the active cell, if there is one.
    pub(crate) fn backtrack(&mut self) -> Option<Cartesian2DCoordinate> {
        let top = self.stack.pop()?;
        if let Some(index) = self.grid.index_of(top) {
            self.on_stack.remove(index);
        }
        self.active = top;
        Some(top)
    }

    pub(crate) fn mark_complete(&mut self) {
        self.complete = true;
    }

    pub(crate) fn count_step(&mut self) {
        self.steps += 1;
    }

    /// Check the structural invariants, panicking with a description on the first violation.
    ///
    /// These can only break through a bug in the generator.
    pub fn assert_invariants(&self) {
        assert!(self.grid.is_valid_coordinate(self.active),
                "active cell {:?} is outside the grid",
                self.active);
        assert!(!self.is_on_stack(self.active),
                "active cell {:?} is on the backtracking stack",
                self.active);
        assert_eq!(self.on_stack.len(),
                   self.stack.len(),
                   "the backtracking stack holds duplicates");
        for &coord in &self.stack {
            let visited = self.grid.cell(coord).map_or(false, |c| c.is_visited());
            assert!(visited, "stacked cell {:?} has not been visited", coord);
        }
        if self.complete {
            assert!(self.stack.is_empty(), "complete with a non-empty stack");
            assert_eq!(self.grid.visited_count(),
                       self.grid.size(),
                       "complete with unvisited cells");
        }
    }
}
