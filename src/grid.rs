use std::fmt;

use error_chain::bail;
use itertools::iproduct;

use crate::cells::{Cartesian2DCoordinate, Cell, CompassPrimary, CoordinateSmallVec,
                   NEIGHBOUR_ORDER};
use crate::errors::*;
use crate::units::{ColumnsCount, NodesCount, RowsCount};

/// A rectangular grid of square cells stored as a flat row-major arena.
///
/// The grid owns every cell by value. Everything else refers to cells by
/// `Cartesian2DCoordinate` so mutation through the grid is always visible.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}", self.rows, self.columns)
    }
}

impl Grid {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);
        let max_side = u32::MAX as usize;
        let cells_count = rows_count.checked_mul(columns_count);

        match cells_count {
            Some(n) if n > 0 && rows_count <= max_side && columns_count <= max_side => {
                Ok(Grid {
                    cells: vec![Cell::default(); n],
                    rows,
                    columns,
                })
            }
            _ => bail!(ErrorKind::InvalidGridDimensions(rows_count, columns_count)),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn nodes_count(&self) -> NodesCount {
        NodesCount(self.cells.len())
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.columns.0 && (coord.y as usize) < self.rows.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn index_of(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.columns.0 + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn coordinate_of(&self, index: usize) -> Option<Cartesian2DCoordinate> {
        if index < self.cells.len() {
            let width = self.columns.0;
            Some(Cartesian2DCoordinate::new((index % width) as u32, (index / width) as u32))
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, coord: Cartesian2DCoordinate) -> Option<&mut Cell> {
        match self.index_of(coord) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// Row-major iteration over all cell coordinates.
    pub fn iter(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        iproduct!(0..self.rows.0 as u32, 0..self.columns.0 as u32)
            .map(|(y, x)| Cartesian2DCoordinate::new(x, y))
    }

    pub fn iter_row(&self) -> impl Iterator<Item = Vec<Cartesian2DCoordinate>> {
        let columns = self.columns.0 as u32;
        (0..self.rows.0 as u32)
            .map(move |y| (0..columns).map(|x| Cartesian2DCoordinate::new(x, y)).collect())
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Cartesian2DCoordinate, &Cell)> + '_ {
        self.iter().zip(self.cells.iter())
    }

    /// Cells to the West, North, East or South of a particular cell, in that order,
    /// but not necessarily joined by a passage.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        NEIGHBOUR_ORDER.iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        coord.offset(direction).filter(|&c| self.is_valid_coordinate(c))
    }

    /// Is there no wall on the `direction` side of the cell?
    ///
    /// The outer boundary of the grid is never open, whatever the cell's flags say.
    pub fn is_open(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction).is_some() &&
        self.cell(coord).map_or(false, |cell| !cell.walls.has(direction))
    }

    /// Knock down the wall separating two 4-adjacent cells, on both sides.
    ///
    /// Returns the direction leading from `a` to `b`.
    pub fn remove_wall_between(&mut self,
                               a: Cartesian2DCoordinate,
                               b: Cartesian2DCoordinate)
                               -> Result<CompassPrimary> {
        for &coord in &[a, b] {
            if !self.is_valid_coordinate(coord) {
                bail!(ErrorKind::InvalidGridCoordinate(coord));
            }
        }
        let dir = CompassPrimary::between(a, b).ok_or(ErrorKind::CellsNotAdjacent(a, b))?;

        if let Some(cell) = self.cell_mut(a) {
            cell.walls.clear(dir);
        }
        if let Some(cell) = self.cell_mut(b) {
            cell.walls.clear(dir.opposite());
        }
        Ok(dir)
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visited()).count()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn small_grid(w: usize, h: usize) -> Grid {
        Grid::new(RowsCount(h), ColumnsCount(w)).expect("grid dimensions invalid")
    }

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for &(rows, columns) in &[(0, 0), (0, 5), (5, 0)] {
            match Grid::new(RowsCount(rows), ColumnsCount(columns)) {
                Err(Error(ErrorKind::InvalidGridDimensions(r, c), _)) => {
                    assert_eq!((r, c), (rows, columns));
                }
                other => panic!("expected a dimensions error, got {:?}", other),
            }
        }
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(Grid::new(RowsCount(usize::MAX), ColumnsCount(2)).is_err());
    }

    #[test]
    fn new_grid_is_fully_walled() {
        let g = small_grid(3, 2);
        assert_eq!(g.size(), 6);
        assert_eq!(g.nodes_count(), NodesCount(6));
        assert_eq!(g.visited_count(), 0);
        for (_, cell) in g.iter_cells() {
            assert_eq!(cell.walls.count(), 4);
        }
    }

    #[test]
    fn neighbour_cells() {
        let g = small_grid(10, 10);

        let check_expected_neighbours = |coord, expected_neighbours: &[Cartesian2DCoordinate]| {
            let neighbours: Vec<Cartesian2DCoordinate> =
                g.neighbours(coord).iter().cloned().sorted().collect();
            let expected: Vec<Cartesian2DCoordinate> =
                expected_neighbours.iter().cloned().sorted().collect();
            assert_eq!(neighbours, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // side element examples
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(9, 8), &[gc(9, 7), gc(9, 9), gc(8, 8)]);

        // Some place with 4 neighbours inside the grid
        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbours_come_in_west_north_east_south_order() {
        let g = small_grid(3, 3);
        assert_eq!(&*g.neighbours(gc(1, 1)), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbour_at_dir() {
        let g = small_grid(2, 2);
        let check_neighbour = |coord, dir: CompassPrimary, expected| {
            assert_eq!(g.neighbour_at_direction(coord, dir), expected);
        };
        check_neighbour(gc(0, 0), CompassPrimary::North, None);
        check_neighbour(gc(0, 0), CompassPrimary::South, Some(gc(0, 1)));
        check_neighbour(gc(0, 0), CompassPrimary::East, Some(gc(1, 0)));
        check_neighbour(gc(0, 0), CompassPrimary::West, None);

        check_neighbour(gc(1, 1), CompassPrimary::North, Some(gc(1, 0)));
        check_neighbour(gc(1, 1), CompassPrimary::South, None);
        check_neighbour(gc(1, 1), CompassPrimary::East, None);
        check_neighbour(gc(1, 1), CompassPrimary::West, Some(gc(0, 1)));
    }

    #[test]
    fn grid_coordinate_as_index() {
        let g = small_grid(3, 3);
        let coords = &[gc(0, 0), gc(1, 0), gc(2, 0), gc(0, 1), gc(1, 1), gc(2, 1), gc(0, 2),
                       gc(1, 2), gc(2, 2)];
        let indices: Vec<Option<usize>> = coords.iter().map(|coord| g.index_of(*coord)).collect();
        let expected = (0..9).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(expected, indices);

        assert_eq!(g.index_of(gc(2, 3)), None);
        assert_eq!(g.index_of(gc(3, 2)), None);
        assert_eq!(g.index_of(gc(u32::MAX, u32::MAX)), None);

        for i in 0..9 {
            assert_eq!(g.coordinate_of(i).and_then(|c| g.index_of(c)), Some(i));
        }
        assert_eq!(g.coordinate_of(9), None);
    }

    #[test]
    fn cell_iter() {
        let g = small_grid(2, 2);
        assert_eq!(g.iter().collect::<Vec<Cartesian2DCoordinate>>(),
                   &[gc(0, 0), gc(1, 0), gc(0, 1), gc(1, 1)]);
    }

    #[test]
    fn row_iter() {
        let g = small_grid(2, 3);
        assert_eq!(g.iter_row().collect::<Vec<Vec<Cartesian2DCoordinate>>>(),
                   vec![vec![gc(0, 0), gc(1, 0)],
                        vec![gc(0, 1), gc(1, 1)],
                        vec![gc(0, 2), gc(1, 2)]]);
    }

    #[test]
    fn removing_walls_is_symmetric_in_every_direction() {
        let centre = gc(1, 1);
        let cases = [(gc(1, 0), CompassPrimary::North),
                     (gc(1, 2), CompassPrimary::South),
                     (gc(2, 1), CompassPrimary::East),
                     (gc(0, 1), CompassPrimary::West)];

        for &(other, dir) in &cases {
            let mut g = small_grid(3, 3);
            assert_eq!(g.remove_wall_between(centre, other).unwrap(), dir);

            let centre_walls = g.cell(centre).unwrap().walls;
            let other_walls = g.cell(other).unwrap().walls;
            assert!(!centre_walls.has(dir));
            assert!(!other_walls.has(dir.opposite()));
            assert_eq!(centre_walls.count(), 3);
            assert_eq!(other_walls.count(), 3);
            assert!(g.is_open(centre, dir));
            assert!(g.is_open(other, dir.opposite()));
        }
    }

    #[test]
    fn removing_walls_between_strangers_fails() {
        let mut g = small_grid(3, 3);
        assert!(g.remove_wall_between(gc(0, 0), gc(2, 2)).is_err());
        assert!(g.remove_wall_between(gc(0, 0), gc(0, 0)).is_err());
        assert!(g.remove_wall_between(gc(2, 2), gc(3, 2)).is_err());
        assert!(g.iter_cells().all(|(_, c)| c.walls.count() == 4));
    }

    #[test]
    fn boundary_is_never_open() {
        let g = small_grid(1, 1);
        for dir in &NEIGHBOUR_ORDER {
            assert!(!g.is_open(gc(0, 0), *dir));
        }
    }
}
