//! Passage graph analysis of a carved grid.
//!
//! Cells are graph nodes (node index == row-major grid index) and every pair of
//! adjacent cells with no wall between them is an undirected edge. A perfect maze is
//! exactly the case where that graph is a spanning tree.

use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::Grid;

pub type PassageGraph = UnGraph<Cartesian2DCoordinate, (), u32>;

/// Build the passage graph. A passage only counts when both facing walls are absent.
pub fn passage_graph(grid: &Grid) -> PassageGraph {
    let size = grid.size();
    // Each cell only looks East and South so every passage is added once.
    let mut graph = PassageGraph::with_capacity(size, size.saturating_sub(1));
    for coord in grid.iter() {
        let _ = graph.add_node(coord);
    }

    for coord in grid.iter() {
        for &dir in &[CompassPrimary::East, CompassPrimary::South] {
            if let Some(neighbour) = grid.neighbour_at_direction(coord, dir) {
                if grid.is_open(coord, dir) && grid.is_open(neighbour, dir.opposite()) {
                    let a = node_index(grid, coord);
                    let b = node_index(grid, neighbour);
                    let _ = graph.add_edge(a, b, ());
                }
            }
        }
    }
    graph
}

/// Every cell side whose wall flag disagrees with the facing side of its neighbour.
pub fn asymmetric_walls(grid: &Grid) -> Vec<(Cartesian2DCoordinate, CompassPrimary)> {
    grid.iter()
        .flat_map(|coord| {
            [CompassPrimary::East, CompassPrimary::South]
                .iter()
                .filter_map(move |&dir| {
                    grid.neighbour_at_direction(coord, dir).and_then(|neighbour| {
                        if grid.is_open(coord, dir) != grid.is_open(neighbour, dir.opposite()) {
                            Some((coord, dir))
                        } else {
                            None
                        }
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Is the grid a perfect maze: symmetric walls, connected, and no cycles.
pub fn is_perfect_maze(grid: &Grid) -> bool {
    if !asymmetric_walls(grid).is_empty() {
        return false;
    }
    let graph = passage_graph(grid);
    graph.edge_count() == grid.size() - 1 && connected_components(&graph) == 1 &&
    !is_cyclic_undirected(&graph)
}

#[inline]
fn node_index(grid: &Grid, coord: Cartesian2DCoordinate) -> NodeIndex<u32> {
    NodeIndex::new(grid.index_of(coord).expect("passage endpoints are inside the grid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(RowsCount(h), ColumnsCount(w)).unwrap()
    }

    #[test]
    fn walled_grid_has_no_passages() {
        let g = grid(3, 3);
        let graph = passage_graph(&g);
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 0);
        assert!(!is_perfect_maze(&g));
    }

    #[test]
    fn single_cell_is_trivially_perfect() {
        assert!(is_perfect_maze(&grid(1, 1)));
    }

    #[test]
    fn spanning_path_is_perfect() {
        let mut g = grid(2, 2);
        g.remove_wall_between(gc(0, 0), gc(1, 0)).unwrap();
        g.remove_wall_between(gc(1, 0), gc(1, 1)).unwrap();
        assert!(!is_perfect_maze(&g));
        g.remove_wall_between(gc(1, 1), gc(0, 1)).unwrap();
        assert!(is_perfect_maze(&g));
        assert_eq!(passage_graph(&g).edge_count(), 3);
    }

    #[test]
    fn loops_are_not_perfect() {
        let mut g = grid(2, 2);
        g.remove_wall_between(gc(0, 0), gc(1, 0)).unwrap();
        g.remove_wall_between(gc(1, 0), gc(1, 1)).unwrap();
        g.remove_wall_between(gc(1, 1), gc(0, 1)).unwrap();
        g.remove_wall_between(gc(0, 1), gc(0, 0)).unwrap();
        assert_eq!(passage_graph(&g).edge_count(), 4);
        assert!(!is_perfect_maze(&g));
    }

    #[test]
    fn one_sided_wall_removal_is_reported() {
        let mut g = grid(2, 1);
        if let Some(cell) = g.cell_mut(gc(0, 0)) {
            cell.walls.clear(CompassPrimary::East);
        }
        assert_eq!(asymmetric_walls(&g), vec![(gc(0, 0), CompassPrimary::East)]);
        assert_eq!(passage_graph(&g).edge_count(), 0);
        assert!(!is_perfect_maze(&g));
    }
}
