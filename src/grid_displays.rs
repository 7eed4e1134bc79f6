use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::Grid;
use crate::state::MazeState;

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";

const EMPTY_BODY: &str = "   ";
const ACTIVE_BODY: &str = " @ ";
const STACK_BODY: &str = " . ";

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render_text(self, |_| EMPTY_BODY))
    }
}

/// The grid with the active cell marked `@` and the backtracking path marked `.`
impl fmt::Display for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let body = |coord: Cartesian2DCoordinate| if coord == self.active() {
            ACTIVE_BODY
        } else if self.is_on_stack(coord) {
            STACK_BODY
        } else {
            EMPTY_BODY
        };
        f.write_str(&render_text(self.grid(), body))
    }
}

/// Draw the maze with box drawing characters, 3 glyphs per cell body.
///
/// Each cell uses the southern wall of the cell above it as its own northern wall,
/// so per cell we only draw the body, its eastern boundary and its southern
/// boundary plus the south east corner.
fn render_text<F>(grid: &Grid, cell_body: F) -> String
    where F: Fn(Cartesian2DCoordinate) -> &'static str
{
    let columns_count = grid.columns().0;
    let rows_count = grid.rows().0;

    // Start by special case rendering the text for the north most boundary
    let mut output = String::from(WALL_RD);
    for x in 0..columns_count as u32 {
        let coord = Cartesian2DCoordinate::new(x, 0);
        output.push_str(WALL_LR_3);
        if grid.is_open(coord, CompassPrimary::East) {
            output.push_str(WALL_LR);
        } else if x as usize == columns_count - 1 {
            output.push_str(WALL_LD);
        } else {
            output.push_str(WALL_LRD);
        }
    }
    output.push('\n');

    for (index_row, row) in grid.iter_row().enumerate() {
        let is_last_row = index_row == rows_count - 1;

        let mut row_middle_section_render = String::from(WALL_UD);
        let mut row_bottom_section_render = String::new();

        for (index_column, cell_coord) in row.into_iter().enumerate() {
            let is_first_column = index_column == 0;
            let is_last_column = index_column == columns_count - 1;
            let east_open = grid.is_open(cell_coord, CompassPrimary::East);
            let south_open = grid.is_open(cell_coord, CompassPrimary::South);

            row_middle_section_render.push_str(cell_body(cell_coord));
            row_middle_section_render.push_str(if east_open { " " } else { WALL_UD });

            if is_first_column {
                row_bottom_section_render = if is_last_row {
                    String::from(WALL_RU)
                } else if south_open {
                    String::from(WALL_UD)
                } else {
                    String::from(WALL_RUD)
                };
            }
            row_bottom_section_render.push_str(if south_open { "   " } else { WALL_LR_3 });

            let corner = match (is_last_row, is_last_column) {
                (true, true) => WALL_LU,
                (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                (false, false) => {
                    let access_se_from_east =
                        grid.neighbour_at_direction(cell_coord, CompassPrimary::East)
                            .map_or(false, |c| grid.is_open(c, CompassPrimary::South));
                    let access_se_from_south =
                        grid.neighbour_at_direction(cell_coord, CompassPrimary::South)
                            .map_or(false, |c| grid.is_open(c, CompassPrimary::East));
                    let show_right_section = !access_se_from_east;
                    let show_down_section = !access_se_from_south;
                    let show_up_section = !east_open;
                    let show_left_section = !south_open;

                    match (show_left_section,
                           show_right_section,
                           show_up_section,
                           show_down_section) {
                        (true, true, true, true) => WALL_LRUD,
                        (true, true, true, false) => WALL_LRU,
                        (true, true, false, true) => WALL_LRD,
                        (true, false, true, true) => WALL_LUD,
                        (false, true, true, true) => WALL_RUD,
                        (true, true, false, false) => WALL_LR,
                        (false, false, true, true) => WALL_UD,
                        (false, true, true, false) => WALL_RU,
                        (true, false, false, true) => WALL_LD,
                        (true, false, true, false) => WALL_LU,
                        (false, true, false, true) => WALL_RD,
                        (true, false, false, false) => WALL_L,
                        (false, true, false, false) => WALL_R,
                        (false, false, true, false) => WALL_U,
                        (false, false, false, true) => WALL_D,
                        _ => " ",
                    }
                }
            };
            row_bottom_section_render.push_str(corner);
        }

        output.push_str(&row_middle_section_render);
        output.push('\n');
        output.push_str(&row_bottom_section_render);
        output.push('\n');
    }

    output
}
