use error_chain::bail;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::errors::*;
use crate::grid::Grid;
use crate::state::MazeState;
use crate::units::{ColumnsCount, Height, RowsCount, Width};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }
}

/// A pixel position on the canvas.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// A pixel rectangle: top left corner plus size.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> PixelRect {
        PixelRect { x, y, w, h }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }
    pub fn top_right(&self) -> Point {
        Point::new(self.x + self.w as i32, self.y)
    }
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.w as i32, self.y + self.h as i32)
    }
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.y + self.h as i32)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum DrawCommand {
    FillRect { rect: PixelRect, colour: Colour },
    Line { from: Point, to: Point, colour: Colour },
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Palette {
    pub unvisited: Colour,
    pub visited: Colour,
    pub stack: Colour,
    pub active: Colour,
    pub wall: Colour,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            unvisited: Colour::rgb(0x33, 0x33, 0x33),
            visited: Colour::rgb(0xff, 0xff, 0xff),
            stack: Colour::rgb(0x64, 0x95, 0xed),
            active: Colour::rgb(0xff, 0x45, 0x00),
            wall: Colour::rgb(0, 0, 0),
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RenderOptions {
    canvas_width: Width,
    canvas_height: Height,
    palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptionsBuilder::new().build()
    }
}

impl RenderOptions {
    #[inline]
    pub fn canvas_width(&self) -> Width {
        self.canvas_width
    }
    #[inline]
    pub fn canvas_height(&self) -> Height {
        self.canvas_height
    }
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Pixel size of one cell on this canvas for a grid of the given dimensions.
    pub fn cell_size(&self, rows: RowsCount, columns: ColumnsCount) -> (u32, u32) {
        let cell_w = u64::from(self.canvas_width.0) / columns.0.max(1) as u64;
        let cell_h = u64::from(self.canvas_height.0) / rows.0.max(1) as u64;
        (cell_w as u32, cell_h as u32)
    }

    /// Check every cell gets at least one pixel each way on this canvas.
    pub fn check_fits(&self, rows: RowsCount, columns: ColumnsCount) -> Result<()> {
        let (w, h) = self.cell_size(rows, columns);
        if w == 0 || h == 0 {
            bail!(ErrorKind::CanvasTooSmall(self.canvas_width.0,
                                            self.canvas_height.0,
                                            rows.0,
                                            columns.0));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder {
            options: RenderOptions {
                canvas_width: Width(600),
                canvas_height: Height(600),
                palette: Palette::default(),
            },
        }
    }
    pub fn canvas_size(mut self, width: Width, height: Height) -> Self {
        self.options.canvas_width = width;
        self.options.canvas_height = height;
        self
    }
    pub fn palette(mut self, palette: Palette) -> Self {
        self.options.palette = palette;
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}

impl Default for RenderOptionsBuilder {
    fn default() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

/// Maps grid coordinates onto the canvas.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct CellLayout {
    cell_w: u32,
    cell_h: u32,
}

impl CellLayout {
    fn new(grid: &Grid, options: &RenderOptions) -> CellLayout {
        let (cell_w, cell_h) = options.cell_size(grid.rows(), grid.columns());
        CellLayout { cell_w, cell_h }
    }

    fn cell_rect(&self, coord: Cartesian2DCoordinate) -> PixelRect {
        let x = i64::from(coord.x) * i64::from(self.cell_w);
        let y = i64::from(coord.y) * i64::from(self.cell_h);
        PixelRect::new(x as i32, y as i32, self.cell_w, self.cell_h)
    }
}

/// Wall sides in drawing order, each with the edge of the cell rectangle it spans.
const WALL_EDGES: [(CompassPrimary, fn(&PixelRect) -> Point, fn(&PixelRect) -> Point); 4] =
    [(CompassPrimary::North, PixelRect::top_left, PixelRect::top_right),
     (CompassPrimary::East, PixelRect::top_right, PixelRect::bottom_right),
     (CompassPrimary::South, PixelRect::bottom_right, PixelRect::bottom_left),
     (CompassPrimary::West, PixelRect::bottom_left, PixelRect::top_left)];

/// Project the maze state onto a list of draw commands.
///
/// Per cell in grid order: a background fill coloured by the visited flag, then a
/// line for each wall still standing (top, right, bottom, left). Then a highlight
/// fill for each cell on the backtracking stack, and finally one over the active
/// cell. Later commands draw over earlier ones.
pub fn render(state: &MazeState, options: &RenderOptions) -> Vec<DrawCommand> {
    let grid = state.grid();
    let layout = CellLayout::new(grid, options);
    let palette = options.palette();
    let mut commands = Vec::with_capacity(grid.size() * 5 + state.stack().len() + 1);

    for (coord, cell) in grid.iter_cells() {
        let rect = layout.cell_rect(coord);
        let colour = if cell.is_visited() {
            palette.visited
        } else {
            palette.unvisited
        };
        commands.push(DrawCommand::FillRect { rect, colour });

        for &(side, from, to) in &WALL_EDGES {
            if cell.walls.has(side) {
                commands.push(DrawCommand::Line {
                    from: from(&rect),
                    to: to(&rect),
                    colour: palette.wall,
                });
            }
        }
    }

    commands.extend(state.stack().iter().map(|&coord| {
        DrawCommand::FillRect {
            rect: layout.cell_rect(coord),
            colour: palette.stack,
        }
    }));

    commands.push(DrawCommand::FillRect {
        rect: layout.cell_rect(state.active()),
        colour: palette.active,
    });

    commands
}
