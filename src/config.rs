use crate::errors::*;
use crate::renderers::{RenderOptions, RenderOptionsBuilder};
use crate::units::{ColumnsCount, Height, RowsCount, Width};

pub const DEFAULT_CANVAS_SIDE: u32 = 600;
pub const DEFAULT_GRID_SIDE: usize = 20;
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

/// Everything the driver needs to know before the first tick.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeConfig {
    pub canvas_width: Width,
    pub canvas_height: Height,
    pub rows: RowsCount,
    pub columns: ColumnsCount,
    /// Target cadence. 0 runs the ticks back to back.
    pub ticks_per_second: u32,
    /// Seed for the neighbour choice, entropy when None.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            canvas_width: Width(DEFAULT_CANVAS_SIDE),
            canvas_height: Height(DEFAULT_CANVAS_SIDE),
            rows: RowsCount(DEFAULT_GRID_SIDE),
            columns: ColumnsCount(DEFAULT_GRID_SIDE),
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptionsBuilder::new()
            .canvas_size(self.canvas_width, self.canvas_height)
            .build()
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows.0 == 0 || self.columns.0 == 0 {
            return Err(ErrorKind::InvalidGridDimensions(self.rows.0, self.columns.0).into());
        }
        self.render_options().check_fits(self.rows, self.columns)
    }
}
