// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
#![allow(deprecated)]

use error_chain::*;

use crate::cells::Cartesian2DCoordinate;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        ImageError(::image::ImageError);
    }

    errors {
        InvalidGridDimensions(rows: usize, columns: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions {} rows x {} columns, both must be positive and fit a u32 coordinate",
                    rows, columns)
        }
        CanvasTooSmall(width: u32, height: u32, rows: usize, columns: usize) {
            description("canvas too small for the grid")
            display("a {}x{} pixel canvas cannot fit {} rows x {} columns of cells",
                    width, height, rows, columns)
        }
        InvalidGridCoordinate(coord: Cartesian2DCoordinate) {
            description("grid coordinate out of bounds")
            display("grid coordinate ({}, {}) is out of bounds", coord.x, coord.y)
        }
        CellsNotAdjacent(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) {
            description("cells are not 4-adjacent")
            display("cells ({}, {}) and ({}, {}) do not share a wall", a.x, a.y, b.x, b.y)
        }
    }
}
