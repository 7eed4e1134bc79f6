use smallvec::SmallVec;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable (negative).
    /// The result may still lie outside a particular grid.
    pub fn offset(self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let (dx, dy) = dir.delta();
        let x = i64::from(self.x) + i64::from(dx);
        let y = i64::from(self.y) + i64::from(dy);
        if x < 0 || y < 0 || x > i64::from(u32::MAX) || y > i64::from(u32::MAX) {
            None
        } else {
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// Neighbour discovery order: offsets (-1,0), (0,-1), (1,0), (0,1).
pub const NEIGHBOUR_ORDER: [CompassPrimary; 4] = [CompassPrimary::West,
                                                  CompassPrimary::North,
                                                  CompassPrimary::East,
                                                  CompassPrimary::South];

impl CompassPrimary {
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            CompassPrimary::North => (0, -1),
            CompassPrimary::South => (0, 1),
            CompassPrimary::East => (1, 0),
            CompassPrimary::West => (-1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// The direction that leads from `from` to `to` when they are 4-adjacent.
    pub fn between(from: Cartesian2DCoordinate,
                   to: Cartesian2DCoordinate)
                   -> Option<CompassPrimary> {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        match (dx, dy) {
            (0, -1) => Some(CompassPrimary::North),
            (0, 1) => Some(CompassPrimary::South),
            (1, 0) => Some(CompassPrimary::East),
            (-1, 0) => Some(CompassPrimary::West),
            _ => None,
        }
    }
}

/// Wall flags of a square cell, true means the wall is present.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Default for Walls {
    fn default() -> Walls {
        Walls {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }
}

impl Walls {
    #[inline]
    pub fn has(&self, dir: CompassPrimary) -> bool {
        match dir {
            CompassPrimary::North => self.top,
            CompassPrimary::East => self.right,
            CompassPrimary::South => self.bottom,
            CompassPrimary::West => self.left,
        }
    }

    #[inline]
    pub fn clear(&mut self, dir: CompassPrimary) {
        match dir {
            CompassPrimary::North => self.top = false,
            CompassPrimary::East => self.right = false,
            CompassPrimary::South => self.bottom = false,
            CompassPrimary::West => self.left = false,
        }
    }

    pub fn count(&self) -> usize {
        [self.top, self.right, self.bottom, self.left].iter().filter(|&&w| w).count()
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct Cell {
    pub walls: Walls,
    visited: bool,
}

impl Cell {
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Visiting is one way, there is no way to un-visit a cell.
    #[inline]
    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }
}
