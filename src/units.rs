#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);

/// Canvas width in pixels.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub u32);
/// Canvas height in pixels.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub u32);
