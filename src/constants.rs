//! Grid system constants.

/// The number of faces on an icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// The number of base cells at the coarsest resolution.
pub const NUM_BASE_CELLS: i32 = 122;
/// The number of vertices in a hexagon.
pub const NUM_HEX_VERTS: i32 = 6;
/// The number of vertices in a pentagon (topologically).
pub const NUM_PENT_VERTS: i32 = 5;
/// The number of pentagon base cells.
pub const NUM_PENTAGONS: usize = 12;

/// Invalid vertex number, returned for directions with no vertex
/// (center, out of range, or the deleted K axis on a pentagon).
pub const INVALID_VERTEX_NUM: i32 = -1;

/// Offset between a direction digit value and its index into the
/// per-pentagon direction-face rows, which start at the J digit.
pub(crate) const DIRECTION_INDEX_OFFSET: usize = 2;
