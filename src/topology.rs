//! Query interface to the face projection and base cell metadata layers.

use crate::types::{Direction, GridError};

/// Resolves an opaque cell handle to its projected face, base cell, and the
/// base cell's metadata.
///
/// The vertex numbering algorithms consume cells only through this trait, so
/// the index bit layout, the face projection math, and the 122-entry base
/// cell table all stay with the caller. Implementations must be pure: the
/// same cell must always resolve to the same answers.
pub trait CellTopology {
  /// Opaque cell handle.
  type Cell: Copy;

  /// The icosahedron face (0-19) the cell projects onto.
  fn projected_face(&self, cell: Self::Cell) -> Result<i32, GridError>;

  /// The base cell number (0-121) the cell descends from.
  fn base_cell(&self, cell: Self::Cell) -> Result<i32, GridError>;

  /// The first non-center direction digit in the cell's hierarchical path
  /// from its base cell, or `Direction::Center` if every digit is center.
  fn leading_non_zero_digit(&self, cell: Self::Cell) -> Direction;

  /// Whether the cell is a pentagon (five boundary vertices, no K-axes
  /// neighbor).
  fn is_pentagon(&self, cell: Self::Cell) -> bool;

  /// Whether the base cell is one of the two polar pentagons, which touch
  /// more faces than the other ten.
  fn is_polar_pentagon(&self, base_cell: i32) -> bool;

  /// The home face of the base cell.
  fn home_face(&self, base_cell: i32) -> Result<i32, GridError>;

  /// The number of 60 degree CCW rotations converting the base cell's
  /// home-face coordinate frame into the given face's frame.
  fn intrinsic_rotations(&self, base_cell: i32, face: i32) -> Result<i32, GridError>;
}
