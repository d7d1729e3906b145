//! Vertex numbering for cells.
//!
//! A cell's boundary vertices are numbered 0-5 (0-4 for pentagons) in CCW
//! order, but each base cell carries its own rotation relative to its home
//! face, and pentagons add further corrections when a cell projects onto a
//! face other than the pentagon's home face. The functions here reconcile
//! those rotations so that vertex numbers line up with neighbor directions.

use crate::constants::{DIRECTION_INDEX_OFFSET, INVALID_VERTEX_NUM, NUM_HEX_VERTS, NUM_PENTAGONS, NUM_PENT_VERTS};
use crate::topology::CellTopology;
use crate::types::{Direction, GridError};

/// The faces reached from one pentagon base cell by each of its five valid
/// neighbor directions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PentagonDirectionFaces {
  /// The pentagon base cell number.
  pub base_cell: i32,
  /// Faces in directional order, starting at the J digit.
  pub faces: [i32; NUM_PENT_VERTS as usize],
}

/// Table of direction-to-face mapping for each pentagon.
///
/// Carried over verbatim from the reference grid definition; there is no
/// closed form for these twelve geometries.
#[rustfmt::skip]
pub(crate) static PENTAGON_DIRECTION_FACES: [PentagonDirectionFaces; NUM_PENTAGONS] = [
  PentagonDirectionFaces { base_cell: 4,   faces: [4, 0, 2, 1, 3] },
  PentagonDirectionFaces { base_cell: 14,  faces: [6, 11, 2, 7, 1] },
  PentagonDirectionFaces { base_cell: 24,  faces: [5, 10, 1, 6, 0] },
  PentagonDirectionFaces { base_cell: 38,  faces: [7, 12, 3, 8, 2] },
  PentagonDirectionFaces { base_cell: 49,  faces: [9, 14, 0, 5, 4] },
  PentagonDirectionFaces { base_cell: 58,  faces: [8, 13, 4, 9, 3] },
  PentagonDirectionFaces { base_cell: 63,  faces: [11, 6, 15, 10, 16] },
  PentagonDirectionFaces { base_cell: 72,  faces: [12, 7, 16, 11, 17] },
  PentagonDirectionFaces { base_cell: 83,  faces: [10, 5, 19, 14, 15] },
  PentagonDirectionFaces { base_cell: 97,  faces: [13, 8, 17, 12, 18] },
  PentagonDirectionFaces { base_cell: 107, faces: [14, 9, 18, 13, 19] },
  PentagonDirectionFaces { base_cell: 117, faces: [15, 19, 17, 18, 16] },
];

/// Hexagon direction to vertex number relationships (same face).
/// Note that we don't use direction 0 (center).
#[rustfmt::skip]
pub(crate) static DIRECTION_TO_VERTEX_NUM_HEX: [i32; 7] = [
  INVALID_VERTEX_NUM, 3, 1, 2, 5, 4, 0,
];

/// Pentagon direction to vertex number relationships (same face).
/// Note that we don't use directions 0 (center) or 1 (deleted K axis).
#[rustfmt::skip]
pub(crate) static DIRECTION_TO_VERTEX_NUM_PENT: [i32; 7] = [
  INVALID_VERTEX_NUM, INVALID_VERTEX_NUM, 1, 2, 4, 3, 0,
];

/// Find the direction-to-face row for a pentagon base cell, or `None` if
/// the base cell is not a pentagon.
fn _pentagon_direction_faces(base_cell: i32) -> Option<&'static PentagonDirectionFaces> {
  PENTAGON_DIRECTION_FACES.iter().find(|row| row.base_cell == base_cell)
}

/// Get the number of CCW rotations of the cell's vertex numbers compared to
/// the directional layout of its neighbors.
///
/// The base rotation is the base cell's own rotation relative to the face
/// the cell projects onto. Descendants of pentagon base cells pick up one
/// extra CCW rotation when seen from the face of the IK direction (or from
/// any non-home face, for the polar pentagons), and one CW or CCW correction
/// when the cell's hierarchical path crosses the deleted K subsequence
/// between the JK and IK distortion regions.
///
/// Returns a rotation count in `[0, 5]`, or an error from the topology
/// queries if the cell cannot be resolved.
pub fn vertex_rotations<T: CellTopology>(topo: &T, cell: T::Cell) -> Result<i32, GridError> {
  // Get the face and other info for the origin
  let face = topo.projected_face(cell)?;
  let base_cell = topo.base_cell(cell)?;
  let leading_digit = topo.leading_non_zero_digit(cell);

  // get the base cell face
  let base_face = topo.home_face(base_cell)?;

  let mut ccw_rot60 = topo.intrinsic_rotations(base_cell, face)?;

  if let Some(dir_faces) = _pentagon_direction_faces(base_cell) {
    // additional CCW rotation for polar neighbors or IK neighbors
    if face != base_face
      && (topo.is_polar_pentagon(base_cell)
        || face == dir_faces.faces[Direction::IkAxes as usize - DIRECTION_INDEX_OFFSET])
    {
      ccw_rot60 = (ccw_rot60 + 1) % 6;
    }

    // Check whether the cell crosses a deleted pentagon subsequence
    if leading_digit == Direction::JkAxes
      && face == dir_faces.faces[Direction::IkAxes as usize - DIRECTION_INDEX_OFFSET]
    {
      // Crosses from JK to IK: Rotate CW
      ccw_rot60 = (ccw_rot60 + 5) % 6;
    } else if leading_digit == Direction::IkAxes
      && face == dir_faces.faces[Direction::JkAxes as usize - DIRECTION_INDEX_OFFSET]
    {
      // Crosses from IK to JK: Rotate CCW
      ccw_rot60 = (ccw_rot60 + 1) % 6;
    }
  }

  Ok(ccw_rot60)
}

/// Get the first vertex number for a given direction. The neighbor in this
/// direction is located between this vertex number and the next number in
/// CCW sequence (wrapping at the vertex count).
///
/// Returns `Ok(INVALID_VERTEX_NUM)` if the direction is not valid for this
/// cell: center, out of the digit range, or the K axis on a pentagon.
pub fn vertex_num_for_direction<T: CellTopology>(
  topo: &T,
  cell: T::Cell,
  direction: Direction,
) -> Result<i32, GridError> {
  let is_pentagon = topo.is_pentagon(cell);

  // Check for invalid directions
  if direction == Direction::Center
    || direction >= Direction::InvalidDigit
    || (is_pentagon && direction == Direction::KAxes)
  {
    return Ok(INVALID_VERTEX_NUM);
  }

  // Determine the vertex rotations for this cell
  let rotations = vertex_rotations(topo, cell)?;

  // Find the appropriate vertex, rotating CCW if necessary
  let vertex_num = if is_pentagon {
    (DIRECTION_TO_VERTEX_NUM_PENT[direction as usize] + NUM_PENT_VERTS - rotations) % NUM_PENT_VERTS
  } else {
    (DIRECTION_TO_VERTEX_NUM_HEX[direction as usize] + NUM_HEX_VERTS - rotations) % NUM_HEX_VERTS
  };

  Ok(vertex_num)
}
