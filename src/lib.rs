#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Error conditions are documented on GridError
#![allow(clippy::cast_possible_truncation)] // Small-integer table indices, review carefully
#![allow(clippy::cast_sign_loss)] // Small-integer table indices, review carefully
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)] // Can be common in math-heavy code

//! `ico-vertex` implements the vertex numbering subsystem of a hierarchical
//! hexagonal grid projected onto the 20 faces of an icosahedron.
//!
//! Cells are hexagonal except at the 12 icosahedron vertices, where pentagons
//! locally distort the mapping between neighbor directions and boundary
//! vertex numbers. This crate answers two questions for any cell:
//!
//! - how many 60 degree CCW rotations separate the cell's local vertex
//!   numbering from the canonical directional layout
//!   ([`vertex_rotations`]), and
//! - which boundary vertex number lies between the cell and its neighbor in
//!   a given direction ([`vertex_num_for_direction`]).
//!
//! Cell resolution (face projection, base cell metadata) is supplied by the
//! caller through the [`CellTopology`] trait; the crate itself is pure table
//! lookups and modular arithmetic.

// Declare modules
pub mod constants;
pub mod topology;
pub mod types;
pub mod vertex;

// Re-export key public types and functions for easier use
pub use constants::{INVALID_VERTEX_NUM, NUM_HEX_VERTS, NUM_ICOSA_FACES, NUM_PENTAGONS, NUM_PENT_VERTS};
pub use topology::CellTopology;
pub use types::{Direction, GridError};
pub use vertex::{vertex_num_for_direction, vertex_rotations};
