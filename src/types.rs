//! Core data structures.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Grid error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GridError {
  /// The operation failed but a more specific error is not available.
  Failed = 1,
  /// Argument was outside of acceptable range.
  Domain = 2,
  /// Resolution argument was outside of acceptable range.
  ResDomain = 4,
  /// Cell argument could not be resolved to a face and base cell.
  CellInvalid = 5,
}

/// Digit representing one of the IJK+ axes directions (0-6), or invalid (7).
///
/// This is the relative position of a neighboring cell in the local hex
/// coordinate system. `Center` is "no direction" (the cell itself); `KAxes`
/// is the axis deleted on pentagons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Digit in center.
  #[default]
  Center = 0,
  /// Digit in k-axes direction.
  KAxes = 1,
  /// Digit in j-axes direction.
  JAxes = 2,
  /// Digit in j == k direction.
  JkAxes = 3, // J_AXES_DIGIT | K_AXES_DIGIT
  /// Digit in i-axes direction.
  IAxes = 4,
  /// Digit in i == k direction.
  IkAxes = 5, // I_AXES_DIGIT | K_AXES_DIGIT
  /// Digit in i == j direction.
  IjAxes = 6, // I_AXES_DIGIT | J_AXES_DIGIT
  /// Digit in the invalid direction.
  InvalidDigit = 7,
}

impl TryFrom<u8> for Direction {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Direction::Center),
      1 => Ok(Direction::KAxes),
      2 => Ok(Direction::JAxes),
      3 => Ok(Direction::JkAxes),
      4 => Ok(Direction::IAxes),
      5 => Ok(Direction::IkAxes),
      6 => Ok(Direction::IjAxes),
      7 => Ok(Direction::InvalidDigit), // Valid enum variant, but invalid as a digit
      _ => Err(GridError::Domain),
    }
  }
}
