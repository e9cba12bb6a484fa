//! Useful structures and tools used by the fields
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The smallest cost a pathable [CostField] cell can have
pub const COST_MIN: u8 = 1;
/// [CostField] value marking a cell that can never be pathed
pub const COST_IMPASSABLE: u8 = 255;
/// [IntegrationField] value of a cell the wavefront has not reached
pub const INTEGRATION_UNREACHED: u16 = u16::MAX;

/// Convenience way of accessing the 4 sides of a sector and the 8 directions of
/// movement in a [FlowField]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Reflect)]
pub enum Ordinal {
	North,
	East,
	South,
	West,
	NorthEast,
	SouthEast,
	SouthWest,
	NorthWest,
	/// Special case, used to indicate a [FlowField] cell with no direction of travel
	Zero,
}

impl Ordinal {
	/// Based on a cell's `(column, row)` position find its orthogonal neighbours within
	/// a field of side length `field_size` (up to 4)
	pub fn get_orthogonal_cell_neighbours(cell_id: FieldCell, field_size: usize) -> Vec<FieldCell> {
		let mut neighbours = Vec::new();
		let (column, row) = cell_id.get_column_row();
		if row > 0 {
			neighbours.push(FieldCell::new(column, row - 1)); // northern cell coords
		}
		if column < field_size - 1 {
			neighbours.push(FieldCell::new(column + 1, row)); // eastern cell coords
		}
		if row < field_size - 1 {
			neighbours.push(FieldCell::new(column, row + 1)); // southern cell coords
		}
		if column > 0 {
			neighbours.push(FieldCell::new(column - 1, row)); // western cell coords
		}
		neighbours
	}
	/// Based on a cell's `(column, row)` position find all possible neighbours including
	/// diagonal directions (up to 8)
	pub fn get_all_cell_neighbours(cell_id: FieldCell, field_size: usize) -> Vec<FieldCell> {
		let mut neighbours = Vec::new();
		let (column, row) = cell_id.get_column_row();
		if row > 0 {
			neighbours.push(FieldCell::new(column, row - 1)); // northern cell coords
		}
		if column < field_size - 1 {
			neighbours.push(FieldCell::new(column + 1, row)); // eastern cell coords
		}
		if row < field_size - 1 {
			neighbours.push(FieldCell::new(column, row + 1)); // southern cell coords
		}
		if column > 0 {
			neighbours.push(FieldCell::new(column - 1, row)); // western cell coords
		}
		if row > 0 && column < field_size - 1 {
			neighbours.push(FieldCell::new(column + 1, row - 1)); // north-east cell
		}
		if row < field_size - 1 && column < field_size - 1 {
			neighbours.push(FieldCell::new(column + 1, row + 1)); // south-east cell
		}
		if row < field_size - 1 && column > 0 {
			neighbours.push(FieldCell::new(column - 1, row + 1)); // south-west cell
		}
		if row > 0 && column > 0 {
			neighbours.push(FieldCell::new(column - 1, row - 1)); // north-west cell
		}
		neighbours
	}
	/// Find the neighbour of a cell in a given direction, [None] if the neighbour would
	/// sit outside a field of side length `field_size`
	pub fn get_cell_neighbour(
		cell_id: FieldCell,
		ordinal: Ordinal,
		field_size: usize,
	) -> Option<FieldCell> {
		let (column, row) = cell_id.get_column_row();
		match ordinal {
			Ordinal::North => {
				if row > 0 {
					Some(FieldCell::new(column, row - 1))
				} else {
					None
				}
			}
			Ordinal::East => {
				if column < field_size - 1 {
					Some(FieldCell::new(column + 1, row))
				} else {
					None
				}
			}
			Ordinal::South => {
				if row < field_size - 1 {
					Some(FieldCell::new(column, row + 1))
				} else {
					None
				}
			}
			Ordinal::West => {
				if column > 0 {
					Some(FieldCell::new(column - 1, row))
				} else {
					None
				}
			}
			Ordinal::NorthEast => {
				if row > 0 && column < field_size - 1 {
					Some(FieldCell::new(column + 1, row - 1))
				} else {
					None
				}
			}
			Ordinal::SouthEast => {
				if row < field_size - 1 && column < field_size - 1 {
					Some(FieldCell::new(column + 1, row + 1))
				} else {
					None
				}
			}
			Ordinal::SouthWest => {
				if row < field_size - 1 && column > 0 {
					Some(FieldCell::new(column - 1, row + 1))
				} else {
					None
				}
			}
			Ordinal::NorthWest => {
				if row > 0 && column > 0 {
					Some(FieldCell::new(column - 1, row - 1))
				} else {
					None
				}
			}
			Ordinal::Zero => None,
		}
	}
	/// Returns the opposite [Ordinal] of the current
	pub fn inverse(&self) -> Ordinal {
		match self {
			Ordinal::North => Ordinal::South,
			Ordinal::East => Ordinal::West,
			Ordinal::South => Ordinal::North,
			Ordinal::West => Ordinal::East,
			Ordinal::NorthEast => Ordinal::SouthWest,
			Ordinal::SouthEast => Ordinal::NorthWest,
			Ordinal::SouthWest => Ordinal::NorthEast,
			Ordinal::NorthWest => Ordinal::SouthEast,
			Ordinal::Zero => Ordinal::Zero,
		}
	}
	/// For two cells next to each other it can be useful to find the [Ordinal] pointing
	/// from the `source` to the `target`. This will panic if the two cells are not
	/// orthogonally or diagonally adjacent
	pub fn cell_to_cell_direction(target: FieldCell, source: FieldCell) -> Self {
		let i32_target = (target.get_column() as i32, target.get_row() as i32);
		let i32_source = (source.get_column() as i32, source.get_row() as i32);

		let direction = (i32_target.0 - i32_source.0, i32_target.1 - i32_source.1);
		match direction {
			(0, -1) => Ordinal::North,
			(1, -1) => Ordinal::NorthEast,
			(1, 0) => Ordinal::East,
			(1, 1) => Ordinal::SouthEast,
			(0, 1) => Ordinal::South,
			(-1, 1) => Ordinal::SouthWest,
			(-1, 0) => Ordinal::West,
			(-1, -1) => Ordinal::NorthWest,
			_ => panic!(
				"Cell {:?} is not orthogonally or diagonally adjacent to {:?}",
				target, source
			),
		}
	}
}
