//! The `CostField` is a square field of 8-bit values where a value of 255 represents
//! impassable terrain and the range 1-254 represents the cost of traversing that cell,
//! 1 being the default and easiest.
//!
//! You could define a value of 56 for instance as being a slope or swamp and in such a
//! case wavefront propagation will carry a higher cost over it, encouraging paths to
//! flow around it.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Per-sector field describing how expensive each cell is to traverse
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Reflect)]
pub struct CostField {
	/// Side length of the field
	size: usize,
	/// Cost of each cell, in `column + row * size` order
	cells: Vec<u8>,
}

impl Field<u8> for CostField {
	/// Get the side length of the field
	fn get_size(&self) -> usize {
		self.size
	}
	/// Get a reference to the field cells
	fn get_cells(&self) -> &[u8] {
		&self.cells
	}
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, field_cell: FieldCell) -> u8 {
		if field_cell.get_column() >= self.size || field_cell.get_row() >= self.size {
			panic!("Cannot get a CostField value, index out of bounds. Asked for column {}, row {}, field side length is {}", field_cell.get_column(), field_cell.get_row(), self.size)
		}
		self.cells[field_cell.get_column() + field_cell.get_row() * self.size]
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: u8, field_cell: FieldCell) {
		if field_cell.get_column() >= self.size || field_cell.get_row() >= self.size {
			panic!("Cannot set a CostField value, index out of bounds. Asked for column {}, row {}, field side length is {}", field_cell.get_column(), field_cell.get_row(), self.size)
		}
		self.cells[field_cell.get_column() + field_cell.get_row() * self.size] = value;
	}
}

impl CostField {
	/// Create a new instance of [CostField] where all cells carry the minimum cost
	pub fn new(size: usize) -> Self {
		CostField {
			size,
			cells: vec![COST_MIN; size * size],
		}
	}
	/// Create a new instance of [CostField] from flattened cells in
	/// `column + row * size` order. Panics when the cell count doesn't fill a square
	/// field of the given side length
	pub fn from_cells(size: usize, cells: Vec<u8>) -> Self {
		if cells.len() != size * size {
			panic!(
				"A CostField of side length {} requires {} cells, got {}",
				size,
				size * size,
				cells.len()
			);
		}
		CostField { size, cells }
	}
	/// Indicates whether a cell can be traversed at all
	pub fn is_cell_passable(&self, field_cell: FieldCell) -> bool {
		self.get_field_cell_value(field_cell) != COST_IMPASSABLE
	}
}
