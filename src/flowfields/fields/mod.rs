//! The kinds of fields used by the algorithm
//!

pub mod cost_field;
pub mod flow_field;
pub mod integration_field;

use bevy::prelude::*;

/// Defines required access to field cell vectors. Fields are square with a side length
/// fixed at construction, matching the `sector_size` of the owning grid
pub trait Field<T: Copy> {
	/// Get the side length of the field
	fn get_size(&self) -> usize;
	/// Get a reference to the field cells
	fn get_cells(&self) -> &[T];
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, field_cell: FieldCell) -> T;
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: T, field_cell: FieldCell);
}

/// ID of a cell within a field
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct FieldCell((usize, usize));

impl FieldCell {
	/// Create a new instance of [FieldCell]
	pub fn new(column: usize, row: usize) -> Self {
		FieldCell((column, row))
	}
	/// Get the cell `(column, row)` tuple
	pub fn get_column_row(&self) -> (usize, usize) {
		self.0
	}
	/// Get the cell column
	pub fn get_column(&self) -> usize {
		self.0 .0
	}
	/// Get the cell row
	pub fn get_row(&self) -> usize {
		self.0 .1
	}
	/// Using the Bresenham line algorithm get the list of [FieldCell] that lie along a
	/// line from this cell to `target`, ordered from this cell towards the target
	pub fn get_cells_between_points(&self, target: &FieldCell) -> Vec<FieldCell> {
		let source_col = self.get_column() as i32;
		let source_row = self.get_row() as i32;
		let target_col = target.get_column() as i32;
		let target_row = target.get_row() as i32;

		// walk the dominant axis, transposing a steep line so the walk is always shallow
		let steep = (target_row - source_row).abs() > (target_col - source_col).abs();
		let (mut major_0, mut minor_0, mut major_1, mut minor_1) = if steep {
			(source_row, source_col, target_row, target_col)
		} else {
			(source_col, source_row, target_col, target_row)
		};
		let reversed = major_0 > major_1;
		if reversed {
			std::mem::swap(&mut major_0, &mut major_1);
			std::mem::swap(&mut minor_0, &mut minor_1);
		}
		let delta_major = major_1 - major_0;
		let delta_minor = (minor_1 - minor_0).abs();
		let minor_step: i32 = if minor_0 < minor_1 { 1 } else { -1 };
		let mut difference = 2 * delta_minor - delta_major;
		let mut minor = minor_0;

		let mut cells = Vec::with_capacity(delta_major as usize + 1);
		for major in major_0..=major_1 {
			let (column, row) = if steep { (minor, major) } else { (major, minor) };
			cells.push(FieldCell::new(column as usize, row as usize));
			if difference > 0 {
				minor += minor_step;
				difference -= 2 * delta_major;
			}
			difference += 2 * delta_minor;
		}
		// ensure the list points in the direction of source to target
		if reversed {
			cells.reverse();
		}
		cells
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn field_cell_line_horizontal() {
		let source = FieldCell::new(3, 4);
		let target = FieldCell::new(7, 4);
		let result = source.get_cells_between_points(&target);
		let actual: Vec<FieldCell> = vec![
			FieldCell::new(3, 4),
			FieldCell::new(4, 4),
			FieldCell::new(5, 4),
			FieldCell::new(6, 4),
			FieldCell::new(7, 4),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn field_cell_line_vertical_reverse() {
		let source = FieldCell::new(3, 7);
		let target = FieldCell::new(3, 4);
		let result = source.get_cells_between_points(&target);
		let actual: Vec<FieldCell> = vec![
			FieldCell::new(3, 7),
			FieldCell::new(3, 6),
			FieldCell::new(3, 5),
			FieldCell::new(3, 4),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn field_cell_line_steep() {
		let source = FieldCell::new(3, 0);
		let target = FieldCell::new(4, 9);
		let result = source.get_cells_between_points(&target);
		let actual: Vec<FieldCell> = vec![
			FieldCell::new(3, 0),
			FieldCell::new(3, 1),
			FieldCell::new(3, 2),
			FieldCell::new(3, 3),
			FieldCell::new(3, 4),
			FieldCell::new(4, 5),
			FieldCell::new(4, 6),
			FieldCell::new(4, 7),
			FieldCell::new(4, 8),
			FieldCell::new(4, 9),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn field_cell_line_pos_gradient() {
		let source = FieldCell::new(3, 4);
		let target = FieldCell::new(7, 6);
		let result = source.get_cells_between_points(&target);
		let actual: Vec<FieldCell> = vec![
			FieldCell::new(3, 4),
			FieldCell::new(4, 4),
			FieldCell::new(5, 5),
			FieldCell::new(6, 5),
			FieldCell::new(7, 6),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn field_cell_line_neg_gradient_reverse() {
		let source = FieldCell::new(7, 2);
		let target = FieldCell::new(3, 4);
		let result = source.get_cells_between_points(&target);
		let actual: Vec<FieldCell> = vec![
			FieldCell::new(7, 2),
			FieldCell::new(6, 3),
			FieldCell::new(5, 3),
			FieldCell::new(4, 4),
			FieldCell::new(3, 4),
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn field_cell_line_zero() {
		let source = FieldCell::new(3, 4);
		let target = FieldCell::new(3, 4);
		let result = source.get_cells_between_points(&target);
		let actual: Vec<FieldCell> = vec![FieldCell::new(3, 4)];
		assert_eq!(actual, result);
	}
}
