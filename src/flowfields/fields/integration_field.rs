//! The `IntegrationField` is a square field of 16-bit values which uses a [CostField]
//! to produce a cumulative cost of reaching the goal/target. One is built per sector
//! along a route, per path request.
//!
//! When a route needs to be processed all cells are reset to [INTEGRATION_UNREACHED]
//! and the cells containing the wavefront seeds are set to their starting cost (`0`
//! for a true goal, carried-over costs when continuing a field through a portal). A
//! series of passes are performed from the seeds as an expanding wavefront calculating
//! the field values:
//!
//! 1. The valid orthogonal neighbours of each queued cell are determined
//! 2. For each neighbour lookup its [CostField] value
//! 3. Add that cost to the integration cost of the current cell to produce the
//!    neighbour's candidate cost
//! 4. Record the candidate if it beats the neighbour's current value and queue the
//!    neighbour for the next pass, repeating until the wave has nowhere left to flow
//!
//! This produces a diamond-like pattern expanding from the goal (with an underlying
//! [CostField] set to `1` everywhere):
//!
//! ```text
//!  _____________________________
//! |  8 |  7 |  6 |  5 |  4 |  5 |
//! |____|____|____|____|____|____|
//! |  7 |  6 |  5 |  4 |  3 |  4 |
//! |____|____|____|____|____|____|
//! |  6 |  5 |  4 |  3 |  2 |  3 |
//! |____|____|____|____|____|____|
//! |  5 |  4 |  3 |  2 |  1 |  2 |
//! |____|____|____|____|____|____|
//! |  4 |  3 |  2 |  1 |  0 |  1 |
//! |____|____|____|____|____|____|
//! ```
//!
//! Impassable [CostField] cells are never entered so the wave flows around obstacles,
//! and higher cost cells produce gradients that discourage paths over them.
//!
//! For the sector containing the true target the field additionally records which cells
//! have line-of-sight to it - a straight, unobstructed walk - so that the [FlowField]
//! built from this field can flag them and path extraction can shortcut straight to the
//! target.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Per-sector field of accumulated cost-to-target produced by wavefront propagation
/// over a [CostField]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Reflect)]
pub struct IntegrationField {
	/// Side length of the field
	size: usize,
	/// Accumulated cost of each cell, in `column + row * size` order
	cells: Vec<u16>,
	/// Whether each cell has an unobstructed straight line to the target, only
	/// populated for the sector containing the true target
	los: Vec<bool>,
}

impl Field<u16> for IntegrationField {
	/// Get the side length of the field
	fn get_size(&self) -> usize {
		self.size
	}
	/// Get a reference to the field cells
	fn get_cells(&self) -> &[u16] {
		&self.cells
	}
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, field_cell: FieldCell) -> u16 {
		if field_cell.get_column() >= self.size || field_cell.get_row() >= self.size {
			panic!("Cannot get an IntegrationField value, index out of bounds. Asked for column {}, row {}, field side length is {}", field_cell.get_column(), field_cell.get_row(), self.size)
		}
		self.cells[field_cell.get_column() + field_cell.get_row() * self.size]
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: u16, field_cell: FieldCell) {
		if field_cell.get_column() >= self.size || field_cell.get_row() >= self.size {
			panic!("Cannot set an IntegrationField value, index out of bounds. Asked for column {}, row {}, field side length is {}", field_cell.get_column(), field_cell.get_row(), self.size)
		}
		self.cells[field_cell.get_column() + field_cell.get_row() * self.size] = value;
	}
}

impl IntegrationField {
	/// Create a new instance of [IntegrationField] where no cell has been reached
	pub fn new(size: usize) -> Self {
		IntegrationField {
			size,
			cells: vec![INTEGRATION_UNREACHED; size * size],
			los: vec![false; size * size],
		}
	}
	/// Reset all the cells to [INTEGRATION_UNREACHED] apart from the `seeds` which are
	/// the starting points of calculating the field
	pub fn reset(&mut self, seeds: &[(FieldCell, u16)]) {
		for value in self.cells.iter_mut() {
			*value = INTEGRATION_UNREACHED;
		}
		for flag in self.los.iter_mut() {
			*flag = false;
		}
		for (cell, cost) in seeds.iter() {
			self.set_field_cell_value(*cost, *cell);
		}
	}
	/// Whether a cell has an unobstructed straight line to the target
	pub fn has_line_of_sight(&self, field_cell: FieldCell) -> bool {
		if field_cell.get_column() >= self.size || field_cell.get_row() >= self.size {
			panic!("Cannot get an IntegrationField LOS flag, index out of bounds. Asked for column {}, row {}, field side length is {}", field_cell.get_column(), field_cell.get_row(), self.size)
		}
		self.los[field_cell.get_column() + field_cell.get_row() * self.size]
	}
	/// Flag a cell as having an unobstructed straight line to the target
	fn set_line_of_sight(&mut self, field_cell: FieldCell) {
		self.los[field_cell.get_column() + field_cell.get_row() * self.size] = true;
	}
	/// From the `seeds` (the true target or portal cells towards the goal sector,
	/// paired with their starting costs) iterate over successive neighbouring cells and
	/// calculate the field values from the `cost_field`
	pub fn calculate_field(&mut self, seeds: &[(FieldCell, u16)], cost_field: &CostField) {
		// further positions to process, tuple element 0 is the position, element 1 is
		// the integration cost of it needed to calculate the cost of its neighbours
		let mut queue: Vec<(FieldCell, u16)> = seeds.to_vec();
		while !queue.is_empty() {
			let mut next_neighbours = Vec::new();
			// iterate over the queue calculating neighbour int costs
			for (cell, prev_int_cost) in queue.iter() {
				let neighbours = Ordinal::get_orthogonal_cell_neighbours(*cell, self.size);
				for n in neighbours.iter() {
					let cell_cost = cost_field.get_field_cell_value(*n);
					// ignore impassable cells
					if cell_cost != COST_IMPASSABLE {
						// don't overwrite an int cell with a better cost
						let int_cost = cell_cost as u16 + prev_int_cost;
						if int_cost < self.get_field_cell_value(*n) {
							self.set_field_cell_value(int_cost, *n);
							next_neighbours.push((*n, int_cost));
						}
					}
				}
			}
			queue = next_neighbours;
		}
	}
	/// From each cell analyse a line to the `goal` to ascertain whether the cell has a
	/// clear line-of-sight to it and flag every cell along each clear line. Used only
	/// for the sector containing the true target, after [Self::calculate_field]
	pub fn calculate_line_of_sight(&mut self, goal: FieldCell) {
		for column in 0..self.size {
			for row in 0..self.size {
				let start_cell = FieldCell::new(column, row);
				let line = start_cell.get_cells_between_points(&goal);
				let mut has_los = true;
				'cells: for cell in line.iter() {
					if self.get_field_cell_value(*cell) == INTEGRATION_UNREACHED
						|| self.has_blocked_diagonals(*cell)
					{
						has_los = false;
						break 'cells;
					}
				}
				if has_los {
					for cell in line.iter() {
						self.set_line_of_sight(*cell);
					}
				}
			}
		}
	}
	/// Looks at the orthogonal neighbours of a cell and determines whether any pair of
	/// them blocks diagonal movement through the cell, i.e
	/// ```text
	///   X ~ <- diagonal from o cannot pass between the two impassable X
	///   o X
	/// ```
	fn has_blocked_diagonals(&self, field_cell: FieldCell) -> bool {
		let north = Ordinal::get_cell_neighbour(field_cell, Ordinal::North, self.size);
		let east = Ordinal::get_cell_neighbour(field_cell, Ordinal::East, self.size);
		let south = Ordinal::get_cell_neighbour(field_cell, Ordinal::South, self.size);
		let west = Ordinal::get_cell_neighbour(field_cell, Ordinal::West, self.size);
		if let (Some(n), Some(e)) = (north, east) {
			if self.get_field_cell_value(n) == INTEGRATION_UNREACHED
				&& self.get_field_cell_value(e) == INTEGRATION_UNREACHED
			{
				return true;
			}
		}
		if let (Some(n), Some(w)) = (north, west) {
			if self.get_field_cell_value(n) == INTEGRATION_UNREACHED
				&& self.get_field_cell_value(w) == INTEGRATION_UNREACHED
			{
				return true;
			}
		}
		if let (Some(s), Some(e)) = (south, east) {
			if self.get_field_cell_value(s) == INTEGRATION_UNREACHED
				&& self.get_field_cell_value(e) == INTEGRATION_UNREACHED
			{
				return true;
			}
		}
		if let (Some(s), Some(w)) = (south, west) {
			if self.get_field_cell_value(s) == INTEGRATION_UNREACHED
				&& self.get_field_cell_value(w) == INTEGRATION_UNREACHED
			{
				return true;
			}
		}
		false
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Calculate an integration field from a uniform cost field with a goal near the centre
	#[test]
	fn basic_field() {
		let cost_field = CostField::new(10);
		let mut integration_field = IntegrationField::new(10);
		let seeds = vec![(FieldCell::new(4, 4), 0)];
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		// uniform cost 1 with orthogonal propagation produces the manhattan distance
		assert_eq!(0, integration_field.get_field_cell_value(FieldCell::new(4, 4)));
		assert_eq!(1, integration_field.get_field_cell_value(FieldCell::new(5, 4)));
		assert_eq!(4, integration_field.get_field_cell_value(FieldCell::new(4, 0)));
		assert_eq!(8, integration_field.get_field_cell_value(FieldCell::new(0, 0)));
		assert_eq!(10, integration_field.get_field_cell_value(FieldCell::new(9, 9)));
	}
	/// A wall across the field forces the wave to flow around it
	#[test]
	fn field_flows_around_wall() {
		let mut cost_field = CostField::new(10);
		for row in 0..9 {
			cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(5, row));
		}
		let mut integration_field = IntegrationField::new(10);
		let seeds = vec![(FieldCell::new(0, 0), 0)];
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		// wall cells are never entered
		assert_eq!(
			INTEGRATION_UNREACHED,
			integration_field.get_field_cell_value(FieldCell::new(5, 0))
		);
		// the cell just beyond the wall is reached by detouring below the gap at row 9
		// rather than straight across: 6 east + 9 south + 9 north = 24
		assert_eq!(24, integration_field.get_field_cell_value(FieldCell::new(6, 0)));
	}
	/// A sealed-off pocket is never reached
	#[test]
	fn unreachable_pocket() {
		let mut cost_field = CostField::new(10);
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(8, 9));
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(8, 8));
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(9, 8));
		let mut integration_field = IntegrationField::new(10);
		let seeds = vec![(FieldCell::new(0, 0), 0)];
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		assert_eq!(
			INTEGRATION_UNREACHED,
			integration_field.get_field_cell_value(FieldCell::new(9, 9))
		);
	}
	/// Seeds with carried-over costs continue a wave at their given base cost
	#[test]
	fn seeded_continuation() {
		let cost_field = CostField::new(10);
		let mut integration_field = IntegrationField::new(10);
		let seeds = vec![(FieldCell::new(0, 0), 7), (FieldCell::new(0, 9), 3)];
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		// cells nearer the cheaper seed flow from it
		assert_eq!(3, integration_field.get_field_cell_value(FieldCell::new(0, 9)));
		assert_eq!(4, integration_field.get_field_cell_value(FieldCell::new(1, 9)));
		// the expensive seed keeps its own value but cells between the two take the min
		assert_eq!(7, integration_field.get_field_cell_value(FieldCell::new(0, 0)));
		assert_eq!(8, integration_field.get_field_cell_value(FieldCell::new(1, 0)));
	}
	/// Open field: every cell sees the goal
	#[test]
	fn los_open_field() {
		let cost_field = CostField::new(10);
		let mut integration_field = IntegrationField::new(10);
		let seeds = vec![(FieldCell::new(4, 4), 0)];
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		integration_field.calculate_line_of_sight(FieldCell::new(4, 4));
		assert!(integration_field.has_line_of_sight(FieldCell::new(4, 4)));
		assert!(integration_field.has_line_of_sight(FieldCell::new(0, 0)));
		assert!(integration_field.has_line_of_sight(FieldCell::new(9, 9)));
	}
	/// Cells behind a wall lose sight of the goal
	#[test]
	fn los_blocked_by_wall() {
		let mut cost_field = CostField::new(10);
		for row in 2..8 {
			cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(5, row));
		}
		let mut integration_field = IntegrationField::new(10);
		let seeds = vec![(FieldCell::new(2, 4), 0)];
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		integration_field.calculate_line_of_sight(FieldCell::new(2, 4));
		assert!(integration_field.has_line_of_sight(FieldCell::new(2, 2)));
		assert!(!integration_field.has_line_of_sight(FieldCell::new(8, 4)));
	}
}
