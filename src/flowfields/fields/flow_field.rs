//! A [FlowField] is a square field of 8-bit values. The first 4 bits encode one of the
//! 8 directions of movement (or none) and the second 4 bits are flags identifying the
//! goal, pathable cells and cells with line-of-sight to the goal. A steering
//! pipeline/character controller reads and interprets a [FlowField] to provide
//! movement without any further searching.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Bit to indicate a northerly direction
const BITS_NORTH: u8 = 0b0000_0001;
/// Bit to indicate an easterly direction
const BITS_EAST: u8 = 0b0000_0010;
/// Bit to indicate a southerly direction
const BITS_SOUTH: u8 = 0b0000_0100;
/// Bit to indicate a westerly direction
const BITS_WEST: u8 = 0b0000_1000;
/// Bit to indicate a north-easterly direction
const BITS_NORTH_EAST: u8 = 0b0000_0011;
/// Bit to indicate a south-easterly direction
const BITS_SOUTH_EAST: u8 = 0b0000_0110;
/// Bit to indicate a south-westerly direction
const BITS_SOUTH_WEST: u8 = 0b0000_1100;
/// Bit to indicate a north-westerly direction
const BITS_NORTH_WEST: u8 = 0b0000_1001;
/// Bit to indicate an impassable or directionless cell
const BITS_ZERO: u8 = 0b0000_0000;
/// Default field cell value of a new [FlowField]
const BITS_DEFAULT: u8 = 0b0000_1111;
/// Flags a pathable field cell
const BITS_PATHABLE: u8 = 0b0001_0000;
/// Flags a field cell that has line-of-sight to the goal
const BITS_HAS_LOS: u8 = 0b0010_0000;
/// Flags a field cell as being the goal
const BITS_GOAL: u8 = 0b0100_0000;
/// Flags a field cell as being a portal into another sector
const BITS_PORTAL_GOAL: u8 = 0b1000_0000;
/// Masks the directional bits of a cell value
const BITS_DIR_FILTER: u8 = 0b0000_1111;

/// Convert an [Ordinal] to a bit representation
pub fn convert_ordinal_to_bits_dir(ordinal: Ordinal) -> u8 {
	match ordinal {
		Ordinal::North => BITS_NORTH,
		Ordinal::East => BITS_EAST,
		Ordinal::South => BITS_SOUTH,
		Ordinal::West => BITS_WEST,
		Ordinal::NorthEast => BITS_NORTH_EAST,
		Ordinal::SouthEast => BITS_SOUTH_EAST,
		Ordinal::SouthWest => BITS_SOUTH_WEST,
		Ordinal::NorthWest => BITS_NORTH_WEST,
		Ordinal::Zero => BITS_ZERO,
	}
}

/// From a [FlowField] cell value obtain the directional [Ordinal] of movement. Panics
/// on a bit pattern outside the defined set - that indicates corrupted field
/// construction, not a recoverable state
pub fn get_ordinal_from_bits(cell_value: u8) -> Ordinal {
	let dir = cell_value & BITS_DIR_FILTER;
	match dir {
		BITS_NORTH => Ordinal::North,
		BITS_EAST => Ordinal::East,
		BITS_SOUTH => Ordinal::South,
		BITS_WEST => Ordinal::West,
		BITS_NORTH_EAST => Ordinal::NorthEast,
		BITS_SOUTH_EAST => Ordinal::SouthEast,
		BITS_SOUTH_WEST => Ordinal::SouthWest,
		BITS_NORTH_WEST => Ordinal::NorthWest,
		BITS_ZERO => Ordinal::Zero,
		_ => panic!("First 4 bits of cell are not a recognised direction"),
	}
}

/// Indicates that a cell is pathable
pub fn is_pathable(cell_value: u8) -> bool {
	cell_value & BITS_PATHABLE == BITS_PATHABLE
}

/// Indicates that a cell is the target goal
pub fn is_goal(cell_value: u8) -> bool {
	cell_value & BITS_GOAL == BITS_GOAL
}

/// Indicates that a cell is a portal into the next sector of a route
pub fn is_portal_goal(cell_value: u8) -> bool {
	cell_value & BITS_PORTAL_GOAL == BITS_PORTAL_GOAL
}

/// If a cell has direct vision of the goal then the directional bits can be
/// disregarded, an actor can move in a straight line towards the goal
pub fn has_line_of_sight(cell_value: u8) -> bool {
	cell_value & BITS_HAS_LOS == BITS_HAS_LOS
}

/// Reading the directional bits of a [FlowField] cell obtain a unit vector in 2d space
/// of the direction
pub fn get_2d_direction_unit_vector_from_bits(cell_value: u8) -> Vec2 {
	match get_ordinal_from_bits(cell_value) {
		Ordinal::North => Vec2::new(0.0, 1.0),
		Ordinal::East => Vec2::new(1.0, 0.0),
		Ordinal::South => Vec2::new(0.0, -1.0),
		Ordinal::West => Vec2::new(-1.0, 0.0),
		Ordinal::NorthEast => Vec2::new(1.0, 1.0),
		Ordinal::SouthEast => Vec2::new(1.0, -1.0),
		Ordinal::SouthWest => Vec2::new(-1.0, -1.0),
		Ordinal::NorthWest => Vec2::new(-1.0, 1.0),
		Ordinal::Zero => Vec2::new(0.0, 0.0),
	}
}

/// Per-sector field of movement directions derived from an [IntegrationField], followed
/// by actors without any further searching
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Reflect)]
pub struct FlowField {
	/// Side length of the field
	size: usize,
	/// Packed direction and flag bits of each cell, in `column + row * size` order
	cells: Vec<u8>,
}

impl Field<u8> for FlowField {
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
			panic!("Cannot get a FlowField value, index out of bounds. Asked for column {}, row {}, field side length is {}", field_cell.get_column(), field_cell.get_row(), self.size)
		}
		self.cells[field_cell.get_column() + field_cell.get_row() * self.size]
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: u8, field_cell: FieldCell) {
		if field_cell.get_column() >= self.size || field_cell.get_row() >= self.size {
			panic!("Cannot set a FlowField value, index out of bounds. Asked for column {}, row {}, field side length is {}", field_cell.get_column(), field_cell.get_row(), self.size)
		}
		self.cells[field_cell.get_column() + field_cell.get_row() * self.size] = value;
	}
}

impl FlowField {
	/// Create a new instance of [FlowField] where every cell is unset
	pub fn new(size: usize) -> Self {
		FlowField {
			size,
			cells: vec![BITS_DEFAULT; size * size],
		}
	}
	/// Get the packed value of a cell
	pub fn get_cell(&self, field_cell: FieldCell) -> u8 {
		self.get_field_cell_value(field_cell)
	}
	/// Get the direction of movement encoded in a cell
	pub fn get_dir(&self, field_cell: FieldCell) -> Ordinal {
		get_ordinal_from_bits(self.get_field_cell_value(field_cell))
	}
	/// Clear all cells back to the unset state for reuse
	pub fn reset(&mut self) {
		for value in self.cells.iter_mut() {
			*value = BITS_DEFAULT;
		}
	}
	/// Calculate the [FlowField] from an [IntegrationField] built for the sector
	/// containing the true target. The `target_cells` are flagged as the goal rather
	/// than being given a direction and cells the [IntegrationField] reports
	/// line-of-sight for gain the LOS flag
	pub fn build(&mut self, integration_field: &IntegrationField, target_cells: &[FieldCell]) {
		for goal in target_cells.iter() {
			self.set_field_cell_value(BITS_GOAL | BITS_HAS_LOS | BITS_PATHABLE, *goal);
		}
		self.assign_directions(integration_field);
	}
	/// Calculate the [FlowField] for a sector part way along a route. Cells along the
	/// portal span compare against the costs carried in the neighbouring sector's
	/// [IntegrationField] `other` so their direction points through the portal into the
	/// adjoining sector
	pub fn build_from_portal(
		&mut self,
		integration_field: &IntegrationField,
		other: &IntegrationField,
		other_sector_id: SectorID,
		portal: &Portal,
	) {
		let this_sector = portal.get_exit_sector(other_sector_id);
		let span = portal.get_exit_span(other_sector_id);
		let ordinal_to_other = portal.get_exit_ordinal(this_sector);
		for goal in span.iter() {
			// based on the ordinal get up to 3 neighbouring int costs in the other
			// sector and point the portal cell towards the best one
			let possible_neighbours =
				lookup_portal_goal_neighbour_costs_in_other_sector(goal, other, ordinal_to_other);
			let mut cheapest_value = INTEGRATION_UNREACHED;
			let mut cheapest_ord = None;
			for n in possible_neighbours.iter() {
				if n.1 < cheapest_value {
					cheapest_value = n.1;
					cheapest_ord = Some(n.0);
				}
			}
			if let Some(ord) = cheapest_ord {
				let value = BITS_PORTAL_GOAL | convert_ordinal_to_bits_dir(ord);
				self.set_field_cell_value(value, *goal);
			}
		}
		self.assign_directions(integration_field);
	}
	/// For every cell not yet assigned, point it at its cheapest strictly-improving
	/// neighbour in the `integration_field`, or leave it directionless when no
	/// neighbour improves on the cell's own cost
	fn assign_directions(&mut self, integration_field: &IntegrationField) {
		for column in 0..self.size {
			for row in 0..self.size {
				let field_cell = FieldCell::new(column, row);
				if self.get_field_cell_value(field_cell) & BITS_DEFAULT != BITS_DEFAULT {
					// already assigned as a goal or portal goal
					continue;
				}
				let current_cost = integration_field.get_field_cell_value(field_cell);
				if current_cost == INTEGRATION_UNREACHED {
					// impassable or sealed off, mark it with no direction
					self.set_field_cell_value(BITS_ZERO, field_cell);
					continue;
				}
				let mut cheapest_value = current_cost;
				let mut cheapest_neighbour = None;
				let mut neighbours = Ordinal::get_all_cell_neighbours(field_cell, self.size);

				// find any diagonal cells which are flanked by impassable cells and so
				// movement to them should be ignored/blocked, i.e
				//   X ~ <- ignore diagonal from o
				//   o X
				let remove_diagonals = find_blocked_diagonals(field_cell, integration_field);
				for diag in remove_diagonals.iter() {
					neighbours.retain(|n| *n != *diag);
				}

				for n in neighbours.iter() {
					let neighbour_cost = integration_field.get_field_cell_value(*n);
					if neighbour_cost < cheapest_value {
						cheapest_value = neighbour_cost;
						cheapest_neighbour = Some(*n);
					}
				}
				if let Some(target) = cheapest_neighbour {
					let ord = Ordinal::cell_to_cell_direction(target, field_cell);
					let mut value = convert_ordinal_to_bits_dir(ord) | BITS_PATHABLE;
					if integration_field.has_line_of_sight(field_cell) {
						value |= BITS_HAS_LOS;
					}
					self.set_field_cell_value(value, field_cell);
				} else {
					// a local optimum, pathable but with nowhere better to go
					self.set_field_cell_value(BITS_PATHABLE, field_cell);
				}
			}
		}
	}
}

/// Used by a [FlowField] calculation that needs to peek into a neighbouring sector's
/// [IntegrationField] to align portal cell directions to the best carried-over
/// integration costs. `sector_ordinal` is the direction of travel from the sector being
/// built into the neighbouring one
fn lookup_portal_goal_neighbour_costs_in_other_sector(
	portal_goal: &FieldCell,
	other_integration_field: &IntegrationField,
	sector_ordinal: Ordinal,
) -> Vec<(Ordinal, u16)> {
	let size = other_integration_field.get_size();
	let mut adjacent_neighbours = Vec::new();
	match sector_ordinal {
		Ordinal::North => {
			// orthogonal adjacent cost
			let adj_pos = FieldCell::new(portal_goal.get_column(), size - 1);
			adjacent_neighbours.push((
				Ordinal::North,
				other_integration_field.get_field_cell_value(adj_pos),
			));
			// try and get a cost left
			if portal_goal.get_column() > 0 {
				let adj_pos = FieldCell::new(portal_goal.get_column() - 1, size - 1);
				adjacent_neighbours.push((
					Ordinal::NorthWest,
					other_integration_field.get_field_cell_value(adj_pos),
				));
			}
			// try and get a cost right
			if portal_goal.get_column() < size - 1 {
				let adj_pos = FieldCell::new(portal_goal.get_column() + 1, size - 1);
				adjacent_neighbours.push((
					Ordinal::NorthEast,
					other_integration_field.get_field_cell_value(adj_pos),
				));
			}
		}
		Ordinal::East => {
			// orthogonal adjacent cost
			let adj_pos = FieldCell::new(0, portal_goal.get_row());
			adjacent_neighbours.push((
				Ordinal::East,
				other_integration_field.get_field_cell_value(adj_pos),
			));
			// try and get a cost above
			if portal_goal.get_row() > 0 {
				let adj_pos = FieldCell::new(0, portal_goal.get_row() - 1);
				adjacent_neighbours.push((
					Ordinal::NorthEast,
					other_integration_field.get_field_cell_value(adj_pos),
				));
			}
			// try and get a cost below
			if portal_goal.get_row() < size - 1 {
				let adj_pos = FieldCell::new(0, portal_goal.get_row() + 1);
				adjacent_neighbours.push((
					Ordinal::SouthEast,
					other_integration_field.get_field_cell_value(adj_pos),
				));
			}
		}
		Ordinal::South => {
			// orthogonal adjacent cost
			let adj_pos = FieldCell::new(portal_goal.get_column(), 0);
			adjacent_neighbours.push((
				Ordinal::South,
				other_integration_field.get_field_cell_value(adj_pos),
			));
			// try and get a cost left
			if portal_goal.get_column() > 0 {
				let adj_pos = FieldCell::new(portal_goal.get_column() - 1, 0);
				adjacent_neighbours.push((
					Ordinal::SouthWest,
					other_integration_field.get_field_cell_value(adj_pos),
				));
			}
			// try and get a cost right
			if portal_goal.get_column() < size - 1 {
				let adj_pos = FieldCell::new(portal_goal.get_column() + 1, 0);
				adjacent_neighbours.push((
					Ordinal::SouthEast,
					other_integration_field.get_field_cell_value(adj_pos),
				));
			}
		}
		Ordinal::West => {
			// orthogonal adjacent cost
			let adj_pos = FieldCell::new(size - 1, portal_goal.get_row());
			adjacent_neighbours.push((
				Ordinal::West,
				other_integration_field.get_field_cell_value(adj_pos),
			));
			// try and get a cost above
			if portal_goal.get_row() > 0 {
				let adj_pos = FieldCell::new(size - 1, portal_goal.get_row() - 1);
				adjacent_neighbours.push((
					Ordinal::NorthWest,
					other_integration_field.get_field_cell_value(adj_pos),
				));
			}
			// try and get a cost below
			if portal_goal.get_row() < size - 1 {
				let adj_pos = FieldCell::new(size - 1, portal_goal.get_row() + 1);
				adjacent_neighbours.push((
					Ordinal::SouthWest,
					other_integration_field.get_field_cell_value(adj_pos),
				));
			}
		}
		_ => panic!("Invalid sector ordinal {:?}", sector_ordinal),
	}
	adjacent_neighbours
}

/// Looks at the orthogonal neighbours of a cell, determines whether any pairs are
/// impassable and if so builds a list of the diagonal cells which should be considered
/// unreachable from the inspected `field_cell`
fn find_blocked_diagonals(
	field_cell: FieldCell,
	integration_field: &IntegrationField,
) -> Vec<FieldCell> {
	let size = integration_field.get_size();
	let mut diagonals = Vec::new();
	let north = Ordinal::get_cell_neighbour(field_cell, Ordinal::North, size);
	let east = Ordinal::get_cell_neighbour(field_cell, Ordinal::East, size);
	let south = Ordinal::get_cell_neighbour(field_cell, Ordinal::South, size);
	let west = Ordinal::get_cell_neighbour(field_cell, Ordinal::West, size);
	if let (Some(n), Some(e)) = (north, east) {
		if integration_field.get_field_cell_value(n) == INTEGRATION_UNREACHED
			&& integration_field.get_field_cell_value(e) == INTEGRATION_UNREACHED
		{
			if let Some(north_east) =
				Ordinal::get_cell_neighbour(field_cell, Ordinal::NorthEast, size)
			{
				diagonals.push(north_east);
			}
		}
	}
	if let (Some(n), Some(w)) = (north, west) {
		if integration_field.get_field_cell_value(n) == INTEGRATION_UNREACHED
			&& integration_field.get_field_cell_value(w) == INTEGRATION_UNREACHED
		{
			if let Some(north_west) =
				Ordinal::get_cell_neighbour(field_cell, Ordinal::NorthWest, size)
			{
				diagonals.push(north_west);
			}
		}
	}
	if let (Some(s), Some(e)) = (south, east) {
		if integration_field.get_field_cell_value(s) == INTEGRATION_UNREACHED
			&& integration_field.get_field_cell_value(e) == INTEGRATION_UNREACHED
		{
			if let Some(south_east) =
				Ordinal::get_cell_neighbour(field_cell, Ordinal::SouthEast, size)
			{
				diagonals.push(south_east);
			}
		}
	}
	if let (Some(s), Some(w)) = (south, west) {
		if integration_field.get_field_cell_value(s) == INTEGRATION_UNREACHED
			&& integration_field.get_field_cell_value(w) == INTEGRATION_UNREACHED
		{
			if let Some(south_west) =
				Ordinal::get_cell_neighbour(field_cell, Ordinal::SouthWest, size)
			{
				diagonals.push(south_west);
			}
		}
	}
	diagonals
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn default_init() {
		let flow_field = FlowField::new(10);
		let v = flow_field.get_field_cell_value(FieldCell::new(0, 0));
		assert_eq!(BITS_DEFAULT, v);
	}
	/// Open field with a central goal, verify directions descend towards it and every
	/// cell has sight of it
	#[test]
	fn build_towards_goal() {
		let cost_field = CostField::new(10);
		let goal = FieldCell::new(4, 4);
		let seeds = vec![(goal, 0)];
		let mut integration_field = IntegrationField::new(10);
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		integration_field.calculate_line_of_sight(goal);

		let mut flow_field = FlowField::new(10);
		flow_field.build(&integration_field, &[goal]);

		let goal_value = flow_field.get_cell(goal);
		assert!(is_goal(goal_value));
		assert!(has_line_of_sight(goal_value));
		assert_eq!(Ordinal::South, flow_field.get_dir(FieldCell::new(4, 0)));
		assert_eq!(Ordinal::East, flow_field.get_dir(FieldCell::new(0, 4)));
		assert_eq!(Ordinal::NorthWest, flow_field.get_dir(FieldCell::new(9, 9)));
		assert!(has_line_of_sight(flow_field.get_cell(FieldCell::new(9, 9))));
	}
	/// Every pathable non-goal cell must point at a neighbour with a strictly lower
	/// integration cost
	#[test]
	fn directions_strictly_descend() {
		let mut cost_field = CostField::new(10);
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(5, 4));
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(5, 5));
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(5, 6));
		let goal = FieldCell::new(8, 5);
		let seeds = vec![(goal, 0)];
		let mut integration_field = IntegrationField::new(10);
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		integration_field.calculate_line_of_sight(goal);

		let mut flow_field = FlowField::new(10);
		flow_field.build(&integration_field, &[goal]);

		for column in 0..10 {
			for row in 0..10 {
				let cell = FieldCell::new(column, row);
				let value = flow_field.get_cell(cell);
				if is_goal(value) || !is_pathable(value) {
					continue;
				}
				let dir = flow_field.get_dir(cell);
				if dir == Ordinal::Zero {
					continue;
				}
				let neighbour = Ordinal::get_cell_neighbour(cell, dir, 10)
					.expect("direction points outside the field");
				assert!(
					integration_field.get_field_cell_value(neighbour)
						< integration_field.get_field_cell_value(cell),
					"cell {:?} points at {:?} without descending",
					cell,
					neighbour
				);
			}
		}
	}
	/// Impassable cells end up directionless and unpathable
	#[test]
	fn impassable_cells_are_zeroed() {
		let mut cost_field = CostField::new(10);
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(2, 2));
		let goal = FieldCell::new(7, 7);
		let seeds = vec![(goal, 0)];
		let mut integration_field = IntegrationField::new(10);
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);

		let mut flow_field = FlowField::new(10);
		flow_field.build(&integration_field, &[goal]);

		let value = flow_field.get_cell(FieldCell::new(2, 2));
		assert!(!is_pathable(value));
		assert_eq!(Ordinal::Zero, get_ordinal_from_bits(value));
	}
	/// A sector north of the target sector: its southern portal cells must point south
	/// through the portal and interior cells must flow towards them
	#[test]
	fn build_flows_through_portal() {
		let cost_field = CostField::new(10);
		// the other (downstream) sector holds the true goal
		let goal = FieldCell::new(4, 4);
		let seeds = vec![(goal, 0)];
		let mut other_int = IntegrationField::new(10);
		other_int.reset(&seeds);
		other_int.calculate_field(&seeds, &cost_field);

		// this sector is side 0 (north), the goal sector side 1 (south)
		let this_sector = SectorID::new(0);
		let other_sector = SectorID::new(2);
		let portal = Portal::new(
			PortalID::new(0),
			PortalDirection::NorthSouth,
			this_sector,
			other_sector,
			0,
			9,
			10,
		);

		// continue the wave into this sector through the portal span
		let mut int_field = IntegrationField::new(10);
		let mut span_seeds = Vec::new();
		for cell in portal.get_span(this_sector) {
			let mirrored = FieldCell::new(cell.get_column(), 0);
			let carried = other_int.get_field_cell_value(mirrored)
				+ cost_field.get_field_cell_value(cell) as u16;
			span_seeds.push((cell, carried));
		}
		int_field.reset(&span_seeds);
		int_field.calculate_field(&span_seeds, &cost_field);

		let mut flow_field = FlowField::new(10);
		flow_field.build_from_portal(&int_field, &other_int, other_sector, &portal);

		// portal span cells point through the boundary
		let span_value = flow_field.get_cell(FieldCell::new(4, 9));
		assert!(is_portal_goal(span_value));
		assert_eq!(Ordinal::South, get_ordinal_from_bits(span_value));
		// a span cell away from the goal column leans diagonally towards it
		let east_span_value = flow_field.get_cell(FieldCell::new(8, 9));
		assert!(is_portal_goal(east_span_value));
		assert_eq!(Ordinal::SouthWest, get_ordinal_from_bits(east_span_value));
		// interior cells flow towards the span
		assert_eq!(Ordinal::South, flow_field.get_dir(FieldCell::new(4, 0)));
	}
	#[test]
	fn reset_restores_default() {
		let cost_field = CostField::new(10);
		let goal = FieldCell::new(0, 0);
		let seeds = vec![(goal, 0)];
		let mut integration_field = IntegrationField::new(10);
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, &cost_field);
		let mut flow_field = FlowField::new(10);
		flow_field.build(&integration_field, &[goal]);
		flow_field.reset();
		assert_eq!(BITS_DEFAULT, flow_field.get_cell(FieldCell::new(5, 5)));
	}
	#[test]
	#[should_panic]
	fn unrecognised_direction_bits() {
		// 0b0000_0101 mixes north and south which is not a defined direction
		get_ordinal_from_bits(0b0000_0101);
	}
	#[test]
	fn direction_bits_to_unit_vector() {
		let north_east = convert_ordinal_to_bits_dir(Ordinal::NorthEast) | BITS_PATHABLE;
		assert_eq!(
			Vec2::new(1.0, 1.0),
			get_2d_direction_unit_vector_from_bits(north_east)
		);
		assert_eq!(
			Vec2::new(0.0, 0.0),
			get_2d_direction_unit_vector_from_bits(BITS_ZERO)
		);
	}
}
