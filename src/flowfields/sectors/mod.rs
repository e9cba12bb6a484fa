//! A grid is divided into square sectors and each sector owns the [CostField]
//! describing its terrain plus references to the [Portal]s along its boundary
//!

pub mod grid;

use crate::prelude::*;

/// A square partition of a grid. The unit of localized field construction - every
/// [IntegrationField]/[FlowField] pair built during a path request covers exactly one
/// sector
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug)]
pub struct Sector {
	/// Stable id of the sector within its grid
	id: SectorID,
	/// The `(column, row)` position of the sector within the grid
	position: (u32, u32),
	/// Terrain cost of each cell in the sector
	cost_field: CostField,
	/// The portals along this sector's boundary, referencing the arena owned by the
	/// grid. A portal is shared with the neighbour on the far side of it
	portals: Vec<PortalID>,
}

impl Sector {
	/// Create a new instance of [Sector] with a default [CostField]
	pub fn new(id: SectorID, position: (u32, u32), sector_size: usize) -> Self {
		Sector {
			id,
			position,
			cost_field: CostField::new(sector_size),
			portals: Vec::new(),
		}
	}
	/// Get the sector id
	pub fn get_id(&self) -> SectorID {
		self.id
	}
	/// Get the `(column, row)` position of the sector within the grid
	pub fn get_position(&self) -> (u32, u32) {
		self.position
	}
	/// Get a reference to the sector's [CostField]
	pub fn get_cost_field(&self) -> &CostField {
		&self.cost_field
	}
	/// Get a mutable reference to the sector's [CostField].
	///
	/// Mutating costs invalidates the portals of this sector and its neighbours,
	/// rebuild them with [grid::Grid::build_portals] before the next path request
	pub fn get_cost_field_mut(&mut self) -> &mut CostField {
		&mut self.cost_field
	}
	/// Replace the sector's [CostField]. Panics if the field's side length differs from
	/// the sector's
	pub fn set_cost_field(&mut self, cost_field: CostField) {
		if cost_field.get_size() != self.cost_field.get_size() {
			panic!(
				"CostField side length {} does not match the sector's side length {}",
				cost_field.get_size(),
				self.cost_field.get_size()
			);
		}
		self.cost_field = cost_field;
	}
	/// Get the portals along this sector's boundary
	pub fn get_portals(&self) -> &Vec<PortalID> {
		&self.portals
	}
	/// Record a portal as sitting on this sector's boundary
	pub fn add_portal(&mut self, portal: PortalID) {
		self.portals.push(portal);
	}
	/// Forget all portals, used when the grid rediscovers them
	pub fn clear_portals(&mut self) {
		self.portals.clear();
	}
}
