//! A Grid owns the sectors spanning a map and the arena of [Portal]s joining them.
//! Portals are discovered by walking every shared sector boundary and splitting it into
//! runs of pathable cells - a boundary interrupted by impassable cells supports
//! multiple portals:
//!
//! ```text
//! _______________________________
//! |         P         |         |
//! |        x|         |         |
//! |        x|         |         |
//! |         P         |         |
//! |_________|_________|_________|
//! ```
//!
//! Once discovered, the portals of each sector are connected to one another wherever
//! the sector interior allows walking between them, forming the edges of the coarse
//! search graph used by the
//! [Pathfinder]
//!

use std::collections::HashSet;

use crate::prelude::*;

/// Spatial partitioning of a map into [Sector]s with a shared side length, plus the
/// arena of [Portal]s joining neighbouring sectors. Read-only while path requests are
/// in flight - cost mutation followed by [Self::build_portals] must be synchronized
/// externally relative to active requests
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug)]
pub struct Grid {
	/// Stable id of the grid within the [Pathfinder]
	id: GridID,
	/// Number of sectors along the `(x, y)` axes
	size: (u32, u32),
	/// Side length shared by every sector of the grid
	sector_size: usize,
	/// The sectors of the grid in `x + y * size.0` order, indexable by [SectorID]
	sectors: Vec<Sector>,
	/// Arena of portals between neighbouring sectors, indexable by [PortalID]
	portals: Vec<Portal>,
}

impl Grid {
	/// Create a new instance of [Grid] made of `size_x` by `size_y` sectors with
	/// default [CostField]s. Portals are not discovered until
	/// [Self::build_portals] is called
	pub fn new(id: GridID, size_x: u32, size_y: u32, sector_size: usize) -> Self {
		if size_x == 0 || size_y == 0 || sector_size < 2 {
			panic!(
				"Grid must be at least 1x1 sectors of side length 2, asked for {}x{} at {}",
				size_x, size_y, sector_size
			);
		}
		let mut sectors = Vec::with_capacity((size_x * size_y) as usize);
		for y in 0..size_y {
			for x in 0..size_x {
				sectors.push(Sector::new(
					SectorID::new(x + y * size_x),
					(x, y),
					sector_size,
				));
			}
		}
		Grid {
			id,
			size: (size_x, size_y),
			sector_size,
			sectors,
			portals: Vec::new(),
		}
	}
	/// Get the grid id
	pub fn get_id(&self) -> GridID {
		self.id
	}
	/// Get the number of sectors along the `(x, y)` axes
	pub fn get_size(&self) -> (u32, u32) {
		self.size
	}
	/// Get the side length shared by every sector of the grid
	pub fn get_sector_size(&self) -> usize {
		self.sector_size
	}
	/// Get the sector at position `(x, y)`. Panics when the position sits outside the
	/// grid
	pub fn get_sector(&self, x: u32, y: u32) -> &Sector {
		if x >= self.size.0 || y >= self.size.1 {
			panic!(
				"Sector position ({}, {}) sits outside grid of {}x{} sectors",
				x, y, self.size.0, self.size.1
			);
		}
		&self.sectors[(x + y * self.size.0) as usize]
	}
	/// Get the sector with the given id. Panics when no such sector exists
	pub fn get_sector_by_id(&self, id: SectorID) -> &Sector {
		if id.get() as usize >= self.sectors.len() {
			panic!(
				"No sector with id {:?} in grid of {} sectors",
				id,
				self.sectors.len()
			);
		}
		&self.sectors[id.get() as usize]
	}
	/// Get a mutable reference to the sector at position `(x, y)`
	pub fn get_sector_mut(&mut self, x: u32, y: u32) -> &mut Sector {
		if x >= self.size.0 || y >= self.size.1 {
			panic!(
				"Sector position ({}, {}) sits outside grid of {}x{} sectors",
				x, y, self.size.0, self.size.1
			);
		}
		&mut self.sectors[(x + y * self.size.0) as usize]
	}
	/// Get the sectors of the grid
	pub fn get_sectors(&self) -> &Vec<Sector> {
		&self.sectors
	}
	/// Get a portal from the arena. Panics when no such portal exists
	pub fn get_portal(&self, id: PortalID) -> &Portal {
		if id.get() as usize >= self.portals.len() {
			panic!(
				"No portal with id {:?} in grid of {} portals",
				id,
				self.portals.len()
			);
		}
		&self.portals[id.get() as usize]
	}
	/// Get the portal arena
	pub fn get_portals(&self) -> &Vec<Portal> {
		&self.portals
	}
	/// Find the sector containing an absolute tile and the tile's cell position local
	/// to it, [None] when the tile sits outside the grid
	pub fn get_sector_and_cell_from_tile(&self, tile: GridTile) -> Option<(SectorID, FieldCell)> {
		let sector_size = self.sector_size as u32;
		let sector_x = tile.get_column() / sector_size;
		let sector_y = tile.get_row() / sector_size;
		if sector_x >= self.size.0 || sector_y >= self.size.1 {
			return None;
		}
		let cell = FieldCell::new(
			(tile.get_column() % sector_size) as usize,
			(tile.get_row() % sector_size) as usize,
		);
		Some((SectorID::new(sector_x + sector_y * self.size.0), cell))
	}
	/// Translate a cell local to a sector into its absolute tile position
	pub fn get_absolute_tile(&self, sector_id: SectorID, cell: FieldCell) -> GridTile {
		let (x, y) = self.get_sector_by_id(sector_id).get_position();
		GridTile::new(
			x * self.sector_size as u32 + cell.get_column() as u32,
			y * self.sector_size as u32 + cell.get_row() as u32,
		)
	}
	/// Discover the [Portal]s along every shared sector boundary and connect the
	/// mutually reachable portals of each sector to form the edges of the coarse
	/// search graph. Replaces any previously discovered portals, so call this again
	/// after mutating any [CostField]
	pub fn build_portals(&mut self) {
		self.portals.clear();
		for sector in self.sectors.iter_mut() {
			sector.clear_portals();
		}
		let (size_x, size_y) = self.size;
		for y in 0..size_y {
			for x in 0..size_x {
				if x < size_x - 1 {
					let runs = find_boundary_runs(
						self.get_sector(x, y).get_cost_field(),
						self.get_sector(x + 1, y).get_cost_field(),
						PortalDirection::EastWest,
					);
					self.publish_portals(runs, PortalDirection::EastWest, (x, y), (x + 1, y));
				}
				if y < size_y - 1 {
					let runs = find_boundary_runs(
						self.get_sector(x, y).get_cost_field(),
						self.get_sector(x, y + 1).get_cost_field(),
						PortalDirection::NorthSouth,
					);
					self.publish_portals(runs, PortalDirection::NorthSouth, (x, y), (x, y + 1));
				}
			}
		}
		self.connect_exits();
	}
	/// Create a [Portal] for each pathable boundary run and register it with the two
	/// sectors it joins
	fn publish_portals(
		&mut self,
		runs: Vec<(usize, usize)>,
		direction: PortalDirection,
		side_0: (u32, u32),
		side_1: (u32, u32),
	) {
		let sector_0 = self.get_sector(side_0.0, side_0.1).get_id();
		let sector_1 = self.get_sector(side_1.0, side_1.1).get_id();
		for (start, end) in runs {
			let id = PortalID::new(self.portals.len() as u32);
			self.portals.push(Portal::new(
				id,
				direction,
				sector_0,
				sector_1,
				start,
				end,
				self.sector_size,
			));
			self.sectors[sector_0.get() as usize].add_portal(id);
			self.sectors[sector_1.get() as usize].add_portal(id);
		}
	}
	/// For every sector connect each pair of its portals that can walk to each other
	/// through the sector interior. These connections are the exits the portal-graph
	/// search expands without crossing a third sector
	fn connect_exits(&mut self) {
		let mut connections: Vec<(PortalID, SectorID, PortalID)> = Vec::new();
		for sector in self.sectors.iter() {
			let portal_ids = sector.get_portals();
			if portal_ids.len() < 2 {
				continue;
			}
			let sector_id = sector.get_id();
			for (i, portal_id) in portal_ids.iter().enumerate() {
				let source = self.get_portal(*portal_id).get_center(sector_id);
				let reached = flood_fill(sector.get_cost_field(), source);
				for other_id in portal_ids.iter().skip(i + 1) {
					let other = self.get_portal(*other_id).get_center(sector_id);
					if reached.contains(&other) {
						connections.push((*portal_id, sector_id, *other_id));
						connections.push((*other_id, sector_id, *portal_id));
					}
				}
			}
		}
		for (portal_id, sector_id, exit) in connections {
			self.portals[portal_id.get() as usize].add_exit(sector_id, exit);
		}
	}
}

/// Walk the shared boundary of two neighbouring [CostField]s and split it into
/// contiguous runs of cell indices which are pathable on both sides. Each run becomes
/// one [Portal]
fn find_boundary_runs(
	field_0: &CostField,
	field_1: &CostField,
	direction: PortalDirection,
) -> Vec<(usize, usize)> {
	let size = field_0.get_size();
	let mut runs = Vec::new();
	let mut run_start: Option<usize> = None;
	for i in 0..size {
		let (cell_0, cell_1) = match direction {
			PortalDirection::EastWest => (FieldCell::new(size - 1, i), FieldCell::new(0, i)),
			PortalDirection::NorthSouth => (FieldCell::new(i, size - 1), FieldCell::new(i, 0)),
		};
		let pathable = field_0.is_cell_passable(cell_0) && field_1.is_cell_passable(cell_1);
		match (pathable, run_start) {
			(true, None) => run_start = Some(i),
			(false, Some(start)) => {
				runs.push((start, i - 1));
				run_start = None;
			}
			_ => {}
		}
	}
	if let Some(start) = run_start {
		runs.push((start, size - 1));
	}
	runs
}

/// Collect every cell reachable from `start` by orthogonal movement over passable
/// cells of a [CostField]
fn flood_fill(cost_field: &CostField, start: FieldCell) -> HashSet<FieldCell> {
	let mut reached = HashSet::new();
	if !cost_field.is_cell_passable(start) {
		return reached;
	}
	let mut queue = vec![start];
	reached.insert(start);
	while let Some(cell) = queue.pop() {
		for n in Ordinal::get_orthogonal_cell_neighbours(cell, cost_field.get_size()) {
			if cost_field.is_cell_passable(n) && reached.insert(n) {
				queue.push(n);
			}
		}
	}
	reached
}

/// Mirrors the on-disk RON layout of a grid: the sector dimensions plus the flattened
/// cost cells of each sector keyed by its `(column, row)` position. Sectors missing
/// from the map keep their default costs
#[cfg(feature = "ron")]
#[derive(serde::Deserialize)]
struct GridLayout {
	/// Number of sectors along the `(x, y)` axes
	size: (u32, u32),
	/// Side length shared by every sector
	sector_size: usize,
	/// Flattened cost cells per sector position, in `column + row * sector_size` order
	cost_fields: std::collections::BTreeMap<(u32, u32), Vec<u8>>,
}

#[cfg(feature = "ron")]
impl Grid {
	/// Create a new instance of [Grid] from a RON file of sector cost layouts, with
	/// portals discovered and connected, ready for pathing
	pub fn from_file(id: GridID, path: String) -> Self {
		let file = std::fs::File::open(path).expect("Failed opening grid layout file");
		let layout: GridLayout = match ron::de::from_reader(file) {
			Ok(layout) => layout,
			Err(e) => panic!("Failed deserializing GridLayout: {}", e),
		};
		let mut grid = Grid::new(id, layout.size.0, layout.size.1, layout.sector_size);
		for ((x, y), cells) in layout.cost_fields {
			let cost_field = CostField::from_cells(layout.sector_size, cells);
			grid.get_sector_mut(x, y).set_cost_field(cost_field);
		}
		grid.build_portals();
		grid
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn open_boundaries_give_one_portal_each() {
		let mut grid = Grid::new(GridID::new(0), 2, 2, 10);
		grid.build_portals();
		assert_eq!(4, grid.get_sectors().len());
		// 2 east-west boundaries and 2 north-south boundaries
		assert_eq!(4, grid.get_portals().len());
		assert_eq!(2, grid.get_sector(0, 0).get_portals().len());
		// portals of an open boundary span the whole edge with a central cell
		let portal = grid.get_portal(grid.get_sector(0, 0).get_portals()[0]);
		assert_eq!(FieldCell::new(9, 4), portal.get_center(SectorID::new(0)));
	}
	#[test]
	fn split_boundary_gives_multiple_portals() {
		let mut grid = Grid::new(GridID::new(0), 2, 1, 10);
		// wall off the middle of the shared boundary from the western side
		let cost_field = grid.get_sector_mut(0, 0).get_cost_field_mut();
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(9, 4));
		cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(9, 5));
		grid.build_portals();
		assert_eq!(2, grid.get_portals().len());
		let first = grid.get_portal(PortalID::new(0));
		assert_eq!(FieldCell::new(9, 1), first.get_center(SectorID::new(0)));
		let second = grid.get_portal(PortalID::new(1));
		assert_eq!(FieldCell::new(9, 7), second.get_center(SectorID::new(0)));
	}
	#[test]
	fn exits_connect_reachable_portals() {
		let mut grid = Grid::new(GridID::new(0), 2, 2, 10);
		grid.build_portals();
		// sector (0, 0) has an eastern and a southern portal which see each other
		let sector = grid.get_sector(0, 0);
		let portal_ids = sector.get_portals().clone();
		assert_eq!(2, portal_ids.len());
		let first = grid.get_portal(portal_ids[0]);
		assert_eq!(
			&vec![portal_ids[1]],
			// the exits of sector (0, 0) are read by entering from the far side
			first.get_exits(first.get_exit_sector(SectorID::new(0)))
		);
	}
	#[test]
	fn exits_blocked_by_interior_wall() {
		let mut grid = Grid::new(GridID::new(0), 2, 2, 10);
		// split sector (0, 0) into a northern and a southern half
		{
			let cost_field = grid.get_sector_mut(0, 0).get_cost_field_mut();
			for column in 0..10 {
				cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(column, 5));
			}
		}
		grid.build_portals();
		// the wall splits the eastern boundary into two portals, only the southern one
		// can still walk to the portal on the southern boundary
		assert_eq!(3, grid.get_sector(0, 0).get_portals().len());
		let eastern_north = grid.get_portal(PortalID::new(0));
		assert_eq!(FieldCell::new(9, 2), eastern_north.get_center(SectorID::new(0)));
		assert!(eastern_north.get_exits(SectorID::new(1)).is_empty());
		let eastern_south = grid.get_portal(PortalID::new(1));
		assert_eq!(
			&vec![PortalID::new(2)],
			eastern_south.get_exits(SectorID::new(1))
		);
	}
	#[test]
	fn tile_to_sector_and_back() {
		let grid = Grid::new(GridID::new(0), 3, 2, 10);
		let (sector_id, cell) = grid
			.get_sector_and_cell_from_tile(GridTile::new(25, 17))
			.unwrap();
		assert_eq!(SectorID::new(5), sector_id);
		assert_eq!(FieldCell::new(5, 7), cell);
		assert_eq!(
			GridTile::new(25, 17),
			grid.get_absolute_tile(sector_id, cell)
		);
		assert!(grid
			.get_sector_and_cell_from_tile(GridTile::new(30, 0))
			.is_none());
	}
	#[cfg(feature = "ron")]
	#[test]
	fn grid_from_ron_file() {
		let layout = r#"(
			size: (2, 1),
			sector_size: 10,
			cost_fields: {
				(0, 0): [
					1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 255,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 255,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
					1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
				],
			},
		)"#;
		let path = std::env::temp_dir().join("portal_nav_grid_layout.ron");
		std::fs::write(&path, layout).unwrap();
		let grid = Grid::from_file(GridID::new(0), path.to_str().unwrap().to_string());
		// the impassable boundary cells split the shared edge into two portals
		assert_eq!(2, grid.get_portals().len());
		assert!(!grid
			.get_sector(0, 0)
			.get_cost_field()
			.is_cell_passable(FieldCell::new(9, 4)));
	}
}
