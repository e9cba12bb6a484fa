//! The Pathfinder owns the set of [Grid]s and answers [PathRequest]s with ordered
//! waypoint [Path]s. A request runs in three stages:
//!
//! 1. An A* over the portal graph of the grid picks the cheapest sequence of sector
//!    boundaries to cross, using straight-line distance between portal centres as both
//!    edge cost and heuristic
//! 2. The [Integrator] builds an [IntegrationField]/[FlowField] pair for the target
//!    sector and then for each sector walked backward along the winning portal chain,
//!    carrying cost continuity through each [Portal]
//! 3. The chained [FlowField]s are traversed cell by cell from the start tile, emitting
//!    a waypoint wherever the direction of travel changes, a sector boundary is crossed
//!    or a cell with line-of-sight to the target is reached
//!
//! When the target sector cannot be reached at all the search instead returns the
//! route to the portal that got closest to the target, so callers always receive some
//! route - the final waypoint is still the requested target but the route may not
//! truly arrive at it. Callers needing to detect this can compare the last two
//! waypoints against the sector layout
//!

pub mod search;

use std::collections::{BTreeMap, HashMap};

use crate::prelude::*;
use bevy::prelude::*;

use self::search::{NodeHeap, PortalNode};

/// Top-level orchestrator of hierarchical pathfinding. Owns the table of [Grid]s keyed
/// by [GridID] and the [Integrator] used to build per-sector fields. All pathfinding
/// runs through `&self`, so one instance can serve concurrent requests as long as no
/// [CostField] mutation is in flight
#[derive(Component, Default)]
pub struct Pathfinder {
	/// The grids registered for pathfinding
	grids: BTreeMap<GridID, Grid>,
	/// Builds the field pairs of sectors along a route
	integrator: Integrator,
}

impl Pathfinder {
	/// Create a new instance of [Pathfinder] with no grids registered
	pub fn new() -> Self {
		Pathfinder::default()
	}
	/// Register a grid for pathfinding, replacing any grid with the same id
	pub fn add_grid(&mut self, grid: Grid) {
		self.grids.insert(grid.get_id(), grid);
	}
	/// Get a registered grid, [None] if the id is unknown
	pub fn get_grid(&self, id: GridID) -> Option<&Grid> {
		self.grids.get(&id)
	}
	/// Get a mutable reference to a registered grid, [None] if the id is unknown.
	///
	/// Mutating costs must not overlap concurrent [Self::get_path] calls and requires
	/// rebuilding the grid's portals, see [Grid::build_portals]
	pub fn get_grid_mut(&mut self, id: GridID) -> Option<&mut Grid> {
		self.grids.get_mut(&id)
	}
	/// Compute the waypoints of a route between the start and target tiles of a
	/// request. The first waypoint is always the start tile and the last is always the
	/// target tile; for an unreachable target the waypoints in between describe a
	/// best-effort route towards the portal closest to it
	pub fn get_path(&self, request: &PathRequest) -> Result<Path, PathError> {
		trace!("Finding path for request {:?}", request);
		// high-level pathfinding, find the portals to use to get from start to target
		let portal_path = self.portal_a_star(request)?;

		// low-level pathfinding, build the chain of flow fields across the sectors
		let grid = self
			.grids
			.get(&request.get_grid_id())
			.ok_or(PathError::GridNotFound(request.get_grid_id()))?;
		let (target_sector_id, target_cell) = grid
			.get_sector_and_cell_from_tile(request.get_target())
			.ok_or(PathError::TileOutOfBounds(
				request.get_target(),
				grid.get_id(),
			))?;
		let target_sector = grid.get_sector_by_id(target_sector_id);

		let (mut prev_integration_field, target_flow_field) = self
			.integrator
			.build(target_sector.get_cost_field(), target_cell);
		let mut prev_sector_id = target_sector_id;

		let mut flow_fields: Vec<(SectorID, FlowField)> = Vec::with_capacity(portal_path.len() + 1);
		flow_fields.push((target_sector_id, target_flow_field));
		// the portal sequence is ordered start to target, chain the fields backwards
		// from the target so each sector flows into the one built before it
		for portal_id in portal_path.iter().rev() {
			let portal = grid.get_portal(*portal_id);
			let next_sector_id = portal.get_exit_sector(prev_sector_id);
			let next_sector = grid.get_sector_by_id(next_sector_id);

			let (integration_field, flow_field) = self.integrator.build_from_portal(
				next_sector.get_cost_field(),
				&prev_integration_field,
				prev_sector_id,
				portal,
			);
			flow_fields.push((next_sector_id, flow_field));

			prev_integration_field = integration_field;
			prev_sector_id = next_sector_id;
		}

		// reverse the flow fields so they are ordered from start to target
		flow_fields.reverse();

		// traverse the flow fields to get the waypoints
		let mut waypoints = vec![request.get_start()];
		for waypoint in self.get_waypoints(grid, &flow_fields, request) {
			if waypoints.last() != Some(&waypoint) {
				waypoints.push(waypoint);
			}
		}

		Ok(Path::new(request.get_grid_id(), waypoints))
	}
	/// Find the cheapest ordered sequence of portal crossings from the start sector to
	/// the target sector. An empty sequence means the start and target share a sector.
	/// When the queue runs dry without reaching the target sector the route to the
	/// closest portal seen is returned instead
	fn portal_a_star(&self, request: &PathRequest) -> Result<Vec<PortalID>, PathError> {
		let grid = self
			.grids
			.get(&request.get_grid_id())
			.ok_or(PathError::GridNotFound(request.get_grid_id()))?;
		let (start_sector_id, _) = grid
			.get_sector_and_cell_from_tile(request.get_start())
			.ok_or(PathError::TileOutOfBounds(request.get_start(), grid.get_id()))?;
		let (target_sector_id, _) = grid
			.get_sector_and_cell_from_tile(request.get_target())
			.ok_or(PathError::TileOutOfBounds(
				request.get_target(),
				grid.get_id(),
			))?;

		// exit early if the start and target are in the same sector
		if start_sector_id == target_sector_id {
			return Ok(Vec::new());
		}

		// per-request node arena, known portals and the candidate queue
		let mut nodes: Vec<PortalNode> = Vec::new();
		let mut visited_portals: HashMap<PortalID, usize> = HashMap::new();
		let mut node_candidates = NodeHeap::new();

		// start nodes: all portals of the start sector
		let start_sector = grid.get_sector_by_id(start_sector_id);
		for portal_id in start_sector.get_portals().iter() {
			let portal = grid.get_portal(*portal_id);
			let exit_sector = portal.get_exit_sector(start_sector_id);
			let portal_abs_pos =
				grid.get_absolute_tile(exit_sector, portal.get_exit_center(start_sector_id));
			let heuristic_cost = Pathfinder::heuristic_cost(portal_abs_pos, request.get_target());

			let index = nodes.len();
			let mut portal_node = PortalNode::new(*portal_id, start_sector_id, None);
			portal_node.set_heuristic_cost(heuristic_cost);
			portal_node.set_current_cost(0);
			nodes.push(portal_node);
			node_candidates.push(&mut nodes, index);
			visited_portals.insert(*portal_id, index);
		}

		// an isolated start sector cannot be left, path within it as best-effort
		if node_candidates.is_empty() {
			debug!(
				"Start sector {:?} has no portals, returning an empty portal sequence",
				start_sector_id
			);
			return Ok(Vec::new());
		}

		// track the closest we can get to the target, used when no path is found
		let mut closest_index = node_candidates.peek().expect("candidates are non-empty");

		// while there are candidates to visit
		while let Some(current_index) = node_candidates.pop(&mut nodes) {
			nodes[current_index].mark_best();
			let current_entry = nodes[current_index].get_entry_sector();
			let portal = grid.get_portal(nodes[current_index].get_portal());
			let exit_sector = portal.get_exit_sector(current_entry);

			// check if the current node reaches the target sector
			if exit_sector == target_sector_id {
				return Ok(backtrace(&nodes, current_index));
			}

			// check if the current node is the closest to the target
			if nodes[current_index].get_heuristic_cost() < nodes[closest_index].get_heuristic_cost()
			{
				closest_index = current_index;
			}

			// evaluate all reachable portals of the exit sector for further progress
			let exit_center_abs =
				grid.get_absolute_tile(exit_sector, portal.get_exit_center(current_entry));
			for exit_portal_id in portal.get_exits(current_entry).iter() {
				let exit_portal = grid.get_portal(*exit_portal_id);
				let entry_center_abs =
					grid.get_absolute_tile(exit_sector, exit_portal.get_entry_center(exit_sector));
				let distance_cost = Pathfinder::distance_cost(exit_center_abs, entry_center_abs);
				let tentative_cost = nodes[current_index].get_current_cost() + distance_cost;

				if let Some(exit_index) = visited_portals.get(exit_portal_id).copied() {
					if nodes[exit_index].was_best() {
						continue;
					}
					if tentative_cost < nodes[exit_index].get_current_cost() {
						// a better route to a known portal, update the cost knowledge
						nodes[exit_index].set_current_cost(tentative_cost);
						nodes[exit_index].set_prev(Some(current_index));
						node_candidates.decrease(&mut nodes, exit_index);
					}
				} else {
					// a fresh portal, calculate its heuristic and queue it
					let exit_exit_sector = exit_portal.get_exit_sector(exit_sector);
					let exit_abs_pos = grid.get_absolute_tile(
						exit_exit_sector,
						exit_portal.get_exit_center(exit_sector),
					);
					let heuristic_cost =
						Pathfinder::heuristic_cost(exit_abs_pos, request.get_target());

					let exit_index = nodes.len();
					let mut exit_node =
						PortalNode::new(*exit_portal_id, exit_sector, Some(current_index));
					exit_node.set_heuristic_cost(heuristic_cost);
					exit_node.set_current_cost(tentative_cost);
					nodes.push(exit_node);
					node_candidates.push(&mut nodes, exit_index);
					visited_portals.insert(*exit_portal_id, exit_index);
				}
			}
		}

		// no path found, return the route to the closest node
		debug!(
			"Target sector {:?} is unreachable from sector {:?}, returning the best-effort portal sequence",
			target_sector_id, start_sector_id
		);
		Ok(backtrace(&nodes, closest_index))
	}
	/// Walk the chained flow fields cell by cell from the start tile, producing the
	/// waypoints of the route. Panics when given zero flow fields - every request
	/// builds at least the target sector's field, so none indicates a malformed call
	fn get_waypoints(
		&self,
		grid: &Grid,
		flow_fields: &[(SectorID, FlowField)],
		request: &PathRequest,
	) -> Vec<GridTile> {
		if flow_fields.is_empty() {
			panic!("At least 1 flow field is required for finding waypoints");
		}

		let sector_size = grid.get_sector_size() as i64;
		let mut waypoints = Vec::new();

		// walk in signed local coordinates so stepping over a sector edge is detectable
		let mut current_x = (request.get_start().get_column() as i64) % sector_size;
		let mut current_y = (request.get_start().get_row() as i64) % sector_size;
		let mut current_direction = flow_fields[0]
			.1
			.get_dir(FieldCell::new(current_x as usize, current_y as usize));
		'fields: for (sector_id, flow_field) in flow_fields.iter() {
			// navigate the flow field vectors until we reach its edge or the target
			while current_x >= 0
				&& current_x < sector_size
				&& current_y >= 0
				&& current_y < sector_size
			{
				let cell = FieldCell::new(current_x as usize, current_y as usize);
				let cell_value = flow_field.get_cell(cell);
				if has_line_of_sight(cell_value) {
					// the target is directly reachable from here, no need to keep
					// following vectors
					waypoints.push(grid.get_absolute_tile(*sector_id, cell));
					break 'fields;
				}

				let cell_direction = flow_field.get_dir(cell);
				if cell_direction == Ordinal::Zero {
					// the field has nowhere to send us, surface where the route ran dry
					waypoints.push(grid.get_absolute_tile(*sector_id, cell));
					break 'fields;
				}

				// check if we need to change direction
				if cell_direction != current_direction {
					waypoints.push(grid.get_absolute_tile(*sector_id, cell));
					current_direction = cell_direction;
				}

				// move to the next cell
				match current_direction {
					Ordinal::North => current_y -= 1,
					Ordinal::NorthEast => {
						current_x += 1;
						current_y -= 1;
					}
					Ordinal::East => current_x += 1,
					Ordinal::SouthEast => {
						current_x += 1;
						current_y += 1;
					}
					Ordinal::South => current_y += 1,
					Ordinal::SouthWest => {
						current_x -= 1;
						current_y += 1;
					}
					Ordinal::West => current_x -= 1,
					Ordinal::NorthWest => {
						current_x -= 1;
						current_y -= 1;
					}
					Ordinal::Zero => {
						panic!("Invalid flow direction while traversing a flow field chain")
					}
				}
			}

			// reset the current position into the entry cell of the next sector
			match current_direction {
				Ordinal::North => current_y = sector_size - 1,
				Ordinal::NorthEast => {
					current_x += 1;
					current_y = sector_size - 1;
				}
				Ordinal::East => current_x = 0,
				Ordinal::SouthEast => {
					current_x = 0;
					current_y += 1;
				}
				Ordinal::South => current_y = 0,
				Ordinal::SouthWest => {
					current_x -= 1;
					current_y = 0;
				}
				Ordinal::West => current_x = sector_size - 1,
				Ordinal::NorthWest => {
					current_x = sector_size - 1;
					current_y -= 1;
				}
				Ordinal::Zero => {
					panic!("Invalid flow direction while crossing a sector boundary")
				}
			}
		}

		// add the target position as the last waypoint
		waypoints.push(request.get_target());

		waypoints
	}
	/// Straight-line estimate of travel cost from a portal position to the target
	fn heuristic_cost(portal_pos: GridTile, target_pos: GridTile) -> i32 {
		portal_pos.distance(&target_pos)
	}
	/// Straight-line cost of travelling between two portal positions
	fn distance_cost(portal1_pos: GridTile, portal2_pos: GridTile) -> i32 {
		portal1_pos.distance(&portal2_pos)
	}
}

/// Walk the predecessor links from a finalized node back to the start sector and
/// return the crossed portals reordered start-first
fn backtrace(nodes: &[PortalNode], from: usize) -> Vec<PortalID> {
	let mut portals = Vec::new();
	let mut current = Some(from);
	while let Some(index) = current {
		portals.push(nodes[index].get_portal());
		current = nodes[index].get_prev();
	}
	// closest-first becomes start-first
	portals.reverse();
	portals
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// A 2x2 sector grid with open terrain
	fn open_grid() -> Pathfinder {
		let mut grid = Grid::new(GridID::new(0), 2, 2, 10);
		grid.build_portals();
		let mut pathfinder = Pathfinder::new();
		pathfinder.add_grid(grid);
		pathfinder
	}
	#[test]
	fn unknown_grid_is_an_error() {
		let pathfinder = Pathfinder::new();
		let request = PathRequest::new(GridID::new(9), GridTile::new(0, 0), GridTile::new(5, 5));
		assert_eq!(
			Err(PathError::GridNotFound(GridID::new(9))),
			pathfinder.get_path(&request)
		);
	}
	#[test]
	fn tile_outside_grid_is_an_error() {
		let pathfinder = open_grid();
		let request = PathRequest::new(GridID::new(0), GridTile::new(0, 0), GridTile::new(25, 5));
		assert_eq!(
			Err(PathError::TileOutOfBounds(
				GridTile::new(25, 5),
				GridID::new(0)
			)),
			pathfinder.get_path(&request)
		);
	}
	#[test]
	fn same_sector_gives_empty_portal_sequence() {
		let pathfinder = open_grid();
		let request = PathRequest::new(GridID::new(0), GridTile::new(1, 1), GridTile::new(8, 8));
		let portal_path = pathfinder.portal_a_star(&request).unwrap();
		assert!(portal_path.is_empty());
	}
	#[test]
	fn neighbour_sector_crosses_one_portal() {
		let pathfinder = open_grid();
		let request = PathRequest::new(GridID::new(0), GridTile::new(2, 2), GridTile::new(15, 5));
		let portal_path = pathfinder.portal_a_star(&request).unwrap();
		assert_eq!(1, portal_path.len());
		// the crossing portal joins sectors (0, 0) and (1, 0)
		let grid = pathfinder.get_grid(GridID::new(0)).unwrap();
		let portal = grid.get_portal(portal_path[0]);
		assert_eq!(
			(SectorID::new(0), SectorID::new(1)),
			portal.get_sectors()
		);
	}
	#[test]
	fn diagonal_route_crosses_two_portals() {
		let pathfinder = open_grid();
		let request = PathRequest::new(GridID::new(0), GridTile::new(1, 1), GridTile::new(18, 18));
		let portal_path = pathfinder.portal_a_star(&request).unwrap();
		assert_eq!(2, portal_path.len());
	}
	#[test]
	fn unreachable_target_returns_best_effort_sequence() {
		// three sectors in a row with the boundary into the last walled off
		let mut grid = Grid::new(GridID::new(0), 3, 1, 10);
		{
			let cost_field = grid.get_sector_mut(2, 0).get_cost_field_mut();
			for row in 0..10 {
				cost_field.set_field_cell_value(COST_IMPASSABLE, FieldCell::new(0, row));
			}
		}
		grid.build_portals();
		// only the boundary between the first two sectors has a portal
		assert_eq!(1, grid.get_portals().len());
		let mut pathfinder = Pathfinder::new();
		pathfinder.add_grid(grid);
		let request = PathRequest::new(GridID::new(0), GridTile::new(2, 2), GridTile::new(25, 5));
		let portal_path = pathfinder.portal_a_star(&request).unwrap();
		assert_eq!(vec![PortalID::new(0)], portal_path);
	}
	#[test]
	#[should_panic]
	fn waypoints_require_a_flow_field() {
		let pathfinder = open_grid();
		let grid = pathfinder.get_grid(GridID::new(0)).unwrap();
		let request = PathRequest::new(GridID::new(0), GridTile::new(0, 0), GridTile::new(5, 5));
		pathfinder.get_waypoints(grid, &[], &request);
	}
	#[test]
	fn path_endpoints_match_request() {
		let pathfinder = open_grid();
		let request = PathRequest::new(GridID::new(0), GridTile::new(2, 2), GridTile::new(15, 5));
		let path = pathfinder.get_path(&request).unwrap();
		let waypoints = path.get_waypoints();
		assert_eq!(GridTile::new(2, 2), *waypoints.first().unwrap());
		assert_eq!(GridTile::new(15, 5), *waypoints.last().unwrap());
	}
	#[test]
	fn identical_requests_give_identical_paths() {
		let pathfinder = open_grid();
		let request = PathRequest::new(GridID::new(0), GridTile::new(3, 17), GridTile::new(16, 2));
		let first = pathfinder.get_path(&request).unwrap();
		let second = pathfinder.get_path(&request).unwrap();
		assert_eq!(first, second);
	}
}
