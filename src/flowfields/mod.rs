//! FlowFields are a means of handling pathfinding for a crowd of actors.
//!
//! [Fixing Pathfinding Once and For All](https://web.archive.org/web/20150905073624/http://www.ai-blog.net/archives/000152.html)
//!
//! [SupCom2- Elijah Emerson](https://www.gameaipro.com/GameAIPro/GameAIPro_Chapter23_Crowd_Pathfinding_and_Steering_Using_Flow_Field_Tiles.pdf)
//!
//! A map is divided into one or more Grids and each Grid is divided into a series of
//! square Sectors. Neighbouring Sectors are joined by Portals - pathable windows along
//! their shared boundary. Pathfinding runs at two levels:
//!
//! 1. A high-level A* over the Portals decides which sector boundaries to cross
//! 2. For each sector along the winning chain a pair of fields is built: an
//!    IntegrationField (wavefront cost-to-target) and a FlowField (per-cell direction
//!    towards cheaper cost). Walking the chained FlowFields cell by cell produces the
//!    waypoints an actor follows
//!
//! Sectors are positioned from the top-left corner of the grid, i.e the `(0, 0)` sector
//! touches the northern and western edges. The fields of a sector are indexed from the
//! top-left corner of the sector.
//!
//! ```text
//!  _______________________________
//! |         |         |         |
//! |         |         |         |
//! |         P         P         |
//! |         |         |         |
//! |____P____|____P____|____P____|
//! |         |         |         |
//! |         |         |         |
//! |         P         P         |
//! |         |         |         |
//! |_________|_________|_________|
//! ```
//!

use bevy::prelude::*;

pub mod fields;
pub mod integrator;
pub mod pathfinder;
pub mod portal;
pub mod sectors;
pub mod utilities;

/// Identifies a [sectors::grid::Grid] registered with the
/// [pathfinder::Pathfinder]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct GridID(u32);

impl GridID {
	/// Create a new instance of [GridID]
	pub fn new(id: u32) -> Self {
		GridID(id)
	}
	/// Get the grid id value
	pub fn get(&self) -> u32 {
		self.0
	}
}

/// Identifies a [sectors::Sector] within a [sectors::grid::Grid]. Ids are linear
/// indices assigned row by row from the top-left sector, so a sector at position
/// `(x, y)` has id `x + y * grid_width`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct SectorID(u32);

impl SectorID {
	/// Create a new instance of [SectorID]
	pub fn new(id: u32) -> Self {
		SectorID(id)
	}
	/// Get the sector id value
	pub fn get(&self) -> u32 {
		self.0
	}
}

/// Identifies a [portal::portals::Portal] within the arena of its owning
/// [sectors::grid::Grid]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct PortalID(u32);

impl PortalID {
	/// Create a new instance of [PortalID]
	pub fn new(id: u32) -> Self {
		PortalID(id)
	}
	/// Get the portal id value
	pub fn get(&self) -> u32 {
		self.0
	}
}

/// An absolute `(column, row)` tile coordinate on a grid. A tile in sector `(x, y)` at
/// local cell `(c, r)` has the absolute position
/// `(x * sector_size + c, y * sector_size + r)`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash, Reflect)]
pub struct GridTile((u32, u32));

impl GridTile {
	/// Create a new instance of [GridTile]
	pub fn new(column: u32, row: u32) -> Self {
		GridTile((column, row))
	}
	/// Get the tile `(column, row)` tuple
	pub fn get_column_row(&self) -> (u32, u32) {
		self.0
	}
	/// Get the tile column
	pub fn get_column(&self) -> u32 {
		self.0 .0
	}
	/// Get the tile row
	pub fn get_row(&self) -> u32 {
		self.0 .1
	}
	/// Represent the tile as a point on a continuous plane
	pub fn to_vec2(self) -> Vec2 {
		Vec2::new(self.0 .0 as f32, self.0 .1 as f32)
	}
	/// Straight-line distance to another tile on the continuous plane, truncated to an
	/// integer cost
	pub fn distance(&self, other: &GridTile) -> i32 {
		self.to_vec2().distance(other.to_vec2()) as i32
	}
}

/// Asks the [pathfinder::Pathfinder] for a route between two absolute tiles of a grid
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Reflect)]
pub struct PathRequest {
	/// The grid to path across
	grid_id: GridID,
	/// Absolute tile the actor is standing on
	start: GridTile,
	/// Absolute tile the actor wants to reach
	target: GridTile,
}

impl PathRequest {
	/// Create a new instance of [PathRequest]
	pub fn new(grid_id: GridID, start: GridTile, target: GridTile) -> Self {
		PathRequest {
			grid_id,
			start,
			target,
		}
	}
	/// Get the grid being pathed
	pub fn get_grid_id(&self) -> GridID {
		self.grid_id
	}
	/// Get the starting tile
	pub fn get_start(&self) -> GridTile {
		self.start
	}
	/// Get the target tile
	pub fn get_target(&self) -> GridTile {
		self.target
	}
}

/// An ordered series of absolute waypoint tiles. The first waypoint is the requested
/// start and the last is the requested target.
///
/// Note that for a target which cannot be reached the intermediate waypoints describe a
/// best-effort route towards the portal closest to the target rather than a route that
/// actually arrives at it, see
/// [pathfinder::Pathfinder::get_path]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, PartialEq, Eq, Debug, Reflect)]
pub struct Path {
	/// The grid the waypoints sit on
	grid_id: GridID,
	/// Ordered absolute tiles from start to target
	waypoints: Vec<GridTile>,
}

impl Path {
	/// Create a new instance of [Path]
	pub fn new(grid_id: GridID, waypoints: Vec<GridTile>) -> Self {
		Path { grid_id, waypoints }
	}
	/// Get the grid the waypoints sit on
	pub fn get_grid_id(&self) -> GridID {
		self.grid_id
	}
	/// Get the ordered waypoints
	pub fn get_waypoints(&self) -> &Vec<GridTile> {
		&self.waypoints
	}
}

/// Failures surfaced when a lookup against [pathfinder::Pathfinder] state cannot be
/// satisfied. Malformed field data is not represented here, it indicates a bug in field
/// construction and panics instead
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
	/// No grid has been registered under the requested id
	#[error("no grid registered with id {0:?}")]
	GridNotFound(GridID),
	/// A requested tile sits outside the boundary of the grid
	#[error("tile {0:?} lies outside the bounds of grid {1:?}")]
	TileOutOfBounds(GridTile, GridID),
}
