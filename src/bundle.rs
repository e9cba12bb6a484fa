//! Convenience [Bundle] for spawning an entity with everything the navigation systems
//! need to answer path requests
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Groups a [Pathfinder] with the [PathCache] its computed routes are published into.
/// Spawn one of these and register grids on the [Pathfinder] to start serving
/// [EventPathRequest]s
#[derive(Bundle, Default)]
pub struct PortalNavBundle {
	/// Owns the grids and computes routes over them
	pathfinder: Pathfinder,
	/// Computed routes shared between actors
	path_cache: PathCache,
}

impl PortalNavBundle {
	/// Create a new instance of [PortalNavBundle] with no grids registered
	pub fn new() -> Self {
		PortalNavBundle::default()
	}
	/// Create a new instance of [PortalNavBundle] serving a single grid
	pub fn with_grid(grid: Grid) -> Self {
		let mut pathfinder = Pathfinder::new();
		pathfinder.add_grid(grid);
		PortalNavBundle {
			pathfinder,
			path_cache: PathCache::default(),
		}
	}
}
