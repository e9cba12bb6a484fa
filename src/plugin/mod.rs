//! Defines the Bevy [Plugin] for portal navigation
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod path_layer;

/// Registers the reflected navigation types and the systems answering path requests.
/// Spawn a [crate::bundle::PortalNavBundle] on an entity to hold the pathfinding state
/// the systems run against
pub struct PortalNavPlugin;

impl Plugin for PortalNavPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.register_type::<Ordinal>()
			.register_type::<GridID>()
			.register_type::<SectorID>()
			.register_type::<PortalID>()
			.register_type::<FieldCell>()
			.register_type::<GridTile>()
			.register_type::<PathRequest>()
			.register_type::<Path>()
			.add_event::<path_layer::EventPathRequest>()
			.add_event::<path_layer::EventPathComputed>()
			.add_systems(Update, path_layer::process_path_requests);
	}
}
