//! Logic relating to answering [PathRequest]s sent by actors
//!

use std::collections::BTreeMap;

use crate::prelude::*;
use bevy::prelude::*;

/// A request for a route between two absolute tiles of a grid
#[derive(Event)]
pub struct EventPathRequest(PathRequest);

impl EventPathRequest {
	/// Create a new instance of [EventPathRequest]
	pub fn new(grid_id: GridID, start: GridTile, target: GridTile) -> Self {
		EventPathRequest(PathRequest::new(grid_id, start, target))
	}
	/// Get the wrapped request
	pub fn get_request(&self) -> &PathRequest {
		&self.0
	}
}

/// Emitted once a requested route has been computed, carrying the request it answers
#[derive(Event)]
pub struct EventPathComputed {
	/// The request the route answers
	request: PathRequest,
	/// The computed waypoints
	path: Path,
}

impl EventPathComputed {
	/// Create a new instance of [EventPathComputed]
	pub fn new(request: PathRequest, path: Path) -> Self {
		EventPathComputed { request, path }
	}
	/// Get the request the route answers
	pub fn get_request(&self) -> &PathRequest {
		&self.request
	}
	/// Get the computed waypoints
	pub fn get_path(&self) -> &Path {
		&self.path
	}
}

/// Computed routes kept so multiple actors asking for the same journey share one
/// computation. Cleared by the application whenever grid costs change
#[derive(Component, Default)]
pub struct PathCache(BTreeMap<PathRequest, Path>);

impl PathCache {
	/// Get the map of computed routes
	pub fn get(&self) -> &BTreeMap<PathRequest, Path> {
		&self.0
	}
	/// Get a computed route, [None] if the request hasn't been answered yet
	pub fn get_path(&self, request: &PathRequest) -> Option<&Path> {
		self.0.get(request)
	}
	/// Store a computed route
	pub fn insert(&mut self, request: PathRequest, path: Path) {
		self.0.insert(request, path);
	}
	/// Drop all computed routes, used when costs have changed and routes may no longer
	/// be walkable
	pub fn clear(&mut self) {
		self.0.clear();
	}
}

/// Answer any queued [EventPathRequest] against the [Pathfinder] and publish each
/// result as an [EventPathComputed]
pub fn process_path_requests(
	mut events: EventReader<EventPathRequest>,
	mut cache_q: Query<(&Pathfinder, &mut PathCache)>,
	mut event_computed: EventWriter<EventPathComputed>,
) {
	for event in events.read() {
		for (pathfinder, mut cache) in cache_q.iter_mut() {
			let request = event.get_request();
			// serve repeats straight from the cache
			if let Some(path) = cache.get_path(request) {
				trace!("Path cache hit for {:?}", request);
				event_computed.send(EventPathComputed::new(*request, path.clone()));
				continue;
			}
			match pathfinder.get_path(request) {
				Ok(path) => {
					cache.insert(*request, path.clone());
					event_computed.send(EventPathComputed::new(*request, path));
				}
				Err(error) => {
					error!("Failed finding a path for {:?}: {}", request, error);
				}
			}
		}
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn cache_round_trip() {
		let mut cache = PathCache::default();
		let request = PathRequest::new(GridID::new(0), GridTile::new(0, 0), GridTile::new(5, 5));
		assert!(cache.get_path(&request).is_none());
		let path = Path::new(
			GridID::new(0),
			vec![GridTile::new(0, 0), GridTile::new(5, 5)],
		);
		cache.insert(request, path.clone());
		assert_eq!(Some(&path), cache.get_path(&request));
		assert_eq!(1, cache.get().len());
		cache.clear();
		assert!(cache.get_path(&request).is_none());
	}
}
