//! `use bevy_portal_nav_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::flowfields::{
	fields::{cost_field::*, flow_field::*, integration_field::*, *},
	integrator::*,
	pathfinder::*,
	portal::portals::*,
	sectors::{grid::*, *},
	utilities::*,
	*,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{path_layer::*, *},
};
