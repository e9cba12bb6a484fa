//! This is a plugin for the Bevy game engine which computes paths across large tile grids
//! by combining a coarse portal-graph search with per-sector FlowFields
//!

pub mod bundle;
pub mod flowfields;
pub mod plugin;

pub mod prelude;
