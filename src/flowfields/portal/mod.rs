//! Portals are the cross-sector edges of the coarse search graph
//!

pub mod portals;
