//! A Portal indicates a pathable window from one [Sector] to a neighbour. Each side of
//! a sector can have multiple portals if the boundary is 'split' by impassable
//! [CostField] values. For example the boundary between these two sectors supports two
//! portals with the `x` marking impassable cells, each portal spanning a run of
//! pathable cells with a representative centre cell labelled `P`:
//!
//! ```text
//!  _____________________
//! |          |          |
//! |          P          |
//! |         x|          |
//! |         x|          |
//! |          P          |
//! |__________|__________|
//! ```
//!
//! A portal records both of the sectors it joins and, for each side, the run of
//! boundary cells it spans in that sector's local coordinates. The high-level A* moves
//! between portal centres, and field construction seeds wavefronts across the full
//! span so cost continuity is preserved through the boundary
//!

use crate::prelude::*;
use bevy::prelude::*;

/// The axis of the boundary a [Portal] sits across
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Reflect)]
pub enum PortalDirection {
	/// The portal joins a western sector (side 0) to an eastern sector (side 1)
	EastWest,
	/// The portal joins a northern sector (side 0) to a southern sector (side 1)
	NorthSouth,
}

/// A pathable window along the boundary of two neighbouring sectors. Portals are the
/// only cross-sector edges of the search graph and are stored in an arena owned by the
/// [Grid], referenced by [PortalID] to avoid ownership cycles between the two sectors
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, Reflect)]
pub struct Portal {
	/// Stable id of the portal within its grid
	id: PortalID,
	/// Which axis the portal boundary sits across
	direction: PortalDirection,
	/// The western or northern sector of the boundary
	sector_0: SectorID,
	/// The eastern or southern sector of the boundary
	sector_1: SectorID,
	/// First and last boundary cell of the span in `sector_0` local coordinates
	span_0: (FieldCell, FieldCell),
	/// First and last boundary cell of the span in `sector_1` local coordinates
	span_1: (FieldCell, FieldCell),
	/// Representative centre cell of the span on the `sector_0` side
	center_0: FieldCell,
	/// Representative centre cell of the span on the `sector_1` side
	center_1: FieldCell,
	/// Portals reachable within `sector_0` without crossing a third sector
	exits_0: Vec<PortalID>,
	/// Portals reachable within `sector_1` without crossing a third sector
	exits_1: Vec<PortalID>,
}

impl Portal {
	/// Create a new instance of [Portal] across the boundary of two sectors. The span
	/// is the inclusive `start..=end` run of pathable boundary cell indices - rows for
	/// an [PortalDirection::EastWest] portal, columns for a
	/// [PortalDirection::NorthSouth] one
	pub fn new(
		id: PortalID,
		direction: PortalDirection,
		sector_0: SectorID,
		sector_1: SectorID,
		span_start: usize,
		span_end: usize,
		sector_size: usize,
	) -> Self {
		let midpoint = (span_start + span_end) / 2;
		match direction {
			PortalDirection::EastWest => Portal {
				id,
				direction,
				sector_0,
				sector_1,
				span_0: (
					FieldCell::new(sector_size - 1, span_start),
					FieldCell::new(sector_size - 1, span_end),
				),
				span_1: (FieldCell::new(0, span_start), FieldCell::new(0, span_end)),
				center_0: FieldCell::new(sector_size - 1, midpoint),
				center_1: FieldCell::new(0, midpoint),
				exits_0: Vec::new(),
				exits_1: Vec::new(),
			},
			PortalDirection::NorthSouth => Portal {
				id,
				direction,
				sector_0,
				sector_1,
				span_0: (
					FieldCell::new(span_start, sector_size - 1),
					FieldCell::new(span_end, sector_size - 1),
				),
				span_1: (FieldCell::new(span_start, 0), FieldCell::new(span_end, 0)),
				center_0: FieldCell::new(midpoint, sector_size - 1),
				center_1: FieldCell::new(midpoint, 0),
				exits_0: Vec::new(),
				exits_1: Vec::new(),
			},
		}
	}
	/// Get the portal id
	pub fn get_id(&self) -> PortalID {
		self.id
	}
	/// Get the boundary axis of the portal
	pub fn get_direction(&self) -> PortalDirection {
		self.direction
	}
	/// Get the `(side 0, side 1)` sectors the portal joins
	pub fn get_sectors(&self) -> (SectorID, SectorID) {
		(self.sector_0, self.sector_1)
	}
	/// The sector an actor crossing the portal from `entry_sector` arrives in.
	///
	/// Note that this is not validated against the portal's two sides - any entry
	/// sector which isn't side 1 resolves to side 1. Best-effort routes rely on this
	/// when chaining fields over a portal sequence that never reached the target sector
	pub fn get_exit_sector(&self, entry_sector: SectorID) -> SectorID {
		if entry_sector == self.sector_1 {
			self.sector_0
		} else {
			self.sector_1
		}
	}
	/// The representative centre cell of the span on the side of `sector_id`, in that
	/// sector's local coordinates
	pub fn get_center(&self, sector_id: SectorID) -> FieldCell {
		if sector_id == self.sector_1 {
			self.center_1
		} else {
			self.center_0
		}
	}
	/// Centre cell of the span on the side being entered from, local to `entry_sector`
	pub fn get_entry_center(&self, entry_sector: SectorID) -> FieldCell {
		self.get_center(entry_sector)
	}
	/// Centre cell of the span on the side being exited to, local to the exit sector
	pub fn get_exit_center(&self, entry_sector: SectorID) -> FieldCell {
		self.get_center(self.get_exit_sector(entry_sector))
	}
	/// Enumerate the boundary cells of the span on the side of `sector_id`, in that
	/// sector's local coordinates
	pub fn get_span(&self, sector_id: SectorID) -> Vec<FieldCell> {
		let (first, last) = if sector_id == self.sector_1 {
			self.span_1
		} else {
			self.span_0
		};
		let mut cells = Vec::new();
		match self.direction {
			PortalDirection::EastWest => {
				for row in first.get_row()..=last.get_row() {
					cells.push(FieldCell::new(first.get_column(), row));
				}
			}
			PortalDirection::NorthSouth => {
				for column in first.get_column()..=last.get_column() {
					cells.push(FieldCell::new(column, first.get_row()));
				}
			}
		}
		cells
	}
	/// Enumerate the span cells on the side being exited to, local to the exit sector
	pub fn get_exit_span(&self, entry_sector: SectorID) -> Vec<FieldCell> {
		self.get_span(self.get_exit_sector(entry_sector))
	}
	/// The portals reachable after crossing this portal from `entry_sector`, i.e the
	/// exits of the sector on the far side
	pub fn get_exits(&self, entry_sector: SectorID) -> &Vec<PortalID> {
		if entry_sector == self.sector_1 {
			&self.exits_0
		} else {
			&self.exits_1
		}
	}
	/// Record a portal as reachable from this one within `side_sector`
	pub fn add_exit(&mut self, side_sector: SectorID, portal: PortalID) {
		if side_sector == self.sector_1 {
			self.exits_1.push(portal);
		} else {
			self.exits_0.push(portal);
		}
	}
	/// The [Ordinal] of travel when crossing the portal from `entry_sector`
	pub fn get_exit_ordinal(&self, entry_sector: SectorID) -> Ordinal {
		match self.direction {
			PortalDirection::EastWest => {
				if entry_sector == self.sector_1 {
					Ordinal::West
				} else {
					Ordinal::East
				}
			}
			PortalDirection::NorthSouth => {
				if entry_sector == self.sector_1 {
					Ordinal::North
				} else {
					Ordinal::South
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
	fn east_west_centres() {
		let portal = Portal::new(
			PortalID::new(0),
			PortalDirection::EastWest,
			SectorID::new(0),
			SectorID::new(1),
			0,
			9,
			10,
		);
		assert_eq!(FieldCell::new(9, 4), portal.get_center(SectorID::new(0)));
		assert_eq!(FieldCell::new(0, 4), portal.get_center(SectorID::new(1)));
	}
	#[test]
	fn north_south_spans() {
		let portal = Portal::new(
			PortalID::new(3),
			PortalDirection::NorthSouth,
			SectorID::new(0),
			SectorID::new(2),
			6,
			8,
			10,
		);
		let span = portal.get_span(SectorID::new(0));
		assert_eq!(
			vec![
				FieldCell::new(6, 9),
				FieldCell::new(7, 9),
				FieldCell::new(8, 9)
			],
			span
		);
		let span = portal.get_span(SectorID::new(2));
		assert_eq!(
			vec![
				FieldCell::new(6, 0),
				FieldCell::new(7, 0),
				FieldCell::new(8, 0)
			],
			span
		);
	}
	#[test]
	fn exit_sides() {
		let portal = Portal::new(
			PortalID::new(7),
			PortalDirection::EastWest,
			SectorID::new(4),
			SectorID::new(5),
			2,
			4,
			10,
		);
		assert_eq!(SectorID::new(5), portal.get_exit_sector(SectorID::new(4)));
		assert_eq!(SectorID::new(4), portal.get_exit_sector(SectorID::new(5)));
		assert_eq!(Ordinal::East, portal.get_exit_ordinal(SectorID::new(4)));
		assert_eq!(Ordinal::West, portal.get_exit_ordinal(SectorID::new(5)));
		// the exit centre sits in the exit sector's local frame
		assert_eq!(
			FieldCell::new(0, 3),
			portal.get_exit_center(SectorID::new(4))
		);
		assert_eq!(
			FieldCell::new(9, 3),
			portal.get_entry_center(SectorID::new(4))
		);
	}
	#[test]
	fn exits_per_side() {
		let mut portal = Portal::new(
			PortalID::new(1),
			PortalDirection::NorthSouth,
			SectorID::new(0),
			SectorID::new(3),
			0,
			9,
			10,
		);
		portal.add_exit(SectorID::new(3), PortalID::new(8));
		// entering from the northern side exposes the southern sector's exits
		assert_eq!(&vec![PortalID::new(8)], portal.get_exits(SectorID::new(0)));
		assert!(portal.get_exits(SectorID::new(3)).is_empty());
	}
}
