//! The Integrator builds the [IntegrationField]/[FlowField] pair of a sector, either
//! directly from the true target or by continuing the wavefront of a neighbouring
//! sector's field through a [Portal] so cost continuity flows backwards from the target
//! through every intermediate sector
//!

use crate::prelude::*;

/// Builds [IntegrationField]/[FlowField] pairs from a [CostField] and a target, or from
/// an adjoining sector's [IntegrationField] and the [Portal] between them. Fields are
/// handed to the caller by value, the Integrator holds no state between builds
#[derive(Default, Clone, Copy)]
pub struct Integrator;

impl Integrator {
	/// Build the field pair for the sector containing the true target. The wavefront is
	/// seeded at the `target` cell with cost `0` and cells with a straight unobstructed
	/// line to the target are flagged with line-of-sight
	pub fn build(
		&self,
		cost_field: &CostField,
		target: FieldCell,
	) -> (IntegrationField, FlowField) {
		let size = cost_field.get_size();
		let seeds = vec![(target, 0)];
		let mut integration_field = IntegrationField::new(size);
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, cost_field);
		integration_field.calculate_line_of_sight(target);
		let mut flow_field = FlowField::new(size);
		flow_field.build(&integration_field, &[target]);
		(integration_field, flow_field)
	}
	/// Build the field pair for a sector part way along a route. The wavefront is
	/// seeded along the [Portal] span with the costs carried over from the adjoining
	/// sector's field `other` so the cumulative cost-to-target continues across the
	/// boundary
	pub fn build_from_portal(
		&self,
		cost_field: &CostField,
		other: &IntegrationField,
		other_sector_id: SectorID,
		portal: &Portal,
	) -> (IntegrationField, FlowField) {
		let size = cost_field.get_size();
		let this_sector = portal.get_exit_sector(other_sector_id);
		let ordinal_to_other = portal.get_exit_ordinal(this_sector);
		let mut seeds = Vec::new();
		for cell in portal.get_exit_span(other_sector_id) {
			let mirrored = mirrored_boundary_cell(cell, ordinal_to_other, size);
			let carried = other.get_field_cell_value(mirrored);
			// a span cell the other field never reached cannot seed the wave
			if carried != INTEGRATION_UNREACHED {
				seeds.push((cell, carried + cost_field.get_field_cell_value(cell) as u16));
			}
		}
		let mut integration_field = IntegrationField::new(size);
		integration_field.reset(&seeds);
		integration_field.calculate_field(&seeds, cost_field);
		let mut flow_field = FlowField::new(size);
		flow_field.build_from_portal(&integration_field, other, other_sector_id, portal);
		(integration_field, flow_field)
	}
}

/// For a cell sitting on the boundary towards a neighbouring sector, find the adjacent
/// cell just across the boundary in the neighbour's local coordinates
fn mirrored_boundary_cell(cell: FieldCell, ordinal_to_other: Ordinal, size: usize) -> FieldCell {
	match ordinal_to_other {
		Ordinal::North => FieldCell::new(cell.get_column(), size - 1),
		Ordinal::East => FieldCell::new(0, cell.get_row()),
		Ordinal::South => FieldCell::new(cell.get_column(), 0),
		Ordinal::West => FieldCell::new(size - 1, cell.get_row()),
		_ => panic!(
			"Sector boundaries are orthogonal, cannot mirror across {:?}",
			ordinal_to_other
		),
	}
}
