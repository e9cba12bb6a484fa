//! Measure discovering and connecting the portals of a large grid
//!
//! World is 100 sectors by 100 sectors
//!

use bevy_portal_nav_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Discover every portal of a fresh grid
fn init(mut grid: Grid) {
	grid.build_portals();
	assert!(!grid.get_portals().is_empty());
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("initialisation");
	group.significance_level(0.05).sample_size(100);
	let grid = Grid::new(GridID::new(0), 100, 100, 10);
	group.bench_function("init_portals", |b| b.iter(|| init(black_box(grid.clone()))));
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
