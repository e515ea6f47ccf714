// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Size;
use understory_tile_grid::{
    Direction, Tile, TileCoordinator, TileGrid, TileStyler, compute_layout,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_span(&mut self, max: usize) -> usize {
        (self.next_u32() as usize) % max + 1
    }
}

/// Mostly unit tiles with the occasional wide or tall one, like a photo grid.
fn mixed_tiles(len: usize, cols: usize, seed: u64) -> Vec<Tile> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|_| {
            if rng.gen_span(4) == 1 {
                Tile::new(rng.gen_span(3), rng.gen_span(cols))
            } else {
                Tile::new(1, 1)
            }
        })
        .collect()
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_grid/placement");

    for &(len, cols) in &[(64_usize, 4_usize), (1_024, 4), (1_024, 12), (8_192, 12)] {
        let tiles = mixed_tiles(len, cols, 0x711E_0000_0000_0001);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("compute_layout", format!("n={len},cols={cols}")),
            &tiles,
            |b, tiles| b.iter(|| black_box(compute_layout(cols, tiles).unwrap())),
        );

        // Reuses the tracker allocation between runs.
        group.bench_with_input(
            BenchmarkId::new("coordinator_update", format!("n={len},cols={cols}")),
            &tiles,
            |b, tiles| {
                let mut coordinator = TileCoordinator::new();
                b.iter(|| {
                    black_box(coordinator.update(cols, tiles).unwrap());
                });
            },
        );
    }

    group.finish();
}

fn bench_styling(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_grid/styling");

    let cols = 6;
    let tiles = mixed_tiles(1_024, cols, 0x711E_0000_0000_0002);
    let layout = compute_layout(cols, &tiles).unwrap();
    group.throughput(Throughput::Elements(tiles.len() as u64));

    for (name, styler) in [
        ("fixed", TileStyler::fixed("96px")),
        ("ratio", TileStyler::ratio("4:3").unwrap()),
        ("fit", TileStyler::fit()),
    ] {
        let mut styler = styler;
        styler.init("2px", &layout, Direction::Ltr).unwrap();

        group.bench_function(BenchmarkId::new("tile_style", name), |b| {
            b.iter(|| {
                for (tile, pos) in tiles.iter().zip(layout.positions()) {
                    black_box(styler.tile_style(tile, pos.row, pos.col).unwrap());
                }
            });
        });
    }

    group.bench_function("resolve_fixed", |b| {
        b.iter_batched(
            || {
                let mut grid = TileGrid::new(cols);
                grid.set_row_height("96px").unwrap();
                grid
            },
            |mut grid| {
                black_box(grid.resolve(&tiles, Size::new(1_200.0, 0.0)).unwrap());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_placement, bench_styling);
criterion_main!(benches);
