use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use acre_walk::prelude::*;

/// Square grid with 4-connectivity, a cheap stand-in for the hex mesh.
fn grid_lookup(side: u32) -> SharedLookup {
    let n = side * side;
    let acres = (0..n)
        .map(|i| {
            let (x, y) = (i % side, i / side);
            let mut neighbors = Vec::new();
            if x > 0 {
                neighbors.push(AcreId::new(i - 1));
            }
            if x + 1 < side {
                neighbors.push(AcreId::new(i + 1));
            }
            if y > 0 {
                neighbors.push(AcreId::new(i - side));
            }
            if y + 1 < side {
                neighbors.push(AcreId::new(i + side));
            }
            Acre::new(AcreId::new(i), &neighbors, (x as f32) - (y as f32))
        })
        .collect();
    ArrayLookup::shared(acres)
}

fn grow_everything(lookup: SharedLookup, seed: AcreId) -> usize {
    let mut builder = AcreSetBuilder::new(lookup, [seed]);
    while builder.has_next() {
        builder.next().unwrap();
        let neighbors = builder.neighbors().unwrap();
        for neighbor in &neighbors {
            builder.push(neighbor).unwrap();
        }
    }
    builder.done().len()
}

fn trace_downhill(lookup: SharedLookup, seed: AcreId) -> usize {
    let seed_acre = *lookup.acre(seed);
    let bounds = AllAcresSet::new(lookup);
    let mut trace = BoundaryAcreSetBuilder::new(
        &seed_acre,
        &bounds,
        StandardOrdering::LowestFirst,
        StandardPredicate::StrictlyLower,
    )
    .unwrap();
    while trace.has_next() {
        let acre = trace.next().unwrap();
        trace.push(&acre).unwrap();
    }
    trace.done().len()
}

fn bench_wavefront(c: &mut Criterion) {
    let mut group = c.benchmark_group("wavefront");

    for &side in &[32u32, 64u32] {
        let lookup = grid_lookup(side);
        let seed = AcreId::new(side * side / 2);

        group.bench_with_input(BenchmarkId::new("grow_full_grid", side), &side, |b, _| {
            b.iter(|| {
                let size = grow_everything(lookup.clone(), seed);
                black_box(size);
            });
        });

        group.bench_with_input(
            BenchmarkId::new("boundary_downhill", side),
            &side,
            |b, _| {
                b.iter(|| {
                    let size = trace_downhill(lookup.clone(), seed);
                    black_box(size);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_wavefront);
criterion_main!(benches);
