use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ctamap_core::prelude::*;
use geo::{Coord, Geometry, LineString};

const LABELS: [&str; 6] = [
    "Red, Purple",
    "Brown",
    "Green, Pink",
    "Blue",
    "Orange, Brown, Pink, Purple, Green",
    "Shuttle",
];

fn synthetic_rail(segments: usize) -> Vec<RawRailSegment> {
    (0..segments)
        .map(|i| {
            let x = -87.9 + i as f64 * 1e-4;
            let line = LineString::new(vec![
                Coord { x, y: 41.8 },
                Coord { x: x + 1e-4, y: 41.8001 },
                Coord { x: x + 2e-4, y: 41.8002 },
            ]);
            RawRailSegment::new(LABELS[i % LABELS.len()], Geometry::LineString(line))
        })
        .collect()
}

fn synthetic_bus(routes: usize) -> Vec<RawBusRoute> {
    (0..routes)
        .map(|i| {
            let y = 41.6 + i as f64 * 1e-3;
            let line = LineString::new(vec![Coord { x: -87.7, y }, Coord { x: -87.6, y }]);
            RawBusRoute::new(i.to_string(), Geometry::LineString(line))
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let rail = synthetic_rail(2_000);
    let bus = synthetic_bus(130);

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&rail), black_box(&bus)));
    });

    let table = normalize(&rail, &bus);
    let bus_only = parse_modes("Bus").unwrap();
    c.bench_function("filter_routes", |b| {
        b.iter(|| filter_routes(black_box(&table), black_box(&bus_only)));
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
