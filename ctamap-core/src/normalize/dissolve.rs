use geo::{Coord, Geometry, LineString, MultiLineString};
use hashbrown::HashSet;

/// Exact, direction-independent identity of a line part
type PartKey = Vec<(u64, u64)>;

/// Dissolves path geometries into a single `MultiLineString`.
///
/// Parts are kept in encounter order. Parts with fewer than two
/// coordinates are dropped and a part already present, in either
/// direction, is not added again, so dissolving a dissolved geometry
/// returns it unchanged.
pub fn dissolve<'a, I>(geometries: I) -> MultiLineString<f64>
where
    I: IntoIterator<Item = &'a Geometry<f64>>,
{
    let mut seen: HashSet<PartKey> = HashSet::new();
    let mut parts = Vec::new();

    for geometry in geometries {
        for part in line_parts(geometry) {
            if part.0.len() < 2 {
                continue;
            }
            if seen.insert(part_key(part)) {
                parts.push(part.clone());
            }
        }
    }

    MultiLineString::new(parts)
}

/// Line parts of a path geometry, other kinds contribute none.
fn line_parts(geometry: &Geometry<f64>) -> Vec<&LineString<f64>> {
    match geometry {
        Geometry::LineString(line) => vec![line],
        Geometry::MultiLineString(multi) => multi.0.iter().collect(),
        Geometry::GeometryCollection(collection) => {
            collection.0.iter().flat_map(line_parts).collect()
        }
        _ => Vec::new(),
    }
}

fn part_key(line: &LineString<f64>) -> PartKey {
    let forward: PartKey = line.0.iter().map(coord_bits).collect();
    let mut backward = forward.clone();
    backward.reverse();
    forward.min(backward)
}

fn coord_bits(coord: &Coord<f64>) -> (u64, u64) {
    // -0.0 and 0.0 are the same position
    ((coord.x + 0.0).to_bits(), (coord.y + 0.0).to_bits())
}
