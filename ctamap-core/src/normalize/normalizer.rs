use std::collections::BTreeMap;

use geo::Geometry;
use itertools::Itertools;
use log::{debug, info};

use super::{classify_lines, dissolve};
use crate::loading::sources::{RawBusRoute, RawRailSegment};
use crate::model::{CanonicalRoute, Mode, RouteTable};

/// Reconciles rail segments and bus routes into one route table.
///
/// Every rail segment is attributed to each color line named in its
/// `lines` text and segments naming no known line are left out. All
/// geometries of a line are dissolved into one row. Rail rows come first,
/// ordered by line name, followed by bus rows in source order.
pub fn normalize(rail: &[RawRailSegment], bus: &[RawBusRoute]) -> RouteTable {
    let mut line_geometries: BTreeMap<&'static str, Vec<&Geometry<f64>>> = BTreeMap::new();
    let mut unmatched = 0usize;

    for segment in rail {
        let lines = classify_lines(&segment.lines);
        if lines.is_empty() {
            unmatched += 1;
            continue;
        }
        for line in lines {
            line_geometries
                .entry(line)
                .or_default()
                .push(&segment.geometry);
        }
    }

    if unmatched > 0 {
        debug!("{unmatched} rail segments name no known line and were skipped");
    }
    info!(
        "Rail lines found: {}",
        line_geometries.keys().join(", ")
    );

    let rail_routes = line_geometries.into_iter().map(|(line, geometries)| {
        debug!("Dissolving {} segments of the {line} line", geometries.len());
        CanonicalRoute::new(
            line,
            Mode::Rail,
            Geometry::MultiLineString(dissolve(geometries)),
        )
    });

    let bus_routes = bus
        .iter()
        .map(|route| CanonicalRoute::new(route.route.clone(), Mode::Bus, route.geometry.clone()));

    rail_routes.chain(bus_routes).collect()
}

#[cfg(test)]
mod tests {
    use geo::{LineString, MultiLineString, line_string};

    use super::*;

    fn segment(lines: &str, line: LineString<f64>) -> RawRailSegment {
        RawRailSegment::new(lines, Geometry::LineString(line))
    }

    fn loop_track() -> LineString<f64> {
        line_string![(x: -87.6313, y: 41.8855), (x: -87.6282, y: 41.8857)]
    }

    fn north_main() -> LineString<f64> {
        line_string![(x: -87.6535, y: 41.9398), (x: -87.6528, y: 41.9474)]
    }

    #[test]
    fn shared_segment_fans_out_to_each_line() {
        let table = normalize(&[segment("Red, Purple", loop_track())], &[]);

        assert_eq!(table.route_names(), vec!["Purple", "Red"]);
        for row in &table {
            assert_eq!(row.mode, Mode::Rail);
            assert_eq!(
                row.geometry,
                Geometry::MultiLineString(MultiLineString::new(vec![loop_track()]))
            );
        }
    }

    #[test]
    fn segments_of_one_line_merge_into_one_row() {
        let table = normalize(
            &[segment("Brown", loop_track()), segment("Brown", north_main())],
            &[],
        );

        assert_eq!(table.len(), 1);
        let brown = table.get("Brown", Mode::Rail).unwrap();
        assert_eq!(
            brown.geometry,
            Geometry::MultiLineString(MultiLineString::new(vec![loop_track(), north_main()]))
        );
    }

    #[test]
    fn bus_route_passes_through_unchanged() {
        let geometry = Geometry::LineString(north_main());
        let table = normalize(&[], &[RawBusRoute::new("22", geometry.clone())]);

        assert_eq!(table.len(), 1);
        let row = &table.routes()[0];
        assert_eq!(row.route, "22");
        assert_eq!(row.mode, Mode::Bus);
        assert_eq!(row.geometry, geometry);
    }

    #[test]
    fn unmatched_segment_contributes_nothing() {
        let table = normalize(&[segment("Shuttle", loop_track())], &[]);
        assert!(table.is_empty());

        let table = normalize(
            &[segment("Shuttle", loop_track()), segment("Blue", north_main())],
            &[],
        );
        let blue = table.get("Blue", Mode::Rail).unwrap();
        assert_eq!(
            blue.geometry,
            Geometry::MultiLineString(MultiLineString::new(vec![north_main()]))
        );
    }

    #[test]
    fn rail_rows_precede_bus_rows() {
        let bus = [
            RawBusRoute::new("X9", Geometry::LineString(loop_track())),
            RawBusRoute::new("3", Geometry::LineString(north_main())),
        ];
        let rail = [
            segment("Yellow", loop_track()),
            segment("Green, Pink", north_main()),
        ];
        let table = normalize(&rail, &bus);

        assert_eq!(table.route_names(), vec!["Green", "Pink", "Yellow", "X9", "3"]);
        assert_eq!(table.count(Mode::Rail), 3);
        assert_eq!(table.count(Mode::Bus), 2);
    }

    #[test]
    fn one_row_per_line_regardless_of_label_case() {
        let table = normalize(
            &[segment("ORANGE", loop_track()), segment("orange", north_main())],
            &[],
        );
        assert_eq!(table.route_names(), vec!["Orange"]);
    }

    #[test]
    fn normalizing_is_deterministic() {
        let rail = [
            segment("Red, Purple", loop_track()),
            segment("Brown, Purple", north_main()),
        ];
        let bus = [RawBusRoute::new("22", Geometry::LineString(loop_track()))];
        assert_eq!(normalize(&rail, &bus), normalize(&rail, &bus));
    }
}
