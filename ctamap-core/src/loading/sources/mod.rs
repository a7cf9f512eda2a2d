//! Reading raw rail and bus records from `GeoJSON` feature collections

mod parser;
mod raw_types;

pub use parser::{
    bus_routes_from_collection, rail_segments_from_collection, read_bus_routes,
    read_feature_collection, read_rail_segments,
};
pub use raw_types::{RawBusRoute, RawRailSegment};
