use std::fs;
use std::path::Path;

use geojson::{FeatureCollection, GeoJson};

use super::raw_types::{RawBusRoute, RawRailSegment};
use crate::Error;

/// Reads a `GeoJSON` file that must hold a `FeatureCollection`
///
/// # Errors
///
/// `SourceNotFound` if the file cannot be read, `SchemaError` if it is
/// not a valid feature collection
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let geojson = text.parse::<GeoJson>().map_err(|e| {
        Error::SchemaError(format!("'{}' is not valid GeoJSON: {e}", path.display()))
    })?;

    FeatureCollection::try_from(geojson).map_err(|e| {
        Error::SchemaError(format!(
            "'{}' is not a FeatureCollection: {e}",
            path.display()
        ))
    })
}

pub fn read_rail_segments(path: &Path) -> Result<Vec<RawRailSegment>, Error> {
    let collection = read_feature_collection(path)?;
    rail_segments_from_collection(&collection)
}

pub fn read_bus_routes(path: &Path, route_field: &str) -> Result<Vec<RawBusRoute>, Error> {
    let collection = read_feature_collection(path)?;
    bus_routes_from_collection(&collection, route_field)
}

/// Converts every feature of the collection, failing on the first record
/// that lacks a required attribute.
pub fn rail_segments_from_collection(
    collection: &FeatureCollection,
) -> Result<Vec<RawRailSegment>, Error> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(idx, feature)| RawRailSegment::from_feature(feature, idx))
        .collect()
}

pub fn bus_routes_from_collection(
    collection: &FeatureCollection,
    route_field: &str,
) -> Result<Vec<RawBusRoute>, Error> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(idx, feature)| RawBusRoute::from_feature(feature, idx, route_field))
        .collect()
}
