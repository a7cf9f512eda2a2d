//! Conversion of the route table into formats the map layer consumes

mod to_geojson;
