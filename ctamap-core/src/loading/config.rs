use std::path::PathBuf;

use serde::Deserialize;

/// Property holding the route identifier in the CTA bus routes file
pub const DEFAULT_BUS_ROUTE_FIELD: &str = "route";

/// Locations of the two geometry files the route table is built from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteSourcesConfig {
    /// `GeoJSON` collection of rail segments with a `lines` property
    pub rail_path: PathBuf,
    /// `GeoJSON` collection of bus routes, one feature per route
    pub bus_path: PathBuf,
    #[serde(default = "default_bus_route_field")]
    pub bus_route_field: String,
}

impl RouteSourcesConfig {
    pub fn new(rail_path: impl Into<PathBuf>, bus_path: impl Into<PathBuf>) -> Self {
        Self {
            rail_path: rail_path.into(),
            bus_path: bus_path.into(),
            bus_route_field: default_bus_route_field(),
        }
    }

    #[must_use]
    pub fn with_bus_route_field(mut self, field: impl Into<String>) -> Self {
        self.bus_route_field = field.into();
        self
    }
}

fn default_bus_route_field() -> String {
    DEFAULT_BUS_ROUTE_FIELD.to_string()
}
