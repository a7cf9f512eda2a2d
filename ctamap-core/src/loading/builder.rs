use log::info;

use super::config::RouteSourcesConfig;
use super::sources::{read_bus_routes, read_rail_segments};
use crate::{Error, RouteTable, normalize};

/// Builds the normalized route table from the configured rail and bus files
///
/// # Errors
///
/// Returns `SourceNotFound` when either file is missing or unreadable and
/// `SchemaError` when a record lacks a required attribute. Nothing is
/// returned for the other source in that case.
pub fn load_route_table(config: &RouteSourcesConfig) -> Result<RouteTable, Error> {
    info!(
        "Loading rail segments from {} and bus routes from {}",
        config.rail_path.display(),
        config.bus_path.display()
    );

    // Both sources are independent and read-only
    let (rail, bus) = rayon::join(
        || read_rail_segments(&config.rail_path),
        || read_bus_routes(&config.bus_path, &config.bus_route_field),
    );
    let (rail, bus) = (rail?, bus?);

    info!(
        "Read {} rail segments and {} bus routes",
        rail.len(),
        bus.len()
    );

    let table = normalize(&rail, &bus);
    info!("Route table created with {} routes", table.len());
    Ok(table)
}
