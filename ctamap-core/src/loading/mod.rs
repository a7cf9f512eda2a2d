//! This module is responsible for reading the rail and bus geometry files
//! and handing them to the normalizer.

mod builder;
mod config;
pub mod sources;

pub use builder::load_route_table;
pub use config::{DEFAULT_BUS_ROUTE_FIELD, RouteSourcesConfig};
