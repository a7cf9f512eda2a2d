//! Normalization of CTA rail and bus geometries into a single route table.
//!
//! Rail segments carry free-text color-line labels and are fanned out and
//! dissolved per line; bus routes pass through one row per route. The
//! resulting [`RouteTable`] is filtered by [`Mode`] for display.

pub mod error;
pub mod export;
pub mod filter;
pub mod loading;
pub mod model;
pub mod normalize;
pub mod prelude;

pub use error::Error;
pub use filter::{ModeSet, collect_modes, filter_routes, parse_modes};
pub use loading::{RouteSourcesConfig, load_route_table};
pub use model::{CanonicalRoute, Mode, RouteTable};
pub use normalize::{RAIL_LINES, normalize};
