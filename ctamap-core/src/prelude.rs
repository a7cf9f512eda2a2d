pub use crate::Error;

// Pipeline entry points
pub use crate::filter::{ModeSet, collect_modes, filter_routes, parse_modes};
pub use crate::loading::{RouteSourcesConfig, load_route_table};
pub use crate::normalize::{RAIL_LINES, normalize};

// Core types of the route table
pub use crate::model::{CanonicalRoute, Mode, RouteTable};
pub use crate::loading::sources::{RawBusRoute, RawRailSegment};
