//! Data model of the normalized route table
//!
//! Contains the transit mode and the canonical route row shared by rail and bus.

pub mod mode;
pub mod route;

pub use mode::Mode;
pub use route::{CanonicalRoute, RouteTable};
