//! Rail and bus normalization into canonical routes
//!
//! Rail segments are classified by color line, fanned out per matched line
//! and dissolved into one geometry per line. Bus routes pass through.

mod classify;
mod dissolve;
mod normalizer;

pub use classify::{RAIL_LINES, classify_lines};
pub use dissolve::dissolve;
pub use normalizer::normalize;
