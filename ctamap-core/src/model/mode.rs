use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Transit category of a route.
///
/// Rail is labelled `"L"` wherever the mode is shown or parsed as text,
/// bus is labelled `"Bus"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "L", alias = "Rail")]
    Rail,
    #[serde(rename = "Bus")]
    Bus,
}

impl Mode {
    /// Both modes in the order the map page offers them.
    pub const ALL: [Mode; 2] = [Mode::Bus, Mode::Rail];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Rail => "L",
            Mode::Bus => "Bus",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("l") || label.eq_ignore_ascii_case("rail") {
            Ok(Mode::Rail)
        } else if label.eq_ignore_ascii_case("bus") {
            Ok(Mode::Bus)
        } else {
            Err(Error::InvalidMode(format!(
                "unknown mode '{label}', expected \"L\" or \"Bus\""
            )))
        }
    }
}
