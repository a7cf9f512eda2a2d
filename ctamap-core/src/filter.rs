//! Mode filtering of the route table for display

use hashbrown::HashSet;

use crate::{Error, Mode, RouteTable};

/// Set of modes currently selected for display
pub type ModeSet = HashSet<Mode>;

/// Returns the rows whose mode is selected, in table order.
///
/// An empty selection shows nothing.
pub fn filter_routes(routes: &RouteTable, active_modes: &ModeSet) -> RouteTable {
    if active_modes.is_empty() {
        return RouteTable::default();
    }

    routes
        .iter()
        .filter(|row| active_modes.contains(&row.mode))
        .cloned()
        .collect()
}

/// Parses a comma separated selection such as `"Bus,L"`.
///
/// Blank items are ignored, so `""` is the empty selection.
///
/// # Errors
///
/// `InvalidMode` if an item is not a mode label
pub fn parse_modes(selection: &str) -> Result<ModeSet, Error> {
    collect_modes(selection.split(','))
}

/// Builds a selection from individual labels, skipping blank ones.
pub fn collect_modes<I, S>(labels: I) -> Result<ModeSet, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .filter(|label| !label.as_ref().trim().is_empty())
        .map(|label| label.as_ref().parse::<Mode>())
        .collect()
}
