use ctamap_core::prelude::*;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::model::{PyRouteTable, to_py_err};

/// Keep only the routes of the selected modes
///
/// Parameters
/// ----------
/// table : RouteTable
///     Table returned by ``load_routes``
/// modes : list[str]
///     Selected modes, any of "L" and "Bus". An empty list selects nothing.
///
/// Returns
/// -------
/// RouteTable
///     A new table, rows in their original order
///
/// Raises
/// ------
/// ValueError
///     If a mode label is not recognised
#[gen_stub_pyfunction]
#[pyfunction(name = "filter_routes")]
pub fn py_filter_routes(table: &PyRouteTable, modes: Vec<String>) -> PyResult<PyRouteTable> {
    let active_modes = collect_modes(&modes).map_err(to_py_err)?;

    Ok(PyRouteTable {
        table: filter_routes(&table.table, &active_modes),
    })
}
