use ctamap_core::prelude::*;

use pyo3::exceptions::{PyFileNotFoundError, PyValueError};
use pyo3::prelude::*;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};
use wkt::ToWkt;

/// RouteTable
///
/// Normalized CTA routes, one row per (route, mode). Rail rows hold the
/// dissolved geometry of every segment of a color line and come first,
/// bus rows follow in source order.
///
/// Example:
///
/// .. code-block:: python
///
///     table = load_routes("rail.geojson", "bus.geojson")
///     gdf = geopandas.read_file(io.StringIO(table.to_geojson()))
#[gen_stub_pyclass]
#[pyclass(name = "RouteTable")]
pub struct PyRouteTable {
    pub(crate) table: RouteTable,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyRouteTable {
    /// (route, mode) pairs in table order, mode is "L" or "Bus"
    pub fn routes(&self) -> Vec<(String, String)> {
        self.table
            .iter()
            .map(|row| (row.route.clone(), row.mode.to_string()))
            .collect()
    }

    pub fn count(&self, mode: &str) -> PyResult<usize> {
        let mode = mode.parse::<Mode>().map_err(to_py_err)?;
        Ok(self.table.count(mode))
    }

    /// GeoJSON FeatureCollection with `route` and `mode` properties
    pub fn to_geojson(&self) -> PyResult<String> {
        self.table.to_geojson_string().map_err(to_py_err)
    }

    /// (route, mode, wkt) rows, ready for `geopandas.GeoSeries.from_wkt`
    pub fn to_wkt_rows(&self) -> Vec<(String, String, String)> {
        self.table
            .iter()
            .map(|row| {
                (
                    row.route.clone(),
                    row.mode.to_string(),
                    row.geometry.wkt_string(),
                )
            })
            .collect()
    }

    fn __len__(&self) -> usize {
        self.table.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "RouteTable with {} rail lines and {} bus routes",
            self.table.count(Mode::Rail),
            self.table.count(Mode::Bus)
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Load and normalize the CTA rail and bus route files
///
/// Rail segments are attributed to every color line named in their
/// ``lines`` property, segments naming no known line are skipped, and the
/// segments of each line are dissolved into one geometry. Bus routes are
/// kept one row per feature.
///
/// Parameters
/// ----------
/// rail_path : str
///     Path to the GeoJSON rail lines file
/// bus_path : str
///     Path to the GeoJSON bus routes file
/// bus_route_field : str, default="route"
///     Property holding the bus route identifier
///
/// Returns
/// -------
/// RouteTable
///
/// Raises
/// ------
/// FileNotFoundError
///     If either file cannot be read
/// ValueError
///     If a record lacks a required attribute
#[gen_stub_pyfunction]
#[pyfunction(name = "load_routes")]
#[pyo3(signature = (rail_path, bus_path, bus_route_field = "route"))]
pub fn py_load_routes(
    rail_path: &str,
    bus_path: &str,
    bus_route_field: &str,
) -> PyResult<PyRouteTable> {
    let config = RouteSourcesConfig::new(rail_path, bus_path).with_bus_route_field(bus_route_field);

    load_route_table(&config)
        .map(|table| PyRouteTable { table })
        .map_err(to_py_err)
}

pub(crate) fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::SourceNotFound { .. } => PyFileNotFoundError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}
