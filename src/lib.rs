use pyo3::prelude::*;
use pyo3_stub_gen::define_stub_info_gatherer;

use filter::py_filter_routes;
use model::{PyRouteTable, py_load_routes};

pub mod filter;
pub mod model;

/// A Python module implemented in Rust.
#[pymodule]
fn ctamap(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyRouteTable>()?;
    m.add_function(wrap_pyfunction!(py_load_routes, m)?)?;
    m.add_function(wrap_pyfunction!(py_filter_routes, m)?)?;
    Ok(())
}

define_stub_info_gatherer!(stub_info);
