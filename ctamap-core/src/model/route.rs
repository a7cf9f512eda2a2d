//! Canonical route rows and the ordered table holding them

use geo::Geometry;

use super::Mode;

/// One row of the normalized table: a named route of a single mode
/// with all of its geometry merged.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRoute {
    /// Route identifier, a rail color name or a bus route number
    pub route: String,
    pub mode: Mode,
    /// Dissolved geometry for rail, source geometry for bus
    pub geometry: Geometry<f64>,
}

impl CanonicalRoute {
    pub fn new(route: impl Into<String>, mode: Mode, geometry: Geometry<f64>) -> Self {
        Self {
            route: route.into(),
            mode,
            geometry,
        }
    }
}

/// Ordered sequence of canonical routes, rail rows first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    routes: Vec<CanonicalRoute>,
}

impl RouteTable {
    pub fn new(routes: Vec<CanonicalRoute>) -> Self {
        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalRoute> {
        self.routes.iter()
    }

    pub fn routes(&self) -> &[CanonicalRoute] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<CanonicalRoute> {
        self.routes
    }

    /// Looks up the row for a route of the given mode.
    pub fn get(&self, route: &str, mode: Mode) -> Option<&CanonicalRoute> {
        self.routes
            .iter()
            .find(|row| row.mode == mode && row.route == route)
    }

    pub fn count(&self, mode: Mode) -> usize {
        self.routes.iter().filter(|row| row.mode == mode).count()
    }

    /// Route identifiers in table order.
    pub fn route_names(&self) -> Vec<&str> {
        self.routes.iter().map(|row| row.route.as_str()).collect()
    }
}

impl FromIterator<CanonicalRoute> for RouteTable {
    fn from_iter<I: IntoIterator<Item = CanonicalRoute>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a CanonicalRoute;
    type IntoIter = std::slice::Iter<'a, CanonicalRoute>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl IntoIterator for RouteTable {
    type Item = CanonicalRoute;
    type IntoIter = std::vec::IntoIter<CanonicalRoute>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}
