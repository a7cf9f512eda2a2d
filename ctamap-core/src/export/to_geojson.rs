use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{CanonicalRoute, Error, RouteTable};

impl CanonicalRoute {
    /// Feature with `route` and `mode` properties, mode as `"L"` or `"Bus"`.
    pub fn to_feature(&self) -> Result<Feature, Error> {
        let geometry = Geometry::new(GeoJsonValue::from(&self.geometry));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "route": self.route,
                "mode": self.mode.label(),
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

impl RouteTable {
    /// Converts the table to a `GeoJSON` `FeatureCollection`, one feature per row.
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let features = self
            .iter()
            .map(CanonicalRoute::to_feature)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
