use geo::Geometry;
use geojson::{Feature, JsonValue};

use crate::Error;

/// Rail geometry record as published, tagged with the lines it serves
#[derive(Debug, Clone, PartialEq)]
pub struct RawRailSegment {
    /// Free text such as `"Red, Purple"`
    pub lines: String,
    pub geometry: Geometry<f64>,
}

/// Bus geometry record, already one feature per route
#[derive(Debug, Clone, PartialEq)]
pub struct RawBusRoute {
    pub route: String,
    pub geometry: Geometry<f64>,
}

impl RawRailSegment {
    pub fn new(lines: impl Into<String>, geometry: Geometry<f64>) -> Self {
        Self {
            lines: lines.into(),
            geometry,
        }
    }

    pub(super) fn from_feature(feature: &Feature, idx: usize) -> Result<Self, Error> {
        let lines = match feature.property("lines") {
            None => {
                return Err(Error::SchemaError(format!(
                    "rail feature {idx} has no 'lines' property"
                )));
            }
            // Null labels name no line and are dropped during classification
            Some(JsonValue::Null) => String::new(),
            Some(JsonValue::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };

        Ok(Self {
            lines,
            geometry: path_geometry(feature, idx, "rail")?,
        })
    }
}

impl RawBusRoute {
    pub fn new(route: impl Into<String>, geometry: Geometry<f64>) -> Self {
        Self {
            route: route.into(),
            geometry,
        }
    }

    pub(super) fn from_feature(feature: &Feature, idx: usize, route_field: &str) -> Result<Self, Error> {
        let route = feature
            .property(route_field)
            .and_then(route_text)
            .ok_or_else(|| {
                Error::SchemaError(format!(
                    "bus feature {idx} has no usable '{route_field}' property"
                ))
            })?;

        Ok(Self {
            route,
            geometry: path_geometry(feature, idx, "bus")?,
        })
    }
}

/// Plain text of a scalar route identifier, `22` and `"22"` alike.
fn route_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(text) => Some(text.clone()),
        JsonValue::Number(number) => Some(number.to_string()),
        JsonValue::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn path_geometry(feature: &Feature, idx: usize, kind: &str) -> Result<Geometry<f64>, Error> {
    let geometry = feature
        .geometry
        .clone()
        .ok_or_else(|| Error::SchemaError(format!("{kind} feature {idx} has no geometry")))?;

    let geometry = Geometry::<f64>::try_from(geometry).map_err(|e| {
        Error::SchemaError(format!("{kind} feature {idx} has invalid geometry: {e}"))
    })?;

    match geometry {
        Geometry::LineString(_) | Geometry::MultiLineString(_) => Ok(geometry),
        other => Err(Error::SchemaError(format!(
            "{kind} feature {idx} has {} geometry, expected a line path",
            geometry_kind(&other)
        ))),
    }
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
