use crate::model::ZoneError;
use geo::{Geometry, MultiPolygon};

/// an identified polygonal record read from a geometry source
#[derive(Clone, Debug)]
pub struct FeatureRecord {
    pub id: String,
    pub geometry: MultiPolygon<f64>,
}

impl FeatureRecord {
    /// creates a record from any geometry, promoting polygons to single-part
    /// multipolygons. non-polygonal geometries are rejected.
    pub fn try_new(id: String, geometry: Geometry<f64>) -> Result<FeatureRecord, ZoneError> {
        let geometry = match geometry {
            Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p])),
            Geometry::MultiPolygon(mp) => Ok(mp),
            Geometry::Rect(r) => Ok(MultiPolygon::new(vec![r.to_polygon()])),
            Geometry::Triangle(t) => Ok(MultiPolygon::new(vec![t.to_polygon()])),
            other => Err(ZoneError::InvalidGeometry(
                id.clone(),
                format!("unexpected {} geometry, must be polygonal", geometry_type(&other)),
            )),
        }?;
        Ok(FeatureRecord { id, geometry })
    }
}

fn geometry_type(geometry: &Geometry<f64>) -> &'static str {
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

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{point, Rect};

    #[test]
    fn test_polygon_is_promoted() {
        let polygon = Rect::new((0.0, 0.0), (1.0, 1.0)).to_polygon();
        let record = FeatureRecord::try_new(String::from("a"), Geometry::Polygon(polygon))
            .expect("polygon accepted");
        assert_eq!(record.geometry.0.len(), 1);
    }

    #[test]
    fn test_point_is_rejected() {
        let result = FeatureRecord::try_new(
            String::from("a"),
            Geometry::Point(point!(x: 0.0, y: 0.0)),
        );
        assert!(matches!(result, Err(ZoneError::InvalidGeometry(_, _))));
    }
}
