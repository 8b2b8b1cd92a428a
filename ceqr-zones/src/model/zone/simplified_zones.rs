use super::ZoneId;
use geo::MultiPolygon;
use std::collections::BTreeMap;

/// the final product: one dissolved (multi)polygon per traffic zone, ordered by zone id.
#[derive(Clone, Debug, Default)]
pub struct SimplifiedZones(BTreeMap<ZoneId, MultiPolygon<f64>>);

impl SimplifiedZones {
    pub fn new(zones: BTreeMap<ZoneId, MultiPolygon<f64>>) -> SimplifiedZones {
        SimplifiedZones(zones)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, zone_id: &ZoneId) -> Option<&MultiPolygon<f64>> {
        self.0.get(zone_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, &MultiPolygon<f64>)> {
        self.0.iter()
    }

    /// builds a GeoJSON FeatureCollection with one feature per zone. the zone id
    /// is used as the feature id and also stored under `zone_field`.
    pub fn to_feature_collection(&self, zone_field: &str) -> geojson::FeatureCollection {
        let features = self
            .0
            .iter()
            .map(|(zone_id, geometry)| {
                let mut properties = geojson::JsonObject::new();
                properties.insert(
                    zone_field.to_string(),
                    serde_json::Value::String(zone_id.to_string()),
                );
                geojson::Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::new(geojson::Value::from(geometry))),
                    id: Some(geojson::feature::Id::String(zone_id.to_string())),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();
        geojson::FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
