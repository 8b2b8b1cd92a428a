use super::ZoneId;
use crate::{algorithm::normalize, model::source::FeatureRecord};
use geo::MultiPolygon;

/// a coarse traffic analysis zone covering its full extent with one or more polygons.
#[derive(Clone, Debug)]
pub struct TrafficZone {
    pub id: ZoneId,
    pub geometry: MultiPolygon<f64>,
}

impl TrafficZone {
    pub fn new(id: ZoneId, geometry: MultiPolygon<f64>) -> TrafficZone {
        TrafficZone { id, geometry }
    }

    /// number of polygon parts in this zone's geometry
    pub fn num_parts(&self) -> usize {
        self.geometry.0.len()
    }

    /// unions the parts of this zone so that touching or overlapping parts
    /// become a single polygon.
    pub fn merge_parts(&self) -> TrafficZone {
        TrafficZone::new(self.id.clone(), normalize(&self.geometry))
    }
}

impl From<FeatureRecord> for TrafficZone {
    fn from(record: FeatureRecord) -> Self {
        TrafficZone::new(ZoneId(record.id), record.geometry)
    }
}
