use crate::model::zone::ZoneId;
use geo::MultiPolygon;
use std::collections::BTreeMap;

/// collects the census geometries assigned to each zone. geometries are kept in
/// insertion order, which carries no meaning beyond reproducibility.
#[derive(Clone, Debug, Default)]
pub struct ZoneAccumulator {
    zones: BTreeMap<ZoneId, Vec<MultiPolygon<f64>>>,
}

impl ZoneAccumulator {
    pub fn new() -> ZoneAccumulator {
        ZoneAccumulator::default()
    }

    /// appends a geometry to the list of `zone_id`, creating the list on first use
    pub fn add(&mut self, zone_id: &ZoneId, geometry: MultiPolygon<f64>) {
        self.zones.entry(zone_id.clone()).or_default().push(geometry);
    }

    pub fn get(&self, zone_id: &ZoneId) -> Option<&[MultiPolygon<f64>]> {
        self.zones.get(zone_id).map(|v| v.as_slice())
    }

    /// number of zones with at least one geometry
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// total number of geometries across all zones
    pub fn num_geometries(&self) -> usize {
        self.zones.values().map(|v| v.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, &Vec<MultiPolygon<f64>>)> {
        self.zones.iter()
    }
}
