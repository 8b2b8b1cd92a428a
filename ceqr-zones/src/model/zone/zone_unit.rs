use super::ZoneId;
use geo::Polygon;

/// one polygon part of a traffic zone. the atomic unit of nearest neighbor search.
#[derive(Clone, Debug)]
pub struct ZoneUnit {
    pub zone_id: ZoneId,
    pub polygon: Polygon<f64>,
}

impl ZoneUnit {
    pub fn new(zone_id: ZoneId, polygon: Polygon<f64>) -> ZoneUnit {
        ZoneUnit { zone_id, polygon }
    }
}
