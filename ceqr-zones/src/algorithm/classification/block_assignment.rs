use crate::model::zone::ZoneId;
use geo::MultiPolygon;

/// the zone chosen for a census block
#[derive(Clone, Debug)]
pub struct BlockAssignment {
    pub zone_id: ZoneId,
    /// intersection area between the block and the winning unit, may be zero
    pub area: f64,
    /// normalized block geometry
    pub geometry: MultiPolygon<f64>,
}
