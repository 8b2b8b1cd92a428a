mod simplified_zones;
mod traffic_zone;
mod zone_id;
mod zone_unit;

pub use simplified_zones::SimplifiedZones;
pub use traffic_zone::TrafficZone;
pub use zone_id::ZoneId;
pub use zone_unit::ZoneUnit;
