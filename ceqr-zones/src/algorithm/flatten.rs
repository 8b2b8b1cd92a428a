use crate::model::zone::{TrafficZone, ZoneUnit};

/// expands each traffic zone into one [`ZoneUnit`] per polygon part. the output order
/// (zones in input order, then parts in geometry order) defines the unit indices used
/// by the [`super::CentroidIndex`]. parts are not deduplicated.
pub fn flatten_zones(zones: &[TrafficZone]) -> Vec<ZoneUnit> {
    zones
        .iter()
        .flat_map(|zone| {
            zone.geometry
                .0
                .iter()
                .map(|polygon| ZoneUnit::new(zone.id.clone(), polygon.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::test_util::rect;
    use crate::model::zone::ZoneId;
    use geo::MultiPolygon;

    #[test]
    fn test_flatten_one_unit_per_part() {
        let zones = vec![
            TrafficZone::new(
                ZoneId::from("1"),
                MultiPolygon::new(vec![rect(0.0, 0.0, 1.0, 1.0), rect(1.0, 0.0, 2.0, 1.0)]),
            ),
            TrafficZone::new(
                ZoneId::from("2"),
                MultiPolygon::new(vec![rect(5.0, 5.0, 6.0, 6.0)]),
            ),
        ];
        let units = flatten_zones(&zones);
        let expected_parts: usize = zones.iter().map(|z| z.num_parts()).sum();
        assert_eq!(units.len(), expected_parts);
        let zone_ids = units.iter().map(|u| u.zone_id.as_str()).collect::<Vec<_>>();
        assert_eq!(zone_ids, vec!["1", "1", "2"]);
        assert_eq!(units[1].polygon, rect(1.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn test_flatten_keeps_duplicate_parts() {
        let part = rect(0.0, 0.0, 1.0, 1.0);
        let zones = vec![TrafficZone::new(
            ZoneId::from("1"),
            MultiPolygon::new(vec![part.clone(), part]),
        )];
        assert_eq!(flatten_zones(&zones).len(), 2);
    }

    #[test]
    fn test_flatten_merged_zone() {
        let zone = TrafficZone::new(
            ZoneId::from("1"),
            MultiPolygon::new(vec![rect(0.0, 0.0, 1.0, 1.0), rect(1.0, 0.0, 2.0, 1.0)]),
        );
        let units = flatten_zones(&[zone.merge_parts()]);
        assert_eq!(units.len(), 1);
    }
}
