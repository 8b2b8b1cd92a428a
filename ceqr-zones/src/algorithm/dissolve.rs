use super::ZoneAccumulator;
use crate::model::zone::SimplifiedZones;
use geo::{unary_union, MultiPolygon};
use kdam::tqdm;
use std::collections::BTreeMap;

/// unions the geometries of every accumulated zone into a single (multi)polygon,
/// removing the internal boundaries between adjacent tracts and blocks.
pub fn dissolve(accumulator: &ZoneAccumulator) -> SimplifiedZones {
    let iter = tqdm!(
        accumulator.iter(),
        total = accumulator.len(),
        desc = "dissolve zones"
    );
    let zones = iter
        .map(|(zone_id, geometries)| {
            log::debug!(
                "dissolving {} geometries for zone {}",
                geometries.len(),
                zone_id
            );
            (zone_id.clone(), union_all(geometries))
        })
        .collect::<BTreeMap<_, _>>();
    eprintln!();
    SimplifiedZones::new(zones)
}

/// union of a list of multipolygons; overlapping and duplicated inputs are absorbed.
pub fn union_all(geometries: &[MultiPolygon<f64>]) -> MultiPolygon<f64> {
    unary_union(geometries.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::test_util::rect_mp;
    use crate::model::zone::ZoneId;
    use geo::{Area, BooleanOps};

    #[test]
    fn test_union_merges_adjacent() {
        let result = union_all(&[rect_mp(0.0, 0.0, 1.0, 1.0), rect_mp(1.0, 0.0, 2.0, 1.0)]);
        assert_eq!(result.0.len(), 1);
        assert!((result.unsigned_area() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_union_is_idempotent_under_duplication() {
        let geometries = vec![rect_mp(0.0, 0.0, 1.0, 1.0), rect_mp(0.5, 0.0, 2.0, 1.0)];
        let mut duplicated = geometries.clone();
        duplicated.extend(geometries.clone());
        let once = union_all(&geometries);
        let twice = union_all(&duplicated);
        assert_eq!(once.0.len(), twice.0.len());
        assert!((once.unsigned_area() - twice.unsigned_area()).abs() < 1e-9);
        assert!(once.difference(&twice).unsigned_area() < 1e-9);
        assert!(twice.difference(&once).unsigned_area() < 1e-9);
    }

    #[test]
    fn test_dissolve_one_record_per_zone() {
        let mut acc = ZoneAccumulator::new();
        acc.add(&ZoneId::from("A"), rect_mp(0.0, 0.0, 1.0, 1.0));
        acc.add(&ZoneId::from("A"), rect_mp(1.0, 0.0, 2.0, 1.0));
        acc.add(&ZoneId::from("B"), rect_mp(5.0, 5.0, 6.0, 6.0));
        let result = dissolve(&acc);
        assert_eq!(result.len(), 2);
        let a = result.get(&ZoneId::from("A")).expect("zone A present");
        assert!((a.unsigned_area() - 2.0).abs() < 1e-9);
        assert!(result.get(&ZoneId::from("B")).is_some());
    }
}
