use crate::model::{zone::ZoneUnit, ZoneError};
use geo::{Centroid, Point};
use rstar::{primitives::GeomWithData, RTree};

pub type UnitCentroid = GeomWithData<[f64; 2], usize>;

/// spatial index over the centroids of the flattened zone units.
///
/// queries rank units by the Euclidean distance between centroids rather than by
/// geometry distance. this is an approximation: a large unit whose centroid is far away
/// may still be the one that truly intersects the query geometry, so `k` must be chosen
/// generously enough to cover it.
pub struct CentroidIndex {
    rtree: RTree<UnitCentroid>,
}

impl CentroidIndex {
    /// builds the index; the data of each entry is the unit's position in `units`.
    pub fn new(units: &[ZoneUnit]) -> Result<CentroidIndex, ZoneError> {
        if units.is_empty() {
            return Err(ZoneError::EmptyZoneIndex);
        }
        let entries = units
            .iter()
            .enumerate()
            .map(|(index, unit)| match unit.polygon.centroid() {
                Some(c) => Ok(GeomWithData::new([c.x(), c.y()], index)),
                None => Err(ZoneError::MissingCentroid(index, unit.zone_id.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CentroidIndex {
            rtree: RTree::bulk_load(entries),
        })
    }

    /// number of indexed unit centroids
    pub fn size(&self) -> usize {
        self.rtree.size()
    }

    /// the `k` unit indices whose centroids are nearest to `point`, nearest first.
    /// when `k` exceeds the number of units, every unit is returned.
    pub fn query(&self, point: &Point<f64>, k: usize) -> Vec<usize> {
        self.rtree
            .nearest_neighbor_iter(&[point.x(), point.y()])
            .take(k)
            .map(|entry| entry.data)
            .collect()
    }
}
