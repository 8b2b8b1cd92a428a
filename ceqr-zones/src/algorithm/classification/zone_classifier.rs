use super::{BlockAssignment, Diagnostic, Diagnostics, NearestNeighborParams, TractOutcome};
use crate::{
    algorithm::{normalize, CentroidIndex, ZoneAccumulator},
    model::{
        census::{CensusBlock, CensusBlocks, CensusTract},
        zone::{ZoneId, ZoneUnit},
        ZoneError,
    },
};
use geo::{Area, BooleanOps, Centroid, Intersects, MultiPolygon};
use itertools::Itertools;

/// assigns census tracts, and where needed their blocks, to traffic zones.
///
/// a tract whose intersecting zone units all belong to one zone is assigned whole.
/// a tract touching several zones is resolved block by block, each block going to
/// the zone unit it overlaps the most.
pub struct ZoneClassifier {
    units: Vec<ZoneUnit>,
    index: CentroidIndex,
    params: NearestNeighborParams,
}

impl ZoneClassifier {
    pub fn new(
        units: Vec<ZoneUnit>,
        params: NearestNeighborParams,
    ) -> Result<ZoneClassifier, ZoneError> {
        params.validate()?;
        let index = CentroidIndex::new(&units)?;
        log::debug!(
            "indexed {} zone unit centroids, tract_k={} block_k={}",
            index.size(),
            params.tract_k,
            params.block_k
        );
        Ok(ZoneClassifier {
            units,
            index,
            params,
        })
    }

    /// classifies one tract, adding the tract geometry or its block geometries to the
    /// accumulator. blocks are only looked up when the tract is ambiguous.
    pub fn classify_tract(
        &self,
        tract: &CensusTract,
        blocks: &CensusBlocks,
        accumulator: &mut ZoneAccumulator,
        diagnostics: &mut Diagnostics,
    ) -> TractOutcome {
        let geometry = normalize(&tract.geometry);
        let zone_ids = self.intersecting_zones(&geometry);

        match zone_ids.as_slice() {
            [] => {
                log::debug!("tract {} intersects no zone unit", tract.key);
                diagnostics.push(Diagnostic::DiscardedTract {
                    key: tract.key.clone(),
                });
                TractOutcome::Discarded
            }
            [zone_id] => {
                log::debug!("tract {} lies within zone {}", tract.key, zone_id);
                let zone_id = (*zone_id).clone();
                accumulator.add(&zone_id, geometry);
                TractOutcome::Whole(zone_id)
            }
            _ => {
                log::debug!(
                    "tract {} spans zones [{}], assigning by block",
                    tract.key,
                    zone_ids.iter().join(", ")
                );
                let mut n_blocks = 0;
                for block in blocks.for_tract(&tract.key) {
                    match self.classify_block(block) {
                        Some(assignment) => {
                            if assignment.area <= 0.0 {
                                diagnostics.push(Diagnostic::ZeroOverlapBlock {
                                    block_id: block.id.clone(),
                                    zone_id: assignment.zone_id.clone(),
                                });
                            }
                            accumulator.add(&assignment.zone_id, assignment.geometry);
                            n_blocks += 1;
                        }
                        None => diagnostics.push(Diagnostic::DiscardedBlock {
                            block_id: block.id.clone(),
                        }),
                    }
                }
                if n_blocks == 0 {
                    diagnostics.push(Diagnostic::TractWithoutBlocks {
                        key: tract.key.clone(),
                    });
                }
                TractOutcome::Split {
                    zones: zone_ids.len(),
                    blocks: n_blocks,
                }
            }
        }
    }

    /// distinct zone ids among the `tract_k` nearest units that intersect the geometry,
    /// in nearest-first order. boundary contact counts as intersection.
    pub fn intersecting_zones(&self, geometry: &MultiPolygon<f64>) -> Vec<&ZoneId> {
        let Some(centroid) = geometry.centroid() else {
            return vec![];
        };
        self.index
            .query(&centroid, self.params.tract_k)
            .into_iter()
            .map(|idx| &self.units[idx])
            .filter(|unit| geometry.intersects(&unit.polygon))
            .map(|unit| &unit.zone_id)
            .unique()
            .collect_vec()
    }

    /// picks the zone of the nearby unit with the largest intersection area. the block
    /// is assigned even when every candidate has zero overlap. returns None only when
    /// the normalized block geometry is empty.
    pub fn classify_block(&self, block: &CensusBlock) -> Option<BlockAssignment> {
        let geometry = normalize(&block.geometry);
        let centroid = geometry.centroid()?;
        let candidates = self.index.query(&centroid, self.params.block_k);
        let (unit, area) = self.max_overlap(&geometry, &candidates)?;
        Some(BlockAssignment {
            zone_id: self.units[unit].zone_id.clone(),
            area,
            geometry,
        })
    }

    /// the candidate with the strictly largest intersection area with `geometry`.
    /// ties go to the earliest candidate, so nearest-first input order is respected.
    pub fn max_overlap(
        &self,
        geometry: &MultiPolygon<f64>,
        candidates: &[usize],
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for idx in candidates.iter() {
            let area = geometry.intersection(&self.units[*idx].polygon).unsigned_area();
            match best {
                Some((_, best_area)) if area <= best_area => {}
                _ => best = Some((*idx, area)),
            }
        }
        best
    }
}
