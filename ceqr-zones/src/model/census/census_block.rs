use super::TractKey;
use crate::model::{source::FeatureRecord, ZoneError};
use geo::MultiPolygon;

#[derive(Clone, Debug)]
pub struct CensusBlock {
    pub id: String,
    /// key of the parent tract, derived from `id`
    pub key: TractKey,
    pub geometry: MultiPolygon<f64>,
}

impl CensusBlock {
    pub fn new(id: String, key: TractKey, geometry: MultiPolygon<f64>) -> CensusBlock {
        CensusBlock { id, key, geometry }
    }

    /// builds a block from a source record, deriving the parent tract key from the record id.
    pub fn try_from_record(
        record: FeatureRecord,
        suffix_len: usize,
    ) -> Result<CensusBlock, ZoneError> {
        let key = TractKey::from_block_id(&record.id, suffix_len)?;
        Ok(CensusBlock::new(record.id, key, record.geometry))
    }
}
