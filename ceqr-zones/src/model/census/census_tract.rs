use super::TractKey;
use crate::model::source::FeatureRecord;
use geo::MultiPolygon;

#[derive(Clone, Debug)]
pub struct CensusTract {
    pub key: TractKey,
    pub geometry: MultiPolygon<f64>,
}

impl CensusTract {
    pub fn new(key: TractKey, geometry: MultiPolygon<f64>) -> CensusTract {
        CensusTract { key, geometry }
    }
}

impl From<FeatureRecord> for CensusTract {
    fn from(record: FeatureRecord) -> Self {
        CensusTract::new(TractKey(record.id), record.geometry)
    }
}
