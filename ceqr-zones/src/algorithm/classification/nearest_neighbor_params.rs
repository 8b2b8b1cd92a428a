use crate::model::ZoneError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRACT_K: usize = 600;
pub const DEFAULT_BLOCK_K: usize = 1000;

/// number of nearest zone units (by centroid distance) considered as candidates.
///
/// blocks are small relative to zone units, so the block search casts a wider net
/// than the tract search. if tracts are reported as discarded, or blocks are
/// assigned with zero overlap, increase these values.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NearestNeighborParams {
    pub tract_k: usize,
    pub block_k: usize,
}

impl Default for NearestNeighborParams {
    fn default() -> Self {
        Self {
            tract_k: DEFAULT_TRACT_K,
            block_k: DEFAULT_BLOCK_K,
        }
    }
}

impl NearestNeighborParams {
    pub fn new(tract_k: usize, block_k: usize) -> Result<NearestNeighborParams, ZoneError> {
        let params = NearestNeighborParams { tract_k, block_k };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ZoneError> {
        if self.tract_k == 0 {
            return Err(ZoneError::InvalidParameters(String::from(
                "tract_k must be at least 1",
            )));
        }
        if self.block_k == 0 {
            return Err(ZoneError::InvalidParameters(String::from(
                "block_k must be at least 1",
            )));
        }
        if self.block_k < self.tract_k {
            log::warn!(
                "block_k ({}) is smaller than tract_k ({}), blocks may miss their true zone",
                self.block_k,
                self.tract_k
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = NearestNeighborParams::default();
        assert_eq!(params.tract_k, 600);
        assert_eq!(params.block_k, 1000);
    }

    #[test]
    fn test_zero_k_rejected() {
        assert!(NearestNeighborParams::new(0, 10).is_err());
        assert!(NearestNeighborParams::new(10, 0).is_err());
        assert!(NearestNeighborParams::new(1, 1).is_ok());
    }
}
