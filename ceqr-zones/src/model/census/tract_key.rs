use crate::model::ZoneError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// borough + census tract code (the `BoroCT2010` attribute) used to join
/// census blocks to their parent tract.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TractKey(pub String);

impl TractKey {
    /// derives the parent tract key of a block by dropping the trailing block
    /// number, e.g. "10001001000" with a 4-character suffix becomes "1000100".
    ///
    /// # Arguments
    ///
    /// * `block_id`   - block identifier, such as a `BCTCB2010` value
    /// * `suffix_len` - number of trailing characters identifying the block within its tract
    pub fn from_block_id(block_id: &str, suffix_len: usize) -> Result<TractKey, ZoneError> {
        let n_chars = block_id.chars().count();
        if n_chars <= suffix_len {
            return Err(ZoneError::InvalidBlockId(block_id.to_string(), suffix_len));
        }
        let key = block_id.chars().take(n_chars - suffix_len).collect::<String>();
        Ok(TractKey(key))
    }
}

impl Display for TractKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TractKey {
    fn from(value: &str) -> Self {
        TractKey(value.to_string())
    }
}
