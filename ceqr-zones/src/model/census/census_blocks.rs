use super::{CensusBlock, TractKey};
use std::collections::HashMap;

/// census blocks grouped by their parent tract for "all blocks of tract X" lookups.
#[derive(Clone, Debug, Default)]
pub struct CensusBlocks {
    blocks: Vec<CensusBlock>,
    by_tract: HashMap<TractKey, Vec<usize>>,
}

impl CensusBlocks {
    pub fn new(blocks: Vec<CensusBlock>) -> CensusBlocks {
        let mut by_tract: HashMap<TractKey, Vec<usize>> = HashMap::new();
        for (idx, block) in blocks.iter().enumerate() {
            by_tract.entry(block.key.clone()).or_default().push(idx);
        }
        CensusBlocks { blocks, by_tract }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// blocks of the given tract, in the order they were loaded
    pub fn for_tract<'a>(&'a self, key: &TractKey) -> impl Iterator<Item = &'a CensusBlock> + 'a {
        self.by_tract
            .get(key)
            .into_iter()
            .flatten()
            .map(|idx| &self.blocks[*idx])
    }

    /// number of tracts that have at least one block
    pub fn num_tracts(&self) -> usize {
        self.by_tract.len()
    }
}
