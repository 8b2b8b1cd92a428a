mod census_block;
mod census_blocks;
mod census_tract;
mod tract_key;

pub use census_block::CensusBlock;
pub use census_blocks::CensusBlocks;
pub use census_tract::CensusTract;
pub use tract_key::TractKey;
