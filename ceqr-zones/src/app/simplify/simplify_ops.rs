use super::SimplifyReport;
use crate::{
    algorithm::{
        classification::{
            ClassificationSummary, Diagnostics, NearestNeighborParams, ZoneClassifier,
        },
        dissolve, flatten_zones, ZoneAccumulator,
    },
    config::SimplifyConfiguration,
    model::{
        census::{CensusBlock, CensusBlocks, CensusTract},
        source::GeometrySource,
        zone::TrafficZone,
        ZoneError,
    },
};
use itertools::Itertools;
use kdam::tqdm;
use std::path::Path;

/// census geometry grouped by zone, along with what could not be assigned
#[derive(Debug)]
pub struct Assignment {
    pub accumulator: ZoneAccumulator,
    pub diagnostics: Diagnostics,
    pub summary: ClassificationSummary,
    pub zone_units: usize,
}

/// runs a full simplification: load the three inputs, assign census geometry to
/// zones, dissolve each zone and write the result.
pub fn run(conf: &SimplifyConfiguration) -> Result<SimplifyReport, ZoneError> {
    let params = conf.nearest_neighbor_params();
    params.validate()?;

    log::info!("loading traffic zones and census geometry");
    let mut zones = load_zones(&conf.traffic_zones)?;
    if conf.merge_zone_parts {
        log::info!("merging touching parts of each traffic zone");
        zones = zones.iter().map(|z| z.merge_parts()).collect_vec();
    }
    let tracts = load_tracts(&conf.census_tracts)?;
    let blocks = load_blocks(&conf.census_blocks, conf.block_key_suffix_length)?;

    log::info!("simplifying geometry");
    let assignment = assign(&zones, &tracts, &blocks, params)?;
    assignment.diagnostics.log_summary();

    let simplified = dissolve(&assignment.accumulator);

    log::info!("writing simplified zones to {}", conf.output_file);
    conf.output_format.write(
        &simplified,
        Path::new(&conf.output_file),
        &conf.zone_field,
        conf.overwrite,
    )?;

    Ok(SimplifyReport {
        traffic_zones: zones.len(),
        zone_units: assignment.zone_units,
        census_tracts: tracts.len(),
        census_blocks: blocks.len(),
        classification: assignment.summary,
        diagnostics: assignment.diagnostics.len(),
        output_zones: simplified.len(),
        output_file: conf.output_file.clone(),
    })
}

/// flattens the zones into units, indexes their centroids and classifies every tract.
pub fn assign(
    zones: &[TrafficZone],
    tracts: &[CensusTract],
    blocks: &CensusBlocks,
    params: NearestNeighborParams,
) -> Result<Assignment, ZoneError> {
    let units = flatten_zones(zones);
    let zone_units = units.len();
    log::info!(
        "flattened {} traffic zones into {} zone units",
        zones.len(),
        zone_units
    );
    let classifier = ZoneClassifier::new(units, params)?;

    let mut accumulator = ZoneAccumulator::new();
    let mut diagnostics = Diagnostics::new();
    let mut summary = ClassificationSummary::default();

    let iter = tqdm!(tracts.iter(), total = tracts.len(), desc = "classify tracts");
    for tract in iter {
        let outcome = classifier.classify_tract(tract, blocks, &mut accumulator, &mut diagnostics);
        summary.record(&outcome);
    }
    eprintln!();

    log::info!(
        "classified {} tracts: assigned {} whole tracts and {} blocks from {} split tracts, discarded {} tracts",
        summary.total_tracts(),
        summary.whole_tracts,
        summary.assigned_blocks,
        summary.split_tracts,
        summary.discarded_tracts
    );
    Ok(Assignment {
        accumulator,
        diagnostics,
        summary,
        zone_units,
    })
}

pub fn load_zones(source: &GeometrySource) -> Result<Vec<TrafficZone>, ZoneError> {
    let zones = source
        .read()?
        .into_iter()
        .map(TrafficZone::from)
        .collect_vec();
    log::info!("loaded {} traffic zones from {}", zones.len(), source.file());
    Ok(zones)
}

pub fn load_tracts(source: &GeometrySource) -> Result<Vec<CensusTract>, ZoneError> {
    let tracts = source
        .read()?
        .into_iter()
        .map(CensusTract::from)
        .collect_vec();
    log::info!("loaded {} census tracts from {}", tracts.len(), source.file());
    Ok(tracts)
}

/// reads census blocks, deriving each block's tract key by dropping `suffix_len`
/// characters from its id.
pub fn load_blocks(source: &GeometrySource, suffix_len: usize) -> Result<CensusBlocks, ZoneError> {
    let blocks = source
        .read()?
        .into_iter()
        .map(|record| CensusBlock::try_from_record(record, suffix_len))
        .collect::<Result<Vec<_>, _>>()?;
    let blocks = CensusBlocks::new(blocks);
    log::info!(
        "loaded {} census blocks in {} tracts from {}",
        blocks.len(),
        blocks.num_tracts(),
        source.file()
    );
    Ok(blocks)
}
