use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{app::simplify, config::SimplifyConfiguration, model::ZoneCliError};

/// Command line tool for simplifying CEQR traffic zones into census tract and block geometries
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CeqrZonesApp {
    #[command(subcommand)]
    pub op: CeqrZonesOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CeqrZonesOperation {
    /// assign census geometry to each traffic zone and write the dissolved zones
    Simplify {
        #[arg(long, help = "path to a .toml or .json file with simplify parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "nearest zone units considered per census tract")]
        tract_k: Option<usize>,
        #[arg(long, help = "nearest zone units considered per census block")]
        block_k: Option<usize>,
        #[arg(long, help = "output path for the simplified zones")]
        output_file: Option<String>,
    },
}

impl CeqrZonesOperation {
    pub fn run(self) -> Result<(), ZoneCliError> {
        match self {
            CeqrZonesOperation::Simplify {
                configuration_file,
                tract_k,
                block_k,
                output_file,
            } => {
                let mut conf = match configuration_file {
                    None => Ok(SimplifyConfiguration::default()),
                    Some(f) => {
                        log::info!("reading simplify configuration from {f}");
                        SimplifyConfiguration::try_from(&f)
                    }
                }?;
                if let Some(k) = tract_k {
                    conf.tract_k = k;
                }
                if let Some(k) = block_k {
                    conf.block_k = k;
                }
                if let Some(f) = output_file {
                    conf.output_file = f;
                }
                let report = simplify::run(&conf)?;
                log::info!("finished: {}", serde_json::to_string(&report)?);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simplify_overrides() {
        let app = CeqrZonesApp::try_parse_from([
            "ceqr-zones",
            "simplify",
            "--tract-k",
            "10",
            "--output-file",
            "out.geojson",
        ])
        .expect("arguments parse");
        match app.op {
            CeqrZonesOperation::Simplify {
                configuration_file,
                tract_k,
                block_k,
                output_file,
            } => {
                assert_eq!(configuration_file, None);
                assert_eq!(tract_k, Some(10));
                assert_eq!(block_k, None);
                assert_eq!(output_file.as_deref(), Some("out.geojson"));
            }
        }
    }
}
