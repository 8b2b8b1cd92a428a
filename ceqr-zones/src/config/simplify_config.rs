use crate::{
    algorithm::classification::NearestNeighborParams,
    app::simplify::OutputFormat,
    model::{source::GeometrySource, ZoneCliError},
};
use serde::{Deserialize, Serialize};

/// defines the inputs, tuning parameters and output of a zone simplification run
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct SimplifyConfiguration {
    pub traffic_zones: GeometrySource,
    pub census_tracts: GeometrySource,
    pub census_blocks: GeometrySource,
    /// characters dropped from a block id to produce its parent tract key
    pub block_key_suffix_length: usize,
    pub tract_k: usize,
    pub block_k: usize,
    /// union each zone's parts before flattening so touching parts form one unit
    pub merge_zone_parts: bool,
    pub output_file: String,
    pub output_format: OutputFormat,
    /// output attribute holding the zone id
    pub zone_field: String,
    pub overwrite: bool,
}

impl Default for SimplifyConfiguration {
    fn default() -> Self {
        let params = NearestNeighborParams::default();
        Self {
            traffic_zones: GeometrySource::GeoJson {
                file: String::from("data/ceqr_transportation_zones_v2015.geojson"),
                id_field: String::from("ceqrzone"),
            },
            census_tracts: GeometrySource::GeoJson {
                file: String::from("data/census_tracts.geojson"),
                id_field: String::from("BoroCT2010"),
            },
            census_blocks: GeometrySource::GeoJson {
                file: String::from("data/census_blocks.geojson"),
                id_field: String::from("BCTCB2010"),
            },
            block_key_suffix_length: 4,
            tract_k: params.tract_k,
            block_k: params.block_k,
            merge_zone_parts: false,
            output_file: String::from("simplified_ceqr_traffic_zones.geojson"),
            output_format: OutputFormat::default(),
            zone_field: String::from("ceqrzone"),
            overwrite: true,
        }
    }
}

impl SimplifyConfiguration {
    pub fn nearest_neighbor_params(&self) -> NearestNeighborParams {
        NearestNeighborParams {
            tract_k: self.tract_k,
            block_k: self.block_k,
        }
    }
}

impl TryFrom<&String> for SimplifyConfiguration {
    type Error = ZoneCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ZoneCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ZoneCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ZoneCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ZoneCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ZoneCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let conf: SimplifyConfiguration = toml::from_str(
            r#"
            tract_k = 50
            output_format = "csv"

            [census_blocks]
            type = "shapefile"
            file = "data/nycb2010.shp"
            id_field = "BCTCB2010"
            "#,
        )
        .expect("valid configuration");
        assert_eq!(conf.tract_k, 50);
        assert_eq!(conf.block_k, 1000);
        assert_eq!(conf.output_format, OutputFormat::Csv);
        assert_eq!(conf.census_blocks.file(), "data/nycb2010.shp");
        assert_eq!(conf.census_tracts.file(), "data/census_tracts.geojson");
        assert_eq!(conf.block_key_suffix_length, 4);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SimplifyConfiguration::try_from(&String::from("conf.yaml"));
        assert!(matches!(result, Err(ZoneCliError::ConfigurationError(_))));
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("simplify.json");
        std::fs::write(
            &path,
            r#"{
              "block_k": 250,
              "merge_zone_parts": true,
              "census_tracts": {
                "type": "csv",
                "file": "data/tracts.csv",
                "geometry_column": "geometry",
                "id_column": "BoroCT2010"
              }
            }"#,
        )
        .expect("write configuration");
        let conf = SimplifyConfiguration::try_from(&path.to_string_lossy().to_string())
            .expect("valid configuration");
        assert_eq!(conf.block_k, 250);
        assert_eq!(conf.tract_k, 600);
        assert!(conf.merge_zone_parts);
        assert_eq!(conf.census_tracts.file(), "data/tracts.csv");
        assert_eq!(conf.output_format, OutputFormat::GeoJson);
    }

    #[test]
    fn test_load_invalid_json_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("simplify.json");
        std::fs::write(&path, r#"{ "tract_k": "many" }"#).expect("write configuration");
        let result = SimplifyConfiguration::try_from(&path.to_string_lossy().to_string());
        assert!(matches!(result, Err(ZoneCliError::ConfigurationError(_))));
    }
}
