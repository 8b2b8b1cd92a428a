use crate::model::{zone::SimplifiedZones, ZoneError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wkt::ToWkt;

/// file format of the simplified zone output
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// a GeoJSON FeatureCollection in WGS84 lon/lat, one feature per zone
    #[default]
    GeoJson,
    /// a CSV with the zone id and a WKT geometry column
    Csv,
}

impl OutputFormat {
    /// serializes the zones in memory, then writes the file in a single call.
    pub fn write(
        &self,
        zones: &SimplifiedZones,
        output_file: &Path,
        zone_field: &str,
        overwrite: bool,
    ) -> Result<(), ZoneError> {
        let filename = output_file.to_string_lossy().to_string();
        if output_file.exists() && !overwrite {
            return Err(ZoneError::WriteError(
                filename,
                String::from("file exists and overwrite is false"),
            ));
        }
        let contents = match self {
            OutputFormat::GeoJson => {
                let feature_collection = zones.to_feature_collection(zone_field);
                serde_json::to_string(&feature_collection)
                    .map_err(|e| ZoneError::WriteError(filename.clone(), e.to_string()))?
            }
            OutputFormat::Csv => to_csv(zones, zone_field)
                .map_err(|e| ZoneError::WriteError(filename.clone(), e))?,
        };
        std::fs::write(output_file, contents)
            .map_err(|e| ZoneError::WriteError(filename, e.to_string()))
    }
}

fn to_csv(zones: &SimplifiedZones, zone_field: &str) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer
        .write_record([zone_field, "geometry"])
        .map_err(|e| e.to_string())?;
    for (zone_id, geometry) in zones.iter() {
        let wkt = geometry.to_wkt().to_string();
        writer
            .write_record([zone_id.as_str(), wkt.as_str()])
            .map_err(|e| e.to_string())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::test_util::rect_mp;
    use crate::model::zone::ZoneId;
    use geojson::GeoJson;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn zones() -> SimplifiedZones {
        SimplifiedZones::new(BTreeMap::from([
            (ZoneId::from("1"), rect_mp(0.0, 0.0, 1.0, 1.0)),
            (ZoneId::from("2"), rect_mp(1.0, 0.0, 2.0, 1.0)),
        ]))
    }

    #[test]
    fn test_write_geojson() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("zones.geojson");
        OutputFormat::GeoJson
            .write(&zones(), &path, "ceqrzone", false)
            .expect("write succeeds");
        let contents = std::fs::read_to_string(&path).expect("file written");
        let GeoJson::FeatureCollection(fc) = GeoJson::from_str(&contents).expect("valid geojson")
        else {
            panic!("expected a FeatureCollection");
        };
        assert_eq!(fc.features.len(), 2);
        assert_eq!(
            fc.features[1].property("ceqrzone"),
            Some(&serde_json::Value::String(String::from("2")))
        );
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("zones.csv");
        OutputFormat::Csv
            .write(&zones(), &path, "ceqrzone", false)
            .expect("write succeeds");
        let mut reader = csv::Reader::from_path(&path).expect("readable csv");
        let headers = reader.headers().expect("headers").clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["ceqrzone", "geometry"]);
        let rows = reader.records().collect::<Result<Vec<_>, _>>().expect("rows");
        assert_eq!(rows.len(), 2);
        assert!(rows[0].get(1).is_some_and(|g| g.starts_with("MULTIPOLYGON")));
    }

    #[test]
    fn test_no_overwrite() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("zones.geojson");
        std::fs::write(&path, "{}").expect("write existing");
        let result = OutputFormat::GeoJson.write(&zones(), &path, "ceqrzone", false);
        assert!(matches!(result, Err(ZoneError::WriteError(_, _))));
    }
}
