use super::FeatureRecord;
use crate::model::ZoneError;
use geo::Geometry;
use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path, str::FromStr};
use wkt::TryFromWkt;

/// a file of identified polygon records
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum GeometrySource {
    /// reads a GeoJSON FeatureCollection, taking the id from a feature property
    GeoJson { file: String, id_field: String },
    /// reads polygons from a shapefile with an id field
    Shapefile { file: String, id_field: String },
    /// reads a CSV file that contains WKT geometry and id columns
    Csv {
        file: String,
        geometry_column: String,
        id_column: String,
    },
}

impl GeometrySource {
    pub fn file(&self) -> &str {
        match self {
            GeometrySource::GeoJson { file, .. } => file,
            GeometrySource::Shapefile { file, .. } => file,
            GeometrySource::Csv { file, .. } => file,
        }
    }

    pub fn read(&self) -> Result<Vec<FeatureRecord>, ZoneError> {
        match self {
            GeometrySource::GeoJson { file, id_field } => read_geojson(file, id_field),
            GeometrySource::Shapefile { file, id_field } => read_shapefile(file, id_field),
            GeometrySource::Csv {
                file,
                geometry_column,
                id_column,
            } => read_csv(file, geometry_column, id_column),
        }
    }
}

/// reads identified geometries from a GeoJSON FeatureCollection
fn read_geojson(input_file: &str, id_field: &str) -> Result<Vec<FeatureRecord>, ZoneError> {
    let contents = std::fs::read_to_string(input_file)
        .map_err(|e| ZoneError::SourceReadError(input_file.to_string(), e.to_string()))?;
    let dataset = GeoJson::from_str(&contents).map_err(|e| {
        ZoneError::SourceReadError(input_file.to_string(), format!("invalid GeoJSON: {e}"))
    })?;
    let feature_collection = match dataset {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Geometry(_) => Err(ZoneError::SourceReadError(
            input_file.to_string(),
            String::from("expected a FeatureCollection but found a single 'Geometry'"),
        )),
        GeoJson::Feature(_) => Err(ZoneError::SourceReadError(
            input_file.to_string(),
            String::from("expected a FeatureCollection but found a single 'Feature'"),
        )),
    }?;

    feature_collection
        .features
        .into_iter()
        .enumerate()
        .map(|(idx, feature)| feature_to_record(idx, feature, id_field))
        .collect()
}

/// unpacks a feature into an id and polygonal geometry
fn feature_to_record(
    idx: usize,
    feature: geojson::Feature,
    id_field: &str,
) -> Result<FeatureRecord, ZoneError> {
    let property_id = feature.property(id_field).and_then(json_to_id);
    let id = match (property_id, &feature.id) {
        (Some(id), _) => id,
        (None, Some(geojson::feature::Id::String(s))) => s.clone(),
        (None, Some(geojson::feature::Id::Number(n))) => n.to_string(),
        (None, None) => return Err(ZoneError::MissingAttribute(idx, id_field.to_string())),
    };
    let geom = feature.geometry.ok_or_else(|| {
        ZoneError::InvalidGeometry(id.clone(), String::from("feature has no geometry"))
    })?;
    let geometry: Geometry<f64> = geom
        .try_into()
        .map_err(|e: geojson::Error| ZoneError::InvalidGeometry(id.clone(), e.to_string()))?;
    FeatureRecord::try_new(id, geometry)
}

fn json_to_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// reads identified geometries from a shapefile source
fn read_shapefile(input_file: &str, id_field: &str) -> Result<Vec<FeatureRecord>, ZoneError> {
    let rows = shapefile::read(input_file)
        .map_err(|e| ZoneError::SourceReadError(input_file.to_string(), e.to_string()))?;

    let mut processed = vec![];
    for (idx, (shape, record)) in rows.into_iter().enumerate() {
        let field = record
            .get(id_field)
            .ok_or_else(|| ZoneError::MissingAttribute(idx, id_field.to_string()))?;
        let id = match field {
            shapefile::dbase::FieldValue::Character(Some(s)) => Ok(s.trim().to_string()),
            shapefile::dbase::FieldValue::Numeric(Some(n)) => Ok(n.to_string()),
            _ => Err(ZoneError::SourceReadError(
                input_file.to_string(),
                format!(
                    "field '{}' has unexpected field type '{}' at row {}",
                    id_field,
                    field.field_type(),
                    idx
                ),
            )),
        }?;
        let multipolygon: geo::MultiPolygon<f64> = match shape {
            shapefile::Shape::Polygon(generic_polygon) => {
                generic_polygon.try_into().map_err(|e| {
                    ZoneError::InvalidGeometry(id.clone(), format!("{e}"))
                })?
            }
            shapefile::Shape::PolygonM(generic_polygon) => {
                generic_polygon.try_into().map_err(|e| {
                    ZoneError::InvalidGeometry(id.clone(), format!("{e}"))
                })?
            }
            _ => {
                return Err(ZoneError::InvalidGeometry(
                    id,
                    format!(
                        "unexpected shape type {} found at row {}, must be polygonal",
                        shape.shapetype(),
                        idx
                    ),
                ))
            }
        };
        processed.push(FeatureRecord::try_new(id, Geometry::MultiPolygon(multipolygon))?);
    }
    Ok(processed)
}

/// reads identified geometries from a CSV source with a WKT geometry column
fn read_csv(
    input_file: &str,
    geometry_column: &str,
    id_column: &str,
) -> Result<Vec<FeatureRecord>, ZoneError> {
    let source_err = |e: csv::Error| ZoneError::SourceReadError(input_file.to_string(), e.to_string());
    let mut reader = csv::Reader::from_path(Path::new(input_file)).map_err(source_err)?;
    let header_record = reader.headers().map_err(source_err)?.clone();
    let headers = header_record
        .into_iter()
        .enumerate()
        .map(|(i, s)| (s, i))
        .collect::<HashMap<_, _>>();
    let geom_idx = *headers.get(geometry_column).ok_or_else(|| {
        ZoneError::SourceReadError(
            input_file.to_string(),
            format!("file missing {geometry_column} column"),
        )
    })?;
    let id_idx = *headers.get(id_column).ok_or_else(|| {
        ZoneError::SourceReadError(
            input_file.to_string(),
            format!("file missing {id_column} column"),
        )
    })?;

    reader
        .records()
        .enumerate()
        .map(|(idx, r)| {
            let row = r.map_err(source_err)?;
            let id = row
                .get(id_idx)
                .ok_or_else(|| ZoneError::MissingAttribute(idx, id_column.to_string()))?
                .to_string();
            let geometry_str = row
                .get(geom_idx)
                .ok_or_else(|| ZoneError::MissingAttribute(idx, geometry_column.to_string()))?;
            let geometry: Geometry<f64> = Geometry::try_from_wkt_str(geometry_str)
                .map_err(|e| ZoneError::InvalidGeometry(id.clone(), e.to_string()))?;
            FeatureRecord::try_new(id, geometry)
        })
        .collect()
}
