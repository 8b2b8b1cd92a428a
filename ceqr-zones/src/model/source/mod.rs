mod feature_record;
mod geometry_source;

pub use feature_record::FeatureRecord;
pub use geometry_source::GeometrySource;
