pub mod accumulator;
pub mod centroid_index;
pub mod classification;
pub mod dissolve;
pub mod flatten;
pub mod normalize;

pub use accumulator::ZoneAccumulator;
pub use centroid_index::CentroidIndex;
pub use dissolve::dissolve;
pub use flatten::flatten_zones;
pub use normalize::normalize;

#[cfg(test)]
pub(crate) mod test_util {
    use geo::{MultiPolygon, Polygon, Rect};

    /// axis-aligned rectangle polygon
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        Rect::new((x0, y0), (x1, y1)).to_polygon()
    }

    /// axis-aligned rectangle as a single-part multipolygon
    pub fn rect_mp(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![rect(x0, y0, x1, y1)])
    }
}
