use geo::{unary_union, MultiPolygon};

/// repairs a possibly invalid (self-intersecting, unclosed) polygon with the effect of
/// a zero-distance buffer. the parts are rebuilt by the polygon overlay engine as a
/// union, so rings are closed and overlapping parts merged. like a zero-distance
/// buffer, a self-intersecting ring may lose area: only the lobes the overlay treats
/// as interior are kept.
pub fn normalize(geometry: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    unary_union(geometry.0.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::test_util::rect_mp;
    use geo::{polygon, Area, Validation};

    #[test]
    fn test_normalize_valid_polygon_is_unchanged_in_area() {
        let square = rect_mp(0.0, 0.0, 2.0, 2.0);
        let result = normalize(&square);
        assert_eq!(result.0.len(), 1);
        assert!((result.unsigned_area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_repairs_bowtie() {
        // self-intersecting ring crossing at (1, 1)
        let bowtie = polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 2.0, y: 0.0),
            (x: 0.0, y: 2.0),
            (x: 0.0, y: 0.0),
        ];
        let result = normalize(&MultiPolygon::new(vec![bowtie]));
        // a single valid triangle of area 1 remains, the other lobe is dropped
        assert!(result.is_valid());
        assert_eq!(result.0.len(), 1);
        assert!((result.unsigned_area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_merges_overlapping_parts() {
        let mut parts = rect_mp(0.0, 0.0, 2.0, 2.0);
        parts.0.extend(rect_mp(1.0, 0.0, 3.0, 2.0).0);
        let result = normalize(&parts);
        assert_eq!(result.0.len(), 1);
        assert!((result.unsigned_area() - 6.0).abs() < 1e-9);
    }
}
