//! Parser für Kurvendateien.

use super::CurveFileError;
use crate::core::Point2D;

/// Parst ein Kontrollpolygon aus JSON-Text.
///
/// Akzeptiert ausschließlich ein Top-Level-Array, dessen Elemente genau
/// zwei Zahlen enthalten. Alles andere → [`CurveFileError::MalformedData`].
pub fn load_points(json_content: &str) -> Result<Vec<Point2D>, CurveFileError> {
    let pairs: Vec<[f64; 2]> =
        serde_json::from_str(json_content).map_err(CurveFileError::MalformedData)?;
    Ok(pairs.into_iter().map(Point2D::from_array).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_malformed(input: &str) {
        match load_points(input) {
            Err(CurveFileError::MalformedData(_)) => {}
            other => panic!("MalformedData erwartet für {input:?}, erhalten: {other:?}"),
        }
    }

    #[test]
    fn test_load_simple_polygon() {
        let points = load_points("[[0, 0], [0.5, 1.0], [1, 0]]").expect("Parsing fehlgeschlagen");
        assert_eq!(
            points,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(0.5, 1.0),
                Point2D::new(1.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_load_empty_array() {
        let points = load_points("[]").expect("Leeres Array ist gültig");
        assert!(points.is_empty());
    }

    #[test]
    fn test_load_tolerates_whitespace() {
        let points = load_points("\n  [ [0.25 , 0.75] ]\n").expect("Parsing fehlgeschlagen");
        assert_eq!(points, vec![Point2D::new(0.25, 0.75)]);
    }

    #[test]
    fn test_load_rejects_object() {
        assert_malformed("{}");
    }

    #[test]
    fn test_load_rejects_flat_numbers() {
        assert_malformed("[1,2,3]");
    }

    #[test]
    fn test_load_rejects_non_numeric_coordinate() {
        assert_malformed("[[1,\"a\"]]");
    }

    #[test]
    fn test_load_rejects_wrong_arity() {
        assert_malformed("[[1]]");
        assert_malformed("[[1, 2, 3]]");
    }

    #[test]
    fn test_load_rejects_null_and_garbage() {
        assert_malformed("[[null, 1]]");
        assert_malformed("");
        assert_malformed("not json");
    }
}
