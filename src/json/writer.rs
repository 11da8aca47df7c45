//! Writer für Kurvendateien.

use super::CurveFileError;
use crate::core::Point2D;

/// Serialisiert das Kontrollpolygon als JSON-Array aus `[x, y]`-Paaren.
///
/// Nicht-endliche Koordinaten werden abgelehnt, bevor etwas geschrieben wird.
pub fn save_points(points: &[Point2D]) -> Result<String, CurveFileError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(CurveFileError::NonFiniteCoordinate { index });
    }

    let pairs: Vec<[f64; 2]> = points.iter().map(|p| p.to_array()).collect();
    serde_json::to_string(&pairs).map_err(CurveFileError::Encode)
}
