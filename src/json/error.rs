use thiserror::Error;

/// Fehler beim Lesen oder Schreiben einer Kurvendatei.
#[derive(Error, Debug)]
pub enum CurveFileError {
    /// Eingabe ist kein JSON-Array aus Zweier-Arrays von Zahlen
    #[error("ungültige Kurvendatei (erwartet [[x, y], ...]): {0}")]
    MalformedData(#[source] serde_json::Error),

    /// JSON kann NaN/∞ nicht darstellen
    #[error("Koordinate von Punkt {index} ist nicht endlich")]
    NonFiniteCoordinate { index: usize },

    #[error("JSON-Serialisierung fehlgeschlagen: {0}")]
    Encode(#[source] serde_json::Error),
}
