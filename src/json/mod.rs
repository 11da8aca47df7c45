//! JSON Import/Export für Kontrollpolygone.
//!
//! Format: ein einzelnes JSON-Array aus `[x, y]`-Paaren in Polygon-Reihenfolge,
//! ohne Versionierung oder Metadaten.

mod error;
pub mod parser;
pub mod writer;

pub use error::CurveFileError;
pub use parser::load_points;
pub use writer::save_points;
