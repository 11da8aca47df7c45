//! Pixelpuffer eines Canvas-Screenshots für den PNG-Export.

use std::sync::Arc;

/// RGBA8-Bild der Zeichenfläche, zeilenweise von oben nach unten.
#[derive(Debug, Clone)]
pub struct CanvasImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` Bytes (RGBA, nicht vormultipliziert)
    pub rgba: Arc<Vec<u8>>,
}

impl CanvasImage {
    /// Erstellt ein Bild, sofern die Puffergröße zu den Abmessungen passt.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if rgba.len() != expected || width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba: Arc::new(rgba),
        })
    }
}
