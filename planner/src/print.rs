//! Page geometry for PDF export.
//!
//! The host captures the visible workspace at `scale` times its CSS size and
//! embeds the image in a single page of exactly the captured pixel size.

#[cfg(test)]
#[path = "print_test.rs"]
mod print_test;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Capture size and page layout for one PDF page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrintLayout {
    /// Captured image width in pixels.
    pub width_px: f64,
    /// Captured image height in pixels.
    pub height_px: f64,
    pub orientation: Orientation,
    /// Suggested file name for the download.
    pub file_name: &'static str,
}

/// Lay out a page for a viewport of `viewport_w` x `viewport_h` CSS pixels.
///
/// Returns `None` for an empty viewport.
#[must_use]
pub fn layout(viewport_w: f64, viewport_h: f64, scale: f64) -> Option<PrintLayout> {
    if !(viewport_w > 0.0 && viewport_h > 0.0 && scale > 0.0) {
        return None;
    }
    let width_px = (viewport_w * scale).round();
    let height_px = (viewport_h * scale).round();
    let orientation = if width_px > height_px { Orientation::Landscape } else { Orientation::Portrait };
    Some(PrintLayout { width_px, height_px, orientation, file_name: "seating-plan.pdf" })
}
