//! Extracted or placeholder geometry for an uploaded part file.

use serde::{Deserialize, Serialize};

/// Volume assumed for uploads whose format does not support exact parsing.
///
/// Keeps the quote computable for every accepted file format.
pub const FALLBACK_VOLUME_MM3: f64 = 1000.0;

/// Dimensions and volume estimate for an uploaded part.
///
/// Populated by parsing the uploaded mesh when the format supports exact
/// parsing; otherwise the dimensions are unavailable and the volume falls
/// back to [`FALLBACK_VOLUME_MM3`].
///
/// The volume of an exactly-parsed mesh is the axis-aligned bounding-box
/// volume, a deliberate over-estimate used for quoting rather than an
/// enclosed-volume integral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FileGeometry {
    /// Bounding-box extent along X, in mm. `None` when unavailable.
    pub width_mm: Option<f64>,
    /// Bounding-box extent along Y, in mm. `None` when unavailable.
    pub height_mm: Option<f64>,
    /// Bounding-box extent along Z, in mm. `None` when unavailable.
    pub depth_mm: Option<f64>,
    /// Estimated part volume in mm³. Always set.
    pub volume_estimate_mm3: f64,
}

impl FileGeometry {
    /// Geometry derived from an exactly-parsed mesh bounding box.
    ///
    /// The volume estimate is `width × height × depth`.
    pub fn exact(width_mm: f64, height_mm: f64, depth_mm: f64) -> Self {
        Self {
            width_mm: Some(width_mm),
            height_mm: Some(height_mm),
            depth_mm: Some(depth_mm),
            volume_estimate_mm3: width_mm * height_mm * depth_mm,
        }
    }

    /// Placeholder geometry for formats without exact parsing.
    pub fn placeholder() -> Self {
        Self {
            width_mm: None,
            height_mm: None,
            depth_mm: None,
            volume_estimate_mm3: FALLBACK_VOLUME_MM3,
        }
    }

    /// Whether the dimensions were derived from an exactly-parsed mesh.
    pub fn is_exact(&self) -> bool {
        self.width_mm.is_some() && self.height_mm.is_some() && self.depth_mm.is_some()
    }

    /// Format a single dimension for display (`"12.34 mm"` or `"N/A"`).
    pub fn format_dimension(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{v:.2} mm"),
            None => "N/A".to_string(),
        }
    }
}
