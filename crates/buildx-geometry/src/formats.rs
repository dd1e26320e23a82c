//! Format catalog implementation.

use buildx_core::config::upload::UploadConfig;
use buildx_core::traits::FormatCatalog;

/// Extensions with exact mesh parsing support.
const EXACT_EXTENSIONS: [&str; 1] = ["stl"];

/// The portal's file format catalog.
///
/// Acceptance comes from the upload configuration; exact-parse support is a
/// property of this crate (only STL today). Every accepted extension
/// without exact parsing quotes against placeholder geometry.
#[derive(Debug, Clone)]
pub struct MeshFormatCatalog {
    accepted: Vec<String>,
}

impl MeshFormatCatalog {
    /// Build the catalog from the upload configuration.
    pub fn new(upload: &UploadConfig) -> Self {
        Self {
            accepted: upload.accepted_extensions.clone(),
        }
    }
}

impl Default for MeshFormatCatalog {
    fn default() -> Self {
        Self::new(&UploadConfig::default())
    }
}

impl FormatCatalog for MeshFormatCatalog {
    fn accepts(&self, extension: &str) -> bool {
        self.accepted.iter().any(|e| e == extension)
    }

    fn exact_geometry(&self, extension: &str) -> bool {
        self.accepts(extension) && EXACT_EXTENSIONS.contains(&extension)
    }
}
