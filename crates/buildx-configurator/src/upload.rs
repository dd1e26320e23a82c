//! Upload staging and the sequence-guarded parse step.
//!
//! Each upload is one asynchronous read-then-parse step. The wizard stamps
//! every upload with the next value of a monotonically increasing sequence
//! number; applying a parse result requires the matching number, so a
//! result that lands after the user re-uploaded or navigated away is
//! discarded (last-write-wins).

use std::sync::Arc;

use bytes::Bytes;
use tracing::warn;

use buildx_core::config::upload::UploadConfig;
use buildx_core::error::AppError;
use buildx_core::result::AppResult;
use buildx_core::traits::FormatCatalog;
use buildx_core::types::{FileGeometry, UploadedFile};
use buildx_geometry::extract_geometry;

/// An attached file staged on the wizard.
///
/// Geometry starts as the placeholder and is replaced when the parse step
/// for the matching sequence number completes.
#[derive(Debug, Clone)]
pub struct StagedUpload {
    /// File metadata.
    pub file: UploadedFile,
    /// Raw file bytes, held for the eventual intake submission.
    pub bytes: Bytes,
    /// Extracted or placeholder geometry.
    pub geometry: FileGeometry,
}

/// Handle for applying the parse result of one specific upload.
///
/// Issued by [`crate::Wizard::begin_upload`]; a ticket whose sequence
/// number is no longer current applies nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub(crate) seq: u64,
}

impl UploadTicket {
    /// The sequence number this ticket is bound to.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Validate an upload against the configured limits before any parsing.
pub(crate) fn validate_upload(config: &UploadConfig, file: &UploadedFile) -> AppResult<()> {
    if file.size_bytes > config.max_upload_size_bytes {
        return Err(AppError::validation(format!(
            "File exceeds maximum upload size of {} bytes",
            config.max_upload_size_bytes
        )));
    }
    let extension = file.extension().unwrap_or_default();
    if !config.accepts(&extension) {
        return Err(AppError::validation(format!(
            "Invalid file type. Supported formats: {}",
            config.accepted_extensions.join(", ")
        )));
    }
    Ok(())
}

/// Run the parse step for an upload on the blocking pool.
///
/// Parse failures are recovered locally: a malformed exact-format file (or
/// a lost blocking task) degrades to placeholder geometry so the wizard
/// can keep quoting.
pub(crate) async fn parse_geometry(
    formats: Arc<dyn FormatCatalog>,
    file_name: String,
    bytes: Bytes,
) -> FileGeometry {
    let task_name = file_name.clone();
    let parsed = tokio::task::spawn_blocking(move || {
        extract_geometry(&bytes, &task_name, formats.as_ref())
    })
    .await;

    match parsed {
        Ok(Ok(geometry)) => geometry,
        Ok(Err(err)) => {
            warn!(%file_name, error = %err, "geometry extraction failed, using placeholder");
            FileGeometry::placeholder()
        }
        Err(err) => {
            warn!(%file_name, error = %err, "geometry parse task failed, using placeholder");
            FileGeometry::placeholder()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildx_geometry::MeshFormatCatalog;

    #[test]
    fn test_oversized_upload_rejected() {
        let config = UploadConfig::default();
        let file = UploadedFile::new("big.stl", config.max_upload_size_bytes + 1);
        assert!(validate_upload(&config, &file).is_err());
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let config = UploadConfig::default();
        assert!(validate_upload(&config, &UploadedFile::new("run.exe", 10)).is_err());
        assert!(validate_upload(&config, &UploadedFile::new("noext", 10)).is_err());
        assert!(validate_upload(&config, &UploadedFile::new("part.stl", 10)).is_ok());
    }

    #[tokio::test]
    async fn test_malformed_stl_degrades_to_placeholder() {
        let formats: Arc<dyn FormatCatalog> = Arc::new(MeshFormatCatalog::default());
        let geometry = parse_geometry(
            formats,
            "part.stl".to_string(),
            Bytes::from_static(b"definitely not a mesh"),
        )
        .await;
        assert!(!geometry.is_exact());
        assert_eq!(geometry.volume_estimate_mm3, 1000.0);
    }
}
