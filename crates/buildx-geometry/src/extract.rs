//! Derive [`FileGeometry`] from uploaded file bytes.

use tracing::debug;

use buildx_core::traits::FormatCatalog;
use buildx_core::types::FileGeometry;

use crate::error::GeometryError;
use crate::stl::parse_stl;

/// Extract geometry for an uploaded file.
///
/// Exact formats are parsed into a mesh and reduced to their axis-aligned
/// bounding box; the volume estimate is the box volume, a deliberate
/// over-estimate for quoting. Every other accepted format yields
/// placeholder geometry with the fallback volume.
///
/// # Errors
///
/// Fails only when an exact-format file is malformed. Callers are expected
/// to recover by falling back to [`FileGeometry::placeholder`].
pub fn extract_geometry(
    bytes: &[u8],
    file_name: &str,
    catalog: &dyn FormatCatalog,
) -> Result<FileGeometry, GeometryError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !catalog.exact_geometry(&extension) {
        debug!(file_name, %extension, "no exact parser, using placeholder geometry");
        return Ok(FileGeometry::placeholder());
    }

    let mesh = parse_stl(bytes)?;
    let bbox = mesh.bounding_box().ok_or(GeometryError::EmptyMesh)?;
    let (width, height, depth) = bbox.extents();
    debug!(
        file_name,
        triangles = mesh.len(),
        width,
        height,
        depth,
        "extracted bounding-box geometry"
    );
    Ok(FileGeometry::exact(width, height, depth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::MeshFormatCatalog;
    use crate::stl::binary_stl;

    #[test]
    fn test_stl_upload_yields_exact_geometry() {
        let catalog = MeshFormatCatalog::default();
        let bytes = binary_stl(&[[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 20.0, 40.0]]]);
        let geo = extract_geometry(&bytes, "bracket.STL", &catalog).unwrap();
        assert!(geo.is_exact());
        assert_eq!(geo.width_mm, Some(10.0));
        assert_eq!(geo.height_mm, Some(20.0));
        assert_eq!(geo.depth_mm, Some(40.0));
        assert_eq!(geo.volume_estimate_mm3, 8000.0);
    }

    #[test]
    fn test_non_exact_format_yields_placeholder() {
        let catalog = MeshFormatCatalog::default();
        let geo = extract_geometry(b"not a mesh at all", "part.step", &catalog).unwrap();
        assert!(!geo.is_exact());
        assert_eq!(geo.volume_estimate_mm3, 1000.0);
    }

    #[test]
    fn test_malformed_stl_fails() {
        let catalog = MeshFormatCatalog::default();
        let err = extract_geometry(b"st", "part.stl", &catalog).unwrap_err();
        assert!(matches!(err, GeometryError::TooShort { .. }));
    }

    #[test]
    fn test_extensionless_name_yields_placeholder() {
        let catalog = MeshFormatCatalog::default();
        let geo = extract_geometry(b"???", "README", &catalog).unwrap();
        assert!(!geo.is_exact());
    }
}
