//! STL (Stereolithography) parsing from raw upload bytes.
//!
//! Supports both ASCII and binary STL formats.
//!
//! # Format Detection
//!
//! - ASCII files start with "solid" (after optional whitespace)
//! - Binary files have an 80-byte header followed by a facet count
//!
//! Some binary files put "solid" in the header too; a null byte in the
//! first 80 bytes disambiguates in favor of binary.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored, often contains file info)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```

use crate::error::GeometryError;
use crate::mesh::{Point3, Triangle, TriangleMesh};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Parse STL bytes into a triangle mesh.
///
/// Automatically detects ASCII vs binary format. The uploaded file arrives
/// as an in-memory byte buffer, so parsing never touches the filesystem.
pub fn parse_stl(bytes: &[u8]) -> Result<TriangleMesh, GeometryError> {
    if bytes.len() < 6 {
        return Err(GeometryError::TooShort { len: bytes.len() });
    }

    let head = &bytes[..bytes.len().min(HEADER_SIZE)];
    let head_str = String::from_utf8_lossy(head);
    if head_str.trim_start().starts_with("solid") && !head.contains(&0) {
        parse_ascii(bytes)
    } else {
        parse_binary(bytes)
    }
}

/// Parse a binary STL buffer.
fn parse_binary(bytes: &[u8]) -> Result<TriangleMesh, GeometryError> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(GeometryError::TooShort { len: bytes.len() });
    }

    let facet_count = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    let body = &bytes[HEADER_SIZE + 4..];
    let available = (body.len() / TRIANGLE_SIZE) as u32;
    if available < facet_count {
        return Err(GeometryError::TruncatedFacets {
            expected: facet_count,
            got: available,
        });
    }

    let mut mesh = TriangleMesh::with_capacity(facet_count as usize);
    for record in body.chunks_exact(TRIANGLE_SIZE).take(facet_count as usize) {
        // Skip the 12-byte normal; read the three vertices.
        let a = read_vertex(&record[12..24]);
        let b = read_vertex(&record[24..36]);
        let c = read_vertex(&record[36..48]);
        mesh.triangles.push(Triangle::new(a, b, c));
    }

    if mesh.is_empty() {
        return Err(GeometryError::EmptyMesh);
    }
    Ok(mesh)
}

/// Read a vertex from 12 bytes (3 little-endian f32s).
fn read_vertex(buf: &[u8]) -> Point3 {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Parse an ASCII STL buffer.
fn parse_ascii(bytes: &[u8]) -> Result<TriangleMesh, GeometryError> {
    let text = String::from_utf8_lossy(bytes);
    let mut mesh = TriangleMesh::new();
    let mut vertices_in_face: Vec<Point3> = Vec::with_capacity(3);
    let mut in_facet = false;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        match parts.next() {
            Some("solid") | Some("endsolid") | Some("outer") | Some("endloop") => {}
            Some("facet") => {
                if in_facet {
                    return Err(GeometryError::MalformedAscii {
                        line: line_no,
                        reason: "nested facet".to_string(),
                    });
                }
                in_facet = true;
                vertices_in_face.clear();
            }
            Some("endfacet") => {
                if vertices_in_face.len() != 3 {
                    return Err(GeometryError::MalformedAscii {
                        line: line_no,
                        reason: format!("facet has {} vertices", vertices_in_face.len()),
                    });
                }
                mesh.triangles.push(Triangle::new(
                    vertices_in_face[0],
                    vertices_in_face[1],
                    vertices_in_face[2],
                ));
                in_facet = false;
            }
            Some("vertex") => {
                let coords: Vec<f64> = parts
                    .map_while(|p| p.parse::<f64>().ok())
                    .collect();
                if coords.len() != 3 {
                    return Err(GeometryError::MalformedAscii {
                        line: line_no,
                        reason: "vertex needs three numeric coordinates".to_string(),
                    });
                }
                vertices_in_face.push(Point3::new(coords[0], coords[1], coords[2]));
            }
            Some(other) => {
                return Err(GeometryError::MalformedAscii {
                    line: line_no,
                    reason: format!("unexpected token `{other}`"),
                });
            }
            None => {}
        }
    }

    if mesh.is_empty() {
        return Err(GeometryError::EmptyMesh);
    }
    Ok(mesh)
}

/// Assemble a binary STL buffer from raw triangles. Test fixture builder.
#[cfg(test)]
pub(crate) fn binary_stl(triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut out = vec![0u8; HEADER_SIZE];
    out.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        out.extend_from_slice(&[0u8; 12]); // normal
        for vertex in tri {
            for coord in vertex {
                out.extend_from_slice(&coord.to_le_bytes());
            }
        }
        out.extend_from_slice(&[0u8; 2]); // attribute byte count
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASCII_TRIANGLE: &str = "\
solid part
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 10 0 0
      vertex 0 20 40
    endloop
  endfacet
endsolid part
";

    #[test]
    fn test_parse_binary_triangle() {
        let bytes = binary_stl(&[[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 20.0, 40.0]]]);
        let mesh = parse_stl(&bytes).unwrap();
        assert_eq!(mesh.len(), 1);
        let bbox = mesh.bounding_box().unwrap();
        assert_eq!(bbox.extents(), (10.0, 20.0, 40.0));
    }

    #[test]
    fn test_parse_ascii_triangle() {
        let mesh = parse_stl(ASCII_TRIANGLE.as_bytes()).unwrap();
        assert_eq!(mesh.len(), 1);
        let bbox = mesh.bounding_box().unwrap();
        assert_eq!(bbox.extents(), (10.0, 20.0, 40.0));
    }

    #[test]
    fn test_binary_with_solid_header_detected_as_binary() {
        let mut bytes = binary_stl(&[[[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]);
        bytes[..5].copy_from_slice(b"solid");
        let mesh = parse_stl(&bytes).unwrap();
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn test_truncated_binary_rejected() {
        let mut bytes = binary_stl(&[[[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]);
        // Claim a second facet that is not present.
        bytes[HEADER_SIZE..HEADER_SIZE + 4].copy_from_slice(&2u32.to_le_bytes());
        match parse_stl(&bytes) {
            Err(GeometryError::TruncatedFacets { expected: 2, got: 1 }) => {}
            other => panic!("expected truncation error, got {other:?}"),
        }
    }

    #[test]
    fn test_tiny_buffer_rejected() {
        assert!(matches!(
            parse_stl(b"stl"),
            Err(GeometryError::TooShort { len: 3 })
        ));
    }

    #[test]
    fn test_malformed_ascii_vertex_rejected() {
        let text = "solid p\nfacet normal 0 0 1\nouter loop\nvertex 0 zero 0\n";
        match parse_stl(text.as_bytes()) {
            Err(GeometryError::MalformedAscii { line: 4, .. }) => {}
            other => panic!("expected malformed line 4, got {other:?}"),
        }
    }

    #[test]
    fn test_ascii_facet_with_missing_vertex_rejected() {
        let text = "\
solid p
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
    endloop
  endfacet
endsolid p
";
        assert!(matches!(
            parse_stl(text.as_bytes()),
            Err(GeometryError::MalformedAscii { .. })
        ));
    }

    #[test]
    fn test_empty_solid_rejected() {
        let text = "solid p\nendsolid p\n";
        assert!(matches!(
            parse_stl(text.as_bytes()),
            Err(GeometryError::EmptyMesh)
        ));
    }
}
