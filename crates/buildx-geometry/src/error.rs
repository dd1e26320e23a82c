//! Geometry extraction error type.
//!
//! Parse failures are consolidated into a single `GeometryError` enum that
//! maps cleanly to `buildx_core::error::AppError`. Callers recover from
//! every variant by falling back to placeholder geometry.

use buildx_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Errors produced while parsing an uploaded mesh file.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The file is too small to carry a valid mesh.
    #[error("file too small to be a valid STL ({len} bytes)")]
    TooShort {
        /// Number of bytes received.
        len: usize,
    },

    /// A binary STL declared more facets than the file contains.
    #[error("binary STL truncated: header declares {expected} facets, file holds {got}")]
    TruncatedFacets {
        /// Facet count from the header.
        expected: u32,
        /// Complete facets actually present.
        got: u32,
    },

    /// An ASCII STL line could not be parsed.
    #[error("malformed ASCII STL at line {line}: {reason}")]
    MalformedAscii {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// The mesh parsed but contains no triangles.
    #[error("mesh contains no triangles")]
    EmptyMesh,
}

impl From<GeometryError> for AppError {
    fn from(err: GeometryError) -> Self {
        AppError::with_source(ErrorKind::Geometry, err.to_string(), err)
    }
}
