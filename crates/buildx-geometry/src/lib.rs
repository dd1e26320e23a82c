//! # buildx-geometry
//!
//! Geometry extraction for uploaded part files. STL files (binary or
//! ASCII) are parsed into a triangle soup and reduced to an axis-aligned
//! bounding box; every other accepted format takes a placeholder path so
//! that quoting never depends on exact parsing.
//!
//! The volume estimate is the bounding-box volume — a deliberate
//! over-estimate used for quoting, not an enclosed-volume integral.

pub mod error;
pub mod extract;
pub mod formats;
pub mod mesh;
pub mod stl;

pub use error::GeometryError;
pub use extract::extract_geometry;
pub use formats::MeshFormatCatalog;
pub use mesh::{Aabb, Point3, Triangle, TriangleMesh};
pub use stl::parse_stl;
