//! Minimal triangle-soup mesh and bounding-box types.
//!
//! The configurator only consumes bounding-box extents, so the mesh keeps
//! no indexing, normals, or connectivity.

/// A point in 3D space, in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Create a point from coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A single mesh triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The three corner vertices.
    pub vertices: [Point3; 3],
}

impl Triangle {
    /// Create a triangle from its corners.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }
}

/// An unindexed triangle soup parsed from an uploaded file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// All triangles, in file order.
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with reserved capacity.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounding box over all vertices.
    ///
    /// Returns `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<Aabb> {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *vertices.next()?;
        let mut bbox = Aabb {
            min: first,
            max: first,
        };
        for v in vertices {
            bbox.min.x = bbox.min.x.min(v.x);
            bbox.min.y = bbox.min.y.min(v.y);
            bbox.min.z = bbox.min.z.min(v.z);
            bbox.max.x = bbox.max.x.max(v.x);
            bbox.max.y = bbox.max.y.max(v.y);
            bbox.max.z = bbox.max.z.max(v.z);
        }
        Some(bbox)
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// Box extents along X, Y, Z.
    pub fn extents(&self) -> (f64, f64, f64) {
        (
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        )
    }
}
