//! # Mesh Data Structure
//!
//! Vertex positions, a parallel UV list, and two triangle lists (one per
//! material). Built wholesale by [`crate::build`]; read-only afterwards.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Number of vertices each quad contributes.
pub const VERTICES_PER_QUAD: usize = 4;

/// Number of triangle indices each quad contributes.
pub const INDICES_PER_QUAD: usize = 6;

/// Triangle list selector. Each submesh maps to one material slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Submesh {
    /// Floor and ceiling surfaces (material slot 0).
    FloorAndCeiling,
    /// Wall surfaces (material slot 1).
    Walls,
}

impl Submesh {
    /// Both submeshes in material slot order.
    pub const ALL: [Submesh; 2] = [Submesh::FloorAndCeiling, Submesh::Walls];

    /// Material slot a renderer should bind for this submesh.
    #[inline]
    pub fn material_slot(self) -> usize {
        match self {
            Submesh::FloorAndCeiling => 0,
            Submesh::Walls => 1,
        }
    }
}

/// Maze mesh with UVs and two submeshes.
///
/// # Example
///
/// ```rust
/// use maze_mesh::{MeshData, QuadTransform, Submesh};
/// use glam::Vec3;
///
/// let mut mesh = MeshData::new();
/// mesh.add_quad(&QuadTransform::facing(Vec3::ZERO, Vec3::Y, Vec3::ONE), Submesh::FloorAndCeiling)
///     .unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangles(Submesh::FloorAndCeiling), &[2, 1, 0, 3, 2, 0]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub(crate) vertices: Vec<Vec3>,
    pub(crate) uvs: Vec<Vec2>,
    pub(crate) floor_triangles: Vec<u32>,
    pub(crate) wall_triangles: Vec<u32>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with room for the given number of quads per submesh.
    pub fn with_capacity(floor_quads: usize, wall_quads: usize) -> Self {
        let quads = floor_quads + wall_quads;
        Self {
            vertices: Vec::with_capacity(quads * VERTICES_PER_QUAD),
            uvs: Vec::with_capacity(quads * VERTICES_PER_QUAD),
            floor_triangles: Vec::with_capacity(floor_quads * INDICES_PER_QUAD),
            wall_triangles: Vec::with_capacity(wall_quads * INDICES_PER_QUAD),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if no quad has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// UV coordinates, one per vertex.
    #[inline]
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Flat triangle index list of one submesh.
    #[inline]
    pub fn triangles(&self, submesh: Submesh) -> &[u32] {
        match submesh {
            Submesh::FloorAndCeiling => &self.floor_triangles,
            Submesh::Walls => &self.wall_triangles,
        }
    }

    #[inline]
    pub fn floor_triangles(&self) -> &[u32] {
        &self.floor_triangles
    }

    #[inline]
    pub fn wall_triangles(&self) -> &[u32] {
        &self.wall_triangles
    }

    /// Number of triangles in one submesh.
    #[inline]
    pub fn triangle_count(&self, submesh: Submesh) -> usize {
        self.triangles(submesh).len() / 3
    }

    /// Number of quads in one submesh.
    #[inline]
    pub fn quad_count(&self, submesh: Submesh) -> usize {
        self.triangles(submesh).len() / INDICES_PER_QUAD
    }

    /// Positions as `[x, y, z, x, y, z, ...]` for buffer upload.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// UVs as `[u, v, u, v, ...]` for buffer upload.
    pub fn uvs_flat(&self) -> Vec<f32> {
        self.uvs.iter().flat_map(|uv| uv.to_array()).collect()
    }

    /// Axis-aligned bounds of all vertices, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }

    /// Checks the structural invariants:
    /// - UVs parallel to vertices
    /// - vertices come in whole quads
    /// - each triangle list comes in whole quads
    /// - every index addresses an existing vertex
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.uvs.len() != self.vertices.len() {
            return Err(MeshError::validation(format!(
                "{} uvs for {} vertices",
                self.uvs.len(),
                self.vertices.len()
            )));
        }
        if self.vertices.len() % VERTICES_PER_QUAD != 0 {
            return Err(MeshError::validation(format!(
                "vertex count {} is not a multiple of {VERTICES_PER_QUAD}",
                self.vertices.len()
            )));
        }

        for submesh in Submesh::ALL {
            let triangles = self.triangles(submesh);
            if triangles.len() % INDICES_PER_QUAD != 0 {
                return Err(MeshError::validation(format!(
                    "{submesh:?} has {} indices, not a multiple of {INDICES_PER_QUAD}",
                    triangles.len()
                )));
            }
            if let Some(&bad) = triangles.iter().find(|&&i| i as usize >= self.vertices.len()) {
                return Err(MeshError::validation(format!(
                    "{submesh:?} index {bad} out of range for {} vertices",
                    self.vertices.len()
                )));
            }
        }

        let quads = self.quad_count(Submesh::FloorAndCeiling) + self.quad_count(Submesh::Walls);
        if quads * VERTICES_PER_QUAD != self.vertices.len() {
            return Err(MeshError::validation(format!(
                "{quads} quads indexed but {} vertices emitted",
                self.vertices.len()
            )));
        }

        Ok(())
    }
}
