//! # Quad Emission
//!
//! Every surface in a maze mesh is a unit quad moved into place by a
//! translation, rotation and non-uniform scale. The corner order, UV layout
//! and triangle winding below are what downstream face culling relies on.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use crate::error::MeshError;
use crate::mesh::{MeshData, Submesh, VERTICES_PER_QUAD};

/// Corners of the canonical unit quad, centered on the origin in the local XY
/// plane, in emission order.
pub const QUAD_CORNERS: [Vec3; 4] = [
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(-0.5, 0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
];

/// UVs assigned to [`QUAD_CORNERS`], index for index.
pub const QUAD_UVS: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, 0.0),
];

/// Triangle offsets relative to the quad's first vertex.
pub const QUAD_TRIANGLES: [u32; 6] = [2, 1, 0, 3, 2, 0];

/// Placement of one quad: scale, then rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl QuadTransform {
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Quad whose local +Z axis points along `forward`.
    pub fn facing(translation: Vec3, forward: Vec3, scale: Vec3) -> Self {
        Self::new(translation, look_rotation(forward), scale)
    }

    /// Affine matrix for this transform.
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Rotation taking local +Z to `forward` while keeping local +Y as close to
/// world up as possible.
///
/// When `forward` is vertical there is no unique answer; the result is then a
/// pure pitch about X, so local +Y ends up on -Z when looking up and on +Z when
/// looking down. A zero vector yields the identity.
///
/// # Example
///
/// ```rust
/// use maze_mesh::look_rotation;
/// use glam::Vec3;
///
/// let up = look_rotation(Vec3::Y) * Vec3::Z;
/// assert!(up.abs_diff_eq(Vec3::Y, 1e-6));
/// ```
pub fn look_rotation(forward: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let right = Vec3::Y.cross(forward);
    if right.length_squared() < f32::EPSILON {
        return Quat::from_rotation_x(-forward.y.signum() * FRAC_PI_2);
    }
    let right = right.normalize();
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// First vertex index of a quad appended after `vertex_count` vertices, if all
/// four of its indices fit in a `u32`.
pub(crate) fn quad_base(vertex_count: usize) -> Result<u32, MeshError> {
    let count = vertex_count.saturating_add(VERTICES_PER_QUAD);
    u32::try_from(count)
        .map(|end| end - VERTICES_PER_QUAD as u32)
        .map_err(|_| MeshError::TooManyVertices {
            count,
            max: u32::MAX as usize,
        })
}

impl MeshData {
    /// Appends one quad to the given submesh and returns its first vertex
    /// index.
    ///
    /// Pushes four transformed corners, their four UVs, and the triangles
    /// `{base+2, base+1, base}` and `{base+3, base+2, base}`.
    ///
    /// # Errors
    ///
    /// [`MeshError::TooManyVertices`] when the new corners could not be
    /// addressed by `u32` indices. The mesh is left untouched.
    pub fn add_quad(
        &mut self,
        transform: &QuadTransform,
        submesh: Submesh,
    ) -> Result<u32, MeshError> {
        let base = quad_base(self.vertices.len())?;
        let matrix = transform.to_matrix();

        self.vertices
            .extend(QUAD_CORNERS.iter().map(|&corner| matrix.transform_point3(corner)));
        self.uvs.extend_from_slice(&QUAD_UVS);

        let triangles = match submesh {
            Submesh::FloorAndCeiling => &mut self.floor_triangles,
            Submesh::Walls => &mut self.wall_triangles,
        };
        triangles.extend(QUAD_TRIANGLES.iter().map(|&offset| base + offset));

        Ok(base)
    }
}
