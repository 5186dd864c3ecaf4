//! Indexed triangle geometry for scene entries

use crate::buffer::{AccessorIndex, BufferBuilder};
use glam::{Mat4, Vec3};

/// One indexed triangle list with an optional material slot.
///
/// Optional attribute streams are either absent or cover every vertex;
/// `Scene` validates that before export.
#[derive(Debug, Clone, Default)]
pub struct Primitive {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex normals
    pub normals: Option<Vec<[f32; 3]>>,
    /// Per-vertex texture coordinates (top-left origin)
    pub uvs: Option<Vec<[f32; 2]>>,
    /// Per-vertex RGBA colors
    pub colors: Option<Vec<[f32; 4]>>,
    /// Triangle indices into the vertex streams
    pub indices: Vec<u32>,
    /// Index into the scene material table
    pub material: Option<usize>,
}

impl Primitive {
    /// Create a primitive from positions and triangle indices
    pub fn new(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            ..Default::default()
        }
    }

    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        self.normals = Some(normals);
        self
    }

    pub fn with_uvs(mut self, uvs: Vec<[f32; 2]>) -> Self {
        self.uvs = Some(uvs);
        self
    }

    pub fn with_colors(mut self, colors: Vec<[f32; 4]>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_material(mut self, material: usize) -> Self {
        self.material = Some(material);
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Pack the attribute streams into the buffer, returning the accessor set
    pub fn pack(&self, buffer: &mut BufferBuilder) -> PrimitiveAccessors {
        PrimitiveAccessors {
            positions: buffer.pack_positions(&self.positions),
            normals: self.normals.as_deref().map(|n| buffer.pack_vec3(n)),
            uvs: self.uvs.as_deref().map(|uv| buffer.pack_vec2(uv)),
            colors: self.colors.as_deref().map(|c| buffer.pack_vec4(c)),
            indices: buffer.pack_indices_u32(&self.indices),
            material: self.material,
        }
    }
}

/// Accessor indices for one packed primitive
#[derive(Debug, Clone)]
pub struct PrimitiveAccessors {
    pub positions: AccessorIndex,
    pub normals: Option<AccessorIndex>,
    pub uvs: Option<AccessorIndex>,
    pub colors: Option<AccessorIndex>,
    pub indices: AccessorIndex,
    pub material: Option<usize>,
}

/// Geometry for one scene entry, one primitive per material group
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub primitives: Vec<Primitive>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a single primitive
    pub fn from_primitive(primitive: Primitive) -> Self {
        Self {
            primitives: vec![primitive],
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// True when no primitive carries any vertices
    pub fn is_empty(&self) -> bool {
        self.primitives.iter().all(|p| p.positions.is_empty())
    }

    pub fn vertex_count(&self) -> usize {
        self.primitives.iter().map(Primitive::vertex_count).sum()
    }

    /// Transform positions by `matrix` and normals by its inverse transpose
    pub fn apply_transform(&mut self, matrix: &Mat4) {
        let normal_matrix = matrix.inverse().transpose();

        for primitive in &mut self.primitives {
            for pos in &mut primitive.positions {
                let transformed = matrix.transform_point3(Vec3::from(*pos));
                *pos = [transformed.x, transformed.y, transformed.z];
            }

            if let Some(normals) = &mut primitive.normals {
                for norm in normals.iter_mut() {
                    let transformed = normal_matrix
                        .transform_vector3(Vec3::from(*norm))
                        .normalize();
                    *norm = [transformed.x, transformed.y, transformed.z];
                }
            }
        }
    }
}
