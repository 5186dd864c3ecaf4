//! Binary buffer packing with automatic alignment and accessor creation

use crate::utils::{align_buffer, compute_bounds};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Builder for the single GLB binary buffer
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl BufferBuilder {
    /// Create a new empty buffer builder
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            views: Vec::new(),
            accessors: Vec::new(),
        }
    }

    /// Get the binary buffer data
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the buffer views
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// Get the accessors
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Get the current accessor count
    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// Pack vertex positions as VEC3/F32 with the min/max bounds glTF requires
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        self.pack(
            bytemuck::cast_slice(positions),
            positions.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            json::buffer::Target::ArrayBuffer,
            Some(compute_bounds(positions)),
        )
    }

    /// Pack VEC3/F32 data (normals)
    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        self.pack(
            bytemuck::cast_slice(data),
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            json::buffer::Target::ArrayBuffer,
            None,
        )
    }

    /// Pack VEC2/F32 data (texture coordinates)
    pub fn pack_vec2(&mut self, data: &[[f32; 2]]) -> AccessorIndex {
        self.pack(
            bytemuck::cast_slice(data),
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec2,
            json::buffer::Target::ArrayBuffer,
            None,
        )
    }

    /// Pack VEC4/F32 data (vertex colors)
    pub fn pack_vec4(&mut self, data: &[[f32; 4]]) -> AccessorIndex {
        self.pack(
            bytemuck::cast_slice(data),
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec4,
            json::buffer::Target::ArrayBuffer,
            None,
        )
    }

    /// Pack u32 triangle indices as SCALAR/U32
    pub fn pack_indices_u32(&mut self, indices: &[u32]) -> AccessorIndex {
        self.pack(
            bytemuck::cast_slice(indices),
            indices.len(),
            json::accessor::ComponentType::U32,
            json::accessor::Type::Scalar,
            json::buffer::Target::ElementArrayBuffer,
            None,
        )
    }

    /// Append `bytes` as one buffer view plus one accessor describing it
    fn pack(
        &mut self,
        bytes: &[u8],
        count: usize,
        component_type: json::accessor::ComponentType,
        type_: json::accessor::Type,
        target: json::buffer::Target,
        bounds: Option<([f32; 3], [f32; 3])>,
    ) -> AccessorIndex {
        let offset = self.buffer.len();
        self.buffer.extend_from_slice(bytes);

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: bytes.len().into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        });

        let (min, max) = match bounds {
            Some((min, max)) => (
                Some(json::Value::Array(
                    min.into_iter().map(json::Value::from).collect(),
                )),
                Some(json::Value::Array(
                    max.into_iter().map(json::Value::from).collect(),
                )),
            ),
            None => (None, None),
        };

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(json::Accessor {
            buffer_view: Some(json::Index::new(self.views.len() as u32 - 1)),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component_type)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });

        align_buffer(&mut self.buffer);
        AccessorIndex(accessor_idx)
    }
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_positions_with_bounds() {
        let mut builder = BufferBuilder::new();
        let positions = [[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]];
        let idx = builder.pack_positions(&positions);

        assert_eq!(idx, AccessorIndex(0));
        assert_eq!(builder.accessor_count(), 1);
        assert_eq!(builder.data().len(), 24);

        let accessor = &builder.accessors()[0];
        assert!(accessor.min.is_some());
        assert!(accessor.max.is_some());
    }

    #[test]
    fn test_pack_streams_sequentially() {
        let mut builder = BufferBuilder::new();
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]];
        let normals = [[0.0, 0.0, 1.0]; 3];
        let indices = [0u32, 1, 2];

        let pos = builder.pack_positions(&positions);
        let norm = builder.pack_vec3(&normals);
        let ind = builder.pack_indices_u32(&indices);

        assert_eq!((pos, norm, ind), (AccessorIndex(0), AccessorIndex(1), AccessorIndex(2)));
        assert_eq!(builder.views().len(), 3);
        // 36 + 36 + 12 bytes, every stream already 4-byte aligned
        assert_eq!(builder.data().len(), 84);
        assert!(builder.accessors()[1].min.is_none());
    }

    #[test]
    fn test_pack_vec2_byte_length() {
        let mut builder = BufferBuilder::new();
        let uvs = [[0.0, 0.0], [1.0, 1.0], [0.5, 0.5]];
        builder.pack_vec2(&uvs);
        assert_eq!(builder.data().len(), 24);
    }
}
