//! glTF document construction

use crate::material::Material;
use crate::mesh::PrimitiveAccessors;
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Builder for the complete glTF document
pub struct GltfBuilder {
    nodes: Vec<json::Node>,
    meshes: Vec<json::Mesh>,
    materials: Vec<json::Material>,
    scenes: Vec<json::Scene>,
    buffer_byte_length: u64,
}

impl GltfBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            meshes: Vec::new(),
            materials: Vec::new(),
            scenes: Vec::new(),
            buffer_byte_length: 0,
        }
    }

    /// Set buffer byte length (required before building)
    pub fn buffer_byte_length(mut self, length: u64) -> Self {
        self.buffer_byte_length = length;
        self
    }

    /// Append the material table; list order defines the material indices
    pub fn add_materials(mut self, materials: &[Material]) -> Self {
        self.materials
            .extend(materials.iter().map(Material::to_json));
        self
    }

    /// Add a named mesh built from packed primitives
    pub fn add_mesh(mut self, name: &str, primitives: &[PrimitiveAccessors]) -> Self {
        let primitives = primitives
            .iter()
            .map(|accessors| {
                let mut attributes = BTreeMap::new();
                attributes.insert(
                    Valid(json::mesh::Semantic::Positions),
                    accessors.positions.as_json_index(),
                );

                if let Some(normals) = accessors.normals {
                    attributes.insert(
                        Valid(json::mesh::Semantic::Normals),
                        normals.as_json_index(),
                    );
                }

                if let Some(uvs) = accessors.uvs {
                    attributes.insert(
                        Valid(json::mesh::Semantic::TexCoords(0)),
                        uvs.as_json_index(),
                    );
                }

                if let Some(colors) = accessors.colors {
                    attributes.insert(
                        Valid(json::mesh::Semantic::Colors(0)),
                        colors.as_json_index(),
                    );
                }

                json::mesh::Primitive {
                    attributes,
                    extensions: Default::default(),
                    extras: Default::default(),
                    indices: Some(accessors.indices.as_json_index()),
                    material: accessors.material.map(|m| json::Index::new(m as u32)),
                    mode: Valid(json::mesh::Mode::Triangles),
                    targets: None,
                }
            })
            .collect();

        self.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives,
            weights: None,
        });

        self
    }

    /// Add a named node referencing a mesh, with an identity transform
    pub fn add_mesh_node(mut self, name: &str, mesh_index: u32) -> Self {
        self.nodes.push(json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh: Some(json::Index::new(mesh_index)),
            name: Some(name.to_string()),
            rotation: None,
            scale: None,
            skin: None,
            translation: None,
            weights: None,
        });
        self
    }

    /// Add a scene; the first scene added becomes the document default
    pub fn add_scene(mut self, name: &str, root_nodes: &[u32]) -> Self {
        self.scenes.push(json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            nodes: root_nodes.iter().map(|n| json::Index::new(*n)).collect(),
        });
        self
    }

    /// Build the final glTF Root (requires buffer views and accessors from BufferBuilder)
    pub fn build(
        self,
        buffer_views: &[json::buffer::View],
        accessors: &[json::Accessor],
        generator: &str,
    ) -> json::Root {
        let buffers = vec![json::Buffer {
            byte_length: self.buffer_byte_length.into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: None,
        }];

        json::Root {
            accessors: accessors.to_vec(),
            animations: Vec::new(),
            asset: json::Asset {
                copyright: None,
                extensions: Default::default(),
                extras: Default::default(),
                generator: Some(generator.to_string()),
                min_version: None,
                version: "2.0".to_string(),
            },
            buffers,
            buffer_views: buffer_views.to_vec(),
            cameras: Vec::new(),
            extensions: Default::default(),
            extensions_required: Vec::new(),
            extensions_used: Vec::new(),
            extras: Default::default(),
            images: Vec::new(),
            materials: self.materials,
            meshes: self.meshes,
            nodes: self.nodes,
            samplers: Vec::new(),
            scene: if self.scenes.is_empty() {
                None
            } else {
                Some(json::Index::new(0))
            },
            scenes: self.scenes,
            skins: Vec::new(),
            textures: Vec::new(),
        }
    }
}

impl Default for GltfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
