//! Scene aggregation: named mesh entries and a merged material table

use crate::buffer::BufferBuilder;
use crate::document::GltfBuilder;
use crate::error::SceneError;
use crate::material::{Material, MaterialKey};
use crate::mesh::MeshData;
use crate::utils::write_glb;
use hashbrown::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Generator string stamped into exported documents
const GENERATOR: &str = concat!("glb-scene ", env!("CARGO_PKG_VERSION"));

struct Entry {
    name: String,
    mesh: MeshData,
}

/// A collection of named meshes exported as one GLB.
///
/// Every entry becomes one glTF mesh plus one root node carrying its name.
/// Entry names are unique within a scene; materials are merged so identical
/// definitions from different sources share one table slot.
#[derive(Default)]
pub struct Scene {
    entries: Vec<Entry>,
    names: HashSet<String>,
    materials: Vec<Material>,
    material_index: HashMap<MaterialKey, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mesh entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the entries, in insertion order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Materials in table order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Insert a mesh under `name`, appending `_1`, `_2`, ... on collision.
    ///
    /// Returns the name actually used.
    pub fn add_mesh(&mut self, name: &str, mesh: MeshData) -> String {
        let unique = self.unique_name(name);
        self.names.insert(unique.clone());
        self.entries.push(Entry {
            name: unique.clone(),
            mesh,
        });
        unique
    }

    fn unique_name(&self, name: &str) -> String {
        if !self.names.contains(name) {
            return name.to_string();
        }
        let mut counter = 1usize;
        loop {
            let candidate = format!("{name}_{counter}");
            if !self.names.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Insert a material, merging exact duplicates. Returns the table index.
    pub fn add_material(&mut self, material: Material) -> usize {
        let key = material.key();
        if let Some(&index) = self.material_index.get(&key) {
            return index;
        }
        let index = self.materials.len();
        self.materials.push(material);
        self.material_index.insert(key, index);
        index
    }

    fn validate(&self) -> Result<(), SceneError> {
        if self.entries.is_empty() {
            return Err(SceneError::EmptyScene);
        }

        for entry in &self.entries {
            if entry.mesh.primitives.is_empty() {
                return Err(SceneError::EmptyMesh(entry.name.clone()));
            }

            for primitive in &entry.mesh.primitives {
                let vertices = primitive.positions.len();
                if vertices == 0 {
                    return Err(SceneError::EmptyPrimitive(entry.name.clone()));
                }
                if primitive.indices.len() % 3 != 0 {
                    return Err(SceneError::IndexCount {
                        mesh: entry.name.clone(),
                        count: primitive.indices.len(),
                    });
                }

                for (attribute, len) in [
                    ("normal", primitive.normals.as_ref().map(Vec::len)),
                    ("uv", primitive.uvs.as_ref().map(Vec::len)),
                    ("color", primitive.colors.as_ref().map(Vec::len)),
                ] {
                    if let Some(got) = len {
                        if got != vertices {
                            return Err(SceneError::AttributeLength {
                                mesh: entry.name.clone(),
                                attribute,
                                got,
                                expected: vertices,
                            });
                        }
                    }
                }

                if let Some(&index) = primitive.indices.iter().max() {
                    if index as usize >= vertices {
                        return Err(SceneError::IndexOutOfBounds {
                            mesh: entry.name.clone(),
                            index,
                            vertices,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Serialize the scene as a GLB stream.
    ///
    /// The document gets one default scene rooting every entry node.
    pub fn to_glb<W: Write>(&self, w: &mut W) -> Result<(), SceneError> {
        self.validate()?;

        let mut buffer = BufferBuilder::new();
        let mut document = GltfBuilder::new().add_materials(&self.materials);

        let mut roots = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            let accessors: Vec<_> = entry
                .mesh
                .primitives
                .iter()
                .map(|p| p.pack(&mut buffer))
                .collect();
            document = document
                .add_mesh(&entry.name, &accessors)
                .add_mesh_node(&entry.name, index as u32);
            roots.push(index as u32);
        }

        let root = document
            .buffer_byte_length(buffer.data().len() as u64)
            .add_scene("Scene", &roots)
            .build(buffer.views(), buffer.accessors(), GENERATOR);

        write_glb(w, &root, buffer.data())
    }

    /// Write the scene to a GLB file, replacing any existing file
    pub fn export(&self, path: &Path) -> Result<(), SceneError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_glb(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
