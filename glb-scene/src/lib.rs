//! GLB scene assembly for batch mesh conversion tools
//!
//! This library builds a single binary glTF file out of many independently
//! loaded meshes:
//! - Scene: named mesh entries plus a merged material table
//! - MeshData/Primitive: indexed triangle geometry per entry
//! - BufferBuilder: pack binary data with automatic alignment
//! - GltfBuilder: top-level glTF document construction
//! - write_glb: GLB container framing
//!
//! # Example
//!
//! ```no_run
//! use glb_scene::{MeshData, Primitive, Scene};
//!
//! let mut scene = Scene::new();
//! let triangle = Primitive::new(
//!     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]],
//!     vec![0, 1, 2],
//! );
//! scene.add_mesh("triangle", MeshData::from_primitive(triangle));
//! scene.export("triangle.glb".as_ref()).unwrap();
//! ```

pub mod buffer;
pub mod document;
pub mod error;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod utils;

pub use buffer::{AccessorIndex, BufferBuilder};
pub use document::GltfBuilder;
pub use error::SceneError;
pub use material::Material;
pub use mesh::{MeshData, Primitive, PrimitiveAccessors};
pub use scene::Scene;
pub use utils::{align_buffer, compute_bounds, write_glb};

// Re-export commonly used gltf-json types
pub use gltf_json as json;
pub use gltf_json::validation::Checked::Valid;
