//! obj2glb library
//!
//! Combines directory trees of OBJ meshes into single GLB scenes. The
//! pipeline is exposed as a library for tests and tooling; the `obj2glb`
//! binary is a thin CLI over [`convert::combine_directory`].

pub mod convert;
pub mod mesh;
pub mod walk;

// Re-export main API
pub use convert::{CombineStats, combine_directory};
pub use mesh::{LoadedObj, load_obj, y_up_to_z_up};
pub use walk::find_obj_files;
