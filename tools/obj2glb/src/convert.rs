//! The combine pipeline: discover, load, orient, aggregate, export

use anyhow::{Context, Result, bail};
use glb_scene::Scene;
use std::fs;
use std::path::Path;

use crate::mesh::{self, y_up_to_z_up};
use crate::walk;

/// Summary of one combine run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineStats {
    /// `.obj` files discovered under the input directory
    pub files_found: usize,
    /// Meshes loaded and added to the scene
    pub meshes_loaded: usize,
    /// Files skipped after a load failure
    pub files_skipped: usize,
}

/// Combine every OBJ under `input_dir` into a single GLB at `output_path`.
///
/// Files that fail to load are logged and skipped; the run only fails when
/// the input directory is unusable, nothing loads at all, or the export
/// itself fails. An existing file at `output_path` is overwritten.
pub fn combine_directory(input_dir: &Path, output_path: &Path) -> Result<CombineStats> {
    if !input_dir.exists() {
        bail!("Input folder {:?} does not exist", input_dir);
    }
    if !input_dir.is_dir() {
        bail!("{:?} is not a folder", input_dir);
    }

    let files = walk::find_obj_files(input_dir);
    if files.is_empty() {
        bail!("No .obj files found in {:?}", input_dir);
    }

    let rotation = y_up_to_z_up();
    let mut scene = Scene::new();
    let mut files_skipped = 0usize;

    for path in &files {
        let stem = path.file_stem().unwrap_or(path.as_os_str());
        let node_name = stem.to_string_lossy();
        tracing::info!("Loading {} as node '{}'", path.display(), node_name);

        let loaded = match mesh::load_obj(path) {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!("Error loading {}: {:#}", path.display(), err);
                files_skipped += 1;
                continue;
            }
        };

        // Remap file-local material slots onto the merged scene table
        let slots: Vec<usize> = loaded
            .materials
            .into_iter()
            .map(|material| scene.add_material(material))
            .collect();
        let mut mesh_data = loaded.mesh;
        for primitive in &mut mesh_data.primitives {
            if let Some(local) = primitive.material {
                primitive.material = Some(slots[local]);
            }
        }

        mesh_data.apply_transform(&rotation);

        let used = scene.add_mesh(&node_name, mesh_data);
        if used != node_name {
            tracing::warn!("Node name '{}' already taken, renamed to '{}'", node_name, used);
        }
    }

    if scene.is_empty() {
        bail!("No .obj files were successfully loaded");
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output folder {:?}", parent))?;
        }
    }

    scene
        .export(output_path)
        .with_context(|| format!("Error exporting scene to {}", output_path.display()))?;

    tracing::info!(
        "Successfully combined {} mesh(es) from {} into {}",
        scene.len(),
        input_dir.display(),
        output_path.display()
    );

    Ok(CombineStats {
        files_found: files.len(),
        meshes_loaded: scene.len(),
        files_skipped,
    })
}
