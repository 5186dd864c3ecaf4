//! OBJ mesh loading
//!
//! OBJ and MTL parsing is delegated to `tobj`; this module reshapes the
//! parsed models into scene primitives and reduces MTL materials to PBR
//! factors.

use anyhow::{Context, Result, bail};
use glb_scene::{Material, MeshData, Primitive};
use std::path::Path;

/// One loaded OBJ file: geometry split per material group, plus the
/// materials its MTL library defines. Primitive material slots index
/// into `materials`.
pub struct LoadedObj {
    pub mesh: MeshData,
    pub materials: Vec<Material>,
}

/// Load an OBJ file and its MTL library (when present).
///
/// Faces are triangulated during parsing and attribute streams are
/// re-indexed to a single index per vertex. Texture coordinates are flipped
/// from the OBJ bottom-left origin to the glTF top-left origin. A file
/// without any usable geometry is an error; a missing MTL library is not.
pub fn load_obj(path: &Path) -> Result<LoadedObj> {
    let (models, materials) = tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS)
        .with_context(|| format!("Failed to load OBJ: {}", path.display()))?;

    let materials = match materials {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!("Skipping materials for {}: {}", path.display(), err);
            Vec::new()
        }
    };

    let materials: Vec<Material> = materials
        .iter()
        .enumerate()
        .map(|(index, mtl)| convert_material(index, mtl))
        .collect();

    let mut mesh = MeshData::new();
    for model in &models {
        let raw = &model.mesh;
        if raw.positions.is_empty() || raw.indices.is_empty() {
            continue;
        }

        let positions = to_vec3s(&raw.positions);
        let vertex_count = positions.len();
        let mut primitive = Primitive::new(positions, raw.indices.clone());

        if raw.normals.len() == raw.positions.len() {
            primitive = primitive.with_normals(to_vec3s(&raw.normals));
        }
        if raw.texcoords.len() == vertex_count * 2 {
            primitive = primitive.with_uvs(flip_uvs(&raw.texcoords));
        }
        if raw.vertex_color.len() == raw.positions.len() {
            primitive = primitive.with_colors(to_rgba(&raw.vertex_color));
        }
        if let Some(id) = raw.material_id {
            if id < materials.len() {
                primitive = primitive.with_material(id);
            }
        }

        mesh.push(primitive);
    }

    if mesh.is_empty() {
        bail!("No geometry found in {}", path.display());
    }

    tracing::debug!(
        "Loaded {}: {} vertices in {} primitive(s), {} material(s)",
        path.display(),
        mesh.vertex_count(),
        mesh.primitives.len(),
        materials.len()
    );

    Ok(LoadedObj { mesh, materials })
}

/// Reduce an MTL material to PBR factors.
///
/// Kd becomes the base color, `d` its alpha, and Ns maps onto roughness.
/// MTL has no metallic notion, so metallic stays 0. Texture references are
/// dropped.
fn convert_material(index: usize, mtl: &tobj::Material) -> Material {
    let name = if mtl.name.is_empty() {
        format!("material_{index}")
    } else {
        mtl.name.clone()
    };

    if let Some(texture) = &mtl.diffuse_texture {
        tracing::debug!("Dropping texture reference '{texture}' from material '{name}'");
    }

    let diffuse = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
    let alpha = mtl.dissolve.unwrap_or(1.0);
    let roughness = 1.0 - (mtl.shininess.unwrap_or(32.0) / 128.0).clamp(0.0, 1.0);

    Material {
        name,
        base_color: [diffuse[0], diffuse[1], diffuse[2], alpha],
        metallic: 0.0,
        roughness,
    }
}

fn to_vec3s(data: &[f32]) -> Vec<[f32; 3]> {
    data.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect()
}

/// Regroup UVs, flipping V between the OBJ and glTF conventions
fn flip_uvs(data: &[f32]) -> Vec<[f32; 2]> {
    data.chunks_exact(2).map(|c| [c[0], 1.0 - c[1]]).collect()
}

/// Widen RGB vertex colors to RGBA with alpha 1
fn to_rgba(data: &[f32]) -> Vec<[f32; 4]> {
    data.chunks_exact(3)
        .map(|c| [c[0], c[1], c[2], 1.0])
        .collect()
}
