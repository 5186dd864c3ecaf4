//! PBR factor materials

use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// A metallic-roughness material reduced to constant factors.
///
/// Texture maps are not carried; loaders collapse source materials down to
/// the factors a GLB can express without embedding images.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Name as it appears in the exported document
    pub name: String,
    /// RGBA base color factor
    pub base_color: [f32; 4],
    /// Metallic factor (0 = dielectric)
    pub metallic: f32,
    /// Roughness factor (1 = fully rough)
    pub roughness: f32,
}

impl Material {
    /// Dedup key comparing the name and the exact factor bits
    pub(crate) fn key(&self) -> MaterialKey {
        MaterialKey {
            name: self.name.clone(),
            base_color: self.base_color.map(f32::to_bits),
            metallic: self.metallic.to_bits(),
            roughness: self.roughness.to_bits(),
        }
    }

    /// Convert to the glTF JSON representation.
    ///
    /// A base color alpha below 1 switches the material to blend mode.
    pub fn to_json(&self) -> json::Material {
        json::Material {
            alpha_cutoff: None,
            alpha_mode: if self.base_color[3] < 1.0 {
                Valid(json::material::AlphaMode::Blend)
            } else {
                Valid(json::material::AlphaMode::Opaque)
            },
            double_sided: false,
            name: Some(self.name.clone()),
            pbr_metallic_roughness: json::material::PbrMetallicRoughness {
                base_color_factor: json::material::PbrBaseColorFactor(self.base_color),
                base_color_texture: None,
                metallic_factor: json::material::StrengthFactor(self.metallic),
                roughness_factor: json::material::StrengthFactor(self.roughness),
                metallic_roughness_texture: None,
                extensions: Default::default(),
                extras: Default::default(),
            },
            normal_texture: None,
            occlusion_texture: None,
            emissive_texture: None,
            emissive_factor: json::material::EmissiveFactor([0.0, 0.0, 0.0]),
            extensions: Default::default(),
            extras: Default::default(),
        }
    }
}

/// Hashable material identity used for merging
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MaterialKey {
    name: String,
    base_color: [u32; 4],
    metallic: u32,
    roughness: u32,
}
