//! The fixed orientation correction applied to every loaded mesh

use glam::Mat4;

/// Rotation of -90 degrees about the X axis, pivot at the origin.
///
/// OBJ content is conventionally authored Y-up; the combined scene targets
/// Z-up. Every mesh gets this correction, positions and normals both.
pub fn y_up_to_z_up() -> Mat4 {
    Mat4::from_rotation_x((-90.0f32).to_radians())
}
