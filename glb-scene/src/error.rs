//! Error type for scene validation and export

/// Errors surfaced while validating or serializing a scene
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The scene has no mesh entries to export
    #[error("scene contains no meshes")]
    EmptyScene,

    /// A mesh entry carries no primitives
    #[error("mesh '{0}' has no primitives")]
    EmptyMesh(String),

    /// A primitive has no vertices
    #[error("primitive in mesh '{0}' has no vertices")]
    EmptyPrimitive(String),

    /// Index count is not a whole number of triangles
    #[error("mesh '{mesh}' has {count} indices, not a multiple of 3")]
    IndexCount { mesh: String, count: usize },

    /// An attribute stream disagrees with the position count
    #[error("{attribute} stream in mesh '{mesh}' has {got} entries, expected {expected}")]
    AttributeLength {
        mesh: String,
        attribute: &'static str,
        got: usize,
        expected: usize,
    },

    /// An index refers past the end of the vertex streams
    #[error("index {index} out of bounds in mesh '{mesh}' ({vertices} vertices)")]
    IndexOutOfBounds {
        mesh: String,
        index: u32,
        vertices: usize,
    },

    /// glTF JSON serialization failed
    #[error("failed to serialize glTF JSON: {0}")]
    Serialize(String),

    /// Writing the GLB stream failed
    #[error("failed to write GLB")]
    Io(#[from] std::io::Error),
}
