//! Error types

use thiserror::Error;

/// An error encountered while building meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Indices are 16 bit, so one face can't have more vertices than fit in one buffer.
    #[error("Face with {vertices} vertices won't fit in a buffer of {max} vertices")]
    FaceTooLarge { vertices: usize, max: usize },

    #[error("Texture {0:?} resolved to a zero-sized image")]
    EmptyTexture(String),
}

/// Displays an error with full backtrace
pub fn full_error_display(err: anyhow::Error) -> String {
    let cont = err
        .chain()
        .skip(1)
        .map(|cause| format!("    caused by: {}", cause))
        .collect::<Vec<String>>()
        .join("\n");

    format!("Error: {}\n{}", err, cont)
}
