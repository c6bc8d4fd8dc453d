use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop an exercise, plus texture loading failures which
/// the exercises log and carry on from.
///
/// Shader compile and link failures are not errors: see
/// [`Diagnostic`](crate::graphics::Diagnostic).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to create the window")]
    WindowCreation(#[from] glutin::CreationError),
    #[error("OpenGL context error")]
    Context(#[from] glutin::ContextError),
    #[error("Failed to load OpenGL function `{0}`")]
    Loader(&'static str),
    #[error("Failed to load texture {}: {}", path.display(), reason)]
    Texture {
        path: PathBuf,
        reason: image::ImageError,
    },
    #[error("Failed to read from standard input")]
    Prompt(#[from] std::io::Error),
    #[error("Standard input closed before a valid value was entered")]
    PromptClosed,
}
