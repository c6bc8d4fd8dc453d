//! Small OpenGL exercises sharing one shader builder, one window loop and a
//! handful of per-frame state types. Each exercise is a binary under `src/bin`.

pub mod camera;
pub mod error;
pub mod graphics;
pub mod input;
pub mod logging;
pub mod polygon;
pub mod timing;
pub mod window;

pub use error::{Error, Result};

/// Logs a fatal error and exits with a negative status
pub fn exit_on_error(result: Result<()>) {
    if let Err(err) = result {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        log::error!("{}", message);
        std::process::exit(-1);
    }
}
