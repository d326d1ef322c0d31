use std::ffi::NulError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Failed to read shader file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Null byte error: {0}")]
    Nul(#[from] NulError),

    #[error("Failed to compile {stage} shader: {log}")]
    Compilation { stage: &'static str, log: String },

    #[error("Failed to link shader program: {0}")]
    Linking(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to set up GL display: {0}")]
    Display(String),

    #[error("Failed to create application window")]
    WindowCreation,

    #[error("GL context error: {0}")]
    Context(#[from] glutin::error::Error),

    #[error("Failed to load OpenGL function pointers")]
    FunctionLoading,
}

pub type Result<T> = std::result::Result<T, AppError>;
