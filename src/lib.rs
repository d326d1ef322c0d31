pub mod app;
pub mod config;
pub mod render;
pub mod utils;
pub mod window;

// Re-export commonly used types
pub use app::{run, App};
pub use config::AppConfig;
pub use render::{Camera, CubeMesh, Shader, ShaderStatus};
pub use utils::error::{AppError, ShaderError};
pub use window::RenderWindow;
