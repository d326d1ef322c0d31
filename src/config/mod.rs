pub mod core;
pub mod rendering;
pub mod window;

pub use core::{AppConfig, LoggingConfig, CONFIG_FILE};
pub use rendering::{RenderConfig, ShaderConfig};
pub use window::WindowConfig;
