use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL version, core profile.
    pub gl_version: (u8, u8),
    pub centered: bool,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "The Goal.".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            centered: true,
            vsync: true,
        }
    }
}
