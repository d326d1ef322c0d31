use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub clear_color: [f32; 4],
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Cube rotation in degrees per second.
    pub spin_speed: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.4, 0.58, 0.92, 1.0],
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            spin_speed: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    pub vertex: String,
    pub fragment: String,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            vertex: "shaders/transvertex.glsl".to_string(),
            fragment: "shaders/fragment.glsl".to_string(),
        }
    }
}
