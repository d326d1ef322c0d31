pub mod camera;
pub mod mesh;
pub mod shader;

pub use camera::{spin_model, Camera};
pub use mesh::{CubeMesh, Vertex, CUBE_INDICES, CUBE_VERTICES};
pub use shader::{Shader, ShaderStatus};
