pub mod clock;
pub mod error;

pub use clock::{FrameClock, FrameTime};
pub use error::{AppError, ShaderError};
