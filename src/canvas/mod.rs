mod plane;
mod uniform;

pub use plane::PlaneMapper;
pub use uniform::Uniforms;
