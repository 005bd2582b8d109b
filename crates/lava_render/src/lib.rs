pub mod bounds;
pub mod material;
pub mod plugin;

pub use material::{GpuBlob, LampParams, LavaLampMaterial};
pub use plugin::LampRenderPlugin;
