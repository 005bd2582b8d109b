pub mod lamp;
pub mod pipeline;

pub use lamp::LampState;
pub use pipeline::SimulationPlugin;
