pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::LampConfig;
pub use constants::*;
pub use error::LampError;
pub use types::*;
