pub mod forces;
pub mod spawn;
pub mod thermal;
