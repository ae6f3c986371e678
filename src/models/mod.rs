// Module exports for models

pub mod availability;
pub mod grid;
pub mod intake;
pub mod settings;
