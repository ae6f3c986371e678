// Service module exports

pub mod availability;
pub mod chat;
pub mod email;
pub mod error;
pub mod settings;
pub mod submission;
pub mod validation;
pub mod wizard;
