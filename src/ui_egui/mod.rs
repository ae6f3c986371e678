mod app;
mod screens;
mod widgets;

pub use app::IntakeApp;
