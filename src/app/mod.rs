//! Application module
//!
//! Contains the main egui application and state management.

mod mixer_app;
pub mod state;

pub use mixer_app::MixerApp;
