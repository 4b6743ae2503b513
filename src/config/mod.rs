//! Configuration module
//!
//! Contains the seed values and layout constants for the mixer.

mod mixer_config;

pub use mixer_config::*;
