//! Utility module
//!
//! Color codec and mixing helpers.

pub mod color;
