//! UI styling shared by the egui panels

pub mod colors;

pub use colors::*;
