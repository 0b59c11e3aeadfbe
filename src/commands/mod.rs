//! Command implementations

pub mod render;

pub use render::{RenderConfig, render_hint};
