//! WebGPU rendering module
//!
//! `scene` builds a triangle list from a read-only game state; `pipeline`
//! uploads and draws it.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::build_scene;
pub use vertex::{Palette, Vertex};
