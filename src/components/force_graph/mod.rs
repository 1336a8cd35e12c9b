//! Canvas-based force-directed graph renderer.

mod component;
mod render;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{GraphData, GraphLink, GraphNode};
