mod component;
mod render;
pub mod scale;

pub use component::ArcDiagramCanvas;
