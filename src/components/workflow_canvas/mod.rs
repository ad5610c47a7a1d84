mod component;
mod render;
mod scene;

pub use component::WorkflowCanvas;
