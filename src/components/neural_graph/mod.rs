//! An ever-growing graph animation: nodes link up by proximity, take a
//! color from their connection count and pulse softly.

mod component;
mod graph;
mod growth;
mod render;
mod state;
mod types;

pub use component::NeuralGraphCanvas;
