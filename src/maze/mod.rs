//! Perfect maze generation
//!
//! Pure and deterministic given a random source:
//! - No global state; all scratch buffers live for one call
//! - Randomness is always passed in
//! - Output is a plain connection set owned by the caller

pub mod analysis;
pub mod connections;
mod display;
pub mod generator;
pub mod grid;

pub use connections::{ConnectionSet, Edge, EdgeState};
pub use generator::{GeneratorParams, LabelMerge, generate, generate_with, seeded_rng};
pub use grid::{CellIndex, EdgeKind, Grid};
