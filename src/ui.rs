//! UI module for the stepper demo
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level canvas program implementations
//! - **Effects** (`effects`): Pixel-level image processing
//! - **Theme** (`theme`): Palette and container/button styles

pub mod effects;
pub mod primitives;
pub mod theme;
