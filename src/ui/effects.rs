//! Image effects applied before drawing
//!
//! - Icon tinting (recolor by alpha mask)

pub mod tint;
