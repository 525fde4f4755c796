//! Feature modules - logic separated from UI widgets
//!
//! Each feature module contains the core logic for a specific functionality.

pub mod settings;

pub use settings::{Settings, StepperSettings};
