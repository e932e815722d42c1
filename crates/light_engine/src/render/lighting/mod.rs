//! Lighting system
//!
//! Light casters (directional, point and spot), distance attenuation and
//! animated light paths.

pub mod attenuation;
pub mod lights;

// Re-export all lighting types
pub use attenuation::*;
pub use lights::*;
