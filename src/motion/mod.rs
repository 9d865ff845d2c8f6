mod easing;
mod engine;
mod interpolate;

pub use easing::{AnimationSpec, Easing};
pub use engine::{AnimatedValue, AnimationEngine, AnimationId, AnimationResult};
pub use interpolate::{Lerp, interpolate};
