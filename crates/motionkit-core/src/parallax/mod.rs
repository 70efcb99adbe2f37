//! Scroll-linked parallax transforms
//!
//! A visibility tracker supplies progress in [0, 1] for an element each
//! frame; the transform turns it into an offset, a scale and an opacity.
//!
//! - `progress` - where an element sits in its pass through the viewport
//! - `transform` - progress to offset/scale/opacity, per-element state
//! - `filter` - spring smoothing of the offset

pub mod filter;
pub mod progress;
pub mod transform;

pub use filter::SpringFilter;
pub use progress::visibility_progress;
pub use transform::{compute_transform, ParallaxTransform, TransformOutput};
