pub mod config;
pub mod error;
pub mod keyframes;
pub mod parallax;
pub mod spring;

pub use config::{AppConfig, EasingType, ScrollConfig, ScrollTransformConfig, SmoothingConfig};
pub use error::{Error, Result};
pub use keyframes::Keyframes;
pub use parallax::{compute_transform, ParallaxTransform, SpringFilter, TransformOutput};
pub use spring::{generate, SpringCurve, SpringParameters, TimingCurveDescriptor};
