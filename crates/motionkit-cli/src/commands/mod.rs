pub mod config;
pub mod css;
pub mod curve;
pub mod presets;
pub mod preview;
pub mod simulate;
pub mod transform;
