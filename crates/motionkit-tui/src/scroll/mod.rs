//! Smooth scrolling for the preview page
//!
//! # Layers
//!
//! ## L4 Atomic Layer
//! - `easing` - Easing curves, including generated spring curves
//! - `timing` - Progress and interpolation over explicit instants
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use motionkit_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone());
//! animator.set_max_scroll(page_height - viewport_height);
//! animator.scroll_by(10.0);
//!
//! // once per frame
//! let top = animator.update(Instant::now());
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use easing::{Easing, EasingTypeExt};
