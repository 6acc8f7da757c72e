//! # floem-seekbar
//!
//! A vertical seek bar widget for [Floem](https://github.com/lapce/floem).
//!
//! The geometry, touch handling and draw-list construction live in
//! [`SeekBar`], which knows nothing about Floem's view tree and can be driven
//! by any host. [`vertical_seek_bar`] wraps it in a Floem view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_seekbar::vertical_seek_bar;
//!
//! let progress = RwSignal::new(50.0);
//! // Use `vertical_seek_bar(progress)` in your Floem view tree.
//! ```
//!
//! Without Floem's event loop:
//!
//! ```rust
//! use floem::kurbo::{Insets, Size};
//! use floem_seekbar::{PointerEvent, PointerPhase, SeekBar};
//!
//! let mut bar = SeekBar::default();
//! bar.on_layout(Size::new(40.0, 300.0), Insets::ZERO);
//! assert!(bar.on_pointer_event(PointerEvent::new(PointerPhase::Down, 20.0, 12.5)));
//! assert_eq!(bar.progress(), 100.0);
//! let primitives = bar.render();
//! assert!(!primitives.is_empty());
//! ```

mod config;
mod constants;
mod error;
mod geometry;
mod render;
mod seek_bar;
mod touch;
mod view;

pub use config::{DebugOverlay, ElementSizes, Palette, RangeConfig, StyleConfig};
pub use error::ConfigError;
pub use geometry::{
    pixel_y_to_progress, progress_to_pixel_y, Geometry, LayoutMetrics, TouchBand, TravelBand,
};
pub use render::{build_primitives, Primitive};
pub use seek_bar::SeekBar;
pub use touch::{InteractionState, PointerEvent, PointerPhase};
pub use view::{vertical_seek_bar, vertical_seek_bar_with, VerticalSeekBar};
