//! Default sizes, range, and colors for the seek bar.

use floem::peniko::Color;

/// Thumb diameter
pub const THUMB_SIZE: f64 = 25.0;

/// Stroke width of the track above the thumb
pub const NOT_SELECTED_BAR_WIDTH: f64 = 4.0;

/// Stroke width of the track below the thumb
pub const SELECTED_BAR_WIDTH: f64 = 10.0;

/// Preferred touch band width. Anything below the thumb size falls back to it.
pub const PREFERRED_TOUCH_AREA_WIDTH: f64 = 0.0;

/// Minimum height is this many thumbs stacked, plus vertical padding.
pub const MIN_HEIGHT_IN_THUMBS: f64 = 5.0;

/// Lower end of the default range
pub const MIN: f64 = 0.0;

/// Upper end of the default range
pub const MAX: f64 = 100.0;

/// Initial progress
pub const PROGRESS: f64 = 50.0;

pub const COLOR_NOT_SELECTED_BAR: Color = Color::rgb8(204, 204, 204);
pub const COLOR_SELECTED_BAR: Color = Color::rgb8(59, 130, 246);
pub const COLOR_SELECTED_BAR_TOUCHED: Color = Color::rgb8(37, 99, 235);
pub const COLOR_THUMB: Color = Color::rgb8(59, 130, 246);
pub const COLOR_THUMB_TOUCHED: Color = Color::rgb8(29, 78, 216);
pub const COLOR_THUMB_TOUCHED_HALO: Color = Color::rgba8(59, 130, 246, 60);
