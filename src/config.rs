//! Sizing, range, and palette configuration.
//!
//! [`ElementSizes`] and [`RangeConfig`] can only be built through validating
//! constructors, so a value of either type always satisfies its invariants.

use floem::peniko::Color;

use crate::constants;
use crate::error::ConfigError;

pub(crate) fn check_size(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidSize { name, value })
    }
}

/// Thumb diameter and track stroke widths.
///
/// Invariant: `not_selected_bar_width <= selected_bar_width <= thumb_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSizes {
    thumb_size: f64,
    not_selected_bar_width: f64,
    selected_bar_width: f64,
}

impl ElementSizes {
    pub fn new(
        thumb_size: f64,
        not_selected_bar_width: f64,
        selected_bar_width: f64,
    ) -> Result<Self, ConfigError> {
        let thumb = check_size("thumb size", thumb_size)?;
        let not_selected = check_size("not selected bar width", not_selected_bar_width)?;
        let selected = check_size("selected bar width", selected_bar_width)?;

        if selected > thumb {
            return Err(ConfigError::SelectedBarTooWide { selected, thumb });
        }
        if not_selected > selected {
            return Err(ConfigError::NotSelectedBarTooWide {
                not_selected,
                selected,
            });
        }
        Ok(Self {
            thumb_size: thumb,
            not_selected_bar_width: not_selected,
            selected_bar_width: selected,
        })
    }

    pub fn thumb_size(&self) -> f64 {
        self.thumb_size
    }

    pub fn thumb_radius(&self) -> f64 {
        self.thumb_size / 2.0
    }

    pub fn not_selected_bar_width(&self) -> f64 {
        self.not_selected_bar_width
    }

    pub fn selected_bar_width(&self) -> f64 {
        self.selected_bar_width
    }
}

impl Default for ElementSizes {
    fn default() -> Self {
        Self {
            thumb_size: constants::THUMB_SIZE,
            not_selected_bar_width: constants::NOT_SELECTED_BAR_WIDTH,
            selected_bar_width: constants::SELECTED_BAR_WIDTH,
        }
    }
}

/// The `[min, max]` interval progress lives in. `min < max` strictly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeConfig {
    min: f64,
    max: f64,
}

impl RangeConfig {
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        // Written so that NaN on either side is rejected too.
        if !(min < max) {
            return Err(ConfigError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`, always positive.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: constants::MIN,
            max: constants::MAX,
        }
    }
}

/// Track and thumb colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub not_selected_bar: Color,
    pub selected_bar: Color,
    pub selected_bar_touched: Color,
    pub thumb: Color,
    pub thumb_touched: Color,
    /// Halo drawn around the thumb while it is dragged.
    pub thumb_touched_halo: Color,
}

impl Palette {
    pub fn selected_bar(&self, dragging: bool) -> Color {
        if dragging {
            self.selected_bar_touched
        } else {
            self.selected_bar
        }
    }

    pub fn thumb(&self, dragging: bool) -> Color {
        if dragging {
            self.thumb_touched
        } else {
            self.thumb
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            not_selected_bar: constants::COLOR_NOT_SELECTED_BAR,
            selected_bar: constants::COLOR_SELECTED_BAR,
            selected_bar_touched: constants::COLOR_SELECTED_BAR_TOUCHED,
            thumb: constants::COLOR_THUMB,
            thumb_touched: constants::COLOR_THUMB_TOUCHED,
            thumb_touched_halo: constants::COLOR_THUMB_TOUCHED_HALO,
        }
    }
}

/// Layout debugging aids. `None` disables an overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DebugOverlay {
    /// Fill the whole content area.
    pub content_area: Option<Color>,
    /// Outline the region that accepts a pointer-down.
    pub touch_area: Option<Color>,
}

/// Everything that controls how the seek bar looks and where it accepts touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub sizes: ElementSizes,
    pub preferred_touch_area_width: f64,
    pub palette: Palette,
    pub debug: DebugOverlay,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            sizes: ElementSizes::default(),
            preferred_touch_area_width: constants::PREFERRED_TOUCH_AREA_WIDTH,
            palette: Palette::default(),
            debug: DebugOverlay::default(),
        }
    }
}

impl StyleConfig {
    pub fn with_sizes(mut self, sizes: ElementSizes) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_preferred_touch_area_width(mut self, width: f64) -> Result<Self, ConfigError> {
        self.preferred_touch_area_width = check_size("preferred touch area width", width)?;
        Ok(self)
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_debug(mut self, debug: DebugOverlay) -> Self {
        self.debug = debug;
        self
    }
}
