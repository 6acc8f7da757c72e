use thiserror::Error;

/// A rejected configuration. The seek bar keeps its previous values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("selected bar width {selected} must not exceed thumb size {thumb}")]
    SelectedBarTooWide { selected: f64, thumb: f64 },
    #[error("not selected bar width {not_selected} must not exceed selected bar width {selected}")]
    NotSelectedBarTooWide { not_selected: f64, selected: f64 },
    #[error("min value {min} must be less than max value {max}")]
    EmptyRange { min: f64, max: f64 },
    #[error("{name} must be a finite, non-negative size (got {value})")]
    InvalidSize { name: &'static str, value: f64 },
}
