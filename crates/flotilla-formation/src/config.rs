//! Grid configuration and validation.
//!
//! [`GridConfig`] is the builder-input for a [`Formation`](crate::Formation).
//! Construction via [`Formation::new`](crate::Formation::new) accepts any
//! config — degenerate dimensions yield an empty formation — while
//! [`Formation::try_new`](crate::Formation::try_new) calls
//! [`validate()`](GridConfig::validate) first for callers that want
//! configuration bugs surfaced at startup.

use std::error::Error;
use std::fmt;

/// Layout parameters for a formation grid.
///
/// `width` counts slot columns (local x axis), `depth` counts slot rows
/// (local z axis). `spacing` is the distance between adjacent slots, and
/// the offsets translate the whole grid in the local xz-plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Slot columns along the local x axis.
    pub width: i32,
    /// Slot rows along the local z axis.
    pub depth: i32,
    /// Distance between adjacent slots.
    pub spacing: f32,
    /// Grid translation along local x.
    pub x_offset: f32,
    /// Grid translation along local z.
    pub z_offset: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 1,
            depth: 1,
            spacing: 1.0,
            x_offset: 0.0,
            z_offset: 0.0,
        }
    }
}

impl GridConfig {
    /// Total slot count, saturating degenerate dimensions to zero.
    pub fn slot_count(&self) -> usize {
        let w = self.width.max(0) as usize;
        let d = self.depth.max(0) as usize;
        w * d
    }

    /// Validate all structural invariants.
    ///
    /// The lattice math itself never fails — non-positive dimensions simply
    /// produce an empty grid — so this is opt-in: it exists for callers that
    /// prefer a fails-fast contract over a silently degenerate formation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::NonPositiveWidth { value: self.width });
        }
        if self.depth <= 0 {
            return Err(ConfigError::NonPositiveDepth { value: self.depth });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing {
                value: self.spacing,
            });
        }
        if !self.x_offset.is_finite() || !self.z_offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset {
                x: self.x_offset,
                z: self.z_offset,
            });
        }
        Ok(())
    }
}

/// Errors detected during [`GridConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width is zero or negative.
    NonPositiveWidth {
        /// The configured width.
        value: i32,
    },
    /// Depth is zero or negative.
    NonPositiveDepth {
        /// The configured depth.
        value: i32,
    },
    /// Spacing is NaN, infinite, zero, or negative.
    InvalidSpacing {
        /// The invalid value.
        value: f32,
    },
    /// An offset is NaN or infinite.
    NonFiniteOffset {
        /// The configured x offset.
        x: f32,
        /// The configured z offset.
        z: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveWidth { value } => {
                write!(f, "width must be at least 1, got {value}")
            }
            Self::NonPositiveDepth { value } => {
                write!(f, "depth must be at least 1, got {value}")
            }
            Self::InvalidSpacing { value } => {
                write!(f, "spacing must be finite and positive, got {value}")
            }
            Self::NonFiniteOffset { x, z } => {
                write!(f, "offsets must be finite, got ({x}, {z})")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GridConfig {
        GridConfig {
            width: 4,
            depth: 3,
            spacing: 1.5,
            x_offset: 0.5,
            z_offset: -2.0,
        }
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_zero_width_fails() {
        let mut cfg = valid_config();
        cfg.width = 0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveWidth { value: 0 })
        ));
    }

    #[test]
    fn validate_negative_depth_fails() {
        let mut cfg = valid_config();
        cfg.depth = -2;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveDepth { value: -2 })
        ));
    }

    #[test]
    fn validate_nan_spacing_fails() {
        let mut cfg = valid_config();
        cfg.spacing = f32::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidSpacing { .. })
        ));
    }

    #[test]
    fn validate_zero_spacing_fails() {
        let mut cfg = valid_config();
        cfg.spacing = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidSpacing { .. })
        ));
    }

    #[test]
    fn validate_infinite_offset_fails() {
        let mut cfg = valid_config();
        cfg.z_offset = f32::INFINITY;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFiniteOffset { .. })
        ));
    }

    #[test]
    fn slot_count_saturates_degenerate_dimensions() {
        let mut cfg = valid_config();
        assert_eq!(cfg.slot_count(), 12);
        cfg.width = -3;
        assert_eq!(cfg.slot_count(), 0);
        cfg.width = 4;
        cfg.depth = 0;
        assert_eq!(cfg.slot_count(), 0);
    }

    #[test]
    fn error_display_names_the_field() {
        let msg = ConfigError::NonPositiveWidth { value: -1 }.to_string();
        assert!(msg.contains("width"));
        assert!(msg.contains("-1"));
    }
}
