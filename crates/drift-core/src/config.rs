//! Field configuration.
//!
//! Every tunable of the floating field lives in [`FieldConfig`]. The default
//! matches the constants in [`crate::constants`]; other values are accepted
//! only after [`FieldConfig::validate`] passes.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} range is empty or inverted: [{min}, {max}]")]
    InvalidRange { name: &'static str, min: f32, max: f32 },
    #[error("wrap band has no height: top {top} <= bottom {bottom}")]
    EmptyBand { top: f32, bottom: f32 },
    #[error("spawn band [{min}, {max}] leaves the wrap band [{bottom}, {top}]")]
    SpawnOutsideBand {
        min: f32,
        max: f32,
        bottom: f32,
        top: f32,
    },
    #[error("text probability {0} is outside [0, 1]")]
    TextProbability(f64),
    #[error("{0} must be finite and positive")]
    NonPositive(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub item_count: usize,
    pub top_limit: f32,
    pub bottom_limit: f32,
    pub x_range: [f32; 2],
    pub spawn_y_range: [f32; 2],
    pub z_range: [f32; 2],
    pub speed_range: [f32; 2],
    pub text_probability: f64,
    pub text_scale: f32,
    pub icon_scale: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            item_count: ITEM_COUNT,
            top_limit: TOP_LIMIT,
            bottom_limit: BOTTOM_LIMIT,
            x_range: X_RANGE,
            spawn_y_range: SPAWN_Y_RANGE,
            z_range: Z_RANGE,
            speed_range: SPEED_RANGE,
            text_probability: TEXT_PROBABILITY,
            text_scale: TEXT_SCALE,
            icon_scale: ICON_SCALE,
        }
    }
}

impl FieldConfig {
    pub fn band_height(&self) -> f32 {
        self.top_limit - self.bottom_limit
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.top_limit.is_finite() && self.bottom_limit.is_finite())
            || self.top_limit <= self.bottom_limit
        {
            return Err(ConfigError::EmptyBand {
                top: self.top_limit,
                bottom: self.bottom_limit,
            });
        }
        check_range("x", self.x_range)?;
        check_range("spawn y", self.spawn_y_range)?;
        check_range("z", self.z_range)?;
        check_range("speed", self.speed_range)?;
        // Elements only wrap at the top, so they must always rise.
        if self.speed_range[0] <= 0.0 {
            return Err(ConfigError::NonPositive("speed"));
        }
        let [min, max] = self.spawn_y_range;
        if min < self.bottom_limit || max > self.top_limit {
            return Err(ConfigError::SpawnOutsideBand {
                min,
                max,
                bottom: self.bottom_limit,
                top: self.top_limit,
            });
        }
        if !(0.0..=1.0).contains(&self.text_probability) {
            return Err(ConfigError::TextProbability(self.text_probability));
        }
        if !(self.text_scale.is_finite() && self.text_scale > 0.0) {
            return Err(ConfigError::NonPositive("text scale"));
        }
        if !(self.icon_scale.is_finite() && self.icon_scale > 0.0) {
            return Err(ConfigError::NonPositive("icon scale"));
        }
        Ok(())
    }
}

// Ranges are sampled half-open, so min must stay strictly below max.
fn check_range(name: &'static str, [min, max]: [f32; 2]) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { name, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(()));
        assert_eq!(FieldConfig::default().band_height(), BAND_HEIGHT);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let cfg = FieldConfig {
            z_range: [5.0, -25.0],
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidRange { name: "z", .. })
        ));
    }

    #[test]
    fn spawn_band_must_fit_inside_wrap_band() {
        let cfg = FieldConfig {
            spawn_y_range: [-20.0, 17.5],
            ..FieldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::SpawnOutsideBand { .. })
        ));
    }

    #[test]
    fn falling_or_still_speeds_are_rejected() {
        let falling = FieldConfig {
            speed_range: [-0.7, -0.2],
            ..FieldConfig::default()
        };
        assert_eq!(falling.validate(), Err(ConfigError::NonPositive("speed")));

        let still = FieldConfig {
            speed_range: [0.0, 0.5],
            ..FieldConfig::default()
        };
        assert_eq!(still.validate(), Err(ConfigError::NonPositive("speed")));
    }

    #[test]
    fn flat_band_and_bad_probability_are_rejected() {
        let flat = FieldConfig {
            top_limit: 0.0,
            bottom_limit: 0.0,
            ..FieldConfig::default()
        };
        assert!(matches!(flat.validate(), Err(ConfigError::EmptyBand { .. })));

        let prob = FieldConfig {
            text_probability: 1.5,
            ..FieldConfig::default()
        };
        assert_eq!(prob.validate(), Err(ConfigError::TextProbability(1.5)));
    }
}
