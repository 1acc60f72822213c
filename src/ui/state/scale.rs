// SPDX-License-Identifier: MPL-2.0
//! Validated scale settings
//!
//! Newtypes for the configurable parts of the zoom policy. Each one clamps
//! on construction so the transform state never has to re-check them.

pub use crate::config::{
    DEFAULT_DOUBLE_TAP_SCALE, DEFAULT_SCALE_STEP, MAX_SCALE, MAX_SCALE_STEP, MIN_SCALE,
    MIN_SCALE_STEP,
};

/// Double-tap zoom target, guaranteed to be within `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleTapScale(f32);

impl DoubleTapScale {
    /// Creates a new double-tap target, clamping the value to the valid range.
    ///
    /// Non-finite values fall back to [`DEFAULT_DOUBLE_TAP_SCALE`].
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.clamp(MIN_SCALE, MAX_SCALE))
        } else {
            Self::default()
        }
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DoubleTapScale {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_SCALE)
    }
}

/// Zoom button step, guaranteed to be within `[MIN_SCALE_STEP, MAX_SCALE_STEP]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStep(f32);

impl ScaleStep {
    /// Creates a new step, clamping the value to the valid range.
    ///
    /// Non-finite values fall back to [`DEFAULT_SCALE_STEP`].
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_finite() {
            Self(step.clamp(MIN_SCALE_STEP, MAX_SCALE_STEP))
        } else {
            Self::default()
        }
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ScaleStep {
    fn default() -> Self {
        Self(DEFAULT_SCALE_STEP)
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        "0".to_string()
    } else if value.fract().abs() < f32::EPSILON {
        // Whole value of any magnitude; no integer cast that could saturate
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
