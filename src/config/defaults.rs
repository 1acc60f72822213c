// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the numeric policy
//! of the transform state machine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Scale bounds and pinch tolerance
//! - **Double tap**: Double-tap zoom target
//! - **Step**: Zoom button step
//! - **Drag**: Drag attenuation

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale of an unzoomed image.
pub const MIN_SCALE: f32 = 1.0;

/// Hard upper bound for the image scale.
pub const MAX_SCALE: f32 = 5.0;

/// Largest raw pinch value adopted as-is while a pinch is in progress.
///
/// Samples in `(MAX_SCALE, PINCH_TOLERANCE]` are adopted mid-gesture and
/// clamped back to [`MAX_SCALE`] by the next sample or when the pinch ends.
pub const PINCH_TOLERANCE: f32 = 5.1;

// ==========================================================================
// Double Tap Defaults
// ==========================================================================

/// Scale reached by double-tapping an unzoomed image.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 5.0;

/// Double-tap target used by the first drawer-less layout.
pub const LEGACY_DOUBLE_TAP_SCALE: f32 = 3.0;

// ==========================================================================
// Step Defaults
// ==========================================================================

/// Scale added or removed by the zoom in/out buttons.
pub const DEFAULT_SCALE_STEP: f32 = 1.0;

/// Minimum allowed button step.
pub const MIN_SCALE_STEP: f32 = 0.1;

/// Maximum allowed button step (one step spans the whole range).
pub const MAX_SCALE_STEP: f32 = MAX_SCALE - MIN_SCALE;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Divisor applied to raw drag translations.
pub const DRAG_DAMPING: f32 = 1.05;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(PINCH_TOLERANCE >= MAX_SCALE);

    // Double tap validation
    assert!(DEFAULT_DOUBLE_TAP_SCALE > MIN_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_SCALE <= MAX_SCALE);
    assert!(LEGACY_DOUBLE_TAP_SCALE > MIN_SCALE);
    assert!(LEGACY_DOUBLE_TAP_SCALE <= MAX_SCALE);

    // Step validation
    assert!(MIN_SCALE_STEP > 0.0);
    assert!(MAX_SCALE_STEP >= MIN_SCALE_STEP);
    assert!(DEFAULT_SCALE_STEP >= MIN_SCALE_STEP);
    assert!(DEFAULT_SCALE_STEP <= MAX_SCALE_STEP);

    // Drag validation
    assert!(DRAG_DAMPING >= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_are_valid() {
        assert_eq!(MIN_SCALE, 1.0);
        assert_eq!(MAX_SCALE, 5.0);
        assert!(PINCH_TOLERANCE > MAX_SCALE);
    }

    #[test]
    fn double_tap_defaults_are_valid() {
        assert_eq!(DEFAULT_DOUBLE_TAP_SCALE, MAX_SCALE);
        assert!(LEGACY_DOUBLE_TAP_SCALE < DEFAULT_DOUBLE_TAP_SCALE);
    }

    #[test]
    fn step_defaults_are_valid() {
        assert_eq!(DEFAULT_SCALE_STEP, 1.0);
        assert!(DEFAULT_SCALE_STEP >= MIN_SCALE_STEP);
        assert!(DEFAULT_SCALE_STEP <= MAX_SCALE_STEP);
    }
}
