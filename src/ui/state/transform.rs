// SPDX-License-Identifier: MPL-2.0
//! Transform state management
//!
//! This module turns gesture samples into the image transform (scale + offset):
//! - Double-tap zoom toggling
//! - Damped drag panning with a committed baseline between drags
//! - Pinch zoom with a soft upper tolerance
//! - Zoom button stepping
//!
//! The image is either **unzoomed** (`scale == MIN_SCALE`, zero offset and
//! baseline) or **zoomed** (`scale > MIN_SCALE`, any offset). Every transition
//! back to unzoomed goes through [`TransformState::reset`].

use super::scale::{DoubleTapScale, ScaleStep};
use crate::config::{DRAG_DAMPING, MAX_SCALE, MIN_SCALE, PINCH_TOLERANCE};
use iced_core::Vector;

/// Tunable gesture parameters for a [`TransformState`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSettings {
    /// Scale reached by double-tapping an unzoomed image.
    pub double_tap_scale: DoubleTapScale,
    /// Scale added or removed by [`TransformState::zoom_in`]/[`TransformState::zoom_out`].
    pub scale_step: ScaleStep,
}

/// Scale and offset applied to the displayed image.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    scale: f32,
    offset: Vector,
    drag_baseline: Vector,
    settings: GestureSettings,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

/// Attenuated drag translation.
fn damped(translation: Vector) -> Vector {
    Vector::new(translation.x / DRAG_DAMPING, translation.y / DRAG_DAMPING)
}

fn is_finite(v: Vector) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

impl TransformState {
    /// Creates an unzoomed transform using the given gesture settings.
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            scale: MIN_SCALE,
            offset: Vector::ZERO,
            drag_baseline: Vector::ZERO,
            settings,
        }
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current visual translation.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Offset committed by previous drags.
    #[must_use]
    pub fn drag_baseline(&self) -> Vector {
        self.drag_baseline
    }

    #[must_use]
    pub fn settings(&self) -> GestureSettings {
        self.settings
    }

    /// Whether the image is scaled beyond its natural size.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Returns to the canonical unzoomed state.
    pub fn reset(&mut self) {
        self.scale = MIN_SCALE;
        self.offset = Vector::ZERO;
        self.drag_baseline = Vector::ZERO;
    }

    /// Zooms an unzoomed image to the double-tap target, or resets a zoomed one.
    ///
    /// Only an exact `MIN_SCALE` counts as unzoomed; the offset is left as-is
    /// when zooming in.
    pub fn toggle_zoom_on_double_tap(&mut self) {
        if self.scale == MIN_SCALE {
            self.scale = self.settings.double_tap_scale.value();
            tracing::debug!(scale = self.scale, "double tap zoom in");
        } else {
            tracing::debug!(from = self.scale, "double tap reset");
            self.reset();
        }
    }

    /// Applies a live drag sample, relative to the committed baseline.
    ///
    /// Returns `false` if the translation, or the offset it would produce,
    /// is not finite and was ignored.
    pub fn on_drag_changed(&mut self, translation: Vector) -> bool {
        if !is_finite(translation) {
            tracing::warn!(?translation, "ignoring non-finite drag sample");
            return false;
        }
        let offset = self.drag_baseline + damped(translation);
        if !is_finite(offset) {
            tracing::warn!(?translation, "ignoring drag sample overflowing the offset");
            return false;
        }
        self.offset = offset;
        true
    }

    /// Ends a drag gesture.
    ///
    /// An unzoomed image snaps back via [`Self::reset`]. A zoomed one commits
    /// the damped translation into the baseline so the next drag continues
    /// from here; the offset is set to the new baseline.
    ///
    /// Returns `false` if the translation, or the baseline it would produce,
    /// is not finite and was ignored.
    pub fn on_drag_ended(&mut self, translation: Vector) -> bool {
        if !is_finite(translation) {
            tracing::warn!(?translation, "ignoring non-finite drag end");
            return false;
        }
        if self.scale <= MIN_SCALE {
            self.reset();
        } else {
            let baseline = self.drag_baseline + damped(translation);
            if !is_finite(baseline) {
                tracing::warn!(?translation, "ignoring drag end overflowing the baseline");
                return false;
            }
            self.drag_baseline = baseline;
            self.offset = baseline;
            tracing::debug!(baseline = ?self.drag_baseline, "drag committed");
        }
        true
    }

    /// Applies a live pinch sample.
    ///
    /// While the scale is in range, raw values up to [`PINCH_TOLERANCE`] are
    /// adopted directly (floored at `MIN_SCALE`). A scale above `MAX_SCALE`
    /// is pulled back to `MAX_SCALE`, and one below `MIN_SCALE` up to it.
    ///
    /// Returns `false` if the sample is not finite and was ignored.
    pub fn on_pinch_changed(&mut self, raw_scale: f32) -> bool {
        if !raw_scale.is_finite() {
            tracing::warn!(raw_scale, "ignoring non-finite pinch sample");
            return false;
        }
        if (MIN_SCALE..=MAX_SCALE).contains(&self.scale) && raw_scale <= PINCH_TOLERANCE {
            self.scale = raw_scale.max(MIN_SCALE);
        } else if self.scale > MAX_SCALE {
            self.scale = MAX_SCALE;
        } else if self.scale < MIN_SCALE {
            self.scale = MIN_SCALE;
        }
        true
    }

    /// Ends a pinch gesture, committing the current scale.
    pub fn on_pinch_ended(&mut self) {
        if self.scale <= MIN_SCALE {
            self.reset();
        } else if self.scale > MAX_SCALE {
            self.scale = MAX_SCALE;
        }
        tracing::debug!(scale = self.scale, "pinch committed");
    }

    /// Adds `delta` to the scale, clamped to `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// Landing on `MIN_SCALE` resets the whole transform.
    ///
    /// Returns `false` if `delta` is not finite and was ignored.
    pub fn step_scale(&mut self, delta: f32) -> bool {
        if !delta.is_finite() {
            tracing::warn!(delta, "ignoring non-finite scale step");
            return false;
        }
        let scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
        if scale <= MIN_SCALE {
            self.reset();
        } else {
            self.scale = scale;
        }
        true
    }

    /// Zoom in button.
    pub fn zoom_in(&mut self) {
        self.step_scale(self.settings.scale_step.value());
    }

    /// Zoom out button.
    pub fn zoom_out(&mut self) {
        self.step_scale(-self.settings.scale_step.value());
    }

    /// Whether scale, offset and baseline satisfy the resting invariants:
    /// scale within bounds, finite offset/baseline, and zero offset/baseline
    /// when unzoomed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let in_range = (MIN_SCALE..=MAX_SCALE).contains(&self.scale);
        in_range
            && is_finite(self.offset)
            && is_finite(self.drag_baseline)
            && (self.is_zoomed()
                || (self.offset == Vector::ZERO && self.drag_baseline == Vector::ZERO))
    }
}
