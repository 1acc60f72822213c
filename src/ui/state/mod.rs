// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the viewer's numeric state, kept apart from any
//! rendering so it can be driven and inspected directly.

pub mod scale;
pub mod transform;

// Re-export commonly used types for convenience
pub use scale::{DoubleTapScale, ScaleStep};
pub use transform::{GestureSettings, TransformState};
