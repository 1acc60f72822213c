// SPDX-License-Identifier: MPL-2.0
//! Viewer state and message handling.
//!
//! This module follows the Elm-style "state down, messages up" pattern
//! without owning any widgets: rendering is left to the caller.
//!
//! - [`viewer`] - Viewer component (transform + page drawer)
//! - [`state`] - Reusable state management (transform, scale settings)

pub mod state;
pub mod viewer;
