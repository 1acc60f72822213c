// SPDX-License-Identifier: MPL-2.0
//! Image viewer module: message handling between the input layer, the page
//! drawer and the rendering layer.

pub mod component;

pub use component::{Effect, Frame, Message, Viewer};
