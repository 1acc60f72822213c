// SPDX-License-Identifier: MPL-2.0
//! `pinch_viewer` is the state core of a single-screen pinch-to-zoom image viewer.
//!
//! It turns gesture input (double tap, drag, pinch, zoom buttons) into an image
//! transform, and tracks which page of a thumbnail drawer is on screen. Rendering,
//! asset loading and windowing are left to the caller, which forwards input as
//! [`ui::viewer::Message`]s and redraws from [`ui::viewer::Frame`] snapshots.

pub mod app;
pub mod config;
pub mod error;
pub mod pages;
pub mod ui;

#[cfg(test)]
mod test_utils;
