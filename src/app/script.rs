// SPDX-License-Identifier: MPL-2.0
//! Gesture scripts (`script.toml`): recorded input events replayed through a
//! [`Session`](super::Session).
//!
//! ```toml
//! [[event]]
//! kind = "double-tap"
//!
//! [[event]]
//! kind = "drag-changed"
//! dx = 105.0
//! dy = 0.0
//!
//! [[event]]
//! kind = "select-page"
//! id = 1
//! ```

use crate::error::{Error, Result};
use crate::ui::viewer::Message;
use iced_core::Vector;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScriptEvent {
    DoubleTap,
    DragChanged { dx: f32, dy: f32 },
    DragEnded { dx: f32, dy: f32 },
    PinchChanged { scale: f32 },
    PinchEnded,
    StepScale { delta: f32 },
    ZoomIn,
    ZoomOut,
    Reset,
    SelectPage { id: usize },
    NextPage,
    PreviousPage,
}

impl From<ScriptEvent> for Message {
    fn from(event: ScriptEvent) -> Self {
        match event {
            ScriptEvent::DoubleTap => Message::DoubleTap,
            ScriptEvent::DragChanged { dx, dy } => Message::DragChanged(Vector::new(dx, dy)),
            ScriptEvent::DragEnded { dx, dy } => Message::DragEnded(Vector::new(dx, dy)),
            ScriptEvent::PinchChanged { scale } => Message::PinchChanged(scale),
            ScriptEvent::PinchEnded => Message::PinchEnded,
            ScriptEvent::StepScale { delta } => Message::StepScale(delta),
            ScriptEvent::ZoomIn => Message::ZoomIn,
            ScriptEvent::ZoomOut => Message::ZoomOut,
            ScriptEvent::Reset => Message::Reset,
            ScriptEvent::SelectPage { id } => Message::SelectPage(id),
            ScriptEvent::NextPage => Message::NextPage,
            ScriptEvent::PreviousPage => Message::PreviousPage,
        }
    }
}

/// Ordered list of scripted events.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub event: Vec<ScriptEvent>,
}

impl Script {
    /// Parses a script from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid script.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Messages in replay order.
    pub fn messages(&self) -> impl Iterator<Item = Message> + '_ {
        self.event.iter().copied().map(Message::from)
    }
}

/// Reads and parses a script file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it cannot be parsed.
pub fn load_script(path: &Path) -> Result<Script> {
    let content = fs::read_to_string(path).map_err(Error::from)?;
    Script::parse(&content)
}
