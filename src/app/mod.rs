// SPDX-License-Identifier: MPL-2.0
//! Headless viewer session.
//!
//! A [`Session`] owns the [`Viewer`] and forwards each input message to it.
//! Whenever the returned [`Effect`] asks for a redraw, the current [`Frame`]
//! is handed to a [`Renderer`]. This is the only place where state changes
//! reach the rendering layer.

pub mod paths;
pub mod script;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pages::{load_manifest, PageSet};
use crate::ui::state::scale::format_number;
use crate::ui::viewer::{Effect, Frame, Message, Viewer};
use script::Script;
use std::io::Write;
use std::path::Path;

/// Rendering layer: receives a snapshot after every visible state change.
pub trait Renderer {
    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be output.
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

/// Collects frames in memory.
impl Renderer for Vec<Frame> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        self.push(frame.clone());
        Ok(())
    }
}

/// Writes one line per frame:
/// `page=<id>/<count> image=<name> thumb=<name> scale=<s> offset=(<x>,<y>)`.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        writeln!(
            self.out,
            "page={}/{} image={} thumb={} scale={} offset=({},{})",
            frame.page_id,
            frame.page_count,
            frame.image_name,
            frame.thumbnail_name,
            format_number(frame.scale),
            format_number(frame.offset.x),
            format_number(frame.offset.y),
        )
        .map_err(Error::from)
    }
}

/// One viewer plus the plumbing between input and renderer.
#[derive(Debug, Clone)]
pub struct Session {
    viewer: Viewer,
}

impl Session {
    /// Creates a session over an already loaded page set.
    #[must_use]
    pub fn new(config: &Config, pages: PageSet) -> Self {
        Self {
            viewer: Viewer::new(pages, config.gesture_settings()),
        }
    }

    /// Loads the page manifest at `manifest_path` and creates a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or does not describe
    /// a valid page set.
    pub fn open(config: &Config, manifest_path: &Path) -> Result<Self> {
        let manifest = load_manifest(manifest_path)?;
        let pages = PageSet::from_manifest(manifest)?;
        tracing::info!(
            pages = pages.len(),
            manifest = %manifest_path.display(),
            "session opened"
        );
        Ok(Self::new(config, pages))
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Renders the current state unconditionally.
    ///
    /// # Errors
    ///
    /// Propagates renderer failures.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.render(&self.viewer.frame())
    }

    /// Forwards `msg` to the viewer and renders if anything visible changed.
    ///
    /// # Errors
    ///
    /// Propagates renderer failures.
    pub fn dispatch(&mut self, msg: Message, renderer: &mut dyn Renderer) -> Result<Effect> {
        let effect = self.viewer.handle(msg);
        tracing::trace!(?msg, ?effect, "message handled");
        if effect.needs_redraw() {
            self.render(renderer)?;
        }
        Ok(effect)
    }

    /// Dispatches every scripted event in order.
    ///
    /// Returns the number of frames rendered.
    ///
    /// # Errors
    ///
    /// Stops at the first renderer failure.
    pub fn replay(&mut self, script: &Script, renderer: &mut dyn Renderer) -> Result<usize> {
        let mut rendered = 0;
        for msg in script.messages() {
            if self.dispatch(msg, renderer)?.needs_redraw() {
                rendered += 1;
            }
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Page;
    use iced_core::Vector;

    fn session() -> Session {
        let pages = PageSet::new(vec![
            Page::new(0, "magazine-front-cover"),
            Page::new(1, "magazine-back-cover"),
        ])
        .expect("valid page set");
        Session::new(&Config::default(), pages)
    }

    #[test]
    fn dispatch_renders_only_visible_changes() {
        let mut session = session();
        let mut frames: Vec<Frame> = Vec::new();

        session
            .dispatch(Message::ZoomOut, &mut frames)
            .expect("render ok");
        assert!(frames.is_empty());

        session
            .dispatch(Message::DoubleTap, &mut frames)
            .expect("render ok");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].scale, 5.0);
    }

    #[test]
    fn replay_counts_rendered_frames() {
        let mut session = session();
        let script = Script::parse(
            r#"
[[event]]
kind = "zoom-in"

[[event]]
kind = "drag-changed"
dx = 105.0
dy = 0.0

[[event]]
kind = "drag-ended"
dx = 105.0
dy = 0.0

[[event]]
kind = "select-page"
id = 1
"#,
        )
        .expect("valid script");

        let mut frames: Vec<Frame> = Vec::new();
        let rendered = session.replay(&script, &mut frames).expect("render ok");

        // drag-ended commits the offset the last drag-changed already showed
        assert_eq!(rendered, 3);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].page_id, 1);
        assert_eq!(frames[2].offset, Vector::ZERO);
    }

    #[test]
    fn text_renderer_formats_frame() {
        let mut session = session();
        let mut renderer = TextRenderer::new(Vec::new());
        session
            .dispatch(Message::DragChanged(Vector::new(21.0, -10.5)), &mut renderer)
            .expect("render ok");

        let output = String::from_utf8(renderer.into_inner()).expect("utf8 output");
        assert_eq!(
            output,
            "page=0/2 image=magazine-front-cover thumb=thumb-magazine-front-cover scale=1 offset=(20,-10)\n"
        );
    }

    #[test]
    fn text_renderer_prints_large_offsets_in_full() {
        let mut frame = session().viewer().frame();
        frame.scale = 2.0;
        frame.offset = Vector::new(1e10, 0.0);

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&frame).expect("render ok");

        let output = String::from_utf8(renderer.into_inner()).expect("utf8 output");
        assert!(
            output.ends_with("scale=2 offset=(10000000000,0)\n"),
            "unexpected output: {output}"
        );
    }
}
