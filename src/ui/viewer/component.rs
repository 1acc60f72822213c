// SPDX-License-Identifier: MPL-2.0
//! Viewer component orchestrating the transform state and the page drawer.
//!
//! The input layer sends [`Message`]s; [`Viewer::handle`] applies them and
//! returns an [`Effect`] telling the rendering layer whether to redraw. The
//! renderer then reads a [`Frame`] snapshot. The viewer never renders itself.

use crate::pages::{Page, PageSet};
use crate::ui::state::{GestureSettings, TransformState};
use iced_core::Vector;

/// Input events delivered by the gesture recognizer, zoom buttons and drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Double tap on the image.
    DoubleTap,
    /// Live drag sample with the translation since the drag started.
    DragChanged(Vector),
    /// Drag released with its final translation.
    DragEnded(Vector),
    /// Live pinch sample with the gesture's scale factor.
    PinchChanged(f32),
    /// Pinch released.
    PinchEnded,
    /// Add an arbitrary amount to the scale.
    StepScale(f32),
    /// Zoom in button.
    ZoomIn,
    /// Zoom out button.
    ZoomOut,
    /// Reset button.
    Reset,
    /// Thumbnail selected in the drawer.
    SelectPage(usize),
    /// Drawer arrow to the next page.
    NextPage,
    /// Drawer arrow to the previous page.
    PreviousPage,
}

/// What changed after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to redraw.
    None,
    /// Scale or offset changed.
    TransformChanged,
    /// Another page is on screen (transform was reset).
    PageChanged { id: usize },
}

impl Effect {
    /// Whether the rendering layer has to redraw.
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Effect::None)
    }
}

/// Snapshot of everything the rendering layer needs for one redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub page_id: usize,
    pub page_count: usize,
    pub image_name: String,
    pub thumbnail_name: String,
    pub scale: f32,
    pub offset: Vector,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Viewer state: the image transform plus the page drawer.
#[derive(Debug, Clone)]
pub struct Viewer {
    transform: TransformState,
    pages: PageSet,
}

impl Viewer {
    /// Creates a viewer on the first page, unzoomed.
    #[must_use]
    pub fn new(pages: PageSet, settings: GestureSettings) -> Self {
        Self {
            transform: TransformState::new(settings),
            pages,
        }
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[must_use]
    pub fn pages(&self) -> &PageSet {
        &self.pages
    }

    #[must_use]
    pub fn current_page(&self) -> &Page {
        self.pages.current_page()
    }

    /// Handle a viewer message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = (self.transform.scale(), self.transform.offset());
        match msg {
            Message::DoubleTap => self.transform.toggle_zoom_on_double_tap(),
            Message::DragChanged(translation) => {
                self.transform.on_drag_changed(translation);
            }
            Message::DragEnded(translation) => {
                self.transform.on_drag_ended(translation);
            }
            Message::PinchChanged(raw_scale) => {
                self.transform.on_pinch_changed(raw_scale);
            }
            Message::PinchEnded => self.transform.on_pinch_ended(),
            Message::StepScale(delta) => {
                self.transform.step_scale(delta);
            }
            Message::ZoomIn => self.transform.zoom_in(),
            Message::ZoomOut => self.transform.zoom_out(),
            Message::Reset => self.transform.reset(),
            Message::SelectPage(id) => return self.select_page(id),
            Message::NextPage => {
                return self
                    .pages
                    .select_next(&mut self.transform)
                    .map_or(Effect::None, |page| Effect::PageChanged { id: page.id() });
            }
            Message::PreviousPage => {
                return self
                    .pages
                    .select_previous(&mut self.transform)
                    .map_or(Effect::None, |page| Effect::PageChanged { id: page.id() });
            }
        }

        if (self.transform.scale(), self.transform.offset()) == before {
            Effect::None
        } else {
            Effect::TransformChanged
        }
    }

    fn select_page(&mut self, id: usize) -> Effect {
        match self.pages.select_page(id, &mut self.transform) {
            Ok(page) => Effect::PageChanged { id: page.id() },
            Err(err) => {
                tracing::error!(%err, "thumbnail selection out of range");
                Effect::None
            }
        }
    }

    /// Snapshot for the rendering layer.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let page = self.pages.current_page();
        Frame {
            page_id: page.id(),
            page_count: self.pages.len(),
            image_name: page.image_name().to_string(),
            thumbnail_name: page.thumbnail_name(),
            scale: self.transform.scale(),
            offset: self.transform.offset(),
            has_next: self.pages.has_next(),
            has_previous: self.pages.has_previous(),
        }
    }
}
