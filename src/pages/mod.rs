// SPDX-License-Identifier: MPL-2.0
//! Page set for the thumbnail drawer.
//!
//! A [`PageSet`] is an ordered, read-only list of [`Page`]s loaded once at
//! startup, plus the index of the page currently on screen. Selecting a page
//! resets the image transform so every page opens unzoomed.

pub mod manifest;

pub use manifest::{load_manifest, Manifest, ManifestEntry};

use crate::error::{Error, Result};
use crate::ui::state::TransformState;

/// Prefix prepended to an image name to form its thumbnail asset name.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// One navigable image: a full-resolution asset and its derived thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: usize,
    image_name: String,
}

impl Page {
    #[must_use]
    pub fn new(id: usize, image_name: impl Into<String>) -> Self {
        Self {
            id,
            image_name: image_name.into(),
        }
    }

    /// Stable id, equal to the page's position in its [`PageSet`].
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Full-resolution asset reference.
    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Thumbnail asset reference (`"thumb-" + image_name`).
    #[must_use]
    pub fn thumbnail_name(&self) -> String {
        format!("{THUMBNAIL_PREFIX}{}", self.image_name)
    }
}

/// Ordered pages and the currently displayed one.
///
/// Always holds at least one page, and `current_index() < len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSet {
    pages: Vec<Page>,
    current_index: usize,
}

impl PageSet {
    /// Creates a page set positioned on the first page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPageSet`] for an empty list, and
    /// [`Error::Manifest`] if a page id does not match its position.
    pub fn new(pages: Vec<Page>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyPageSet);
        }
        if let Some((position, page)) = pages
            .iter()
            .enumerate()
            .find(|(position, page)| page.id != *position)
        {
            return Err(Error::Manifest(format!(
                "page '{}' has id {} but is at position {}",
                page.image_name, page.id, position
            )));
        }
        Ok(Self {
            pages,
            current_index: 0,
        })
    }

    /// Builds a page set from a parsed manifest.
    ///
    /// # Errors
    ///
    /// Same as [`PageSet::new`].
    pub fn from_manifest(manifest: Manifest) -> Result<Self> {
        Self::new(
            manifest
                .page
                .into_iter()
                .map(|entry| Page::new(entry.id, entry.image_name))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the set has no pages; `false` for any constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The page currently on screen.
    #[must_use]
    pub fn current_page(&self) -> &Page {
        &self.pages[self.current_index]
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.pages.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Makes page `id` current and resets `transform`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageId`] if `id` is out of range; neither the
    /// page set nor the transform is modified in that case.
    pub fn select_page(&mut self, id: usize, transform: &mut TransformState) -> Result<&Page> {
        if id >= self.pages.len() {
            return Err(Error::InvalidPageId {
                id,
                len: self.pages.len(),
            });
        }
        self.current_index = id;
        transform.reset();
        tracing::debug!(id, image = %self.pages[id].image_name, "page selected");
        Ok(&self.pages[id])
    }

    /// Selects the following page, if any.
    pub fn select_next(&mut self, transform: &mut TransformState) -> Option<&Page> {
        if !self.has_next() {
            return None;
        }
        self.select_page(self.current_index + 1, transform).ok()
    }

    /// Selects the preceding page, if any.
    pub fn select_previous(&mut self, transform: &mut TransformState) -> Option<&Page> {
        if !self.has_previous() {
            return None;
        }
        self.select_page(self.current_index - 1, transform).ok()
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced_core::Vector;

    fn magazine() -> PageSet {
        PageSet::new(vec![
            Page::new(0, "magazine-front-cover"),
            Page::new(1, "magazine-back-cover"),
            Page::new(2, "magazine-inner-spread"),
        ])
        .expect("valid page set")
    }

    fn zoomed_transform() -> TransformState {
        let mut transform = TransformState::default();
        transform.step_scale(2.0);
        transform.on_drag_changed(Vector::new(52.5, 21.0));
        transform.on_drag_ended(Vector::new(52.5, 21.0));
        transform
    }

    #[test]
    fn thumbnail_name_is_prefixed() {
        let page = Page::new(0, "magazine-front-cover");
        assert_eq!(page.thumbnail_name(), "thumb-magazine-front-cover");
    }

    #[test]
    fn new_page_set_starts_on_first_page() {
        let pages = magazine();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages.current_index(), 0);
        assert_eq!(pages.current_page().image_name(), "magazine-front-cover");
    }

    #[test]
    fn empty_page_set_is_rejected() {
        assert_eq!(PageSet::new(Vec::new()), Err(Error::EmptyPageSet));
    }

    #[test]
    fn mismatched_ids_are_rejected() {
        let result = PageSet::new(vec![Page::new(0, "a"), Page::new(5, "b")]);
        assert!(matches!(result, Err(Error::Manifest(message)) if message.contains("position 1")));
    }

    #[test]
    fn select_page_resets_transform() {
        let mut pages = magazine();
        let mut transform = zoomed_transform();
        assert_eq!(transform.scale(), 3.0);

        let page = pages.select_page(2, &mut transform).expect("valid id");
        assert_eq!(page.id(), 2);
        assert_eq!(pages.current_page().id(), 2);
        assert_eq!(transform.scale(), 1.0);
        assert_eq!(transform.offset(), Vector::ZERO);
        assert_eq!(transform.drag_baseline(), Vector::ZERO);
    }

    #[test]
    fn select_invalid_page_leaves_state_untouched() {
        let mut pages = magazine();
        let mut transform = zoomed_transform();
        let before = transform.clone();

        let result = pages.select_page(3, &mut transform);
        assert_eq!(result, Err(Error::InvalidPageId { id: 3, len: 3 }));
        assert_eq!(pages.current_index(), 0);
        assert_eq!(transform, before);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        let mut pages = magazine();
        let mut transform = TransformState::default();

        assert!(pages.select_previous(&mut transform).is_none());
        assert_eq!(pages.select_next(&mut transform).map(Page::id), Some(1));
        assert_eq!(pages.select_next(&mut transform).map(Page::id), Some(2));
        assert!(pages.select_next(&mut transform).is_none());
        assert_eq!(pages.current_index(), 2);
        assert_eq!(pages.select_previous(&mut transform).map(Page::id), Some(1));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let pages = magazine();
        let ids: Vec<usize> = pages.iter().map(Page::id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
