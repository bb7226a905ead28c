//! Searchable list of favourite folders.
//!
//! The list has two sections: a single "add folder" row, hidden while a
//! search is active, followed by one row per folder. A collapsing footer
//! (see [`footer`]) offers the same "add folder" action once the top row
//! scrolls away.

pub mod footer;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::images::{CellSlots, ImageCache, ImageLoaded, SlotId, SlotImage};
use crate::traits::{FolderListDelegate, PagedItemSource};

pub use footer::{FooterLayout, ScrollMetrics, FOOTER_BASE_HEIGHT, ROW_HEIGHT};

/// Texts of the folder list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FolderListModel {
    pub add_folder_text: String,
    pub empty_view_body_prefix: String,
    pub search_bar_placeholder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    AddButton,
    Folders,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::AddButton, Section::Folders];
}

/// Result of [`FolderListController::reload_data`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FolderReload {
    pub show_empty_view: bool,
    pub footer_offset: f32,
}

/// Headless controller for the favourite-folder list.
pub struct FolderListController<S: PagedItemSource> {
    model: FolderListModel,
    source: S,
    delegate: Arc<dyn FolderListDelegate>,
    footer: FooterLayout,
    footer_offset: f32,
    search_text: String,
    search_active: bool,
    slots: CellSlots,
    tx: mpsc::UnboundedSender<ImageLoaded>,
}

impl<S: PagedItemSource> FolderListController<S> {
    pub fn new(
        model: FolderListModel,
        source: S,
        delegate: Arc<dyn FolderListDelegate>,
        cache: ImageCache,
        tx: mpsc::UnboundedSender<ImageLoaded>,
    ) -> Self {
        Self {
            model,
            source,
            delegate,
            footer: FooterLayout::default(),
            footer_offset: 0.0,
            search_text: String::new(),
            search_active: false,
            slots: CellSlots::new(cache),
            tx,
        }
    }

    pub fn with_footer_layout(mut self, footer: FooterLayout) -> Self {
        self.footer = footer;
        self
    }

    pub fn model(&self) -> &FolderListModel {
        &self.model
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    /// Current trimmed search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn footer_offset(&self) -> f32 {
        self.footer_offset
    }

    pub fn rows_in(&self, section: Section) -> usize {
        match section {
            Section::AddButton if self.search_active => 0,
            Section::AddButton => 1,
            Section::Folders => self.source.count(),
        }
    }

    /// Model of a folder row.
    ///
    /// # Panics
    ///
    /// If `row` is not below the folder count.
    pub fn folder(&self, row: usize) -> S::Item {
        assert!(row < self.source.count(), "folder row {} out of range", row);
        self.source.item_at(row)
    }

    pub fn select_row(&self, section: Section, row: usize) {
        match section {
            Section::AddButton => self.delegate.did_select_add_button(None),
            Section::Folders => self.delegate.did_select_item(row),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn search_focused(&self) {
        self.delegate.did_focus_search_bar();
    }

    /// The search bar text changed. The search is active iff the trimmed
    /// text is non-empty.
    pub fn search_text_changed(&mut self, text: &str) {
        let trimmed = text.trim();
        self.search_active = !trimmed.is_empty();
        self.search_text = trimmed.to_string();
        tracing::debug!(active = self.search_active, "Folder search changed");
        self.delegate.did_change_search_text(trimmed);
    }

    /// Editing ended with `text` in the bar.
    pub fn search_ended(&mut self, text: &str) {
        if text.is_empty() {
            self.search_active = false;
        }
    }

    /// "Add folder" from the empty view, named after the current search.
    pub fn select_empty_view_add_button(&self) {
        self.delegate
            .did_select_add_button(Some(self.search_text.as_str()));
    }

    pub fn select_footer_button(&self) {
        self.delegate.did_select_add_button(None);
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// The host changed the folders. Returns whether to show the empty view
    /// and where the footer goes.
    pub fn reload_data(&mut self) -> FolderReload {
        self.footer_offset = self.footer.reload_offset(self.search_active);
        FolderReload {
            show_empty_view: self.source.count() == 0,
            footer_offset: self.footer_offset,
        }
    }

    /// The list scrolled. Returns the new footer offset.
    pub fn did_scroll(&mut self, metrics: ScrollMetrics) -> f32 {
        self.footer_offset = self
            .footer
            .scroll_offset(metrics, self.search_active, self.footer_offset);
        self.footer_offset
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// Folder `row` is about to be shown in `slot`.
    pub fn will_display(&mut self, slot: SlotId, row: usize, width: f32) -> SlotImage {
        let item = self.folder(row);
        let path = self.source.image_path(&item);
        let source = &self.source;
        let tx = self.tx.clone();

        self.slots.bind(
            slot,
            row,
            path,
            width,
            |path| source.load_image(path, width),
            move |loaded| {
                let _ = tx.send(loaded);
            },
        )
    }

    pub fn did_end_display(&mut self, slot: SlotId) -> bool {
        self.slots.release(slot)
    }

    /// Apply an image completion. Returns the row to redraw.
    pub fn handle_image_loaded(&mut self, loaded: ImageLoaded) -> Option<usize> {
        self.slots.apply(loaded)
    }

    pub fn slot_image(&self, slot: SlotId) -> Option<Arc<crate::images::DecodedImage>> {
        self.slots.image(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{DelegateEvent, MockItemSource, RecordingDelegate};

    type Rx = mpsc::UnboundedReceiver<ImageLoaded>;

    fn list(count: usize) -> (FolderListController<MockItemSource>, Arc<RecordingDelegate>, Rx) {
        let (tx, rx) = mpsc::unbounded_channel();
        let delegate = Arc::new(RecordingDelegate::new());
        let model = FolderListModel {
            add_folder_text: "New list".to_string(),
            empty_view_body_prefix: "No lists match".to_string(),
            search_bar_placeholder: "Search lists".to_string(),
        };
        let list = FolderListController::new(
            model,
            MockItemSource::new(count),
            delegate.clone(),
            ImageCache::new(),
            tx,
        );
        (list, delegate, rx)
    }

    #[test]
    fn test_sections() {
        let (mut list, _, _) = list(5);
        assert_eq!(list.rows_in(Section::AddButton), 1);
        assert_eq!(list.rows_in(Section::Folders), 5);

        list.search_text_changed("  cars ");
        assert!(list.is_search_active());
        assert_eq!(list.rows_in(Section::AddButton), 0);
        assert_eq!(list.search_text(), "cars");

        list.search_text_changed("   ");
        assert!(!list.is_search_active());
        assert_eq!(list.rows_in(Section::AddButton), 1);
    }

    #[test]
    fn test_search_ended_only_clears_on_empty_text() {
        let (mut list, _, _) = list(5);
        list.search_text_changed("boat");
        list.search_ended("boat");
        assert!(list.is_search_active());

        list.search_ended("");
        assert!(!list.is_search_active());
    }

    #[test]
    fn test_delegate_events() {
        let (mut list, delegate, _) = list(5);
        list.search_focused();
        list.select_row(Section::AddButton, 0);
        list.select_row(Section::Folders, 3);
        list.search_text_changed(" summer house ");
        list.select_empty_view_add_button();
        list.select_footer_button();

        assert_eq!(
            delegate.events(),
            vec![
                DelegateEvent::SearchFocused,
                DelegateEvent::AddButton(None),
                DelegateEvent::Selected(3),
                DelegateEvent::SearchText("summer house".to_string()),
                DelegateEvent::AddButton(Some("summer house".to_string())),
                DelegateEvent::AddButton(None),
            ]
        );
    }

    #[test]
    fn test_reload_data() {
        let (mut list, _, _) = list(0);
        assert_eq!(
            list.reload_data(),
            FolderReload {
                show_empty_view: true,
                footer_offset: 0.0
            }
        );

        list.source_mut().push_items(2);
        list.search_text_changed("x");
        let reload = list.reload_data();
        assert!(!reload.show_empty_view);
        assert_eq!(reload.footer_offset, -FOOTER_BASE_HEIGHT);
    }

    #[test]
    fn test_did_scroll_tracks_offset() {
        let (mut list, _, _) = list(40);
        let metrics = ScrollMetrics {
            content_offset_y: 80.0,
            content_height: 40.0 * ROW_HEIGHT,
            frame_height: 600.0,
        };
        assert_eq!(list.did_scroll(metrics), -24.0);
        assert_eq!(list.footer_offset(), -24.0);
    }

    #[tokio::test]
    async fn test_will_display_loads_and_applies() {
        let (mut list, _, mut rx) = list(3);
        assert!(list.will_display(SlotId(0), 1, 64.0).is_loading());

        let loaded = rx.recv().await.unwrap();
        assert_eq!(list.handle_image_loaded(loaded), Some(1));
        assert!(list.slot_image(SlotId(0)).is_some());
        assert!(list.did_end_display(SlotId(0)));
    }
}
