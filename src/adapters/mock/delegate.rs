//! Recording delegate for testing.

use std::ops::Range;
use std::sync::Mutex;

use crate::traits::{FolderListDelegate, GridDelegate, TextFieldDelegate};

/// One delegate callback, as recorded by [`RecordingDelegate`].
#[derive(Debug, Clone, PartialEq)]
pub enum DelegateEvent {
    WillDisplay(usize),
    Scrolled(f32),
    Selected(usize),
    Favorite { index: usize, is_favorite: bool },
    StartedRefreshing,
    Retry,
    AddButton(Option<String>),
    SearchFocused,
    SearchText(String),
    BeganEditing,
    EndedEditing(String),
    TextChanged(String),
    MultilineAction,
}

/// Delegate that records every callback in order.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    events: Mutex<Vec<DelegateEvent>>,
    reject_edits: bool,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// A delegate that vetoes every text edit.
    pub fn rejecting_edits() -> Self {
        Self {
            reject_edits: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Recorded events other than `WillDisplay` and `Scrolled`.
    pub fn actions(&self) -> Vec<DelegateEvent> {
        self.events()
            .into_iter()
            .filter(|e| !matches!(e, DelegateEvent::WillDisplay(_) | DelegateEvent::Scrolled(_)))
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, event: DelegateEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl GridDelegate for RecordingDelegate {
    fn will_display_item(&self, index: usize) {
        self.record(DelegateEvent::WillDisplay(index));
    }

    fn did_scroll(&self, offset_y: f32) {
        self.record(DelegateEvent::Scrolled(offset_y));
    }

    fn did_select_item(&self, index: usize) {
        self.record(DelegateEvent::Selected(index));
    }

    fn did_select_favorite(&self, index: usize, is_favorite: bool) {
        self.record(DelegateEvent::Favorite { index, is_favorite });
    }

    fn did_start_refreshing(&self) {
        self.record(DelegateEvent::StartedRefreshing);
    }

    fn did_select_retry(&self) {
        self.record(DelegateEvent::Retry);
    }
}

impl FolderListDelegate for RecordingDelegate {
    fn did_select_item(&self, index: usize) {
        self.record(DelegateEvent::Selected(index));
    }

    fn did_select_add_button(&self, search_text: Option<&str>) {
        self.record(DelegateEvent::AddButton(search_text.map(str::to_string)));
    }

    fn did_focus_search_bar(&self) {
        self.record(DelegateEvent::SearchFocused);
    }

    fn did_change_search_text(&self, search_text: &str) {
        self.record(DelegateEvent::SearchText(search_text.to_string()));
    }
}

impl TextFieldDelegate for RecordingDelegate {
    fn did_begin_editing(&self) {
        self.record(DelegateEvent::BeganEditing);
    }

    fn did_end_editing(&self, text: &str) {
        self.record(DelegateEvent::EndedEditing(text.to_string()));
    }

    fn should_change_text(&self, _range: Range<usize>, _replacement: &str) -> bool {
        !self.reject_edits
    }

    fn did_change_text(&self, text: &str) {
        self.record(DelegateEvent::TextChanged(text.to_string()));
    }

    fn did_tap_multiline_action(&self) {
        self.record(DelegateEvent::MultilineAction);
    }
}
