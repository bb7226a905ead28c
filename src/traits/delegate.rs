//! Host-screen delegate traits.
//!
//! Controllers report user interaction to the host through these traits.
//! Calls happen synchronously on the event loop; a delegate must not call
//! back into the controller that is notifying it, so hosts usually queue the
//! event and act on it on the next loop turn.

/// Events the paging grid reports to its host screen.
pub trait GridDelegate: Send + Sync {
    /// An item is about to be shown.
    fn will_display_item(&self, _index: usize) {}

    /// The surface scrolled to `offset_y`.
    fn did_scroll(&self, _offset_y: f32) {}

    fn did_select_item(&self, _index: usize) {}

    /// The favourite button of an item was tapped. `is_favorite` is the
    /// state the item had when tapped.
    fn did_select_favorite(&self, _index: usize, _is_favorite: bool) {}

    /// The user pulled to refresh.
    fn did_start_refreshing(&self) {}

    /// The user tapped the retry button.
    fn did_select_retry(&self) {}
}

/// Events the favourite-folder list reports to its host screen.
pub trait FolderListDelegate: Send + Sync {
    fn did_select_item(&self, index: usize);

    /// The "add folder" row, footer or empty-view button was tapped.
    fn did_select_add_button(&self, search_text: Option<&str>);

    fn did_focus_search_bar(&self) {}

    /// Search text changed; `search_text` is already trimmed.
    fn did_change_search_text(&self, search_text: &str);
}

/// Events a text field reports to its host form.
pub trait TextFieldDelegate: Send + Sync {
    fn did_begin_editing(&self) {}

    /// Editing ended with `text` in the field.
    fn did_end_editing(&self, _text: &str) {}

    /// Return key pressed. Returning false keeps the keyboard up.
    fn should_return(&self) -> bool {
        true
    }

    /// Asked before `replacement` replaces the byte range `range` of the text.
    fn should_change_text(&self, _range: std::ops::Range<usize>, _replacement: &str) -> bool {
        true
    }

    /// The user changed the text to `text`.
    fn did_change_text(&self, _text: &str) {}

    /// A multiline field was tapped; the host presents its own editor.
    fn did_tap_multiline_action(&self) {}
}
