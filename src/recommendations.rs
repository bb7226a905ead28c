//! Recommendations screen.
//!
//! Composes the paging grid, its retry view and the inline consent overlay
//! under one header, the way the front page shows personalised ads.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consent::{
    dialogue_frame, ConsentOverlayController, DialogueModel, OverlayFrames, Rect, ScreenClass,
};
use crate::domain::RetryState;
use crate::error::PageGridResult;
use crate::grid::{GridController, GridMessage, GridSignal};
use crate::traits::PagedItemSource;

/// Texts shown by the recommendations screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationsModel {
    pub header_title: String,
    pub retry_button_title: String,
    pub no_recommendations_text: String,
    pub consent_dialogue: DialogueModel,
}

/// What the retry view shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryView<'a> {
    pub state: RetryState,
    pub label: Option<&'a str>,
    pub button_title: Option<&'a str>,
}

/// Recommendations grid with header, retry view and consent overlay.
pub struct RecommendationsScreen<S: PagedItemSource> {
    grid: GridController<S>,
    consent: ConsentOverlayController,
    model: Option<RecommendationsModel>,
}

impl<S: PagedItemSource> RecommendationsScreen<S> {
    pub fn new(grid: GridController<S>, model: Option<RecommendationsModel>) -> Self {
        let dialogue = model.as_ref().map(|m| m.consent_dialogue.clone());
        let consent = ConsentOverlayController::new(dialogue);
        Self {
            grid,
            consent,
            model,
        }
    }

    pub fn model(&self) -> Option<&RecommendationsModel> {
        self.model.as_ref()
    }

    /// Replace the texts, including the consent dialogue's.
    pub fn set_model(&mut self, model: Option<RecommendationsModel>) {
        self.consent
            .set_model(model.as_ref().map(|m| m.consent_dialogue.clone()));
        self.model = model;
    }

    pub fn grid(&self) -> &GridController<S> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridController<S> {
        &mut self.grid
    }

    pub fn consent(&self) -> &ConsentOverlayController {
        &self.consent
    }

    pub fn header_title(&self) -> Option<&str> {
        self.model.as_ref().map(|m| m.header_title.as_str())
    }

    /// Retry view contents. Texts are only present while the view shows them.
    pub fn retry_view(&self) -> RetryView<'_> {
        let state = self.grid.retry_state();
        let texts = match (state, self.model.as_ref()) {
            (RetryState::LabelAndButton, Some(model)) => Some(model),
            _ => None,
        };
        RetryView {
            state,
            label: texts.map(|m| m.no_recommendations_text.as_str()),
            button_title: texts.map(|m| m.retry_button_title.as_str()),
        }
    }

    /// Overlay layout while the consent dialogue is visible.
    pub fn overlay_frames(
        &self,
        bounds: Rect,
        header_bottom: f32,
        class: ScreenClass,
        content_height: f32,
    ) -> Option<OverlayFrames> {
        self.consent
            .is_visible()
            .then(|| dialogue_frame(bounds, header_bottom, class, content_height))
    }

    /// Full refresh after the host replaced its data.
    pub fn reload_data(&mut self) -> Option<Range<usize>> {
        self.reload_ads()
    }

    /// Hide the retry view and reload the ads.
    pub fn reload_ads(&mut self) -> Option<Range<usize>> {
        self.grid.reload()
    }

    /// Reload after the header's market shortcuts changed.
    pub fn reload_markets(&mut self) -> Option<Range<usize>> {
        tracing::debug!("Reloading markets");
        self.grid.reload()
    }

    pub fn update_ad(&mut self, index: usize, is_favorite: bool) -> bool {
        self.grid.update_item(index, is_favorite)
    }

    /// Loading the ads failed; offer a retry.
    pub fn show_retry_button(&mut self) {
        self.grid.report_load_failure();
    }

    pub fn select_retry_button(&mut self) -> PageGridResult<()> {
        self.grid.retry_failed_load()
    }

    pub fn show_inline_consent(&mut self, detail: Option<&str>) {
        self.consent.show(&mut self.grid, detail);
    }

    pub fn hide_inline_consent(&mut self) {
        self.consent.hide(&mut self.grid);
    }

    /// The user accepted the consent dialogue: hide it and reload.
    pub fn consent_primary_action(&mut self) -> Option<Range<usize>> {
        self.hide_inline_consent();
        self.grid.reload()
    }

    pub fn scroll_to_top(&mut self) {
        self.grid.scroll_to_top();
    }

    pub fn set_refresh_enabled(&mut self, enabled: bool) {
        self.grid.set_refresh_enabled(enabled);
    }

    pub fn is_refresh_enabled(&self) -> bool {
        self.grid.is_refresh_enabled()
    }

    pub fn handle_message(&mut self, message: GridMessage) {
        self.grid.handle_message(message);
    }

    pub fn take_signals(&mut self) -> Vec<GridSignal> {
        self.grid.take_signals()
    }
}
