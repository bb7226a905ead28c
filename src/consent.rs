//! Inline consent overlay.
//!
//! While the consent dialogue is visible the grid underneath is masked by a
//! lock view: the refresh indicator is stopped and paging triggers are
//! recorded without emitting fetch signals. Hiding the dialogue resumes
//! fetching but does not reload; the host decides when to reload.

use serde::{Deserialize, Serialize};

use crate::domain::ConsentState;

/// The grid-side half of the consent overlay.
pub trait OverlayTarget {
    /// Stop the pull-to-refresh indicator.
    fn end_refreshing(&mut self);

    /// Suspend or resume fetch signals.
    fn set_fetch_suspended(&mut self, suspended: bool);
}

/// Texts of the consent dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogueModel {
    pub title: String,
    pub detail: String,
    pub primary_button_title: String,
    #[serde(default)]
    pub link_title: Option<String>,
}

/// Screen size class used for the dialogue proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenClass {
    #[default]
    Phone,
    SmallPhone,
    Tablet,
    LargeTablet,
}

impl ScreenClass {
    /// Dialogue `(width, height)` as fractions of the view bounds.
    pub fn dialogue_proportions(&self) -> (f32, f32) {
        match self {
            ScreenClass::Phone => (0.8, 0.3),
            ScreenClass::SmallPhone => (0.9, 0.5),
            ScreenClass::Tablet => (0.5, 0.22),
            ScreenClass::LargeTablet => (0.5, 0.16),
        }
    }
}

/// Axis-aligned rectangle in view points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Frames of the dialogue and the lock view behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrames {
    pub dialogue: Rect,
    pub lock_view: Rect,
}

/// Gap between the header bottom and the dialogue.
const DIALOGUE_TOP_SPACING: f32 = 25.0;

/// Lay out the overlay inside `bounds`.
///
/// The dialogue is centred horizontally below the header; its height is the
/// screen-class fraction of the bounds plus `content_height`, the height its
/// texts need at the resulting width. The lock view spans the full width
/// from the header bottom and twice the bounds height, since item heights
/// below vary.
pub fn dialogue_frame(
    bounds: Rect,
    header_bottom: f32,
    class: ScreenClass,
    content_height: f32,
) -> OverlayFrames {
    let (width_fraction, height_fraction) = class.dialogue_proportions();
    let width = bounds.width * width_fraction;
    let height = bounds.height * height_fraction + content_height;

    OverlayFrames {
        dialogue: Rect::new(
            (bounds.width - width) / 2.0,
            header_bottom + DIALOGUE_TOP_SPACING,
            width,
            height,
        ),
        lock_view: Rect::new(0.0, header_bottom, bounds.width, bounds.height * 2.0),
    }
}

/// Shows and hides the consent dialogue over an [`OverlayTarget`].
#[derive(Debug, Clone, Default)]
pub struct ConsentOverlayController {
    state: ConsentState,
    model: Option<DialogueModel>,
}

impl ConsentOverlayController {
    pub fn new(model: Option<DialogueModel>) -> Self {
        Self {
            state: ConsentState::Hidden,
            model,
        }
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn model(&self) -> Option<&DialogueModel> {
        self.model.as_ref()
    }

    pub fn set_model(&mut self, model: Option<DialogueModel>) {
        self.model = model;
    }

    /// Show the dialogue, optionally replacing its detail text.
    ///
    /// The detail override is dropped when no model is set.
    pub fn show<T: OverlayTarget + ?Sized>(&mut self, target: &mut T, detail: Option<&str>) {
        if let (Some(detail), Some(model)) = (detail, self.model.as_mut()) {
            model.detail = detail.to_string();
        }

        self.state = ConsentState::Visible;
        target.end_refreshing();
        target.set_fetch_suspended(true);
        tracing::info!("Consent overlay shown");
    }

    /// Hide the dialogue and resume fetching. Does not reload.
    pub fn hide<T: OverlayTarget + ?Sized>(&mut self, target: &mut T) {
        self.state = ConsentState::Hidden;
        target.end_refreshing();
        target.set_fetch_suspended(false);
        tracing::info!("Consent overlay hidden");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Target {
        end_calls: usize,
        suspended: bool,
    }

    impl OverlayTarget for Target {
        fn end_refreshing(&mut self) {
            self.end_calls += 1;
        }

        fn set_fetch_suspended(&mut self, suspended: bool) {
            self.suspended = suspended;
        }
    }

    fn model() -> DialogueModel {
        DialogueModel {
            title: "Personalised ads".to_string(),
            detail: "We use your activity to pick ads.".to_string(),
            primary_button_title: "Accept".to_string(),
            link_title: Some("Read more".to_string()),
        }
    }

    #[test]
    fn test_show_and_hide() {
        let mut overlay = ConsentOverlayController::new(Some(model()));
        let mut target = Target::default();
        assert!(!overlay.is_visible());

        overlay.show(&mut target, None);
        assert!(overlay.is_visible());
        assert!(target.suspended);
        assert_eq!(target.end_calls, 1);

        overlay.hide(&mut target);
        assert_eq!(overlay.state(), ConsentState::Hidden);
        assert!(!target.suspended);
        assert_eq!(target.end_calls, 2);
    }

    #[test]
    fn test_show_overrides_detail() {
        let mut overlay = ConsentOverlayController::new(Some(model()));
        overlay.show(&mut Target::default(), Some("Updated terms"));
        assert_eq!(overlay.model().unwrap().detail, "Updated terms");
        assert_eq!(overlay.model().unwrap().title, "Personalised ads");
    }

    #[test]
    fn test_show_without_model() {
        let mut overlay = ConsentOverlayController::default();
        overlay.show(&mut Target::default(), Some("ignored"));
        assert!(overlay.is_visible());
        assert!(overlay.model().is_none());
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_dialogue_frame_phone() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 800.0);
        let frames = dialogue_frame(bounds, 100.0, ScreenClass::Phone, 60.0);

        assert_close(frames.dialogue.x, 40.0);
        assert_close(frames.dialogue.y, 125.0);
        assert_close(frames.dialogue.width, 320.0);
        assert_close(frames.dialogue.height, 300.0);
        assert_eq!(frames.lock_view, Rect::new(0.0, 100.0, 400.0, 1600.0));
    }

    #[test]
    fn test_dialogue_frame_tablets() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);

        let tablet = dialogue_frame(bounds, 0.0, ScreenClass::Tablet, 0.0);
        assert_close(tablet.dialogue.width, 500.0);
        assert_close(tablet.dialogue.x, 250.0);
        assert_close(tablet.dialogue.height, 220.0);

        let large = dialogue_frame(bounds, 0.0, ScreenClass::LargeTablet, 0.0);
        assert_close(large.dialogue.height, 160.0);

        let small = dialogue_frame(bounds, 0.0, ScreenClass::SmallPhone, 0.0);
        assert_close(small.dialogue.width, 900.0);
        assert_close(small.dialogue.height, 500.0);
    }

    #[test]
    fn test_dialogue_model_json() {
        let json = r#"{"title":"T","detail":"D","primary_button_title":"OK"}"#;
        let model: DialogueModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.link_title, None);
        assert_eq!(model.primary_button_title, "OK");
    }
}
