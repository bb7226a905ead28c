//! Scripted demo hosts for the binary.
//!
//! Each demo plays the part of a host screen: it owns the event loop, feeds
//! the controllers simulated scrolling and taps, and logs what the surface
//! would do with the resulting signals.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::adapters::mock::{
    DelegateEvent, MockImageLoader, MockItem, MockItemSource, RecordingDelegate,
};
use crate::consent::{DialogueModel, Rect, ScreenClass};
use crate::error::PageGridResult;
use crate::folders::{FolderListController, FolderListModel, ScrollMetrics, Section, ROW_HEIGHT};
use crate::gallery::{GalleryModel, GalleryPager};
use crate::grid::{GridConfig, GridController, GridMessage, GridSignal, PagingOutcome};
use crate::images::{ImageCache, SlotId};
use crate::recommendations::{RecommendationsModel, RecommendationsScreen};
use crate::text_field::{InputType, TextFieldController, Underline};

/// Number of ads in the recommendations demo, before the banner.
pub const DEMO_AD_COUNT: usize = 120;
/// Position of the banner ad.
pub const DEMO_BANNER_INDEX: usize = 4;
/// Simulated image latency.
pub const DEMO_IMAGE_DELAY: Duration = Duration::from_millis(50);
/// Reusable cells on the simulated surface.
const DEMO_SLOTS: usize = 6;
const DEMO_CELL_WIDTH: f32 = 180.0;

/// What a demo run did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoReport {
    pub pages_fetched: usize,
    pub reloads: usize,
    pub images_loaded: usize,
    pub final_visible: usize,
    pub fields_valid: usize,
}

pub fn recommendations_model() -> RecommendationsModel {
    RecommendationsModel {
        header_title: "Recommendations".to_string(),
        retry_button_title: "Try again".to_string(),
        no_recommendations_text: "We could not load your recommendations.".to_string(),
        consent_dialogue: DialogueModel {
            title: "Personalised recommendations".to_string(),
            detail: "Allow us to use your activity to recommend ads.".to_string(),
            primary_button_title: "Allow".to_string(),
            link_title: Some("Read more".to_string()),
        },
    }
}

/// The demo ad list: numbered ads with one banner near the top.
pub fn demo_ads() -> Vec<MockItem> {
    let mut ads: Vec<MockItem> = (0..DEMO_AD_COUNT).map(MockItem::new).collect();
    ads.insert(DEMO_BANNER_INDEX, MockItem::banner(DEMO_AD_COUNT));
    ads
}

fn tally(report: &mut DemoReport, signals: Vec<GridSignal>) {
    for signal in signals {
        match &signal {
            GridSignal::FetchRange { range } => {
                report.pages_fetched += 1;
                tracing::info!(start = range.start, end = range.end, "Surface inserts page");
            }
            GridSignal::Reload { range } => {
                report.reloads += 1;
                tracing::info!(end = range.end, "Surface reloads");
            }
            GridSignal::ImageReady { slot, index } => {
                report.images_loaded += 1;
                tracing::debug!(slot = slot.0, index, "Cell image ready");
            }
            other => tracing::debug!(signal = ?other, "Surface signal"),
        }
    }
}

/// Drain delegate actions the way the demo host answers them.
fn answer_delegate<S: crate::traits::PagedItemSource>(
    screen: &mut RecommendationsScreen<S>,
    delegate: &RecordingDelegate,
) {
    for event in delegate.actions() {
        match event {
            DelegateEvent::Retry | DelegateEvent::StartedRefreshing => {
                screen.reload_data();
                screen.grid_mut().end_refreshing();
            }
            DelegateEvent::Favorite { index, is_favorite } => {
                screen.update_ad(index, !is_favorite);
            }
            DelegateEvent::Selected(index) => tracing::info!(index, "Ad selected"),
            _ => {}
        }
    }
    delegate.clear();
}

/// Scroll through the recommendations grid, fail once, retry, and walk
/// through the consent overlay.
pub async fn run_recommendations(config: GridConfig) -> PageGridResult<DemoReport> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let delegate = Arc::new(RecordingDelegate::new());
    let loader = MockImageLoader::new().with_delay(DEMO_IMAGE_DELAY);
    let source = MockItemSource::with_items(demo_ads()).with_loader(Arc::new(loader));
    let grid = GridController::new(source, delegate.clone(), ImageCache::new(), config, tx)?;
    let mut screen = RecommendationsScreen::new(grid, Some(recommendations_model()));
    let mut report = DemoReport::default();

    screen.set_refresh_enabled(true);
    screen.reload_data();
    tally(&mut report, screen.take_signals());

    let mut index = 0;
    let mut failed_once = false;
    while index < screen.grid().effective_count() {
        let slot = SlotId(index % DEMO_SLOTS);
        let image = screen.grid_mut().bind_cell(slot, index, DEMO_CELL_WIDTH);
        let outcome = screen.grid_mut().notify_will_display(index);

        if image.is_loading() {
            let message = rx.recv().await;
            if let Some(message) = message {
                screen.handle_message(message);
            }
        }

        if outcome == PagingOutcome::Scheduled {
            if !failed_once && screen.grid().visible_count() > 40 {
                failed_once = true;
                screen.show_retry_button();
                tracing::info!(retry = ?screen.retry_view(), "Simulated page failure");
                screen.select_retry_button()?;
                answer_delegate(&mut screen, &delegate);
            } else {
                wait_for_page(&mut screen, &mut rx).await;
            }
        }
        tally(&mut report, screen.take_signals());

        if index == 2 {
            screen.grid().toggle_favorite(index, false);
            answer_delegate(&mut screen, &delegate);
        }
        index += 1;
    }

    screen.show_inline_consent(None);
    let bounds = Rect::new(0.0, 0.0, 390.0, 844.0);
    if let Some(frames) = screen.overlay_frames(bounds, 110.0, ScreenClass::Phone, 120.0) {
        tracing::info!(dialogue = ?frames.dialogue, "Consent overlay laid out");
    }
    screen.scroll_to_top();
    screen.consent_primary_action();
    tally(&mut report, screen.take_signals());

    report.final_visible = screen.grid().effective_count();
    Ok(report)
}

async fn wait_for_page<S: crate::traits::PagedItemSource>(
    screen: &mut RecommendationsScreen<S>,
    rx: &mut mpsc::UnboundedReceiver<GridMessage>,
) {
    while screen.grid().pending_range().is_some() {
        match rx.recv().await {
            Some(message) => screen.handle_message(message),
            None => break,
        }
    }
}

/// Search and scroll the favourite-folder list.
pub async fn run_folders() -> PageGridResult<DemoReport> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let delegate = Arc::new(RecordingDelegate::new());
    let model = FolderListModel {
        add_folder_text: "New list".to_string(),
        empty_view_body_prefix: "No lists called".to_string(),
        search_bar_placeholder: "Search your lists".to_string(),
    };
    let mut list = FolderListController::new(
        model,
        MockItemSource::new(24),
        delegate.clone(),
        ImageCache::new(),
        tx,
    );
    let mut report = DemoReport::default();

    let reload = list.reload_data();
    tracing::info!(empty = reload.show_empty_view, footer = reload.footer_offset, "Folders loaded");

    let rows = list.rows_in(Section::Folders);
    for row in 0..rows.min(DEMO_SLOTS) {
        if list.will_display(SlotId(row), row, 64.0).is_loading() {
            if let Some(loaded) = rx.recv().await {
                if list.handle_image_loaded(loaded).is_some() {
                    report.images_loaded += 1;
                }
            }
        }
    }

    let content_height = (rows + 1) as f32 * ROW_HEIGHT;
    for offset_y in [0.0, 40.0, 70.0, 90.0, 120.0, 400.0] {
        let offset = list.did_scroll(ScrollMetrics {
            content_offset_y: offset_y,
            content_height,
            frame_height: 600.0,
        });
        tracing::info!(offset_y, footer = offset, "Folder list scrolled");
    }

    list.search_focused();
    list.search_text_changed("  cabin ");
    tracing::info!(
        add_rows = list.rows_in(Section::AddButton),
        footer = list.reload_data().footer_offset,
        "Searching"
    );
    list.select_empty_view_add_button();
    list.search_text_changed("");
    list.search_ended("");

    for event in delegate.events() {
        tracing::info!(event = ?event, "Folder list delegate");
    }
    report.final_visible = list.rows_in(Section::Folders);
    Ok(report)
}

/// Page through a gallery, loading the main image and its preview together.
pub async fn run_gallery() -> PageGridResult<DemoReport> {
    let loader = MockImageLoader::new().with_delay(DEMO_IMAGE_DELAY);
    let model = GalleryModel {
        image_urls: (0..5)
            .map(|i| format!("https://img.example.com/gallery/{}.jpg", i))
            .collect(),
        captions: vec![
            "Living room".to_string(),
            "Kitchen".to_string(),
            "Bedroom".to_string(),
        ],
    };
    let mut pager = GalleryPager::new(model, 0, ImageCache::new(), Arc::new(loader.clone()));
    let mut report = DemoReport::default();

    let mut index = Some(pager.current_index());
    while let Some(current) = index {
        let (page, preview) = tokio::join!(
            pager.load_image(current, 1080.0),
            pager.load_image(current, 1080.0)
        );
        page?;
        preview?;
        report.images_loaded += 1;

        let caption = pager.finish_paging(current).map(str::to_string);
        tracing::info!(index = current, caption = ?caption, "Gallery page shown");
        index = pager.page_after(current);
    }

    pager.toggle_preview();
    tracing::info!(
        requests = loader.call_count(),
        preview = pager.is_preview_visible(),
        "Gallery done"
    );
    report.final_visible = pager.len();
    Ok(report)
}

/// Fill in a sign-in form: a mistyped email, a correction and a password.
pub fn run_form() -> PageGridResult<DemoReport> {
    let delegate = Arc::new(RecordingDelegate::new());
    let mut email = TextFieldController::new(InputType::Email)
        .with_placeholder("Email")
        .with_delegate(delegate.clone());
    let mut password = TextFieldController::new(InputType::Password)
        .with_placeholder("Password")
        .with_delegate(delegate.clone());
    let mut report = DemoReport::default();

    email.focus();
    email.insert_text("ola.nordmann@finn");
    email.end_editing();
    if email.underline() == Underline::Invalid {
        email.set_help_text(Some("Check the email address".to_string()));
        tracing::info!(text = email.text(), "Email rejected");
    }

    email.focus();
    email.insert_text(".no");
    email.end_editing();
    email.set_help_text(None);

    password.focus();
    password.insert_text("correct horse");
    let masked = password.toggle_password_visibility();
    tracing::info!(masked, "Password visibility toggled");
    password.end_editing();

    let fields = [&email, &password];
    for field in fields {
        tracing::info!(
            field = field.placeholder(),
            valid = field.is_valid(),
            "Form field"
        );
    }
    report.fields_valid = fields.iter().filter(|f| f.is_valid()).count();
    report.final_visible = fields.len();
    tracing::debug!(events = delegate.events().len(), "Form delegate calls");
    Ok(report)
}
