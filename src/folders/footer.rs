//! Collapsing "add folder" footer.
//!
//! The footer slides up from below the list as the "add folder" row at the
//! top scrolls out of view, and is pinned fully open while searching. Its
//! position is expressed as the offset of the footer's top edge from the
//! bottom of the view: `0` is hidden, `-height` is fully shown.

/// Height of a folder row.
pub const ROW_HEIGHT: f32 = 64.0;

/// Footer height before the bottom safe-area inset.
pub const FOOTER_BASE_HEIGHT: f32 = 56.0;

/// Scroll position of the list, as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub content_offset_y: f32,
    pub content_height: f32,
    pub frame_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterLayout {
    row_height: f32,
    footer_height: f32,
}

impl Default for FooterLayout {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl FooterLayout {
    pub fn new(safe_area_bottom: f32) -> Self {
        Self {
            row_height: ROW_HEIGHT,
            footer_height: FOOTER_BASE_HEIGHT + safe_area_bottom,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn footer_height(&self) -> f32 {
        self.footer_height
    }

    /// Footer offset to use when the list is reloaded.
    pub fn reload_offset(&self, search_active: bool) -> f32 {
        if search_active {
            -self.footer_height
        } else {
            0.0
        }
    }

    /// Footer offset after a scroll. `current` is kept when none of the
    /// rules apply.
    pub fn scroll_offset(&self, metrics: ScrollMetrics, search_active: bool, current: f32) -> f32 {
        let offset = metrics.content_offset_y * 1.5;
        let min_offset = self.row_height * 1.5;
        let max_offset = min_offset + self.footer_height;
        let short_content = metrics.content_height <= metrics.frame_height + self.row_height;

        if short_content && !search_active {
            0.0
        } else if offset > max_offset || search_active {
            -self.footer_height
        } else if offset >= min_offset && offset <= max_offset {
            -offset + min_offset
        } else if offset <= self.footer_height {
            0.0
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_list(offset: f32) -> ScrollMetrics {
        ScrollMetrics {
            content_offset_y: offset,
            content_height: 2000.0,
            frame_height: 600.0,
        }
    }

    #[test]
    fn test_short_content_hides_footer() {
        let layout = FooterLayout::default();
        let metrics = ScrollMetrics {
            content_offset_y: 300.0,
            content_height: 650.0,
            frame_height: 600.0,
        };
        assert_eq!(layout.scroll_offset(metrics, false, -20.0), 0.0);
        assert_eq!(layout.scroll_offset(metrics, true, 0.0), -56.0);
    }

    #[test]
    fn test_slides_between_min_and_max() {
        let layout = FooterLayout::default();
        // min = 96, max = 152
        assert_eq!(layout.scroll_offset(long_list(64.0), false, 0.0), 0.0);
        assert_eq!(layout.scroll_offset(long_list(80.0), false, 0.0), -24.0);
        assert_eq!(layout.scroll_offset(long_list(100.0), false, 0.0), -54.0);
        assert_eq!(layout.scroll_offset(long_list(120.0), false, 0.0), -56.0);
    }

    #[test]
    fn test_top_of_list_hides_footer() {
        let layout = FooterLayout::default();
        assert_eq!(layout.scroll_offset(long_list(10.0), false, -56.0), 0.0);
    }

    #[test]
    fn test_gap_keeps_current_offset() {
        // Scaled offset 60 lies between the footer height (56) and min (96)
        let layout = FooterLayout::default();
        assert_eq!(layout.scroll_offset(long_list(40.0), false, -7.0), -7.0);

        // A tall footer closes the gap
        let layout = FooterLayout::new(60.0);
        assert_eq!(layout.scroll_offset(long_list(60.0), false, -10.0), 0.0);
    }

    #[test]
    fn test_search_pins_footer_open() {
        let layout = FooterLayout::new(34.0);
        assert_eq!(layout.footer_height(), 90.0);
        assert_eq!(layout.scroll_offset(long_list(0.0), true, 0.0), -90.0);
        assert_eq!(layout.reload_offset(true), -90.0);
        assert_eq!(layout.reload_offset(false), 0.0);
    }
}
