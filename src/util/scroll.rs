//! Scroll coordination: affordance visibility and animated navigation.
//!
//! The visibility thresholds and the header offset come straight from the
//! page design; the flag computation is pure so it tests natively, while the
//! actual scrolling calls sit behind the `browser` feature.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Sticky header height subtracted when scrolling to a section anchor.
pub const HEADER_OFFSET: f64 = 80.0;

/// Offset above which the scroll-to-top affordance shows.
pub const SHOW_TOP_THRESHOLD: f64 = 300.0;

/// Offset above which the scroll-to-bottom affordance may show.
pub const SHOW_BOTTOM_THRESHOLD: f64 = 100.0;

/// The scroll-to-bottom affordance hides within this margin of the page end.
pub const BOTTOM_MARGIN: f64 = 100.0;

/// Viewport numbers the affordance computation needs. Injectable so the
/// logic tests without a browser; [`BrowserViewport`] is the real thing.
pub trait ViewportMetrics {
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn document_height(&self) -> f64;
}

/// `ViewportMetrics` read from `window` and the document element.
pub struct BrowserViewport;

impl ViewportMetrics for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        #[cfg(feature = "browser")]
        {
            web_sys::window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0)
        }
        #[cfg(not(feature = "browser"))]
        {
            0.0
        }
    }

    fn viewport_height(&self) -> f64 {
        #[cfg(feature = "browser")]
        {
            web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0)
        }
        #[cfg(not(feature = "browser"))]
        {
            0.0
        }
    }

    fn document_height(&self) -> f64 {
        #[cfg(feature = "browser")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .map_or(0.0, |el| f64::from(el.scroll_height()))
        }
        #[cfg(not(feature = "browser"))]
        {
            0.0
        }
    }
}

/// Visibility of the two scroll affordances. The flags are independent and
/// may both be true at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub show_top: bool,
    pub show_bottom: bool,
}

impl ScrollFlags {
    /// Recompute the flags for a viewport position.
    pub fn at(scroll_y: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            show_top: scroll_y > SHOW_TOP_THRESHOLD,
            show_bottom: scroll_y > SHOW_BOTTOM_THRESHOLD
                && scroll_y + viewport_height < document_height - BOTTOM_MARGIN,
        }
    }

    /// Recompute the flags from live metrics.
    pub fn read(metrics: &impl ViewportMetrics) -> Self {
        Self::at(
            metrics.scroll_y(),
            metrics.viewport_height(),
            metrics.document_height(),
        )
    }
}

/// Document offset to scroll to for an element whose bounding rect starts at
/// `rect_top`, leaving room for the sticky header.
pub fn target_offset(rect_top: f64, page_y: f64) -> f64 {
    rect_top + page_y - HEADER_OFFSET
}

/// Smooth-scroll to the section with the given element id, offset for the
/// sticky header. Missing sections are ignored.
pub fn scroll_to_section(section_id: &str) {
    #[cfg(feature = "browser")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(el) = window.document().and_then(|d| d.get_element_by_id(section_id)) else {
            log::debug!("scroll target #{section_id} not found");
            return;
        };
        let page_y = window.page_y_offset().unwrap_or(0.0);
        let top = target_offset(el.get_bounding_client_rect().top(), page_y);
        smooth_scroll_to(&window, top);
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = section_id;
    }
}

/// Smooth-scroll to the absolute top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "browser")]
    {
        if let Some(window) = web_sys::window() {
            smooth_scroll_to(&window, 0.0);
        }
    }
}

/// Smooth-scroll to the absolute bottom of the page.
pub fn scroll_to_bottom() {
    #[cfg(feature = "browser")]
    {
        if let Some(window) = web_sys::window() {
            let height = BrowserViewport.document_height();
            smooth_scroll_to(&window, height);
        }
    }
}

#[cfg(feature = "browser")]
fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
