//! Scroll geometry helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `visible_percent` is pure so the product auto-switch can be tested on the
//! host; the browser readers below no-op outside `hydrate` builds.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Section bounding box relative to the viewport, as from `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

/// Percentage of the section's height currently inside the viewport.
///
/// `None` for a zero-height section (hidden with `display: none` below the
/// desktop breakpoint); callers skip such samples.
#[must_use]
pub fn visible_percent(rect: SectionRect, viewport_height: f64) -> Option<f64> {
    if rect.height <= 0.0 {
        return None;
    }
    let visible = viewport_height.min(rect.height + rect.top) - rect.top.max(0.0);
    Some((visible / rect.height * 100.0).max(0.0))
}

/// Current `window.scrollY`, 0 when no window is available.
pub fn window_scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Visible percentage of `element` in the current viewport, `None` when there
/// is no window or the element has no height.
#[cfg(feature = "hydrate")]
pub fn element_visible_percent(element: &web_sys::Element) -> Option<f64> {
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    visible_percent(SectionRect { top: rect.top(), height: rect.height() }, viewport_height)
}
