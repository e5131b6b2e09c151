//! Host viewport capability and the click-to-section controller.

use crate::config::ScrollMode;
use crate::section::SectionId;

/// Geometry queries and scroll control supplied by the hosting environment.
pub trait Viewport {
    /// Height of the visible area, or `None` when there is no viewport.
    fn viewport_height(&self) -> Option<f64>;

    /// Distance from the viewport top to the section's anchor, or `None`
    /// when the anchor is not attached.
    fn anchor_top(&self, id: SectionId) -> Option<f64>;

    /// Scroll so the anchor reaches the top of the viewport. Returns `false`
    /// when the anchor could not be found. The scroll itself is not awaited.
    fn scroll_to(&self, id: SectionId, mode: ScrollMode) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Scrolled,
    AnchorMissing,
}

/// Start scrolling `id` to the top. The scroll is fire-and-forget; callers
/// mark the section active right after, without waiting for it to settle.
pub fn request_scroll<V: Viewport + ?Sized>(
    viewport: &V,
    id: SectionId,
    mode: ScrollMode,
) -> NavigationOutcome {
    if viewport.scroll_to(id, mode) {
        NavigationOutcome::Scrolled
    } else {
        NavigationOutcome::AnchorMissing
    }
}
