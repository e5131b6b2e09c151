use shared::{PortfolioError, PortfolioResult, ScrollMode, SectionId, Viewport};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::services::logging::Logger;

/// Browser viewport backed by `window` and the anchor elements whose ids
/// match the section ids.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DomViewport;

impl DomViewport {
    fn window() -> PortfolioResult<Window> {
        web_sys::window().ok_or(PortfolioError::NoWindow)
    }

    fn document() -> PortfolioResult<Document> {
        Self::window()?.document().ok_or(PortfolioError::NoDocument)
    }

    pub fn anchor(id: SectionId) -> PortfolioResult<Element> {
        Self::document()?
            .get_element_by_id(id.as_str())
            .ok_or(PortfolioError::AnchorMissing(id))
    }

    fn try_viewport_height() -> PortfolioResult<f64> {
        Self::window()?
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .ok_or(PortfolioError::ViewportUnmeasurable)
    }

    fn try_scroll_to(id: SectionId, mode: ScrollMode) -> PortfolioResult<()> {
        let anchor = Self::anchor(id)?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

impl Viewport for DomViewport {
    fn viewport_height(&self) -> Option<f64> {
        Self::try_viewport_height().ok()
    }

    fn anchor_top(&self, id: SectionId) -> Option<f64> {
        Self::anchor(id)
            .map(|anchor| anchor.get_bounding_client_rect().top())
            .ok()
    }

    fn scroll_to(&self, id: SectionId, mode: ScrollMode) -> bool {
        match Self::try_scroll_to(id, mode) {
            Ok(()) => true,
            Err(e @ PortfolioError::AnchorMissing(_)) => {
                Logger::warn_with_component("viewport", &format!("Skipping scroll: {}", e));
                false
            }
            Err(e) => {
                Logger::error_with_component("viewport", &format!("Scrolling unavailable: {}", e));
                false
            }
        }
    }
}
