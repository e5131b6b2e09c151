use std::rc::Rc;

use shared::{
    request_scroll, ActiveSection, NavigationOutcome, PortfolioConfig, ScrollMode, ScrollSample,
    SectionId, Viewport,
};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::scroll_watcher::ScrollWatcher;
use crate::services::viewport::DomViewport;

pub enum SectionAction {
    /// A scroll event produced a fresh reading of the anchors
    Scrolled {
        sample: ScrollSample,
        activation_ratio: f64,
    },
    /// A navigation button was clicked
    Select(SectionId),
}

/// Reducer-held active section. The scroll listener outlives individual
/// renders, so it dispatches actions instead of capturing a state snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveSectionStore {
    pub state: ActiveSection,
}

impl Reducible for ActiveSectionStore {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        let changed = match action {
            SectionAction::Scrolled {
                sample,
                activation_ratio,
            } => next.state.observe(&sample, activation_ratio),
            SectionAction::Select(id) => next.state.select(id),
        };

        if changed {
            Rc::new(next)
        } else {
            // Same allocation, so the reducer skips the re-render
            self
        }
    }
}

/// Start the scroll for a click and return the action that highlights the
/// section. The highlight never waits for the scroll.
pub fn navigation_action<V: Viewport + ?Sized>(
    viewport: &V,
    id: SectionId,
    mode: ScrollMode,
) -> SectionAction {
    Logger::info_with_component(
        "active-section",
        &format!("Navigating to {}", id.section().label),
    );

    if request_scroll(viewport, id, mode) == NavigationOutcome::AnchorMissing {
        Logger::warn_with_component(
            "active-section",
            &format!("Anchor '{}' not attached; highlighting without scrolling", id),
        );
    }

    SectionAction::Select(id)
}

#[derive(Clone, PartialEq)]
pub struct UseActiveSectionResult {
    pub active: ActiveSection,
    pub navigate: Callback<SectionId>,
}

/// Tracks which section is nearest the viewport top and exposes a
/// click handler that jumps to a section.
///
/// The window scroll listener lives exactly as long as the calling
/// component: it is attached on mount and dropped on unmount. A changed
/// `activation_ratio` re-attaches it with the new value.
#[hook]
pub fn use_active_section(config: &PortfolioConfig) -> UseActiveSectionResult {
    let store = use_reducer(ActiveSectionStore::default);

    {
        let dispatcher = store.dispatcher();

        use_effect_with(config.activation_ratio, move |activation_ratio| {
            let activation_ratio = *activation_ratio;
            let watcher = ScrollWatcher::attach_to_window(move || {
                match ScrollSample::collect(&DomViewport) {
                    Some(sample) => dispatcher.dispatch(SectionAction::Scrolled {
                        sample,
                        activation_ratio,
                    }),
                    None => Logger::debug_with_component(
                        "active-section",
                        "Scroll event before anchors attached; ignoring",
                    ),
                }
            });

            if watcher.is_none() {
                Logger::warn_with_component("active-section", "No window; scroll tracking disabled");
            }

            move || {
                drop(watcher);
                Logger::debug_with_component("active-section", "Scroll listener removed");
            }
        });
    }

    let navigate = {
        let dispatcher = store.dispatcher();
        use_callback(config.scroll_mode, move |id: SectionId, mode| {
            dispatcher.dispatch(navigation_action(&DomViewport, id, *mode));
        })
    };

    UseActiveSectionResult {
        active: store.state.clone(),
        navigate,
    }
}
