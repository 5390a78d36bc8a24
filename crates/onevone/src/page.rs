//! Event routing for the lookup page.

use crate::dom::{ElementId, Selector, SharedDocument};
use crate::matchup::{FIND_MATCHUP_ID, MatchupFinder};
use crate::widget::{AutoCompleteBinder, EventResponse, PageEvent};

/// The initialized lookup page: one binder per autocompleted field plus the
/// find-matchup handler.
#[derive(Debug)]
pub struct Page {
    document: SharedDocument,
    binders: Vec<AutoCompleteBinder>,
    matchup: MatchupFinder,
}

impl Page {
    /// Assemble a page from already-bound widgets.
    pub fn new(
        document: SharedDocument,
        binders: Vec<AutoCompleteBinder>,
        matchup: MatchupFinder,
    ) -> Self {
        Self {
            document,
            binders,
            matchup,
        }
    }

    /// The shared document.
    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    /// The bound widgets, in document order.
    pub fn binders(&self) -> &[AutoCompleteBinder] {
        &self.binders
    }

    /// The binder attached to `input`, if any.
    pub fn binder_for(&self, input: ElementId) -> Option<&AutoCompleteBinder> {
        self.binders.iter().find(|b| b.target().input == input)
    }

    /// The find-matchup handler.
    pub fn matchup(&self) -> &MatchupFinder {
        &self.matchup
    }

    /// Route an event to whichever handler owns its target.
    pub fn dispatch(&mut self, event: PageEvent) -> EventResponse {
        let target = event.target();
        match event {
            PageEvent::Focus { .. } => self
                .binder_for_input(target)
                .map_or(EventResponse::IGNORED, AutoCompleteBinder::on_focus),
            PageEvent::Input { .. } => self
                .binder_for_input(target)
                .map_or(EventResponse::IGNORED, AutoCompleteBinder::on_input),
            PageEvent::KeyDown { key, .. } => self
                .binder_for_input(target)
                .map_or(EventResponse::IGNORED, |binder| binder.on_key_down(key)),
            PageEvent::Click { .. } => self.on_click(target),
        }
    }

    fn on_click(&mut self, target: ElementId) -> EventResponse {
        let (owner, is_find_matchup) = {
            let document = self.document.lock();
            let owner = self
                .binders
                .iter()
                .position(|b| b.owns_result(&document, target));
            let anchor = Selector::tag("a").with_id(FIND_MATCHUP_ID);
            (owner, document.closest(target, &anchor).is_some())
        };

        if let Some(index) = owner {
            return self.binders[index].on_result_click(target);
        }
        if is_find_matchup {
            self.matchup.find();
            return EventResponse::PREVENT_DEFAULT;
        }
        tracing::trace!(target: "onevone::page", ?target, "click not routed");
        EventResponse::IGNORED
    }

    fn binder_for_input(&mut self, input: ElementId) -> Option<&mut AutoCompleteBinder> {
        self.binders.iter_mut().find(|b| b.target().input == input)
    }
}
