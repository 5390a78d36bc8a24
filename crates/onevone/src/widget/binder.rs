//! Binding between an input field and its [`AutoComplete`] matcher.
//!
//! An [`AutoCompleteBinder`] translates field events into matcher
//! transitions and paints the matcher's render requests into the field's
//! results container. Each row it paints looks like:
//!
//! ```text
//! div.autocomplete-item[.selected]  data-value="<name>"
//! ├── div.champion-icon.big.c<id>
//! └── span  "<name>"
//! ```

use std::sync::Arc;

use crate::champion::ChampionIndex;
use crate::config::WidgetConfig;
use crate::dom::{Document, ElementId, Selector, SharedDocument};

use super::autocomplete::{AutoComplete, AutoCompleteOptions, RenderSnapshot};
use super::events::{EventResponse, Key};

/// Class of every result row.
pub const ITEM_CLASS: &str = "autocomplete-item";
/// Extra class of the highlighted row.
pub const SELECTED_CLASS: &str = "selected";
/// Classes shared by every champion icon.
pub const ICON_CLASSES: [&str; 2] = ["champion-icon", "big"];

/// The elements a widget paints into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTarget {
    /// The text input.
    pub input: ElementId,
    /// The container result rows are appended to.
    pub results: ElementId,
}

/// One autocomplete field wired to the page.
pub struct AutoCompleteBinder {
    target: RenderTarget,
    document: SharedDocument,
    completer: AutoComplete<RenderTarget>,
}

impl AutoCompleteBinder {
    /// Bind a new matcher over every champion name to `target`.
    pub fn new(
        document: SharedDocument,
        champions: Arc<ChampionIndex>,
        target: RenderTarget,
        config: &WidgetConfig,
    ) -> Self {
        let completer = AutoComplete::new(AutoCompleteOptions {
            pool: champions.pool(),
            max_results: config.max_results,
            min_query_len: config.min_query_len,
            ..Default::default()
        });

        let paint_document = document.clone();
        completer.render_requested.connect(move |snapshot| {
            paint(&mut paint_document.lock(), &champions, snapshot);
        });

        Self {
            target,
            document,
            completer,
        }
    }

    /// The elements this binder paints into.
    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// The underlying matcher.
    pub fn completer(&self) -> &AutoComplete<RenderTarget> {
        &self.completer
    }

    /// Whether `element` is this binder's results container or inside it.
    pub fn owns_result(&self, document: &Document, element: ElementId) -> bool {
        document.is_ancestor_or_self(self.target.results, element)
    }

    /// Focus: start over from the field's current value and point renders
    /// at this field.
    pub fn on_focus(&mut self) -> EventResponse {
        let value = self.field_value();
        self.completer.reset_to(value, Some(self.target));
        EventResponse::HANDLED
    }

    /// Text input: match the field's current value.
    pub fn on_input(&mut self) -> EventResponse {
        let value = self.field_value();
        self.completer.update(&value);
        EventResponse::HANDLED
    }

    /// Key-down: arrows move the selection, Enter commits it, Escape closes.
    pub fn on_key_down(&mut self, key: Key) -> EventResponse {
        match key {
            Key::ArrowDown => {
                self.completer.select_next();
                EventResponse::PREVENT_DEFAULT
            }
            Key::ArrowUp => {
                self.completer.select_previous();
                EventResponse::PREVENT_DEFAULT
            }
            Key::Enter => match self.completer.selected() {
                Some(selection) => {
                    let selection = selection.to_string();
                    self.commit(selection);
                    EventResponse::HANDLED
                }
                None => EventResponse::IGNORED,
            },
            Key::Escape => {
                self.completer.reset();
                EventResponse::HANDLED
            }
            _ => EventResponse::IGNORED,
        }
    }

    /// Click inside the results container: commit the clicked row.
    pub fn on_result_click(&mut self, element: ElementId) -> EventResponse {
        let value = {
            let document = self.document.lock();
            document
                .closest(element, &Selector::class(ITEM_CLASS))
                .filter(|&row| self.owns_result(&document, row))
                .and_then(|row| document.data_value(row).map(str::to_string))
        };

        match value {
            Some(value) => {
                self.commit(value);
                EventResponse::HANDLED
            }
            None => EventResponse::IGNORED,
        }
    }

    fn field_value(&self) -> String {
        self.document.lock().value(self.target.input).to_string()
    }

    fn commit(&mut self, value: String) {
        tracing::debug!(target: "onevone::widget", value = %value, "selection committed");
        self.document.lock().set_value(self.target.input, value);
        self.completer.reset();
    }
}

impl std::fmt::Debug for AutoCompleteBinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoCompleteBinder")
            .field("target", &self.target)
            .field("completer", &self.completer)
            .finish()
    }
}

/// Rebuild the result rows for `snapshot`.
fn paint(document: &mut Document, champions: &ChampionIndex, snapshot: &RenderSnapshot<RenderTarget>) {
    let Some(target) = snapshot.context else {
        return;
    };
    document.clear_children(target.results);

    for (index, name) in snapshot.matches.iter().enumerate() {
        let Some(champion) = champions.get(name) else {
            tracing::warn!(target: "onevone::widget", name = %name, "no champion metadata for match");
            continue;
        };

        let row = document.append_child(target.results, "div");
        document.add_class(row, ITEM_CLASS);
        if index == snapshot.selected_index {
            document.add_class(row, SELECTED_CLASS);
        }
        document.set_data_value(row, name.clone());

        let icon = document.append_child(row, "div");
        for class in ICON_CLASSES {
            document.add_class(icon, class);
        }
        document.add_class(icon, champion.icon_class());

        let label = document.append_child(row, "span");
        document.set_text(label, name.clone());
    }
}
