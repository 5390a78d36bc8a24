//! Matching and selection state for an autocomplete field.
//!
//! [`AutoComplete`] holds a fixed candidate pool, the current query, the
//! ranked match list and a selection cursor. It knows nothing about how
//! matches are drawn: every transition that should repaint emits
//! [`AutoComplete::render_requested`] with a [`RenderSnapshot`], and whoever
//! owns the view connects a slot to it.
//!
//! # Example
//!
//! ```
//! use onevone::widget::autocomplete::{AutoComplete, AutoCompleteOptions};
//!
//! let mut completer: AutoComplete<()> = AutoComplete::new(AutoCompleteOptions {
//!     pool: vec!["Ahri".into(), "Annie".into(), "Ashe".into()],
//!     ..Default::default()
//! });
//!
//! completer.update("ah");
//! assert_eq!(completer.matches(), ["Ahri"]);
//! assert_eq!(completer.selected(), Some("Ahri"));
//! ```

use std::cmp::Reverse;

use onevone_core::Signal;

/// Default cap on the number of matches kept.
pub const DEFAULT_MAX_RESULTS: usize = 4;

/// Default minimum query length (in characters) before matching runs.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Construction options. Every field has a permissive default.
#[derive(Debug, Clone)]
pub struct AutoCompleteOptions<C> {
    /// Candidate names, in scan order.
    pub pool: Vec<String>,
    /// Initial query.
    pub query: String,
    /// Maximum number of matches collected per update.
    pub max_results: usize,
    /// Queries shorter than this are not matched.
    pub min_query_len: usize,
    /// Initial render context.
    pub context: Option<C>,
}

impl<C> Default for AutoCompleteOptions<C> {
    fn default() -> Self {
        Self {
            pool: Vec::new(),
            query: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            context: None,
        }
    }
}

/// What a render slot receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot<C> {
    /// Current matches, best first.
    pub matches: Vec<String>,
    /// Index of the highlighted match. Meaningless when `matches` is empty.
    pub selected_index: usize,
    /// Render context in effect when the snapshot was taken.
    pub context: Option<C>,
}

impl<C> RenderSnapshot<C> {
    /// The highlighted match, if any.
    pub fn selected(&self) -> Option<&str> {
        self.matches.get(self.selected_index).map(String::as_str)
    }
}

/// Matcher/selector state machine for one input field.
///
/// `C` is an opaque render context handed back to render slots, typically
/// the elements a view paints into.
///
/// # Signals
///
/// - `render_requested(RenderSnapshot<C>)`: emitted after `update`, `reset`
///   and non-empty cursor moves
pub struct AutoComplete<C> {
    pool: Vec<String>,
    query: String,
    matches: Vec<String>,
    selected_index: usize,
    max_results: usize,
    min_query_len: usize,
    context: Option<C>,

    /// Signal emitted whenever the view should repaint.
    pub render_requested: Signal<RenderSnapshot<C>>,
}

impl<C: Clone + Send + 'static> AutoComplete<C> {
    /// Create a matcher from options.
    pub fn new(options: AutoCompleteOptions<C>) -> Self {
        Self {
            pool: options.pool,
            query: options.query,
            matches: Vec::new(),
            selected_index: 0,
            max_results: options.max_results,
            min_query_len: options.min_query_len,
            context: options.context,
            render_requested: Signal::new(),
        }
    }

    /// Create a matcher over `pool` with default settings.
    pub fn with_pool(pool: Vec<String>) -> Self {
        Self::new(AutoCompleteOptions {
            pool,
            ..Default::default()
        })
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// The candidate pool.
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// The last query that was matched (or set by a reset).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current matches, best first.
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// The selection cursor.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The match cap.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// The minimum query length.
    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// The render context used by the next render.
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// The highlighted match, or `None` when there are no matches.
    pub fn selected(&self) -> Option<&str> {
        self.matches.get(self.selected_index).map(String::as_str)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Recompute matches for `new_query`.
    ///
    /// Matching only runs when `new_query` differs from the stored query and
    /// is at least `min_query_len` characters long; otherwise the matches and
    /// the stored query are left untouched. A render is requested either way.
    ///
    /// The pool is scanned in order and scanning stops once `max_results`
    /// names contain the query (case-insensitively). The collected names are
    /// then stably sorted by descending position of the query within them.
    pub fn update(&mut self, new_query: &str) {
        if new_query != self.query && new_query.chars().count() >= self.min_query_len {
            self.matches = collect_matches(&self.pool, new_query, self.max_results);
            self.query = new_query.to_string();
            self.clamp_selection();
            tracing::debug!(
                target: "onevone::widget",
                query = %self.query,
                matches = self.matches.len(),
                "matches updated"
            );
        } else {
            tracing::trace!(target: "onevone::widget", query = %new_query, "match computation skipped");
        }
        self.request_render();
    }

    /// Move the cursor up, wrapping to the last match.
    ///
    /// Does nothing, and does not render, when there are no matches.
    pub fn select_previous(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            self.matches.len() - 1
        } else {
            self.selected_index - 1
        };
        self.request_render();
    }

    /// Move the cursor down, wrapping to the first match.
    ///
    /// Does nothing, and does not render, when there are no matches.
    pub fn select_next(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.selected_index = if self.selected_index + 1 >= self.matches.len() {
            0
        } else {
            self.selected_index + 1
        };
        self.request_render();
    }

    /// Clear matches and the cursor and set the query to the empty string.
    pub fn reset(&mut self) {
        self.reset_to("", None);
    }

    /// Clear matches and the cursor and set the query to `new_query`.
    ///
    /// The render request goes out with the context that was in effect
    /// *before* this call; `new_context`, when given, only applies to later
    /// renders.
    pub fn reset_to(&mut self, new_query: impl Into<String>, new_context: Option<C>) {
        self.matches.clear();
        self.selected_index = 0;
        self.query = new_query.into();
        self.request_render();
        if let Some(context) = new_context {
            self.context = Some(context);
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.matches.len().saturating_sub(1));
    }

    fn request_render(&self) {
        if !self.render_requested.is_connected() {
            return;
        }
        self.render_requested.emit(RenderSnapshot {
            matches: self.matches.clone(),
            selected_index: self.selected_index,
            context: self.context.clone(),
        });
    }
}

impl<C> std::fmt::Debug for AutoComplete<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoComplete")
            .field("pool_len", &self.pool.len())
            .field("query", &self.query)
            .field("matches", &self.matches)
            .field("selected_index", &self.selected_index)
            .field("max_results", &self.max_results)
            .finish()
    }
}

/// First-N case-insensitive substring matches, ranked by descending match position.
fn collect_matches(pool: &[String], query: &str, max_results: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut found: Vec<(usize, &String)> = Vec::new();

    for candidate in pool {
        if found.len() >= max_results {
            break;
        }
        if let Some(position) = match_position(candidate, &needle) {
            found.push((position, candidate));
        }
    }

    found.sort_by_key(|(position, _)| Reverse(*position));
    found.into_iter().map(|(_, name)| name.clone()).collect()
}

/// Character position of `needle` (already lowercased) within `candidate`.
fn match_position(candidate: &str, needle: &str) -> Option<usize> {
    let haystack = candidate.to_lowercase();
    haystack
        .find(needle)
        .map(|byte_pos| haystack[..byte_pos].chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn pool(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn completer(names: &[&str]) -> AutoComplete<&'static str> {
        AutoComplete::with_pool(pool(names))
    }

    fn record_renders(
        completer: &AutoComplete<&'static str>,
    ) -> Arc<Mutex<Vec<RenderSnapshot<&'static str>>>> {
        let renders = Arc::new(Mutex::new(Vec::new()));
        let sink = renders.clone();
        completer.render_requested.connect(move |snapshot| {
            sink.lock().push(snapshot.clone());
        });
        renders
    }

    #[test]
    fn test_defaults() {
        let completer: AutoComplete<()> = AutoComplete::new(AutoCompleteOptions::default());
        assert!(completer.pool().is_empty());
        assert_eq!(completer.query(), "");
        assert_eq!(completer.max_results(), 4);
        assert_eq!(completer.min_query_len(), 2);
        assert!(completer.context().is_none());
        assert_eq!(completer.selected(), None);
    }

    #[test]
    fn test_short_query_skips_matching() {
        let mut completer = completer(&["Ahri", "Annie", "Ashe"]);
        let renders = record_renders(&completer);
        completer.update("a");
        assert!(completer.matches().is_empty());
        assert_eq!(completer.query(), "");
        assert_eq!(renders.lock().len(), 1);
        assert!(renders.lock()[0].matches.is_empty());

        completer.update("ah");
        assert_eq!(completer.matches(), ["Ahri"]);
        assert_eq!(renders.lock().len(), 2);

        // Too short again: previous matches stay and are rendered again.
        completer.update("a");
        assert_eq!(completer.matches(), ["Ahri"]);
        assert_eq!(completer.query(), "ah");
        assert_eq!(renders.lock().len(), 3);
        assert_eq!(renders.lock()[2].matches, ["Ahri"]);
    }

    #[test]
    fn test_same_query_skips_matching_but_renders() {
        let mut completer = completer(&["Ahri", "Annie"]);
        let renders = record_renders(&completer);

        completer.update("an");
        completer.update("an");

        assert_eq!(completer.matches(), ["Annie"]);
        assert_eq!(renders.lock().len(), 2);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let mut completer = completer(&["Ahri", "Annie", "Ashe"]);
        completer.update("AH");
        assert_eq!(completer.matches(), ["Ahri"]);
    }

    #[test]
    fn test_ranking_by_descending_position() {
        let mut completer = completer(&["Exile", "Alexander", "Rexa"]);
        completer.update("ex");
        // Positions: Exile 0, Alexander 2, Rexa 1
        assert_eq!(completer.matches(), ["Alexander", "Rexa", "Exile"]);
    }

    #[test]
    fn test_ranking_ties_keep_scan_order() {
        let mut completer = completer(&["Annie", "Anivia", "Amumu"]);
        completer.update("an");
        assert_eq!(completer.matches(), ["Annie", "Anivia"]);
    }

    #[test]
    fn test_first_n_not_best_n() {
        let names = ["Aatrox", "Akali", "Alistar", "Amumu", "Karma", "Kassadin"];
        let mut completer: AutoComplete<()> = AutoComplete::new(AutoCompleteOptions {
            pool: pool(&names),
            max_results: 2,
            ..Default::default()
        });
        completer.update("ka");
        // Akali is scanned first, Karma second; Kassadin is never considered.
        assert_eq!(completer.matches().len(), 2);
        assert!(completer.matches().contains(&"Akali".to_string()));
        assert!(completer.matches().contains(&"Karma".to_string()));
    }

    #[test]
    fn test_zero_max_results_never_matches() {
        let mut completer: AutoComplete<()> = AutoComplete::new(AutoCompleteOptions {
            pool: pool(&["Ahri"]),
            max_results: 0,
            ..Default::default()
        });
        completer.update("ah");
        assert!(completer.matches().is_empty());
        assert_eq!(completer.selected(), None);
    }

    #[test]
    fn test_matches_bounded_and_from_pool() {
        let names = [
            "Aatrox", "Ahri", "Akali", "Alistar", "Amumu", "Anivia", "Annie", "Ashe",
        ];
        let mut completer = completer(&names);
        for query in ["aa", "an", "li", "ni", "zz", "Ah"] {
            completer.update(query);
            assert!(completer.matches().len() <= completer.max_results());
            for name in completer.matches() {
                assert!(names.contains(&name.as_str()));
            }
        }
    }

    #[test]
    fn test_cursor_wraps() {
        let mut completer = completer(&["Jax", "Jayce", "Jarvan IV"]);
        completer.update("ja");
        assert_eq!(completer.matches().len(), 3);

        completer.select_next();
        completer.select_next();
        assert_eq!(completer.selected_index(), 2);
        completer.select_next();
        assert_eq!(completer.selected_index(), 0);
        completer.select_previous();
        assert_eq!(completer.selected_index(), 2);
    }

    #[test]
    fn test_cursor_moves_on_empty_matches_are_noops() {
        let mut completer = completer(&["Ahri"]);
        let renders = record_renders(&completer);

        completer.select_next();
        completer.select_previous();

        assert_eq!(completer.selected_index(), 0);
        assert!(renders.lock().is_empty());
    }

    #[test]
    fn test_selection_clamped_when_matches_shrink() {
        let mut completer = completer(&["Jax", "Jayce", "Jarvan IV"]);
        completer.update("ja");
        completer.select_previous();
        assert_eq!(completer.selected_index(), 2);

        completer.update("jay");
        assert_eq!(completer.matches(), ["Jayce"]);
        assert_eq!(completer.selected_index(), 0);
        assert_eq!(completer.selected(), Some("Jayce"));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut completer = completer(&["Jax", "Jayce"]);
        completer.update("ja");
        completer.select_next();

        completer.reset();
        assert!(completer.matches().is_empty());
        assert_eq!(completer.selected_index(), 0);
        assert_eq!(completer.query(), "");
        assert_eq!(completer.selected(), None);

        completer.reset_to("Ja", None);
        assert_eq!(completer.query(), "Ja");
    }

    #[test]
    fn test_reset_renders_with_previous_context() {
        let mut completer = completer(&["Ahri"]);
        let renders = record_renders(&completer);

        completer.reset_to("", Some("champion"));
        assert_eq!(renders.lock()[0].context, None);
        assert_eq!(completer.context(), Some(&"champion"));

        completer.update("ah");
        assert_eq!(renders.lock()[1].context, Some("champion"));

        completer.reset_to("x", Some("enemy"));
        assert_eq!(renders.lock()[2].context, Some("champion"));
        assert!(renders.lock()[2].matches.is_empty());

        // Plain reset keeps the context.
        completer.reset();
        assert_eq!(renders.lock()[3].context, Some("enemy"));
    }

    #[test]
    fn test_snapshot_reports_selection() {
        let mut completer = completer(&["Jax", "Jayce"]);
        let renders = record_renders(&completer);

        completer.update("ja");
        completer.select_next();

        let last = renders.lock().last().cloned().unwrap();
        assert_eq!(last.selected_index, 1);
        assert_eq!(last.selected(), completer.selected());
    }

    #[test]
    fn test_unicode_query_length_counts_chars() {
        let mut completer = completer(&["Nunu & Willump", "Kha'Zix"]);
        completer.update("é");
        assert!(completer.matches().is_empty());
        completer.update("'z");
        assert_eq!(completer.matches(), ["Kha'Zix"]);
    }
}
