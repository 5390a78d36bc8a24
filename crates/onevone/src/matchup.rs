//! Find-matchup navigation.
//!
//! Clicking the find-matchup anchor reads the raw values of the champion and
//! enemy fields and navigates to `/matchup/<champion>/<enemy>`. Each name is
//! percent-encoded as a single path segment, so names with spaces or slashes
//! produce a well-formed path.

use onevone_core::Signal;
use url::Url;

use crate::config::DEFAULT_MATCHUP_PREFIX;
use crate::dom::{Document, Selector, SharedDocument};

/// Class of the containers holding the matchup fields.
pub const INPUT_CONTAINER_CLASS: &str = "input-container";
/// `id` of the player's champion field.
pub const CHAMPION_FIELD_ID: &str = "champion";
/// `id` of the opponent field.
pub const ENEMY_FIELD_ID: &str = "enemy";
/// `id` of the anchor that triggers navigation.
pub const FIND_MATCHUP_ID: &str = "find-matchup";

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupRoute {
    /// The player's champion, as typed.
    pub champion: String,
    /// The opponent, as typed.
    pub enemy: String,
    /// The encoded path to navigate to.
    pub path: String,
}

impl MatchupRoute {
    /// Build the route for a pair of names under `prefix`.
    ///
    /// Returns `None` if either name is empty.
    pub fn new(prefix: &str, champion: &str, enemy: &str) -> Option<Self> {
        if champion.is_empty() || enemy.is_empty() {
            return None;
        }
        Some(Self {
            champion: champion.to_string(),
            enemy: enemy.to_string(),
            path: encode_path(prefix, &[champion, enemy])?,
        })
    }
}

/// Reads the matchup fields and emits navigation requests.
///
/// # Signals
///
/// - `navigate(MatchupRoute)`: emitted when both fields are non-empty
pub struct MatchupFinder {
    document: SharedDocument,
    prefix: String,

    /// Signal emitted with the route to navigate to.
    pub navigate: Signal<MatchupRoute>,
}

impl MatchupFinder {
    /// Create a finder using the default `/matchup` prefix.
    pub fn new(document: SharedDocument) -> Self {
        Self::with_prefix(document, DEFAULT_MATCHUP_PREFIX)
    }

    /// Create a finder with a custom path prefix.
    pub fn with_prefix(document: SharedDocument, prefix: impl Into<String>) -> Self {
        Self {
            document,
            prefix: prefix.into(),
            navigate: Signal::new(),
        }
    }

    /// The path prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resolve the current field values and emit `navigate`.
    ///
    /// Returns `None`, without emitting, when either field is missing or
    /// empty.
    pub fn find(&self) -> Option<MatchupRoute> {
        let (champion, enemy) = {
            let document = self.document.lock();
            (
                field_value(&document, CHAMPION_FIELD_ID),
                field_value(&document, ENEMY_FIELD_ID),
            )
        };

        let Some(route) = MatchupRoute::new(&self.prefix, &champion, &enemy) else {
            tracing::debug!(
                target: "onevone::matchup",
                champion = %champion,
                enemy = %enemy,
                "matchup fields incomplete"
            );
            return None;
        };

        tracing::info!(target: "onevone::matchup", path = %route.path, "navigating to matchup");
        self.navigate.emit(route.clone());
        Some(route)
    }
}

impl std::fmt::Debug for MatchupFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchupFinder")
            .field("prefix", &self.prefix)
            .field("navigate", &self.navigate)
            .finish()
    }
}

/// Value of the first `#id` field inside an input container.
fn field_value(document: &Document, id: &str) -> String {
    document
        .select_all(&Selector::class(INPUT_CONTAINER_CLASS))
        .into_iter()
        .find_map(|container| {
            document
                .select_within(container, &Selector::id(id))
                .into_iter()
                .next()
        })
        .map(|field| document.value(field).to_string())
        .unwrap_or_default()
}

/// Join `prefix` and `segments` into an absolute, percent-encoded path.
fn encode_path(prefix: &str, segments: &[&str]) -> Option<String> {
    let mut url = Url::parse("http://localhost/").ok()?;
    url.path_segments_mut()
        .ok()?
        .clear()
        .extend(prefix.split('/').filter(|s| !s.is_empty()))
        .extend(segments);
    Some(url.path().to_string())
}
