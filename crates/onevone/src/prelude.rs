//! Prelude module for onevone.
//!
//! ```ignore
//! use onevone::prelude::*;
//! ```

// ============================================================================
// Signal/Slot
// ============================================================================

pub use crate::{ConnectionId, Signal};

// ============================================================================
// Widgets and Events
// ============================================================================

pub use crate::widget::{
    AutoComplete, AutoCompleteBinder, AutoCompleteOptions, EventResponse, Key, PageEvent,
    RenderSnapshot, RenderTarget,
};

// ============================================================================
// Page
// ============================================================================

pub use crate::bootstrap::Bootstrap;
pub use crate::champion::ChampionIndex;
pub use crate::dom::{Document, ElementId, Selector, SharedDocument};
pub use crate::matchup::{MatchupFinder, MatchupRoute};
pub use crate::page::Page;

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::AppConfig;
pub use crate::{Error, Result};
