//! onevone - champion matchup lookup.
//!
//! This is the main crate of the lookup page. It fetches the champion
//! dataset, binds an autocomplete widget to every champion field and turns
//! the find-matchup click into a navigation path.
//!
//! # Example
//!
//! ```no_run
//! use onevone::{AppConfig, Bootstrap, Document, Key, PageEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     onevone::logging::init("info").ok();
//!
//!     let mut doc = Document::new();
//!     // Build the page: inputs with class `autocompleted`, each with a
//!     // sibling `.autocomplete-container > .autocomplete-results`.
//!     let input = doc.append_child(doc.root(), "input");
//!     let document = doc.into_shared();
//!
//!     let bootstrap = Bootstrap::new(AppConfig::default())?;
//!     let mut page = bootstrap.run(document.clone()).await?;
//!
//!     document.lock().set_value(input, "ah");
//!     page.dispatch(PageEvent::Input { target: input });
//!     page.dispatch(PageEvent::KeyDown { target: input, key: Key::Enter });
//!     Ok(())
//! }
//! ```

pub use onevone_core::{ConnectionId, Signal, logging};

pub mod bootstrap;
pub mod champion;
pub mod config;
pub mod dom;
mod error;
pub mod matchup;
pub mod page;
pub mod prelude;
pub mod widget;

/// Networking: HTTP client, retry policy and the champion API.
pub mod net {
    pub use onevone_net::*;
}

pub use bootstrap::Bootstrap;
pub use champion::ChampionIndex;
pub use config::{AppConfig, HttpSettings, WidgetConfig};
pub use dom::{Document, ElementId, Selector, SharedDocument};
pub use error::{ConfigError, Error, Result};
pub use matchup::{MatchupFinder, MatchupRoute};
pub use page::Page;
pub use widget::{
    AutoComplete, AutoCompleteBinder, AutoCompleteOptions, EventResponse, Key, PageEvent,
    RenderSnapshot, RenderTarget,
};
