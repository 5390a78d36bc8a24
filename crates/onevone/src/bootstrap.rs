//! Page bootstrap: fetch the champion dataset, then bind the widgets.
//!
//! Nothing on the page is interactive until [`Bootstrap::run`] resolves. If
//! the fetch fails the error is logged and returned and the page stays inert.
//!
//! # Example
//!
//! ```ignore
//! use onevone::{AppConfig, Bootstrap, Document};
//!
//! let document = build_page().into_shared();
//! let bootstrap = Bootstrap::new(AppConfig::default())?;
//! let mut page = bootstrap.run(document).await?;
//! ```

use std::sync::Arc;

use onevone_core::PerfSpan;
use onevone_core::logging::{span_names, targets};
use onevone_net::ChampionApi;
use tracing::Instrument;

use crate::champion::ChampionIndex;
use crate::config::AppConfig;
use crate::dom::{Document, ElementId, Selector, SharedDocument};
use crate::error::{Error, Result};
use crate::matchup::MatchupFinder;
use crate::page::Page;
use crate::widget::{AutoCompleteBinder, RenderTarget};

/// Class marking inputs that get an autocomplete widget.
pub const AUTOCOMPLETED_CLASS: &str = "autocompleted";
/// Class of the sibling that wraps an input's result list.
pub const CONTAINER_CLASS: &str = "autocomplete-container";
/// Class of the result list itself.
pub const RESULTS_CLASS: &str = "autocomplete-results";

/// Loads the dataset and initializes the page.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    config: AppConfig,
    api: ChampionApi,
}

impl Bootstrap {
    /// Build the HTTP client and champion API from `config`.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = config.http.client_builder().build()?;
        let api = ChampionApi::new(client, &config.base_url, &config.champions_endpoint)?
            .with_retry(config.retry.clone());
        Ok(Self { config, api })
    }

    /// The configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The champion API client.
    pub fn api(&self) -> &ChampionApi {
        &self.api
    }

    /// Fetch the dataset once and index it by name.
    pub async fn load(&self) -> Result<ChampionIndex> {
        let span = tracing::info_span!(
            target: targets::PERF,
            "perf",
            operation = span_names::DATASET_LOAD
        );
        let records = self.api.fetch_all().instrument(span).await?;
        let index = ChampionIndex::new(records);
        if index.is_empty() {
            return Err(Error::EmptyDataset);
        }
        tracing::info!(
            target: "onevone::bootstrap",
            champions = index.len(),
            url = self.api.url(),
            "champion dataset loaded"
        );
        Ok(index)
    }

    /// Bind one widget per `input.autocompleted` field and the matchup anchor.
    ///
    /// A field is bound only if it has a sibling `.autocomplete-container`
    /// with a `.autocomplete-results` child; other fields are skipped.
    pub fn initialize(
        champions: Arc<ChampionIndex>,
        document: SharedDocument,
        config: &AppConfig,
    ) -> Page {
        let _span = PerfSpan::new(span_names::INITIALIZE);

        let targets = render_targets(&document.lock());
        let binders: Vec<_> = targets
            .into_iter()
            .map(|target| {
                AutoCompleteBinder::new(document.clone(), champions.clone(), target, &config.widget)
            })
            .collect();

        tracing::info!(
            target: "onevone::bootstrap",
            widgets = binders.len(),
            pool = champions.len(),
            "autocomplete initialized"
        );

        let matchup = MatchupFinder::with_prefix(document.clone(), config.matchup_prefix.clone());
        Page::new(document, binders, matchup)
    }

    /// Load the dataset, then initialize the page.
    pub async fn run(&self, document: SharedDocument) -> Result<Page> {
        match self.load().await {
            Ok(index) => Ok(Self::initialize(Arc::new(index), document, &self.config)),
            Err(e) => {
                tracing::error!(target: "onevone::bootstrap", error = %e, "page left uninitialized");
                Err(e)
            }
        }
    }
}

/// Locate the input/results pair for every autocompleted field.
fn render_targets(document: &Document) -> Vec<RenderTarget> {
    document
        .select_all(&Selector::tag("input").with_class(AUTOCOMPLETED_CLASS))
        .into_iter()
        .filter_map(|input| {
            let results = results_for(document, input);
            if results.is_none() {
                tracing::warn!(
                    target: "onevone::bootstrap",
                    field = document.element(input).and_then(|e| e.id()).unwrap_or("<anonymous>"),
                    "autocompleted field has no results container, skipping"
                );
            }
            results.map(|results| RenderTarget { input, results })
        })
        .collect()
}

fn results_for(document: &Document, input: ElementId) -> Option<ElementId> {
    document
        .siblings(input)
        .into_iter()
        .filter(|&sibling| document.has_class(sibling, CONTAINER_CLASS))
        .find_map(|container| {
            document
                .children(container)
                .iter()
                .copied()
                .find(|&child| document.has_class(child, RESULTS_CLASS))
        })
}
