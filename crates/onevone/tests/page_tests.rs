//! End-to-end tests: served dataset, bootstrap, then page interaction.

use std::sync::Arc;

use onevone::bootstrap::{AUTOCOMPLETED_CLASS, CONTAINER_CLASS, RESULTS_CLASS};
use onevone::net::RetryPolicy;
use onevone::widget::binder::{ITEM_CLASS, SELECTED_CLASS};
use onevone::{
    AppConfig, Bootstrap, Document, ElementId, Error, EventResponse, Key, MatchupRoute, Page,
    PageEvent, SharedDocument,
};
use parking_lot::Mutex;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct LookupPage {
    document: SharedDocument,
    champion: ElementId,
    champion_results: ElementId,
    enemy: ElementId,
    enemy_results: ElementId,
    find_matchup: ElementId,
}

/// Builds the lookup page markup:
///
/// ```text
/// div.input-container
///   input#champion.autocompleted
///   div.autocomplete-container > div.autocomplete-results
/// div.input-container
///   input#enemy.autocompleted
///   div.autocomplete-container > div.autocomplete-results
/// a#find-matchup
/// ```
fn lookup_page() -> LookupPage {
    let mut doc = Document::new();
    let field = |doc: &mut Document, id: &str| {
        let wrapper = doc.append_child(doc.root(), "div");
        doc.add_class(wrapper, "input-container");
        let input = doc.append_child(wrapper, "input");
        doc.set_id(input, id);
        doc.add_class(input, AUTOCOMPLETED_CLASS);
        let container = doc.append_child(wrapper, "div");
        doc.add_class(container, CONTAINER_CLASS);
        let results = doc.append_child(container, "div");
        doc.add_class(results, RESULTS_CLASS);
        (input, results)
    };
    let (champion, champion_results) = field(&mut doc, "champion");
    let (enemy, enemy_results) = field(&mut doc, "enemy");
    let find_matchup = doc.append_child(doc.root(), "a");
    doc.set_id(find_matchup, "find-matchup");

    LookupPage {
        document: doc.into_shared(),
        champion,
        champion_results,
        enemy,
        enemy_results,
        find_matchup,
    }
}

async fn serve_champions(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v0/champions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"id": 103, "name": "Ahri", "title": "the Nine-Tailed Fox"},
                {"id": 1, "name": "Annie", "title": "the Dark Child"},
                {"id": 24, "name": "Jax", "title": "Grandmaster at Arms"},
                {"id": 126, "name": "Jayce", "title": "the Defender of Tomorrow"},
                {"id": 59, "name": "Jarvan IV", "title": "the Exemplar of Demacia"},
                {"id": 238, "name": "Zed", "title": "the Master of Shadows"}
            ]
        })))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> AppConfig {
    AppConfig {
        base_url: server.uri(),
        retry: RetryPolicy {
            max_retries: 1,
            initial_delay_ms: 5,
            max_delay_ms: 10,
            backoff_multiplier: 1.0,
        },
        ..AppConfig::default()
    }
}

async fn running_page() -> (LookupPage, Page) {
    let server = MockServer::start().await;
    serve_champions(&server).await;

    let lookup = lookup_page();
    let page = Bootstrap::new(config_for(&server))
        .expect("bootstrap")
        .run(lookup.document.clone())
        .await
        .expect("page");
    (lookup, page)
}

fn type_into(page: &mut Page, document: &SharedDocument, input: ElementId, text: &str) {
    document.lock().set_value(input, text);
    page.dispatch(PageEvent::Input { target: input });
}

fn row_names(document: &SharedDocument, results: ElementId) -> Vec<String> {
    let doc = document.lock();
    doc.children(results)
        .iter()
        .filter_map(|&row| doc.data_value(row).map(str::to_string))
        .collect()
}

fn selected_name(document: &SharedDocument, results: ElementId) -> Option<String> {
    let doc = document.lock();
    doc.children(results)
        .iter()
        .find(|&&row| doc.has_class(row, SELECTED_CLASS))
        .and_then(|&row| doc.data_value(row).map(str::to_string))
}

#[tokio::test]
async fn test_bootstrap_binds_both_fields() {
    let (lookup, page) = running_page().await;

    assert_eq!(page.binders().len(), 2);
    let champion = page.binder_for(lookup.champion).expect("champion binder");
    assert_eq!(champion.target().results, lookup.champion_results);
    assert_eq!(
        champion.completer().pool(),
        ["Ahri", "Annie", "Jarvan IV", "Jax", "Jayce", "Zed"]
    );
}

#[tokio::test]
async fn test_typing_renders_rows() {
    let (lookup, mut page) = running_page().await;
    let doc = lookup.document.clone();

    page.dispatch(PageEvent::Focus {
        target: lookup.champion,
    });
    type_into(&mut page, &doc, lookup.champion, "a");
    assert!(row_names(&doc, lookup.champion_results).is_empty());

    type_into(&mut page, &doc, lookup.champion, "ja");
    assert_eq!(
        row_names(&doc, lookup.champion_results),
        ["Jarvan IV", "Jax", "Jayce"]
    );
    assert_eq!(
        selected_name(&doc, lookup.champion_results).as_deref(),
        Some("Jarvan IV")
    );

    let d = doc.lock();
    let rows = d.children(lookup.champion_results);
    assert!(rows.iter().all(|&row| d.has_class(row, ITEM_CLASS)));
    let icon = d.children(rows[1])[0];
    assert_eq!(d.classes(icon), &["champion-icon", "big", "c24"]);

    // The other field's list is untouched.
    assert!(d.children(lookup.enemy_results).is_empty());
}

#[tokio::test]
async fn test_keyboard_selection_and_commit() {
    let (lookup, mut page) = running_page().await;
    let doc = lookup.document.clone();

    page.dispatch(PageEvent::Focus {
        target: lookup.enemy,
    });
    type_into(&mut page, &doc, lookup.enemy, "ja");

    let down = page.dispatch(PageEvent::KeyDown {
        target: lookup.enemy,
        key: Key::ArrowDown,
    });
    assert_eq!(down, EventResponse::PREVENT_DEFAULT);
    assert_eq!(
        selected_name(&doc, lookup.enemy_results).as_deref(),
        Some("Jax")
    );

    let enter = page.dispatch(PageEvent::KeyDown {
        target: lookup.enemy,
        key: Key::Enter,
    });
    assert_eq!(enter, EventResponse::HANDLED);
    assert_eq!(doc.lock().value(lookup.enemy), "Jax");
    assert!(row_names(&doc, lookup.enemy_results).is_empty());
}

#[tokio::test]
async fn test_escape_closes_list() {
    let (lookup, mut page) = running_page().await;
    let doc = lookup.document.clone();

    page.dispatch(PageEvent::Focus {
        target: lookup.champion,
    });
    type_into(&mut page, &doc, lookup.champion, "ze");
    assert_eq!(row_names(&doc, lookup.champion_results), ["Zed"]);

    page.dispatch(PageEvent::KeyDown {
        target: lookup.champion,
        key: Key::Escape,
    });
    assert!(row_names(&doc, lookup.champion_results).is_empty());
    assert_eq!(doc.lock().value(lookup.champion), "ze");
}

#[tokio::test]
async fn test_click_on_result_commits() {
    let (lookup, mut page) = running_page().await;
    let doc = lookup.document.clone();

    page.dispatch(PageEvent::Focus {
        target: lookup.champion,
    });
    type_into(&mut page, &doc, lookup.champion, "ah");

    let label = {
        let d = doc.lock();
        let row = d.children(lookup.champion_results)[0];
        d.children(row)[1]
    };
    let response = page.dispatch(PageEvent::Click { target: label });

    assert_eq!(response, EventResponse::HANDLED);
    assert_eq!(doc.lock().value(lookup.champion), "Ahri");
    assert!(row_names(&doc, lookup.champion_results).is_empty());
}

#[tokio::test]
async fn test_events_on_unbound_elements_are_ignored() {
    let (lookup, mut page) = running_page().await;

    let root = lookup.document.lock().root();
    assert_eq!(
        page.dispatch(PageEvent::Click { target: root }),
        EventResponse::IGNORED
    );
    assert_eq!(
        page.dispatch(PageEvent::Focus {
            target: lookup.champion_results
        }),
        EventResponse::IGNORED
    );
}

#[tokio::test]
async fn test_find_matchup_navigates() {
    let (lookup, mut page) = running_page().await;
    let doc = lookup.document.clone();

    let routes = Arc::new(Mutex::new(Vec::<MatchupRoute>::new()));
    let sink = routes.clone();
    page.matchup().navigate.connect(move |route| {
        sink.lock().push(route.clone());
    });

    // An empty field: default prevented, but no navigation.
    doc.lock().set_value(lookup.champion, "Jarvan IV");
    let response = page.dispatch(PageEvent::Click {
        target: lookup.find_matchup,
    });
    assert_eq!(response, EventResponse::PREVENT_DEFAULT);
    assert!(routes.lock().is_empty());

    doc.lock().set_value(lookup.enemy, "Zed");
    page.dispatch(PageEvent::Click {
        target: lookup.find_matchup,
    });

    let routes = routes.lock();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path, "/matchup/Jarvan%20IV/Zed");
}

#[tokio::test]
async fn test_failed_fetch_leaves_page_uninitialized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v0/champions"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": true,
            "message": "Not found"
        })))
        .mount(&server)
        .await;

    let lookup = lookup_page();
    let err = Bootstrap::new(config_for(&server))
        .expect("bootstrap")
        .run(lookup.document.clone())
        .await
        .expect_err("404 must fail");

    match err {
        Error::Network(e) => assert_eq!(e.status(), Some(404)),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(row_names(&lookup.document, lookup.champion_results).is_empty());
}

#[tokio::test]
async fn test_empty_dataset_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v0/champions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;

    let err = Bootstrap::new(config_for(&server))
        .expect("bootstrap")
        .load()
        .await
        .expect_err("empty dataset");
    assert!(matches!(err, Error::EmptyDataset));
}
