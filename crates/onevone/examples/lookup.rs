//! onevone lookup example
//!
//! Boots the lookup page against a running API server and replays a short
//! interaction: type a query into each field, pick a suggestion, then ask
//! for the matchup.
//!
//! Run with: cargo run -p onevone --example lookup -- [config.toml] [champion] [enemy]

use onevone::{AppConfig, Bootstrap, Document, ElementId, Key, PageEvent, SharedDocument};

struct Fields {
    champion: ElementId,
    enemy: ElementId,
    find_matchup: ElementId,
}

fn build_page() -> (SharedDocument, Fields) {
    let mut doc = Document::new();
    let mut field = |id: &str| {
        let wrapper = doc.append_child(doc.root(), "div");
        doc.add_class(wrapper, "input-container");
        let input = doc.append_child(wrapper, "input");
        doc.set_id(input, id);
        doc.add_class(input, "autocompleted");
        let container = doc.append_child(wrapper, "div");
        doc.add_class(container, "autocomplete-container");
        let results = doc.append_child(container, "div");
        doc.add_class(results, "autocomplete-results");
        input
    };
    let champion = field("champion");
    let enemy = field("enemy");
    let find_matchup = doc.append_child(doc.root(), "a");
    doc.set_id(find_matchup, "find-matchup");

    (
        doc.into_shared(),
        Fields {
            champion,
            enemy,
            find_matchup,
        },
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fails only if a subscriber is already installed.
    let _ = onevone::logging::init("info,onevone::widget=debug");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let champion_query = args.next().unwrap_or_else(|| "ah".to_string());
    let enemy_query = args.next().unwrap_or_else(|| "ze".to_string());

    let (document, fields) = build_page();
    let mut page = Bootstrap::new(config)?.run(document.clone()).await?;

    page.matchup().navigate.connect(|route| {
        println!("navigate -> {}", route.path);
    });

    for (input, query) in [(fields.champion, &champion_query), (fields.enemy, &enemy_query)] {
        page.dispatch(PageEvent::Focus { target: input });
        document.lock().set_value(input, query.as_str());
        page.dispatch(PageEvent::Input { target: input });

        if let Some(binder) = page.binder_for(input) {
            println!("{query:?} -> {:?}", binder.completer().matches());
        }
        page.dispatch(PageEvent::KeyDown {
            target: input,
            key: Key::Enter,
        });
        println!("field = {:?}", document.lock().value(input));
    }

    page.dispatch(PageEvent::Click {
        target: fields.find_matchup,
    });
    Ok(())
}
