// Tab widget behavior against a markup document loaded from YAML

use crossterm::event::KeyCode;
use std::path::Path;

use tab_panels::core::validation::validate;
use tab_panels::core::{App, AppConfig, AppEvent, Document, HostDocument, TabController};

const THREE_TABS: &str = r#"
root:
  tag: main
  children:
    - tag: div
      attributes: { role: tablist }
      children:
        - tag: button
          text: A
          attributes: { role: tab, id: a, aria-controls: p1, aria-selected: true, tabindex: 0 }
        - tag: button
          text: B
          attributes: { role: tab, id: b, aria-controls: p2, aria-selected: false, tabindex: -1 }
        - tag: button
          text: C
          attributes: { role: tab, id: c, aria-controls: p3, aria-selected: false, tabindex: -1 }
    - tag: section
      attributes: { role: tabpanel, id: p1 }
    - tag: section
      attributes: { role: tabpanel, id: p2, hidden: true }
    - tag: section
      attributes: { role: tabpanel, id: p3, hidden: true }
"#;

fn id(doc: &Document, name: &str) -> tab_panels::ElementId {
    doc.element_by_id(name).unwrap()
}

fn visible_panels(doc: &Document) -> Vec<&str> {
    ["p1", "p2", "p3"]
        .into_iter()
        .filter(|p| !doc.is_hidden(id(doc, p)))
        .collect()
}

fn zero_tab_index(doc: &Document) -> Vec<&str> {
    ["a", "b", "c"]
        .into_iter()
        .filter(|t| doc.attribute(id(doc, t), "tabindex") == Some("0"))
        .collect()
}

#[test]
fn test_navigate_then_click_scenario() {
    let mut doc = Document::from_yaml(THREE_TABS).unwrap();
    let mut controller = TabController::attach(&mut doc).unwrap();

    assert!(controller.navigate(&mut doc, KeyCode::Right));
    assert_eq!(controller.active_index(), 1);
    assert_eq!(doc.focused(), Some(id(&doc, "b")));
    assert_eq!(zero_tab_index(&doc), vec!["b"]);
    assert_eq!(visible_panels(&doc), vec!["p1"]);

    let c = id(&doc, "c");
    assert!(controller.select(&mut doc, c));
    assert_eq!(visible_panels(&doc), vec!["p3"]);
    assert_eq!(doc.attribute(c, "aria-selected"), Some("true"));
    assert_eq!(doc.attribute(id(&doc, "a"), "aria-selected"), Some("false"));
    assert_eq!(controller.active_index(), 1);
}

#[test]
fn test_key_sequence_keeps_single_focusable_tab() {
    let mut doc = Document::from_yaml(THREE_TABS).unwrap();
    let mut controller = TabController::attach(&mut doc).unwrap();

    let mut expected = 0usize;
    for step in 0..20 {
        let key = if step % 3 == 0 { KeyCode::Left } else { KeyCode::Right };
        controller.navigate(&mut doc, key);
        expected = match key {
            KeyCode::Left => (expected + 2) % 3,
            _ => (expected + 1) % 3,
        };
        assert_eq!(controller.active_index(), expected);
        assert_eq!(zero_tab_index(&doc).len(), 1);
    }
}

#[test]
fn test_enter_selects_focused_tab() {
    let doc = Document::from_yaml(THREE_TABS).unwrap();
    let mut app = App::new(AppConfig::default(), doc);

    app.handle_event(AppEvent::Navigate(KeyCode::Left), |_, _| None);
    app.handle_event(AppEvent::Activate, |_, _| None);

    assert_eq!(visible_panels(&app.document), vec!["p3"]);
    assert_eq!(app.selected_tab(), Some(id(&app.document, "c")));
}

#[test]
fn test_click_outside_tabs_changes_nothing() {
    let doc = Document::from_yaml(THREE_TABS).unwrap();
    let mut app = App::new(AppConfig::default(), doc);
    let panel = id(&app.document, "p2");

    app.handle_event(AppEvent::Click { column: 0, row: 0 }, |_, _| None);
    app.handle_event(AppEvent::Click { column: 0, row: 0 }, |_, _| Some(panel));

    assert_eq!(visible_panels(&app.document), vec!["p1"]);
}

#[test]
fn test_document_without_tab_list_binds_nothing() {
    let doc = Document::from_yaml("root:\n  tag: main\n").unwrap();
    let mut app = App::new(AppConfig::default(), doc);
    assert!(app.controller.is_none());

    app.handle_event(AppEvent::Navigate(KeyCode::Right), |_, _| None);
    assert_eq!(app.document.focused(), None);
}

#[test]
fn test_bundled_demo_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/planets.yaml");
    let mut doc = Document::load(&path).unwrap();
    assert!(validate(&doc).is_empty());

    let controller = TabController::attach(&mut doc).unwrap();
    assert_eq!(controller.tab_count(), 4);

    let mars = id(&doc, "tab-mars");
    controller.select(&mut doc, mars);
    assert!(!doc.is_hidden(id(&doc, "image-mars")));
    assert!(doc.is_hidden(id(&doc, "image-mercury")));
    assert_eq!(doc.panel_for(mars), Some(id(&doc, "panel-mars")));
}
