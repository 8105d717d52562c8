use yomi_config::Config;
use yomi_export::UTF8_BOM;
use yomi_types::{ExportFormat, LayoutMode};

use crate::commands::generate::{export_last, generate_into_state, generate_options};
use crate::commands::lookup::lookup_line;
use crate::state::AppState;

fn state_with(config: impl FnOnce(&mut Config)) -> AppState {
    let mut c = Config::default();
    c.export.password = None;
    config(&mut c);
    AppState::new(c)
}

#[test]
fn empty_input_stores_nothing() {
    let state = state_with(|_| {});
    assert!(!generate_into_state(&state, "  \n \n"));
    assert!(state.last_document().is_none());
}

#[test]
fn latest_generation_wins() {
    let state = state_with(|_| {});

    assert!(generate_into_state(&state, "I like cats"));
    assert!(generate_into_state(&state, "a dog"));

    let doc = state.last_document().unwrap();
    assert!(doc.as_str().contains("<rb>dog</rb>"));
    assert!(!doc.as_str().contains("<rb>cats</rb>"));
}

#[test]
fn options_follow_config() {
    let state = state_with(|c| {
        c.rendering.layout = LayoutMode::Tabular;
        c.style.body_font_size = Some(4);
    });

    let options = generate_options(&state);
    assert_eq!(options.layout, LayoutMode::Tabular);
    assert_eq!(options.style.body_font_size, 10);
    assert_eq!(options.style.ruby_font_size, 10);
    assert_eq!(options.title, "Ruby Print");
}

#[test]
fn export_writes_last_document() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_with(|c| {
        c.export.format = ExportFormat::Html;
        c.export.file_stem = "lesson".into();
    });

    assert!(export_last(&state, dir.path(), None).is_err());

    generate_into_state(&state, "I like cats");
    let path = export_last(&state, dir.path(), None).unwrap();
    assert_eq!(path, dir.path().join("lesson.html"));

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));
    assert!(String::from_utf8_lossy(&bytes).contains("<rt>キャットツ</rt>"));
}

#[test]
fn export_checks_password() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_with(|c| c.export.password = Some("letmein".into()));
    generate_into_state(&state, "I like cats");

    assert!(export_last(&state, dir.path(), None).is_err());
    assert!(export_last(&state, dir.path(), Some("nope")).is_err());
    assert!(!dir.path().join("ruby_print.doc").exists());

    let path = export_last(&state, dir.path(), Some("letmein")).unwrap();
    assert_eq!(path, dir.path().join("ruby_print.doc"));
}

#[test]
fn lookup_rows() {
    let state = state_with(|c| {
        c.dictionary
            .overrides
            .insert("sushi".into(), "スシ".into());
    });

    assert_eq!(lookup_line(&state, "like,"), "like\tライク\tbase");
    assert_eq!(lookup_line(&state, "Sushi"), "Sushi\tスシ\toverrides");
    assert_eq!(lookup_line(&state, "qwzx"), "qwzx\t-\tnone");
}
