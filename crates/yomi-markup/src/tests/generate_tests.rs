//! Whole-pipeline runs against the English processor

use std::sync::Arc;

use yomi_core::dictionary::ReadingMap;
use yomi_lang_english::{EnglishProcessor, ReadingDictionary};
use yomi_types::{DisplayMode, LayoutMode, Segmentation};

use crate::generate::{GenerateError, GenerateOptions, generate};

const RUBY_OPEN: &str = r#"<ruby class="notranslate" translate="no">"#;
const SPAN_OPEN: &str = r#"<span class="notranslate" translate="no">"#;

fn processor() -> EnglishProcessor {
    let overrides = ReadingMap::from_pairs("overrides", [("i", "アイ")]);
    let base = ReadingDictionary::from_tsv("base", "like\tライク\ntokyo\tトーキョー\nosaka\tオーサカ")
        .unwrap();
    EnglishProcessor::from_sources(overrides, Arc::new(base))
}

#[test]
fn i_like_sushi() {
    let doc = generate(&processor(), "I like Sushi.", &GenerateOptions::default()).unwrap();
    let html = doc.as_str();

    let expected = [
        format!("{RUBY_OPEN}<rb>I</rb><rt>アイ</rt></ruby><span> </span>"),
        format!("{RUBY_OPEN}<rb>like</rb><rt>ライク</rt></ruby><span> </span>"),
        format!("{SPAN_OPEN}Sushi </span>"),
        format!("{SPAN_OPEN}. </span>"),
        "<br>".to_string(),
    ]
    .concat();
    assert!(html.contains(&expected), "{html}");
    assert_eq!(html.matches("<ruby").count(), 2);
}

#[test]
fn punctuation_is_never_annotated() {
    let doc = generate(&processor(), "Tokyo, Osaka!", &GenerateOptions::default()).unwrap();
    let html = doc.as_str();

    assert!(html.contains("<rt>トーキョー</rt>"));
    assert!(html.contains("<rt>オーサカ</rt>"));
    assert!(html.contains(&format!("{SPAN_OPEN}, </span>")));
    assert!(html.contains(&format!("{SPAN_OPEN}! </span>")));
    assert!(!html.contains("<rb>,</rb>"));
    assert!(!html.contains("<rb>!</rb>"));
}

#[test]
fn empty_input_reports_no_input() {
    for text in ["", "   ", "\n\n", " \t\r\n "] {
        let result = generate(&processor(), text, &GenerateOptions::default());
        assert_eq!(result, Err(GenerateError::NoInput), "input: {text:?}");
    }
    assert_eq!(GenerateError::NoInput.to_string(), "no input provided");
}

#[test]
fn tabular_layout_has_one_row_per_non_blank_line() {
    let options = GenerateOptions::for_layout(LayoutMode::Tabular);
    let doc = generate(&processor(), "Hello\n\nWorld", &options).unwrap();
    let html = doc.as_str();

    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("<table>"));
    assert!(html.contains("font-size: 20pt"));
}

#[test]
fn flowing_layout_keeps_blank_lines_as_breaks() {
    let doc = generate(&processor(), "Hello\n\nWorld", &GenerateOptions::default()).unwrap();
    assert_eq!(doc.as_str().matches("<br>").count(), 3);
}

#[test]
fn lines_are_independent() {
    let doc = generate(&processor(), "I\r\nlike", &GenerateOptions::default()).unwrap();
    let html = doc.as_str();
    assert!(html.contains("<rb>I</rb><rt>アイ</rt></ruby><span> </span><br>"));
    assert!(html.contains("<rb>like</rb><rt>ライク</rt></ruby><span> </span><br>"));
}

#[test]
fn whitespace_segmentation_with_clean_display() {
    let processor = processor().with_segmentation(Segmentation::Whitespace);
    let options = GenerateOptions {
        display: DisplayMode::Clean,
        ..GenerateOptions::default()
    };
    let doc = generate(&processor, "I like Tokyo.", &options).unwrap();
    assert!(
        doc.as_str()
            .contains("<rb>Tokyo</rb><rt>トーキョー</rt></ruby>.<span> </span>")
    );

    let options = GenerateOptions {
        display: DisplayMode::Original,
        ..GenerateOptions::default()
    };
    let doc = generate(&processor, "I like Tokyo.", &options).unwrap();
    assert!(doc.as_str().contains("<rb>Tokyo.</rb><rt>トーキョー</rt>"));
}

#[test]
fn full_width_input_is_folded() {
    let doc = generate(&processor(), "Ｉ ｌｉｋｅ", &GenerateOptions::default()).unwrap();
    assert!(doc.as_str().contains("<rb>like</rb><rt>ライク</rt>"));
}

#[test]
fn embedded_dictionary_end_to_end() {
    let doc = generate(
        &EnglishProcessor::new(),
        "My name is Ken. I like cats and books.",
        &GenerateOptions::default(),
    )
    .unwrap();
    let html = doc.as_str();

    assert!(html.contains("<rb>My</rb><rt>マイ</rt>"));
    assert!(html.contains("<rb>Ken</rb><rt>ケン</rt>"));
    assert!(html.contains("<rb>cats</rb><rt>キャットツ</rt>"));
    assert!(html.contains("<rb>books</rb><rt>ブックス</rt>"));
}
