//! Reading resolution across override, base and fallback tiers

use std::sync::Arc;

use yomi_core::dictionary::ReadingMap;
use yomi_core::language::{LanguageProcessor, ResolutionPath, TokenKind};
use yomi_types::Segmentation;

use crate::dictionary::ReadingDictionary;
use crate::processor::{EnglishProcessor, ProcessorOptions};

fn processor(overrides: &[(&str, &str)], base: &str) -> EnglishProcessor {
    let overrides = ReadingMap::from_pairs("overrides", overrides.iter().copied());
    let base = ReadingDictionary::from_tsv("base", base).unwrap();
    EnglishProcessor::from_sources(overrides, Arc::new(base))
}

fn reading(p: &EnglishProcessor, word: &str) -> Option<String> {
    p.resolve(word).map(|r| r.reading)
}

#[test]
fn override_shadows_base() {
    let p = processor(&[("i", "アイ")], "i\tイ\nlike\tライク");
    let res = p.resolve("I").unwrap();
    assert_eq!(res.reading, "アイ");
    assert_eq!(
        res.path,
        ResolutionPath::Direct {
            source: "overrides".to_string()
        }
    );
    assert_eq!(reading(&p, "LIKE").as_deref(), Some("ライク"));
}

#[test]
fn plural_suffix_readings() {
    let p = processor(
        &[],
        "cat\tキャット\nbook\tブック\ndog\tドッグ\nbox\tボックス\ncup\tカップ",
    );
    assert_eq!(reading(&p, "cats").as_deref(), Some("キャットツ"));
    assert_eq!(reading(&p, "books").as_deref(), Some("ブックス"));
    assert_eq!(reading(&p, "cups").as_deref(), Some("カップス"));
    assert_eq!(reading(&p, "dogs").as_deref(), Some("ドッグズ"));
    assert_eq!(reading(&p, "Boxes").as_deref(), Some("ボックスイズ"));
}

#[test]
fn inflected_path_names_the_stem() {
    let p = processor(&[], "cat\tキャット");
    let res = p.resolve("cats").unwrap();
    assert_eq!(
        res.path,
        ResolutionPath::Inflected {
            stem: "cat".to_string(),
            source: "base".to_string(),
            rule: "-s",
        }
    );
}

#[test]
fn es_word_falls_back_to_s_stem() {
    let p = processor(&[], "cake\tケーキ");
    assert_eq!(reading(&p, "cakes").as_deref(), Some("ケーキズ"));
}

#[test]
fn stems_resolve_through_overrides_too() {
    let p = processor(&[("ken", "ケン")], "");
    assert_eq!(reading(&p, "kens").as_deref(), Some("ケンズ"));
}

#[test]
fn no_double_fallback() {
    let p = processor(&[], "cat\tキャット");
    assert_eq!(reading(&p, "catss"), None);
    assert_eq!(reading(&p, "catses"), None);
}

#[test]
fn direct_hit_wins_over_stripping() {
    let p = processor(&[], "bus\tバス\nbu\tブ");
    assert_eq!(reading(&p, "bus").as_deref(), Some("バス"));
}

#[test]
fn irregular_plurals_stay_unresolved() {
    let p = processor(&[], "city\tシティ\nchild\tチャイルド");
    assert_eq!(reading(&p, "cities"), None);
    assert_eq!(reading(&p, "children"), None);
}

#[test]
fn half_width_readings_are_widened() {
    let p = processor(&[("ken", "ｹﾝ")], "cat\tｷｬｯﾄ");
    assert_eq!(reading(&p, "ken").as_deref(), Some("ケン"));
    assert_eq!(reading(&p, "cats").as_deref(), Some("キャットツ"));
}

#[test]
fn misses_are_silent() {
    let p = processor(&[], "like\tライク");
    assert_eq!(reading(&p, "sushi"), None);
    assert_eq!(reading(&p, ""), None);
    assert_eq!(reading(&p, "s"), None);
}

#[test]
fn romaji_fallback_is_opt_in() {
    let p = processor(&[], "");
    assert_eq!(reading(&p, "sushi"), None);

    let p = processor(&[], "").with_romaji_fallback(true);
    let res = p.resolve("Sushi").unwrap();
    assert_eq!(res.reading, "スシ");
    assert_eq!(res.path, ResolutionPath::Romaji);
    assert_eq!(reading(&p, "hello"), None);
}

#[test]
fn built_in_overrides_cover_contractions() {
    let p = EnglishProcessor::with_options(ProcessorOptions {
        base_dictionary: false,
        ..ProcessorOptions::default()
    });
    assert_eq!(reading(&p, "'s").as_deref(), Some("ズ"));
    assert_eq!(reading(&p, "'t").as_deref(), Some("ト"));
    assert_eq!(reading(&p, "Tokyo").as_deref(), Some("トウキョウ"));
    assert_eq!(reading(&p, "like"), None);
}

#[test]
fn configured_overrides_replace_built_ins() {
    let p = EnglishProcessor::with_options(ProcessorOptions {
        overrides: vec![("Ken".to_string(), "ケンイチ".to_string())],
        ..ProcessorOptions::default()
    });
    assert_eq!(reading(&p, "ken").as_deref(), Some("ケンイチ"));
    assert_eq!(reading(&p, "like").as_deref(), Some("ライク"));
    assert_eq!(p.sources().len(), 2);
}

#[test]
fn unreadable_additional_dictionary_is_skipped() {
    let p = EnglishProcessor::with_options(ProcessorOptions {
        additional_paths: vec!["/nonexistent/extra.tsv".to_string()],
        ..ProcessorOptions::default()
    });
    assert_eq!(reading(&p, "like").as_deref(), Some("ライク"));
}

#[test]
fn normalize_respects_folding_flag() {
    let p = processor(&[], "");
    assert_eq!(p.normalize("Ｈｉ\r\n"), "Hi\n");

    let p = processor(&[], "").with_full_width_folding(false);
    assert_eq!(p.normalize("Ｈｉ\r\n"), "Ｈｉ\n");
}

#[test]
fn tokenize_follows_segmentation() {
    let p = processor(&[], "");
    let tokens = p.tokenize("Ken.");
    assert_eq!(tokens.len(), 2);

    let p = p.with_segmentation(Segmentation::Whitespace);
    let tokens = p.tokenize("Ken.");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Word);
    assert_eq!(tokens[0].word(), "Ken");
}
