use yomi_core::dictionary::ReadingMap;

/// Built-in override set, checked before the base dictionary
pub fn default_overrides() -> ReadingMap {
    ReadingMap::from_pairs(
        "overrides",
        [
            ("i", "アイ"),
            ("my", "マイ"),
            ("ken", "ケン"),
            ("tokyo", "トウキョウ"),
            ("osaka", "オオサカ"),
            ("youtube", "ユーチューブ"),
            ("'s", "ズ"),
            ("'t", "ト"),
            ("smartphone", "スマートフォン"),
            ("iphone", "アイフォン"),
            ("internet", "インターネット"),
        ],
    )
}
