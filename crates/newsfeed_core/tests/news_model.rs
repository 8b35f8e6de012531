use newsfeed_core::{Catalog, CategorySelection, DateWindow, FilterState, NewsItem};

#[test]
fn news_item_serializes_iso_date_and_ordered_tags() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let item = catalog.get(1).expect("item 1 exists").clone();

    let json = serde_json::to_value(&item).expect("serialize news item");
    assert_eq!(json["id"], 1);
    assert_eq!(json["category"], "Технологии");
    assert_eq!(json["date"], "2025-10-30");
    assert_eq!(
        json["tags"],
        serde_json::json!(["наука", "инновации", "квантовые технологии"])
    );

    let decoded: NewsItem = serde_json::from_value(json).expect("deserialize news item");
    assert_eq!(decoded, item);
}

#[test]
fn filter_state_serialization_uses_wire_values() {
    let state = FilterState {
        category: CategorySelection::Only("Спорт".to_string()),
        date_window: DateWindow::Week,
        tags: ["спорт".to_string()].into_iter().collect(),
    };

    let json = serde_json::to_value(&state).expect("serialize filter state");
    assert_eq!(json["category"]["only"], "Спорт");
    assert_eq!(json["date_window"], "week");
    assert_eq!(json["tags"], serde_json::json!(["спорт"]));

    let default_json = serde_json::to_value(FilterState::default()).expect("serialize default state");
    assert_eq!(default_json["category"], "all");
    assert_eq!(default_json["date_window"], "all");
}
