use newsfeed_core::{collect_tag_vocabulary, Catalog, CatalogError, DateWindow};
use std::collections::HashSet;

fn seed_with_news(news: serde_json::Value) -> String {
    serde_json::json!({
        "reference_date": "2025-10-31",
        "all_category_label": "Все",
        "categories": ["Спорт", "Культура"],
        "date_filters": [
            { "value": "all", "label": "Все время" },
            { "value": "week", "label": "Неделя" }
        ],
        "news": news
    })
    .to_string()
}

fn news_item(id: i64, category: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("item {id}"),
        "description": "",
        "category": category,
        "date": date,
        "tags": ["a"],
        "image": "/placeholder.svg"
    })
}

#[test]
fn builtin_catalog_exposes_enumerations_in_order() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    assert_eq!(catalog.len(), 6);
    assert_eq!(
        catalog.category_options(),
        vec!["Все", "Технологии", "Спорт", "Политика", "Культура"]
    );
    let windows = catalog
        .date_filters()
        .iter()
        .map(|option| option.window)
        .collect::<Vec<_>>();
    assert_eq!(windows, DateWindow::ALL_WINDOWS.to_vec());
    assert_eq!(catalog.date_filter_label(DateWindow::Week), "Неделя");
    assert_eq!(catalog.get(3).map(|item| item.category.as_str()), Some("Политика"));
    assert!(catalog.get(42).is_none());
}

#[test]
fn builtin_tag_vocabulary_is_distinct_and_ordered() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let tags = catalog.all_tags();

    let distinct = catalog
        .items()
        .iter()
        .flat_map(|item| item.tags.iter())
        .collect::<HashSet<_>>();
    assert_eq!(tags.len(), distinct.len());
    assert_eq!(tags.len(), tags.iter().collect::<HashSet<_>>().len());
    assert_eq!(tags[0], "наука");
    assert_eq!(tags.last().map(String::as_str), Some("карьера"));
    assert_eq!(collect_tag_vocabulary(catalog.items()), tags.to_vec());
}

#[test]
fn date_filter_label_falls_back_to_wire_value() {
    let json = seed_with_news(serde_json::json!([]));
    let catalog = Catalog::from_seed_json(&json).expect("valid seed");
    assert!(catalog.is_empty());
    assert_eq!(catalog.date_filter_label(DateWindow::Today), "today");
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = seed_with_news(serde_json::json!([
        news_item(1, "Спорт", "2025-10-30"),
        news_item(1, "Культура", "2025-10-29")
    ]));
    let err = Catalog::from_seed_json(&json).expect_err("duplicate ids must fail");
    assert!(matches!(err, CatalogError::DuplicateId(1)));
}

#[test]
fn undeclared_category_is_rejected() {
    let json = seed_with_news(serde_json::json!([news_item(7, "Погода", "2025-10-30")]));
    let err = Catalog::from_seed_json(&json).expect_err("unknown category must fail");
    assert!(matches!(
        err,
        CatalogError::UnknownCategory { id: 7, ref category } if category == "Погода"
    ));
}

#[test]
fn invalid_item_date_is_rejected() {
    let json = seed_with_news(serde_json::json!([news_item(2, "Спорт", "30.10.2025")]));
    let err = Catalog::from_seed_json(&json).expect_err("invalid date must fail");
    assert!(err.to_string().contains("30.10.2025"));
}

#[test]
fn malformed_document_reports_parse_error() {
    let err = Catalog::from_seed_json("{ not json").expect_err("malformed json must fail");
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn unknown_date_filter_in_seed_is_rejected() {
    let json = serde_json::json!({
        "reference_date": "2025-10-31",
        "all_category_label": "Все",
        "categories": ["Спорт"],
        "date_filters": [{ "value": "year", "label": "Год" }],
        "news": []
    })
    .to_string();
    let err = Catalog::from_seed_json(&json).expect_err("unknown date filter must fail");
    assert!(matches!(err, CatalogError::UnknownDateFilter(value) if value == "year"));
}
