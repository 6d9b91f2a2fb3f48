// File: tests/storage_roundtrip.rs
use std::fs;
use std::sync::Arc;
use tripdeck::context::{AppContext, SharedContext, TestContext};
use tripdeck::model::{Category, HeadingStyle, TripData, parse_itinerary};
use tripdeck::storage::LocalStorage;
use tripdeck::store::{DaySource, TripStore};

#[test]
fn test_persist_then_reload_is_equal() {
    let ctx = TestContext::new();
    let data = TripData::bundled().unwrap();
    let days = parse_itinerary(&data.itinerary, &HeadingStyle::default());

    LocalStorage::save_days(&ctx, &days).unwrap();
    let loaded = LocalStorage::load_days(&ctx).unwrap().unwrap();
    assert_eq!(loaded, days);
}

#[test]
fn test_corrupt_file_falls_back_to_seed() {
    let ctx = Arc::new(TestContext::new());
    let path = ctx.get_days_path().unwrap();
    fs::write(&path, "[{\"date\": \"2025-11-07\", \"label\": ").unwrap();

    let shared: SharedContext = ctx.clone();
    let data = TripData::bundled().unwrap();
    let expected = parse_itinerary(&data.itinerary, &HeadingStyle::default());
    let store = TripStore::load(shared, data, HeadingStyle::default());

    assert_eq!(store.days(), expected.as_slice());
    assert!(matches!(store.source(), DaySource::Recovered(_)));

    // The broken file is kept aside and nothing new was written yet.
    let backup = path.with_extension("json.bak");
    assert!(backup.exists());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[{\"date\": \"2025-11-07\", \"label\": "
    );
}

#[test]
fn test_first_edit_after_recovery_persists() {
    let ctx = Arc::new(TestContext::new());
    let path = ctx.get_days_path().unwrap();
    fs::write(&path, "not json at all").unwrap();

    let shared: SharedContext = ctx.clone();
    let mut store = TripStore::load(shared, TripData::bundled().unwrap(), HeadingStyle::default());
    let date = store.days()[0].date.clone();
    assert!(store.remove_activity(&date, 0).is_some());

    let reloaded = LocalStorage::load_days(ctx.as_ref()).unwrap().unwrap();
    assert_eq!(reloaded, store.days());
}

#[test]
fn test_browser_format_with_spanish_categories() {
    let ctx = TestContext::new();
    let path = ctx.get_days_path().unwrap();
    let v1 = r#"[
        {
            "date": "2025-11-08",
            "label": "Sábado · sábado 8 de noviembre",
            "activities": [
                { "time": "09:00", "title": "Brunch en Willa Jean", "category": "Comida",
                  "confirmation": "ABC123", "notes": "llegar 10 min antes" },
                { "title": "Paseo", "category": "Otro",
                  "coords": { "lat": 29.95, "lng": -90.07 } }
            ]
        }
    ]"#;
    fs::write(&path, v1).unwrap();

    let days = LocalStorage::load_days(&ctx).unwrap().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].activities[0].category, Category::Food);
    assert_eq!(days[0].activities[1].category, Category::Other);
    assert!(days[0].activities[1].coords.is_some());

    // Saving upgrades the file to the envelope format.
    LocalStorage::save_days(&ctx, &days).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["version"], 2);
    assert_eq!(raw["days"][0]["activities"][0]["category"], "Food");
}
