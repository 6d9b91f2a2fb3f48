// File: tests/store_behavior.rs
use std::sync::Arc;
use tripdeck::context::{SharedContext, TestContext};
use tripdeck::model::{
    Activity, ActivityPatch, Category, Coordinates, HeadingStyle, TripData, parse_item,
};
use tripdeck::storage::LocalStorage;
use tripdeck::store::{DaySource, TripStore};

fn make_store(ctx: &Arc<TestContext>) -> TripStore {
    let shared: SharedContext = ctx.clone();
    TripStore::load(shared, TripData::bundled().unwrap(), HeadingStyle::default())
}

#[test]
fn test_fresh_store_uses_seed_and_writes_nothing() {
    let ctx = Arc::new(TestContext::new());
    let store = make_store(&ctx);

    assert_eq!(store.source(), &DaySource::Seed);
    assert_eq!(store.days(), store.seed_days().as_slice());
    assert!(LocalStorage::load_days(ctx.as_ref()).unwrap().is_none());
}

#[test]
fn test_add_persists_and_survives_reload() {
    let ctx = Arc::new(TestContext::new());
    let mut store = make_store(&ctx);
    let date = store.days()[1].date.clone();
    let before = store.day(&date).unwrap().activities.len();

    assert!(store.add_activity(&date, parse_item("23:30 – Jazz en Frenchmen St")));
    assert_eq!(store.day(&date).unwrap().activities.len(), before + 1);

    let reloaded = make_store(&ctx);
    assert_eq!(reloaded.source(), &DaySource::Persisted);
    let last = reloaded.day(&date).unwrap().activities.last().unwrap();
    assert_eq!(last.title, "Jazz en Frenchmen St");
    assert_eq!(last.time.as_deref(), Some("23:30"));
}

#[test]
fn test_add_to_unknown_date_changes_nothing() {
    let ctx = Arc::new(TestContext::new());
    let mut store = make_store(&ctx);
    let before = store.days().to_vec();

    assert!(!store.add_activity("1999-01-01", Activity::new("Nada", Category::Other)));
    assert_eq!(store.days(), before.as_slice());
    assert!(LocalStorage::load_days(ctx.as_ref()).unwrap().is_none());
}

#[test]
fn test_update_merges_patch() {
    let ctx = Arc::new(TestContext::new());
    let mut store = make_store(&ctx);
    let date = store.days()[0].date.clone();

    let patch = ActivityPatch {
        address: Some(Some("Louis Armstrong New Orleans International Airport".to_string())),
        coords: Some(Some(Coordinates {
            lat: 29.9934,
            lng: -90.2580,
            label: Some("MSY".to_string()),
        })),
        ..Default::default()
    };
    assert!(store.update_activity(&date, 0, &patch));

    let act = store.activity(&date, 0).unwrap();
    assert_eq!(act.title, "Llegada a MSY");
    assert_eq!(act.time.as_deref(), Some("17:16"));
    assert!(act.coords.is_some());

    // Re-parsing an edited line keeps the user-supplied details.
    let reparsed = parse_item("17:30 – Llegada a MSY (retraso)");
    assert!(store.update_activity(&date, 0, &ActivityPatch::from_parsed(&reparsed)));
    let act = store.activity(&date, 0).unwrap();
    assert_eq!(act.time.as_deref(), Some("17:30"));
    assert_eq!(act.notes.as_deref(), Some("retraso"));
    assert!(act.coords.is_some());
    assert!(act.address.is_some());
}

#[test]
fn test_out_of_range_update_and_remove() {
    let ctx = Arc::new(TestContext::new());
    let mut store = make_store(&ctx);
    let date = store.days()[0].date.clone();
    let patch = ActivityPatch {
        title: Some("x".to_string()),
        ..Default::default()
    };

    assert!(!store.update_activity(&date, 99, &patch));
    assert!(store.remove_activity(&date, 99).is_none());
    assert!(!store.update_activity(&date, 0, &ActivityPatch::default()));
}

#[test]
fn test_remove_then_reset() {
    let ctx = Arc::new(TestContext::new());
    let mut store = make_store(&ctx);
    let date = store.days()[0].date.clone();

    let removed = store.remove_activity(&date, 0).unwrap();
    assert_eq!(removed.title, "Llegada a MSY");
    assert_ne!(store.days(), store.seed_days().as_slice());

    store.reset_days();
    assert_eq!(store.days(), store.seed_days().as_slice());

    // The reset is on disk too.
    let persisted = LocalStorage::load_days(ctx.as_ref()).unwrap().unwrap();
    assert_eq!(persisted, store.seed_days());
}

#[test]
fn test_categories_and_filter() {
    let ctx = Arc::new(TestContext::new());
    let store = make_store(&ctx);

    let cats = store.categories_in_use();
    // First bundled activity is the arrival (Other), then a transfer.
    assert_eq!(cats[0], Category::Other);
    assert_eq!(cats[1], Category::Transport);
    let mut deduped = cats.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), cats.len());

    let culture = store.filtered_days(Some(Category::Culture));
    assert!(!culture.is_empty());
    assert!(
        culture
            .iter()
            .flat_map(|d| &d.activities)
            .all(|a| a.category == Category::Culture)
    );
    assert!(culture.iter().all(|d| !d.activities.is_empty()));
}

#[test]
fn test_map_spots_and_stats() {
    let ctx = Arc::new(TestContext::new());
    let mut store = make_store(&ctx);
    assert!(store.map_spots().is_empty());

    let date = store.days()[2].date.clone();
    let label = store.days()[2].label.clone();
    let mut act = Activity::new("Audubon Zoo", Category::Experience);
    act.coords = Some(Coordinates {
        lat: 29.9239,
        lng: -90.1312,
        label: None,
    });
    let stats_before = store.stats();
    store.add_activity(&date, act);

    let spots = store.map_spots();
    assert_eq!(spots.len(), 1);
    assert_eq!(spots[0].date, date);
    assert_eq!(spots[0].day_label, label);
    assert_eq!(store.stats().activities, stats_before.activities + 1);
    assert_eq!(store.stats().days, stats_before.days);
}

#[test]
fn test_places_grouping() {
    let ctx = Arc::new(TestContext::new());
    let store = make_store(&ctx);

    let cats = store.place_categories();
    let mut sorted = cats.clone();
    sorted.sort();
    assert_eq!(cats, sorted);

    let groups = store.places_by_category(None);
    let group_names: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(group_names, cats.iter().map(|c| c.as_str()).collect::<Vec<_>>());

    let bars = store.places_by_category(Some("bar"));
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].1[0].name, "French 75 Bar");
    assert!(store.places_by_category(Some("spa")).is_empty());
}
