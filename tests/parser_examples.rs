// File: tests/parser_examples.rs
use indexmap::IndexMap;
use tripdeck::model::{Category, DayInput, HeadingStyle, TripData, parse_item, parse_itinerary};

fn seed(entries: &[(&str, Option<&str>, &[&str])]) -> IndexMap<String, DayInput> {
    entries
        .iter()
        .map(|(date, day, items)| {
            (
                date.to_string(),
                DayInput {
                    day: day.map(|d| d.to_string()),
                    items: items.iter().map(|s| s.to_string()).collect(),
                },
            )
        })
        .collect()
}

#[test]
fn test_arrival_line() {
    let act = parse_item("17:16 – Llegada a MSY");
    assert_eq!(act.time.as_deref(), Some("17:16"));
    assert_eq!(act.title, "Llegada a MSY");
    assert_eq!(act.category, Category::Other);
    assert_eq!(act.notes, None);
    assert_eq!(act.confirmation, None);
}

#[test]
fn test_dinner_line_is_food() {
    let act = parse_item("20:00 – Cena en Arnaud's + French 75 Bar");
    assert_eq!(act.time.as_deref(), Some("20:00"));
    assert_eq!(act.title, "Cena en Arnaud's + French 75 Bar");
    assert_eq!(act.category, Category::Food);
}

#[test]
fn test_confirmation_and_notes_split() {
    let act = parse_item("Brunch en Willa Jean (confirmación: ABC123, llegar 10 min antes)");
    assert_eq!(act.time, None);
    assert_eq!(act.title, "Brunch en Willa Jean");
    assert_eq!(act.confirmation.as_deref(), Some("ABC123"));
    assert_eq!(act.notes.as_deref(), Some("llegar 10 min antes"));
    assert_eq!(act.category, Category::Food);
}

#[test]
fn test_user_supplied_fields_stay_unset() {
    let act = parse_item("18:00 – Traslado al hotel (Uber, 25 min)");
    assert_eq!(act.category, Category::Transport);
    assert_eq!(act.notes.as_deref(), Some("Uber, 25 min"));
    assert!(act.source.is_none());
    assert!(act.address.is_none());
    assert!(act.link.is_none());
    assert!(act.coords.is_none());
}

#[test]
fn test_cardinality_and_authored_order() {
    let map = seed(&[
        ("2025-11-09", Some("Domingo"), &["A", "B", "C"]),
        ("2025-11-07", None, &[]),
        ("2025-11-08", Some("Sábado"), &["D"]),
    ]);
    let days = parse_itinerary(&map, &HeadingStyle::default());

    let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-11-09", "2025-11-07", "2025-11-08"]);
    let counts: Vec<usize> = days.iter().map(|d| d.activities.len()).collect();
    assert_eq!(counts, vec![3, 0, 1]);
    let titles: Vec<&str> = days[0].activities.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn test_day_labels() {
    let map = seed(&[
        ("2025-11-07", Some("Viernes – Llegada"), &[]),
        ("2025-11-08", None, &[]),
        ("2025-11-09", Some("   "), &[]),
        ("someday", Some("Libre"), &[]),
    ]);
    let days = parse_itinerary(&map, &HeadingStyle::default());

    assert_eq!(days[0].label, "Viernes – Llegada · viernes 7 de noviembre");
    assert_eq!(days[1].label, "sábado 8 de noviembre");
    assert_eq!(days[2].label, "domingo 9 de noviembre");
    // Unparseable dates are shown as written.
    assert_eq!(days[3].label, "Libre · someday");
}

#[test]
fn test_parsing_is_idempotent() {
    let data = TripData::bundled().unwrap();
    let style = HeadingStyle::default();
    assert_eq!(
        parse_itinerary(&data.itinerary, &style),
        parse_itinerary(&data.itinerary, &style)
    );
}

#[test]
fn test_bundled_itinerary_matches_seed_shape() {
    let data = TripData::bundled().unwrap();
    let days = parse_itinerary(&data.itinerary, &HeadingStyle::default());

    assert_eq!(days.len(), data.itinerary.len());
    for (day, (date, input)) in days.iter().zip(data.itinerary.iter()) {
        assert_eq!(&day.date, date);
        assert_eq!(day.activities.len(), input.items.len());
    }
}
