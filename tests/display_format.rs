// File: tests/display_format.rs
use chrono::Locale;
use tripdeck::model::display::{
    format_airport_leg, format_currency, format_date, format_day_heading, format_time,
};
use tripdeck::model::seed::FlightLeg;
use tripdeck::model::{ActivityDisplay, HeadingStyle, parse_item};

#[test]
fn test_format_date_locales() {
    assert_eq!(
        format_date("2025-11-07", "%A %-d de %B", Locale::es_ES),
        "viernes 7 de noviembre"
    );
    assert_eq!(
        format_date("2025-11-07", "%A, %B %-d", Locale::en_US),
        "Friday, November 7"
    );
    assert_eq!(format_date("mañana", "%A", Locale::es_ES), "mañana");
}

#[test]
fn test_format_date_accepts_datetimes() {
    assert_eq!(
        format_date("2025-11-07T15:00:00", "%-d %B %H:%M", Locale::es_ES),
        "7 noviembre 15:00"
    );
}

#[test]
fn test_format_time() {
    assert_eq!(format_time("2025-11-07T17:16:00"), "17:16");
    assert_eq!(format_time("2025-11-07T09:05"), "09:05");
    assert_eq!(format_time("late"), "late");
}

#[test]
fn test_heading_with_custom_style() {
    let style = HeadingStyle::new("%a %d/%m", Locale::en_US);
    assert_eq!(
        format_day_heading("2025-11-08", Some("Saturday"), &style),
        "Saturday · Sat 08/11"
    );
}

#[test]
fn test_airport_leg() {
    let leg = FlightLeg {
        flight_number: "DL 2289".to_string(),
        from: "MSY".to_string(),
        to: "JFK".to_string(),
        date: "2025-11-11".to_string(),
        depart_local: "2025-11-11T13:40:00".to_string(),
        arrive_local: "2025-11-11T17:52:00".to_string(),
    };
    assert_eq!(format_airport_leg(&leg), "MSY 13:40 → JFK 17:52");
}

#[test]
fn test_currency_for_ticket_totals() {
    assert_eq!(format_currency(Some(258.0)), "$258.00");
    assert_eq!(format_currency(Some(1234.567)), "$1,234.57");
    assert_eq!(format_currency(None), "—");
}

#[test]
fn test_item_line_for_plain_and_timed_entries() {
    let plain = parse_item("Paseo por Frenchmen St (jazz en vivo)");
    assert_eq!(plain.to_item_line(), "Paseo por Frenchmen St (jazz en vivo)");

    let timed = parse_item("16:00 – Garden District walking tour (confirmación: GD-4410)");
    assert_eq!(
        timed.to_item_line(),
        "16:00 – Garden District walking tour (confirmación: GD-4410)"
    );
}
