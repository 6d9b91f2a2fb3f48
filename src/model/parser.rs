// File: ./src/model/parser.rs
// Turns the free-text lines of a seed itinerary into structured activities.
//
// Nothing in here fails: a line without a time, without a trailing
// parenthetical or without a confirmation phrase simply yields the
// corresponding fields unset.
use crate::model::display::{HeadingStyle, format_day_heading};
use crate::model::item::{Activity, Category, DayRecord};
use crate::model::seed::DayInput;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Separator between the time prefix and the rest of a line (en dash).
pub const TIME_SEPARATOR: &str = " – ";

static RE_TRAILING_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)\s*$").unwrap());
static RE_CONFIRMATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)confirmaci[óo]n:\s*([^,]+)").unwrap());
static RE_PAREN_REMNANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*\)").unwrap());

// Checked in this order; the first list with a hit decides.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Transport, &["vuelo", "traslado"]),
    (
        Category::Food,
        &["brunch", "cena", "almuerzo", "dinner", "breakfast"],
    ),
    (Category::Culture, &["tour", "museum", "speakeasy"]),
    (Category::Experience, &["aquarium", "zoo", "insectarium"]),
];

/// Guesses a category from keywords in the untouched raw line.
pub fn infer_category(item: &str) -> Category {
    let txt = item.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| txt.contains(w)))
        .map(|(cat, _)| *cat)
        .unwrap_or(Category::Other)
}

/// Splits `"HH:MM – rest"` into its time and the remainder.
/// Extra separators after the first belong to the remainder.
fn split_time(item: &str) -> (Option<String>, &str) {
    match item.split_once(TIME_SEPARATOR) {
        Some((time, rest)) => {
            let time = time.trim();
            let time = (!time.is_empty()).then(|| time.to_string());
            (time, rest)
        }
        None => (None, item),
    }
}

/// Strips a trailing `( ... )` group, returning `(title, raw_notes)`.
fn cleanse_parenthetical(value: &str) -> (String, Option<String>) {
    match RE_TRAILING_PAREN.captures(value) {
        Some(caps) => {
            // Group 0 always exists on a successful match.
            let whole = caps.get(0).map(|m| m.start()).unwrap_or(value.len());
            let notes = caps.get(1).map(|m| m.as_str().to_string());
            (value[..whole].trim().to_string(), notes)
        }
        None => (value.trim().to_string(), None),
    }
}

/// Reads the value of a `confirmación: X` phrase, up to the next comma.
pub fn extract_confirmation(text: Option<&str>) -> Option<String> {
    let caps = RE_CONFIRMATION.captures(text?)?;
    let value = caps.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Drops the confirmation phrase and any parenthetical remnant from raw notes.
fn clean_notes(text: Option<&str>) -> Option<String> {
    let text = text?;
    let without_conf = RE_CONFIRMATION.replacen(text, 1, "");
    let without_paren = RE_PAREN_REMNANT.replacen(&without_conf, 1, "");
    let cleaned = without_paren.trim_matches(|c: char| c == ',' || c.is_whitespace());
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Parses one free-text itinerary line.
pub fn parse_item(item: &str) -> Activity {
    let (time, remainder) = split_time(item);
    let (title, raw_notes) = cleanse_parenthetical(remainder);
    let confirmation = extract_confirmation(raw_notes.as_deref());
    let notes = clean_notes(raw_notes.as_deref());

    Activity {
        time,
        title,
        category: infer_category(item),
        notes,
        confirmation,
        ..Default::default()
    }
}

/// Derives day records from the seed mapping, keeping its authored order.
pub fn parse_itinerary(
    itinerary: &IndexMap<String, DayInput>,
    style: &HeadingStyle,
) -> Vec<DayRecord> {
    itinerary
        .iter()
        .map(|(date, info)| DayRecord {
            date: date.clone(),
            label: format_day_heading(date, info.day.as_deref(), style),
            activities: info.items.iter().map(|item| parse_item(item)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_repeats_are_rejoined() {
        let act = parse_item("10:00 – Tour – Garden District");
        assert_eq!(act.time.as_deref(), Some("10:00"));
        assert_eq!(act.title, "Tour – Garden District");
        assert_eq!(act.category, Category::Culture);
    }

    #[test]
    fn test_hyphen_is_not_a_separator() {
        let act = parse_item("10:00 - Paseo");
        assert_eq!(act.time, None);
        assert_eq!(act.title, "10:00 - Paseo");
    }

    #[test]
    fn test_parenthetical_must_be_trailing() {
        let act = parse_item("Museo (cerrado lunes) y paseo");
        assert_eq!(act.title, "Museo (cerrado lunes) y paseo");
        assert_eq!(act.notes, None);
    }

    #[test]
    fn test_trailing_whitespace_after_parenthetical() {
        let act = parse_item("Frenchmen St (jazz en vivo)   ");
        assert_eq!(act.title, "Frenchmen St");
        assert_eq!(act.notes.as_deref(), Some("jazz en vivo"));
    }

    #[test]
    fn test_empty_parenthetical_is_kept_in_title() {
        let act = parse_item("Paseo ()");
        assert_eq!(act.title, "Paseo ()");
        assert_eq!(act.notes, None);
    }

    #[test]
    fn test_confirmation_only_notes_become_unset() {
        let act = parse_item("Cena en Commander's (Confirmacion: XYZ-9)");
        assert_eq!(act.confirmation.as_deref(), Some("XYZ-9"));
        assert_eq!(act.notes, None);
    }

    #[test]
    fn test_confirmation_is_case_insensitive() {
        assert_eq!(
            extract_confirmation(Some("CONFIRMACIÓN:  QW12 , mesa 4")),
            Some("QW12".to_string())
        );
        assert_eq!(extract_confirmation(Some("sin datos")), None);
        assert_eq!(extract_confirmation(None), None);
    }

    #[test]
    fn test_nested_open_paren_is_stripped_from_notes() {
        let act = parse_item("Bar (abre (tarde)");
        assert_eq!(act.title, "Bar");
        // Interior is "abre (tarde"; no closing paren left to strip.
        assert_eq!(act.notes.as_deref(), Some("abre (tarde"));
    }

    #[test]
    fn test_category_priority_is_first_match() {
        // Both "vuelo" and "dinner" present: Transport wins.
        assert_eq!(infer_category("Dinner antes del vuelo"), Category::Transport);
        assert_eq!(infer_category("Brunch + museum"), Category::Food);
        assert_eq!(infer_category("Audubon Zoo tour"), Category::Culture);
        assert_eq!(infer_category("Insectarium"), Category::Experience);
        assert_eq!(infer_category("Check-in hotel"), Category::Other);
    }

    #[test]
    fn test_category_uses_the_untouched_line() {
        // Keyword only inside the parenthetical still counts.
        let act = parse_item("Llegada (traslado incluido)");
        assert_eq!(act.category, Category::Transport);
        assert_eq!(act.title, "Llegada");
    }

    #[test]
    fn test_empty_line() {
        let act = parse_item("");
        assert_eq!(act.title, "");
        assert_eq!(act.time, None);
        assert_eq!(act.category, Category::Other);
    }
}
