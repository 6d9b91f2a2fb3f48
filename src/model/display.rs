// File: ./src/model/display.rs
// Localized date/time formatting and text renderings of activities.
use crate::model::item::{Activity, Category};
use crate::model::parser::{TIME_SEPARATOR, parse_item};
use crate::model::seed::FlightLeg;
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};

pub const DEFAULT_LOCALE: Locale = Locale::es_ES;
pub const DEFAULT_HEADING_PATTERN: &str = "%A %-d de %B";

/// How day headings are rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingStyle {
    pub pattern: String,
    pub locale: Locale,
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_HEADING_PATTERN.to_string(),
            locale: DEFAULT_LOCALE,
        }
    }
}

impl HeadingStyle {
    pub fn new(pattern: &str, locale: Locale) -> Self {
        Self {
            pattern: pattern.to_string(),
            locale,
        }
    }
}

/// Resolves `es_ES`, `es-ES` or `es_ES.UTF-8` style names.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let base = name.split(['.', '@']).next()?.replace('-', "_");
    Locale::try_from(base.as_str()).ok()
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.naive_local()))
}

/// Formats an ISO date or datetime; unparseable input comes back unchanged.
pub fn format_date(value: &str, pattern: &str, locale: Locale) -> String {
    let parsed = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .or_else(|| parse_datetime(value));
    match parsed {
        Some(dt) => dt.and_utc().format_localized(pattern, locale).to_string(),
        None => value.to_string(),
    }
}

/// `HH:MM` of an ISO datetime; anything else is returned as is.
pub fn format_time(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => value.to_string(),
    }
}

/// `"<label> · <long date>"`, or just the long date when there is no label.
pub fn format_day_heading(date: &str, label: Option<&str>, style: &HeadingStyle) -> String {
    let long = format_date(date, &style.pattern, style.locale);
    match label.map(str::trim).filter(|l| !l.is_empty()) {
        Some(l) => format!("{} · {}", l, long),
        None => long,
    }
}

/// `$1,234.50`; an em dash for missing, zero or non-finite amounts.
pub fn format_currency(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => return "—".to_string(),
    };
    let cents = (v.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

pub fn format_airport_leg(leg: &FlightLeg) -> String {
    format!(
        "{} {} → {} {}",
        leg.from,
        format_time(&leg.depart_local),
        leg.to,
        format_time(&leg.arrive_local)
    )
}

pub trait ActivityDisplay {
    fn to_item_line(&self) -> String;
    fn editable_line(&self) -> Option<String>;
    fn summary_line(&self) -> String;
}

impl ActivityDisplay for Activity {
    /// Renders the activity back into seed-line syntax, so it can be edited
    /// as text and parsed again.
    fn to_item_line(&self) -> String {
        let mut s = String::new();
        if let Some(t) = &self.time {
            s.push_str(t);
            s.push_str(TIME_SEPARATOR);
        }
        s.push_str(&self.title);

        let mut extras = Vec::new();
        if let Some(c) = &self.confirmation {
            extras.push(format!("confirmación: {}", c));
        }
        if let Some(n) = &self.notes {
            extras.push(n.clone());
        }
        if !extras.is_empty() {
            s.push_str(&format!(" ({})", extras.join(", ")));
        }
        s
    }

    /// The item line, but only when parsing it gives back the same time,
    /// title, notes and confirmation. Notes with their own parentheses, or a
    /// title holding the time separator, cannot survive the line syntax.
    fn editable_line(&self) -> Option<String> {
        let line = self.to_item_line();
        let again = parse_item(&line);
        let same = again.time == self.time
            && again.title == self.title
            && again.notes == self.notes
            && again.confirmation == self.confirmation;
        same.then_some(line)
    }

    fn summary_line(&self) -> String {
        let time = self.time.as_deref().unwrap_or("--:--");
        let mut s = format!("{:>5}  {}", time, self.title);
        if self.confirmation.is_some() {
            s.push_str(" [#]");
        }
        if self.coords.is_some() {
            s.push_str(" [@]");
        }
        s
    }
}

pub fn category_tag(category: Category) -> &'static str {
    match category {
        Category::Transport => "TRN",
        Category::Food => "FOD",
        Category::Culture => "CUL",
        Category::Experience => "EXP",
        Category::Other => "OTR",
    }
}

/// Spanish heading for a place category; unknown categories pass through.
pub fn place_category_label(category: &str) -> &str {
    match category {
        "restaurant" => "Restaurantes",
        "bar" => "Bares",
        "tour" => "Tours",
        "museum" => "Museos",
        "shop" => "Tiendas",
        "attraction" => "Atracciones",
        "market" => "Mercados",
        other => other,
    }
}
