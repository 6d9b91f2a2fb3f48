// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Best-effort classification of an activity. Never authoritative.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize, EnumIter,
)]
pub enum Category {
    // Aliases read the Spanish names stored by v1 data files.
    #[serde(alias = "Transporte")]
    Transport,
    #[serde(alias = "Comida")]
    Food,
    #[serde(alias = "Cultura")]
    Culture,
    #[serde(alias = "Experiencia")]
    Experience,
    #[default]
    #[serde(alias = "Otro")]
    Other,
}

impl Category {
    /// Next category in declaration order, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Category> = Category::iter().collect();
        let pos = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<Category> = Category::iter().collect();
        let pos = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }

    /// Spanish label used by the bundled itinerary.
    pub fn label_es(&self) -> &'static str {
        match self {
            Category::Transport => "Transporte",
            Category::Food => "Comida",
            Category::Culture => "Cultura",
            Category::Experience => "Experiencia",
            Category::Other => "Otro",
        }
    }

    /// Accepts both the English variant name and the Spanish label, any case.
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim().to_lowercase();
        Category::iter().find(|c| {
            c.to_string().to_lowercase() == needle || c.label_es().to_lowercase() == needle
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Transport => write!(f, "Transport"),
            Category::Food => write!(f, "Food"),
            Category::Culture => write!(f, "Culture"),
            Category::Experience => write!(f, "Experience"),
            Category::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,

    // User-supplied details. The itinerary parser never fills these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coordinates>,
}

impl Activity {
    pub fn new(title: &str, category: Category) -> Self {
        Self {
            title: title.to_string(),
            category,
            ..Default::default()
        }
    }

    /// Applies every field set in `patch`, leaving the others untouched.
    pub fn apply_patch(&mut self, patch: &ActivityPatch) {
        if let Some(time) = &patch.time {
            self.time = time.clone();
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(notes) = &patch.notes {
            self.notes = notes.clone();
        }
        if let Some(confirmation) = &patch.confirmation {
            self.confirmation = confirmation.clone();
        }
        if let Some(source) = &patch.source {
            self.source = source.clone();
        }
        if let Some(address) = &patch.address {
            self.address = address.clone();
        }
        if let Some(link) = &patch.link {
            self.link = link.clone();
        }
        if let Some(coords) = &patch.coords {
            self.coords = coords.clone();
        }
    }
}

/// Partial update for an activity.
///
/// Outer `None` means "leave as is"; `Some(None)` clears an optional field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityPatch {
    pub time: Option<Option<String>>,
    pub title: Option<String>,
    pub category: Option<Category>,
    pub notes: Option<Option<String>>,
    pub confirmation: Option<Option<String>>,
    pub source: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub link: Option<Option<String>>,
    pub coords: Option<Option<Coordinates>>,
}

impl ActivityPatch {
    /// Patch carrying only the fields the itinerary parser produces.
    /// User-supplied details (coords, address, source, link) are left alone.
    pub fn from_parsed(parsed: &Activity) -> Self {
        Self {
            time: Some(parsed.time.clone()),
            title: Some(parsed.title.clone()),
            category: Some(parsed.category),
            notes: Some(parsed.notes.clone()),
            confirmation: Some(parsed.confirmation.clone()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: String,
    pub label: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_cycle_wraps() {
        assert_eq!(Category::Transport.next(), Category::Food);
        assert_eq!(Category::Other.next(), Category::Transport);
        assert_eq!(Category::Transport.previous(), Category::Other);
    }

    #[test]
    fn test_category_from_name_accepts_spanish() {
        assert_eq!(Category::from_name("Comida"), Some(Category::Food));
        assert_eq!(Category::from_name("culture"), Some(Category::Culture));
        assert_eq!(Category::from_name("Museo"), None);
    }

    #[test]
    fn test_patch_clears_and_keeps() {
        let mut act = Activity::new("Brunch", Category::Food);
        act.notes = Some("bring cash".to_string());
        act.address = Some("699 St Charles Ave".to_string());

        let patch = ActivityPatch {
            notes: Some(None),
            title: Some("Late brunch".to_string()),
            ..Default::default()
        };
        act.apply_patch(&patch);

        assert_eq!(act.title, "Late brunch");
        assert_eq!(act.notes, None);
        assert_eq!(act.address.as_deref(), Some("699 St Charles Ave"));
        assert_eq!(act.category, Category::Food);
    }
}
