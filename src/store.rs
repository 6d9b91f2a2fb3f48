// File: src/store.rs
//! Trip state container.
//!
//! Edits are plain functions over `&[DayRecord]` that return the next
//! sequence; `TripStore` swaps the result in and writes it to disk.
use crate::context::SharedContext;
use crate::model::{
    Activity, ActivityPatch, Category, DayRecord, HeadingStyle, PlaceOfInterest, TripData,
    parse_itinerary,
};
use crate::storage::LocalStorage;
use std::collections::BTreeMap;

/// Appends `activity` to the day with `date`. Unknown dates leave the
/// sequence unchanged.
pub fn add_activity(days: &[DayRecord], date: &str, activity: Activity) -> Vec<DayRecord> {
    let mut next = days.to_vec();
    if let Some(day) = next.iter_mut().find(|d| d.date == date) {
        day.activities.push(activity);
    }
    next
}

/// Merges `patch` into the activity at `index` of the day with `date`.
pub fn update_activity(
    days: &[DayRecord],
    date: &str,
    index: usize,
    patch: &ActivityPatch,
) -> Vec<DayRecord> {
    let mut next = days.to_vec();
    if let Some(act) = next
        .iter_mut()
        .find(|d| d.date == date)
        .and_then(|d| d.activities.get_mut(index))
    {
        act.apply_patch(patch);
    }
    next
}

pub fn remove_activity(days: &[DayRecord], date: &str, index: usize) -> Vec<DayRecord> {
    let mut next = days.to_vec();
    if let Some(day) = next.iter_mut().find(|d| d.date == date)
        && index < day.activities.len()
    {
        day.activities.remove(index);
    }
    next
}

/// Days holding only activities of `category`; days left empty are dropped.
pub fn filter_by_category(days: &[DayRecord], category: Option<Category>) -> Vec<DayRecord> {
    let Some(cat) = category else {
        return days.to_vec();
    };
    days.iter()
        .filter_map(|day| {
            let activities: Vec<Activity> = day
                .activities
                .iter()
                .filter(|a| a.category == cat)
                .cloned()
                .collect();
            (!activities.is_empty()).then(|| DayRecord {
                activities,
                ..day.clone()
            })
        })
        .collect()
}

/// An activity with coordinates, flattened out of its day.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSpot {
    pub date: String,
    pub day_label: String,
    pub activity: Activity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripStats {
    pub days: usize,
    pub activities: usize,
}

/// Where the current days came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DaySource {
    Seed,
    Persisted,
    /// Persisted data was unreadable; the seed was used instead.
    Recovered(String),
}

#[derive(Debug)]
pub struct TripStore {
    ctx: SharedContext,
    details: TripData,
    style: HeadingStyle,
    days: Vec<DayRecord>,
    source: DaySource,
}

impl TripStore {
    /// Builds the store: persisted days when readable, otherwise the days
    /// parsed from `details`. Never fails.
    pub fn load(ctx: SharedContext, details: TripData, style: HeadingStyle) -> Self {
        let (days, source) = match LocalStorage::load_days(ctx.as_ref()) {
            Ok(Some(days)) => {
                log::info!("Loaded {} persisted days", days.len());
                (days, DaySource::Persisted)
            }
            Ok(None) => (parse_itinerary(&details.itinerary, &style), DaySource::Seed),
            Err(e) => {
                log::error!("Error loading persisted days: {:#}", e);
                match LocalStorage::backup_unreadable(ctx.as_ref()) {
                    Ok(Some(path)) => log::warn!("Unreadable days file copied to {:?}", path),
                    Ok(None) => {}
                    Err(be) => log::error!("Could not back up unreadable days file: {:#}", be),
                }
                (
                    parse_itinerary(&details.itinerary, &style),
                    DaySource::Recovered(e.to_string()),
                )
            }
        };
        Self {
            ctx,
            details,
            style,
            days,
            source,
        }
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn details(&self) -> &TripData {
        &self.details
    }

    pub fn source(&self) -> &DaySource {
        &self.source
    }

    pub fn heading_style(&self) -> &HeadingStyle {
        &self.style
    }

    pub fn day(&self, date: &str) -> Option<&DayRecord> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn activity(&self, date: &str, index: usize) -> Option<&Activity> {
        self.day(date).and_then(|d| d.activities.get(index))
    }

    /// The days the seed alone produces, ignoring any edits.
    pub fn seed_days(&self) -> Vec<DayRecord> {
        parse_itinerary(&self.details.itinerary, &self.style)
    }

    /// Swaps in `next` and persists it. Returns false if nothing changed.
    fn commit(&mut self, next: Vec<DayRecord>) -> bool {
        if next == self.days {
            return false;
        }
        self.days = next;
        self.persist();
        true
    }

    fn persist(&self) {
        if let Err(e) = LocalStorage::save_days(self.ctx.as_ref(), &self.days) {
            log::error!("Failed to persist days: {:#}", e);
        }
    }

    pub fn add_activity(&mut self, date: &str, activity: Activity) -> bool {
        let next = add_activity(&self.days, date, activity);
        self.commit(next)
    }

    pub fn update_activity(&mut self, date: &str, index: usize, patch: &ActivityPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        let next = update_activity(&self.days, date, index, patch);
        self.commit(next)
    }

    /// Returns the removed activity, if there was one at `index`.
    pub fn remove_activity(&mut self, date: &str, index: usize) -> Option<Activity> {
        let removed = self.activity(date, index).cloned()?;
        let next = remove_activity(&self.days, date, index);
        self.commit(next);
        Some(removed)
    }

    /// Discards all edits, re-deriving the days from the seed. The fresh
    /// sequence is written out so other processes see the reset.
    pub fn reset_days(&mut self) {
        self.days = self.seed_days();
        self.source = DaySource::Seed;
        self.persist();
    }

    // --- Queries ---

    /// Distinct activity categories, in first-seen order.
    pub fn categories_in_use(&self) -> Vec<Category> {
        let mut out = Vec::new();
        for act in self.days.iter().flat_map(|d| &d.activities) {
            if !out.contains(&act.category) {
                out.push(act.category);
            }
        }
        out
    }

    pub fn filtered_days(&self, category: Option<Category>) -> Vec<DayRecord> {
        filter_by_category(&self.days, category)
    }

    pub fn map_spots(&self) -> Vec<MapSpot> {
        self.days
            .iter()
            .flat_map(|day| {
                day.activities
                    .iter()
                    .filter(|a| a.coords.is_some())
                    .map(|a| MapSpot {
                        date: day.date.clone(),
                        day_label: day.label.clone(),
                        activity: a.clone(),
                    })
            })
            .collect()
    }

    pub fn stats(&self) -> TripStats {
        TripStats {
            days: self.days.len(),
            activities: self.days.iter().map(|d| d.activities.len()).sum(),
        }
    }

    /// Sorted distinct place categories.
    pub fn place_categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self
            .details
            .places_of_interest
            .iter()
            .map(|p| p.category.clone())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    }

    /// Places grouped by category (sorted), authored order within a group.
    pub fn places_by_category(&self, filter: Option<&str>) -> Vec<(String, Vec<&PlaceOfInterest>)> {
        let mut groups: BTreeMap<&str, Vec<&PlaceOfInterest>> = BTreeMap::new();
        for place in &self.details.places_of_interest {
            if filter.is_some_and(|f| f != place.category) {
                continue;
            }
            groups.entry(place.category.as_str()).or_default().push(place);
        }
        groups
            .into_iter()
            .map(|(cat, places)| (cat.to_string(), places))
            .collect()
    }
}
