// File: ./src/links.rs
// Outbound links shown next to activities and places.
use crate::model::{Activity, Coordinates, PlaceOfInterest};

const MAPS_SEARCH: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Google Maps search for a free-text address.
pub fn maps_search_address(address: &str) -> String {
    format!("{}{}", MAPS_SEARCH, urlencoding::encode(address.trim()))
}

/// Google Maps search for a coordinate pair.
pub fn maps_search_coords(lat: f64, lng: f64) -> String {
    format!("{}{},{}", MAPS_SEARCH, lat, lng)
}

/// Uber deep link with the drop-off preset to the given point.
pub fn uber_dropoff(coords: &Coordinates, nickname: &str) -> String {
    format!(
        "https://m.uber.com/ul/?action=setPickup&pickup=my_location&dropoff[latitude]={}&dropoff[longitude]={}&dropoff[nickname]={}",
        coords.lat,
        coords.lng,
        urlencoding::encode(nickname)
    )
}

/// The link to open for an activity: its own link first, then its address.
pub fn activity_map_link(activity: &Activity) -> Option<String> {
    if let Some(link) = activity.link.as_deref().filter(|l| !l.trim().is_empty()) {
        return Some(link.to_string());
    }
    activity
        .address
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .map(maps_search_address)
        .or_else(|| {
            activity
                .coords
                .as_ref()
                .map(|c| maps_search_coords(c.lat, c.lng))
        })
}

pub fn place_map_link(place: &PlaceOfInterest) -> Option<String> {
    match place.coords() {
        Some(c) => Some(maps_search_coords(c.lat, c.lng)),
        None if !place.address.trim().is_empty() => Some(maps_search_address(&place.address)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_address_is_url_encoded() {
        assert_eq!(
            maps_search_address("813 Bienville St"),
            "https://www.google.com/maps/search/?api=1&query=813%20Bienville%20St"
        );
    }

    #[test]
    fn test_explicit_link_wins() {
        let mut act = Activity::new("Cena", Category::Food);
        act.address = Some("813 Bienville St".to_string());
        act.link = Some("https://arnauds.example/menu".to_string());
        assert_eq!(
            activity_map_link(&act).as_deref(),
            Some("https://arnauds.example/menu")
        );

        act.link = None;
        assert!(activity_map_link(&act).unwrap().contains("813%20Bienville"));

        act.address = None;
        assert_eq!(activity_map_link(&act), None);
    }

    #[test]
    fn test_uber_nickname_encoded() {
        let c = Coordinates {
            lat: 29.9552,
            lng: -90.0668,
            label: None,
        };
        let link = uber_dropoff(&c, "Hotel de la Poste");
        assert!(link.contains("dropoff[latitude]=29.9552"));
        assert!(link.contains("dropoff[longitude]=-90.0668"));
        assert!(link.ends_with("Hotel%20de%20la%20Poste"));
    }
}
