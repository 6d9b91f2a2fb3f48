// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod parser;
pub mod seed;

pub use display::{ActivityDisplay, HeadingStyle};
pub use item::{Activity, ActivityPatch, Category, Coordinates, DayRecord};
pub use parser::{infer_category, parse_item, parse_itinerary};
pub use seed::{DayInput, PlaceOfInterest, TripData};
