// Defines the edits the key handlers ask the store to perform.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Itinerary,
    Trip,
    Places,
    MapSpots,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Itinerary => "Itinerario",
            View::Trip => "Viaje",
            View::Places => "Lugares",
            View::MapSpots => "Mapa",
        }
    }
}

/// Activities are addressed by day date and their index in the full
/// (unfiltered) day.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddLine { date: String, line: String },
    EditLine { date: String, index: usize, line: String },
    SetTime { date: String, index: usize, value: String },
    SetNotes { date: String, index: usize, value: String },
    CycleCategory { date: String, index: usize, forward: bool },
    Remove { date: String, index: usize },
    Reset,
    Quit,
}
