// File: ./src/help.rs
//! Help content shown by the `?` popup and `--help`.

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum HelpTab {
    #[default]
    Keyboard,
    LineSyntax,
}

#[derive(Clone, Debug)]
pub struct HelpItem {
    pub keys: String,
    pub desc: String,
    pub example: String,
}

#[derive(Clone, Debug)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<HelpItem>,
}

fn item(keys: &str, desc: &str, example: &str) -> HelpItem {
    HelpItem {
        keys: keys.to_string(),
        desc: desc.to_string(),
        example: example.to_string(),
    }
}

/// How an itinerary line is read when adding or editing.
pub fn get_line_syntax_help() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Itinerary line".to_string(),
            items: vec![
                item("HH:MM – ", "Time prefix (en dash, spaces around it)", "09:00 – Brunch"),
                item("(notes)", "Trailing parenthetical becomes notes", "Paseo (jazz en vivo)"),
                item(
                    "confirmación: X",
                    "Inside the parenthetical, sets the confirmation code",
                    "(confirmación: ABC123, llegar 10 min antes)",
                ),
            ],
        },
        HelpSection {
            title: "Category keywords".to_string(),
            items: vec![
                item("Transport", "vuelo, traslado", ""),
                item("Food", "brunch, cena, almuerzo, dinner, breakfast", ""),
                item("Culture", "tour, museum, speakeasy", ""),
                item("Experience", "aquarium, zoo, insectarium", ""),
                item("Other", "anything else; first matching list wins", ""),
            ],
        },
    ]
}

pub fn get_keyboard_help() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "General".to_string(),
            items: vec![
                item("?", "Toggle this help", ""),
                item("q", "Quit", ""),
                item("1-4", "Itinerary, Trip, Places, Map spots", ""),
                item("Tab", "Switch focus between days and activities", ""),
                item("j/k, ↑/↓", "Move selection", ""),
                item("PgUp/PgDn", "Jump", ""),
            ],
        },
        HelpSection {
            title: "Itinerary".to_string(),
            items: vec![
                item("a", "Add a line to the selected day", "15:00 – Haus of Hoodoo"),
                item("e", "Edit the whole line", ""),
                item("t", "Edit the time", ""),
                item("n", "Edit the notes", ""),
                item("+ / -", "Next / previous category", ""),
                item("d", "Remove the activity", ""),
                item("f", "Cycle the category filter", ""),
                item("R", "Reset to the original itinerary (confirm with y)", ""),
            ],
        },
        HelpSection {
            title: "Places".to_string(),
            items: vec![item("f", "Cycle the place category filter", "")],
        },
    ]
}

pub fn get_help(tab: HelpTab) -> Vec<HelpSection> {
    match tab {
        HelpTab::Keyboard => get_keyboard_help(),
        HelpTab::LineSyntax => get_line_syntax_help(),
    }
}
