// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::help::HelpTab;
use crate::model::{Activity, Category, DayRecord};
use crate::store::{DaySource, TripStore};
use crate::tui::action::View;
use ratatui::widgets::ListState;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Focus {
    Sidebar,
    Main,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputMode {
    Normal,
    Adding,
    EditingLine,
    EditingTime,
    EditingNotes,
    ConfirmReset,
}

pub struct AppState {
    // Data
    pub store: TripStore,
    pub default_category: Category,
    /// Days shown in the sidebar (after the category filter).
    pub days: Vec<DayRecord>,

    // UI State
    pub view: View,
    pub day_state: ListState,
    pub list_state: ListState,
    pub spot_state: ListState,
    pub active_focus: Focus,
    pub mode: InputMode,
    pub message: String,
    pub show_help: bool,
    pub help_tab: HelpTab,
    /// Scroll offset for the Trip and Places pages.
    pub scroll: u16,

    // Filter State
    pub category_filter: Option<Category>,
    pub place_filter: Option<String>,

    // Input Buffers
    pub input_buffer: String,
    pub cursor_position: usize,
}

impl AppState {
    pub fn new(store: TripStore, default_category: Category) -> Self {
        let message = match store.source() {
            DaySource::Seed => "Itinerary loaded from the seed.".to_string(),
            DaySource::Persisted => "Loaded saved itinerary.".to_string(),
            DaySource::Recovered(_) => {
                "Saved itinerary was unreadable; using the seed (see log).".to_string()
            }
        };
        let mut state = Self {
            store,
            default_category,
            days: Vec::new(),
            view: View::Itinerary,
            day_state: ListState::default(),
            list_state: ListState::default(),
            spot_state: ListState::default(),
            active_focus: Focus::Sidebar,
            mode: InputMode::Normal,
            message,
            show_help: false,
            help_tab: HelpTab::default(),
            scroll: 0,
            category_filter: None,
            place_filter: None,
            input_buffer: String::new(),
            cursor_position: 0,
        };
        state.refresh_filtered_view();
        state
    }

    /// Recomputes the visible days and keeps the selections in range.
    pub fn refresh_filtered_view(&mut self) {
        let previous_date = self.selected_date();
        self.days = self.store.filtered_days(self.category_filter);

        let day_idx = previous_date
            .and_then(|d| self.days.iter().position(|x| x.date == d))
            .or(if self.days.is_empty() { None } else { Some(0) })
            .map(|i| i.min(self.days.len().saturating_sub(1)));
        self.day_state.select(day_idx);

        let len = self.visible_activities().len();
        let act_idx = match (self.list_state.selected(), len) {
            (_, 0) => None,
            (Some(i), n) => Some(i.min(n - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(act_idx);

        let spots = self.store.map_spots().len();
        if spots == 0 {
            self.spot_state.select(None);
        } else if self.spot_state.selected().is_none_or(|i| i >= spots) {
            self.spot_state.select(Some(0));
        }
    }

    pub fn selected_date(&self) -> Option<String> {
        self.day_state
            .selected()
            .and_then(|i| self.days.get(i))
            .map(|d| d.date.clone())
    }

    /// Activities of the selected day that pass the filter, with their
    /// index in the unfiltered day.
    pub fn visible_activities(&self) -> Vec<(usize, &Activity)> {
        let Some(day) = self.selected_date().and_then(|d| self.store.day(&d)) else {
            return Vec::new();
        };
        day.activities
            .iter()
            .enumerate()
            .filter(|(_, a)| self.category_filter.is_none_or(|c| a.category == c))
            .collect()
    }

    /// `(date, index in day, activity)` of the highlighted activity.
    pub fn selected_activity(&self) -> Option<(String, usize, &Activity)> {
        let date = self.selected_date()?;
        let visible = self.visible_activities();
        let (idx, act) = *visible.get(self.list_state.selected()?)?;
        Some((date, idx, act))
    }

    pub fn cycle_category_filter(&mut self) {
        let cats = self.store.categories_in_use();
        self.category_filter = match self.category_filter {
            None => cats.first().copied(),
            Some(cur) => {
                let pos = cats.iter().position(|c| *c == cur);
                pos.and_then(|p| cats.get(p + 1)).copied()
            }
        };
        self.list_state.select(None);
        self.refresh_filtered_view();
    }

    pub fn cycle_place_filter(&mut self) {
        let cats = self.store.place_categories();
        self.place_filter = match &self.place_filter {
            None => cats.first().cloned(),
            Some(cur) => {
                let pos = cats.iter().position(|c| c == cur);
                pos.and_then(|p| cats.get(p + 1)).cloned()
            }
        };
        self.scroll = 0;
    }

    pub fn switch_view(&mut self, view: View) {
        self.view = view;
        self.scroll = 0;
    }

    /// Enters an input mode with `initial` in the buffer and the cursor at its end.
    pub fn start_input(&mut self, mode: InputMode, initial: &str) {
        self.mode = mode;
        self.input_buffer = initial.to_string();
        self.cursor_position = self.input_buffer.chars().count();
    }

    // --- INPUT HELPERS ---
    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());

        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let before = self.input_buffer.chars().take(current_index - 1);
            let after = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.input_buffer.chars().count())
    }

    // --- NAVIGATION ---
    fn focused_list(&mut self) -> (&mut ListState, usize) {
        match (self.view, self.active_focus) {
            (View::MapSpots, _) => {
                let len = self.store.map_spots().len();
                (&mut self.spot_state, len)
            }
            (_, Focus::Sidebar) => {
                let len = self.days.len();
                (&mut self.day_state, len)
            }
            (_, Focus::Main) => {
                let len = self.visible_activities().len();
                (&mut self.list_state, len)
            }
        }
    }

    fn after_move(&mut self) {
        if self.view == View::Itinerary && self.active_focus == Focus::Sidebar {
            self.list_state.select(None);
            self.refresh_filtered_view();
        }
    }

    pub fn next(&mut self) {
        if matches!(self.view, View::Trip | View::Places) {
            self.scroll = self.scroll.saturating_add(1);
            return;
        }
        let (list, len) = self.focused_list();
        if len == 0 {
            return;
        }
        let i = match list.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        list.select(Some(i));
        self.after_move();
    }
    pub fn previous(&mut self) {
        if matches!(self.view, View::Trip | View::Places) {
            self.scroll = self.scroll.saturating_sub(1);
            return;
        }
        let (list, len) = self.focused_list();
        if len == 0 {
            return;
        }
        let i = match list.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        list.select(Some(i));
        self.after_move();
    }
    pub fn jump_forward(&mut self, step: usize) {
        if matches!(self.view, View::Trip | View::Places) {
            self.scroll = self.scroll.saturating_add(step as u16);
            return;
        }
        let (list, len) = self.focused_list();
        if len > 0 {
            let current = list.selected().unwrap_or(0);
            list.select(Some((current + step).min(len - 1)));
            self.after_move();
        }
    }
    pub fn jump_backward(&mut self, step: usize) {
        if matches!(self.view, View::Trip | View::Places) {
            self.scroll = self.scroll.saturating_sub(step as u16);
            return;
        }
        let (list, len) = self.focused_list();
        if len > 0 {
            let current = list.selected().unwrap_or(0);
            list.select(Some(current.saturating_sub(step)));
            self.after_move();
        }
    }
    pub fn toggle_focus(&mut self) {
        self.active_focus = match self.active_focus {
            Focus::Main => Focus::Sidebar,
            Focus::Sidebar => Focus::Main,
        }
    }
}
