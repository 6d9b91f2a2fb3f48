// File: src/tui/handlers.rs
// Handles keyboard input and applies the resulting edits to the store.
use crate::help::HelpTab;
use crate::model::{ActivityDisplay, ActivityPatch, Category, parse_item};
use crate::tui::action::{Action, View};
use crate::tui::state::{AppState, Focus, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

fn non_empty(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Performs `action` against the store and reports the outcome in the
/// status line.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::AddLine { date, line } => {
            let Some(line) = non_empty(&line) else {
                state.message = "Nothing to add.".to_string();
                return;
            };
            let mut activity = parse_item(&line);
            if activity.category == Category::Other {
                activity.category = state.default_category;
            }
            let title = activity.title.clone();
            if state.store.add_activity(&date, activity) {
                state.message = format!("Added '{}'.", title);
                state.refresh_filtered_view();
                // Select the new activity when the filter shows it.
                let added = state
                    .store
                    .day(&date)
                    .and_then(|d| d.activities.len().checked_sub(1));
                let pos = if state.selected_date().as_deref() == Some(date.as_str()) {
                    state
                        .visible_activities()
                        .iter()
                        .position(|(i, _)| Some(*i) == added)
                } else {
                    None
                };
                if pos.is_some() {
                    state.list_state.select(pos);
                }
            } else {
                state.message = format!("No day {} to add to.", date);
            }
        }
        Action::EditLine { date, index, line } => {
            let Some(line) = non_empty(&line) else {
                state.message = "Empty line ignored; use d to remove.".to_string();
                return;
            };
            let current = state.store.activity(&date, index).map(|a| a.to_item_line());
            if current.as_deref() == Some(line.as_str()) {
                state.message = "No changes.".to_string();
                return;
            }
            let parsed = parse_item(&line);
            let mut patch = ActivityPatch::from_parsed(&parsed);
            // Keep a hand-picked category when the keywords say nothing.
            if parsed.category == Category::Other {
                patch.category = None;
            }
            state.message = if state.store.update_activity(&date, index, &patch) {
                format!("Updated '{}'.", parsed.title)
            } else {
                "No changes.".to_string()
            };
            state.refresh_filtered_view();
        }
        Action::SetTime { date, index, value } => {
            let patch = ActivityPatch {
                time: Some(non_empty(&value)),
                ..Default::default()
            };
            state.message = if state.store.update_activity(&date, index, &patch) {
                "Time updated.".to_string()
            } else {
                "No changes.".to_string()
            };
            state.refresh_filtered_view();
        }
        Action::SetNotes { date, index, value } => {
            let patch = ActivityPatch {
                notes: Some(non_empty(&value)),
                ..Default::default()
            };
            state.message = if state.store.update_activity(&date, index, &patch) {
                "Notes updated.".to_string()
            } else {
                "No changes.".to_string()
            };
            state.refresh_filtered_view();
        }
        Action::CycleCategory {
            date,
            index,
            forward,
        } => {
            let Some(current) = state.store.activity(&date, index).map(|a| a.category) else {
                return;
            };
            let next = if forward {
                current.next()
            } else {
                current.previous()
            };
            let patch = ActivityPatch {
                category: Some(next),
                ..Default::default()
            };
            state.store.update_activity(&date, index, &patch);
            state.message = format!("Category: {}", next.label_es());
            state.refresh_filtered_view();
        }
        Action::Remove { date, index } => {
            state.message = match state.store.remove_activity(&date, index) {
                Some(removed) => format!("Removed '{}'.", removed.title),
                None => "Nothing to remove.".to_string(),
            };
            state.refresh_filtered_view();
        }
        Action::Reset => {
            state.store.reset_days();
            state.category_filter = None;
            state.list_state.select(None);
            state.refresh_filtered_view();
            state.message = "Itinerary reset to the original plan.".to_string();
        }
        Action::Quit => {}
    }
}

fn handle_input_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Esc => {
            state.mode = InputMode::Normal;
            state.reset_input();
            state.message = "Cancelled.".to_string();
            None
        }
        KeyCode::Enter => {
            let mode = state.mode;
            let value = std::mem::take(&mut state.input_buffer);
            state.cursor_position = 0;
            state.mode = InputMode::Normal;

            if mode == InputMode::Adding {
                let date = state.selected_date()?;
                return Some(Action::AddLine { date, line: value });
            }
            let (date, index, _) = state.selected_activity()?;
            match mode {
                InputMode::EditingLine => Some(Action::EditLine {
                    date,
                    index,
                    line: value,
                }),
                InputMode::EditingTime => Some(Action::SetTime { date, index, value }),
                InputMode::EditingNotes => Some(Action::SetNotes { date, index, value }),
                _ => None,
            }
        }
        KeyCode::Char(c) => {
            state.enter_char(c);
            None
        }
        KeyCode::Backspace => {
            state.delete_char();
            None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            None
        }
        KeyCode::Home => {
            state.cursor_position = 0;
            None
        }
        KeyCode::End => {
            state.cursor_position = state.input_buffer.chars().count();
            None
        }
        _ => None,
    }
}

fn handle_itinerary_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('a') => {
            if state.selected_date().is_some() {
                state.start_input(InputMode::Adding, "");
            } else {
                state.message = "Select a day first.".to_string();
            }
            None
        }
        KeyCode::Char('e') => {
            if let Some((_, _, act)) = state.selected_activity() {
                match act.editable_line() {
                    Some(line) => state.start_input(InputMode::EditingLine, &line),
                    None => {
                        state.message =
                            "This entry does not fit on one line; use t or n.".to_string()
                    }
                }
            }
            None
        }
        KeyCode::Char('t') => {
            if let Some((_, _, act)) = state.selected_activity() {
                let time = act.time.clone().unwrap_or_default();
                state.start_input(InputMode::EditingTime, &time);
            }
            None
        }
        KeyCode::Char('n') => {
            if let Some((_, _, act)) = state.selected_activity() {
                let notes = act.notes.clone().unwrap_or_default();
                state.start_input(InputMode::EditingNotes, &notes);
            }
            None
        }
        KeyCode::Char(c @ ('+' | '-')) => state
            .selected_activity()
            .map(|(date, index, _)| Action::CycleCategory {
                date,
                index,
                forward: c == '+',
            }),
        KeyCode::Char('d') | KeyCode::Delete => state
            .selected_activity()
            .map(|(date, index, _)| Action::Remove { date, index }),
        KeyCode::Char('f') => {
            state.cycle_category_filter();
            state.message = match state.category_filter {
                Some(c) => format!("Filter: {}", c.label_es()),
                None => "Filter: all".to_string(),
            };
            None
        }
        KeyCode::Char('R') => {
            state.mode = InputMode::ConfirmReset;
            state.message = "Reset all edits? (y/N)".to_string();
            None
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.toggle_focus();
            None
        }
        KeyCode::Enter | KeyCode::Right if state.active_focus == Focus::Sidebar => {
            state.active_focus = Focus::Main;
            None
        }
        KeyCode::Left if state.active_focus == Focus::Main => {
            state.active_focus = Focus::Sidebar;
            None
        }
        _ => None,
    }
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.mode {
        InputMode::Adding
        | InputMode::EditingLine
        | InputMode::EditingTime
        | InputMode::EditingNotes => return handle_input_key(key, state),
        InputMode::ConfirmReset => {
            state.mode = InputMode::Normal;
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Reset),
                _ => {
                    state.message = "Reset cancelled.".to_string();
                    None
                }
            };
        }
        InputMode::Normal => {}
    }

    if state.show_help {
        match key.code {
            KeyCode::Tab => {
                state.help_tab = match state.help_tab {
                    HelpTab::Keyboard => HelpTab::LineSyntax,
                    HelpTab::LineSyntax => HelpTab::Keyboard,
                };
            }
            KeyCode::Char('q') => return Some(Action::Quit),
            _ => state.show_help = false,
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('?') => {
            state.show_help = true;
            return None;
        }
        KeyCode::Char('1') => state.switch_view(View::Itinerary),
        KeyCode::Char('2') => state.switch_view(View::Trip),
        KeyCode::Char('3') => state.switch_view(View::Places),
        KeyCode::Char('4') => state.switch_view(View::MapSpots),
        KeyCode::Down | KeyCode::Char('j') => state.next(),
        KeyCode::Up | KeyCode::Char('k') => state.previous(),
        KeyCode::PageDown => state.jump_forward(10),
        KeyCode::PageUp => state.jump_backward(10),
        _ => {
            return match state.view {
                View::Itinerary => handle_itinerary_key(key, state),
                View::Places if key.code == KeyCode::Char('f') => {
                    state.cycle_place_filter();
                    state.message = match &state.place_filter {
                        Some(c) => format!("Places: {}", c),
                        None => "Places: all".to_string(),
                    };
                    None
                }
                _ => None,
            };
        }
    }
    None
}
