// File: src/tui/view.rs
use crate::color_utils;
use crate::help::{HelpTab, get_help};
use crate::links;
use crate::model::display::{
    category_tag, format_airport_leg, format_currency, format_date, format_time,
    place_category_label,
};
use crate::model::{ActivityDisplay, Category};
use crate::tui::action::View;
use crate::tui::state::{AppState, Focus, InputMode};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

fn rgb(c: (f32, f32, f32)) -> Color {
    let (r, g, b) = color_utils::to_u8(c);
    Color::Rgb(r, g, b)
}

fn category_color(category: Category) -> Color {
    rgb(color_utils::category_rgb(category))
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

fn focus_border(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_tabs(f, state, v_chunks[0]);
    match state.view {
        View::Itinerary => draw_itinerary(f, state, v_chunks[1]),
        View::Trip => draw_trip(f, state, v_chunks[1]),
        View::Places => draw_places(f, state, v_chunks[1]),
        View::MapSpots => draw_map_spots(f, state, v_chunks[1]),
    }
    draw_footer(f, state, v_chunks[2]);

    if state.show_help {
        draw_help(f, state.help_tab);
    }
}

fn draw_tabs(f: &mut Frame, state: &AppState, area: Rect) {
    let mut spans = Vec::new();
    for (i, view) in [View::Itinerary, View::Trip, View::Places, View::MapSpots]
        .iter()
        .enumerate()
    {
        let style = if *view == state.view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, view.title()), style));
        spans.push(Span::raw(" "));
    }
    let city = &state.store.details().trip.city;
    if !city.is_empty() {
        spans.push(Span::styled(
            format!("  {}", city),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_itinerary(f: &mut Frame, state: &mut AppState, area: Rect) {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(h_chunks[1]);

    // --- Sidebar: days ---
    let day_items: Vec<ListItem> = state
        .days
        .iter()
        .map(|d| {
            let count = format!(" ({})", d.activities.len());
            ListItem::new(Line::from(vec![
                Span::raw(d.label.clone()),
                Span::styled(count, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    let filter_title = match state.category_filter {
        Some(c) => format!(" Días [{}] ", c.label_es()),
        None => " Días ".to_string(),
    };
    let days = List::new(day_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(filter_title)
                .border_style(focus_border(state.active_focus == Focus::Sidebar)),
        )
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_stateful_widget(days, h_chunks[0], &mut state.day_state);

    // --- Main: activities ---
    let act_items: Vec<ListItem> = state
        .visible_activities()
        .iter()
        .map(|(_, a)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", category_tag(a.category)),
                    Style::default().fg(category_color(a.category)),
                ),
                Span::raw(a.summary_line()),
            ]))
        })
        .collect();
    let day_title = state
        .selected_date()
        .and_then(|d| state.store.day(&d).map(|day| format!(" {} ", day.label)))
        .unwrap_or_else(|| " Actividades ".to_string());
    let activities = List::new(act_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(day_title)
                .border_style(focus_border(state.active_focus == Focus::Main)),
        )
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_stateful_widget(activities, main_chunks[0], &mut state.list_state);

    // --- Details ---
    let mut lines = Vec::new();
    if let Some((_, _, act)) = state.selected_activity() {
        lines.push(Line::from(Span::styled(
            act.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(field("Categoría", act.category.label_es()));
        if let Some(t) = &act.time {
            lines.push(field("Hora", t));
        }
        if let Some(c) = &act.confirmation {
            lines.push(field("Confirmación", c));
        }
        if let Some(n) = &act.notes {
            lines.push(field("Notas", n));
        }
        if let Some(s) = &act.source {
            lines.push(field("Fuente", s));
        }
        if let Some(a) = &act.address {
            lines.push(field("Dirección", a));
        }
        if let Some(link) = links::activity_map_link(act) {
            lines.push(field("Mapa", &link));
        }
        if let Some(c) = &act.coords {
            let label = c.label.as_deref().unwrap_or(&act.title);
            lines.push(field("Uber", &links::uber_dropoff(c, label)));
        }
    } else {
        lines.push(Line::from("No activity selected."));
    }
    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Detalles "))
        .wrap(Wrap { trim: false });
    f.render_widget(details, main_chunks[1]);
}

fn draw_trip(f: &mut Frame, state: &AppState, area: Rect) {
    let details = state.store.details();
    let style = state.store.heading_style();
    let long = |v: &str| format_date(v, "%a %-d %b, %H:%M", style.locale);
    let mut lines = Vec::new();

    lines.push(heading("Viaje"));
    lines.push(field("Ciudad", &details.trip.city));
    if !details.trip.travelers.is_empty() {
        lines.push(field("Viajeros", &details.trip.travelers.join(", ")));
    }
    lines.push(field(
        "Fechas",
        &format!(
            "{} → {}",
            format_date(&details.trip.dates.start, &style.pattern, style.locale),
            format_date(&details.trip.dates.end, &style.pattern, style.locale)
        ),
    ));
    lines.push(Line::from(""));

    let hotel = &details.hotel;
    if !hotel.name.is_empty() {
        lines.push(heading("Hotel"));
        lines.push(field("Nombre", &hotel.name));
        lines.push(field("Dirección", &hotel.location));
        lines.push(field("Check-in", &long(&hotel.check_in)));
        lines.push(field("Check-out", &long(&hotel.check_out)));
        if !hotel.source.is_empty() {
            lines.push(field("Fuente", &hotel.source));
        }
        if let Some(c) = &hotel.coords {
            lines.push(field("Mapa", &links::maps_search_coords(c.lat, c.lng)));
            lines.push(field("Uber", &links::uber_dropoff(c, &hotel.name)));
        }
        lines.push(Line::from(""));
    }

    if let Some(flights) = &details.flights {
        lines.push(heading("Vuelos"));
        if !flights.confirmation_code.is_empty() {
            lines.push(field("Confirmación", &flights.confirmation_code));
        }
        for (label, legs) in [("Ida", &flights.outbound), ("Vuelta", &flights.return_legs)] {
            for leg in legs {
                lines.push(field(
                    label,
                    &format!("{}  {}", leg.flight_number, format_airport_leg(leg)),
                ));
            }
        }
        lines.push(Line::from(""));
    }

    if !details.reservations.is_empty() {
        lines.push(heading("Reservas"));
        for r in &details.reservations {
            lines.push(Line::from(format!(
                "{} {}  {} · {} ({} pers.)  #{}",
                r.date,
                format_time(&r.time),
                r.restaurant,
                r.kind,
                r.party_size,
                r.confirmation_number
            )));
        }
        lines.push(Line::from(""));
    }

    if !details.tickets.is_empty() {
        lines.push(heading("Entradas"));
        for t in &details.tickets {
            lines.push(Line::from(format!(
                "{}  {}  ({} días)",
                t.ticket_name,
                format_currency(t.total_paid_usd),
                t.valid_days
            )));
            if !t.includes.is_empty() {
                lines.push(field("  Incluye", &t.includes.join(", ")));
            }
        }
        lines.push(Line::from(""));
    }

    if !details.notes.is_empty() {
        lines.push(heading("Notas"));
        for n in &details.notes {
            lines.push(Line::from(format!("• {}", n)));
        }
        lines.push(Line::from(""));
    }

    let stats = state.store.stats();
    lines.push(Line::from(Span::styled(
        format!("{} días · {} actividades", stats.days, stats.activities),
        Style::default().fg(Color::DarkGray),
    )));

    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Viaje "))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(p, area);
}

fn draw_places(f: &mut Frame, state: &AppState, area: Rect) {
    let mut lines = Vec::new();
    for (category, places) in state.store.places_by_category(state.place_filter.as_deref()) {
        let color = rgb(color_utils::generate_color(&category));
        lines.push(Line::from(Span::styled(
            format!("{} ({})", place_category_label(&category), places.len()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for place in places {
            lines.push(Line::from(format!("  {}", place.name)));
            if !place.address.is_empty() {
                lines.push(field("    Dirección", &place.address));
            }
            if let Some(phone) = &place.phone {
                lines.push(field("    Teléfono", phone));
            }
            if let Some(web) = &place.website {
                lines.push(field("    Web", web));
            }
            if let Some(link) = links::place_map_link(place) {
                lines.push(field("    Mapa", &link));
            }
        }
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from("No places of interest."));
    }

    let title = match &state.place_filter {
        Some(c) => format!(" Lugares [{}] ", place_category_label(c)),
        None => " Lugares ".to_string(),
    };
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(p, area);
}

fn draw_map_spots(f: &mut Frame, state: &mut AppState, area: Rect) {
    let spots = state.store.map_spots();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let items: Vec<ListItem> = spots
        .iter()
        .map(|s| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", s.date),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(s.activity.summary_line()),
            ]))
        })
        .collect();
    let title = format!(" Actividades en {} ", state.store.details().trip.city);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_stateful_widget(list, chunks[0], &mut state.spot_state);

    let mut lines = Vec::new();
    match state.spot_state.selected().and_then(|i| spots.get(i)) {
        Some(spot) => {
            lines.push(Line::from(Span::styled(
                spot.activity.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(field("Día", &spot.day_label));
            if let Some(c) = &spot.activity.coords {
                lines.push(field("Coordenadas", &format!("{:.4}, {:.4}", c.lat, c.lng)));
                lines.push(field("Mapa", &links::maps_search_coords(c.lat, c.lng)));
                lines.push(field(
                    "Uber",
                    &links::uber_dropoff(c, c.label.as_deref().unwrap_or(&spot.activity.title)),
                ));
            }
        }
        None => lines.push(Line::from(
            "No activity has coordinates yet. Add coords to an activity to see it here.",
        )),
    }
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Detalles "))
        .wrap(Wrap { trim: false });
    f.render_widget(p, chunks[1]);
}

fn draw_footer(f: &mut Frame, state: &AppState, footer_area: Rect) {
    let input_title = match state.mode {
        InputMode::Adding => Some((" Add Line (HH:MM – título (notas)) ", Color::Yellow)),
        InputMode::EditingLine => Some((" Edit Line ", Color::Magenta)),
        InputMode::EditingTime => Some((" Edit Time ", Color::Blue)),
        InputMode::EditingNotes => Some((" Edit Notes ", Color::Green)),
        InputMode::Normal | InputMode::ConfirmReset => None,
    };

    if let Some((title, color)) = input_title {
        let prefix = "> ";
        let input = Paragraph::new(Line::from(vec![
            Span::styled(prefix, Style::default().fg(color)),
            Span::raw(state.input_buffer.as_str()),
        ]))
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(input, footer_area);

        let cursor_x =
            footer_area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
        f.set_cursor_position((
            cursor_x.min(footer_area.x + footer_area.width.saturating_sub(2)),
            footer_area.y + 1,
        ));
        return;
    }

    let status_color = if state.mode == InputMode::ConfirmReset {
        Color::LightRed
    } else {
        Color::Cyan
    };
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_str = match (state.view, state.active_focus) {
        (View::Itinerary, Focus::Sidebar) => "?:Help q:Quit Tab:Activities a:Add f:Filter R:Reset",
        (View::Itinerary, Focus::Main) => {
            "?:Help q:Quit Tab:Days a:Add e:Edit t:Time n:Notes +/-:Cat d:Del"
        }
        (View::Places, _) => "?:Help q:Quit 1-4:Views j/k:Scroll f:Filter",
        _ => "?:Help q:Quit 1-4:Views j/k:Move",
    };
    let help = Paragraph::new(help_str).alignment(Alignment::Right).block(
        Block::default()
            .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
            .title(" Actions "),
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(footer_area);
    f.render_widget(status, chunks[0]);
    f.render_widget(help, chunks[1]);
}

fn draw_help(f: &mut Frame, tab: HelpTab) {
    let area = centered_rect(70, 70, f.area());
    let mut lines = Vec::new();
    for section in get_help(tab) {
        lines.push(heading(&section.title));
        for item in section.items {
            let mut spans = vec![
                Span::styled(
                    format!("  {:<16}", item.keys),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(item.desc),
            ];
            if !item.example.is_empty() {
                spans.push(Span::styled(
                    format!("  e.g. {}", item.example),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Tab: switch page · any other key: close",
        Style::default().fg(Color::DarkGray),
    )));

    let title = match tab {
        HelpTab::Keyboard => " Help: Keys ",
        HelpTab::LineSyntax => " Help: Line Syntax ",
    };
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
