//! Ratatui rendering
//!
//! Pure function of the app state: header tabs, list pane on the
//! left, form pane on the right, log pane at the bottom, stacked
//! banners above the main area and a centered confirm modal when a
//! destructive action is pending.

use crate::app::{App, Availability, FormSlot, Mode, SearchState, SearchTarget, Section};
use crate::forms::RowStatus;
use crate::notify::Kind;
use crate::view::{self, ListView};
use ratatui::{prelude::*, widgets::*};
use tui_input::Input;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub fn ui(f: &mut Frame, app: &App) {
    let notice_rows = app.notices.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header tabs
            Constraint::Length(notice_rows), // Banners
            Constraint::Min(1),              // Main content
            Constraint::Length(8),           // Logs
            Constraint::Length(1),           // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_notices(f, chunks[1], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_list(f, main_chunks[0], app);
    render_form(f, main_chunks[1], app);
    render_logs(f, chunks[3], app);
    render_help(f, chunks[4], app);

    if let Some(action) = &app.confirm {
        render_confirm(f, action.prompt());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" Frontdesk ")];
    for (i, section) in Section::ALL.iter().enumerate() {
        spans.push(Span::raw(" | "));
        let label = format!("{}:{}", i + 1, section.title());
        if *section == app.section {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(label));
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_notices(f: &mut Frame, area: Rect, app: &App) {
    if app.notices.is_empty() {
        return;
    }
    let lines: Vec<Line> = app
        .notices
        .visible()
        .map(|notice| {
            let style = match notice.kind {
                Kind::Success => Style::default().fg(Color::Green),
                Kind::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(format!(" {} ", notice.message), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let (title, projected) = match app.section {
        Section::Guests => (" Guests ", view::guests_view(&app.guests)),
        Section::Rooms => (" Rooms ", view::rooms_view(&app.rooms)),
        Section::Bookings => (" Bookings ", view::bookings_view(&app.bookings)),
        Section::Prices => (" Prices ", view::prices_view(&app.prices)),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    match projected {
        ListView::Placeholder(text) => {
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(paragraph, area);
        }
        ListView::Cards(cards) => {
            let items: Vec<ListItem> = cards
                .iter()
                .map(|card| {
                    let style = if card.cancelled {
                        Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
                    } else {
                        Style::default()
                    };
                    let mut lines = vec![Line::from(Span::styled(
                        card.title.clone(),
                        style.add_modifier(Modifier::BOLD),
                    ))];
                    for line in &card.lines {
                        lines.push(Line::from(Span::styled(format!("  {line}"), style)));
                    }
                    lines.push(Line::from(""));
                    ListItem::new(lines)
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_symbol("> ")
                .highlight_style(Style::default().add_modifier(Modifier::BOLD));

            let mut state = ListState::default();
            if app.mode == Mode::Normal {
                state.select(Some(app.cursor));
            }
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}

/// Builds the form pane line by line, tracking where the terminal
/// cursor belongs when a text slot has focus
struct FormPane<'a> {
    lines: Vec<Line<'a>>,
    cursor: Option<(u16, u16)>,
    focused: Option<FormSlot>,
}

impl FormPane<'_> {
    fn new(app: &App) -> Self {
        Self {
            lines: Vec::new(),
            cursor: None,
            focused: (app.mode == Mode::Form).then(|| app.focused_slot()),
        }
    }

    fn is_focused(&self, slot: FormSlot) -> bool {
        self.focused == Some(slot)
    }

    fn style_for(&self, slot: FormSlot) -> Style {
        if self.is_focused(slot) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    }

    fn text(&mut self, slot: FormSlot, label: &str, input: &Input) {
        let marker = if self.is_focused(slot) { "> " } else { "  " };
        let prefix = format!("{marker}{label}: ");
        if self.is_focused(slot) {
            self.cursor = Some((
                (prefix.len() + input.visual_cursor()) as u16,
                self.lines.len() as u16,
            ));
        }
        self.lines.push(Line::from(vec![
            Span::styled(prefix, self.style_for(slot)),
            Span::raw(input.value().to_string()),
        ]));
    }

    fn action(&mut self, slot: FormSlot, label: &str) {
        let marker = if self.is_focused(slot) { "> " } else { "  " };
        self.lines.push(Line::from(Span::styled(
            format!("{marker}[ {label} ]"),
            self.style_for(slot).add_modifier(Modifier::BOLD),
        )));
    }

    fn checkbox(&mut self, slot: FormSlot, label: &str, checked: bool) {
        let marker = if self.is_focused(slot) { "> " } else { "  " };
        let mark = if checked { "x" } else { " " };
        self.lines.push(Line::from(Span::styled(
            format!("{marker}[{mark}] {label}"),
            self.style_for(slot),
        )));
    }

    fn choice(&mut self, slot: FormSlot, label: &str, value: &str) {
        let marker = if self.is_focused(slot) { "> " } else { "  " };
        self.lines.push(Line::from(Span::styled(
            format!("{marker}{label}: < {value} >"),
            self.style_for(slot),
        )));
    }

    fn info(&mut self, text: String, color: Color) {
        self.lines
            .push(Line::from(Span::styled(format!("  {text}"), Style::default().fg(color))));
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let mut pane = FormPane::new(app);

    match app.section {
        Section::Guests => build_guest_form(&mut pane, app),
        Section::Rooms => build_room_form(&mut pane, app),
        Section::Bookings => build_booking_form(&mut pane, app),
        Section::Prices => build_price_form(&mut pane, app),
    }

    let title = match app.mode {
        Mode::Form => " Form (editing) ",
        Mode::Normal => " Form ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.mode == Mode::Form {
            Color::Yellow
        } else {
            Color::White
        }));

    let cursor = pane.cursor;
    f.render_widget(Paragraph::new(pane.lines).block(block), area);

    if let Some((x, y)) = cursor {
        // Offset past the block border
        if y + 1 < area.height.saturating_sub(1) {
            f.set_cursor_position((area.x + 1 + x, area.y + 1 + y));
        }
    }
}

fn search_lines(pane: &mut FormPane, state: &SearchState) {
    match state {
        SearchState::Idle => {}
        SearchState::Pending => pane.info("Searching...".into(), Color::Gray),
        SearchState::Found(guest) => {
            pane.info(format!("Found: {} ({})", guest.name, guest.phone), Color::Green)
        }
        SearchState::NotFound => pane.info("No guest found".into(), Color::Red),
    }
}

fn build_guest_form(pane: &mut FormPane, app: &App) {
    pane.text(
        FormSlot::GuestSearch,
        "Search phone",
        &app.guest_form.search_phone.input,
    );
    search_lines(pane, &app.searches[SearchTarget::GuestsPanel as usize]);
    pane.blank();
    pane.text(FormSlot::GuestName, "Name", &app.guest_form.name.input);
    pane.text(FormSlot::GuestPhone, "Phone", &app.guest_form.phone.input);
    pane.text(FormSlot::GuestEmail, "Email", &app.guest_form.email.input);
    pane.text(
        FormSlot::GuestPassportSeries,
        "Passport series",
        &app.guest_form.passport_series.input,
    );
    pane.text(
        FormSlot::GuestPassportNumber,
        "Passport number",
        &app.guest_form.passport_number.input,
    );
    pane.blank();
    pane.action(FormSlot::GuestSubmit, "Add guest");
}

fn build_room_form(pane: &mut FormPane, app: &App) {
    pane.text(
        FormSlot::RoomNumber,
        "Room number",
        &app.room_form.room_number.input,
    );
    pane.text(FormSlot::RoomCategory, "Category", &app.room_form.category.input);
    pane.text(FormSlot::RoomCapacity, "Capacity", &app.room_form.capacity.input);
    pane.checkbox(FormSlot::RoomChildBed, "Child bed", app.room_form.has_child_bed);
    pane.blank();
    pane.action(FormSlot::RoomSubmit, "Add room");
}

fn build_booking_form(pane: &mut FormPane, app: &App) {
    pane.text(
        FormSlot::BookingSearch,
        "Guest phone",
        &app.booking_form.search_phone.input,
    );
    search_lines(pane, &app.searches[SearchTarget::BookingPanel as usize]);
    pane.action(FormSlot::BookingSetMainGuest, "Set as main guest");
    match &app.draft.main_guest {
        Some((_, name)) => pane.info(format!("Main guest: {name}"), Color::Green),
        None => pane.info("Main guest: -".into(), Color::Gray),
    }
    pane.blank();

    pane.text(
        FormSlot::BookingCheckIn,
        "Check-in",
        &app.booking_form.check_in.input,
    );
    pane.text(
        FormSlot::BookingCheckOut,
        "Check-out",
        &app.booking_form.check_out.input,
    );
    pane.action(FormSlot::BookingAvailability, "Check availability");

    match view::availability_view(&app.availability) {
        ListView::Placeholder(text) => pane.info(text, Color::Gray),
        ListView::Cards(_) => {
            if let Availability::Loaded(rooms) = &app.availability {
                let current = rooms
                    .get(app.availability_cursor)
                    .map(|r| format!("{} ({})", r.room_number, r.category))
                    .unwrap_or_else(|| "-".into());
                pane.choice(FormSlot::BookingRoomPick, "Free room", &current);
                pane.info(
                    format!("{} free, Enter picks the shown one", rooms.len()),
                    Color::Gray,
                );
            }
        }
    }
    match &app.draft.room {
        Some((_, number)) => pane.info(format!("Selected room: {number}"), Color::Green),
        None => pane.info("Selected room: -".into(), Color::Gray),
    }
    pane.blank();

    pane.action(FormSlot::BookingAddRow, "Add guest row");
    for (i, row) in app.booking_form.guest_rows.iter().enumerate() {
        pane.text(FormSlot::BookingRow(i), "Additional phone", &row.phone.input);
        match &row.status {
            RowStatus::Unchecked => {}
            RowStatus::Pending => pane.info("checking...".into(), Color::Gray),
            RowStatus::Found { name, .. } => pane.info(format!("ok: {name}"), Color::Green),
            RowStatus::NotFound => pane.info("not found".into(), Color::Red),
        }
    }
    pane.blank();
    pane.action(FormSlot::BookingSubmit, "Create booking");
}

fn build_price_form(pane: &mut FormPane, app: &App) {
    let room_label = app
        .room_choices
        .get(app.price_form.room_idx)
        .map(|(_, label)| label.as_str())
        .unwrap_or("no rooms loaded");
    pane.choice(FormSlot::PriceRoom, "Room", room_label);
    pane.choice(FormSlot::PriceDay, "Day", app.price_form.day().as_str());
    pane.text(FormSlot::PriceAmount, "Price", &app.price_form.amount.input);
    pane.blank();
    pane.action(FormSlot::PriceSubmit, "Set price");
}

fn render_logs(f: &mut Frame, area: Rect, app: &App) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM)),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let text = if app.confirm.is_some() {
        "y/Enter confirm | n/Esc dismiss"
    } else {
        match app.mode {
            Mode::Normal => {
                "1-4 section | Tab next | r reload | Up/Down select | d delete/cancel | e edit form | q quit"
            }
            Mode::Form => {
                "Tab/Up/Down focus | Enter act/submit | Left/Right cycle | Del remove row | Esc back"
            }
        }
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_confirm(f: &mut Frame, prompt: String) {
    let area = f.area();
    let width = (prompt.len() as u16 + 6).min(area.width);
    let height = 3;
    let modal = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, modal);
    let dialog = Paragraph::new(prompt)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(dialog, modal);
}
