//! Mars rover photo gallery rendering
//!
//! Renders the rover and sol query controls and the photo list for the
//! current query, with the loading, error, and empty states for the fetch.
//! The list keeps the selected photo in view by windowing around it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::MarsPhoto;

/// Renders the Mars rover photo screen
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the photo fetch state
/// * `area` - The content area below the tab bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Mars Rover Photos ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Query controls
            Constraint::Min(1),    // Photo list
        ])
        .split(inner);

    render_query_bar(frame, app, chunks[0]);
    render_photo_list(frame, app, chunks[1]);
}

/// Renders the rover and sol query controls
fn render_query_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Rover: ", Style::default().fg(Color::Gray)),
        Span::styled(
            app.rover.display_name(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (c to change)", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled("Sol: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}_", app.sol_input),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("  (max {})", app.rover.max_sol()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(photos) = &app.mars.data {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} photos", photos.len()),
            Style::default().fg(Color::Gray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the photo list, or the loading/error/empty state
fn render_photo_list(frame: &mut Frame, app: &App, area: Rect) {
    if app.mars.loading {
        let paragraph = Paragraph::new("Loading…").style(Style::default().fg(Color::Cyan));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(message) = &app.mars.error {
        let paragraph = Paragraph::new(message.clone()).style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(photos) = &app.mars.data else {
        return;
    };

    if photos.is_empty() {
        let paragraph = Paragraph::new("No photos found").style(Style::default().fg(Color::Gray));
        frame.render_widget(paragraph, area);
        return;
    }

    // Window the list so the selected photo stays visible
    let visible = area.height as usize;
    let start = if visible == 0 {
        0
    } else {
        app.photo_index.saturating_sub(visible - 1)
    };

    let mut lines: Vec<Line> = Vec::with_capacity(visible);
    for (index, photo) in photos.iter().enumerate().skip(start).take(visible) {
        lines.push(photo_line(app, photo, index == app.photo_index));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Builds a single photo row with cursor and favorite markers
fn photo_line<'a>(app: &App, photo: &'a MarsPhoto, is_selected: bool) -> Line<'a> {
    let cursor = if is_selected { "\u{25B8} " } else { "  " };
    let cursor_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let saved = serde_json::to_value(photo)
        .map(|value| app.favorites.contains(&value))
        .unwrap_or(false);
    let heart = if saved { "\u{2665} " } else { "  " };

    let id_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(cursor, cursor_style),
        Span::styled(heart, Style::default().fg(Color::Magenta)),
        Span::styled(format!("#{:<8}", photo.id), id_style),
        Span::styled(
            format!("{:<10}", photo.camera.name),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("{:<12}", photo.earth_date),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            photo.camera.full_name.as_str(),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
