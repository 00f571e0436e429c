//! UI rendering module for Stargaze
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod apod;
pub mod asteroids;
pub mod detail;
pub mod favorites;
pub mod help_overlay;
pub mod rovers;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Section};

/// Renders the full interface: tab bar, active section, key hints, and
/// whichever overlay is open on top.
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout with tab bar, section content, and key hints at bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab bar
            Constraint::Min(3),    // Section content
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_tab_bar(frame, app, chunks[0]);

    match app.section {
        Section::Apod => apod::render(frame, app, chunks[1]),
        Section::Rovers => rovers::render(frame, app, chunks[1]),
        Section::Asteroids => asteroids::render(frame, app, chunks[1]),
        Section::Favorites => favorites::render(frame, app, chunks[1]),
    }

    render_key_hints(frame, app, chunks[2]);

    // Overlays draw on top of the section content
    if let Some(item) = &app.detail {
        detail::render(frame, item);
    }
    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders the tab bar with the active section highlighted
fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "STARGAZE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (index, section) in Section::all().iter().enumerate() {
        let label = format!(" {} {} ", index + 1, section.title());
        let style = if *section == app.section {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let separator = "─".repeat(area.width as usize);
    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(separator, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the key hint line for the active section
fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    let mut hint = |key: &str, action: &str| {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}  ", action)));
    };

    match app.section {
        Section::Apod => {
            hint("←/→", "Date");
            hint("t", "Today");
            hint("f", "Save");
            hint("Enter", "Details");
        }
        Section::Rovers => {
            hint("0-9", "Sol");
            hint("c", "Rover");
            hint("↑/↓", "Photo");
            hint("f", "Save");
            hint("Enter", "Details");
        }
        Section::Asteroids => {
            hint("r", "Refresh");
        }
        Section::Favorites => {
            hint("↑/↓", "Navigate");
            hint("f", "Remove");
            hint("Enter", "Details");
        }
    }
    hint("Tab", "Sections");
    hint("?", "Help");
    hint("q", "Quit");

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Helper function to create a centered rect for overlays
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
