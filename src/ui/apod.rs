//! Picture of the day screen rendering
//!
//! Renders the astronomy picture metadata for the selected date: the date
//! navigation bar, title, media link, and explanation text, along with the
//! loading and error states for the fetch.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Renders the picture of the day screen
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the picture fetch state
/// * `area` - The content area below the tab bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Picture of the Day ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Date navigation
            Constraint::Min(1),    // Picture metadata
        ])
        .split(inner);

    render_date_bar(frame, app, chunks[0]);
    render_picture(frame, app, chunks[1]);
}

/// Renders the date navigation bar with any date guard message
fn render_date_bar(frame: &mut Frame, app: &App, area: Rect) {
    let date_str = app.apod_date.format("%Y-%m-%d").to_string();

    let mut spans = vec![
        Span::styled("\u{25C2} ", Style::default().fg(Color::Yellow)),
        Span::styled(
            date_str,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{25B8}", Style::default().fg(Color::Yellow)),
        Span::styled("  (t for today)", Style::default().fg(Color::DarkGray)),
    ];

    if let Some(message) = &app.apod_date_error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the picture metadata, or the loading/error state
fn render_picture(frame: &mut Frame, app: &App, area: Rect) {
    if app.apod.loading {
        let paragraph = Paragraph::new("Loading…").style(Style::default().fg(Color::Cyan));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(message) = &app.apod.error {
        let paragraph = Paragraph::new(message.clone()).style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(apod) = &app.apod.data else {
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        apod.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(copyright) = &apod.copyright {
        lines.push(Line::from(Span::styled(
            format!("\u{00A9} {}", copyright.trim()),
            Style::default().fg(Color::Gray),
        )));
    }

    // Terminals can't show the picture itself, so link the best variant
    let media = if apod.media_type == "video" {
        format!("Video: {}", apod.url)
    } else {
        format!("Image: {}", apod.best_url())
    };
    lines.push(Line::from(Span::styled(
        media,
        Style::default().fg(Color::DarkGray),
    )));

    let saved = serde_json::to_value(apod)
        .map(|value| app.favorites.contains(&value))
        .unwrap_or(false);
    if saved {
        lines.push(Line::from(Span::styled(
            "\u{2665} Saved to favorites",
            Style::default().fg(Color::Magenta),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(apod.explanation.clone()));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
