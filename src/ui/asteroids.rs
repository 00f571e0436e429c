//! Near-Earth asteroid feed rendering
//!
//! Renders today's close approaches in fixed-width columns with the hazard
//! flag highlighted, plus the loading and error states for the feed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::NeoObject;

/// Maximum characters of an asteroid name shown in the table
const NAME_WIDTH: usize = 24;

/// Renders the asteroid feed screen
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the feed fetch state
/// * `area` - The content area below the tab bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Near-Earth Asteroids ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.neo.loading {
        let paragraph = Paragraph::new("Loading…").style(Style::default().fg(Color::Cyan));
        frame.render_widget(paragraph, inner);
        return;
    }

    if let Some(message) = &app.neo.error {
        let paragraph = Paragraph::new(message.clone()).style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, inner);
        return;
    }

    let Some(feed) = &app.neo.data else {
        return;
    };

    let Some((date, objects)) = feed.first_date() else {
        let paragraph =
            Paragraph::new("No asteroid data.").style(Style::default().fg(Color::Gray));
        frame.render_widget(paragraph, inner);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Asteroids for ", Style::default().fg(Color::Gray)),
            Span::styled(
                date.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{:<24} {:>10} {:>14} {:>14}  {}",
                "Name", "Diameter", "Distance", "Velocity", "Hazard"
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    // Leave room for the three header lines
    let visible = (inner.height as usize).saturating_sub(3);
    for object in objects.iter().take(visible) {
        lines.push(asteroid_line(object));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Builds a single asteroid row
fn asteroid_line(object: &NeoObject) -> Line<'static> {
    let name: String = object.name.chars().take(NAME_WIDTH).collect();
    let diameter = format!("{:.1} m", object.average_diameter_m());
    let distance = object
        .miss_distance_km()
        .map(|km| format!("{:.0} km", km))
        .unwrap_or_else(|| "--".to_string());
    let velocity = object
        .velocity_kmh()
        .map(|kmh| format!("{:.0} km/h", kmh))
        .unwrap_or_else(|| "--".to_string());

    let (hazard, hazard_style) = if object.is_potentially_hazardous_asteroid {
        ("Yes", Style::default().fg(Color::Red))
    } else {
        ("No", Style::default().fg(Color::Green))
    };

    Line::from(vec![
        Span::styled(
            format!("{:<24} ", name),
            Style::default().fg(Color::White),
        ),
        Span::styled(format!("{:>10} ", diameter), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:>14} ", distance),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{:>14}  ", velocity),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(hazard, hazard_style),
    ])
}
