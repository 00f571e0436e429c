//! Help overlay showing all keybindings
//!
//! Renders a centered modal overlay with keyboard shortcuts.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

/// Renders the help overlay on top of the current view
pub fn render(frame: &mut Frame) {
    let area = frame.area();

    // Calculate centered overlay area
    let overlay_width = 54;
    let overlay_height = 24;
    let overlay_area = centered_rect(overlay_width, overlay_height, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    // Build help content
    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        help_line("Tab/Shift-Tab", "Next / previous section"),
        help_line("1-4", "Jump to section (outside Rovers)"),
        help_line("↑/k, ↓/j", "Move selection up/down"),
        help_line("Enter", "Open item details"),
        help_line("Esc", "Close overlay / Quit"),
        help_line("q", "Quit application"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Picture of the Day",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        help_line("←/→", "Previous / next date"),
        help_line("t", "Jump to today"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Mars Rovers",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        help_line("0-9", "Edit the sol query"),
        help_line("Backspace", "Delete a sol digit"),
        help_line("c", "Cycle rover"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Other",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        help_line("f", "Save / remove favorite"),
        help_line("r", "Refresh current section"),
        help_line("?", "Toggle this help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, overlay_area);
}

/// Creates a help line with key and description
fn help_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<15}", key), Style::default().fg(Color::Yellow)),
        Span::raw(description.to_string()),
    ])
}
