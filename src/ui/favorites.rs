//! Favorites list rendering
//!
//! Renders saved items from any section as a selectable list. Payload shapes
//! differ per source, so the card title and date line are derived from
//! whichever fields the saved JSON carries.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::Value;

use crate::app::App;

/// Maximum characters of a card title before truncation
const CARD_TITLE_MAX: usize = 48;

/// Renders the favorites screen
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the favorite store
/// * `area` - The content area below the tab bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Favorites ({}) ", app.favorites.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.favorites.is_empty() {
        let paragraph =
            Paragraph::new("No favorites saved.").style(Style::default().fg(Color::Gray));
        frame.render_widget(paragraph, inner);
        return;
    }

    // Window the list so the selected favorite stays visible
    let visible = inner.height as usize;
    let start = if visible == 0 {
        0
    } else {
        app.favorite_index.saturating_sub(visible - 1)
    };

    let items = app.favorites.items();
    let mut lines: Vec<Line> = Vec::with_capacity(visible);
    for (index, item) in items.iter().enumerate().skip(start).take(visible) {
        lines.push(favorite_line(item, index == app.favorite_index));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Builds a single favorite row with cursor, title, and date line
fn favorite_line(item: &Value, is_selected: bool) -> Line<'static> {
    let cursor = if is_selected { "\u{25B8} " } else { "  " };
    let cursor_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let title_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(cursor.to_string(), cursor_style),
        Span::styled(format!("{:<50}", card_title(item)), title_style),
    ];

    if let Some(meta) = card_meta(item) {
        spans.push(Span::styled(meta, Style::default().fg(Color::DarkGray)));
    }

    Line::from(spans)
}

/// Returns a non-empty string field of the item, if present.
fn field<'a>(item: &'a Value, pointer: &str) -> Option<&'a str> {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Card title: the item's title, else the camera's full name, else its id.
pub(crate) fn card_title(item: &Value) -> String {
    if let Some(title) = field(item, "/title") {
        return title.chars().take(CARD_TITLE_MAX).collect();
    }
    if let Some(name) = field(item, "/camera/full_name") {
        return name.to_string();
    }
    match item.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "Unknown item".to_string(),
    }
}

/// Card date line: the item's date, else its Earth date.
pub(crate) fn card_meta(item: &Value) -> Option<String> {
    field(item, "/date")
        .or_else(|| field(item, "/earth_date"))
        .map(str::to_string)
}
