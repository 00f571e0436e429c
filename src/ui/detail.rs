//! Detail overlay rendering
//!
//! Centered modal showing the full fields of a picture, rover photo, or
//! saved favorite. The payload is JSON from whichever source produced it,
//! so each line falls back across the fields the shapes share.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

use super::centered_rect;
use super::favorites::card_meta;

/// Overlay width in terminal cells
const OVERLAY_WIDTH: u16 = 64;

/// Overlay height in terminal cells
const OVERLAY_HEIGHT: u16 = 18;

/// Renders the detail overlay on top of the current view
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `item` - The JSON payload of the opened item
pub fn render(frame: &mut Frame, item: &Value) {
    let area = frame.area();
    let overlay_area = centered_rect(OVERLAY_WIDTH, OVERLAY_HEIGHT, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let mut lines = vec![Line::from(Span::styled(
        heading(item),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(meta) = card_meta(item) {
        lines.push(Line::from(Span::styled(
            meta,
            Style::default().fg(Color::Gray),
        )));
    }

    if let Some(body) = body_text(item) {
        lines.push(Line::from(""));
        lines.push(Line::from(body.to_string()));
    }

    if let Some(link) = media_url(item) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            link.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, overlay_area);
}

/// Returns a non-empty string field of the item, if present.
fn field<'a>(item: &'a Value, pointer: &str) -> Option<&'a str> {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Overlay heading: the item's title, else its id.
fn heading(item: &Value) -> String {
    if let Some(title) = field(item, "/title") {
        return title.to_string();
    }
    match item.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "Details".to_string(),
    }
}

/// Overlay body: the explanation, else the camera's full name.
fn body_text(item: &Value) -> Option<&str> {
    field(item, "/explanation").or_else(|| field(item, "/camera/full_name"))
}

/// Media link shown at the bottom, best variant first.
fn media_url(item: &Value) -> Option<&str> {
    field(item, "/hdurl")
        .or_else(|| field(item, "/img_src"))
        .or_else(|| field(item, "/url"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;

    fn render_to_string(item: &Value) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, item)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_apod_payload_shows_title_and_explanation() {
        let item = json!({
            "title": "Veil Nebula",
            "date": "2024-07-15",
            "explanation": "Supernova shockwaves paint the sky.",
            "url": "https://apod.nasa.gov/veil.jpg"
        });

        let content = render_to_string(&item);

        assert!(content.contains("Veil Nebula"));
        assert!(content.contains("2024-07-15"));
        assert!(content.contains("Supernova shockwaves"));
    }

    #[test]
    fn test_photo_payload_falls_back_to_id_and_camera() {
        let item = json!({
            "id": 424905,
            "earth_date": "2015-05-30",
            "camera": {"full_name": "Front Hazard Avoidance Camera"},
            "img_src": "https://mars.jpl.nasa.gov/424905.jpg"
        });

        let content = render_to_string(&item);

        assert!(content.contains("424905"));
        assert!(content.contains("2015-05-30"));
        assert!(content.contains("Front Hazard Avoidance Camera"));
    }

    #[test]
    fn test_media_url_prefers_hd_then_img_src_then_url() {
        let hd = json!({"hdurl": "hd.jpg", "img_src": "img.jpg", "url": "plain.jpg"});
        assert_eq!(media_url(&hd), Some("hd.jpg"));

        let img = json!({"img_src": "img.jpg", "url": "plain.jpg"});
        assert_eq!(media_url(&img), Some("img.jpg"));

        let plain = json!({"url": "plain.jpg"});
        assert_eq!(media_url(&plain), Some("plain.jpg"));

        assert_eq!(media_url(&json!({})), None);
    }

    #[test]
    fn test_heading_falls_back_to_details() {
        assert_eq!(heading(&json!({})), "Details");
    }

    #[test]
    fn test_close_hint_is_rendered() {
        let content = render_to_string(&json!({"title": "X"}));
        assert!(content.contains("Press Esc to close"));
    }
}
