mod checkers;
mod tetris;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tetris::Color as PieceColor;

pub use checkers::draw_checkers;
pub use tetris::draw_tetris;

fn palette(color: PieceColor) -> Color {
    match color {
        PieceColor::Cyan => Color::Cyan,
        PieceColor::Yellow => Color::Yellow,
        PieceColor::Purple => Color::Magenta,
        PieceColor::Blue => Color::Blue,
        PieceColor::Orange => Color::Rgb(255, 165, 0),
        PieceColor::Green => Color::Green,
        PieceColor::Red => Color::Red,
    }
}

/// Small bordered message centered over `area`.
fn overlay(frame: &mut Frame, area: Rect, text: &str) {
    let overlay_w = area.width.saturating_sub(4).max(8);
    let overlay_h = 5u16;
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(overlay_w)) / 2,
        y: area.y + (area.height.saturating_sub(overlay_h)) / 2,
        width: overlay_w.min(area.width),
        height: overlay_h.min(area.height),
    };
    let widget = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, popup);
}
