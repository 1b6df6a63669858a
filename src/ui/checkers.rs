use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::overlay;
use crate::checkers::{Game, Side, Square};
use crate::config::{CHECKERS_PLAY_H, CHECKERS_PLAY_W, CHECKERS_SIZE, SQUARE_W};

pub fn draw_checkers(frame: &mut Frame, game: &Game, cursor: Square) {
    let area = frame.size();

    let cabinet = Block::default()
        .title("DAMAS")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(CHECKERS_PLAY_W as u16 + 2),
            Constraint::Length(24),
        ])
        .split(cabinet_inner);

    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(CHECKERS_PLAY_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(CHECKERS_PLAY_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);

    draw_board(frame, game, cursor, h_center[1]);
    draw_sidebar(frame, game, cols[1]);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Dark => Color::Red,
        Side::Light => Color::White,
    }
}

fn draw_board(frame: &mut Frame, game: &Game, cursor: Square, rect: Rect) {
    let board = game.board();
    let moves = game.current_move_set();
    let selected = game
        .selected()
        .and_then(|id| board.piece(id))
        .map(|p| p.square());

    let edge = "─".repeat(CHECKERS_SIZE * SQUARE_W);
    let mut lines = vec![Line::raw(format!("┌{edge}┐"))];

    for row in 0..CHECKERS_SIZE {
        let mut top = vec![Span::raw("│")];
        let mut bottom = vec![Span::raw("│")];
        for col in 0..CHECKERS_SIZE {
            let square = (row, col);
            let dark_square = (row + col) % 2 == 1;
            let bg = if square == cursor {
                Color::Yellow
            } else if Some(square) == selected {
                Color::LightBlue
            } else if dark_square {
                Color::DarkGray
            } else {
                Color::Black
            };
            let base = Style::default().bg(bg);

            let (glyph, style) = match board.piece_at(row, col) {
                Some(piece) => {
                    let mark = if piece.king { " K  " } else { " ●  " };
                    (mark, base.fg(side_color(piece.side)).add_modifier(Modifier::BOLD))
                }
                None if moves.contains_key(&square) => (" ·  ", base.fg(Color::Blue)),
                None => ("    ", base),
            };
            top.push(Span::styled(glyph, style));
            bottom.push(Span::styled(" ".repeat(SQUARE_W), base));
        }
        top.push(Span::raw("│"));
        bottom.push(Span::raw("│"));
        lines.push(Line::from(top));
        lines.push(Line::from(bottom));
    }
    lines.push(Line::raw(format!("└{edge}┘")));

    frame.render_widget(Paragraph::new(lines), rect);

    if let Some(side) = game.winner() {
        overlay(frame, rect, &format!("{} WINS\nPress q", side_name(side)));
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Dark => "RED",
        Side::Light => "WHITE",
    }
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(1), Constraint::Length(7)])
        .split(area);

    let board = game.board();
    let status = match game.winner() {
        Some(side) => format!("{} WINS", side_name(side)),
        None => format!("{} TO MOVE", side_name(game.turn())),
    };
    let info = Paragraph::new(vec![
        Line::raw(status),
        Line::raw(""),
        Line::raw(format!(
            "RED    {:>2} ({} K)",
            board.remaining(Side::Dark),
            board.kings(Side::Dark)
        )),
        Line::raw(format!(
            "WHITE  {:>2} ({} K)",
            board.remaining(Side::Light),
            board.kings(Side::Light)
        )),
        Line::raw(""),
        Line::raw(format!("MOVES  {}", game.current_move_set().len())),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL));
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new(vec![
        Line::raw("arrows cursor"),
        Line::raw("enter select/move"),
        Line::raw("esc drop selection"),
        Line::raw("q quit"),
    ])
    .block(Block::default().title("CONTROLS").borders(Borders::ALL));
    frame.render_widget(controls, chunks[2]);
}
