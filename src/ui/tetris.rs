use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::{overlay, palette};
use crate::config::{CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};
use crate::tetris::{Cell, Game};

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Wall(char),
    Empty,
    Ghost,
    Block(Color),
}

pub fn draw_tetris(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("TETRIS"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("TETRIS")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(PLAY_H as u16),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(col_rect);

    // Widen info/controls boxes slightly while keeping them centered in the cabinet.
    let expand = 4u16;
    let max_right = cabinet_inner.x + cabinet_inner.width;
    let widen = |mut rect: Rect| {
        let new_x = rect.x.saturating_sub(expand);
        let mut new_w = rect.width.saturating_add(expand * 2);
        if new_x + new_w > max_right {
            new_w = max_right.saturating_sub(new_x);
        }
        rect.x = new_x;
        rect.width = new_w;
        rect
    };

    draw_info(frame, game, widen(stack[1]));
    draw_playfield(frame, game, stack[2]);
    draw_controls(frame, widen(stack[3]));
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let grid = game.grid();
    let inner_w = grid.width();
    let inner_h = grid.height();
    let mut well = vec![vec![Glyph::Empty; inner_w + 2]; inner_h + 2];

    // Border: top/ceiling, sides, heavy floor.
    for x in 1..=inner_w {
        well[0][x] = Glyph::Wall('─');
        well[inner_h + 1][x] = Glyph::Wall('═');
    }
    for row in well.iter_mut().take(inner_h + 1).skip(1) {
        row[0] = Glyph::Wall('│');
        row[inner_w + 1] = Glyph::Wall('│');
    }
    well[0][0] = Glyph::Wall('┌');
    well[0][inner_w + 1] = Glyph::Wall('┐');
    well[inner_h + 1][0] = Glyph::Wall('└');
    well[inner_h + 1][inner_w + 1] = Glyph::Wall('┘');

    for y in 0..inner_h {
        for x in 0..inner_w {
            if let Some(Cell::Filled(color)) = grid.get(x, y) {
                well[y + 1][x + 1] = Glyph::Block(palette(color));
            }
        }
    }

    let mut plot = |x: i32, y: i32, glyph: Glyph| {
        if x >= 0 && y >= 0 && (x as usize) < inner_w && (y as usize) < inner_h {
            well[y as usize + 1][x as usize + 1] = glyph;
        }
    };

    if !game.is_over() {
        for (x, y) in game.ghost().cells() {
            plot(x, y, Glyph::Ghost);
        }
        let color = palette(game.current().color);
        for (x, y) in game.current().cells() {
            plot(x, y, Glyph::Block(color));
        }
    }

    let lines: Vec<Line> = well.iter().map(|row| render_row(row)).collect();
    frame.render_widget(Paragraph::new(lines), play_rect);

    if game.is_over() {
        overlay(frame, play_rect, "GAME OVER\nPress q");
    }
}

fn render_row(row: &[Glyph]) -> Line<'static> {
    let spans: Vec<Span> = row
        .iter()
        .map(|glyph| match *glyph {
            Glyph::Wall(ch) => {
                // Horizontal walls span the cell width; corners and sides do not.
                let width = if matches!(ch, '─' | '═') { CELL_W } else { 1 };
                Span::raw(ch.to_string().repeat(width))
            }
            Glyph::Empty => Span::raw(" ".repeat(CELL_W)),
            Glyph::Ghost => Span::styled("·".repeat(CELL_W), Style::default().fg(Color::DarkGray)),
            Glyph::Block(color) => Span::styled("█".repeat(CELL_W), Style::default().fg(color)),
        })
        .collect();
    Line::from(spans)
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let status = if game.is_over() { "OVER" } else { "PLAYING" };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "SCORE:", game.score())),
        Line::raw(format!("{:<7} {}", "HIGH:", game.high_score())),
        Line::raw(format!("{:<7} {}", "STATUS:", status)),
    ]);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "LINES:", game.lines_cleared())),
        Line::raw(format!("{:<7} {}", "PIECES:", game.pieces_placed())),
    ]);
    frame.render_widget(right, cols[1]);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("←/→ move"),
        Line::raw("↓ soft"),
        Line::raw("q/esc quit"),
    ]);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![Line::raw("↑ rotate"), Line::raw("space slam")]);
    frame.render_widget(right, cols[1]);
}
