use std::error::Error;
use std::fs::File;
use std::io::{stdout, Stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::checkers;
use crate::config::{AppConfig, CHECKERS_SIZE, FRAME_MS};
use crate::io::HighScoreStore;
use crate::tetris::{self, RandomShapes};
use crate::ui::{draw_checkers, draw_tetris};

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKind {
    Tetris,
    Checkers,
}

impl GameKind {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "tetris" => Some(GameKind::Tetris),
            "damas" | "checkers" => Some(GameKind::Checkers),
            _ => None,
        }
    }
}

pub fn run(kind: GameKind, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    init_logging(config);
    info!(?kind, "starting");

    match kind {
        GameKind::Tetris => run_tetris(config),
        GameKind::Checkers => {
            let mut tui = TuiGuard::new()?;
            checkers_loop(tui.terminal_mut(), config)
        }
    }
}

/// Log to a file; the terminal is owned by the UI. Without a file there is no logging.
fn init_logging(config: &AppConfig) {
    let Ok(file) = File::create(&config.log_path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_tetris(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let mut keeper = ScoreKeeper::load(HighScoreStore::new(&config.high_score_path));

    let mut game = tetris::Game::new(Box::new(RandomShapes::new()))
        .with_high_score(keeper.previous)
        .with_placement_bonus(config.placement_bonus);

    let result = {
        let mut tui = TuiGuard::new()?;
        tetris_loop(tui.terminal_mut(), &mut game, &mut keeper, config)
    };

    keeper.save(&game);
    info!(
        score = game.score(),
        best = game.best_score(),
        lines = game.lines_cleared(),
        "tetris finished"
    );
    result
}

/// Saves the high score once: when the game ends, or on quit if it never did.
struct ScoreKeeper {
    store: HighScoreStore,
    previous: u64,
    saved: bool,
}

impl ScoreKeeper {
    fn load(store: HighScoreStore) -> Self {
        let previous = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not read high score, starting from 0");
            0
        });
        Self {
            store,
            previous,
            saved: false,
        }
    }

    fn save_if_over(&mut self, game: &tetris::Game) {
        if game.is_over() {
            self.save(game);
        }
    }

    fn save(&mut self, game: &tetris::Game) {
        if self.saved {
            return;
        }
        self.saved = true;
        if let Err(e) = self.store.save(game.score(), self.previous) {
            warn!(error = %e, path = %self.store.path().display(), "could not save high score");
        }
    }
}

fn tetris_loop(
    terminal: &mut Term,
    game: &mut tetris::Game,
    keeper: &mut ScoreKeeper,
    config: &AppConfig,
) -> Result<(), Box<dyn Error>> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_tetris(frame, game))?;

        if event::poll(Duration::from_millis(FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                    handle_tetris_input(key.code, game);
                }
            }
        }

        if last_tick.elapsed() >= config.gravity {
            game.tick();
            last_tick = Instant::now();
        }
        keeper.save_if_over(game);
    }
    Ok(())
}

fn handle_tetris_input(code: KeyCode, game: &mut tetris::Game) {
    match code {
        KeyCode::Left => {
            let _ = game.move_current(-1, 0);
        }
        KeyCode::Right => {
            let _ = game.move_current(1, 0);
        }
        KeyCode::Down => {
            let _ = game.move_current(0, 1);
        }
        KeyCode::Up => {
            let _ = game.rotate_current();
        }
        KeyCode::Char(' ') => {
            game.hard_drop();
        }
        _ => {}
    }
}

fn checkers_loop(terminal: &mut Term, config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let rules = checkers::Rules {
        forced_capture: config.forced_capture,
    };
    let mut game = checkers::Game::new(rules);
    let mut cursor = (CHECKERS_SIZE - 1, 0);

    loop {
        terminal.draw(|frame| draw_checkers(frame, &game, cursor))?;

        if !event::poll(Duration::from_millis(FRAME_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if matches!(key.code, KeyCode::Char('q')) {
            break;
        }
        // Once someone has won only quitting is accepted.
        if game.winner().is_some() {
            continue;
        }
        cursor = handle_checkers_input(key.code, &mut game, cursor);
    }

    if let Some(side) = game.winner() {
        info!(winner = ?side, "checkers finished");
    }
    Ok(())
}

fn handle_checkers_input(code: KeyCode, game: &mut checkers::Game, cursor: (usize, usize)) -> (usize, usize) {
    let (row, col) = cursor;
    let last = CHECKERS_SIZE - 1;
    match code {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let _ = game.select_or_move(row, col);
            cursor
        }
        KeyCode::Esc => {
            game.deselect();
            cursor
        }
        _ => cursor,
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
