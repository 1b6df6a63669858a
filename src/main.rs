use std::env;
use std::error::Error;
use std::process::ExitCode;

use juegos::app::{self, GameKind};
use juegos::config::AppConfig;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let arg = env::args().nth(1).unwrap_or_else(|| "tetris".to_string());
    let Some(kind) = GameKind::from_arg(&arg) else {
        eprintln!("usage: juegos [tetris|damas]");
        return Ok(ExitCode::from(2));
    };

    let config = AppConfig::from_env();
    app::run(kind, &config)?;
    Ok(ExitCode::SUCCESS)
}
