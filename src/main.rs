mod game;
mod input;
mod render;
mod snake;
mod treat;

use anyhow::Context;
use log::{info, LevelFilter};
use macroquad::window::Conf;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub type GridInt = i32;
pub type Coords = (GridInt, GridInt);

pub const SCREEN_WIDTH: i32 = 1060;
pub const SCREEN_HEIGHT: i32 = 1150;
/// Cells along each side of the square grid.
pub const GRID_SIZE: GridInt = 20;
pub const CELL_SIZE: GridInt = 50;
/// Distance of the grid from the window's left and top edges, in px.
pub const X_OFFSET: GridInt = 10;
pub const Y_OFFSET: GridInt = 100;
pub const START_POS: Coords = (GRID_SIZE / 2, GRID_SIZE / 2);

fn init_logging() -> anyhow::Result<()> {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = init_logging() {
        eprintln!("{:#}", err);
    }

    info!("Starting Snake");

    let mut game = game::SnakeGame::new();
    game.play().await;

    info!("Window closed, final score {}", game.score());
}
