use std::{thread::sleep, time::{Duration, Instant}};

use crate::Coords;
use crate::input::{next_direction, KeyInput, MacroquadKeys};
use crate::render::{Canvas, MacroquadCanvas, Renderer};
use crate::snake::{Direction, MoveResult, Snake};
use crate::treat::spawn_treat;

use log::{debug, info};
use macroquad::input::prevent_quit;
use macroquad::window::next_frame;
use rand::{rngs::ThreadRng, Rng};

/// Frames per second. One snake step happens per frame.
const TARGET_FPS: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub treat: Coords,
    pub score: u32,
}

impl Default for GameState {
    /// The starting state, with the treat not yet placed.
    fn default() -> Self {
        GameState { snake: Snake::new(), direction: Direction::North, treat: (0, 0), score: 0 }
    }
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut state = GameState::default();
        state.spawn_treat(rng);
        state
    }

    pub fn spawn_treat<R: Rng>(&mut self, rng: &mut R) {
        self.treat = spawn_treat(self.snake.body(), rng);
        debug!("Treat placed at {:?}", self.treat);
    }

    pub fn update_direction(&mut self, keys: &impl KeyInput) {
        let direction = next_direction(self.direction, keys);
        if direction != self.direction {
            debug!("Heading {:?} ({})", direction, direction.index());
            self.direction = direction;
        }
    }

    /// Advances the game by one tick.
    pub fn update_snake<R: Rng>(&mut self, rng: &mut R) {
        let treat_found = self.snake.head() == self.treat;
        if treat_found {
            self.score += 1;
            debug!("Treat eaten, score {} at length {}", self.score, self.snake.len() + 1);
        }

        match self.snake.advance(self.direction) {
            MoveResult::Collided => {
                info!("Snake ran into itself, resetting (score was {})", self.score);
                self.direction = Direction::North;
                self.score = 0;
            }
            MoveResult::Moved { old_tail } => {
                if treat_found {
                    self.snake.grow(old_tail);
                    self.spawn_treat(rng);
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LoopState {
    Running,
    Terminated,
}

/// Sleeps away whatever is left of each frame.
pub struct FramePacer {
    frame_time: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        FramePacer { frame_time: Duration::from_secs(1) / fps.max(1), frame_start: Instant::now() }
    }

    pub fn remaining(&self) -> Duration {
        self.frame_time.saturating_sub(self.frame_start.elapsed())
    }

    pub fn wait(&mut self) {
        sleep(self.remaining());
        self.frame_start = Instant::now();
    }
}

pub struct SnakeGame {
    state: GameState,
    renderer: Renderer,
    pacer: FramePacer,
    rng: ThreadRng,
    loop_state: LoopState,
}

impl SnakeGame {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let state = GameState::new(&mut rng);

        SnakeGame {
            state,
            renderer: Renderer::new(),
            pacer: FramePacer::new(TARGET_FPS),
            rng,
            loop_state: LoopState::Running,
        }
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Runs until the window is closed.
    pub async fn play(&mut self) {
        // Closing is handled as a loop state instead of killing the process
        prevent_quit();

        let keys = MacroquadKeys;
        let mut canvas = MacroquadCanvas;

        while self.loop_state == LoopState::Running {
            self.frame(&keys, &mut canvas);
            self.pacer.wait();
            next_frame().await;
        }
    }

    fn frame(&mut self, keys: &impl KeyInput, canvas: &mut impl Canvas) {
        if keys.close_requested() {
            self.loop_state = LoopState::Terminated;
            return;
        }

        self.state.update_direction(keys);
        self.state.update_snake(&mut self.rng);
        self.renderer.draw_frame(canvas, &self.state);
    }
}
