use crate::game::GameState;
use crate::{Coords, GridInt, CELL_SIZE, GRID_SIZE, X_OFFSET, Y_OFFSET};

use macroquad::color::{Color, WHITE};
use macroquad::shapes::draw_rectangle;
use macroquad::text::draw_text;
use macroquad::window::clear_background;

pub const BG_COLOR: Color = rgb(0x1A4314);
pub const GRID_COLOR: Color = rgb(0x2C5E1A);
pub const SNAKE_COLOR: Color = rgb(0xB2D2A4);
pub const TREAT_COLOR: Color = rgb(0x32CD30);
pub const SCORE_COLOR: Color = WHITE;

/// Pixel gap between neighbouring cells.
const CELL_GAP: GridInt = 2;

const SCORE_POS: (f32, f32) = (50.0, 50.0);
const SCORE_FONT_SIZE: f32 = 50.0;

const fn rgb(hex: u32) -> Color {
    Color {
        r: ((hex >> 16) & 0xFF) as f32 / 255.0,
        g: ((hex >> 8) & 0xFF) as f32 / 255.0,
        b: (hex & 0xFF) as f32 / 255.0,
        a: 1.0,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Pixel position of the top-left corner of grid cell `cell` along `axis`.
pub fn grid_to_pixel(cell: GridInt, axis: Axis) -> f32 {
    let offset = match axis {
        Axis::X => X_OFFSET,
        Axis::Y => Y_OFFSET,
    };
    (cell * CELL_SIZE + cell * CELL_GAP + offset) as f32
}

/// Drawing primitives of the window backend.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Draws `text` with its top-left corner at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

pub struct MacroquadCanvas;

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        // macroquad anchors text at the baseline
        draw_text(text, x, y + font_size, font_size, color);
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    pub fn draw_frame(&self, canvas: &mut impl Canvas, state: &GameState) {
        canvas.clear(BG_COLOR);
        self.draw_score(canvas, state.score);
        self.draw_grid(canvas);
        self.draw_snake(canvas, state.snake.body());
        self.draw_treat(canvas, state.treat);
    }

    pub fn draw_score(&self, canvas: &mut impl Canvas, score: u32) {
        canvas.draw_text(&score_text(score), SCORE_POS.0, SCORE_POS.1, SCORE_FONT_SIZE, SCORE_COLOR);
    }

    pub fn draw_grid(&self, canvas: &mut impl Canvas) {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                draw_cell(canvas, (x, y), GRID_COLOR);
            }
        }
    }

    pub fn draw_snake(&self, canvas: &mut impl Canvas, body: &[Coords]) {
        for pos in body {
            draw_cell(canvas, *pos, SNAKE_COLOR);
        }
    }

    pub fn draw_treat(&self, canvas: &mut impl Canvas, treat: Coords) {
        draw_cell(canvas, treat, TREAT_COLOR);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

pub fn score_text(score: u32) -> String {
    format!("SCORE {}", score)
}

fn draw_cell(canvas: &mut impl Canvas, pos: Coords, color: Color) {
    let size = CELL_SIZE as f32;
    canvas.draw_rectangle(grid_to_pixel(pos.0, Axis::X), grid_to_pixel(pos.1, Axis::Y), size, size, color);
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::snake::Snake;

    #[derive(Debug, PartialEq)]
    pub enum Draw {
        Clear(Color),
        Rect { x: f32, y: f32, color: Color },
        Text { text: String, x: f32, y: f32, size: f32 },
    }

    /// Records draw calls instead of touching a window.
    #[derive(Default)]
    pub struct Recorder {
        pub calls: Vec<Draw>,
    }

    impl Recorder {
        fn rects_of(&self, color: Color) -> Vec<(f32, f32)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Draw::Rect { x, y, color: c } if *c == color => Some((*x, *y)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for Recorder {
        fn clear(&mut self, color: Color) {
            self.calls.push(Draw::Clear(color));
        }

        fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            assert_eq!((w, h), (CELL_SIZE as f32, CELL_SIZE as f32));
            self.calls.push(Draw::Rect { x, y, color });
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, _color: Color) {
            self.calls.push(Draw::Text { text: text.to_owned(), x, y, size: font_size });
        }
    }

    #[test]
    fn grid_to_pixel_includes_gap_and_offset() {
        assert_eq!(grid_to_pixel(0, Axis::X), 10.0);
        assert_eq!(grid_to_pixel(1, Axis::X), 62.0);
        assert_eq!(grid_to_pixel(0, Axis::Y), 100.0);
        assert_eq!(grid_to_pixel(19, Axis::X), 998.0);
        assert_eq!(grid_to_pixel(19, Axis::Y), 1088.0);
    }

    #[test]
    fn palette_matches_hex() {
        assert_eq!(BG_COLOR, Color::from_rgba(0x1A, 0x43, 0x14, 0xFF));
        assert_eq!(TREAT_COLOR, Color::from_rgba(0x32, 0xCD, 0x30, 0xFF));
    }

    #[test]
    fn score_text_format() {
        assert_eq!(score_text(0), "SCORE 0");
        assert_eq!(score_text(42), "SCORE 42");
    }

    #[test]
    fn frame_draws_everything_in_order() {
        let state = GameState {
            snake: Snake::from_segments(vec![(10, 10), (10, 11)]),
            treat: (3, 4),
            score: 7,
            ..GameState::default()
        };
        let mut canvas = Recorder::default();

        Renderer::new().draw_frame(&mut canvas, &state);

        assert_eq!(canvas.calls[0], Draw::Clear(BG_COLOR));
        assert_eq!(
            canvas.calls[1],
            Draw::Text { text: "SCORE 7".to_owned(), x: 50.0, y: 50.0, size: 50.0 }
        );
        assert_eq!(canvas.calls.len(), 2 + 400 + 2 + 1);
        assert_eq!(canvas.rects_of(GRID_COLOR).len(), 400);
        assert_eq!(canvas.rects_of(SNAKE_COLOR), vec![(530.0, 620.0), (530.0, 672.0)]);
        assert_eq!(canvas.calls.last(), Some(&Draw::Rect { x: 166.0, y: 308.0, color: TREAT_COLOR }));
    }
}
