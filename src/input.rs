use crate::snake::Direction;

use macroquad::input::{is_key_pressed, is_quit_requested, KeyCode};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Right,
    Down,
    Left,
}

impl ArrowKey {
    /// Order in which the keys are checked each frame. Later keys overwrite
    /// earlier ones.
    pub const CHECK_ORDER: [ArrowKey; 4] = [ArrowKey::Up, ArrowKey::Right, ArrowKey::Down, ArrowKey::Left];

    pub fn direction(self) -> Direction {
        match self {
            ArrowKey::Up => Direction::North,
            ArrowKey::Right => Direction::East,
            ArrowKey::Down => Direction::South,
            ArrowKey::Left => Direction::West,
        }
    }
}

/// Keyboard state for the current frame.
pub trait KeyInput {
    /// True only on the frame the key went down.
    fn is_key_pressed(&self, key: ArrowKey) -> bool;

    fn close_requested(&self) -> bool {
        false
    }
}

/// Applies this frame's key presses to `current`, ignoring any that would
/// reverse it.
pub fn next_direction(current: Direction, keys: &impl KeyInput) -> Direction {
    ArrowKey::CHECK_ORDER.iter().fold(current, |dir, key| {
        let wanted = key.direction();
        if keys.is_key_pressed(*key) && !dir.is_opposite(wanted) {
            wanted
        } else {
            dir
        }
    })
}

pub struct MacroquadKeys;

impl KeyInput for MacroquadKeys {
    fn is_key_pressed(&self, key: ArrowKey) -> bool {
        let code = match key {
            ArrowKey::Up => KeyCode::Up,
            ArrowKey::Right => KeyCode::Right,
            ArrowKey::Down => KeyCode::Down,
            ArrowKey::Left => KeyCode::Left,
        };
        is_key_pressed(code)
    }

    fn close_requested(&self) -> bool {
        is_quit_requested() || is_key_pressed(KeyCode::Escape)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::snake::Direction::*;

    /// Keys held down for a single frame.
    #[derive(Default)]
    pub struct Pressed {
        pub keys: Vec<ArrowKey>,
        pub close: bool,
    }

    impl Pressed {
        pub fn keys(keys: &[ArrowKey]) -> Self {
            Pressed { keys: keys.to_vec(), close: false }
        }
    }

    impl KeyInput for Pressed {
        fn is_key_pressed(&self, key: ArrowKey) -> bool {
            self.keys.contains(&key)
        }

        fn close_requested(&self) -> bool {
            self.close
        }
    }

    #[test]
    fn no_keys_keeps_direction() {
        assert_eq!(next_direction(East, &Pressed::default()), East);
    }

    #[test]
    fn reversal_is_ignored() {
        assert_eq!(next_direction(North, &Pressed::keys(&[ArrowKey::Down])), North);
        assert_eq!(next_direction(East, &Pressed::keys(&[ArrowKey::Left])), East);
        assert_eq!(next_direction(South, &Pressed::keys(&[ArrowKey::Up])), South);
        assert_eq!(next_direction(West, &Pressed::keys(&[ArrowKey::Right])), West);
    }

    #[test]
    fn perpendicular_turns_are_taken() {
        assert_eq!(next_direction(North, &Pressed::keys(&[ArrowKey::Right])), East);
        assert_eq!(next_direction(North, &Pressed::keys(&[ArrowKey::Left])), West);
    }

    #[test]
    fn later_keys_overwrite_earlier_ones() {
        let all = Pressed::keys(&[ArrowKey::Up, ArrowKey::Right, ArrowKey::Down, ArrowKey::Left]);
        // North, then East, then South, then West.
        assert_eq!(next_direction(East, &all), West);
        assert_eq!(next_direction(North, &all), West);

        let up_down = Pressed::keys(&[ArrowKey::Up, ArrowKey::Down]);
        assert_eq!(next_direction(East, &up_down), North);
    }

    #[test]
    fn each_check_sees_the_updated_direction() {
        // From East, Left alone is a reversal, but Up turns North first.
        let keys = Pressed::keys(&[ArrowKey::Left, ArrowKey::Up]);
        assert_eq!(next_direction(East, &keys), West);
    }
}
