pub mod camera;
pub mod events;
pub mod input;
pub mod timestep;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::input::{InputState, Key};

    /// Make exactly `keys` pressed and everything else released.
    ///
    /// Lets tests express a per-step input script as plain key lists.
    pub fn set_pressed(input: &mut InputState, keys: &[Key]) {
        for key in Key::ALL {
            if keys.contains(&key) {
                input.press(key);
            } else {
                input.release(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::input::{InputState, Key};
    use super::test_helpers::set_pressed;

    #[test]
    fn set_pressed_replaces_previous_set() {
        let mut input = InputState::new();
        set_pressed(&mut input, &[Key::Left, Key::Jump]);
        assert!(input.is_pressed(Key::Left));
        assert!(input.is_pressed(Key::Jump));
        set_pressed(&mut input, &[Key::Right]);
        assert!(input.is_pressed(Key::Right));
        assert!(!input.is_pressed(Key::Left));
        assert!(!input.is_pressed(Key::Jump));
    }
}
