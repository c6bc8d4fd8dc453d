//! Per-frame input state.
//!
//! The window feeds events into an [`InputState`]; each exercise reads it by
//! reference once per frame and updates its own state from it.

use glutin::event::{ElementState, KeyboardInput, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use std::collections::HashSet;

// How many pixels of a precise (touchpad) scroll make one wheel line
const PIXELS_PER_LINE: f32 = 20.0;

#[derive(Debug)]
pub struct InputState {
    keys_down: HashSet<VirtualKeyCode>,
    /// Scroll lines received this frame, positive away from the user
    scroll: f32,
    /// Raw mouse movement received this frame
    motion: (f32, f32),
    focused: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys_down: HashSet::new(),
            scroll: 0.0,
            motion: (0.0, 0.0),
            focused: true,
        }
    }
}

impl InputState {
    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) {
        match event {
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        virtual_keycode: Some(key),
                        state,
                        ..
                    },
                ..
            } => self.key(*key, *state),
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.scroll(*y),
                MouseScrollDelta::PixelDelta(position) => {
                    self.scroll(position.y as f32 / PIXELS_PER_LINE)
                }
            },
            WindowEvent::Focused(focused) => self.set_focused(*focused),
            _ => {}
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Avoids keys stuck down after alt-tabbing mid-press
            self.keys_down.clear();
            self.motion = (0.0, 0.0);
        }
    }

    pub fn key(&mut self, key: VirtualKeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.keys_down.insert(key);
            }
            ElementState::Released => {
                self.keys_down.remove(&key);
            }
        }
    }

    pub fn scroll(&mut self, lines: f32) {
        self.scroll += lines;
    }

    /// Device motion arrives from the whole desktop, so it only counts while
    /// the window has focus
    pub fn mouse_motion(&mut self, dx: f32, dy: f32) {
        if !self.focused {
            return;
        }
        self.motion.0 += dx;
        self.motion.1 += dy;
    }

    pub fn is_down(&self, key: VirtualKeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn scroll_lines(&self) -> f32 {
        self.scroll
    }

    pub fn motion(&self) -> (f32, f32) {
        self.motion
    }

    /// Forgets what only lasts one frame; held keys stay
    pub fn end_frame(&mut self) {
        self.scroll = 0.0;
        self.motion = (0.0, 0.0);
    }
}

/// A value moved by the scroll wheel and kept inside `[min, max]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    value: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl ScrollOffset {
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        debug_assert!(min <= max);
        Self {
            value: 0f32.max(min).min(max),
            min,
            max,
            step,
        }
    }

    /// Range `[-limit, limit]` starting at zero
    pub fn symmetric(limit: f32, step: f32) -> Self {
        Self::new(-limit, limit, step)
    }

    pub fn apply(&mut self, lines: f32) {
        if lines != 0.0 {
            self.value = (self.value + lines * self.step).max(self.min).min(self.max);
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_to_symmetric_range() {
        let mut offset = ScrollOffset::symmetric(0.5, 0.1);
        for _ in 0..1000 {
            offset.apply(1.0);
            assert!(offset.value() <= 0.5);
        }
        assert_eq!(offset.value(), 0.5);

        for _ in 0..1000 {
            offset.apply(-3.0);
            assert!(offset.value() >= -0.5);
        }
        assert_eq!(offset.value(), -0.5);

        offset.apply(2.0);
        assert!((offset.value() - -0.3).abs() < 1e-6);
    }

    #[test]
    fn scroll_clamps_to_unit_range() {
        let mut offset = ScrollOffset::new(0.0, 1.0, 0.1);
        offset.apply(-5.0);
        assert_eq!(offset.value(), 0.0);
        offset.apply(1e9);
        assert_eq!(offset.value(), 1.0);
    }

    #[test]
    fn scroll_and_motion_last_one_frame() {
        let mut input = InputState::default();
        input.scroll(1.0);
        input.scroll(2.0);
        input.mouse_motion(3.0, -1.0);
        input.mouse_motion(1.0, -1.0);
        input.key(VirtualKeyCode::W, ElementState::Pressed);
        assert_eq!(input.scroll_lines(), 3.0);
        assert_eq!(input.motion(), (4.0, -2.0));

        input.end_frame();
        assert_eq!(input.scroll_lines(), 0.0);
        assert_eq!(input.motion(), (0.0, 0.0));
        assert!(input.is_down(VirtualKeyCode::W));
    }

    #[test]
    fn motion_is_ignored_without_focus() {
        let mut input = InputState::default();
        input.key(VirtualKeyCode::W, ElementState::Pressed);
        input.mouse_motion(5.0, 0.0);

        input.handle_window_event(&WindowEvent::Focused(false));
        assert!(!input.is_down(VirtualKeyCode::W));
        assert_eq!(input.motion(), (0.0, 0.0));

        input.mouse_motion(40.0, 0.0);
        assert_eq!(input.motion(), (0.0, 0.0));

        input.handle_window_event(&WindowEvent::Focused(true));
        input.mouse_motion(2.0, -1.0);
        assert_eq!(input.motion(), (2.0, -1.0));
    }

    #[test]
    fn keys_are_held_until_released() {
        let mut input = InputState::default();
        input.key(VirtualKeyCode::Key2, ElementState::Pressed);
        assert!(input.is_down(VirtualKeyCode::Key2));
        assert!(!input.is_down(VirtualKeyCode::Key1));
        input.key(VirtualKeyCode::Key2, ElementState::Released);
        assert!(!input.is_down(VirtualKeyCode::Key2));
    }
}
