use crate::input::InputState;
use glam::{Mat4, Vec3};
use glutin::event::VirtualKeyCode;

/// Degrees of rotation per unit of mouse movement
pub const MOUSE_SENSITIVITY: f32 = 0.075;
/// Pitch limit in degrees, keeps the view from flipping over the poles
pub const PITCH_LIMIT: f32 = 89.0;

/// First-person camera: mouse to look around, WASD to move.
#[derive(Clone, Debug)]
pub struct FlyCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    /// Degrees, -90 looks down -Z
    yaw: f32,
    /// Degrees
    pitch: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 2.5))
    }
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Turns the camera by a mouse movement in screen space (y grows downwards)
    pub fn look(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.yaw += dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch - dy * MOUSE_SENSITIVITY).max(-PITCH_LIMIT).min(PITCH_LIMIT);

        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
    }

    /// Moves `distance` along the view direction for W/S and sideways for A/D
    pub fn walk(&mut self, input: &InputState, distance: f32) {
        let right = self.front.cross(self.up).normalize();
        if input.is_down(VirtualKeyCode::W) {
            self.position += self.front * distance;
        }
        if input.is_down(VirtualKeyCode::S) {
            self.position -= self.front * distance;
        }
        if input.is_down(VirtualKeyCode::A) {
            self.position -= right * distance;
        }
        if input.is_down(VirtualKeyCode::D) {
            self.position += right * distance;
        }
    }

    /// Applies this frame's mouse movement and movement keys
    pub fn update(&mut self, input: &InputState, distance: f32) {
        let (dx, dy) = input.motion();
        self.look(dx, dy);
        self.walk(input, distance);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glutin::event::ElementState;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let camera = FlyCamera::default();
        assert!(close(camera.front(), Vec3::new(0.0, 0.0, -1.0)));
        assert!(close(camera.position(), Vec3::new(0.0, 0.0, 2.5)));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = FlyCamera::default();
        camera.look(0.0, -100_000.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert!(camera.front().y > 0.99);

        camera.look(0.0, 100_000.0);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert!(camera.front().y < -0.99);
    }

    #[test]
    fn no_motion_keeps_direction() {
        let mut camera = FlyCamera::default();
        camera.look(0.0, 0.0);
        assert_eq!(camera.yaw(), -90.0);
        assert!(close(camera.front(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn moving_right_turns_right() {
        let mut camera = FlyCamera::default();
        // 1200 * 0.075 = 90 degrees
        camera.look(1200.0, 0.0);
        assert!((camera.yaw() - 0.0).abs() < 1e-4);
        assert!(close(camera.front(), Vec3::X));
    }

    #[test]
    fn unfocused_window_does_not_turn() {
        let mut input = InputState::default();
        let mut camera = FlyCamera::default();
        input.handle_window_event(&glutin::event::WindowEvent::Focused(false));
        input.mouse_motion(40.0, 0.0);
        camera.update(&input, 0.0);
        assert_eq!(camera.yaw(), -90.0);
        assert!(close(camera.front(), Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn wasd_moves_along_view_and_side_axes() {
        let mut input = InputState::default();
        let mut camera = FlyCamera::default();

        input.key(VirtualKeyCode::W, ElementState::Pressed);
        camera.walk(&input, 0.5);
        assert!(close(camera.position(), Vec3::new(0.0, 0.0, 2.0)));

        input.key(VirtualKeyCode::W, ElementState::Released);
        input.key(VirtualKeyCode::D, ElementState::Pressed);
        camera.walk(&input, 1.0);
        assert!(close(camera.position(), Vec3::new(1.0, 0.0, 2.0)));

        input.key(VirtualKeyCode::D, ElementState::Released);
        input.key(VirtualKeyCode::A, ElementState::Pressed);
        input.key(VirtualKeyCode::S, ElementState::Pressed);
        camera.walk(&input, 1.0);
        assert!(close(camera.position(), Vec3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn view_matches_look_at() {
        let camera = FlyCamera::default();
        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 2.5),
            Vec3::new(0.0, 0.0, 1.5),
            Vec3::Y,
        );
        assert_eq!(camera.view(), expected);
    }
}
