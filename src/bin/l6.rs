//! Squares and triangles animated with translation, rotation and scale
//! matrices driven by the elapsed time.

use gl_lessons::graphics::{Geometry, Mesh, Program, ShaderSource};
use gl_lessons::window::{Flow, Window, WindowConfig};
use gl_lessons::{exit_on_error, logging, Result};
use glam::{Mat4, Vec3};
use std::f32::consts::PI;

const VERTEX_SHADER: ShaderSource = ShaderSource::vertex(
    "#version 330 core
layout(location = 0) in vec3 position;
layout(location = 1) in vec3 color;
out vec3 vertexColor;
uniform mat4 model;
void main()
{
    gl_Position = model * vec4(position.x, position.y, position.z, 1.0);
    vertexColor = color;
}",
);

const FRAGMENT_SHADER: ShaderSource = ShaderSource::fragment(
    "#version 330 core
in vec3 vertexColor;
out vec4 fragmentColor;
void main()
{
    fragmentColor = vec4(vertexColor, 1.0);
}",
);

const WINDOW: WindowConfig = WindowConfig::new(1000, 800).clear_color(0.1, 0.1, 0.1);

#[rustfmt::skip]
const SQUARE_VERTICES: [f32; 24] = [
    // coordinates       // colors
    -0.2,  0.2, 0.0,     0.0, 1.0, 0.0,
    -0.2, -0.2, 0.0,     0.0, 1.0, 0.0,
     0.2, -0.2, 0.0,     0.0, 1.0, 0.0,
     0.2,  0.2, 0.0,     0.0, 1.0, 0.0,
];

#[rustfmt::skip]
const SQUARE_INDICES: [u32; 6] = [
    0, 1, 2,
    0, 2, 3,
];

#[rustfmt::skip]
const TRIANGLE_VERTICES: [f32; 18] = [
    // coordinates       // colors
    -0.2,  0.2, 0.0,     1.0, 0.0, 0.0,
    -0.2, -0.2, 0.0,     0.0, 1.0, 0.0,
     0.2, -0.2, 0.0,     0.0, 0.0, 1.0,
];

const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Model matrices at time `t` (seconds) for, in order: the bobbing square,
/// the spinning square, the pulsing triangle and the triangle doing all three
fn model_matrices(t: f32) -> [Mat4; 4] {
    let bob = Mat4::from_translation(Vec3::new(0.0, -0.25 * t.sin(), 0.0));
    let spin = Mat4::from_rotation_z((t * PI).to_radians());
    let pulse = 0.5 * t.sin().abs();
    let scale = Mat4::from_scale(Vec3::new(pulse, pulse, 0.5));
    let combined = bob * scale * spin;

    let corner = |x: f32, y: f32| Mat4::from_translation(Vec3::new(x, y, 0.0));
    [
        corner(-0.5, 0.5) * bob,
        corner(0.5, -0.5) * spin,
        corner(-0.5, -0.5) * scale,
        corner(0.5, 0.5) * combined,
    ]
}

fn main() {
    logging::init();
    exit_on_error(run());
}

fn run() -> Result<()> {
    let mut window = Window::new(WINDOW)?;
    let program = Program::from_sources(window.gl(), VERTEX_SHADER, FRAGMENT_SHADER);

    let square = unsafe { Mesh::new(&Geometry::new(&SQUARE_VERTICES, &SQUARE_INDICES, &[3, 3])) };
    let triangle =
        unsafe { Mesh::new(&Geometry::new(&TRIANGLE_VERTICES, &TRIANGLE_INDICES, &[3, 3])) };

    let model = program.uniform("model");

    window.run(|frame| {
        let [bobbing, spinning, pulsing, combined] = model_matrices(frame.time.elapsed as f32);

        program.bind();
        unsafe {
            model.set_mat4(&bobbing);
            square.draw_all();
            model.set_mat4(&spinning);
            square.draw_all();

            model.set_mat4(&pulsing);
            triangle.draw_all();
            model.set_mat4(&combined);
            triangle.draw_all();
        }
        Flow::Continue
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn shapes_start_in_their_corners() {
        let [bobbing, spinning, pulsing, combined] = model_matrices(0.0);
        assert!(close(bobbing.transform_point3(Vec3::ZERO), Vec3::new(-0.5, 0.5, 0.0)));
        assert!(close(spinning.transform_point3(Vec3::ZERO), Vec3::new(0.5, -0.5, 0.0)));
        assert!(close(pulsing.transform_point3(Vec3::ZERO), Vec3::new(-0.5, -0.5, 0.0)));
        assert!(close(combined.transform_point3(Vec3::ZERO), Vec3::new(0.5, 0.5, 0.0)));
        // Zero scale at t = 0 collapses the pulsing triangle
        assert!(close(
            pulsing.transform_point3(Vec3::new(0.2, 0.2, 0.0)),
            Vec3::new(-0.5, -0.5, 0.0)
        ));
    }

    #[test]
    fn square_bobs_downwards() {
        let t = PI / 2.0;
        let [bobbing, ..] = model_matrices(t);
        assert!(close(bobbing.transform_point3(Vec3::ZERO), Vec3::new(-0.5, 0.25, 0.0)));
    }

    #[test]
    fn spin_is_pi_degrees_per_second() {
        let [_, spinning, ..] = model_matrices(1.0);
        let tip = spinning.transform_point3(Vec3::X) - Vec3::new(0.5, -0.5, 0.0);
        let angle = tip.y.atan2(tip.x).to_degrees();
        assert!((angle - PI).abs() < 1e-3);
    }
}
