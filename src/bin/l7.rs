//! A tilted cube explored with a first-person camera: the mouse looks
//! around and WASD moves.

use gl_lessons::camera::FlyCamera;
use gl_lessons::graphics::{Geometry, Mesh, Program, ShaderSource};
use gl_lessons::window::{Flow, Window, WindowConfig};
use gl_lessons::{exit_on_error, logging, Result};
use glam::Mat4;

const VERTEX_SHADER: ShaderSource = ShaderSource::vertex(
    "#version 330 core
layout(location = 0) in vec3 position;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main()
{
    gl_Position = projection * view * model * vec4(position, 1.0);
}",
);

const FRAGMENT_SHADER: ShaderSource = ShaderSource::fragment(
    "#version 330 core
out vec4 fragmentColor;
void main()
{
    fragmentColor = vec4(0.5, 0.3, 0.7, 1.0);
}",
);

const WINDOW: WindowConfig = WindowConfig::new(1000, 800)
    .clear_color(0.066, 0.09, 0.07)
    .depth_test()
    .grab_cursor();

/// Distance moved per frame while a movement key is held
const CAMERA_STEP: f32 = 0.03;

#[rustfmt::skip]
const VERTICES: [f32; 24] = [
    // front
    -1.0, -1.0,  1.0,
     1.0, -1.0,  1.0,
     1.0,  1.0,  1.0,
    -1.0,  1.0,  1.0,
    // back
    -1.0, -1.0, -1.0,
     1.0, -1.0, -1.0,
     1.0,  1.0, -1.0,
    -1.0,  1.0, -1.0,
];

#[rustfmt::skip]
const INDICES: [u32; 36] = [
    // front
    0, 1, 2,  2, 3, 0,
    // right
    1, 5, 6,  6, 2, 1,
    // back
    7, 6, 5,  5, 4, 7,
    // left
    4, 0, 3,  3, 7, 4,
    // bottom
    4, 5, 1,  1, 0, 4,
    // top
    3, 2, 6,  6, 7, 3,
];

fn main() {
    logging::init();
    exit_on_error(run());
}

fn run() -> Result<()> {
    let mut window = Window::new(WINDOW)?;
    let program = Program::from_sources(window.gl(), VERTEX_SHADER, FRAGMENT_SHADER);
    let cube = unsafe { Mesh::new(&Geometry::new(&VERTICES, &INDICES, &[3])) };

    let model = Mat4::from_rotation_x((-45f32).to_radians());
    let projection = Mat4::perspective_rh_gl(
        45f32.to_radians(),
        WINDOW.aspect_ratio(),
        0.1,
        100.0,
    );

    let view = program.uniform("view");
    program.bind();
    unsafe {
        program.uniform("model").set_mat4(&model);
        program.uniform("projection").set_mat4(&projection);
    }

    let mut camera = FlyCamera::default();

    window.run(|frame| {
        camera.update(frame.input, CAMERA_STEP);

        program.bind();
        unsafe {
            view.set_mat4(&camera.view());
            cube.draw_all();
        }
        Flow::Continue
    })
}
