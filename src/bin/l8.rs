//! A spinning textured cube with a first-person camera. Movement is scaled
//! by the frame time and the frame rate is shown in the title.

use gl_lessons::camera::FlyCamera;
use gl_lessons::graphics::{Geometry, Mesh, Program, ShaderSource, Texture};
use gl_lessons::timing::FpsCounter;
use gl_lessons::window::{Flow, Window, WindowConfig};
use gl_lessons::{exit_on_error, logging, Result};
use glam::Mat4;
use log::error;

const VERTEX_SHADER: ShaderSource = ShaderSource::vertex(
    "#version 330 core
layout(location = 0) in vec3 position;
layout(location = 1) in vec2 texture;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
out vec2 vertexTexture;
void main()
{
    gl_Position = projection * view * model * vec4(position, 1.0);
    vertexTexture = texture;
}",
);

const FRAGMENT_SHADER: ShaderSource = ShaderSource::fragment(
    "#version 330 core
out vec4 fragmentColor;
in vec2 vertexTexture;
uniform sampler2D uniTexture;
void main()
{
    fragmentColor = texture(uniTexture, vertexTexture);
}",
);

const WINDOW: WindowConfig = WindowConfig::new(1000, 800)
    .clear_color(0.066, 0.09, 0.07)
    .depth_test()
    .grab_cursor()
    .no_vsync();

const CUBE_TEXTURE: &str = "../textures/first.png";

/// Camera speed in units per second
const CAMERA_SPEED: f32 = 2.0;
/// Cube spin in degrees per second
const SPIN_SPEED: f32 = 45.0;

#[rustfmt::skip]
const VERTICES: [f32; 180] = [
    // position            // texture
    -0.5, -0.5, -0.5,      0.0, 0.0,
     0.5, -0.5, -0.5,      1.0, 0.0,
     0.5,  0.5, -0.5,      1.0, 1.0,
     0.5,  0.5, -0.5,      1.0, 1.0,
    -0.5,  0.5, -0.5,      0.0, 1.0,
    -0.5, -0.5, -0.5,      0.0, 0.0,

    -0.5, -0.5,  0.5,      0.0, 0.0,
     0.5, -0.5,  0.5,      1.0, 0.0,
     0.5,  0.5,  0.5,      1.0, 1.0,
     0.5,  0.5,  0.5,      1.0, 1.0,
    -0.5,  0.5,  0.5,      0.0, 1.0,
    -0.5, -0.5,  0.5,      0.0, 0.0,

    -0.5,  0.5,  0.5,      1.0, 0.0,
    -0.5,  0.5, -0.5,      1.0, 1.0,
    -0.5, -0.5, -0.5,      0.0, 1.0,
    -0.5, -0.5, -0.5,      0.0, 1.0,
    -0.5, -0.5,  0.5,      0.0, 0.0,
    -0.5,  0.5,  0.5,      1.0, 0.0,

     0.5,  0.5,  0.5,      1.0, 0.0,
     0.5,  0.5, -0.5,      1.0, 1.0,
     0.5, -0.5, -0.5,      0.0, 1.0,
     0.5, -0.5, -0.5,      0.0, 1.0,
     0.5, -0.5,  0.5,      0.0, 0.0,
     0.5,  0.5,  0.5,      1.0, 0.0,

    -0.5, -0.5, -0.5,      0.0, 1.0,
     0.5, -0.5, -0.5,      1.0, 1.0,
     0.5, -0.5,  0.5,      1.0, 0.0,
     0.5, -0.5,  0.5,      1.0, 0.0,
    -0.5, -0.5,  0.5,      0.0, 0.0,
    -0.5, -0.5, -0.5,      0.0, 1.0,

    -0.5,  0.5, -0.5,      0.0, 1.0,
     0.5,  0.5, -0.5,      1.0, 1.0,
     0.5,  0.5,  0.5,      1.0, 0.0,
     0.5,  0.5,  0.5,      1.0, 0.0,
    -0.5,  0.5,  0.5,      0.0, 0.0,
    -0.5,  0.5, -0.5,      0.0, 1.0,
];

/// Every vertex is used once, in order
fn sequential_indices() -> Vec<u32> {
    (0..(VERTICES.len() / 5) as u32).collect()
}

fn main() {
    logging::init();
    exit_on_error(run());
}

fn run() -> Result<()> {
    let mut window = Window::new(WINDOW)?;
    let program = Program::from_sources(window.gl(), VERTEX_SHADER, FRAGMENT_SHADER);

    let indices = sequential_indices();
    let cube = unsafe { Mesh::new(&Geometry::new(&VERTICES, &indices, &[3, 2])) };

    let texture = match unsafe { Texture::from_file(CUBE_TEXTURE) } {
        Ok(texture) => Some(texture),
        Err(err) => {
            error!("{}", err);
            None
        }
    };

    let projection = Mat4::perspective_rh_gl(
        45f32.to_radians(),
        WINDOW.aspect_ratio(),
        0.1,
        100.0,
    );
    let model = program.uniform("model");
    let view = program.uniform("view");
    program.bind();
    unsafe { program.uniform("projection").set_mat4(&projection) };

    let mut camera = FlyCamera::default();
    let mut fps = FpsCounter::new(1.0);
    let mut rotation = 0f32;

    window.run(|frame| {
        let dt = frame.time.delta;
        rotation = (rotation + SPIN_SPEED * dt) % 360.0;
        camera.update(frame.input, CAMERA_SPEED * dt);

        if let Some(title) = fps.update(frame.time) {
            frame.set_title(&title);
        }

        let texture = match &texture {
            Some(texture) => texture,
            None => return Flow::Continue,
        };

        program.bind();
        unsafe {
            model.set_mat4(&Mat4::from_rotation_y(rotation.to_radians()));
            view.set_mat4(&camera.view());
            Texture::bind(texture);
            cube.draw_all();
            Texture::unbind();
        }
        Flow::Continue
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_is_thirty_six_vertices() {
        let indices = sequential_indices();
        assert_eq!(indices.len(), 36);
        let geometry = Geometry::new(&VERTICES, &indices, &[3, 2]);
        assert_eq!(geometry.vertex_count(), 36);
        assert_eq!(geometry.stride(), 20);
    }
}
