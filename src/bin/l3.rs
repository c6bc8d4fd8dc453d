//! A regular polygon with a vertex count read from standard input.

use gl_lessons::graphics::{Mesh, Program, ShaderSource};
use gl_lessons::polygon::{prompt_vertex_count, Polygon};
use gl_lessons::window::{Flow, Window, WindowConfig};
use gl_lessons::{exit_on_error, logging, Result};
use log::info;
use std::io;

const VERTEX_SHADER: ShaderSource = ShaderSource::vertex(
    "#version 330 core
layout(location = 0) in vec3 position;
out vec3 vertexColor;
void main()
{
    gl_Position = vec4(position.x, position.y, position.z, 1.0);
    vertexColor = vec3(0.30f, 0.50f, 1.0f);
}",
);

const FRAGMENT_SHADER: ShaderSource = ShaderSource::fragment(
    "#version 330 core
out vec4 fragmentColor;
void main()
{
    fragmentColor = vec4(0.30f, 0.50f, 1.0f, 1.0f);
}",
);

const WINDOW: WindowConfig = WindowConfig::new(800, 800);
const RADIUS: f32 = 0.5;

fn main() {
    logging::init();
    exit_on_error(run());
}

fn run() -> Result<()> {
    // Asked before the window opens so it doesn't sit unresponsive meanwhile
    let sides = prompt_vertex_count(io::stdin().lock(), io::stdout())?;
    info!("drawing a polygon with {} vertices", sides);

    let mut window = Window::new(WINDOW)?;
    let program = Program::from_sources(window.gl(), VERTEX_SHADER, FRAGMENT_SHADER);

    let polygon = Polygon::regular(sides, RADIUS);
    let mesh = unsafe { Mesh::new(&polygon.geometry()) };

    window.run(|_| {
        program.bind();
        unsafe { mesh.draw_all() };
        Flow::Continue
    })
}
