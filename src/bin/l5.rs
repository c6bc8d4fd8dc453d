//! A textured quad and triangle. Keys 1, 2 and 3 show the quad, the triangle
//! or both; scrolling fades the textures towards blue; Escape quits.

use gl_lessons::graphics::{Geometry, Mesh, Program, ShaderSource, Texture};
use gl_lessons::input::{InputState, ScrollOffset};
use gl_lessons::window::{Flow, Window, WindowConfig};
use gl_lessons::{exit_on_error, logging, Result};
use glutin::event::VirtualKeyCode;
use log::error;

const VERTEX_SHADER: ShaderSource = ShaderSource::vertex(
    "#version 330 core
layout(location = 0) in vec3 position;
layout(location = 1) in vec3 color;
layout(location = 2) in vec2 texture;
out vec3 vertexColor;
out vec2 vertexTexture;
void main()
{
    gl_Position = vec4(position.x, position.y, position.z, 1.0);
    vertexColor = color;
    vertexTexture = texture;
}",
);

const FRAGMENT_SHADER: ShaderSource = ShaderSource::fragment(
    "#version 330 core
in vec3 vertexColor;
in vec2 vertexTexture;
out vec4 fragmentColor;
uniform sampler2D uniTexture;
uniform float uniScroll;
void main()
{
    fragmentColor = mix(texture(uniTexture, vertexTexture), vec4(0.30f, 0.50f, 1.0f, 0.0f), uniScroll);
}",
);

const WINDOW: WindowConfig = WindowConfig::new(1000, 1000);

const QUAD_TEXTURE: &str = "../textures/first.png";
const TRIANGLE_TEXTURE: &str = "../textures/second.png";

#[rustfmt::skip]
const VERTICES: [f32; 56] = [
    // position          // color          // texture
    -0.9, -0.5, 0.0,     1.0, 0.0, 0.0,    0.0, 0.0,
    -0.1, -0.5, 0.0,     1.0, 0.0, 0.0,    1.0, 0.0,
    -0.1,  0.3, 0.0,     1.0, 0.0, 0.0,    1.0, 1.0,
    -0.9,  0.3, 0.0,     1.0, 0.0, 0.0,    0.0, 1.0,
     0.2, -0.1, 0.0,     1.0, 0.0, 0.0,    0.0, 0.0,
     0.8, -0.1, 0.0,     1.0, 0.0, 0.0,    1.0, 0.0,
     0.5,  0.5, 0.0,     1.0, 0.0, 0.0,    0.5, 1.0,
];

#[rustfmt::skip]
const INDICES: [u32; 9] = [
    0, 1, 2,
    0, 2, 3,
    4, 5, 6,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Quad,
    Triangle,
    Both,
}

impl Mode {
    fn shows_quad(self) -> bool {
        self != Mode::Triangle
    }

    fn shows_triangle(self) -> bool {
        self != Mode::Quad
    }
}

struct State {
    /// Nothing is drawn until a mode is picked
    mode: Option<Mode>,
    blend: ScrollOffset,
}

impl State {
    fn new() -> Self {
        Self {
            mode: None,
            blend: ScrollOffset::new(0.0, 1.0, 0.1),
        }
    }

    fn update(&mut self, input: &InputState) -> Flow {
        if input.is_down(VirtualKeyCode::Escape) {
            return Flow::Exit;
        }
        if input.is_down(VirtualKeyCode::Key1) {
            self.mode = Some(Mode::Quad);
        } else if input.is_down(VirtualKeyCode::Key2) {
            self.mode = Some(Mode::Triangle);
        } else if input.is_down(VirtualKeyCode::Key3) {
            self.mode = Some(Mode::Both);
        }
        self.blend.apply(input.scroll_lines());
        Flow::Continue
    }
}

// A texture that failed to load is reported once and its shape skipped
fn load_texture(path: &str) -> Option<Texture> {
    match unsafe { Texture::from_file(path) } {
        Ok(texture) => Some(texture),
        Err(err) => {
            error!("{}", err);
            None
        }
    }
}

fn main() {
    logging::init();
    exit_on_error(run());
}

fn run() -> Result<()> {
    let mut window = Window::new(WINDOW)?;
    let program = Program::from_sources(window.gl(), VERTEX_SHADER, FRAGMENT_SHADER);
    let mesh = unsafe { Mesh::new(&Geometry::new(&VERTICES, &INDICES, &[3, 3, 2])) };

    let quad_texture = load_texture(QUAD_TEXTURE);
    let triangle_texture = load_texture(TRIANGLE_TEXTURE);

    let blend = program.uniform("uniScroll");
    let mut state = State::new();

    window.run(|frame| {
        if state.update(frame.input) == Flow::Exit {
            return Flow::Exit;
        }
        let mode = match state.mode {
            Some(mode) => mode,
            None => return Flow::Continue,
        };

        program.bind();
        unsafe {
            blend.set_f32(state.blend.value());
            if let (true, Some(texture)) = (mode.shows_quad(), &quad_texture) {
                Texture::bind(texture);
                mesh.draw(6, 0);
            }
            if let (true, Some(texture)) = (mode.shows_triangle(), &triangle_texture) {
                Texture::bind(texture);
                mesh.draw(3, 6);
            }
            Texture::unbind();
        }
        Flow::Continue
    })
}
