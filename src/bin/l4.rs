//! Two pairs of triangles: one moved with the scroll wheel, one recoloured
//! with the 1, 2 and 3 keys.

use gl_lessons::graphics::{Geometry, Mesh, Program, ShaderSource};
use gl_lessons::input::{InputState, ScrollOffset};
use gl_lessons::window::{Flow, Window, WindowConfig};
use gl_lessons::{exit_on_error, logging, Result};
use glutin::event::VirtualKeyCode;

const VERTEX_SHADER: ShaderSource = ShaderSource::vertex(
    "#version 330 core
layout(location = 0) in vec3 position;
uniform float scrollOffset;
void main()
{
    gl_Position = vec4(position.x, position.y + scrollOffset, position.z, 1.0);
}",
);

const FRAGMENT_SHADER: ShaderSource = ShaderSource::fragment(
    "#version 330 core
out vec4 fragmentColor;
uniform vec3 shapeColor;
void main()
{
    fragmentColor = vec4(shapeColor, 1.0f);
}",
);

const WINDOW: WindowConfig = WindowConfig::new(1000, 1000);

#[rustfmt::skip]
const VERTICES: [f32; 24] = [
    -0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
    -0.1,  0.0, 0.0,
    -0.7, -0.3, 0.0,
     0.6,  0.6, 0.0,
     0.1,  0.6, 0.0,
     0.2,  0.1, 0.0,
     0.8,  0.4, 0.0,
];

#[rustfmt::skip]
const INDICES: [u32; 12] = [
    0, 1, 2,
    0, 1, 3,
    4, 5, 6,
    4, 5, 7,
];

const SCROLLED_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
const PALETTE: [[f32; 3]; 3] = [[0.5, 0.0, 0.0], [0.3, 0.1, 0.0], [0.2, 0.0, 1.0]];
const PALETTE_KEYS: [VirtualKeyCode; 3] = [
    VirtualKeyCode::Key1,
    VirtualKeyCode::Key2,
    VirtualKeyCode::Key3,
];

struct State {
    scroll: ScrollOffset,
    color: usize,
}

impl State {
    fn new() -> Self {
        Self {
            scroll: ScrollOffset::symmetric(0.5, 0.1),
            color: 0,
        }
    }

    fn update(&mut self, input: &InputState) {
        self.scroll.apply(input.scroll_lines());
        // With several keys held the highest one wins
        if let Some(index) = PALETTE_KEYS.iter().rposition(|&key| input.is_down(key)) {
            self.color = index;
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
    let mesh = unsafe { Mesh::new(&Geometry::new(&VERTICES, &INDICES, &[3])) };

    let scroll_offset = program.uniform("scrollOffset");
    let shape_color = program.uniform("shapeColor");
    let mut state = State::new();

    window.run(|frame| {
        state.update(frame.input);

        program.bind();
        unsafe {
            scroll_offset.set_f32(state.scroll.value());
            shape_color.set_vec3(SCROLLED_COLOR);
            mesh.draw(6, 0);

            scroll_offset.set_f32(0.0);
            shape_color.set_vec3(PALETTE[state.color]);
            mesh.draw(6, 6);
        }
        Flow::Continue
    })
}
