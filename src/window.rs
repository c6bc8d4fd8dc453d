//! Window, GL context and the per-frame loop.

use crate::error::{Error, Result};
use crate::graphics::Gl;
use crate::input::InputState;
use crate::timing::{FrameClock, FrameTime};
use glutin::dpi::{LogicalSize, PhysicalSize};
use glutin::event::{DeviceEvent, Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::platform::desktop::EventLoopExtDesktop;
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use log::{info, warn};

pub const DEFAULT_TITLE: &str = "grafika komputerowa";

/// Compile-time description of an exercise window
#[derive(Clone, Copy, Debug)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub clear_color: [f32; 4],
    pub depth_test: bool,
    pub vsync: bool,
    /// Hides and captures the cursor for mouse look
    pub grab_cursor: bool,
}

impl WindowConfig {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            title: DEFAULT_TITLE,
            width,
            height,
            clear_color: [0.18, 0.2, 0.22, 1.0],
            depth_test: false,
            vsync: true,
            grab_cursor: false,
        }
    }

    pub const fn clear_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.clear_color = [r, g, b, 1.0];
        self
    }

    pub const fn depth_test(mut self) -> Self {
        self.depth_test = true;
        self
    }

    pub const fn no_vsync(mut self) -> Self {
        self.vsync = false;
        self
    }

    pub const fn grab_cursor(mut self) -> Self {
        self.grab_cursor = true;
        self
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    fn clear_mask(&self) -> gl::types::GLbitfield {
        if self.depth_test {
            gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT
        } else {
            gl::COLOR_BUFFER_BIT
        }
    }
}

/// What the frame closure wants the loop to do next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything a frame gets to look at
pub struct Frame<'a> {
    pub input: &'a InputState,
    pub time: FrameTime,
    window: &'a glutin::window::Window,
}

impl Frame<'_> {
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

pub struct Window {
    event_loop: EventLoop<()>,
    context: WindowedContext<PossiblyCurrent>,
    config: WindowConfig,
}

impl Window {
    /// Opens the window, makes an OpenGL 3.3 core context current and loads
    /// the GL functions.
    pub fn new(config: WindowConfig) -> Result<Self> {
        // Create the event loop
        let event_loop = EventLoop::new();
        let wb = WindowBuilder::new()
            .with_title(config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height));
        let wc = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(config.vsync)
            .build_windowed(wb, &event_loop)?;
        // Set the window context as the current context
        let context = unsafe { wc.make_current().map_err(|(_, err)| err)? };

        // Load the opengl functions
        gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);
        check_loaded()?;

        // The framebuffer is sized in physical pixels, which differ from the
        // logical size on scaled displays
        let [x, y, width, height] = viewport(context.window().inner_size());
        unsafe {
            gl::Viewport(x, y, width, height);
            if config.depth_test {
                gl::Enable(gl::DEPTH_TEST);
            }
        }

        if config.grab_cursor {
            let window = context.window();
            if let Err(err) = window.set_cursor_grab(true) {
                warn!("could not grab the cursor: {}", err);
            }
            window.set_cursor_visible(false);
        }

        info!(
            "opened {}x{} window \"{}\"",
            config.width, config.height, config.title
        );
        Ok(Self {
            event_loop,
            context,
            config,
        })
    }

    /// The context this window made current
    pub fn gl(&self) -> Gl {
        // The context was made current and loaded in `new` and lives as long as `self`
        unsafe { Gl::current() }
    }

    /// Runs the frame loop until the window is closed or `frame` returns
    /// [`Flow::Exit`].
    ///
    /// The framebuffer is cleared before `frame` is called and swapped after.
    pub fn run<F>(&mut self, mut frame: F) -> Result<()>
    where
        F: FnMut(&mut Frame<'_>) -> Flow,
    {
        let context = &self.context;
        let config = &self.config;
        let mut input = InputState::default();
        let mut clock = FrameClock::new();
        let mut failure = None;

        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::Resized(size) => {
                        context.resize(size);
                        let [x, y, width, height] = viewport(size);
                        unsafe { gl::Viewport(x, y, width, height) };
                    }
                    event => input.handle_window_event(&event),
                },
                Event::DeviceEvent {
                    event: DeviceEvent::MouseMotion { delta: (dx, dy) },
                    ..
                } => input.mouse_motion(dx as f32, dy as f32),
                Event::MainEventsCleared => {
                    let time = clock.tick();
                    unsafe {
                        let [r, g, b, a] = config.clear_color;
                        gl::ClearColor(r, g, b, a);
                        gl::Clear(config.clear_mask());
                    }

                    let flow = frame(&mut Frame {
                        input: &input,
                        time,
                        window: context.window(),
                    });
                    if flow == Flow::Exit {
                        *control_flow = ControlFlow::Exit;
                    }

                    // Swap the window buffers
                    if let Err(err) = context.swap_buffers() {
                        failure = Some(err);
                        *control_flow = ControlFlow::Exit;
                    }
                    input.end_frame();
                }
                _ => {}
            }
        });

        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

/// Viewport covering the whole framebuffer
fn viewport(size: PhysicalSize<u32>) -> [i32; 4] {
    [0, 0, size.width as i32, size.height as i32]
}

// `load_with` never fails by itself, a missing driver shows up as unresolved
// entry points
fn check_loaded() -> Result<()> {
    let required: [(&'static str, bool); 5] = [
        ("glCreateShader", gl::CreateShader::is_loaded()),
        ("glLinkProgram", gl::LinkProgram::is_loaded()),
        ("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
        ("glBufferData", gl::BufferData::is_loaded()),
        ("glDrawElements", gl::DrawElements::is_loaded()),
    ];
    match required.iter().find(|(_, loaded)| !loaded) {
        Some((name, _)) => Err(Error::Loader(*name)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builders() {
        const CONFIG: WindowConfig = WindowConfig::new(1000, 800)
            .clear_color(0.066, 0.09, 0.07)
            .depth_test()
            .grab_cursor()
            .no_vsync();
        assert_eq!(CONFIG.title, DEFAULT_TITLE);
        assert_eq!(CONFIG.clear_color, [0.066, 0.09, 0.07, 1.0]);
        assert!(CONFIG.depth_test && CONFIG.grab_cursor && !CONFIG.vsync);
        assert_eq!(CONFIG.aspect_ratio(), 1.25);
        assert_eq!(
            CONFIG.clear_mask(),
            gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT
        );
        assert_eq!(WindowConfig::new(800, 800).clear_mask(), gl::COLOR_BUFFER_BIT);
    }

    #[test]
    fn viewport_fills_a_scaled_framebuffer() {
        let logical = LogicalSize::new(1000u32, 800u32);
        let physical: PhysicalSize<u32> = logical.to_physical(2.0);
        assert_eq!(viewport(physical), [0, 0, 2000, 1600]);
        assert_eq!(viewport(logical.to_physical(1.0)), [0, 0, 1000, 800]);
    }
}
