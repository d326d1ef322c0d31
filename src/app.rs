use log::{debug, error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopWindowTarget},
};

use crate::config::{AppConfig, RenderConfig};
use crate::render::{spin_model, Camera, CubeMesh, Shader};
use crate::utils::{error::Result, FrameClock};
use crate::window::RenderWindow;

/// Everything the render loop touches.
///
/// GL objects are declared before `window` so they are deleted while the
/// context they belong to is still alive.
pub struct App {
    shader: Shader,
    cube: CubeMesh,
    camera: Camera,
    clock: FrameClock,
    render: RenderConfig,
    window: RenderWindow,
}

impl App {
    pub fn new(event_loop: &EventLoop<()>, config: &AppConfig) -> Result<Self> {
        info!("Initializing application...");
        let window = RenderWindow::create(event_loop, &config.window)?;
        let size = window.size();

        let [r, g, b, a] = config.render.clear_color;
        unsafe {
            gl::Viewport(0, 0, size.width as i32, size.height as i32);
            gl::Enable(gl::DEPTH_TEST);
            gl::ClearColor(r, g, b, a);
        }

        let shader = Shader::new(&config.shaders.vertex, &config.shaders.fragment);
        let cube = CubeMesh::upload();
        let camera = Camera::new(&config.render, size.width, size.height);

        Ok(Self {
            shader,
            cube,
            camera,
            clock: FrameClock::new(),
            render: config.render.clone(),
            window,
        })
    }

    pub fn shader(&self) -> &Shader {
        &self.shader
    }

    /// Returns `true` when the window asked to close.
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => true,
            WindowEvent::Resized(size) => {
                self.window.resize(*size);
                self.camera.resize(size.width, size.height);
                false
            }
            WindowEvent::RedrawRequested => {
                self.draw_frame();
                false
            }
            _ => false,
        }
    }

    fn draw_frame(&mut self) {
        let time = self.clock.tick();
        if time.frame_index % 600 == 0 {
            debug!(
                "frame {} at {:.1}s ({:.2} ms)",
                time.frame_index,
                time.elapsed,
                time.dt * 1000.0
            );
        }

        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.shader.activate();
        self.shader
            .set_matrix("model", &spin_model(time.elapsed, self.render.spin_speed));
        self.shader.set_matrix("view", &self.camera.view_matrix());
        self.shader
            .set_matrix("projection", &self.camera.projection_matrix());
        self.cube.draw();

        if let Err(e) = self.window.swap_buffers() {
            error!("Failed to swap buffers: {}", e);
        }
    }

    fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { event, .. } => {
                if self.handle_window_event(&event) {
                    info!("Close requested, shutting down");
                    elwt.exit();
                }
            }
            Event::AboutToWait => self.window.request_redraw(),
            _ => (),
        }
    }
}

/// Builds the window and GL state, then runs the poll-draw-swap loop until
/// the window is closed.
pub fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoopBuilder::new().build()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&event_loop, &config)?;
    let shader = app.shader();
    info!("Shader program {}: {:?}", shader.id(), shader.status());
    if !shader.is_linked() {
        error!("Shader program did not link; the cube will not render correctly");
    }

    event_loop.run(move |event, elwt| app.handle_event(event, elwt))?;
    Ok(())
}
