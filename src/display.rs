//! Display builder and window runner.

use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::gpu::GpuState;
use crate::input::{Input, InputAction};
use crate::layout::LayoutConfig;
use crate::motion::MotionConfig;
use crate::particle::ParticleStyle;
use crate::scene::Scene;
use crate::sprites::SpriteSurface;
use crate::time::Time;
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// A neon text display builder.
///
/// Use method chaining to configure, then call `.run()` to open the window.
///
/// ```ignore
/// NeonDisplay::new()
///     .with_lines(["HELLO", "WORLD"])
///     .with_seed(7)
///     .run()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct NeonDisplay {
    config: DisplayConfig,
}

impl NeonDisplay {
    /// Create a display showing the default text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: DisplayConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the lines of text, top to bottom.
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the initial logical window size.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window_size = [width, height];
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.config.motion = motion;
        self
    }

    pub fn with_style(mut self, style: ParticleStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Fix the random seed so fly-in offsets repeat between runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), DisplayError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.config);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct App {
    config: DisplayConfig,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    scene: Option<Scene<SpriteSurface>>,
    input: Input,
    time: Time,
    error: Option<DisplayError>,
}

impl App {
    fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            window: None,
            gpu_state: None,
            scene: None,
            input: Input::new(),
            time: Time::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), DisplayError> {
        let [width, height] = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(window.clone()))?;
        info!(
            "Window ready at {}x{}",
            gpu_state.config.width, gpu_state.config.height
        );

        let size = window.inner_size();
        let surface = SpriteSurface::new(gpu_state.canvas_size());
        self.scene = Some(Scene::new(surface, &self.config));
        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        self.canvas_ready(size);
        Ok(())
    }

    /// The canvas reported a size: build the particles if not done yet.
    ///
    /// Some platforms report a zero size before the window is shown, so
    /// layout waits for a real one.
    fn canvas_ready(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        let now = self.time.now();
        if let (Some(scene), Some(gpu_state)) = (&mut self.scene, &self.gpu_state) {
            scene.surface_mut().set_canvas_size(gpu_state.canvas_size());
            scene.create_particles(now);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (now, fps_refreshed) = self.time.update();

        let (Some(scene), Some(gpu_state)) = (&mut self.scene, &mut self.gpu_state) else {
            return;
        };

        scene.advance(now);
        gpu_state.upload(scene.surface(), now);

        match gpu_state.render() {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                gpu_state.resize(winit::dpi::PhysicalSize {
                    width: gpu_state.config.width,
                    height: gpu_state.config.height,
                })
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => error!("Render error: {:?}", e),
        }

        if fps_refreshed {
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{} - {} particles - {:.0} FPS",
                    self.config.title,
                    scene.particles().len(),
                    self.time.fps()
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                error!("Failed to start display: {}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match self.input.handle_event(&event) {
            Some(InputAction::PointerMoved(pointer)) => {
                let now = self.time.now();
                if let Some(scene) = &mut self.scene {
                    scene.pointer_moved(pointer, now);
                }
            }
            Some(InputAction::Exit) => event_loop.exit(),
            Some(InputAction::PointerLeft) | None => {}
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                self.canvas_ready(physical_size);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Don't sleep past the next color tick or particle return.
        if let Some(deadline) = self.scene.as_ref().and_then(|s| s.next_deadline()) {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.time.instant_at(deadline)));
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
