//! Noise Grid - a lattice of points pushed around by 4D noise.
//!
//! Every frame each lattice point becomes a short streak along its noise
//! velocity, colored by direction and fading out toward its tip.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use noise_grid::camera::OrbitCamera;
use noise_grid::cli::Args;
use noise_grid::error::{AppError, Result};
use noise_grid::fps::FpsTracker;
use noise_grid::grid::GridSystem;
use noise_grid::gui::{draw_fps, draw_panel, key_action, EguiIntegration, KeyAction, PanelAction};
use noise_grid::params::*;
use noise_grid::rendering::RenderSystem;
use noise_grid::settings::Settings;

/// Mouse buttons currently dragging the camera
#[derive(Default)]
struct DragState {
    rotating: bool,
    panning: bool,
    last_pos: Option<(f64, f64)>,
}

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    gui: Option<EguiIntegration>,

    // Scene
    grid: GridSystem,
    camera: OrbitCamera,

    // Configuration
    params: NoiseGridParams,
    show_gui: bool,
    start_fullscreen: bool,
    settings_path: PathBuf,
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    // Input and timing
    drag: DragState,
    fps: FpsTracker,
    frame_num: usize,
    start_time: Instant,

    /// Fatal error raised inside the event loop, reported after it returns
    error: Option<AppError>,
}

impl App {
    fn new(args: &Args) -> Self {
        let mut settings = Settings::load_or_default(&args.settings);
        args.apply_overrides(&mut settings);

        let render_config = RenderConfig::default();
        let grid = GridSystem::new(args.seed, &render_config);

        Self {
            window: None,
            render_system: None,
            gui: None,
            grid,
            camera: OrbitCamera::new(OrbitCameraConfig::default()),
            params: settings.params,
            show_gui: settings.show_gui,
            start_fullscreen: args.fullscreen,
            settings_path: args.settings.clone(),
            render_config,
            recording_config: args.create_recording_config(),
            drag: DragState::default(),
            fps: FpsTracker::new(),
            frame_num: 0,
            start_time: Instant::now(),
            error: None,
        }
    }

    fn settings(&self) -> Settings {
        Settings {
            params: self.params,
            show_gui: self.show_gui,
        }
    }

    fn save_settings(&self) {
        match self.settings().save(&self.settings_path) {
            Ok(()) => log::info!("Saved settings to {}", self.settings_path.display()),
            Err(e) => log::warn!("{} ({})", e, self.settings_path.display()),
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let mut window_attributes = Window::default_attributes()
            .with_title("Noise Grid")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));
        if self.start_fullscreen {
            window_attributes = window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.grid,
            self.render_config.clone(),
            self.recording_config.clone(),
        ))?;
        let gui = EguiIntegration::new(&render_system.device, render_system.surface_format(), &window);

        if let Some(ref config) = self.recording_config {
            std::fs::create_dir_all(config.frames_dir())?;
            log::info!(
                "Recording {} frames to {}",
                config.total_frames(),
                config.frames_dir()
            );
        }

        log::info!("Tab toggles the panel, F toggles fullscreen, Esc quits");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.gui = Some(gui);
        self.start_time = Instant::now();
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode, text_editing: bool) {
        match key_action(key, text_editing) {
            Some(KeyAction::Quit) => event_loop.exit(),
            Some(KeyAction::TogglePanel) => self.show_gui = !self.show_gui,
            Some(KeyAction::ToggleFullscreen) => {
                if let Some(window) = &self.window {
                    let fullscreen = match window.fullscreen() {
                        Some(_) => None,
                        None => Some(Fullscreen::Borderless(None)),
                    };
                    window.set_fullscreen(fullscreen);
                }
            }
            None => {}
        }
    }

    fn handle_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Save => self.save_settings(),
            PanelAction::Load => match Settings::load(&self.settings_path) {
                Ok(Some(settings)) => {
                    self.params = settings.params;
                    log::info!("Loaded settings from {}", self.settings_path.display());
                }
                Ok(None) => log::warn!("No settings at {}", self.settings_path.display()),
                Err(e) => log::warn!("{} ({})", e, self.settings_path.display()),
            },
            PanelAction::Reset => self.params = NoiseGridParams::default(),
            PanelAction::ResetCamera => self.camera.reset(),
        }
    }

    /// Scene time for this frame
    fn frame_time_s(&self) -> f32 {
        match &self.recording_config {
            Some(config) => config.frame_time_s(self.frame_num),
            None => self.start_time.elapsed().as_secs_f32(),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let consumed = match (&self.window, &mut self.gui) {
            (Some(window), Some(gui)) => gui.on_window_event(window, &event),
            _ => false,
        };
        let gui_wants_pointer = self.gui.as_ref().is_some_and(|gui| gui.wants_pointer());
        let text_editing = self.gui.as_ref().is_some_and(|gui| gui.wants_keyboard());

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, key, text_editing),
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                // Drags only start outside the panel, but always end
                if pressed && (consumed || gui_wants_pointer) {
                    return;
                }
                match button {
                    MouseButton::Left => self.drag.rotating = pressed,
                    MouseButton::Right | MouseButton::Middle => self.drag.panning = pressed,
                    _ => {}
                }
                if !self.drag.rotating && !self.drag.panning {
                    self.drag.last_pos = None;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.drag.rotating || self.drag.panning {
                    if let Some((last_x, last_y)) = self.drag.last_pos {
                        let dx = (position.x - last_x) as f32;
                        let dy = (position.y - last_y) as f32;
                        if self.drag.rotating {
                            self.camera.rotate(dx, dy);
                        } else {
                            self.camera.pan(dx, dy);
                        }
                    }
                    self.drag.last_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed && !gui_wants_pointer => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                self.camera.zoom(scroll);
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Build and draw a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let time_s = self.frame_time_s();

        // GUI runs first so slider edits apply to this frame's mesh
        let (Some(window), Some(gui)) = (&self.window, &mut self.gui) else {
            return;
        };
        let mut action = None;
        let show_gui = self.show_gui;
        let params = &mut self.params;
        let fps = self.fps.current_fps();
        let gui_width = self.render_config.gui_width;
        let gui_output = gui.run(window, |ctx| {
            if show_gui {
                if let Some(clicked) = draw_panel(ctx, params, gui_width) {
                    action = Some(clicked);
                }
            }
            draw_fps(ctx, fps);
        });

        if let Some(action) = action {
            self.handle_panel_action(action);
        }

        // Rebuild the streak mesh from the current parameter snapshot
        self.grid.update(time_s, &self.params);

        let (Some(render_system), Some(gui)) = (&mut self.render_system, &mut self.gui) else {
            return;
        };
        render_system.update_streaks(self.grid.mesh.segments());
        render_system.update_view_proj(self.camera.view_proj(render_system.render_config()));

        match render_system.render(self.frame_num, gui, &gui_output) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = render_system.size();
                render_system.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::error!("Render error: {:?}", e),
        }

        self.fps.record_frame();
        self.frame_num += 1;

        if let Some(ref config) = self.recording_config {
            if self.frame_num % config.fps as usize == 0 {
                log::info!("Recorded {}/{} frames", self.frame_num, config.total_frames());
            }
            if self.frame_num >= config.total_frames() {
                log::info!("Recording complete: {}", config.frames_dir());
                event_loop.exit();
            }
        }
    }
}

fn run(args: Args) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&args);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
