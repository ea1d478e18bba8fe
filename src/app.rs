use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::{
    config::ViewerConfig,
    error::ViewerError,
    gfx::{camera::CameraManager, scene::Scene, RenderEngine},
    interaction::{InteractionEngine, PointerEvent},
    robot::robot_scene,
    ui::UiManager,
};

/// Pixel-precise wheel deltas per line step
const PIXELS_PER_SCROLL_LINE: f32 = 50.0;

pub struct ViewerApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    camera: CameraManager,
    interaction: InteractionEngine,
    start: Instant,
    last_frame: Duration,
    init_error: Option<ViewerError>,
}

impl ViewerApp {
    /// Create a viewer showing the toy robot
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        let event_loop = EventLoop::new()?;
        let aspect = config.width as f32 / config.height.max(1) as f32;

        Ok(Self {
            event_loop,
            app_state: AppState {
                camera: CameraManager::from_config(&config.camera, aspect),
                interaction: InteractionEngine::new(config.interaction.clone()),
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                scene: robot_scene(),
                start: Instant::now(),
                last_frame: Duration::ZERO,
                init_error: None,
            },
        })
    }

    /// Replace the configuration before the window opens
    pub fn with_config(mut self, config: ViewerConfig) -> Self {
        let aspect = config.width as f32 / config.height.max(1) as f32;
        self.app_state.camera = CameraManager::from_config(&config.camera, aspect);
        self.app_state.interaction = InteractionEngine::new(config.interaction.clone());
        self.app_state.config = config;
        self
    }

    /// Scene access for callers that want to adjust the robot before running
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.app_state.scene
    }

    /// Run the application until the window closes
    pub fn run(self) -> Result<(), ViewerError> {
        let ViewerApp {
            event_loop,
            mut app_state,
        } = self;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut app_state)?;

        match app_state.init_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ViewerError) {
        log::error!("{err}");
        self.init_error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };
        self.window = Some(window.clone());

        let (width, height): (u32, u32) = window.inner_size().into();
        let background = self.config.background;
        let window_clone = window.clone();
        let renderer = match pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height, background).await
        }) {
            Ok(renderer) => renderer,
            Err(err) => return self.fail(event_loop, err),
        };

        renderer.prepare_scene(&mut self.scene);
        self.camera.camera.resize_projection(width, height);

        let mut ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window,
        );
        ui_manager.resize(width, height);

        log::info!("Viewer ready at {width}x{height}");
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        self.start = Instant::now();
        self.last_frame = Duration::ZERO;
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Handle UI input first
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            if ui_manager.handle_input(window, &event) {
                window.request_redraw();
                return;
            }
        }

        let now = self.start.elapsed();
        let (width, height) = render_engine.get_surface_size();
        let viewport = (width as f32, height as f32);
        let pointer_event = match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                event_loop.exit();
                None
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.camera.camera.resize_projection(width, height);
                render_engine.resize(width, height);
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.resize(width, height);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => Some(PointerEvent::Moved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::CursorLeft { .. } => {
                self.interaction.pointer_left(&mut self.scene);
                None
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => PointerEvent::Pressed,
                ElementState::Released => PointerEvent::Released,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => {
                        position.y as f32 / PIXELS_PER_SCROLL_LINE
                    }
                };
                Some(PointerEvent::Scrolled { delta })
            }
            WindowEvent::RedrawRequested => {
                let elapsed = now.saturating_sub(self.last_frame);
                self.last_frame = now;

                self.interaction
                    .update(now, elapsed, &mut self.scene, &mut self.camera);
                render_engine.update(&self.camera.camera.uniform, &mut self.scene);

                let text = self.interaction.notification_text().map(str::to_owned);
                let ui_manager = self.ui_manager.as_mut();
                let window_clone = window.clone();
                let result = render_engine.render_frame(
                    &self.scene,
                    Some(
                        |device: &wgpu::Device,
                         queue: &wgpu::Queue,
                         encoder: &mut wgpu::CommandEncoder,
                         view: &wgpu::TextureView| {
                            if let Some(ui_manager) = ui_manager {
                                ui_manager.draw_overlay(
                                    device,
                                    queue,
                                    encoder,
                                    &window_clone,
                                    view,
                                    text.as_deref(),
                                );
                            }
                        },
                    ),
                );

                match result {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_engine.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory, exiting");
                        event_loop.exit();
                    }
                    Err(err) => log::warn!("Skipped frame: {err}"),
                }
                None
            }
            _ => None,
        };

        if let Some(pointer_event) = pointer_event {
            let outcome = self.interaction.handle_pointer(
                pointer_event,
                now,
                viewport,
                &mut self.scene,
                &mut self.camera,
            );
            if let Some(outcome) = outcome {
                log::info!("{outcome:?}");
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
