//! Nimbus3D demo application.
//!
//! Builds a small scene (a point light and a spinning cube), then drives it
//! with a winit event loop: per-frame deltas are measured and fanned out to
//! the scene manager, window resizes update the camera aspect ratio, and
//! closing the window tears the scene down.
//!
//! No renderer backend is wired up; a periodic status line stands in for
//! the draw call a renderer would make from the scene and camera.

mod camera;
mod config;
mod objects;

use std::time::Instant;

use glam::Vec3;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use nimbus_3d_world::nimbus3d::scene::{ObjectItem, SceneManager, SharedSceneItem};
use nimbus_3d_world::nimbus3d::{Error, Result};
use nimbus_3d_world::{nimbus_error, nimbus_info};

use camera::PerspectiveCamera;
use config::DemoConfig;
use objects::{CubeMesh, PointLight};

const LOG_SOURCE: &str = "nimbus3d::demo";

/// Frames between status reports
const STATUS_INTERVAL: u32 = 300;

/// Register the demo content: a light and a spinning cube
fn setup_scene(manager: &mut SceneManager, config: &DemoConfig) {
    let mut light = PointLight::new([0.25, 0.25, 0.25], 250.0);
    light.position = Vec3::new(5.0, 5.0, 5.0);
    let light_item: SharedSceneItem = ObjectItem::new(light).shared();

    let spin = config.spin_speed;
    let cube_item: SharedSceneItem = ObjectItem::with_update(
        CubeMesh::new([1.0, 0.0, 0.0]),
        move |cube, dt| {
            cube.rotation.z += spin * dt;
            cube.rotation.y += spin * dt;
        },
    )
    .shared();

    manager.add(&[light_item, cube_item]);
    nimbus_info!(
        LOG_SOURCE,
        "scene populated: {} items, {} objects",
        manager.item_count(),
        manager.scene().object_count()
    );
}

struct DemoApp {
    config: DemoConfig,
    camera: PerspectiveCamera,
    manager: SceneManager,
    window: Option<Window>,
    last_frame: Option<Instant>,
    frame_count: u32,
}

impl DemoApp {
    fn new(config: DemoConfig) -> Result<Self> {
        config.validate()?;

        let mut camera = PerspectiveCamera::new(
            config.fov_y_degrees,
            config.aspect(),
            config.z_near,
            config.z_far,
        )?;
        camera.set_position(Vec3::new(0.0, 1.0, 3.0));
        camera.look_at(Vec3::ZERO);

        let mut manager = SceneManager::new();
        setup_scene(&mut manager, &config);

        Ok(Self {
            config,
            camera,
            manager,
            window: None,
            last_frame: None,
            frame_count: 0,
        })
    }

    /// One frame: measure the delta since the previous frame and fan it out
    fn tick(&mut self) {
        let now = Instant::now();
        let dt = match self.last_frame {
            Some(previous) => now.duration_since(previous).as_secs_f32() * 1000.0,
            None => 0.0,
        };
        self.last_frame = Some(now);

        self.manager.update(dt);
        self.frame_count += 1;

        if self.frame_count % STATUS_INTERVAL == 0 {
            // Stand-in for a renderer consuming the scene and camera
            let _view_projection = self.camera.view_projection_matrix();
            nimbus_info!(
                LOG_SOURCE,
                "frame {}: dt {:.2} ms, {} objects ({} visible), camera at {}",
                self.frame_count,
                dt,
                self.manager.scene().object_count(),
                self.manager.scene().visible_count(),
                self.camera.position()
            );
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
                nimbus_info!(LOG_SOURCE, "window created");
            }
            Err(err) => {
                nimbus_error!(LOG_SOURCE, "window creation failed: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.manager.clear();
                nimbus_info!(
                    LOG_SOURCE,
                    "shutting down after {} frames",
                    self.frame_count
                );
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                // Minimized windows report 0x0; keep the last usable aspect
                if size.width > 0 && size.height > 0 {
                    self.camera
                        .set_aspect(size.width as f32 / size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                self.tick();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn run() -> Result<()> {
    let config = DemoConfig::default();
    nimbus_info!(
        LOG_SOURCE,
        "starting {} ({}x{})",
        config.window_title,
        config.window_width,
        config.window_height
    );

    let mut app = DemoApp::new(config)?;

    let event_loop = EventLoop::new()
        .map_err(|err| Error::InitializationFailed(format!("event loop creation failed: {}", err)))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    event_loop
        .run_app(&mut app)
        .map_err(|err| Error::BackendError(format!("event loop terminated: {}", err)))
}

fn main() {
    if let Err(err) = run() {
        nimbus_error!(LOG_SOURCE, "{}", err);
        std::process::exit(1);
    }
}
