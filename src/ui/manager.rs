//! ImGui overlay
//!
//! Owns the imgui context together with its winit platform and wgpu renderer.
//! The scene is rendered first; the overlay pass loads that image and draws
//! the info panel on top of it.

use std::time::Instant;

use imgui::{Context, FontConfig, FontSource, MouseCursor};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{
    event::{Event, WindowEvent},
    window::Window,
};

use super::info_panel::info_panel;

const OVERLAY_FONT_SIZE: f32 = 20.0;

/// Whether imgui needs to see `event` to track input
pub fn is_overlay_input(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::CursorMoved { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::MouseWheel { .. }
            | WindowEvent::KeyboardInput { .. }
            | WindowEvent::Focused(_)
    )
}

pub struct UiManager {
    imgui: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    frame_clock: Instant,
    cursor: Option<MouseCursor>,
}

impl UiManager {
    /// Creates the overlay for `window`
    ///
    /// DPI is locked to 1.0 so the overlay is laid out in physical pixels,
    /// the same space pointer picking uses.
    ///
    /// # Arguments
    /// * `device` - Device the overlay renderer allocates on
    /// * `queue` - Queue for font atlas uploads
    /// * `target_format` - Format of the surface the overlay draws into
    /// * `window` - Window whose input imgui tracks
    pub fn new(
        device: &Device,
        queue: &Queue,
        target_format: TextureFormat,
        window: &Window,
    ) -> Self {
        let mut imgui = Context::create();
        imgui.set_ini_filename(None);
        imgui.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                size_pixels: OVERLAY_FONT_SIZE,
                ..Default::default()
            }),
        }]);

        let mut platform = WinitPlatform::new(&mut imgui);
        platform.attach_window(imgui.io_mut(), window, HiDpiMode::Locked(1.0));

        let renderer = Renderer::new(
            &mut imgui,
            device,
            queue,
            RendererConfig {
                texture_format: target_format,
                ..Default::default()
            },
        );

        Self {
            imgui,
            platform,
            renderer,
            frame_clock: Instant::now(),
            cursor: None,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.imgui.io_mut().display_size = [width as f32, height as f32];
    }

    /// Feeds `event` to imgui; true when the overlay claims the input
    ///
    /// Claimed input must not reach picking or the camera.
    pub fn handle_input(&mut self, window: &Window, event: &WindowEvent) -> bool {
        if !is_overlay_input(event) {
            return false;
        }

        let wrapped: Event<()> = Event::WindowEvent {
            window_id: window.id(),
            event: event.clone(),
        };
        self.platform
            .handle_event(self.imgui.io_mut(), window, &wrapped);

        let io = self.imgui.io();
        io.want_capture_mouse || io.want_capture_keyboard
    }

    /// Builds one overlay frame showing `text` and records its render pass
    pub fn draw_overlay(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        window: &Window,
        target: &TextureView,
        text: Option<&str>,
    ) {
        let now = Instant::now();
        self.imgui
            .io_mut()
            .update_delta_time(now - self.frame_clock);
        self.frame_clock = now;

        if let Err(err) = self.platform.prepare_frame(self.imgui.io_mut(), window) {
            log::warn!("Overlay frame setup failed: {err}");
        }

        let ui = self.imgui.frame();
        info_panel(ui, text);
        if self.cursor != ui.mouse_cursor() {
            self.cursor = ui.mouse_cursor();
            self.platform.prepare_render(ui, window);
        }

        let draw_data = self.imgui.render();
        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            return;
        }

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Overlay Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Err(err) = self.renderer.render(draw_data, queue, device, &mut pass) {
            log::warn!("Overlay render failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pointer_keyboard_and_focus_reach_overlay() {
        assert!(is_overlay_input(&WindowEvent::Focused(true)));
        assert!(!is_overlay_input(&WindowEvent::CloseRequested));
        assert!(!is_overlay_input(&WindowEvent::RedrawRequested));
        assert!(!is_overlay_input(&WindowEvent::Resized(
            winit::dpi::PhysicalSize::new(800, 600)
        )));
    }
}
