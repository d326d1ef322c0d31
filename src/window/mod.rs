use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{info, warn};
use raw_window_handle::HasRawWindowHandle;
use std::{ffi::CString, num::NonZeroU32, ptr};
use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::WindowConfig;
use crate::utils::error::{AppError, Result};

/// A window with a current OpenGL context and loaded function pointers.
///
/// Field order is drop order: the surface and context go before the window
/// they were created for.
pub struct RenderWindow {
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: Window,
}

impl RenderWindow {
    pub fn create(event_loop: &EventLoop<()>, config: &WindowConfig) -> Result<Self> {
        let window_builder = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_visible(false);

        let template = ConfigTemplateBuilder::new()
            .with_depth_size(24)
            .with_stencil_size(8);

        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                configs
                    .reduce(|best, config| {
                        if config.num_samples() > best.num_samples() {
                            config
                        } else {
                            best
                        }
                    })
                    // find_configs returns Err before the picker runs when
                    // nothing matches the template, so the iterator is never empty.
                    .expect("display offered no GL configs")
            })
            .map_err(|e| AppError::Display(e.to_string()))?;

        let window = window.ok_or(AppError::WindowCreation)?;
        info!("Window created: {:?}", window.inner_size());

        if config.centered {
            center_on_monitor(&window);
        }
        window.set_visible(true);

        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(window.raw_window_handle()));

        let gl_display = gl_config.display();
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes = window.build_surface_attributes(<_>::default());
        let gl_surface =
            unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };

        let gl_context = not_current.make_current(&gl_surface)?;

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()) as *const _,
            Err(_) => ptr::null(),
        });
        if !gl::Clear::is_loaded() || !gl::DrawElements::is_loaded() {
            return Err(AppError::FunctionLoading);
        }
        info!("OpenGL {}.{} core context ready", major, minor);

        if config.vsync {
            if let Err(e) =
                gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                warn!("Failed to enable vsync: {}", e);
            }
        }

        Ok(Self {
            gl_surface,
            gl_context,
            window,
        })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Resizes the surface and viewport. Zero-sized (minimized) windows are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let width = NonZeroU32::new(size.width);
        let height = NonZeroU32::new(size.height);
        let (Some(width), Some(height)) = (width, height) else {
            return;
        };

        self.gl_surface.resize(&self.gl_context, width, height);
        unsafe {
            gl::Viewport(0, 0, size.width as i32, size.height as i32);
        }
    }

    pub fn swap_buffers(&self) -> std::result::Result<(), glutin::error::Error> {
        self.gl_surface.swap_buffers(&self.gl_context)
    }
}

fn center_on_monitor(window: &Window) {
    let Some(monitor) = window.current_monitor().or_else(|| window.primary_monitor()) else {
        warn!("No monitor found, leaving window position to the platform");
        return;
    };

    let position = centered_position(monitor.position(), monitor.size(), window.outer_size());
    window.set_outer_position(position);
}

/// Top-left position that centers a window on a monitor. A window larger than
/// the monitor is pinned to the monitor's origin.
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (monitor.saturating_sub(window) / 2) as i32;

    PhysicalPosition::new(
        monitor_position.x + offset(monitor_size.width, window_size.width),
        monitor_position.y + offset(monitor_size.height, window_size.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_primary_monitor() {
        let position = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(position, PhysicalPosition::new(560, 240));
    }

    #[test]
    fn test_centered_on_offset_monitor() {
        let position = centered_position(
            PhysicalPosition::new(-1280, 200),
            PhysicalSize::new(1280, 1024),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(position, PhysicalPosition::new(-1040, 412));
    }

    #[test]
    fn test_oversized_window_pins_to_origin() {
        let position = centered_position(
            PhysicalPosition::new(100, 50),
            PhysicalSize::new(640, 480),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(position, PhysicalPosition::new(100, 50));
    }
}
