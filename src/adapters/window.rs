use crate::adapters::plotters_backend::render_rgb_buffer;
use crate::domain::model::RenderPlan;
use crate::domain::ports::{RenderBackend, RenderOutput};
use crate::utils::error::{ChartError, Result};
use show_image::{create_window, ImageInfo, ImageView, WindowOptions};

/// Shows the chart in a native window and blocks until it is closed.
///
/// `render` never returns on success: the window event loop owns the main
/// thread and the process exits when the window is destroyed.
#[derive(Debug, Clone)]
pub struct WindowBackend {
    title: String,
    size: (u32, u32),
}

impl WindowBackend {
    pub fn new(title: impl Into<String>, size: (u32, u32)) -> Self {
        Self {
            title: title.into(),
            size,
        }
    }

    fn check_display() -> Result<()> {
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            let has_surface = std::env::var_os("DISPLAY").is_some()
                || std::env::var_os("WAYLAND_DISPLAY").is_some();
            if !has_surface {
                return Err(ChartError::DisplayUnavailable {
                    message: "neither DISPLAY nor WAYLAND_DISPLAY is set".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl RenderBackend for WindowBackend {
    fn name(&self) -> &str {
        "window"
    }

    fn render(&self, plan: &RenderPlan) -> Result<RenderOutput> {
        Self::check_display()?;

        let buffer = render_rgb_buffer(plan, self.size)?;
        let (width, height) = self.size;
        let title = self.title.clone();

        tracing::info!("Opening window '{}', close it to exit", title);

        show_image::run_context(move || -> std::result::Result<(), Box<dyn std::error::Error>> {
            let window = create_window(title, WindowOptions::default())?;
            window.set_image("chart", ImageView::new(ImageInfo::rgb8(width, height), &buffer))?;
            window.wait_until_destroyed()?;
            Ok(())
        })
    }
}
