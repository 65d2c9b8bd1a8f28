#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Settings Panel
//!
//! Native window hosting the notification and privacy settings screen.
//! Tries the wgpu renderer first and falls back to glow (OpenGL).

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings_panel::app::SettingsApp;
use settings_panel::config::settings::AppConfig;

const APP_NAME: &str = "Settings";

fn main() -> Result<()> {
    // Initialize file logging
    let file_appender = tracing_appender::rolling::never(".", "settings-panel.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting Settings Panel");

    let next = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Application panic: {}", info);
        next(info);
    }));

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("{:#}, using defaults", anyhow::Error::from(e));
        AppConfig::default()
    });

    tracing::info!("Attempting to start with wgpu renderer");
    let wgpu_result = run_with_renderer(config.clone(), eframe::Renderer::Wgpu);

    if let Err(wgpu_err) = wgpu_result {
        tracing::warn!("wgpu renderer failed: {}. Trying glow (OpenGL) fallback...", wgpu_err);

        if let Err(glow_err) = run_with_renderer(config, eframe::Renderer::Glow) {
            tracing::error!("Both wgpu and glow renderers failed!");
            tracing::error!("wgpu error: {}", wgpu_err);
            tracing::error!("glow error: {}", glow_err);

            show_graphics_error(&wgpu_err.to_string(), &glow_err.to_string());
            return Err(anyhow::anyhow!("no usable graphics renderer"));
        }
    }

    tracing::info!("Settings Panel closed");
    Ok(())
}

/// Run the application with the specified renderer
fn run_with_renderer(config: AppConfig, renderer: eframe::Renderer) -> Result<()> {
    let renderer_name = match renderer {
        eframe::Renderer::Wgpu => "wgpu",
        eframe::Renderer::Glow => "glow",
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(APP_NAME),
        renderer,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| {
            setup_egui_style(cc);
            tracing::info!("Successfully initialized {} renderer", renderer_name);
            Ok(Box::new(SettingsApp::new(cc, config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}

/// Setup egui visual style
fn setup_egui_style(cc: &eframe::CreationContext<'_>) {
    let mut style = (*cc.egui_ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 10.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    use egui::CornerRadius;
    style.visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(6);
    style.visuals.window_corner_radius = CornerRadius::same(10);

    cc.egui_ctx.set_style(style);
}

/// Print the renderer failure and show it in a native error dialog.
fn show_graphics_error(wgpu_err: &str, glow_err: &str) {
    let message = graphics_error_message(wgpu_err, glow_err);
    eprintln!("{}", message);

    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(format!("{} - Graphics Error", APP_NAME))
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn graphics_error_message(wgpu_err: &str, glow_err: &str) -> String {
    format!(
        "Could not initialize a graphics renderer.\n\n\
        • wgpu (DirectX 12 / Vulkan / Metal): {}\n\
        • glow (OpenGL 2.0+): {}\n\n\
        Update the graphics driver or install a software OpenGL implementation.",
        truncate_error(wgpu_err, 120),
        truncate_error(glow_err, 120)
    )
}

/// Truncate error message for display
fn truncate_error(err: &str, max_len: usize) -> String {
    match err.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}...", &err[..idx]),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_error() {
        assert_eq!(truncate_error("short", 10), "short");
        assert_eq!(truncate_error("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_error("ñañaña", 2), "ña...");
    }

    #[test]
    fn test_graphics_error_message_names_both_renderers() {
        let long = "x".repeat(500);
        let message = graphics_error_message("adapter not found", &long);
        assert!(message.contains("wgpu (DirectX 12 / Vulkan / Metal): adapter not found"));
        assert!(message.contains(&format!("glow (OpenGL 2.0+): {}...", "x".repeat(120))));
        assert!(!message.contains(&long));
    }
}
