#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::config::LaunchConfig;

fn main() {
    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let (config, config_error) = match LaunchConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (LaunchConfig::default(), Some(err)),
    };

    if let Err(err) = dioxus::logger::init(config.log_level) {
        eprintln!("Failed to initialise logger: {err}");
    }
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "ignoring launch configuration, using defaults");
    }
    tracing::info!(
        version = %util::version::version_label(),
        level = %config.log_level,
        "starting dashboard"
    );

    let builder = LaunchBuilder::new().with_context(config.start_tab);

    #[cfg(feature = "desktop")]
    let builder = {
        let window = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(config.window_title.clone())
                    .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
            )
        };
        builder.with_cfg(window)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}
