//! Pixel Pad: fixed-resolution pixel drawing
//!
//! - Logical pixel grid (64x48 by default) scaled to fit the window
//! - Pen color, eraser, pen size in grid cells
//! - Toggleable grid overlay
//! - PNG export / import, per-pixel readback and write-back

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod canvas;
mod color;
mod config;
mod error;
mod pad;
mod ui;

use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use app::AppState;
use config::{load_config, save_config, PadConfig, CONFIG_FILE};
use pad::{draw_pad, PadAction};
use ui::{MouseState, UiContext};

fn window_conf() -> Conf {
    // Only the window size is needed here; main() reloads and reports errors
    let config = load_config(CONFIG_FILE).unwrap_or_default();
    Conf {
        window_title: format!("Pixel Pad v{}", VERSION),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    info!("Pixel Pad v{}", VERSION);

    let config = match load_config(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            warn!("could not read {}: {}, using defaults", CONFIG_FILE, e);
            PadConfig::default()
        }
    };
    info!("grid {}x{}", config.grid_width, config.grid_height);

    let mut app = AppState::new(config);
    let mut ui_ctx = UiContext::new();
    let mut last_left_down = false;

    // Write settings back on close
    prevent_quit();

    loop {
        let mouse_state = MouseState::sample(last_left_down);
        last_left_down = mouse_state.left_down;
        ui_ctx.begin_frame(mouse_state);

        clear_background(Color::from_rgba(236, 236, 238, 255));

        let action = draw_pad(&mut ui_ctx, &mut app.pad_layout, &mut app.pad);
        handle_pad_action(action, &mut app);

        ui_ctx.draw_tooltip();

        if is_quit_requested() {
            if app.pad.dirty {
                warn!("closing with unsaved changes");
            }
            let config = app.pad.to_config(&app.config);
            if let Err(e) = save_config(&config, CONFIG_FILE) {
                error!("could not write {}: {}", CONFIG_FILE, e);
            }
            break;
        }

        next_frame().await;
    }
}

fn handle_pad_action(action: PadAction, app: &mut AppState) {
    let now = get_time();
    match action {
        #[cfg(not(target_arch = "wasm32"))]
        PadAction::Save => {
            let file_name = app.pad.current_file
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "drawing.png".to_string());

            let dialog = rfd::FileDialog::new()
                .add_filter("PNG files", &["png"])
                .add_filter("All files", &["*"])
                .set_file_name(file_name);

            if let Some(path) = dialog.save_file() {
                app.save_png(path, now);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        PadAction::Open => {
            let dialog = rfd::FileDialog::new().add_filter("PNG files", &["png"]);
            if let Some(path) = dialog.pick_file() {
                app.open_png(&path, now);
            }
        }
        #[cfg(target_arch = "wasm32")]
        PadAction::Save | PadAction::Open => {
            app.pad.set_status("File dialogs not available in browser", now, 3.0);
        }
        PadAction::None => {}
    }
}
