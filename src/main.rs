#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use crypto_dashboard::run_app;
#[cfg(not(target_arch = "wasm32"))]
use crypto_dashboard::Cli;

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use crypto_dashboard::{DashboardError, StartupOverrides, Tab};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "the_canvas_id";

// The binary target still needs a main() even though `start` is the entry point.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn render_error(what: impl Into<String>) -> JsValue {
    let err = DashboardError::Render(what.into());
    log::error!("❌ {}", err);
    JsValue::from_str(&err.to_string())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    log::info!("🚀 Crypto Dashboard starting in WASM mode...");

    let window = web_sys::window().ok_or_else(|| render_error("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| render_error("no document on window"))?;

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| render_error(format!("canvas '{}' not found", CANVAS_ID)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| render_error(format!("'{}' is not a canvas", CANVAS_ID)))?;

    // The backend serves this page, so its origin is the API base.
    let location = window.location();
    let origin = location.origin()?;
    let overrides = StartupOverrides {
        tab: location
            .hash()
            .ok()
            .and_then(|hash| Tab::from_fragment(&hash)),
        timeframe: None,
    };

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(run_app(cc, &origin, overrides)?)),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use crypto_dashboard::config::PERSISTENCE;
    use crypto_dashboard::ui::config::UI_TEXT;
    use eframe::NativeOptions;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // Fetches are spawned onto this runtime from the UI thread
    let rt = Runtime::new().context("failed to create Tokio runtime")?;
    let _guard = rt.enter();

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app_state_path)),
        ..Default::default()
    };

    let overrides = args.overrides();
    let api_base = args.api_base;

    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, &api_base, overrides)?)),
    )
    .map_err(|err| anyhow::anyhow!("dashboard exited with an error: {err}"))
}
